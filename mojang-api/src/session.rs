use crate::error::Result;
use crate::{AuthenticatedUser, MojangApi, ProfileInformation, uuid_of};

/// A logged-in account bound to the client that authenticated it.
///
/// The token is handed to the client explicitly on every call; nothing is
/// cached or refreshed.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    api: &'a MojangApi,
    user: AuthenticatedUser,
}

impl<'a> Session<'a> {
    pub fn new(api: &'a MojangApi, user: AuthenticatedUser) -> Self {
        Self { api, user }
    }

    pub fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    pub fn access_token(&self) -> &str {
        self.user.access_token()
    }

    pub async fn account_profile(&self) -> Result<ProfileInformation> {
        self.api.fetch_account_profile(self.access_token()).await
    }

    pub async fn is_name_available(&self, name: &str) -> Result<bool> {
        self.api
            .check_name_availability(name, self.access_token())
            .await
    }

    /// Skin URL of the logged-in account, via the public session host.
    pub async fn skin_url(&self) -> Result<String> {
        self.api
            .resolve_skin_url(uuid_of(self.user.user())?)
            .await
    }

    pub fn into_user(self) -> AuthenticatedUser {
        self.user
    }
}
