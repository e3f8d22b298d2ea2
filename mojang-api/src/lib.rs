pub mod config;
mod error;
pub mod render;
mod session;
pub mod validation;
mod wire;

pub use config::ApiConfig;
pub use error::{ApiError, ErrorKind, FORBIDDEN_CODE, Result};
pub use mojang_types::{
    AuthenticatedUser, NameHistoryCollection, NameHistoryEntry, Profile, ProfileInformation,
    ServiceStatus, ServiceStatusCollection, StatusLevel, Textures, User,
};
pub use render::HeadEncoding;
pub use session::Session;

use std::collections::HashMap;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use validation::{ValidationError, validate_batch, validate_path_segment, validate_player_name};

/// Availability status the services host returns for a taken name.
const NAME_TAKEN: &str = "DUPLICATE";

/// Client for the Mojang web services.
///
/// Every method issues its own request(s) and holds no state between calls,
/// so one instance can be cloned and shared across tasks freely.
#[derive(Debug, Clone)]
pub struct MojangApi {
    client: Client,
    config: ApiConfig,
}

impl MojangApi {
    /// Client against the public Mojang hosts with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(ApiConfig::default())
    }

    /// Build the HTTP client from the configured timeout and user agent.
    pub fn from_config(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        info!(
            "Mojang client ready: api={}, session={}, timeout={}s",
            config.api_url,
            config.session_url,
            config.request_timeout.as_secs()
        );
        Ok(Self { client, config })
    }

    /// Use a caller-built HTTP client (proxies, TLS settings, test servers).
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // ========================================================================
    // Public endpoints
    // ========================================================================

    /// Status of the Mojang services, one entry per reported service.
    pub async fn fetch_service_status(&self) -> Result<ServiceStatusCollection> {
        let url = endpoint(&self.config.status_url, &["check"])?;
        let response = self.send(self.client.get(url)).await?;
        let body: wire::StatusResponse = decode(response).await?;

        let mut services = ServiceStatusCollection::new();
        for service in body {
            for (name, status) in service {
                let status = status.as_str().ok_or_else(|| {
                    ApiError::MalformedPayload(format!("service {} has a non-string status", name))
                })?;
                services.add(ServiceStatus::new(name, status));
            }
        }

        Ok(services)
    }

    /// Resolve a player name to its uuid.
    ///
    /// A response without an `id` means the user does not exist and yields
    /// [`ApiError::NotFound`] carrying the HTTP status the remote sent.
    pub async fn resolve_uuid(&self, name: &str) -> Result<String> {
        validate_player_name(name)?;
        validate_path_segment(name)?;

        let url = endpoint(&self.config.api_url, &["users", "profiles", "minecraft", name])?;
        let response = self.send(self.client.get(url)).await?;
        let status = response.status();

        // 404 comes with an error body and is a miss, not a transport failure
        let response = if status == StatusCode::NOT_FOUND {
            response
        } else {
            response.error_for_status()?
        };

        let body = response.bytes().await?;
        let id = if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            match serde_json::from_slice::<wire::LookupResponse>(&body) {
                Ok(lookup) => lookup.id,
                // 404 pages are not always JSON
                Err(_) if status == StatusCode::NOT_FOUND => None,
                Err(err) => return Err(err.into()),
            }
        };

        match id.filter(|id| !id.is_empty()) {
            Some(id) => Ok(id),
            None => {
                warn!(player = name, status = status.as_u16(), "user not found");
                Err(ApiError::NotFound {
                    message: format!("User {} not found", name),
                    status: status.as_u16(),
                })
            }
        }
    }

    /// Fetch a profile and, when `decode_textures` is set, unpack its
    /// base64 texture payload into skin and cape URLs.
    pub async fn fetch_profile(&self, uuid: &str, decode_textures: bool) -> Result<Profile> {
        validate_path_segment(uuid)?;

        let url = endpoint(&self.config.session_url, &["session", "minecraft", "profile", uuid])?;
        let response = self.send(self.client.get(url)).await?;

        if response.status() == StatusCode::NO_CONTENT {
            warn!(uuid, "profile not found");
            return Err(ApiError::NotFound {
                message: format!("Profile {} not found", uuid),
                status: StatusCode::NO_CONTENT.as_u16(),
            });
        }

        let profile: wire::SessionProfile = decode(response).await?;
        let textures = profile.textures(decode_textures)?;

        Ok(Profile::new(User::with_uuid(profile.name, profile.id), textures))
    }

    pub async fn resolve_skin_url(&self, uuid: &str) -> Result<String> {
        let profile = self.fetch_profile(uuid, true).await?;
        profile
            .skin_url()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::MalformedPayload(format!("profile {} has no skin", uuid)))
    }

    /// Resolve up to ten names at once, as users in response order.
    /// Names the remote does not know are simply absent.
    pub async fn resolve_uuids<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<User>> {
        let found = self.lookup_batch(names).await?;
        Ok(found
            .into_iter()
            .map(|entry| User::with_uuid(entry.name, entry.id))
            .collect())
    }

    /// Resolve up to ten names at once, as a name -> uuid map.
    pub async fn resolve_uuid_map<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<HashMap<String, String>> {
        let found = self.lookup_batch(names).await?;
        Ok(found
            .into_iter()
            .map(|entry| (entry.name, entry.id))
            .collect())
    }

    async fn lookup_batch<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<wire::NameId>> {
        // Checked before any request is built
        validate_batch(names)?;
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        let url = endpoint(&self.config.api_url, &["profiles", "minecraft"])?;
        let response = self.send(self.client.post(url).json(&names)).await?;
        decode(response).await
    }

    /// Every name the account has used. Timestamps are converted from
    /// milliseconds to seconds; the original name has none.
    pub async fn fetch_name_history(&self, uuid: &str) -> Result<NameHistoryCollection> {
        validate_path_segment(uuid)?;

        let url = endpoint(&self.config.api_url, &["user", "profiles", uuid, "names"])?;
        let response = self.send(self.client.get(url)).await?;
        let items: Vec<wire::NameHistoryItem> = decode(response).await?;

        Ok(items
            .into_iter()
            .map(|item| NameHistoryEntry::from_millis(item.name, item.changed_to_at))
            .collect())
    }

    /// Download a skin and render the player's head from it.
    pub async fn render_head(
        &self,
        skin_url: &str,
        size: u32,
        encoding: HeadEncoding,
    ) -> Result<Vec<u8>> {
        let response = self.send(self.client.get(skin_url)).await?;
        let skin = response.error_for_status()?.bytes().await?;
        Ok(render::render_head(&skin, size, encoding)?)
    }

    /// Skin URL of a user resolved by an earlier lookup.
    pub async fn skin_url_of(&self, user: &User) -> Result<String> {
        self.resolve_skin_url(uuid_of(user)?).await
    }

    /// Head image of a user resolved by an earlier lookup.
    pub async fn render_user_head(
        &self,
        user: &User,
        size: u32,
        encoding: HeadEncoding,
    ) -> Result<Vec<u8>> {
        let skin_url = self.skin_url_of(user).await?;
        self.render_head(&skin_url, size, encoding).await
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Log in with account credentials.
    ///
    /// Any response body carrying an `errorMessage` is a rejection and becomes
    /// [`ApiError::Forbidden`] with that message verbatim and code 403,
    /// regardless of the HTTP status actually returned.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        let url = endpoint(&self.config.auth_url, &["authenticate"])?;
        let body = wire::AuthenticateRequest {
            agent: wire::Agent::default(),
            username: email,
            password,
        };
        let response = self.send(self.client.post(url).json(&body)).await?;

        let status = response.status();
        let failure = response.error_for_status_ref().err();
        let bytes = response.bytes().await?;

        if let Ok(rejection) = serde_json::from_slice::<wire::AuthenticateError>(&bytes) {
            warn!(
                status = status.as_u16(),
                error = rejection.error.as_deref().unwrap_or("unknown"),
                "authentication rejected"
            );
            return Err(ApiError::Forbidden {
                message: rejection.error_message,
            });
        }
        if let Some(err) = failure {
            return Err(err.into());
        }

        let success: wire::AuthenticateResponse = serde_json::from_slice(&bytes)?;
        let profile = success.selected_profile;
        Ok(AuthenticatedUser::new(
            User::with_uuid(profile.name, profile.id),
            success.access_token,
        ))
    }

    /// Authenticate and wrap the result in a [`Session`] for the
    /// token-bearing endpoints.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session<'_>> {
        let user = self.authenticate(email, password).await?;
        Ok(Session::new(self, user))
    }

    /// The account the bearer token belongs to.
    pub async fn fetch_account_profile(&self, token: &str) -> Result<ProfileInformation> {
        let url = endpoint(&self.config.services_url, &["minecraft", "profile"])?;
        let response = self.send(self.client.get(url).bearer_auth(token)).await?;
        let profile: wire::AccountProfile = decode(response).await?;

        let skin = profile.skins.into_iter().next().ok_or_else(|| {
            ApiError::MalformedPayload(format!("account {} has no skins", profile.id))
        })?;

        Ok(ProfileInformation::new(profile.id, profile.name, skin.url))
    }

    /// Whether a name can be claimed. Only an explicit `DUPLICATE` status
    /// counts as taken; every other status reads as available.
    pub async fn check_name_availability(&self, name: &str, token: &str) -> Result<bool> {
        validate_player_name(name)?;
        validate_path_segment(name)?;

        let url = endpoint(
            &self.config.services_url,
            &["minecraft", "profile", "name", name, "available"],
        )?;
        let response = self.send(self.client.get(url).bearer_auth(token)).await?;
        let body: wire::AvailabilityResponse = decode(response).await?;

        debug!(player = name, status = %body.status, "name availability");
        Ok(body.status != NAME_TAKEN)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let response = self.client.execute(request).await?;
        debug!(%method, %url, status = %response.status(), "received response");
        Ok(response)
    }
}

/// Append `segments` to a configured base URL, percent-encoding each one so
/// caller input cannot add path levels, a query, or a fragment.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    let invalid = || ValidationError::InvalidBaseUrl(base.to_string());
    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Fail on error statuses, then parse the body against its schema.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.error_for_status()?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn uuid_of(user: &User) -> Result<&str> {
    user.uuid()
        .ok_or_else(|| ValidationError::MissingUuid(user.name().to_string()).into())
}
