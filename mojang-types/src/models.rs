use serde::Serialize;

/// Health of a single Mojang service as reported by the status host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
  Green,
  Yellow,
  Red,
}

impl StatusLevel {
  /// Case-insensitive parse; anything outside green/yellow/red is `None`.
  pub fn parse(status: &str) -> Option<Self> {
    match status.to_ascii_lowercase().as_str() {
      "green" => Some(Self::Green),
      "yellow" => Some(Self::Yellow),
      "red" => Some(Self::Red),
      _ => None,
    }
  }
}

/// One service/status pair from the status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
  name: String,
  status: String,
}

impl ServiceStatus {
  pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      status: status.into(),
    }
  }

  /// Service host name (e.g. "session.minecraft.net")
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Raw status string exactly as the remote reported it
  pub fn status(&self) -> &str {
    &self.status
  }

  pub fn level(&self) -> Option<StatusLevel> {
    StatusLevel::parse(&self.status)
  }
}

/// Base account identity. The uuid is absent when only a name is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct User {
  name: String,
  uuid: Option<String>,
}

impl User {
  pub fn new(name: impl Into<String>, uuid: Option<String>) -> Self {
    Self {
      name: name.into(),
      uuid,
    }
  }

  /// A user whose uuid has been resolved.
  pub fn with_uuid(name: impl Into<String>, uuid: impl Into<String>) -> Self {
    Self::new(name, Some(uuid.into()))
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn uuid(&self) -> Option<&str> {
    self.uuid.as_deref()
  }
}

/// Texture section of a session profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Textures {
  /// The texture payload was decoded into its skin and cape URLs.
  Decoded {
    skin_url: String,
    cape_url: Option<String>,
  },
  /// The texture payload was left as the remote's base64 string.
  Encoded(String),
  /// The profile carried no texture property.
  Absent,
}

/// Public profile of an account: identity plus skin/cape textures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
  user: User,
  textures: Textures,
}

impl Profile {
  pub fn new(user: User, textures: Textures) -> Self {
    Self { user, textures }
  }

  pub fn user(&self) -> &User {
    &self.user
  }

  pub fn name(&self) -> &str {
    self.user.name()
  }

  pub fn uuid(&self) -> Option<&str> {
    self.user.uuid()
  }

  pub fn textures(&self) -> &Textures {
    &self.textures
  }

  /// Skin URL, available only when textures were decoded
  pub fn skin_url(&self) -> Option<&str> {
    match &self.textures {
      Textures::Decoded { skin_url, .. } => Some(skin_url),
      Textures::Encoded(_) | Textures::Absent => None,
    }
  }

  /// Cape URL; `None` when the account has no cape or textures were not decoded
  pub fn cape_url(&self) -> Option<&str> {
    match &self.textures {
      Textures::Decoded { cape_url, .. } => cape_url.as_deref(),
      Textures::Encoded(_) | Textures::Absent => None,
    }
  }
}

/// An account that has logged in. The access token is the bearer credential
/// for the authenticated endpoints.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
  user: User,
  #[serde(skip_serializing)]
  access_token: String,
}

impl AuthenticatedUser {
  pub fn new(user: User, access_token: impl Into<String>) -> Self {
    Self {
      user,
      access_token: access_token.into(),
    }
  }

  pub fn user(&self) -> &User {
    &self.user
  }

  pub fn name(&self) -> &str {
    self.user.name()
  }

  pub fn uuid(&self) -> Option<&str> {
    self.user.uuid()
  }

  pub fn access_token(&self) -> &str {
    &self.access_token
  }
}

impl std::fmt::Debug for AuthenticatedUser {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AuthenticatedUser")
      .field("user", &self.user)
      .field("access_token", &"<redacted>")
      .finish()
  }
}

/// The signed-in account as reported by the services host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInformation {
  uuid: String,
  name: String,
  skin_url: String,
}

impl ProfileInformation {
  pub fn new(uuid: impl Into<String>, name: impl Into<String>, skin_url: impl Into<String>) -> Self {
    Self {
      uuid: uuid.into(),
      name: name.into(),
      skin_url: skin_url.into(),
    }
  }

  pub fn uuid(&self) -> &str {
    &self.uuid
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn skin_url(&self) -> &str {
    &self.skin_url
  }
}

/// A name an account has used and when it switched to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameHistoryEntry {
  name: String,
  /// Unix timestamp (seconds). `None` for the account's original name.
  changed_to_at: Option<i64>,
}

impl NameHistoryEntry {
  pub fn new(name: impl Into<String>, changed_to_at: Option<i64>) -> Self {
    Self {
      name: name.into(),
      changed_to_at,
    }
  }

  /// Build from the remote's millisecond timestamp, truncating to seconds.
  pub fn from_millis(name: impl Into<String>, changed_to_at_ms: Option<i64>) -> Self {
    Self::new(name, changed_to_at_ms.map(|ms| ms / 1000))
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn changed_to_at(&self) -> Option<i64> {
    self.changed_to_at
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_level_parse_is_case_insensitive() {
    assert_eq!(StatusLevel::parse("green"), Some(StatusLevel::Green));
    assert_eq!(StatusLevel::parse("YELLOW"), Some(StatusLevel::Yellow));
    assert_eq!(StatusLevel::parse("Red"), Some(StatusLevel::Red));
    assert_eq!(StatusLevel::parse("blue"), None);
    assert_eq!(StatusLevel::parse(""), None);
  }

  #[test]
  fn test_status_level_ordering() {
    assert!(StatusLevel::Green < StatusLevel::Yellow);
    assert!(StatusLevel::Yellow < StatusLevel::Red);
  }

  #[test]
  fn test_name_history_from_millis_truncates() {
    let entry = NameHistoryEntry::from_millis("Bar", Some(1414059749000));
    assert_eq!(entry.changed_to_at(), Some(1414059749));

    let entry = NameHistoryEntry::from_millis("Bar", Some(1414059749999));
    assert_eq!(entry.changed_to_at(), Some(1414059749));
  }

  #[test]
  fn test_name_history_original_name_has_no_timestamp() {
    let entry = NameHistoryEntry::from_millis("Foo", None);
    assert_eq!(entry.changed_to_at(), None);
  }

  #[test]
  fn test_profile_texture_accessors() {
    let user = User::with_uuid("Steve", "8667ba71b85a4004af54457a9734eed7");
    let decoded = Profile::new(
      user.clone(),
      Textures::Decoded {
        skin_url: "A".to_string(),
        cape_url: Some("B".to_string()),
      },
    );
    assert_eq!(decoded.skin_url(), Some("A"));
    assert_eq!(decoded.cape_url(), Some("B"));
    assert_eq!(decoded.uuid(), Some("8667ba71b85a4004af54457a9734eed7"));

    let encoded = Profile::new(user, Textures::Encoded("ewo=".to_string()));
    assert_eq!(encoded.skin_url(), None);
    assert_eq!(encoded.cape_url(), None);

    let absent = Profile::new(User::with_uuid("Steve", "abc"), Textures::Absent);
    assert_eq!(absent.skin_url(), None);
  }

  #[test]
  fn test_authenticated_user_debug_hides_token() {
    let user = AuthenticatedUser::new(User::with_uuid("Steve", "abc"), "secret-token");
    let printed = format!("{:?}", user);
    assert!(!printed.contains("secret-token"));
    assert_eq!(user.access_token(), "secret-token");
  }
}
