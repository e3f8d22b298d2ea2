use crate::render::RenderError;
use crate::validation::ValidationError;
use thiserror::Error;

/// Status code carried by every [`ApiError::Forbidden`], whatever the
/// transport actually returned.
pub const FORBIDDEN_CODE: u16 = 403;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("invalid argument: {0}")]
  InvalidArgument(#[from] ValidationError),

  #[error("{message}")]
  NotFound { message: String, status: u16 },

  #[error("{message}")]
  Forbidden { message: String },

  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("failed to decode response: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("failed to decode texture payload: {0}")]
  Base64(#[from] base64::DecodeError),

  #[error("malformed response: {0}")]
  MalformedPayload(String),

  #[error("failed to render head: {0}")]
  Render(#[from] RenderError),
}

/// Coarse classification of an [`ApiError`], one per remediation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Fix the input
  InvalidArgument,
  /// The account or resource does not exist
  NotFound,
  /// Re-prompt for credentials
  Forbidden,
  /// Network failure or error status; retrying may help
  Transport,
  /// The remote answered with a shape we cannot read
  Decode,
}

impl ApiError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      ApiError::InvalidArgument(_) => ErrorKind::InvalidArgument,
      ApiError::NotFound { .. } => ErrorKind::NotFound,
      ApiError::Forbidden { .. } => ErrorKind::Forbidden,
      ApiError::Transport(_) => ErrorKind::Transport,
      ApiError::Decode(_)
      | ApiError::Base64(_)
      | ApiError::MalformedPayload(_)
      | ApiError::Render(_) => ErrorKind::Decode,
    }
  }

  /// Diagnostic status code, when one applies.
  pub fn code(&self) -> Option<u16> {
    match self {
      ApiError::NotFound { status, .. } => Some(*status),
      ApiError::Forbidden { .. } => Some(FORBIDDEN_CODE),
      ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
      _ => None,
    }
  }
}

pub type Result<T> = std::result::Result<T, ApiError>;
