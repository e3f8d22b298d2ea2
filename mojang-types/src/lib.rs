mod collections;
mod models;

pub use collections::{NameHistoryCollection, ServiceStatusCollection};
pub use models::{
  AuthenticatedUser, NameHistoryEntry, Profile, ProfileInformation, ServiceStatus, StatusLevel,
  Textures, User,
};
