//! User domain model.
//!
//! There is no authentication surface in this service; users exist so that
//! orders and chat transcripts have an owner.

use serde::Serialize;

use dastak_core::UserId;

/// A registered user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique username.
    pub username: String,
    /// Credential material. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Insertion shape for [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
