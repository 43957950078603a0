//! User-related request models.
//!
//! Bodies are taken as given: missing fields fall back to defaults and
//! unknown fields (including any client-sent `id` or `_id`) are ignored.

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::models::User;

/// Request payload for creating a user
#[derive(Debug, Deserialize, Clone, Default, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[serde(default)]
    #[schema(example = "Lucas")]
    pub name: String,
    /// E-mail address
    #[serde(default)]
    #[schema(example = "contatolsr@hotmail.com")]
    pub email: String,
    /// Password, stored as given
    #[serde(default)]
    #[schema(example = "123456")]
    pub password: String,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User::new(req.name, req.email, req.password)
    }
}

/// Request payload for updating a user; present fields overwrite the stored ones
///
/// An absent field keeps the stored value. An explicit `null` is rejected, as
/// it would otherwise be indistinguishable from an absent field.
#[derive(Debug, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "present_string")]
    #[schema(example = "Novo Nome")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    #[schema(example = "novoemail@example.com")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub password: Option<String>,
}

fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}
