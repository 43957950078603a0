//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses.
///
/// The store identifier `_id` is exposed as a hex string under `id`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "Lucas")]
    pub name: String,
    #[schema(example = "contatolsr@hotmail.com")]
    pub email: String,
    #[schema(example = "123456")]
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_renames_identifier() {
        let id = ObjectId::new();
        let user = User::new("Lucas", "contatolsr@hotmail.com", "123456").with_id(id);

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], id.to_hex());
        assert!(json.get("_id").is_none());
        assert_eq!(json["name"], "Lucas");
        assert_eq!(json["email"], "contatolsr@hotmail.com");
        assert_eq!(json["password"], "123456");
    }
}
