use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::UpdateUserRequest;

/// User document stored in MongoDB.
///
/// The identifier is `None` until the store assigns one on insert and is
/// never changed afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    // Stored as received, no hashing.
    #[serde(default)]
    pub password: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn with_id(self, id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Shallow merge: every field present in `changes` replaces the stored
    /// value, absent fields are kept. The identifier is never touched.
    pub fn merge(self, changes: UpdateUserRequest) -> Self {
        Self {
            id: self.id,
            name: changes.name.unwrap_or(self.name),
            email: changes.email.unwrap_or(self.email),
            password: changes.password.unwrap_or(self.password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_merge_overrides_only_present_fields() {
        let id = ObjectId::new();
        let user = User::new("Lucas", "contatolsr@hotmail.com", "123456").with_id(id);

        let merged = user.merge(UpdateUserRequest {
            name: Some("Novo Nome".to_string()),
            email: None,
            password: None,
        });

        assert_eq!(merged.id, Some(id));
        assert_eq!(merged.name, "Novo Nome");
        assert_eq!(merged.email, "contatolsr@hotmail.com");
        assert_eq!(merged.password, "123456");
    }

    #[test]
    fn test_document_uses_store_identifier_field() {
        let id = ObjectId::new();
        let user = User::new("Ana", "ana@example.com", "abcdef").with_id(id);

        let document = bson::to_document(&user).unwrap();
        assert_eq!(document.get_object_id("_id").unwrap(), id);
        assert!(!document.contains_key("id"));
    }

    #[test]
    fn test_document_without_identifier_omits_field() {
        let user = User::new("Ana", "ana@example.com", "abcdef");

        let document = bson::to_document(&user).unwrap();
        assert!(!document.contains_key("_id"));
    }
}
