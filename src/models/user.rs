use crate::validation::{Credentials, Verdict};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /users`.
///
/// `password` is only validated; it is never persisted. Every field defaults
/// to empty so that a missing email or password is reported as a verdict.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub about: String,
    pub email: String,
    pub avatar: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Builds the document to persist under the already allocated `slug`.
    pub fn into_record(self, slug: String) -> UserRecord {
        UserRecord {
            name: self.name,
            about: self.about,
            email: self.email,
            avatar: self.avatar,
            slug,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// A user document as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub about: String,
    pub email: String,
    pub avatar: String,
    pub slug: String,
    pub created_at: String,
}

/// Body of a `201 Created` answer to `POST /users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserCreatedResponse {
    pub message: String,
    pub verdict: Verdict,
    /// Public profile URL derived from the slug.
    pub url: String,
    pub data: UserRecord,
}

impl UserCreatedResponse {
    pub fn success(verdict: Verdict, url: String, data: UserRecord) -> Self {
        Self {
            message: "success".to_string(),
            verdict,
            url,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_user_request_deserialization() {
        let json = r#"{
            "name": "Jacques Cousteau",
            "about": "Sailor, researcher",
            "email": "jacques@example.com",
            "avatar": "https://example.com/avatar.jpg",
            "password": "1amAp0k3m0n%"
        }"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Jacques Cousteau");
        assert_eq!(request.about, "Sailor, researcher");
        assert_eq!(request.avatar, "https://example.com/avatar.jpg");

        let credentials = request.credentials();
        assert_eq!(credentials.email, "jacques@example.com");
        assert_eq!(credentials.password, "1amAp0k3m0n%");
    }

    #[test]
    fn test_optional_profile_fields_default_to_empty() {
        let json = r#"{"name": "Bob", "email": "bob@yandex.com", "password": "x"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.about, "");
        assert_eq!(request.avatar, "");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let no_password = r#"{"name": "Bob", "email": "bob@yandex.com"}"#;
        let request: CreateUserRequest = serde_json::from_str(no_password).unwrap();
        assert_eq!(request.password, "");

        let request: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
    }

    #[test]
    fn test_wrong_field_types_are_rejected() {
        let numeric_email = r#"{"name": "Bob", "email": 42, "password": "x"}"#;
        assert!(serde_json::from_str::<CreateUserRequest>(numeric_email).is_err());
    }

    #[test]
    fn test_record_keeps_submitted_fields_and_drops_password() {
        let request = CreateUserRequest {
            name: "  Bob  ".to_string(),
            about: "about".to_string(),
            email: "Bob@Yandex.com".to_string(),
            avatar: "a.png".to_string(),
            password: "1amAp0k3m0n%".to_string(),
        };
        let record = request.into_record("bob".to_string());
        assert_eq!(record.name, "  Bob  ");
        assert_eq!(record.email, "Bob@Yandex.com");
        assert_eq!(record.slug, "bob");

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_created_response_shape() {
        let record = UserRecord {
            name: "Bob".to_string(),
            about: String::new(),
            email: "bob@yandex.com".to_string(),
            avatar: String::new(),
            slug: "bob".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let response = UserCreatedResponse::success(
            Verdict::accepted(),
            "http://localhost:3001/users/bob".to_string(),
            record,
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "success");
        assert_eq!(json["verdict"]["isValidated"], json!(true));
        assert_eq!(json["url"], "http://localhost:3001/users/bob");
        assert_eq!(json["data"]["slug"], "bob");
    }
}
