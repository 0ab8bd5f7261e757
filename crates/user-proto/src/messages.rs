use serde::{Deserialize, Serialize};

/// Request carrying every user field. Each RPC reads the subset it needs;
/// absent fields decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
}

impl UserRequest {
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
}

impl UserResponse {
    /// Acknowledgement for a removed row: only the id is populated.
    pub fn deleted(id: i32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserList {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_request_fields_take_defaults() {
        let req: UserRequest = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(req, UserRequest::with_id(7));
        assert!(!req.is_active);
        assert!(req.name.is_empty());
    }

    #[test]
    fn deleted_ack_carries_only_id() {
        let ack = UserResponse::deleted(2);
        assert_eq!(ack.id, 2);
        assert_eq!(ack.name, "");
        assert_eq!(ack.email, "");
        assert_eq!(ack.phone_number, "");
        assert!(!ack.is_active);
    }

    #[test]
    fn empty_accepts_an_empty_object() {
        let _: Empty = serde_json::from_str("{}").unwrap();
    }
}
