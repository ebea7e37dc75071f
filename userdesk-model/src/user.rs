//! User record projections.

use crate::ids::UserId;

/// A user as returned by the collection endpoint and edited in the admin
/// table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserSummary {
    /// Server-assigned identifier
    pub id: UserId,
    /// Full display name
    pub name: String,
    /// Login handle
    pub username: String,
    /// Email address
    pub email: String,
}

/// A user as returned by the single-record endpoint.
///
/// Carries contact details the summary lacks, and no username.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserDetail {
    /// Server-assigned identifier
    pub id: UserId,
    /// Full display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Free-form phone number
    pub phone: String,
    /// Postal address
    pub address: Address,
}

/// Postal address embedded in [`UserDetail`]. Fields the server sends
/// beyond these are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Street
    pub street: String,
    /// City
    pub city: String,
}

impl Address {
    /// `"street, city"` as shown on the detail screen.
    pub fn display_line(&self) -> String {
        format!("{}, {}", self.street, self.city)
    }
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewUser {
    /// Full display name
    pub name: String,
    /// Login handle
    pub username: String,
    /// Email address
    pub email: String,
}

impl NewUser {
    /// Attach a server-assigned id, producing the list projection.
    pub fn with_id(self, id: UserId) -> UserSummary {
        UserSummary {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn summary_ignores_extra_server_fields() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org"
        }"#;

        let user: UserSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.username, "Bret");
    }

    #[test]
    fn detail_decodes_nested_address() {
        let raw = r#"{
            "id": 42,
            "name": "Ann",
            "username": "ann1",
            "email": "ann@x.com",
            "phone": "555",
            "address": { "street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough" }
        }"#;

        let user: UserDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, UserId(42));
        assert_eq!(user.address.display_line(), "Kulas Light, Gwenborough");
    }

    #[test]
    fn new_user_serializes_without_id() {
        let draft = NewUser {
            name: "Bob T".into(),
            username: "bobt".into(),
            email: "bob@x.com".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["username"], "bobt");
    }
}
