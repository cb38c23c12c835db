use serde::{Deserialize, Serialize};

use super::common::Pagination;

/// Personal name parts of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
}

impl UserName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            middle: None,
        }
    }
}

/// Kind of a user contact entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Email,
    PhoneExtension,
    Phone,
    Site,
    Icq,
    Twitter,
    Skype,
}

/// A contact entry as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserContact {
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub value: String,
    #[serde(default)]
    pub main: bool,
    #[serde(default)]
    pub alias: bool,
    /// Generated by the service (e.g. the primary mailbox); cannot be edited.
    #[serde(default)]
    pub synthetic: bool,
}

/// A contact entry sent on create/update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub value: String,
}

impl NewContact {
    pub fn new(contact_type: ContactType, value: impl Into<String>) -> Self {
        Self {
            contact_type,
            value: value.into(),
        }
    }
}

/// A user as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nickname: String,
    #[serde(default)]
    pub name: UserName,
    #[serde(default)]
    pub department_id: i64,
    pub email: Option<String>,
    pub about: Option<String>,
    pub avatar_id: Option<String>,
    pub birthday: Option<String>,
    pub external_id: Option<String>,
    pub gender: Option<String>,
    pub language: Option<String>,
    pub position: Option<String>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub contacts: Vec<UserContact>,
    #[serde(default)]
    pub groups: Vec<i64>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_dismissed: bool,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub is_robot: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One page of users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserList {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Request payload for creating a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub department_id: i64,
    pub nickname: String,
    pub password: String,
    pub name: UserName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<NewContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl CreateUser {
    pub fn new(
        nickname: impl Into<String>,
        password: impl Into<String>,
        name: UserName,
        department_id: i64,
    ) -> Self {
        Self {
            department_id,
            nickname: nickname.into(),
            password: password.into(),
            name,
            ..Self::default()
        }
    }
}

/// Request payload for updating a user. Only the fields that are set are
/// sent. `contacts` replaces the editable contact list when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<NewContact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<UserName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_change_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}
