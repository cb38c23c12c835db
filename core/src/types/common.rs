use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of entity that can belong to a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    User,
    Group,
    Department,
}

impl MemberType {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberType::User => "user",
            MemberType::Group => "group",
            MemberType::Department => "department",
        }
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed reference to a group member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberRef {
    pub id: String,
    #[serde(rename = "type")]
    pub member_type: MemberType,
}

impl MemberRef {
    pub fn new(member_type: MemberType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_type,
        }
    }
}

/// Page counters carried by every list envelope.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub total: u64,
}

/// `page` / `perPage` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
}

impl ListParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

/// Request payload for adding an alias to a department or user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddAlias {
    pub alias: String,
}

impl AddAlias {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}

/// Confirmation returned when an alias is removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasDeleted {
    pub alias: String,
    pub removed: bool,
}

/// Confirmation returned when an entity is removed. `I` is the identifier
/// type: `i64` for departments and groups, `String` for users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deleted<I> {
    pub id: I,
    pub removed: bool,
}
