use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::Pagination;

/// A department as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: i64,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub head_id: Option<String>,
    pub label: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub members_count: u64,
    pub created_at: Option<String>,
}

/// One page of departments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentList {
    pub departments: Vec<Department>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Request payload for creating a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    pub name: String,
    pub parent_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_id: Option<String>,
    /// Mailbox name of the department; becomes `label@domain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CreateDepartment {
    pub fn new(name: impl Into<String>, parent_id: i64) -> Self {
        Self {
            name: name.into(),
            parent_id,
            ..Self::default()
        }
    }
}

/// Request payload for updating a department. Only the fields that are set
/// are sent; the rest remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Sort key for department listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentOrder {
    Id,
    Name,
}

impl DepartmentOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            DepartmentOrder::Id => "id",
            DepartmentOrder::Name => "name",
        }
    }
}

impl fmt::Display for DepartmentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for listing departments.
///
/// `parent_id` and `order_by` are left out of the query string when `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentListParams {
    pub page: u32,
    pub per_page: u32,
    pub parent_id: Option<i64>,
    pub order_by: Option<DepartmentOrder>,
}

impl Default for DepartmentListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            parent_id: None,
            order_by: None,
        }
    }
}
