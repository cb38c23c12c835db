//! Wire shapes served by the mock. Defined independently of the client
//! crate so that integration tests catch schema drift between the two.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: i64,
    pub message: String,
    pub details: Vec<serde_json::Value>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub total: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub parent_id: i64,
    pub description: String,
    pub external_id: String,
    pub head_id: String,
    pub label: String,
    pub email: String,
    pub aliases: Vec<String>,
    pub members_count: u64,
}

impl Department {
    pub fn new(id: i64, name: String, parent_id: i64) -> Self {
        Self {
            id,
            name,
            parent_id,
            description: String::new(),
            external_id: String::new(),
            head_id: String::new(),
            label: String::new(),
            email: String::new(),
            aliases: Vec::new(),
            members_count: 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    pub name: String,
    pub parent_id: i64,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub head_id: Option<String>,
    pub label: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartment {
    pub name: Option<String>,
    pub parent_id: Option<i64>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub head_id: Option<String>,
    pub label: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DepartmentList {
    pub departments: Vec<Department>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub description: String,
    pub external_id: String,
    pub label: String,
    pub email: String,
    pub aliases: Vec<String>,
    pub admin_ids: Vec<String>,
    pub author_id: String,
    pub member_of: Vec<i64>,
    pub members: Vec<Member>,
    pub members_count: u64,
    pub removed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    pub name: String,
    #[serde(default)]
    pub admin_ids: Vec<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub label: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroup {
    pub name: Option<String>,
    pub admin_ids: Option<Vec<String>>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub label: Option<String>,
    pub members: Option<Vec<Member>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupList {
    pub groups: Vec<Group>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberAdded {
    pub added: bool,
    pub id: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUnit {
    pub id: i64,
    pub name: String,
    pub members_count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUser {
    pub id: String,
    pub nickname: String,
    pub department_id: i64,
    pub email: String,
    pub gender: String,
    pub position: String,
    pub avatar_id: String,
    pub name: UserName,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GroupMembers {
    pub departments: Vec<ShortUnit>,
    pub groups: Vec<ShortUnit>,
    pub users: Vec<ShortUser>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub middle: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "type")]
    pub contact_type: String,
    pub value: String,
    pub main: bool,
    pub alias: bool,
    pub synthetic: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContact {
    #[serde(rename = "type")]
    pub contact_type: String,
    pub value: String,
}

impl From<NewContact> for Contact {
    fn from(contact: NewContact) -> Self {
        Self {
            contact_type: contact.contact_type,
            value: contact.value,
            main: false,
            alias: false,
            synthetic: false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nickname: String,
    pub name: UserName,
    pub department_id: i64,
    pub email: String,
    pub about: String,
    pub avatar_id: String,
    pub birthday: String,
    pub external_id: String,
    pub gender: String,
    pub language: String,
    pub position: String,
    pub timezone: String,
    pub aliases: Vec<String>,
    pub contacts: Vec<Contact>,
    pub groups: Vec<i64>,
    pub is_admin: bool,
    pub is_dismissed: bool,
    pub is_enabled: bool,
    pub is_robot: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub department_id: i64,
    pub nickname: String,
    pub password: String,
    #[serde(default)]
    pub name: UserName,
    pub about: Option<String>,
    pub birthday: Option<String>,
    #[serde(default)]
    pub contacts: Vec<NewContact>,
    pub external_id: Option<String>,
    pub gender: Option<String>,
    pub is_admin: Option<bool>,
    pub language: Option<String>,
    pub position: Option<String>,
    pub timezone: Option<String>,
}

/// Password fields are accepted and ignored; passwords are never stored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub about: Option<String>,
    pub birthday: Option<String>,
    pub contacts: Option<Vec<NewContact>>,
    pub department_id: Option<i64>,
    pub external_id: Option<String>,
    pub gender: Option<String>,
    pub is_admin: Option<bool>,
    pub is_enabled: Option<bool>,
    pub language: Option<String>,
    pub name: Option<UserName>,
    pub nickname: Option<String>,
    pub position: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddAlias {
    pub alias: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AliasRemoved {
    pub alias: String,
    pub removed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Removed<I> {
    pub id: I,
    pub removed: bool,
}
