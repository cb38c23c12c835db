use serde::{Deserialize, Serialize};

use super::common::{MemberRef, MemberType, Pagination};
use super::user::UserName;

/// A group as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    pub name: String,
    /// `generic` for user-created groups; service groups use other values.
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub label: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub admin_ids: Vec<String>,
    pub author_id: Option<String>,
    #[serde(default)]
    pub member_of: Vec<i64>,
    #[serde(default)]
    pub members: Vec<MemberRef>,
    #[serde(default)]
    pub members_count: u64,
    #[serde(default)]
    pub removed: bool,
    pub created_at: Option<String>,
}

/// One page of groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupList {
    pub groups: Vec<Group>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Request payload for creating a group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admin_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberRef>,
}

impl CreateGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Request payload for updating a group. Setting `members` or `admin_ids`
/// replaces the whole list on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<MemberRef>>,
}

/// Request payload for adding one member to a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddGroupMember {
    pub id: String,
    #[serde(rename = "type")]
    pub member_type: MemberType,
}

impl AddGroupMember {
    pub fn new(member_type: MemberType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_type,
        }
    }
}

impl From<MemberRef> for AddGroupMember {
    fn from(member: MemberRef) -> Self {
        Self {
            id: member.id,
            member_type: member.member_type,
        }
    }
}

/// Confirmation returned when a member is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupMemberAdded {
    pub added: bool,
    pub id: String,
    #[serde(rename = "type")]
    pub member_type: MemberType,
}

/// Group members partitioned by member type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupMembers {
    #[serde(default)]
    pub departments: Vec<DepartmentMember>,
    #[serde(default)]
    pub groups: Vec<GroupMember>,
    #[serde(default)]
    pub users: Vec<UserMember>,
}

impl GroupMembers {
    pub fn len(&self) -> usize {
        self.departments.len() + self.groups.len() + self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a member of the given type and ID is listed.
    pub fn contains(&self, member_type: MemberType, id: &str) -> bool {
        match member_type {
            MemberType::User => self.users.iter().any(|u| u.id == id),
            MemberType::Group => self.groups.iter().any(|g| g.id.to_string() == id),
            MemberType::Department => self.departments.iter().any(|d| d.id.to_string() == id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub members_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub members_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserMember {
    pub id: String,
    pub nickname: String,
    #[serde(default)]
    pub department_id: i64,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub position: Option<String>,
    pub avatar_id: Option<String>,
    #[serde(default)]
    pub name: UserName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_skips_empty_lists() {
        let json = serde_json::to_value(CreateGroup::new("Ops")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ops"}));
    }

    #[test]
    fn update_can_clear_members() {
        let input = UpdateGroup {
            members: Some(Vec::new()),
            ..UpdateGroup::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"members": []}));
    }

    #[test]
    fn add_member_payload() {
        let json = serde_json::to_value(AddGroupMember::new(MemberType::User, "1130000")).unwrap();
        assert_eq!(json, serde_json::json!({"id": "1130000", "type": "user"}));
    }

    #[test]
    fn members_contains_by_type() {
        let members: GroupMembers = serde_json::from_str(
            r#"{
                "departments": [{"id": 4, "name": "Sales", "membersCount": 2}],
                "groups": [],
                "users": [{"id": "77", "nickname": "ivan", "name": {"first": "Ivan", "last": "P"}}]
            }"#,
        )
        .unwrap();
        assert_eq!(members.len(), 2);
        assert!(members.contains(MemberType::Department, "4"));
        assert!(members.contains(MemberType::User, "77"));
        assert!(!members.contains(MemberType::Group, "4"));
    }
}
