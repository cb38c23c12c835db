//! Group operations.

use crate::client::{DirectoryClient, Query, NO_BODY};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{
    AddGroupMember, CreateGroup, Deleted, Group, GroupList, GroupMemberAdded, GroupMembers,
    ListParams, UpdateGroup,
};

impl<T: Transport> DirectoryClient<T> {
    fn group_path(&self, group_id: i64) -> String {
        format!("{}/{group_id}", self.org_path("groups"))
    }

    pub fn create_group(&self, input: &CreateGroup) -> Result<Group, ApiError> {
        self.do_mutate(
            HttpMethod::Post,
            &self.org_path("groups"),
            &Query::new(),
            Some(input),
        )
    }

    pub fn get_group(&self, group_id: i64) -> Result<Group, ApiError> {
        self.do_get(&self.group_path(group_id), &Query::new())
    }

    pub fn list_groups(&self, params: &ListParams) -> Result<GroupList, ApiError> {
        let mut query = Query::new();
        query.push("page", params.page).push("perPage", params.per_page);
        self.do_get(&self.org_path("groups"), &query)
    }

    pub fn update_group(&self, group_id: i64, input: &UpdateGroup) -> Result<Group, ApiError> {
        self.do_mutate(
            HttpMethod::Patch,
            &self.group_path(group_id),
            &Query::new(),
            Some(input),
        )
    }

    pub fn delete_group(&self, group_id: i64) -> Result<Deleted<i64>, ApiError> {
        self.do_mutate(
            HttpMethod::Delete,
            &self.group_path(group_id),
            &Query::new(),
            NO_BODY,
        )
    }

    pub fn add_group_member(
        &self,
        group_id: i64,
        member: &AddGroupMember,
    ) -> Result<GroupMemberAdded, ApiError> {
        let path = format!("{}/members", self.group_path(group_id));
        self.do_mutate(HttpMethod::Post, &path, &Query::new(), Some(member))
    }

    pub fn list_group_members(&self, group_id: i64) -> Result<GroupMembers, ApiError> {
        let path = format!("{}/members", self.group_path(group_id));
        self.do_get(&path, &Query::new())
    }
}
