//! User operations.
//!
//! User IDs are strings and are percent-encoded into the path, so callers
//! pass them raw. Pre-encoded IDs would be encoded twice.

use crate::client::{segment, DirectoryClient, Query, NO_BODY};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{
    AddAlias, AliasDeleted, CreateUser, Deleted, ListParams, UpdateUser, User, UserList,
};

impl<T: Transport> DirectoryClient<T> {
    fn user_path(&self, user_id: &str) -> String {
        format!("{}/{}", self.org_path("users"), segment(user_id))
    }

    pub fn create_user(&self, input: &CreateUser) -> Result<User, ApiError> {
        self.do_mutate(
            HttpMethod::Post,
            &self.org_path("users"),
            &Query::new(),
            Some(input),
        )
    }

    pub fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.do_get(&self.user_path(user_id), &Query::new())
    }

    pub fn list_users(&self, params: &ListParams) -> Result<UserList, ApiError> {
        let mut query = Query::new();
        query.push("page", params.page).push("perPage", params.per_page);
        self.do_get(&self.org_path("users"), &query)
    }

    pub fn update_user(&self, user_id: &str, input: &UpdateUser) -> Result<User, ApiError> {
        self.do_mutate(
            HttpMethod::Patch,
            &self.user_path(user_id),
            &Query::new(),
            Some(input),
        )
    }

    /// Sends `DELETE .../users/{id}`.
    ///
    /// The production service does not support deleting users; expect an
    /// `ApiError::Api` from it. Other deployments may accept the call.
    pub fn delete_user(&self, user_id: &str) -> Result<Deleted<String>, ApiError> {
        self.do_mutate(
            HttpMethod::Delete,
            &self.user_path(user_id),
            &Query::new(),
            NO_BODY,
        )
    }

    /// Returns the user with its updated alias list.
    pub fn add_user_alias(&self, user_id: &str, alias: &AddAlias) -> Result<User, ApiError> {
        let path = format!("{}/aliases", self.user_path(user_id));
        self.do_mutate(HttpMethod::Post, &path, &Query::new(), Some(alias))
    }

    pub fn delete_user_alias(&self, user_id: &str, alias: &str) -> Result<AliasDeleted, ApiError> {
        let path = format!("{}/aliases/{}", self.user_path(user_id), segment(alias));
        self.do_mutate(HttpMethod::Delete, &path, &Query::new(), NO_BODY)
    }
}
