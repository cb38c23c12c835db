//! Department operations.

use crate::client::{segment, DirectoryClient, Query, NO_BODY};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{
    AddAlias, AliasDeleted, CreateDepartment, Deleted, Department, DepartmentList,
    DepartmentListParams, UpdateDepartment,
};

impl<T: Transport> DirectoryClient<T> {
    fn department_path(&self, department_id: i64) -> String {
        format!("{}/{department_id}", self.org_path("departments"))
    }

    pub fn create_department(&self, input: &CreateDepartment) -> Result<Department, ApiError> {
        self.do_mutate(
            HttpMethod::Post,
            &self.org_path("departments"),
            &Query::new(),
            Some(input),
        )
    }

    pub fn get_department(&self, department_id: i64) -> Result<Department, ApiError> {
        self.do_get(&self.department_path(department_id), &Query::new())
    }

    pub fn list_departments(
        &self,
        params: &DepartmentListParams,
    ) -> Result<DepartmentList, ApiError> {
        let mut query = Query::new();
        query
            .push("page", params.page)
            .push("perPage", params.per_page)
            .push_opt("parentId", params.parent_id)
            .push_opt("orderBy", params.order_by);
        self.do_get(&self.org_path("departments"), &query)
    }

    /// PATCH the department; fields left `None` in `input` are not touched.
    pub fn update_department(
        &self,
        department_id: i64,
        input: &UpdateDepartment,
    ) -> Result<Department, ApiError> {
        self.do_mutate(
            HttpMethod::Patch,
            &self.department_path(department_id),
            &Query::new(),
            Some(input),
        )
    }

    pub fn delete_department(&self, department_id: i64) -> Result<Deleted<i64>, ApiError> {
        self.do_mutate(
            HttpMethod::Delete,
            &self.department_path(department_id),
            &Query::new(),
            NO_BODY,
        )
    }

    /// Returns the department with its updated alias list.
    pub fn add_department_alias(
        &self,
        department_id: i64,
        alias: &AddAlias,
    ) -> Result<Department, ApiError> {
        let path = format!("{}/aliases", self.department_path(department_id));
        self.do_mutate(HttpMethod::Post, &path, &Query::new(), Some(alias))
    }

    pub fn delete_department_alias(
        &self,
        department_id: i64,
        alias: &str,
    ) -> Result<AliasDeleted, ApiError> {
        let path = format!(
            "{}/aliases/{}",
            self.department_path(department_id),
            segment(alias)
        );
        self.do_mutate(HttpMethod::Delete, &path, &Query::new(), NO_BODY)
    }
}
