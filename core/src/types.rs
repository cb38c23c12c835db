//! Request and response shapes of the directory API.
//!
//! # Design
//! Read shapes (`Department`, `Group`, `User`, list envelopes) require their
//! identifying fields and default everything else, so a body of the wrong
//! shape fails to decode instead of producing zero values. Write shapes
//! (`Create*`, `Update*`) skip unset fields entirely; the service treats an
//! absent field as "leave unchanged", which is what makes PATCH partial.

mod common;
mod department;
mod group;
mod user;

pub use common::{AddAlias, AliasDeleted, Deleted, ListParams, MemberRef, MemberType, Pagination};
pub use department::{
    CreateDepartment, Department, DepartmentList, DepartmentListParams, DepartmentOrder,
    UpdateDepartment,
};
pub use group::{
    AddGroupMember, CreateGroup, DepartmentMember, Group, GroupList, GroupMember,
    GroupMemberAdded, GroupMembers, UpdateGroup, UserMember,
};
pub use user::{
    ContactType, CreateUser, NewContact, UpdateUser, User, UserContact, UserList, UserName,
};
