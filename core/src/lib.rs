//! Typed blocking client for the Yandex 360 organization directory API.
//!
//! # Overview
//! Manages departments, groups and users of one organization: create, get,
//! list, update and delete, plus aliases and group membership. Every call
//! is one authenticated HTTPS request (`Authorization: OAuth <token>`) with
//! a JSON body, answered by a JSON body or an error envelope.
//!
//! # Design
//! - `DirectoryClient` holds immutable `Settings` and a `Transport`; it has
//!   no mutable state and can be shared across threads.
//! - All operations funnel through two helpers, `do_get` and `do_mutate`,
//!   which own the auth header, JSON encoding and the status/error-envelope
//!   convention. Resource methods only choose a path and the types.
//! - Request building and response parsing are pure (`build_*`,
//!   `check_status`, `parse_response`); the `Transport` trait is the only
//!   I/O. `UreqTransport` is the default.
//! - No retries, caching or client-side validation.
//!
//! ```no_run
//! use ya360_core::{CreateDepartment, DirectoryClient, Settings};
//!
//! let client = DirectoryClient::new(Settings::new("oauth-token", 1234567));
//! let created = client.create_department(&CreateDepartment::new("Research", 1))?;
//! let fetched = client.get_department(created.id)?;
//! assert_eq!(fetched.name, "Research");
//! # Ok::<(), ya360_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod departments;
pub mod error;
pub mod groups;
pub mod http;
pub mod transport;
pub mod types;
pub mod users;

pub use client::{check_status, parse_response, DirectoryClient, Query};
pub use config::{Settings, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorDetail, ErrorEnvelope};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    AddAlias, AddGroupMember, AliasDeleted, ContactType, CreateDepartment, CreateGroup,
    CreateUser, Deleted, Department, DepartmentList, DepartmentListParams, DepartmentMember,
    DepartmentOrder, Group, GroupList, GroupMember, GroupMemberAdded, GroupMembers, ListParams,
    MemberRef, MemberType, NewContact, Pagination, UpdateDepartment, UpdateGroup, UpdateUser,
    User, UserContact, UserList, UserMember, UserName,
};
