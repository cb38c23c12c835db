//! In-memory stand-in for the organization directory API.
//!
//! Serves departments, groups and users for a single organization under
//! `/directory/v1/org/{orgId}/...`, checks the `Authorization: OAuth <token>`
//! header, paginates lists and answers failures with the service's error
//! envelope (`{"code", "message", "details"}`).

mod departments;
mod groups;
pub mod models;
mod users;

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

use models::{Department, ErrorEnvelope, Group, Pagination, User};

pub const DEFAULT_TOKEN: &str = "mock-token";
pub const DEFAULT_ORG_ID: i64 = 1;

/// Department every organization starts with; cannot be deleted.
pub const ROOT_DEPARTMENT_ID: i64 = 1;

const MAX_PER_PAGE: u32 = 1000;

/// Access settings the mock enforces.
#[derive(Clone, Debug)]
pub struct MockConfig {
    pub token: String,
    pub org_id: i64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN.to_string(),
            org_id: DEFAULT_ORG_ID,
        }
    }
}

/// Everything stored for the organization.
#[derive(Debug)]
pub struct Directory {
    pub departments: BTreeMap<i64, Department>,
    pub groups: BTreeMap<i64, Group>,
    pub users: BTreeMap<String, User>,
    next_department_id: i64,
    next_group_id: i64,
    next_user_id: u64,
}

impl Directory {
    fn new() -> Self {
        let mut departments = BTreeMap::new();
        departments.insert(
            ROOT_DEPARTMENT_ID,
            Department::new(ROOT_DEPARTMENT_ID, "All employees".to_string(), 0),
        );
        Self {
            departments,
            groups: BTreeMap::new(),
            users: BTreeMap::new(),
            next_department_id: ROOT_DEPARTMENT_ID + 1,
            next_group_id: 1,
            next_user_id: 1_130_000_000_000_001,
        }
    }

    fn next_department_id(&mut self) -> i64 {
        let id = self.next_department_id;
        self.next_department_id += 1;
        id
    }

    fn next_group_id(&mut self) -> i64 {
        let id = self.next_group_id;
        self.next_group_id += 1;
        id
    }

    fn next_user_id(&mut self) -> String {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id.to_string()
    }
}

pub type Db = Arc<RwLock<Directory>>;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Arc<MockConfig>,
}

/// A failure rendered as the service's error envelope.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    code: i64,
    message: String,
}

impl ApiFailure {
    pub fn new(status: StatusCode, code: i64, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, 5, format!("{what} not found"))
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, 3, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, 6, message)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        debug!(status = %self.status, message = %self.message, "request failed");
        let envelope = ErrorEnvelope {
            code: self.code,
            message: self.message,
            details: Vec::new(),
        };
        (self.status, Json(envelope)).into_response()
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiFailure>;

/// `page` / `perPage` plus the department-only filters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub parent_id: Option<i64>,
    pub order_by: Option<String>,
}

/// Cut one page out of `items`. Pages are 1-based.
pub fn paginate<T>(items: Vec<T>, query: &ListQuery) -> (Vec<T>, Pagination) {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).clamp(1, MAX_PER_PAGE);
    let total = items.len() as u64;
    let pages = total.div_ceil(u64::from(per_page)) as u32;
    let skip = (page as usize - 1).saturating_mul(per_page as usize);
    let slice = items.into_iter().skip(skip).take(per_page as usize).collect();
    (
        slice,
        Pagination {
            page,
            pages,
            per_page,
            total,
        },
    )
}

/// Reject requests for another organization.
pub(crate) fn check_org(state: &AppState, org_id: i64) -> Result<(), ApiFailure> {
    if org_id == state.config.org_id {
        Ok(())
    } else {
        Err(ApiFailure::new(
            StatusCode::FORBIDDEN,
            7,
            format!("no access to organization {org_id}"),
        ))
    }
}

async fn require_oauth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let expected = format!("OAuth {}", state.config.token);
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        return ApiFailure::new(StatusCode::UNAUTHORIZED, 16, "Unauthenticated").into_response();
    }
    debug!(method = %request.method(), uri = %request.uri(), "serving");
    next.run(request).await
}

pub fn app() -> Router {
    app_with_config(MockConfig::default())
}

pub fn app_with_config(config: MockConfig) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Directory::new())),
        config: Arc::new(config),
    };
    let org = "/directory/v1/org/{org_id}";
    Router::new()
        .route(
            &format!("{org}/departments"),
            get(departments::list).post(departments::create),
        )
        .route(
            &format!("{org}/departments/{{id}}"),
            get(departments::get)
                .patch(departments::update)
                .delete(departments::remove),
        )
        .route(
            &format!("{org}/departments/{{id}}/aliases"),
            post(departments::add_alias),
        )
        .route(
            &format!("{org}/departments/{{id}}/aliases/{{alias}}"),
            delete(departments::remove_alias),
        )
        .route(&format!("{org}/groups"), get(groups::list).post(groups::create))
        .route(
            &format!("{org}/groups/{{id}}"),
            get(groups::get).patch(groups::update).delete(groups::remove),
        )
        .route(
            &format!("{org}/groups/{{id}}/members"),
            get(groups::list_members).post(groups::add_member),
        )
        .route(&format!("{org}/users"), get(users::list).post(users::create))
        .route(
            &format!("{org}/users/{{id}}"),
            get(users::get).patch(users::update).delete(users::remove),
        )
        .route(&format!("{org}/users/{{id}}/aliases"), post(users::add_alias))
        .route(
            &format!("{org}/users/{{id}}/aliases/{{alias}}"),
            delete(users::remove_alias),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_oauth))
        .with_state(state)
}

pub async fn run_with_config(
    listener: TcpListener,
    config: MockConfig,
) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, org_id = config.org_id, "mock directory API listening");
    }
    axum::serve(listener, app_with_config(config)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: u32, per_page: u32) -> ListQuery {
        ListQuery {
            page: Some(page),
            per_page: Some(per_page),
            ..ListQuery::default()
        }
    }

    #[test]
    fn paginate_middle_page() {
        let (items, page) = paginate((1..=25).collect::<Vec<_>>(), &query(2, 10));
        assert_eq!(items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 3);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let (items, page) = paginate(vec![1, 2, 3], &query(5, 10));
        assert!(items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn paginate_clamps_per_page() {
        let (_, page) = paginate(vec![1], &query(0, 5000));
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn directory_starts_with_root_department() {
        let dir = Directory::new();
        assert!(dir.departments.contains_key(&ROOT_DEPARTMENT_ID));
        assert!(dir.groups.is_empty());
    }
}
