use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use crate::models::{
    AddAlias, AliasRemoved, CreateDepartment, Department, DepartmentList, Removed,
    UpdateDepartment,
};
use crate::{check_org, paginate, ApiFailure, ApiResult, AppState, ListQuery, ROOT_DEPARTMENT_ID};

pub async fn list(
    State(state): State<AppState>,
    Path(org_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> ApiResult<DepartmentList> {
    check_org(&state, org_id)?;
    let dir = state.db.read().await;
    let mut departments: Vec<Department> = dir
        .departments
        .values()
        .filter(|d| query.parent_id.map_or(true, |parent| d.parent_id == parent))
        .cloned()
        .collect();
    match query.order_by.as_deref() {
        None | Some("id") => {}
        Some("name") => departments.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(other) => return Err(ApiFailure::invalid(format!("unknown orderBy: {other}"))),
    }
    let (departments, pagination) = paginate(departments, &query);
    Ok(Json(DepartmentList {
        departments,
        pagination,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Path(org_id): Path<i64>,
    payload: Result<Json<CreateDepartment>, JsonRejection>,
) -> ApiResult<Department> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    if input.name.trim().is_empty() {
        return Err(ApiFailure::invalid("name must not be empty"));
    }
    let mut dir = state.db.write().await;
    if !dir.departments.contains_key(&input.parent_id) {
        return Err(ApiFailure::not_found("parent department"));
    }
    let id = dir.next_department_id();
    let mut department = Department::new(id, input.name, input.parent_id);
    department.description = input.description.unwrap_or_default();
    department.external_id = input.external_id.unwrap_or_default();
    department.head_id = input.head_id.unwrap_or_default();
    if let Some(label) = input.label {
        department.email = format!("{label}@example.org");
        department.label = label;
    }
    dir.departments.insert(id, department.clone());
    Ok(Json(department))
}

pub async fn get(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
) -> ApiResult<Department> {
    check_org(&state, org_id)?;
    let dir = state.db.read().await;
    dir.departments
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("department"))
}

pub async fn update(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
    payload: Result<Json<UpdateDepartment>, JsonRejection>,
) -> ApiResult<Department> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    let mut dir = state.db.write().await;
    if let Some(parent_id) = input.parent_id {
        if parent_id == id || !dir.departments.contains_key(&parent_id) {
            return Err(ApiFailure::invalid("invalid parentId"));
        }
    }
    let department = dir
        .departments
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("department"))?;
    if let Some(name) = input.name {
        department.name = name;
    }
    if let Some(parent_id) = input.parent_id {
        department.parent_id = parent_id;
    }
    if let Some(description) = input.description {
        department.description = description;
    }
    if let Some(external_id) = input.external_id {
        department.external_id = external_id;
    }
    if let Some(head_id) = input.head_id {
        department.head_id = head_id;
    }
    if let Some(label) = input.label {
        department.email = format!("{label}@example.org");
        department.label = label;
    }
    Ok(Json(department.clone()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
) -> ApiResult<Removed<i64>> {
    check_org(&state, org_id)?;
    if id == ROOT_DEPARTMENT_ID {
        return Err(ApiFailure::invalid("root department cannot be removed"));
    }
    let mut dir = state.db.write().await;
    if dir.departments.values().any(|d| d.parent_id == id) {
        return Err(ApiFailure::invalid("department has subdepartments"));
    }
    dir.departments
        .remove(&id)
        .map(|_| Json(Removed { id, removed: true }))
        .ok_or_else(|| ApiFailure::not_found("department"))
}

pub async fn add_alias(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
    payload: Result<Json<AddAlias>, JsonRejection>,
) -> ApiResult<Department> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    let mut dir = state.db.write().await;
    let department = dir
        .departments
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("department"))?;
    if department.aliases.contains(&input.alias) {
        return Err(ApiFailure::conflict("alias already exists"));
    }
    department.aliases.push(input.alias);
    Ok(Json(department.clone()))
}

pub async fn remove_alias(
    State(state): State<AppState>,
    Path((org_id, id, alias)): Path<(i64, i64, String)>,
) -> ApiResult<AliasRemoved> {
    check_org(&state, org_id)?;
    let mut dir = state.db.write().await;
    let department = dir
        .departments
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("department"))?;
    let before = department.aliases.len();
    department.aliases.retain(|a| a != &alias);
    if department.aliases.len() == before {
        return Err(ApiFailure::not_found("alias"));
    }
    Ok(Json(AliasRemoved {
        alias,
        removed: true,
    }))
}
