use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use crate::models::{
    AddAlias, AliasRemoved, Contact, CreateUser, Removed, UpdateUser, User, UserList,
};
use crate::{check_org, paginate, ApiFailure, ApiResult, AppState, ListQuery};

/// The primary mailbox is always listed first and cannot be edited.
fn mailbox_contact(email: &str) -> Contact {
    Contact {
        contact_type: "email".to_string(),
        value: email.to_string(),
        main: true,
        alias: false,
        synthetic: true,
    }
}

pub async fn list(
    State(state): State<AppState>,
    Path(org_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> ApiResult<UserList> {
    check_org(&state, org_id)?;
    let dir = state.db.read().await;
    let users = dir.users.values().cloned().collect();
    let (users, pagination) = paginate(users, &query);
    Ok(Json(UserList { users, pagination }))
}

pub async fn create(
    State(state): State<AppState>,
    Path(org_id): Path<i64>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> ApiResult<User> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    if input.nickname.trim().is_empty() {
        return Err(ApiFailure::invalid("nickname must not be empty"));
    }
    if input.password.is_empty() {
        return Err(ApiFailure::invalid("password must not be empty"));
    }
    let mut dir = state.db.write().await;
    if !dir.departments.contains_key(&input.department_id) {
        return Err(ApiFailure::not_found("department"));
    }
    if dir.users.values().any(|u| u.nickname == input.nickname) {
        return Err(ApiFailure::conflict("nickname is already taken"));
    }
    let id = dir.next_user_id();
    let email = format!("{}@example.org", input.nickname);
    let mut contacts = vec![mailbox_contact(&email)];
    contacts.extend(input.contacts.into_iter().map(Contact::from));
    let user = User {
        id: id.clone(),
        nickname: input.nickname,
        name: input.name,
        department_id: input.department_id,
        email,
        about: input.about.unwrap_or_default(),
        avatar_id: String::new(),
        birthday: input.birthday.unwrap_or_default(),
        external_id: input.external_id.unwrap_or_default(),
        gender: input.gender.unwrap_or_default(),
        language: input.language.unwrap_or_default(),
        position: input.position.unwrap_or_default(),
        timezone: input.timezone.unwrap_or_default(),
        aliases: Vec::new(),
        contacts,
        groups: Vec::new(),
        is_admin: input.is_admin.unwrap_or(false),
        is_dismissed: false,
        is_enabled: true,
        is_robot: false,
    };
    dir.users.insert(id, user.clone());
    Ok(Json(user))
}

pub async fn get(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, String)>,
) -> ApiResult<User> {
    check_org(&state, org_id)?;
    let dir = state.db.read().await;
    dir.users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("user"))
}

pub async fn update(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, String)>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> ApiResult<User> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    let mut dir = state.db.write().await;
    if let Some(department_id) = input.department_id {
        if !dir.departments.contains_key(&department_id) {
            return Err(ApiFailure::not_found("department"));
        }
    }
    if let Some(nickname) = &input.nickname {
        if dir.users.values().any(|u| &u.nickname == nickname && u.id != id) {
            return Err(ApiFailure::conflict("nickname is already taken"));
        }
    }
    let user = dir
        .users
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("user"))?;
    if let Some(about) = input.about {
        user.about = about;
    }
    if let Some(birthday) = input.birthday {
        user.birthday = birthday;
    }
    if let Some(contacts) = input.contacts {
        user.contacts.retain(|c| c.synthetic);
        user.contacts.extend(contacts.into_iter().map(Contact::from));
    }
    if let Some(department_id) = input.department_id {
        user.department_id = department_id;
    }
    if let Some(external_id) = input.external_id {
        user.external_id = external_id;
    }
    if let Some(gender) = input.gender {
        user.gender = gender;
    }
    if let Some(is_admin) = input.is_admin {
        user.is_admin = is_admin;
    }
    if let Some(is_enabled) = input.is_enabled {
        user.is_enabled = is_enabled;
    }
    if let Some(language) = input.language {
        user.language = language;
    }
    if let Some(name) = input.name {
        user.name = name;
    }
    if let Some(nickname) = input.nickname {
        user.nickname = nickname;
    }
    if let Some(position) = input.position {
        user.position = position;
    }
    if let Some(timezone) = input.timezone {
        user.timezone = timezone;
    }
    Ok(Json(user.clone()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, String)>,
) -> ApiResult<Removed<String>> {
    check_org(&state, org_id)?;
    let mut dir = state.db.write().await;
    for group in dir.groups.values_mut() {
        group
            .members
            .retain(|m| !(m.member_type == "user" && m.id == id));
        group.members_count = group.members.len() as u64;
    }
    dir.users
        .remove(&id)
        .map(|_| Json(Removed { id, removed: true }))
        .ok_or_else(|| ApiFailure::not_found("user"))
}

pub async fn add_alias(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, String)>,
    payload: Result<Json<AddAlias>, JsonRejection>,
) -> ApiResult<User> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    let mut dir = state.db.write().await;
    let user = dir
        .users
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("user"))?;
    if user.aliases.contains(&input.alias) {
        return Err(ApiFailure::conflict("alias already exists"));
    }
    user.aliases.push(input.alias);
    Ok(Json(user.clone()))
}

pub async fn remove_alias(
    State(state): State<AppState>,
    Path((org_id, id, alias)): Path<(i64, String, String)>,
) -> ApiResult<AliasRemoved> {
    check_org(&state, org_id)?;
    let mut dir = state.db.write().await;
    let user = dir
        .users
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("user"))?;
    let before = user.aliases.len();
    user.aliases.retain(|a| a != &alias);
    if user.aliases.len() == before {
        return Err(ApiFailure::not_found("alias"));
    }
    Ok(Json(AliasRemoved {
        alias,
        removed: true,
    }))
}
