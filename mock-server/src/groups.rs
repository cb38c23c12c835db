use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use crate::models::{
    CreateGroup, Group, GroupList, GroupMembers, Member, MemberAdded, Removed, ShortUnit,
    ShortUser, UpdateGroup,
};
use crate::{check_org, paginate, ApiFailure, ApiResult, AppState, Directory, ListQuery};

/// A member must name an existing user, group or department.
fn check_member(dir: &Directory, group_id: i64, member: &Member) -> Result<(), ApiFailure> {
    let exists = match member.member_type.as_str() {
        "user" => dir.users.contains_key(&member.id),
        "group" => member
            .id
            .parse::<i64>()
            .is_ok_and(|id| id != group_id && dir.groups.contains_key(&id)),
        "department" => member
            .id
            .parse::<i64>()
            .is_ok_and(|id| dir.departments.contains_key(&id)),
        other => return Err(ApiFailure::invalid(format!("unknown member type: {other}"))),
    };
    if exists {
        Ok(())
    } else {
        Err(ApiFailure::not_found(&member.member_type))
    }
}

fn set_members(group: &mut Group, members: Vec<Member>) {
    group.members_count = members.len() as u64;
    group.members = members;
}

pub async fn list(
    State(state): State<AppState>,
    Path(org_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> ApiResult<GroupList> {
    check_org(&state, org_id)?;
    let dir = state.db.read().await;
    let groups = dir.groups.values().cloned().collect();
    let (groups, pagination) = paginate(groups, &query);
    Ok(Json(GroupList { groups, pagination }))
}

pub async fn create(
    State(state): State<AppState>,
    Path(org_id): Path<i64>,
    payload: Result<Json<CreateGroup>, JsonRejection>,
) -> ApiResult<Group> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    if input.name.trim().is_empty() {
        return Err(ApiFailure::invalid("name must not be empty"));
    }
    let mut dir = state.db.write().await;
    let id = dir.next_group_id();
    for member in &input.members {
        check_member(&dir, id, member)?;
    }
    let label = input.label.unwrap_or_default();
    let mut group = Group {
        id,
        name: input.name,
        group_type: "generic".to_string(),
        description: input.description.unwrap_or_default(),
        external_id: input.external_id.unwrap_or_default(),
        email: if label.is_empty() {
            String::new()
        } else {
            format!("{label}@example.org")
        },
        label,
        aliases: Vec::new(),
        admin_ids: input.admin_ids,
        author_id: String::new(),
        member_of: Vec::new(),
        members: Vec::new(),
        members_count: 0,
        removed: false,
    };
    set_members(&mut group, input.members);
    dir.groups.insert(id, group.clone());
    Ok(Json(group))
}

pub async fn get(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
) -> ApiResult<Group> {
    check_org(&state, org_id)?;
    let dir = state.db.read().await;
    dir.groups
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("group"))
}

pub async fn update(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
    payload: Result<Json<UpdateGroup>, JsonRejection>,
) -> ApiResult<Group> {
    check_org(&state, org_id)?;
    let Json(input) = payload?;
    let mut dir = state.db.write().await;
    if !dir.groups.contains_key(&id) {
        return Err(ApiFailure::not_found("group"));
    }
    if let Some(members) = &input.members {
        for member in members {
            check_member(&dir, id, member)?;
        }
    }
    let group = dir
        .groups
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("group"))?;
    if let Some(name) = input.name {
        group.name = name;
    }
    if let Some(admin_ids) = input.admin_ids {
        group.admin_ids = admin_ids;
    }
    if let Some(description) = input.description {
        group.description = description;
    }
    if let Some(external_id) = input.external_id {
        group.external_id = external_id;
    }
    if let Some(label) = input.label {
        group.email = format!("{label}@example.org");
        group.label = label;
    }
    if let Some(members) = input.members {
        set_members(group, members);
    }
    Ok(Json(group.clone()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
) -> ApiResult<Removed<i64>> {
    check_org(&state, org_id)?;
    let mut dir = state.db.write().await;
    dir.groups
        .remove(&id)
        .map(|_| Json(Removed { id, removed: true }))
        .ok_or_else(|| ApiFailure::not_found("group"))
}

pub async fn add_member(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
    payload: Result<Json<Member>, JsonRejection>,
) -> ApiResult<MemberAdded> {
    check_org(&state, org_id)?;
    let Json(member) = payload?;
    let mut dir = state.db.write().await;
    if !dir.groups.contains_key(&id) {
        return Err(ApiFailure::not_found("group"));
    }
    check_member(&dir, id, &member)?;
    let group = dir
        .groups
        .get_mut(&id)
        .ok_or_else(|| ApiFailure::not_found("group"))?;
    let added = !group.members.contains(&member);
    if added {
        let mut members = group.members.clone();
        members.push(member.clone());
        set_members(group, members);
    }
    Ok(Json(MemberAdded {
        added,
        id: member.id,
        member_type: member.member_type,
    }))
}

pub async fn list_members(
    State(state): State<AppState>,
    Path((org_id, id)): Path<(i64, i64)>,
) -> ApiResult<GroupMembers> {
    check_org(&state, org_id)?;
    let dir = state.db.read().await;
    let group = dir
        .groups
        .get(&id)
        .ok_or_else(|| ApiFailure::not_found("group"))?;
    let mut members = GroupMembers::default();
    for member in &group.members {
        match member.member_type.as_str() {
            "user" => {
                if let Some(user) = dir.users.get(&member.id) {
                    members.users.push(ShortUser {
                        id: user.id.clone(),
                        nickname: user.nickname.clone(),
                        department_id: user.department_id,
                        email: user.email.clone(),
                        gender: user.gender.clone(),
                        position: user.position.clone(),
                        avatar_id: user.avatar_id.clone(),
                        name: user.name.clone(),
                    });
                }
            }
            "group" => {
                if let Some(g) = member.id.parse().ok().and_then(|gid: i64| dir.groups.get(&gid)) {
                    members.groups.push(ShortUnit {
                        id: g.id,
                        name: g.name.clone(),
                        members_count: g.members_count,
                    });
                }
            }
            "department" => {
                if let Some(d) = member
                    .id
                    .parse()
                    .ok()
                    .and_then(|did: i64| dir.departments.get(&did))
                {
                    members.departments.push(ShortUnit {
                        id: d.id,
                        name: d.name.clone(),
                        members_count: d.members_count,
                    });
                }
            }
            _ => {}
        }
    }
    Ok(Json(members))
}
