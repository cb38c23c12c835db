use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::models::{
    AliasRemoved, Department, DepartmentList, ErrorEnvelope, Group, GroupMembers, MemberAdded,
    Removed, User,
};
use mock_server::{app, DEFAULT_TOKEN};
use tower::{Service, ServiceExt};

const ORG: &str = "/directory/v1/org/1";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("OAuth {DEFAULT_TOKEN}"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    request("GET", uri, "")
}

async fn call(
    app: &mut axum::routing::RouterIntoService<String>,
    req: Request<String>,
) -> axum::response::Response {
    ServiceExt::ready(app).await.unwrap().call(req).await.unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_token_is_unauthenticated() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri(format!("{ORG}/departments"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let envelope: ErrorEnvelope = body_json(resp).await;
    assert_eq!(envelope.message, "Unauthenticated");
}

#[tokio::test]
async fn wrong_token_is_unauthenticated() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri(format!("{ORG}/users"))
                .header(http::header::AUTHORIZATION, "OAuth nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn other_organization_is_forbidden() {
    let resp = app()
        .oneshot(get("/directory/v1/org/999/groups"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let envelope: ErrorEnvelope = body_json(resp).await;
    assert_eq!(envelope.code, 7);
}

// --- departments ---

#[tokio::test]
async fn list_departments_has_root() {
    let resp = app().oneshot(get(&format!("{ORG}/departments"))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let list: DepartmentList = body_json(resp).await;
    assert_eq!(list.departments.len(), 1);
    assert_eq!(list.departments[0].id, 1);
    assert_eq!(list.pagination.total, 1);
}

#[tokio::test]
async fn create_department_sets_email_from_label() {
    let resp = app()
        .oneshot(request(
            "POST",
            &format!("{ORG}/departments"),
            r#"{"name":"Research","parentId":1,"label":"research"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let dept: Department = body_json(resp).await;
    assert_eq!(dept.name, "Research");
    assert_eq!(dept.email, "research@example.org");
}

#[tokio::test]
async fn create_department_malformed_json_returns_envelope() {
    let resp = app()
        .oneshot(request("POST", &format!("{ORG}/departments"), r#"{"label":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let envelope: ErrorEnvelope = body_json(resp).await;
    assert_eq!(envelope.code, 3);
}

#[tokio::test]
async fn create_department_unknown_parent() {
    let resp = app()
        .oneshot(request(
            "POST",
            &format!("{ORG}/departments"),
            r#"{"name":"Orphan","parentId":42}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_department_not_found() {
    let resp = app()
        .oneshot(get(&format!("{ORG}/departments/404")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let envelope: ErrorEnvelope = body_json(resp).await;
    assert_eq!(envelope.message, "department not found");
}

#[tokio::test]
async fn delete_root_department_is_rejected() {
    let resp = app()
        .oneshot(request("DELETE", &format!("{ORG}/departments/1"), ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_departments_rejects_unknown_order() {
    let resp = app()
        .oneshot(get(&format!("{ORG}/departments?orderBy=size")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn department_lifecycle() {
    let mut app = app().into_service();

    let resp = call(
        &mut app,
        request(
            "POST",
            &format!("{ORG}/departments"),
            r#"{"name":"Sales","parentId":1,"description":"field team"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Department = body_json(resp).await;
    let id = created.id;

    // partial update keeps description
    let resp = call(
        &mut app,
        request(
            "PATCH",
            &format!("{ORG}/departments/{id}"),
            r#"{"name":"Sales EMEA"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Department = body_json(resp).await;
    assert_eq!(updated.name, "Sales EMEA");
    assert_eq!(updated.description, "field team");

    // filter by parent, order by name
    let resp = call(
        &mut app,
        get(&format!("{ORG}/departments?parentId=1&orderBy=name&page=1&perPage=10")),
    )
    .await;
    let list: DepartmentList = body_json(resp).await;
    assert_eq!(list.departments.len(), 1);
    assert_eq!(list.departments[0].id, id);

    // aliases
    let resp = call(
        &mut app,
        request(
            "POST",
            &format!("{ORG}/departments/{id}/aliases"),
            r#"{"alias":"sales"}"#,
        ),
    )
    .await;
    let with_alias: Department = body_json(resp).await;
    assert_eq!(with_alias.aliases, vec!["sales".to_string()]);

    let resp = call(
        &mut app,
        request(
            "POST",
            &format!("{ORG}/departments/{id}/aliases"),
            r#"{"alias":"sales"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = call(
        &mut app,
        request("DELETE", &format!("{ORG}/departments/{id}/aliases/sales"), ""),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: AliasRemoved = body_json(resp).await;
    assert_eq!(removed.alias, "sales");
    assert!(removed.removed);

    // delete
    let resp = call(
        &mut app,
        request("DELETE", &format!("{ORG}/departments/{id}"), ""),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: Removed<i64> = body_json(resp).await;
    assert_eq!(removed.id, id);

    let resp = call(&mut app, get(&format!("{ORG}/departments/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- groups ---

#[tokio::test]
async fn group_members_lifecycle() {
    let mut app = app().into_service();

    let resp = call(
        &mut app,
        request("POST", &format!("{ORG}/groups"), r#"{"name":"Ops"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let group: Group = body_json(resp).await;
    assert_eq!(group.group_type, "generic");
    let gid = group.id;

    let resp = call(
        &mut app,
        request(
            "POST",
            &format!("{ORG}/groups/{gid}/members"),
            r#"{"id":"1","type":"department"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let added: MemberAdded = body_json(resp).await;
    assert!(added.added);

    // adding twice does not duplicate
    let resp = call(
        &mut app,
        request(
            "POST",
            &format!("{ORG}/groups/{gid}/members"),
            r#"{"id":"1","type":"department"}"#,
        ),
    )
    .await;
    let added: MemberAdded = body_json(resp).await;
    assert!(!added.added);

    let resp = call(
        &mut app,
        request(
            "POST",
            &format!("{ORG}/groups/{gid}/members"),
            r#"{"id":"77","type":"user"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = call(&mut app, get(&format!("{ORG}/groups/{gid}/members"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let members: GroupMembers = body_json(resp).await;
    assert_eq!(members.departments.len(), 1);
    assert_eq!(members.departments[0].name, "All employees");
    assert!(members.users.is_empty());

    let resp = call(&mut app, request("DELETE", &format!("{ORG}/groups/{gid}"), "")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert!(!body.is_empty());
}

// --- users ---

#[tokio::test]
async fn user_create_and_duplicate_nickname() {
    let mut app = app().into_service();
    let payload = r#"{"departmentId":1,"nickname":"ivanov","password":"pw","name":{"first":"Ivan","last":"Ivanov"}}"#;

    let resp = call(&mut app, request("POST", &format!("{ORG}/users"), payload)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.nickname, "ivanov");
    assert_eq!(user.email, "ivanov@example.org");
    assert!(user.contacts[0].synthetic);
    assert!(user.is_enabled);

    let resp = call(&mut app, request("POST", &format!("{ORG}/users"), payload)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = call(
        &mut app,
        request("PATCH", &format!("{ORG}/users/{}", user.id), r#"{"position":"Engineer"}"#),
    )
    .await;
    let updated: User = body_json(resp).await;
    assert_eq!(updated.position, "Engineer");
    assert_eq!(updated.name.first, "Ivan");
}
