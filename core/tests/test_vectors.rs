//! Verify every operation against JSON test vectors stored in `test-vectors/`.
//!
//! Each case names an operation and its arguments, the request the client
//! must produce, a simulated response, and either the parsed result or the
//! error it must map to. Requests go through a recording transport, so the
//! full `do_get` / `do_mutate` path runs without a network. Bodies and
//! results are compared as parsed JSON to avoid field-ordering noise.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use ya360_core::{
    AddAlias, AddGroupMember, AliasDeleted, ApiError, CreateDepartment, CreateGroup, CreateUser,
    Deleted, Department, DepartmentList, DepartmentListParams, DepartmentOrder, DirectoryClient,
    Group, GroupList, GroupMemberAdded, GroupMembers, HttpMethod, HttpRequest, HttpResponse,
    ListParams, Settings, Transport, UpdateDepartment, UpdateGroup, UpdateUser, User, UserList,
};

const BASE_URL: &str = "http://localhost:3000";

/// Returns one canned response and remembers the request it was given.
struct Recording {
    response: HttpResponse,
    request: Mutex<Option<HttpRequest>>,
}

impl Transport for Recording {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        *self.request.lock().unwrap() = Some(request);
        Ok(self.response.clone())
    }
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn arg<T: DeserializeOwned>(case: &Value, key: &str) -> T {
    serde_json::from_value(case["args"][key].clone())
        .unwrap_or_else(|e| panic!("{}: bad arg {key}: {e}", case["name"]))
}

fn list_params(case: &Value) -> ListParams {
    ListParams::new(arg(case, "page"), arg(case, "per_page"))
}

fn department_list_params(case: &Value) -> DepartmentListParams {
    let order_by = case["args"]["order_by"].as_str().map(|s| match s {
        "id" => DepartmentOrder::Id,
        "name" => DepartmentOrder::Name,
        other => panic!("unknown order: {other}"),
    });
    DepartmentListParams {
        page: arg(case, "page"),
        per_page: arg(case, "per_page"),
        parent_id: arg(case, "parent_id"),
        order_by,
    }
}

/// Normalize any result to JSON so every operation shares one comparison.
fn to_json<R: Serialize>(result: Result<R, ApiError>) -> Result<Value, ApiError> {
    result.map(|r| serde_json::to_value(r).unwrap())
}

type Normalizer = fn(&Value) -> Value;

/// Decode `expected` through `R` and back, filling defaults the same way
/// the client does.
fn normalize<R: DeserializeOwned + Serialize>(expected: &Value) -> Value {
    let typed: R = serde_json::from_value(expected.clone()).unwrap();
    serde_json::to_value(typed).unwrap()
}

/// Call the named operation. The returned normalizer decodes an expected
/// result through the same response type.
fn run(
    client: &DirectoryClient<&Recording>,
    case: &Value,
) -> (Result<Value, ApiError>, Normalizer) {
    match case["operation"].as_str().unwrap() {
        "create_department" => (
            to_json(client.create_department(&arg::<CreateDepartment>(case, "input"))),
            normalize::<Department> as Normalizer,
        ),
        "get_department" => (
            to_json(client.get_department(arg(case, "id"))),
            normalize::<Department> as Normalizer,
        ),
        "list_departments" => (
            to_json(client.list_departments(&department_list_params(case))),
            normalize::<DepartmentList> as Normalizer,
        ),
        "update_department" => (
            to_json(client.update_department(
                arg(case, "id"),
                &arg::<UpdateDepartment>(case, "input"),
            )),
            normalize::<Department> as Normalizer,
        ),
        "delete_department" => (
            to_json(client.delete_department(arg(case, "id"))),
            normalize::<Deleted<i64>> as Normalizer,
        ),
        "add_department_alias" => (
            to_json(client.add_department_alias(arg(case, "id"), &arg::<AddAlias>(case, "input"))),
            normalize::<Department> as Normalizer,
        ),
        "delete_department_alias" => (
            to_json(client.delete_department_alias(arg(case, "id"), &arg::<String>(case, "alias"))),
            normalize::<AliasDeleted> as Normalizer,
        ),
        "create_group" => (
            to_json(client.create_group(&arg::<CreateGroup>(case, "input"))),
            normalize::<Group> as Normalizer,
        ),
        "get_group" => (
            to_json(client.get_group(arg(case, "id"))),
            normalize::<Group> as Normalizer,
        ),
        "list_groups" => (
            to_json(client.list_groups(&list_params(case))),
            normalize::<GroupList> as Normalizer,
        ),
        "update_group" => (
            to_json(client.update_group(arg(case, "id"), &arg::<UpdateGroup>(case, "input"))),
            normalize::<Group> as Normalizer,
        ),
        "delete_group" => (
            to_json(client.delete_group(arg(case, "id"))),
            normalize::<Deleted<i64>> as Normalizer,
        ),
        "add_group_member" => (
            to_json(client.add_group_member(
                arg(case, "id"),
                &arg::<AddGroupMember>(case, "input"),
            )),
            normalize::<GroupMemberAdded> as Normalizer,
        ),
        "list_group_members" => (
            to_json(client.list_group_members(arg(case, "id"))),
            normalize::<GroupMembers> as Normalizer,
        ),
        "create_user" => (
            to_json(client.create_user(&arg::<CreateUser>(case, "input"))),
            normalize::<User> as Normalizer,
        ),
        "get_user" => (
            to_json(client.get_user(&arg::<String>(case, "id"))),
            normalize::<User> as Normalizer,
        ),
        "list_users" => (
            to_json(client.list_users(&list_params(case))),
            normalize::<UserList> as Normalizer,
        ),
        "update_user" => (
            to_json(client.update_user(
                &arg::<String>(case, "id"),
                &arg::<UpdateUser>(case, "input"),
            )),
            normalize::<User> as Normalizer,
        ),
        "delete_user" => (
            to_json(client.delete_user(&arg::<String>(case, "id"))),
            normalize::<Deleted<String>> as Normalizer,
        ),
        "add_user_alias" => (
            to_json(client.add_user_alias(
                &arg::<String>(case, "id"),
                &arg::<AddAlias>(case, "input"),
            )),
            normalize::<User> as Normalizer,
        ),
        "delete_user_alias" => (
            to_json(client.delete_user_alias(
                &arg::<String>(case, "id"),
                &arg::<String>(case, "alias"),
            )),
            normalize::<AliasDeleted> as Normalizer,
        ),
        other => panic!("unknown operation: {other}"),
    }
}

fn check_error(name: &str, err: ApiError, expected: &Value) {
    let status = expected["status"].as_u64().unwrap() as u16;
    match (expected["kind"].as_str().unwrap(), err) {
        ("Api", ApiError::Api { code, message }) => {
            assert_eq!(code, status, "{name}: status");
            assert_eq!(message, expected["message"].as_str().unwrap(), "{name}: message");
        }
        ("Decode", ApiError::Decode { status: got, .. }) => {
            assert_eq!(got, status, "{name}: status");
        }
        (kind, err) => panic!("{name}: expected {kind}, got {err:?}"),
    }
}

fn verify(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let transport = Recording {
            response: HttpResponse::new(
                sim["status"].as_u64().unwrap() as u16,
                sim["body"].as_str().unwrap(),
            ),
            request: Mutex::new(None),
        };
        let client = DirectoryClient::with_transport(
            Settings::new("test-token", 1234).with_base_url(BASE_URL),
            &transport,
        );

        let (result, normalize) = run(&client, case);

        // Verify request
        let req = transport.request.lock().unwrap().clone().unwrap();
        let expected_req = &case["expected_request"];
        let method = parse_method(expected_req["method"].as_str().unwrap());
        assert_eq!(req.method, method, "{name}: method");
        let url = format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap());
        assert_eq!(req.url, url, "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match req.body.as_deref() {
            Some(body) => {
                let req_body: Value = serde_json::from_str(body).unwrap();
                assert_eq!(req_body, expected_req["body"], "{name}: body");
            }
            None => assert!(expected_req["body"].is_null(), "{name}: body should be None"),
        }

        // Verify parse
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let got = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e:?}"));
            assert_eq!(got, normalize(&case["expected_result"]), "{name}: parsed result");
        }
    }
}

#[test]
fn department_test_vectors() {
    verify(include_str!("../../test-vectors/departments.json"));
}

#[test]
fn group_test_vectors() {
    verify(include_str!("../../test-vectors/groups.json"));
}

#[test]
fn user_test_vectors() {
    verify(include_str!("../../test-vectors/users.json"));
}
