#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::state::session::SessionStore;
use crate::test_support::helpers::valid_token;
use serde_json::json;

fn employee_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@corp.io", name.to_lowercase()),
        "department": "Engineering",
        "salary": 72000
    })
}

fn leave_json(id: u64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "startDate": "2024-01-01",
        "endDate": "2024-01-05",
        "reason": "Travel",
        "status": status,
        "employee": { "id": "E100", "name": "Ann" }
    })
}

fn signed_in_client(server: &MockServer) -> (ApiClient, SessionStore) {
    let session = SessionStore::in_memory();
    session
        .set_token(&valid_token())
        .expect("memory storage accepts writes");
    (
        ApiClient::new_with_base_url(server.url("/api"), session.clone()),
        session,
    )
}

#[tokio::test]
async fn employee_endpoints_send_bearer_and_json() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees/my-employees");
        then.status(200)
            .json_body(json!([employee_json("E1", "Ann"), employee_json("E2", "Bo")]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(201).json_body(employee_json("E3", "Cy"));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/employees/E3");
        then.status(200).json_body(employee_json("E3", "Cyrus"));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/E3");
        then.status(204);
    });

    let (client, session) = signed_in_client(&server);
    let expected_auth = format!("Bearer {}", session.token().unwrap());

    let employees = client.list::<Employees>().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].name, "Bo");

    let draft = Employee {
        id: "E3".into(),
        name: "Cy".into(),
        email: "cy@corp.io".into(),
        department: "Engineering".into(),
        salary: 72000.0,
    };
    client.create::<Employees>(&draft).await.unwrap();

    client
        .update::<Employees>("E3", &Employee {
            name: "Cyrus".into(),
            ..draft.clone()
        })
        .await
        .unwrap();
    let put = &server.requests_to(&PUT, "/api/employees/E3")[0];
    assert_eq!(put.body.as_ref().unwrap()["name"], "Cyrus");

    client.remove::<Employees>("E3").await.unwrap();

    let sent = server.requests();
    assert_eq!(sent.len(), 4);
    assert!(sent
        .iter()
        .all(|request| request.authorization.as_deref() == Some(expected_auth.as_str())));
    let post = &server.requests_to(&POST, "/api/employees")[0];
    assert_eq!(post.content_type.as_deref(), Some("application/json"));
    assert_eq!(post.body.as_ref().unwrap()["salary"], json!(72000.0));
    assert_eq!(server.requests_to(&DELETE, "/api/employees/E3")[0].body, None);
    runtime.dispose();
}

#[tokio::test]
async fn missing_token_fails_locally_without_a_request() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    let client = ApiClient::new_with_base_url(server.url("/api"), SessionStore::in_memory());

    let err = client.list::<Employees>().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthenticated);
    assert!(server.requests().is_empty());
    runtime.dispose();
}

#[tokio::test]
async fn unauthorized_response_clears_the_session() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendances/my-attendance");
        then.status(401);
    });

    let (client, session) = signed_in_client(&server);
    let err = client.list::<Attendances>().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthenticated);
    assert_eq!(session.token(), None);
    runtime.dispose();
}

#[tokio::test]
async fn rejection_carries_server_message() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(409)
            .json_body(json!({ "message": "Email already exists" }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/E9");
        then.status(500).json_body(json!({ "error": "Internal Server Error" }));
    });

    let (client, session) = signed_in_client(&server);
    let draft = Employee {
        id: "E1".into(),
        name: "Ann".into(),
        email: "ann@corp.io".into(),
        department: "HR".into(),
        salary: 1.0,
    };
    let err = client.create::<Employees>(&draft).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 409,
            message: Some("Email already exists".into())
        }
    );

    let err = client.remove::<Employees>("E9").await.unwrap_err();
    assert_eq!(err.user_message("Failed to delete employee"), "Failed to delete employee");
    assert!(session.token().is_some());
    runtime.dispose();
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/leaveRequests/my-leaves");
        then.status(200).json_body(json!({ "unexpected": true }));
    });

    let (client, _session) = signed_in_client(&server);
    let err = client.list::<LeaveRequests>().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    runtime.dispose();
}

#[tokio::test]
async fn leave_and_attendance_drafts_nest_employee_reference() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/leaveRequests");
        then.status(200).json_body(leave_json(11, "PENDING"));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/attendances/5");
        then.status(200).json_body(json!({
            "id": 5,
            "date": "2024-03-01",
            "status": "Absent",
            "employee": { "id": 7, "name": "Ann", "department": "Ops" }
        }));
    });

    let (client, _session) = signed_in_client(&server);
    client
        .create::<LeaveRequests>(&LeaveDraft {
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            reason: "Travel".into(),
            status: LeaveStatus::Pending,
            employee: EmployeeLink { id: "E100".into() },
        })
        .await
        .unwrap();

    client
        .update::<Attendances>(
            "5",
            &AttendanceDraft {
                date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                status: AttendanceStatus::Absent,
                employee: EmployeeLink { id: "7".into() },
            },
        )
        .await
        .unwrap();

    let leave_body = server.requests_to(&POST, "/api/leaveRequests")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(leave_body["employee"], json!({ "id": "E100" }));
    assert!(leave_body.get("employeeId").is_none());

    let attendance_body = server.requests_to(&PUT, "/api/attendances/5")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(
        attendance_body,
        json!({ "date": "2024-03-01", "status": "Absent", "employee": { "id": "7" } })
    );
    runtime.dispose();
}

#[tokio::test]
async fn bodiless_or_unexpected_success_bodies_still_count_as_applied() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(201).json_body(json!({ "saved": true }));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/employees/E1");
        then.status(204);
    });

    let (client, _session) = signed_in_client(&server);
    let draft = Employee {
        id: "E1".into(),
        name: "Ann".into(),
        email: "ann@corp.io".into(),
        department: "HR".into(),
        salary: 1.0,
    };
    assert_eq!(client.create::<Employees>(&draft).await, Ok(()));
    assert_eq!(client.update::<Employees>("E1", &draft).await, Ok(()));
    runtime.dispose();
}

#[tokio::test]
async fn recent_leave_requests_and_encoded_ids() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/leaveRequests/recent");
        then.status(200)
            .json_body(json!([leave_json(1, "APPROVED"), leave_json(2, "REJECTED")]));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/leaveRequests/a%20b");
        then.status(200);
    });

    let (client, _session) = signed_in_client(&server);
    let recent = client.recent_leave_requests().await.unwrap();
    assert_eq!(recent[1].status, LeaveStatus::Rejected);

    client.remove::<LeaveRequests>("a b").await.unwrap();
    assert_eq!(server.requests_to(&DELETE, "/api/leaveRequests/a%20b").len(), 1);
    runtime.dispose();
}

#[tokio::test]
async fn register_posts_role_without_credentials() {
    let runtime = leptos::create_runtime();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/register");
        then.status(200).json_body(json!({ "message": "User registered" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401).json_body(json!({ "message": "Invalid credentials" }));
    });

    let session = SessionStore::in_memory();
    let client = ApiClient::new_with_base_url(server.url("/api"), session.clone());
    client
        .register(&RegisterRequest {
            username: "hr1".into(),
            password: "pw".into(),
            role: Role::Hr,
        })
        .await
        .unwrap();

    let err = client
        .login(&LoginRequest {
            username: "hr1".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Invalid credentials"), "Invalid credentials");
    assert_eq!(session.token(), None);

    let register = &server.requests_to(&POST, "/api/auth/register")[0];
    assert_eq!(register.authorization, None);
    assert_eq!(register.body.as_ref().unwrap()["role"], json!("hr"));
    runtime.dispose();
}
