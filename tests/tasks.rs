mod common;

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use pretty_assertions::assert_eq;
use serde_json::json;
use taskdesk::models::{Task, DEFAULT_STATUS_ID};
use taskdesk::repository::InMemoryTaskRepository;
use taskdesk::routes::{self, StatusResponse};
use taskdesk::server;

use common::{bearer, task_routes};

async fn create_task(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    >,
    user_id: i32,
    title: &str,
) -> Task {
    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header((header::AUTHORIZATION, bearer(user_id)))
        .set_json(json!({ "title": title }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "create {:?}", title);
    test::read_body_json(resp).await
}

#[actix_rt::test]
async fn test_create_task_unauthorized_over_http() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let repo = Arc::new(InMemoryTaskRepository::new());

    let server = server::listen(listener, "task-service", task_routes(repo.clone()))
        .expect("Failed to start server");
    let handle = server.handle();
    actix_rt::spawn(server);

    let client = reqwest::Client::new();
    let request_url = format!("http://127.0.0.1:{}/tasks", port);

    let resp = client
        .post(&request_url)
        .json(&json!({"title": "Unauthorized Task"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(resp.text().await.unwrap(), "Unauthorized");
    assert_eq!(repo.count(), 0);

    let resp = client
        .post(&request_url)
        .header("Authorization", bearer(8))
        .json(&json!({"title": "Authorized Task"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let created: Task = resp.json().await.unwrap();
    assert_eq!(created.user_id, 8);

    // concurrent requests from two identities never see each other's rows
    let list_as = |user_id: i32| {
        client
            .get(&request_url)
            .header("Authorization", bearer(user_id))
            .send()
    };
    let (for_8, for_9) = tokio::join!(list_as(8), list_as(9));
    let for_8: Vec<Task> = for_8.expect("Failed to send request").json().await.unwrap();
    let for_9: Vec<Task> = for_9.expect("Failed to send request").json().await.unwrap();
    assert_eq!(for_8, vec![created]);
    assert!(for_9.is_empty());

    let health: serde_json::Value = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .unwrap();
    assert_eq!(health["service"], "task-service");

    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_task_crud_flow() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let app = test::init_service(
        App::new()
            .configure(routes::extractors)
            .configure(task_routes(repo.clone())),
    )
    .await;
    let auth = bearer(1);

    // 1. Create Task, ignoring any user_id in the body
    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(json!({
            "title": "CRUD Task 1 Original",
            "description": "Initial description",
            "deadline": "2030-01-01T12:00:00Z",
            "user_id": 999
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Task = test::read_body_json(resp).await;
    assert_eq!(created.title, "CRUD Task 1 Original");
    assert_eq!(created.description, "Initial description");
    assert_eq!(created.user_id, 1);
    assert_eq!(created.status_id, DEFAULT_STATUS_ID);
    assert!(created.deadline.is_some());

    // 2. Get Task by ID
    let req = test::TestRequest::get()
        .uri(&format!("/tasks/{}", created.id))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Task = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    // 3. Update Task
    let req = test::TestRequest::put()
        .uri(&format!("/tasks/{}", created.id))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(json!({"title": "CRUD Task 1 Updated", "description": "Updated description"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let status: StatusResponse = test::read_body_json(resp).await;
    assert_eq!(status, StatusResponse::success());

    // 4. Get All Tasks
    let req = test::TestRequest::get()
        .uri("/tasks")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let tasks: Vec<Task> = test::read_body_json(resp).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "CRUD Task 1 Updated");
    assert_eq!(tasks[0].description, "Updated description");
    assert!(tasks[0].deadline.is_none());

    // 5. Delete Task
    let req = test::TestRequest::delete()
        .uri(&format!("/tasks/{}", created.id))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Verify it is gone
    let req = test::TestRequest::get()
        .uri(&format!("/tasks/{}", created.id))
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(repo.count(), 0);
}

#[actix_rt::test]
async fn test_task_lists_are_scoped_to_identity() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let app = test::init_service(
        App::new()
            .configure(routes::extractors)
            .configure(task_routes(repo.clone())),
    )
    .await;

    for (user_id, title) in [(1, "A's first"), (2, "B's only"), (1, "A's second")] {
        create_task(&app, user_id, title).await;
    }

    let req = test::TestRequest::get()
        .uri("/tasks")
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .to_request();
    let tasks_for_a: Vec<Task> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(tasks_for_a.len(), 2);
    assert!(tasks_for_a.iter().all(|t| t.user_id == 1));

    let req = test::TestRequest::get()
        .uri("/tasks")
        .insert_header((header::AUTHORIZATION, bearer(2)))
        .to_request();
    let tasks_for_b: Vec<Task> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(tasks_for_b.len(), 1);
    assert_eq!(tasks_for_b[0].title, "B's only");

    // B cannot reach A's task by id either
    let a_task = tasks_for_a[0].id;
    for req in [
        test::TestRequest::get().uri(&format!("/tasks/{}", a_task)),
        test::TestRequest::delete().uri(&format!("/tasks/{}", a_task)),
        test::TestRequest::put()
            .uri(&format!("/tasks/{}", a_task))
            .set_json(json!({"title": "Attempted Update by B"})),
    ] {
        let req = req
            .insert_header((header::AUTHORIZATION, bearer(2)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
    assert_eq!(repo.count(), 3);
}

#[actix_rt::test]
async fn test_empty_title_is_rejected_before_the_repository() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let app = test::init_service(
        App::new()
            .configure(routes::extractors)
            .configure(task_routes(repo.clone())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .set_json(json!({"title": "", "description": "no title"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid_input");
    assert_eq!(repo.count(), 0, "no row may be written");

    // same rule on update
    let created = create_task(&app, 1, "keep me").await;

    let req = test::TestRequest::put()
        .uri(&format!("/tasks/{}", created.id))
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .set_json(json!({"title": ""}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    // any non-empty title is fine, however long
    let long = create_task(&app, 1, &"t".repeat(500)).await;
    assert_eq!(long.title.len(), 500);
    assert_eq!(repo.count(), 2);
}

#[actix_rt::test]
async fn test_missing_task_is_not_found_not_internal() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let app = test::init_service(
        App::new()
            .configure(routes::extractors)
            .configure(task_routes(repo)),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/tasks/4242")
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .set_json(json!({"title": "ghost"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "not_found");

    let req = test::TestRequest::delete()
        .uri("/tasks/4242")
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_malformed_requests() {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let app = test::init_service(
        App::new()
            .configure(routes::extractors)
            .configure(task_routes(repo.clone())),
    )
    .await;

    // body that is not JSON
    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid_input");

    // ids are digits only
    let req = test::TestRequest::get()
        .uri("/tasks/abc")
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    // too large for an id
    let req = test::TestRequest::get()
        .uri("/tasks/99999999999")
        .insert_header((header::AUTHORIZATION, bearer(1)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(repo.count(), 0);
}
