use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use user_client::{ClientError, UserServiceClient};
use user_proto::Code;

#[tokio::test]
async fn create_user_posts_all_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc/UserService/CreateUser"))
        .and(body_json(json!({
            "id": 0,
            "name": "A",
            "email": "a@x.com",
            "phone_number": "111",
            "is_active": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "A",
            "email": "a@x.com",
            "phone_number": "111",
            "is_active": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = UserServiceClient::new(server.uri());
    let user = client.create_user("A", "a@x.com", "111", true).await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "A");
}

#[tokio::test]
async fn not_found_status_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc/UserService/GetUser"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NOT_FOUND",
            "message": "User with ID 2 not found"
        })))
        .mount(&server)
        .await;

    let client = UserServiceClient::new(server.uri());
    let err = client.get_user(2).await.unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
    assert_eq!(err.to_string(), "NOT_FOUND - User with ID 2 not found");
}

#[tokio::test]
async fn non_status_error_body_falls_back_to_http_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc/UserService/ListUsers"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = UserServiceClient::new(server.uri());
    match client.list_users().await.unwrap_err() {
        ClientError::Status(status) => {
            assert_eq!(status.code, Code::Unavailable);
            assert_eq!(status.message, "upstream down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn delete_returns_ack_with_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc/UserService/DeleteUser"))
        .and(body_json(json!({
            "id": 2,
            "name": "",
            "email": "",
            "phone_number": "",
            "is_active": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "name": "",
            "email": "",
            "phone_number": "",
            "is_active": false
        })))
        .mount(&server)
        .await;

    // Trailing slash on the endpoint is tolerated
    let client = UserServiceClient::new(format!("{}/", server.uri()));
    let ack = client.delete_user(2).await.unwrap();
    assert_eq!(ack.id, 2);
    assert!(ack.name.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let client = UserServiceClient::new("http://127.0.0.1:1");
    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.code(), Code::Unavailable);
}
