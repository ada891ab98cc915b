//! Integration tests for the remotehub-link client.
//!
//! Every test runs against a throwaway HTTP stub bound to a loopback
//! port, so the suite needs no running RemoteHub server. The stub
//! records each request it receives, which lets tests assert on the
//! exact bytes the client put on the wire.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use remotehub_link::{
    Identity, MemorySessionStorage, PersistedSession, RemoteHubClient, RemoteHubError, Role,
    SessionState, SessionStorage, SessionStore,
};

// =============================================================================
// Stub server
// =============================================================================

struct StubResponse {
    status: u16,
    body: String,
}

impl StubResponse {
    fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

type StubHandler = Arc<dyn Fn(&str, &str) -> StubResponse + Send + Sync>;

/// Minimal HTTP/1.1 responder for exercising the client end to end.
struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str, &str) -> StubResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub server should bind a loopback port");
        let addr = listener
            .local_addr()
            .expect("stub server should report its address");
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&requests);
        let handler: StubHandler = Arc::new(handler);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let captured = Arc::clone(&captured);
                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    let _ = serve_connection(stream, captured, handler).await;
                });
            }
        });
        Self {
            addr,
            requests,
            handle,
        }
    }

    fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Raw requests received so far, oldest first.
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_connection(
    mut stream: TcpStream,
    captured: Arc<Mutex<Vec<String>>>,
    handler: StubHandler,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let head_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    while buf.len() < head_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request = String::from_utf8_lossy(&buf).to_string();
    let mut parts = request.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    captured.lock().unwrap().push(request);

    let response = handler(&method, &path);
    let reason = match response.status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    };
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    stream.write_all(payload.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

// =============================================================================
// Test fixtures
// =============================================================================

fn identity(role: Role) -> Identity {
    Identity {
        id: Some(1),
        username: "casey".to_string(),
        email: None,
        first_name: None,
        last_name: None,
        role,
        is_active: true,
    }
}

fn anonymous_store() -> Arc<SessionStore> {
    let store = Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())));
    store.hydrate();
    store
}

fn signed_in_store() -> (Arc<SessionStore>, Arc<MemorySessionStorage>) {
    let storage = Arc::new(MemorySessionStorage::with_session(PersistedSession {
        token: "jwt-token".to_string(),
        identity: identity(Role::Member),
    }));
    let store = Arc::new(SessionStore::new(storage.clone()));
    store.hydrate();
    (store, storage)
}

fn client_for(server: &StubServer, session: Arc<SessionStore>) -> RemoteHubClient {
    RemoteHubClient::builder()
        .base_url(server.base_url())
        .session(session)
        .build()
        .expect("client should build against the stub server")
}

// =============================================================================
// Token attachment
// =============================================================================

#[tokio::test]
async fn test_bearer_token_attached_when_signed_in() {
    let server = StubServer::start(|_, _| StubResponse::json(200, "[]")).await;
    let (session, _) = signed_in_store();
    let client = client_for(&server, session);

    let teams = client.teams().list().await.expect("listing should succeed");
    assert!(teams.is_empty());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].contains("Bearer jwt-token"),
        "request should carry the session token: {}",
        requests[0]
    );
}

#[tokio::test]
async fn test_no_authorization_header_when_anonymous() {
    let server = StubServer::start(|_, _| StubResponse::json(200, "[]")).await;
    let client = client_for(&server, anonymous_store());

    client.teams().list().await.expect("listing should succeed");

    let requests = server.requests();
    assert!(
        !requests[0].to_lowercase().contains("authorization:"),
        "anonymous request must not carry an Authorization header: {}",
        requests[0]
    );
}

// =============================================================================
// Error normalization
// =============================================================================

#[tokio::test]
async fn test_backend_message_is_surfaced_verbatim() {
    let server =
        StubServer::start(|_, _| StubResponse::json(404, r#"{"message":"Team not found"}"#)).await;
    let client = client_for(&server, anonymous_store());

    let err = client
        .teams()
        .get(99)
        .await
        .expect_err("missing team should be an error");
    assert_eq!(err.to_string(), "Team not found");
    assert_eq!(err.http_status(), Some(404));
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status_message() {
    let server = StubServer::start(|_, _| StubResponse::empty(500)).await;
    let client = client_for(&server, anonymous_store());

    let err = client
        .teams()
        .list()
        .await
        .expect_err("server failure should be an error");
    assert_eq!(err.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn test_error_payload_without_message_field_uses_fallback() {
    // Entry-point rejections use {"error": ...} instead of {"message": ...};
    // the client must not leak the raw payload.
    let server =
        StubServer::start(|_, _| StubResponse::json(401, r#"{"error":"Unauthorized"}"#)).await;
    let client = client_for(&server, anonymous_store());

    let err = client
        .teams()
        .list()
        .await
        .expect_err("rejection should be an error");
    assert_eq!(err.to_string(), "Request failed with status code 401");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let server = StubServer::start(|_, _| StubResponse::json(200, "not json")).await;
    let client = client_for(&server, anonymous_store());

    let err = client
        .teams()
        .list()
        .await
        .expect_err("unparseable body should be an error");
    assert!(
        matches!(err, RemoteHubError::SerializationError(_)),
        "expected a serialization error, got: {:?}",
        err
    );
    assert_eq!(err.http_status(), None);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let session = anonymous_store();
    // Port 1 is never listening on loopback.
    let client = RemoteHubClient::builder()
        .base_url("http://127.0.0.1:1/api/v1")
        .session(session)
        .build()
        .expect("client should build");

    let err = client
        .teams()
        .list()
        .await
        .expect_err("refused connection should be an error");
    assert!(
        matches!(err, RemoteHubError::NetworkError(_)),
        "expected a network error, got: {:?}",
        err
    );
    assert_eq!(err.http_status(), None);
}

// =============================================================================
// Session expiry
// =============================================================================

#[tokio::test]
async fn test_unauthorized_response_clears_session() {
    let server =
        StubServer::start(|_, _| StubResponse::json(401, r#"{"message":"Token expired"}"#)).await;
    let (session, storage) = signed_in_store();
    assert!(session.is_authenticated());
    let client = client_for(&server, session.clone());

    let err = client
        .tasks()
        .list(None)
        .await
        .expect_err("expired token should be an error");
    assert_eq!(err.to_string(), "Token expired");
    assert!(err.is_unauthorized());

    // The store and its backing storage are wiped before the caller sees
    // the error, so the very next read is anonymous.
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.identity(), None);
    assert_eq!(session.state(), SessionState::Anonymous);
    assert_eq!(
        storage.load().expect("storage should be readable"),
        None,
        "persisted session should be cleared after a 401"
    );
}

#[tokio::test]
async fn test_non_401_error_keeps_session() {
    let server =
        StubServer::start(|_, _| StubResponse::json(500, r#"{"message":"boom"}"#)).await;
    let (session, _) = signed_in_store();
    let client = client_for(&server, session.clone());

    client
        .tasks()
        .list(None)
        .await
        .expect_err("server failure should be an error");
    assert!(
        session.is_authenticated(),
        "a non-401 failure must not sign the user out"
    );
}

// =============================================================================
// Sign-in round trip
// =============================================================================

#[tokio::test]
async fn test_login_persists_session() {
    let server = StubServer::start(|method, path| {
        assert_eq!(method, "POST");
        assert_eq!(path, "/api/v1/auth/login");
        StubResponse::json(
            200,
            r#"{"token":"fresh-jwt","username":"casey","email":"casey@example.com","role":"ADMIN"}"#,
        )
    })
    .await;
    let storage = Arc::new(MemorySessionStorage::new());
    let session = Arc::new(SessionStore::new(storage.clone()));
    session.hydrate();
    let client = client_for(&server, session.clone());

    let identity = client
        .login("casey", "secret")
        .await
        .expect("sign-in should succeed");
    assert_eq!(identity.username, "casey");
    assert_eq!(identity.role, Role::Admin);

    assert_eq!(session.token(), Some("fresh-jwt".to_string()));
    assert_eq!(session.current_role(), Some(Role::Admin));
    assert_eq!(session.state(), SessionState::Authenticated);
    let persisted = storage
        .load()
        .expect("storage should be readable")
        .expect("session should be persisted");
    assert_eq!(persisted.token, "fresh-jwt");

    let requests = server.requests();
    assert!(
        requests[0].contains(r#""username":"casey""#),
        "sign-in body should carry the username: {}",
        requests[0]
    );
}

#[tokio::test]
async fn test_login_response_without_token_is_error() {
    let server = StubServer::start(|_, _| {
        StubResponse::json(200, r#"{"username":"casey","message":"ok"}"#)
    })
    .await;
    let session = anonymous_store();
    let client = client_for(&server, session.clone());

    let err = client
        .login("casey", "secret")
        .await
        .expect_err("tokenless response should be an error");
    assert!(matches!(err, RemoteHubError::SerializationError(_)));
    assert!(
        !session.is_authenticated(),
        "a failed sign-in must leave the session anonymous"
    );
}

// =============================================================================
// Dashboard aggregation
// =============================================================================

#[tokio::test]
async fn test_dashboard_stats_joins_all_counts() {
    let server = StubServer::start(|_, path| match path {
        "/api/v1/teams/count" => StubResponse::json(200, "4"),
        "/api/v1/tasks/pending/count" => StubResponse::json(200, "9"),
        "/api/v1/tasks/completed-today/count" => StubResponse::json(200, "2"),
        "/api/v1/users/count" => StubResponse::json(200, "12"),
        other => panic!("unexpected path: {}", other),
    })
    .await;
    let (session, _) = signed_in_store();
    let client = client_for(&server, session);

    let stats = client
        .dashboard_stats()
        .await
        .expect("all four counts should decode");
    assert_eq!(stats.active_teams, 4);
    assert_eq!(stats.pending_tasks, 9);
    assert_eq!(stats.completed_today, 2);
    assert_eq!(stats.total_members, 12);
}

#[tokio::test]
async fn test_dashboard_stats_fails_when_any_count_fails() {
    let server = StubServer::start(|_, path| {
        if path == "/api/v1/tasks/pending/count" {
            StubResponse::json(500, r#"{"message":"Count unavailable"}"#)
        } else {
            StubResponse::json(200, "4")
        }
    })
    .await;
    let (session, _) = signed_in_store();
    let client = client_for(&server, session);

    let err = client
        .dashboard_stats()
        .await
        .expect_err("one failed count should fail the aggregate");
    assert_eq!(err.to_string(), "Count unavailable");
}

// =============================================================================
// Deletes
// =============================================================================

#[tokio::test]
async fn test_delete_twice_surfaces_not_found() {
    let deleted = AtomicBool::new(false);
    let server = StubServer::start(move |method, path| {
        assert_eq!(method, "DELETE");
        assert_eq!(path, "/api/v1/teams/7");
        if deleted.swap(true, Ordering::SeqCst) {
            StubResponse::json(404, r#"{"message":"Team not found"}"#)
        } else {
            StubResponse::empty(204)
        }
    })
    .await;
    let (session, _) = signed_in_store();
    let client = client_for(&server, session);

    client
        .teams()
        .delete(7)
        .await
        .expect("first delete should succeed");

    let err = client
        .teams()
        .delete(7)
        .await
        .expect_err("second delete should surface the server error");
    assert_eq!(err.to_string(), "Team not found");
    assert_eq!(err.http_status(), Some(404));
}

// =============================================================================
// Request shaping
// =============================================================================

#[tokio::test]
async fn test_create_task_targets_team_via_query() {
    let server = StubServer::start(|method, path| {
        assert_eq!(method, "POST");
        assert_eq!(path, "/api/v1/tasks?teamId=5");
        StubResponse::json(200, r#"{"id":1,"title":"Ship it","status":"TODO"}"#)
    })
    .await;
    let (session, _) = signed_in_store();
    let client = client_for(&server, session);

    let task = client
        .tasks()
        .create(
            5,
            &remotehub_link::NewTask {
                title: "Ship it".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("creation should succeed");
    assert_eq!(task.id, 1);
    assert_eq!(task.title, "Ship it");

    let requests = server.requests();
    assert!(
        requests[0].contains(r#""title":"Ship it""#),
        "creation body should carry the title: {}",
        requests[0]
    );
}
