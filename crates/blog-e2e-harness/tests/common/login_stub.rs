// crates/blog-e2e-harness/tests/common/login_stub.rs
// ============================================================================
// Module: Login Stub
// Description: Minimal blog API stub with a scripted login endpoint.
// Purpose: Count login calls and echo request headers back to the caller.
// Dependencies: axum, tokio
// ============================================================================

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::ACCEPT;
use axum::http::header::AUTHORIZATION;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;
use tokio::time::sleep;

/// Path the stub serves logins on; matches the harness default.
pub const LOGIN_PATH: &str = "/auth/login/";

/// Scripted reply for every login request.
#[derive(Clone, Debug)]
pub struct LoginReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl LoginReply {
    /// Reply with a JSON body and no delay.
    pub fn json(status: StatusCode, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Reply with a raw body and no delay.
    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Delays the reply, widening the window for concurrent callers.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct StubState {
    reply: LoginReply,
    logins: Arc<Mutex<Vec<Value>>>,
}

/// Handle for the login stub server.
pub struct LoginStubHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
    logins: Arc<Mutex<Vec<Value>>>,
}

impl LoginStubHandle {
    /// Returns the stub root URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns how many login requests the stub has served.
    pub fn login_count(&self) -> usize {
        self.logins.lock().map_or(0, |entries| entries.len())
    }

    /// Returns the JSON bodies of every login request.
    pub fn login_bodies(&self) -> Vec<Value> {
        self.logins.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for LoginStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns a stub whose login endpoint always answers with `reply`.
///
/// Every other path echoes the request's `Authorization` and `Accept`
/// headers as JSON.
pub fn spawn_login_stub(reply: LoginReply) -> Result<LoginStubHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("login stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("login stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("login stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let logins = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        reply,
        logins: Arc::clone(&logins),
    };
    let app = Router::new()
        .route(LOGIN_PATH, post(handle_login))
        .fallback(handle_echo)
        .with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let Ok(runtime) = Builder::new_current_thread().enable_all().build() else {
            return;
        };
        runtime.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                return;
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(LoginStubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        logins,
    })
}

async fn handle_login(State(state): State<StubState>, body: Bytes) -> impl IntoResponse {
    let payload = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if let Ok(mut entries) = state.logins.lock() {
        entries.push(payload);
    }
    if !state.reply.delay.is_zero() {
        sleep(state.reply.delay).await;
    }
    (state.reply.status, [(CONTENT_TYPE, "application/json")], state.reply.body)
}

async fn handle_echo(headers: HeaderMap, uri: Uri) -> Json<Value> {
    let header = |name: HeaderName| headers.get(name).and_then(|value| value.to_str().ok());
    Json(json!({
        "path": uri.path(),
        "authorization": header(AUTHORIZATION),
        "accept": header(ACCEPT),
    }))
}
