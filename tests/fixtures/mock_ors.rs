//! A local stand-in for the OpenRouteService HTTP API.
//!
//! Serves canned replies keyed by request path and records every request it
//! receives. The server runs on its own thread with a tokio runtime so the
//! blocking client under test can be driven from the test thread.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::sync::oneshot;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, (StatusCode, &'static str)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockOrsBuilder {
    replies: HashMap<String, (StatusCode, &'static str)>,
}

impl MockOrsBuilder {
    /// Answer requests to `path` with `status` and a JSON `body`.
    pub fn reply(mut self, path: &str, status: u16, body: &'static str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.replies.insert(path.to_string(), (status, body));
        self
    }

    pub fn start(self) -> MockOrs {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            replies: Arc::new(self.replies),
            requests: Arc::clone(&requests),
        };

        let (addr_tx, addr_rx) = std::sync::mpsc::channel::<SocketAddr>();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind mock server");
                addr_tx
                    .send(listener.local_addr().expect("local addr"))
                    .expect("report address");

                let app = Router::new().fallback(record).with_state(state);
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("serve mock");
            });
        });

        let addr = addr_rx.recv().expect("mock server address");
        MockOrs {
            base_url: format!("http://{}", addr),
            requests,
            shutdown: Some(shutdown_tx),
        }
    }
}

/// Running mock server. Shuts down when dropped.
pub struct MockOrs {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockOrs {
    pub fn builder() -> MockOrsBuilder {
        MockOrsBuilder {
            replies: HashMap::new(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// The only request received so far.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().expect("one request")
    }
}

impl Drop for MockOrs {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let path = uri.path().to_string();
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            method,
            path: path.clone(),
            query,
            headers,
            body,
        });

    let (status, body) = state
        .replies
        .get(&path)
        .copied()
        .unwrap_or((StatusCode::NOT_FOUND, r#"{"error": "no such endpoint"}"#));
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// A base URL nothing is listening on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
