//! Minimal listener collaborator: an axum server that forwards every wire
//! request through a chain and writes the resulting response back.
//!
//! Run with `cargo run --example listener`, then:
//! `curl -i http://127.0.0.1:3000/hello`

use std::sync::Arc;
use std::time::Instant;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::any;
use axum::Router;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};

use baton::{Chain, Next, Request, Response};

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let chain = Arc::new(Chain::new());
    chain
        .append(|req: Request, next: Next| async move {
            let started = Instant::now();
            let res = next.run().await?;
            tracing::info!(
                method = %req.method(),
                uri = %req.uri(),
                status = %res.status(),
                elapsed = ?started.elapsed(),
                "handled"
            );
            Ok(res.with_header(
                HeaderName::from_static("x-served-by"),
                HeaderValue::from_static("baton"),
            ))
        })
        .append(|req: Request, next: Next| async move {
            if req.uri().path() == "/hello" {
                Ok(Response::ok().with_body("hello\n"))
            } else {
                next.run().await
            }
        });

    let app = Router::new()
        .route("/", any(forward))
        .route("/{*path}", any(forward))
        .with_state(chain);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("bind listener");
    tracing::info!(address = %listener.local_addr().expect("local addr"), "listener starting");

    axum::serve(listener, app).await.expect("serve");
}

async fn forward(
    State(chain): State<Arc<Chain>>,
    req: axum::http::Request<Body>,
) -> impl IntoResponse {
    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    let request = Request::from(http::Request::from_parts(parts, bytes));
    match chain.respond(request).await {
        Ok(response) => http::Response::<Bytes>::from(response)
            .map(Body::from)
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "chain failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
