//! Recursive chain evaluation.
//!
//! # Responsibilities
//! - Dispatch handlers in registration order
//! - Duplicate request and response at every handoff boundary
//! - Cap `next` reentry at one pass per distinct tail per top-level call
//! - Answer the caller-supplied fallback when the sequence runs out
//!
//! # Design Decisions
//! - Tail identity is the tail start index: the sequence snapshot is fixed
//!   for the duration of a top-level call, so index identity and object
//!   identity coincide
//! - The visited set sits behind a mutex (handler futures must be `Send`)
//!   and is created fresh per top-level call, never shared across calls
//! - Handler failure propagates out unchanged: no retry, no fallback

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;

use crate::chain::handler::ArcHandler;
use crate::error::ChainResult;
use crate::message::{Request, Response};

/// Snapshot of a chain's handler sequence.
pub type HandlerSeq = Arc<Vec<ArcHandler>>;

/// Tail positions a single top-level evaluation has already begun.
#[derive(Clone, Default)]
struct Visited(Arc<Mutex<HashSet<usize>>>);

impl Visited {
    /// Mark `at` as begun. Returns false if it already was.
    fn begin(&self, at: usize) -> bool {
        self.0
            .lock()
            .expect("visited set mutex poisoned")
            .insert(at)
    }
}

/// The continuation handed to a handler: the rest of the chain.
///
/// [`run`](Next::run) proceeds with a re-duplicate of the request as this
/// step received it; [`run_with`](Next::run_with) re-points the tail at an
/// explicit request instead. Nothing enforces single invocation; running
/// the same tail a second time short-circuits with a duplicate of the
/// response current at that point, without re-invoking handlers.
pub struct Next {
    request: Request,
    response: Response,
    handlers: HandlerSeq,
    at: usize,
    visited: Visited,
}

impl Next {
    /// Proceed down the chain with the current request.
    pub fn run(&self) -> BoxFuture<'static, ChainResult<Response>> {
        evaluate_at(
            self.request.duplicate(),
            self.response.duplicate(),
            Arc::clone(&self.handlers),
            self.at,
            self.visited.clone(),
        )
    }

    /// Proceed down the chain with an explicit request. This is how a
    /// handler propagates a request mutation forward; the tail still
    /// receives its own duplicate.
    pub fn run_with(&self, request: Request) -> BoxFuture<'static, ChainResult<Response>> {
        evaluate_at(
            request.duplicate(),
            self.response.duplicate(),
            Arc::clone(&self.handlers),
            self.at,
            self.visited.clone(),
        )
    }
}

/// Evaluate `handlers` in order against `request`, answering `fallback` if
/// the sequence is exhausted without a handler producing a response.
///
/// The returned response is always a fresh duplicate: never the fallback
/// instance, never an instance a handler still holds. A failing handler
/// aborts the whole evaluation and its error is returned unchanged.
pub async fn evaluate(
    request: Request,
    fallback: Response,
    handlers: impl Into<HandlerSeq>,
) -> ChainResult<Response> {
    evaluate_at(request, fallback, handlers.into(), 0, Visited::default()).await
}

fn evaluate_at(
    request: Request,
    response: Response,
    handlers: HandlerSeq,
    at: usize,
    visited: Visited,
) -> BoxFuture<'static, ChainResult<Response>> {
    Box::pin(async move {
        if at >= handlers.len() {
            tracing::trace!(position = at, "sequence exhausted, answering fallback");
            return Ok(response.duplicate());
        }
        if !visited.begin(at) {
            tracing::debug!(position = at, "tail reentered, short-circuiting");
            return Ok(response.duplicate());
        }

        tracing::trace!(
            position = at,
            remaining = handlers.len() - at,
            "dispatching handler"
        );
        let next = Next {
            request: request.duplicate(),
            response: response.duplicate(),
            handlers: Arc::clone(&handlers),
            at: at + 1,
            visited,
        };
        let handler = Arc::clone(&handlers[at]);
        let produced = handler.handle(request.duplicate(), next).await?;
        Ok(produced.duplicate())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn localhost() -> Request {
        Request::get("http://localhost/".parse().unwrap())
    }

    #[tokio::test]
    async fn test_empty_sequence_answers_fallback() {
        let out = evaluate(localhost(), Response::not_found(), Vec::new())
            .await
            .unwrap();
        assert_eq!(out, Response::not_found());
    }

    #[tokio::test]
    async fn test_reentered_tail_short_circuits() {
        let downstream_calls = Arc::new(AtomicU32::new(0));
        let calls = downstream_calls.clone();

        let greedy = |_: Request, next: Next| async move {
            let first = next.run().await?;
            let second = next.run().await?;
            assert_eq!(first.status(), StatusCode::OK);
            // the second pass never reaches the handler below
            assert_eq!(second.status(), StatusCode::NOT_FOUND);
            Ok(first)
        };
        let terminal = move |_: Request, _: Next| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Response::ok())
            }
        };

        let handlers: Vec<ArcHandler> = vec![Arc::new(greedy), Arc::new(terminal)];
        let out = evaluate(localhost(), Response::not_found(), handlers)
            .await
            .unwrap();
        assert_eq!(out.status(), StatusCode::OK);
        assert_eq!(downstream_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_guard_resets_between_top_level_calls() {
        let hits = Arc::new(AtomicU32::new(0));
        let counter = hits.clone();
        let handlers: Vec<ArcHandler> = vec![Arc::new(move |_: Request, _: Next| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Response::ok())
            }
        })];
        let seq: HandlerSeq = Arc::new(handlers);

        for _ in 0..3 {
            evaluate(localhost(), Response::not_found(), Arc::clone(&seq))
                .await
                .unwrap();
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }
}
