//! Append-only chain builder.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::chain::engine::{self, HandlerSeq};
use crate::chain::handler::{ArcHandler, Handler};
use crate::error::ChainResult;
use crate::message::{Request, Response};

/// An ordered, append-only sequence of handlers with a single entry point.
///
/// Appending never mutates the stored sequence in place; it swaps in a
/// wholesale replacement. A previously captured [`handlers`](Chain::handlers)
/// snapshot keeps seeing the old list, and so does an in-flight
/// [`respond`](Chain::respond) call, which is what makes concurrent appends
/// and responds safe without locks on the hot path.
pub struct Chain {
    handlers: ArcSwap<Vec<ArcHandler>>,
}

impl Chain {
    /// An empty chain.
    pub fn new() -> Self {
        Self {
            handlers: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// A chain pre-seeded with handlers, in iteration order.
    pub fn with_handlers(handlers: impl IntoIterator<Item = ArcHandler>) -> Self {
        Self {
            handlers: ArcSwap::from_pointee(handlers.into_iter().collect()),
        }
    }

    /// Append one handler to the end of the sequence. Returns `&self` for
    /// fluent chaining: `chain.append(a).append(b)`.
    pub fn append(&self, handler: impl Handler + 'static) -> &Self {
        self.extend([Arc::new(handler) as ArcHandler])
    }

    /// Append several handlers at once, in argument order. Registration
    /// order is execution order; duplicates are permitted.
    pub fn extend(&self, handlers: impl IntoIterator<Item = ArcHandler>) -> &Self {
        let additions: Vec<ArcHandler> = handlers.into_iter().collect();
        self.handlers.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + additions.len());
            next.extend(current.iter().cloned());
            next.extend(additions.iter().cloned());
            next
        });
        self
    }

    /// Snapshot of the current sequence. Read-only: later appends replace
    /// the stored sequence, they never alter a snapshot already handed out.
    pub fn handlers(&self) -> HandlerSeq {
        self.handlers.load_full()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.load().is_empty()
    }

    /// Evaluate the chain with the default fallback: 404 Not Found, empty
    /// body.
    pub async fn respond(&self, request: Request) -> ChainResult<Response> {
        self.respond_with(request, Response::not_found()).await
    }

    /// Evaluate the chain against `request`, answering a duplicate of
    /// `fallback` if no handler produces a response. The sequence is
    /// captured once at call start.
    pub async fn respond_with(
        &self,
        request: Request,
        fallback: Response,
    ) -> ChainResult<Response> {
        let snapshot = self.handlers.load_full();
        tracing::debug!(
            method = %request.method(),
            uri = %request.uri(),
            handlers = snapshot.len(),
            "evaluating chain"
        );
        engine::evaluate(request.duplicate(), fallback.duplicate(), snapshot).await
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
