//! The handler contract.

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::chain::engine::Next;
use crate::error::ChainResult;
use crate::message::{Request, Response};

/// A request handler: transforms (request, next) into a response.
///
/// There is no hierarchy, just this single callable shape. A handler may
/// answer directly, or delegate to the rest of the chain through `next` and
/// observe the response that comes back. Failure propagates to the caller of
/// [`respond`](crate::Chain::respond) unchanged.
pub trait Handler: Send + Sync {
    fn handle(&self, request: Request, next: Next) -> BoxFuture<'static, ChainResult<Response>>;
}

/// Shared handler, as stored in a chain's sequence.
pub type ArcHandler = Arc<dyn Handler>;

/// Any async closure of the right shape is a handler.
impl<F, Fut> Handler for F
where
    F: Fn(Request, Next) -> Fut + Send + Sync,
    Fut: Future<Output = ChainResult<Response>> + Send + 'static,
{
    fn handle(&self, request: Request, next: Next) -> BoxFuture<'static, ChainResult<Response>> {
        Box::pin(self(request, next))
    }
}
