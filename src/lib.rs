//! Composable request-handler chains with copy-on-handoff isolation.

pub mod bridge;
pub mod chain;
pub mod error;
pub mod message;

pub use chain::builder::Chain;
pub use chain::engine::{evaluate, HandlerSeq, Next};
pub use chain::handler::{ArcHandler, Handler};
pub use error::{BoxError, ChainError, ChainResult};
pub use message::{Request, Response};
