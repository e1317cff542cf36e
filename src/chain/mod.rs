//! Handler chain subsystem.
//!
//! # Data Flow
//! ```text
//! Caller
//!     → builder.rs   Chain::respond (snapshot sequence, default fallback)
//!     → engine.rs    evaluate (recursive dispatch, reentry guard)
//!     → handler.rs   Handler::handle(request duplicate, Next)
//!         → Next::run / run_with recurses into engine over the tail
//!     → Response duplicated at every unwind step back to the caller
//! ```
//!
//! # Design Decisions
//! - Every boundary crossing duplicates: into a handler, into `Next`, out
//!   of recursion, out as a return value
//! - Responses flow strictly bottom-up; a handler can re-point the request
//!   the tail sees, never the response
//! - One pass per distinct tail per top-level call: a reentered tail
//!   short-circuits with a duplicate of the current response
//! - The engine always works over a sequence snapshot captured at call
//!   start; appends never touch an in-flight evaluation

pub mod builder;
pub mod engine;
pub mod handler;

pub use builder::Chain;
pub use engine::{evaluate, Next};
pub use handler::{ArcHandler, Handler};
