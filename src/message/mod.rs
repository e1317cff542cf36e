//! Request and response value types.
//!
//! # Data Flow
//! ```text
//! Listener collaborator (owns the socket)
//!     → bridge conversion into Request
//!     → chain evaluation (every handoff works on a duplicate)
//!     → Response back through the bridge to the wire
//! ```
//!
//! # Design Decisions
//! - Owned values, no borrowed wire buffers
//! - `duplicate()` is the only sanctioned way to cross a chain boundary
//! - Bodies are `Bytes`: duplication shares the allocation, and the buffer
//!   is immutable, so the shared bytes are never observably written through
//! - Header maps clone deep on duplication

pub mod request;
pub mod response;

pub use request::Request;
pub use response::Response;
