//! Request/response logic, independent of any socket.
//!
//! The pipeline is framer → evaluator → response builder; each stage is a
//! pure function over byte slices so the reactor, the blocking server, and
//! the tests all share it.

pub mod eval;
pub mod request;
pub mod response;

pub use eval::evaluate;
pub use request::frame_expression;
