//! Constraint queries and their evaluation

mod constraint;
mod engine;
pub mod request;

pub use constraint::{Constraint, Position, Query, parse_constraints};
pub use engine::QueryEngine;
pub use request::QueryRequest;
