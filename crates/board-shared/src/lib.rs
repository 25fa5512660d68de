//! # Board Shared
//!
//! Wire types of the board API: request bodies with their validation rules,
//! response projections mapped from domain entities, and the error body.

pub mod dto;
pub mod response;
pub mod validation;

pub use response::ErrorResponse;
pub use validation::{Validate, Violation, Violations};
