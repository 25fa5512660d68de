//! # Board Core
//!
//! The domain layer of the board API.
//! This crate contains entities, paging types and the repository ports,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
