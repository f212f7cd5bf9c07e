//! Request handlers.
//!
//! Each submodule provides async handler functions for one group of routes.
//! Handlers delegate to `prodbench_core` for body coercion and to the
//! repositories in `prodbench_db` for storage, and map errors via
//! [`crate::error::AppError`].

pub mod basic;
pub mod product;
