//! Domain logic for the product service.
//!
//! Nothing in this crate touches the database or HTTP; it holds the error
//! taxonomy, shared id types, and the rules for turning untyped JSON request
//! bodies into product fields.

pub mod error;
pub mod pagination;
pub mod product;
pub mod types;
