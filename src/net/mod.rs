//! Networking modules for the storefront HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns the request pipeline (credentials out, 401 reaction in),
//! `api` layers thin endpoint wrappers over it, and `types` defines the
//! shared wire schema.

pub mod api;
pub mod gateway;
pub mod types;
