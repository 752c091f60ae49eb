//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: the admin tools. Each tool wraps one
//! endpoint of the Dujiao admin REST API.

pub mod tools;
