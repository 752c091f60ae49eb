//! Tools domain module.
//!
//! Every tool is a declarative [`schema::ToolDefinition`] describing one admin
//! API call. Invocation is uniform for all of them:
//!
//! 1. [`ToolRegistry::lookup`] resolves the definition by name
//! 2. [`validator::validate`] checks the arguments against its parameters
//! 3. [`request::build`] places each argument in the path, query or body
//! 4. a [`Backend`] executes the request and returns the JSON payload
//!
//! [`ToolDispatcher`] drives those steps and never panics past its boundary.
//!
//! ## Architecture
//!
//! - `definitions/` - The tool table, one file per functional area
//! - `schema.rs` - Definition and parameter types
//! - `validator.rs` - Argument validation
//! - `request.rs` - Request construction
//! - `backend.rs` - HTTP execution against the admin API
//! - `dispatcher.rs` - End-to-end invocation
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `handlers.rs` - Invocation payloads and result rendering
//! - `registry.rs` - Central tool registry and static checks
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! Append a `ToolDefinition` to the matching file in `definitions/`. Routing,
//! schema listing and request shaping all follow from the definition.

pub mod backend;
pub mod definitions;
pub mod dispatcher;
mod error;
mod handlers;
mod registry;
pub mod request;
pub mod router;
pub mod schema;
pub mod validator;

pub use backend::{Backend, HttpBackend};
pub use dispatcher::ToolDispatcher;
pub use error::{ErrorKind, ToolError, ValidationError, ValidationReason};
pub use handlers::*;
pub use registry::{ToolRegistry, to_tool};
pub use router::build_tool_router;
