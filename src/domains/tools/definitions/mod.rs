//! The admin tool table.
//!
//! Each submodule contributes one `TOOLS` slice for a functional area of the
//! admin API. Definitions are plain data; request shaping is derived from
//! them by [`crate::domains::tools::request`].

mod auth;
mod authz;
mod catalog;
mod common;
mod content;
mod dashboard;
mod marketing;
mod orders;
mod settings;
mod users;

use super::schema::ToolDefinition;

/// Every tool group, in listing order.
pub const ALL_TOOLS: &[&[ToolDefinition]] = &[
    auth::TOOLS,
    dashboard::TOOLS,
    authz::TOOLS,
    catalog::TOOLS,
    orders::TOOLS,
    users::TOOLS,
    content::TOOLS,
    marketing::TOOLS,
    settings::TOOLS,
];
