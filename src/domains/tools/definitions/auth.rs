//! Public configuration and admin authentication.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ToolDefinition};

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition::new(
        "get_public_config",
        "Get public site configuration (site name, currency, captcha type, etc.)",
        HttpMethod::Get,
        "/public/config",
        &[],
    ),
    ToolDefinition::new(
        "admin_login",
        "Log in as admin and obtain a Bearer token",
        HttpMethod::Post,
        "/admin/login",
        &[
            required("username", STRING, "Admin username"),
            required("password", STRING, "Admin password"),
        ],
    ),
    ToolDefinition::new(
        "update_password",
        "Change the current admin password",
        HttpMethod::Put,
        "/admin/password",
        &[
            required("old_password", STRING, "Current password"),
            required("new_password", STRING, "New password"),
        ],
    ),
];
