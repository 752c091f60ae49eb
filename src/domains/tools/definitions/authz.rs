//! Authorization management: roles, policies, admin accounts and audit logs.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ParameterSpec, ToolDefinition};

const ROLE: ParameterSpec = required("role", STRING, "Role name");
const ADMIN_ID: ParameterSpec = id("Admin ID");

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition::new(
        "get_authz_me",
        "Get current admin permissions, roles and policies",
        HttpMethod::Get,
        "/admin/authz/me",
        &[],
    ),
    ToolDefinition::new(
        "list_authz_roles",
        "List all authorization roles",
        HttpMethod::Get,
        "/admin/authz/roles",
        &[],
    ),
    ToolDefinition::new(
        "create_authz_role",
        "Create a new authorization role",
        HttpMethod::Post,
        "/admin/authz/roles",
        &[ROLE],
    ),
    ToolDefinition::new(
        "delete_authz_role",
        "Delete an authorization role",
        HttpMethod::Delete,
        "/admin/authz/roles/{role}",
        &[ROLE],
    ),
    ToolDefinition::new(
        "get_authz_role_policies",
        "Get policies assigned to a role",
        HttpMethod::Get,
        "/admin/authz/roles/{role}/policies",
        &[ROLE],
    ),
    ToolDefinition::new(
        "grant_authz_policy",
        "Grant a permission policy to a role",
        HttpMethod::Post,
        "/admin/authz/policies",
        &[
            ROLE,
            required("object", STRING, "API path (e.g. /admin/products)"),
            required("action", STRING, "HTTP method (e.g. GET, POST)"),
        ],
    ),
    ToolDefinition::new(
        "revoke_authz_policy",
        "Revoke a permission policy from a role",
        HttpMethod::Delete,
        "/admin/authz/policies",
        &[
            ROLE,
            required("object", STRING, "API path"),
            required("action", STRING, "HTTP method"),
        ],
    ),
    ToolDefinition::new(
        "list_authz_admins",
        "List all admin users",
        HttpMethod::Get,
        "/admin/authz/admins",
        &[],
    ),
    ToolDefinition::new(
        "create_authz_admin",
        "Create a new admin user",
        HttpMethod::Post,
        "/admin/authz/admins",
        &[
            required("username", STRING, "Admin username"),
            required("password", STRING, "Admin password"),
            optional("is_super", BOOLEAN, "Whether super admin"),
        ],
    ),
    ToolDefinition::new(
        "update_authz_admin",
        "Update an admin user",
        HttpMethod::Put,
        "/admin/authz/admins/{id}",
        &[
            ADMIN_ID,
            optional("username", STRING, "New username"),
            optional("password", STRING, "New password"),
            optional("is_super", BOOLEAN, "Super admin flag"),
        ],
    ),
    ToolDefinition::new(
        "delete_authz_admin",
        "Delete an admin user",
        HttpMethod::Delete,
        "/admin/authz/admins/{id}",
        &[ADMIN_ID],
    ),
    ToolDefinition::new(
        "get_authz_admin_roles",
        "Get roles assigned to an admin",
        HttpMethod::Get,
        "/admin/authz/admins/{id}/roles",
        &[ADMIN_ID],
    ),
    ToolDefinition::new(
        "set_authz_admin_roles",
        "Set roles for an admin user (replaces existing roles)",
        HttpMethod::Put,
        "/admin/authz/admins/{id}/roles",
        &[ADMIN_ID, required("roles", STRINGS, "List of role names")],
    ),
    ToolDefinition::new(
        "list_authz_audit_logs",
        "List admin operation audit logs",
        HttpMethod::Get,
        "/admin/authz/audit-logs",
        &[
            PAGE,
            PAGE_SIZE,
            optional("operator_admin_id", NUMBER, "Filter by operator admin ID"),
            optional("action", STRING, "Filter by action type"),
        ],
    ),
    ToolDefinition::new(
        "list_authz_permission_catalog",
        "Get the full permission catalog (all available API permissions)",
        HttpMethod::Get,
        "/admin/authz/permissions/catalog",
        &[],
    ),
];
