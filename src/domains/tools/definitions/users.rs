//! Users, login logs, wallets and coupon usage.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ParameterKind, ParameterSpec, ToolDefinition};

const USER_ID: ParameterSpec = id("User ID");

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition::new(
        "list_users",
        "List users with optional filters",
        HttpMethod::Get,
        "/admin/users",
        &[
            PAGE,
            PAGE_SIZE,
            optional("keyword", STRING, "Search by username or email"),
            optional("status", STRING, "User status filter"),
            optional("start_date", STRING, "Registration start date"),
            optional("end_date", STRING, "Registration end date"),
        ],
    ),
    ToolDefinition::new(
        "get_user",
        "Get user details by ID",
        HttpMethod::Get,
        "/admin/users/{id}",
        &[USER_ID],
    ),
    ToolDefinition::new(
        "update_user",
        "Update user information",
        HttpMethod::Put,
        "/admin/users/{id}",
        &[
            USER_ID,
            optional("username", STRING, "New username"),
            optional("email", STRING, "New email"),
            optional("status", STRING, "User status"),
            optional("remark", STRING, "Admin remark"),
        ],
    ),
    ToolDefinition::new(
        "batch_update_user_status",
        "Batch update user statuses",
        HttpMethod::Put,
        "/admin/users/batch-status",
        &[
            required("ids", NUMBERS, "User IDs"),
            required("status", STRING, "New status"),
        ],
    ),
    ToolDefinition::new(
        "list_user_login_logs",
        "List user login logs",
        HttpMethod::Get,
        "/admin/user-login-logs",
        &[
            PAGE,
            PAGE_SIZE,
            optional("user_id", NUMBER, "Filter by user ID"),
            optional("start_date", STRING, "Start date filter"),
            optional("end_date", STRING, "End date filter"),
        ],
    ),
    ToolDefinition::new(
        "get_user_wallet",
        "Get user wallet account information",
        HttpMethod::Get,
        "/admin/users/{id}/wallet",
        &[USER_ID],
    ),
    ToolDefinition::new(
        "list_user_wallet_transactions",
        "List user wallet transactions",
        HttpMethod::Get,
        "/admin/users/{id}/wallet/transactions",
        &[
            USER_ID,
            PAGE,
            PAGE_SIZE,
            optional("type", STRING, "Transaction type filter"),
        ],
    ),
    ToolDefinition::new(
        "adjust_user_wallet",
        "Adjust user wallet balance (add or subtract)",
        HttpMethod::Post,
        "/admin/users/{id}/wallet/adjust",
        &[
            USER_ID,
            required("amount", STRING, "Amount to adjust"),
            optional(
                "operation",
                ParameterKind::Enum(&["add", "subtract"]),
                "Operation type",
            ),
            optional("currency", STRING, "Currency code"),
            optional("remark", STRING, "Adjustment remark"),
        ],
    ),
    ToolDefinition::new(
        "list_user_coupon_usages",
        "List coupon usage records for a user",
        HttpMethod::Get,
        "/admin/users/{id}/coupon-usages",
        &[USER_ID, PAGE, PAGE_SIZE],
    ),
];
