//! System settings and AI skill configurations.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ToolDefinition};

pub const TOOLS: &[ToolDefinition] = &[
    // ---- System settings ---------------------------------------------------
    ToolDefinition::new(
        "get_settings",
        "Get system settings",
        HttpMethod::Get,
        "/admin/settings",
        &[optional("group", STRING, "Settings group filter")],
    ),
    ToolDefinition::new(
        "update_settings",
        "Update system settings",
        HttpMethod::Put,
        "/admin/settings",
        &[required("settings", OBJECT, "Settings key-value pairs to update")],
    ),
    ToolDefinition::new(
        "get_smtp_settings",
        "Get SMTP email settings",
        HttpMethod::Get,
        "/admin/settings/smtp",
        &[],
    ),
    ToolDefinition::new(
        "get_captcha_settings",
        "Get captcha (CAPTCHA) settings",
        HttpMethod::Get,
        "/admin/settings/captcha",
        &[],
    ),
    ToolDefinition::new(
        "get_telegram_auth_settings",
        "Get Telegram login authentication settings",
        HttpMethod::Get,
        "/admin/settings/telegram-auth",
        &[],
    ),
    // ---- Skills ------------------------------------------------------------
    ToolDefinition::new(
        "list_skills",
        "List AI skill configurations",
        HttpMethod::Get,
        "/admin/skills",
        &[
            PAGE,
            PAGE_SIZE,
            optional("keyword", STRING, "Search keyword"),
            optional("status", SKILL_STATUS, "Filter by status"),
        ],
    ),
    ToolDefinition::new(
        "get_skill",
        "Get AI skill configuration details by ID",
        HttpMethod::Get,
        "/admin/skills/{id}",
        &[id("Skill ID")],
    ),
    ToolDefinition::new(
        "create_skill",
        "Create a new AI skill configuration",
        HttpMethod::Post,
        "/admin/skills",
        &[
            required("name", STRING, "Skill name"),
            optional("description", STRING, "Skill description"),
            required("system_prompt", STRING, "System prompt for the AI"),
            optional("enabled_tools", STRINGS, "List of enabled MCP tool names"),
            optional("status", SKILL_STATUS, "Skill status"),
        ],
    ),
    ToolDefinition::new(
        "update_skill",
        "Update an AI skill configuration",
        HttpMethod::Put,
        "/admin/skills/{id}",
        &[
            id("Skill ID"),
            optional("name", STRING, "Skill name"),
            optional("description", STRING, "Skill description"),
            optional("system_prompt", STRING, "System prompt"),
            optional("enabled_tools", STRINGS, "List of enabled MCP tool names"),
            optional("status", SKILL_STATUS, "Skill status"),
        ],
    ),
    ToolDefinition::new(
        "delete_skill",
        "Delete an AI skill configuration",
        HttpMethod::Delete,
        "/admin/skills/{id}",
        &[id("Skill ID")],
    ),
];
