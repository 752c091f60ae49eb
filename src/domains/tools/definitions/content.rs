//! Site content: posts and banners.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ToolDefinition};

pub const TOOLS: &[ToolDefinition] = &[
    // ---- Posts -------------------------------------------------------------
    ToolDefinition::new(
        "list_posts",
        "List blog/announcement posts",
        HttpMethod::Get,
        "/admin/posts",
        &[
            PAGE,
            PAGE_SIZE,
            optional("keyword", STRING, "Search keyword"),
            optional("is_published", BOOLEAN, "Filter by published status"),
        ],
    ),
    ToolDefinition::new(
        "get_post",
        "Get post details by ID",
        HttpMethod::Get,
        "/admin/posts/{id}",
        &[id("Post ID")],
    ),
    ToolDefinition::new(
        "create_post",
        "Create a new post",
        HttpMethod::Post,
        "/admin/posts",
        &[
            required("title", LOCALIZED, "Multi-language title"),
            optional("content", LOCALIZED, "Multi-language content (rich text HTML)"),
            required("slug", STRING, "URL slug"),
            optional("is_published", BOOLEAN, "Whether to publish immediately"),
            optional("sort_order", NUMBER, "Sort order"),
        ],
    ),
    ToolDefinition::new(
        "update_post",
        "Update a post",
        HttpMethod::Put,
        "/admin/posts/{id}",
        &[
            id("Post ID"),
            optional("title", LOCALIZED, "Multi-language title"),
            optional("content", LOCALIZED, "Multi-language content"),
            optional("slug", STRING, "URL slug"),
            optional("is_published", BOOLEAN, "Whether published"),
            optional("sort_order", NUMBER, "Sort order"),
        ],
    ),
    ToolDefinition::new(
        "delete_post",
        "Delete a post",
        HttpMethod::Delete,
        "/admin/posts/{id}",
        &[id("Post ID")],
    ),
    // ---- Banners -----------------------------------------------------------
    ToolDefinition::new(
        "list_banners",
        "List site banners",
        HttpMethod::Get,
        "/admin/banners",
        &[
            PAGE,
            PAGE_SIZE,
            optional("is_active", BOOLEAN, "Filter by active status"),
        ],
    ),
    ToolDefinition::new(
        "get_banner",
        "Get banner details by ID",
        HttpMethod::Get,
        "/admin/banners/{id}",
        &[id("Banner ID")],
    ),
    ToolDefinition::new(
        "create_banner",
        "Create a new banner",
        HttpMethod::Post,
        "/admin/banners",
        &[
            optional("title", LOCALIZED, "Multi-language title"),
            required("image_url", STRING, "Banner image URL"),
            optional("link_type", STRING, "Link type (url, product, post)"),
            optional("link_value", STRING, "Link value"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("sort_order", NUMBER, "Sort order"),
        ],
    ),
    ToolDefinition::new(
        "update_banner",
        "Update a banner",
        HttpMethod::Put,
        "/admin/banners/{id}",
        &[
            id("Banner ID"),
            optional("title", LOCALIZED, "Multi-language title"),
            optional("image_url", STRING, "Banner image URL"),
            optional("link_type", STRING, "Link type"),
            optional("link_value", STRING, "Link value"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("sort_order", NUMBER, "Sort order"),
        ],
    ),
    ToolDefinition::new(
        "delete_banner",
        "Delete a banner",
        HttpMethod::Delete,
        "/admin/banners/{id}",
        &[id("Banner ID")],
    ),
];
