//! Coupons and promotions.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ToolDefinition};

pub const TOOLS: &[ToolDefinition] = &[
    // ---- Coupons -----------------------------------------------------------
    ToolDefinition::new(
        "list_coupons",
        "List coupons",
        HttpMethod::Get,
        "/admin/coupons",
        &[
            PAGE,
            PAGE_SIZE,
            optional("keyword", STRING, "Search keyword"),
            optional("is_active", BOOLEAN, "Filter by active status"),
        ],
    ),
    ToolDefinition::new(
        "create_coupon",
        "Create a new coupon",
        HttpMethod::Post,
        "/admin/coupons",
        &[
            required("code", STRING, "Coupon code"),
            required("name", STRING, "Coupon name"),
            required("discount_type", DISCOUNT_TYPE, "Discount type"),
            required(
                "discount_value",
                NUMBER,
                "Discount value (percent 0-100 or fixed amount in cents)",
            ),
            optional("min_order_amount", NUMBER, "Minimum order amount in cents"),
            optional("max_uses", NUMBER, "Maximum total uses"),
            optional("max_uses_per_user", NUMBER, "Maximum uses per user"),
            optional("start_at", STRING, "Valid from (ISO date)"),
            optional("end_at", STRING, "Valid until (ISO date)"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("scope", STRING, "Scope (all or specific products)"),
        ],
    ),
    ToolDefinition::new(
        "update_coupon",
        "Update a coupon",
        HttpMethod::Put,
        "/admin/coupons/{id}",
        &[
            id("Coupon ID"),
            optional("name", STRING, "Coupon name"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("end_at", STRING, "Expiry date (ISO date)"),
            optional("max_uses", NUMBER, "Maximum total uses"),
        ],
    ),
    ToolDefinition::new(
        "delete_coupon",
        "Delete a coupon",
        HttpMethod::Delete,
        "/admin/coupons/{id}",
        &[id("Coupon ID")],
    ),
    // ---- Promotions --------------------------------------------------------
    ToolDefinition::new(
        "list_promotions",
        "List promotional activities (sale prices)",
        HttpMethod::Get,
        "/admin/promotions",
        &[
            PAGE,
            PAGE_SIZE,
            optional("is_active", BOOLEAN, "Filter by active status"),
        ],
    ),
    ToolDefinition::new(
        "create_promotion",
        "Create a new promotion (sale event)",
        HttpMethod::Post,
        "/admin/promotions",
        &[
            required("name", STRING, "Promotion name"),
            required("discount_type", DISCOUNT_TYPE, "Discount type"),
            required("discount_value", NUMBER, "Discount value"),
            optional("start_at", STRING, "Start time (ISO date)"),
            optional("end_at", STRING, "End time (ISO date)"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("scope", STRING, "Scope"),
            optional("product_ids", NUMBERS, "Applicable product IDs"),
        ],
    ),
    ToolDefinition::new(
        "update_promotion",
        "Update a promotion",
        HttpMethod::Put,
        "/admin/promotions/{id}",
        &[
            id("Promotion ID"),
            optional("name", STRING, "Promotion name"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("end_at", STRING, "End time"),
            optional("discount_value", NUMBER, "Discount value"),
        ],
    ),
    ToolDefinition::new(
        "delete_promotion",
        "Delete a promotion",
        HttpMethod::Delete,
        "/admin/promotions/{id}",
        &[id("Promotion ID")],
    ),
];
