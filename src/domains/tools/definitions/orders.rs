//! Orders, fulfillments, payments and payment channels.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ToolDefinition};

pub const TOOLS: &[ToolDefinition] = &[
    // ---- Orders ------------------------------------------------------------
    ToolDefinition::new(
        "list_orders",
        "List orders with optional filters",
        HttpMethod::Get,
        "/admin/orders",
        &[
            PAGE,
            PAGE_SIZE,
            optional("keyword", STRING, "Search by order number or user"),
            optional("status", STRING, "Order status filter"),
            optional("start_date", STRING, "Start date filter (YYYY-MM-DD)"),
            optional("end_date", STRING, "End date filter (YYYY-MM-DD)"),
            optional("user_id", NUMBER, "Filter by user ID"),
        ],
    ),
    ToolDefinition::new(
        "get_order",
        "Get order details by ID",
        HttpMethod::Get,
        "/admin/orders/{id}",
        &[id("Order ID")],
    ),
    ToolDefinition::new(
        "update_order_status",
        "Update an order status",
        HttpMethod::Patch,
        "/admin/orders/{id}",
        &[
            id("Order ID"),
            required("status", STRING, "New status"),
            optional("remark", STRING, "Remark"),
        ],
    ),
    ToolDefinition::new(
        "refund_order_to_wallet",
        "Refund an order amount to user wallet",
        HttpMethod::Post,
        "/admin/orders/{id}/refund-to-wallet",
        &[
            id("Order ID"),
            required("amount", STRING, "Refund amount"),
            optional("remark", STRING, "Refund remark"),
        ],
    ),
    ToolDefinition::new(
        "create_fulfillment",
        "Create a manual fulfillment record for an order",
        HttpMethod::Post,
        "/admin/fulfillments",
        &[
            required("order_id", NUMBER, "Order ID"),
            optional("child_order_id", NUMBER, "Child order ID"),
            required("type", FULFILLMENT_TYPE, "Fulfillment type"),
            required("content", STRING, "Fulfillment content/credentials"),
            optional("remark", STRING, "Remark"),
        ],
    ),
    // ---- Payments ----------------------------------------------------------
    ToolDefinition::new(
        "list_payments",
        "List payment records",
        HttpMethod::Get,
        "/admin/payments",
        &[
            PAGE,
            PAGE_SIZE,
            optional("keyword", STRING, "Search keyword"),
            optional("status", STRING, "Payment status filter"),
            optional("channel_id", NUMBER, "Filter by payment channel ID"),
            optional("start_date", STRING, "Start date filter"),
            optional("end_date", STRING, "End date filter"),
            optional("user_id", NUMBER, "Filter by user ID"),
        ],
    ),
    ToolDefinition::new(
        "get_payment",
        "Get payment record details by ID",
        HttpMethod::Get,
        "/admin/payments/{id}",
        &[id("Payment ID")],
    ),
    // ---- Payment channels --------------------------------------------------
    ToolDefinition::new(
        "list_payment_channels",
        "List payment channels",
        HttpMethod::Get,
        "/admin/payment-channels",
        &[
            PAGE,
            PAGE_SIZE,
            optional("is_active", BOOLEAN, "Filter by active status"),
        ],
    ),
    ToolDefinition::new(
        "get_payment_channel",
        "Get payment channel details by ID",
        HttpMethod::Get,
        "/admin/payment-channels/{id}",
        &[id("Channel ID")],
    ),
    ToolDefinition::new(
        "create_payment_channel",
        "Create a new payment channel",
        HttpMethod::Post,
        "/admin/payment-channels",
        &[
            required("name", STRING, "Channel name"),
            required("type", STRING, "Channel type (e.g. alipay, wechat, stripe)"),
            optional("config", OBJECT, "Channel-specific configuration"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("sort_order", NUMBER, "Sort order"),
        ],
    ),
    ToolDefinition::new(
        "update_payment_channel",
        "Update a payment channel",
        HttpMethod::Put,
        "/admin/payment-channels/{id}",
        &[
            id("Channel ID"),
            optional("name", STRING, "Channel name"),
            optional("config", OBJECT, "Channel configuration"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("sort_order", NUMBER, "Sort order"),
        ],
    ),
    ToolDefinition::new(
        "delete_payment_channel",
        "Delete a payment channel",
        HttpMethod::Delete,
        "/admin/payment-channels/{id}",
        &[id("Channel ID")],
    ),
];
