//! Products, categories and card secrets (license codes).

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ParameterKind, ToolDefinition};

pub const TOOLS: &[ToolDefinition] = &[
    // ---- Products ----------------------------------------------------------
    ToolDefinition::new(
        "list_products",
        "List products with optional filters",
        HttpMethod::Get,
        "/admin/products",
        &[
            PAGE,
            PAGE_SIZE,
            optional("keyword", STRING, "Search keyword"),
            optional("category_id", NUMBER, "Filter by category ID"),
            optional("is_active", BOOLEAN, "Filter by active status"),
            optional(
                "manual_stock_status",
                ParameterKind::Enum(&["low", "out", "all"]),
                "Stock status filter",
            ),
        ],
    ),
    ToolDefinition::new(
        "get_product",
        "Get product details by ID",
        HttpMethod::Get,
        "/admin/products/{id}",
        &[id("Product ID")],
    ),
    ToolDefinition::new(
        "create_product",
        "Create a new product",
        HttpMethod::Post,
        "/admin/products",
        &[
            required(
                "title",
                LOCALIZED,
                "Multi-language title, e.g. {\"zh-CN\": \"...\", \"en-US\": \"...\"}",
            ),
            required("slug", STRING, "URL slug identifier"),
            optional("description", LOCALIZED, "Multi-language description"),
            required("price_amount", NUMBER, "Price in cents"),
            required(
                "purchase_type",
                ParameterKind::Enum(&["member", "guest"]),
                "Purchase type",
            ),
            required("fulfillment_type", FULFILLMENT_TYPE, "Fulfillment type"),
            optional("category_id", NUMBER, "Category ID"),
            optional("is_active", BOOLEAN, "Whether active/published"),
            optional("sort_order", NUMBER, "Sort order weight"),
            optional("images", STRINGS, "Image URL list"),
            optional("tags", STRINGS, "Tag list"),
            optional("manual_stock_total", NUMBER, "Manual stock total"),
        ],
    ),
    ToolDefinition::new(
        "update_product",
        "Update an existing product",
        HttpMethod::Put,
        "/admin/products/{id}",
        &[
            id("Product ID"),
            optional("title", LOCALIZED, "Multi-language title"),
            optional("slug", STRING, "URL slug"),
            optional("description", LOCALIZED, "Multi-language description"),
            optional("price_amount", NUMBER, "Price in cents"),
            optional("is_active", BOOLEAN, "Whether active"),
            optional("sort_order", NUMBER, "Sort order"),
            optional("category_id", NUMBER, "Category ID"),
            optional("images", STRINGS, "Image URL list"),
            optional("tags", STRINGS, "Tag list"),
            optional("manual_stock_total", NUMBER, "Manual stock total"),
        ],
    ),
    ToolDefinition::new(
        "delete_product",
        "Delete a product by ID",
        HttpMethod::Delete,
        "/admin/products/{id}",
        &[id("Product ID")],
    ),
    // ---- Categories --------------------------------------------------------
    ToolDefinition::new(
        "list_categories",
        "List product categories",
        HttpMethod::Get,
        "/admin/categories",
        &[PAGE, PAGE_SIZE],
    ),
    ToolDefinition::new(
        "create_category",
        "Create a new product category",
        HttpMethod::Post,
        "/admin/categories",
        &[
            required(
                "name",
                LOCALIZED,
                "Multi-language name, e.g. {\"zh-CN\": \"...\", \"en-US\": \"...\"}",
            ),
            required("slug", STRING, "URL slug identifier"),
            optional("sort_order", NUMBER, "Sort order weight"),
            optional("is_active", BOOLEAN, "Whether active"),
        ],
    ),
    ToolDefinition::new(
        "update_category",
        "Update a product category",
        HttpMethod::Put,
        "/admin/categories/{id}",
        &[
            id("Category ID"),
            optional("name", LOCALIZED, "Multi-language name"),
            optional("slug", STRING, "URL slug"),
            optional("sort_order", NUMBER, "Sort order"),
            optional("is_active", BOOLEAN, "Whether active"),
        ],
    ),
    ToolDefinition::new(
        "delete_category",
        "Delete a product category",
        HttpMethod::Delete,
        "/admin/categories/{id}",
        &[id("Category ID")],
    ),
    // ---- Card secrets ------------------------------------------------------
    ToolDefinition::new(
        "list_card_secrets",
        "List card secrets (license codes)",
        HttpMethod::Get,
        "/admin/card-secrets",
        &[
            PAGE,
            PAGE_SIZE,
            optional("product_id", NUMBER, "Filter by product ID"),
            optional("batch_id", NUMBER, "Filter by batch ID"),
            optional("status", CARD_SECRET_STATUS, "Filter by status"),
            optional("keyword", STRING, "Search keyword"),
        ],
    ),
    ToolDefinition::new(
        "get_card_secret_stats",
        "Get card secret inventory statistics",
        HttpMethod::Get,
        "/admin/card-secrets/stats",
        &[optional("product_id", NUMBER, "Filter by product ID")],
    ),
    ToolDefinition::new(
        "list_card_secret_batches",
        "List card secret import batches",
        HttpMethod::Get,
        "/admin/card-secrets/batches",
        &[
            PAGE,
            PAGE_SIZE,
            optional("product_id", NUMBER, "Filter by product ID"),
        ],
    ),
    ToolDefinition::new(
        "create_card_secret_batch",
        "Create a new card secret batch (generate codes)",
        HttpMethod::Post,
        "/admin/card-secrets/batch",
        &[
            required("product_id", NUMBER, "Product ID"),
            optional("sku_id", NUMBER, "SKU ID"),
            required("quantity", NUMBER, "Number of codes to generate"),
            optional("prefix", STRING, "Code prefix"),
            optional("length", NUMBER, "Code length"),
            optional("remark", STRING, "Batch remark"),
        ],
    ),
    ToolDefinition::new(
        "update_card_secret",
        "Update a card secret",
        HttpMethod::Put,
        "/admin/card-secrets/{id}",
        &[
            id("Card secret ID"),
            optional("status", CARD_SECRET_STATUS, "New status"),
            optional("remark", STRING, "Remark"),
        ],
    ),
    ToolDefinition::new(
        "batch_update_card_secret_status",
        "Batch update card secret statuses",
        HttpMethod::Patch,
        "/admin/card-secrets/batch-status",
        &[
            required("ids", NUMBERS, "Card secret IDs"),
            required("status", CARD_SECRET_STATUS, "New status"),
        ],
    ),
    ToolDefinition::new(
        "batch_delete_card_secrets",
        "Batch delete card secrets",
        HttpMethod::Post,
        "/admin/card-secrets/batch-delete",
        &[required("ids", NUMBERS, "Card secret IDs to delete")],
    ),
];
