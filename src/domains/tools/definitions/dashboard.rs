//! Operations dashboard.

use super::common::*;
use crate::domains::tools::schema::{HttpMethod, ParameterKind, ParameterSpec, ToolDefinition};

const START_DATE: ParameterSpec = optional("start_date", STRING, "Start date (YYYY-MM-DD)");
const END_DATE: ParameterSpec = optional("end_date", STRING, "End date (YYYY-MM-DD)");

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition::new(
        "get_dashboard_overview",
        "Get operations dashboard overview KPIs",
        HttpMethod::Get,
        "/admin/dashboard/overview",
        &[START_DATE, END_DATE],
    ),
    ToolDefinition::new(
        "get_dashboard_trends",
        "Get dashboard trend data (orders, revenue, users over time)",
        HttpMethod::Get,
        "/admin/dashboard/trends",
        &[
            START_DATE,
            END_DATE,
            optional(
                "granularity",
                ParameterKind::Enum(&["day", "week", "month"]),
                "Data granularity",
            ),
        ],
    ),
    ToolDefinition::new(
        "get_dashboard_rankings",
        "Get dashboard ranking data (top products, channels, etc.)",
        HttpMethod::Get,
        "/admin/dashboard/rankings",
        &[START_DATE, END_DATE],
    ),
];
