//! Parameter building blocks shared across the tool table.

use crate::domains::tools::schema::{MapValues, ParameterKind, ParameterSpec};

pub const STRING: ParameterKind = ParameterKind::String;
pub const NUMBER: ParameterKind = ParameterKind::Number;
pub const BOOLEAN: ParameterKind = ParameterKind::Boolean;

/// Multi-language text, e.g. `{"zh-CN": "...", "en-US": "..."}`.
pub const LOCALIZED: ParameterKind = ParameterKind::Map(MapValues::String);
/// Free-form JSON object.
pub const OBJECT: ParameterKind = ParameterKind::Map(MapValues::Unknown);
pub const STRINGS: ParameterKind = ParameterKind::Array(&ParameterKind::String);
pub const NUMBERS: ParameterKind = ParameterKind::Array(&ParameterKind::Number);

pub const DISCOUNT_TYPE: ParameterKind = ParameterKind::Enum(&["percent", "fixed"]);
pub const FULFILLMENT_TYPE: ParameterKind = ParameterKind::Enum(&["manual", "auto"]);
pub const CARD_SECRET_STATUS: ParameterKind =
    ParameterKind::Enum(&["available", "reserved", "used"]);
pub const SKILL_STATUS: ParameterKind = ParameterKind::Enum(&["active", "inactive"]);

pub const PAGE: ParameterSpec = ParameterSpec::optional("page", NUMBER, "Page number");
pub const PAGE_SIZE: ParameterSpec = ParameterSpec::optional("page_size", NUMBER, "Page size");

/// Required numeric `id`, the usual path parameter.
pub const fn id(description: &'static str) -> ParameterSpec {
    ParameterSpec::required("id", NUMBER, description)
}

pub const fn required(
    name: &'static str,
    kind: ParameterKind,
    description: &'static str,
) -> ParameterSpec {
    ParameterSpec::required(name, kind, description)
}

pub const fn optional(
    name: &'static str,
    kind: ParameterKind,
    description: &'static str,
) -> ParameterSpec {
    ParameterSpec::optional(name, kind, description)
}
