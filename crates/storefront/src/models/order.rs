//! Order types.
//!
//! Orders are not stored. A submitted order is priced against the catalog,
//! sent to the store owner as a Telegram message, and echoed back to the
//! customer.

use serde::{Deserialize, Serialize};

use mark_store_core::{Price, ProductId};

/// Order form as submitted by the customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub full_name: String,
    pub phone: String,
    /// One of the Iraqi governorates.
    pub province: String,
    /// District, sub-district or city.
    pub city: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub items: Vec<OrderItemRequest>,
}

/// A cart line in an order form. Prices are never taken from the client.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Delivery contact for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub full_name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A priced order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// A fully priced order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub customer: CustomerDetails,
    pub lines: Vec<OrderLine>,
    /// Sum of line totals.
    pub subtotal: Price,
    pub delivery_fee: Price,
    /// Subtotal plus delivery fee.
    pub total: Price,
}
