//! Order pricing and submission.
//!
//! Prices always come from the catalog. Client-supplied amounts are never
//! read, so a submitted order is re-priced against the store before the
//! notification goes out.

use tracing::instrument;

use mark_store_core::Price;

use crate::error::{AppError, add_breadcrumb};
use crate::models::{CustomerDetails, Order, OrderLine, OrderRequest};
use crate::store::CatalogStore;
use crate::telegram::{TelegramClient, TelegramError, build_order_message};
use crate::validation::{self, ValidationError};

/// Prices orders and delivers them to the store owner.
pub struct OrderService<'a> {
    store: &'a CatalogStore,
    delivery_fee: Price,
    telegram: Option<&'a TelegramClient>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    ///
    /// Without a Telegram client, orders can be priced but not submitted.
    #[must_use]
    pub const fn new(
        store: &'a CatalogStore,
        delivery_fee: Price,
        telegram: Option<&'a TelegramClient>,
    ) -> Self {
        Self {
            store,
            delivery_fee,
            telegram,
        }
    }

    /// Validate an order form and price it against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an invalid form or a total that
    /// overflows, and `AppError::NotFound` if an item references an unknown
    /// product.
    pub fn quote(&self, request: OrderRequest) -> Result<Order, AppError> {
        validation::order(&request)?;

        let lines = request
            .items
            .iter()
            .map(|item| {
                let product = self
                    .store
                    .get_product(item.product_id)
                    .ok_or_else(|| AppError::not_found("product", item.product_id))?;
                let line_total = product
                    .price
                    .checked_times(item.quantity)
                    .ok_or(ValidationError::TotalTooLarge)?;
                Ok(OrderLine {
                    product_id: product.id,
                    name: product.name,
                    quantity: item.quantity,
                    unit_price: product.price,
                    line_total,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        // Store writes are not bounded, so a catalog price can exceed Price::MAX.
        let subtotal = Price::checked_sum(lines.iter().map(|line| line.line_total))
            .ok_or(ValidationError::TotalTooLarge)?;
        let total = subtotal
            .checked_add(self.delivery_fee)
            .ok_or(ValidationError::TotalTooLarge)?;

        Ok(Order {
            customer: CustomerDetails {
                full_name: request.full_name.trim().to_string(),
                phone: request.phone.trim().to_string(),
                province: request.province.trim().to_string(),
                city: request.city.trim().to_string(),
                notes: request
                    .notes
                    .map(|notes| notes.trim().to_string())
                    .filter(|notes| !notes.is_empty()),
            },
            lines,
            subtotal,
            delivery_fee: self.delivery_fee,
            total,
        })
    }

    /// Price an order and send it to the store owner's Telegram chat.
    ///
    /// The order is not stored; if the message cannot be delivered the
    /// customer has to submit again.
    ///
    /// # Errors
    ///
    /// Everything [`quote`](Self::quote) returns, plus `AppError::Notification`
    /// when Telegram is not configured or delivery fails.
    #[instrument(skip(self, request), fields(lines = request.items.len()))]
    pub async fn submit(&self, request: OrderRequest) -> Result<Order, AppError> {
        let order = self.quote(request)?;
        let telegram = self.telegram.ok_or(TelegramError::NotConfigured)?;

        let total = order.total.to_string();
        add_breadcrumb("order", "Order priced", Some(&[("total", total.as_str())]));

        let text = build_order_message(&order);
        let sent = telegram.send_message(&text).await?;

        tracing::info!(
            message_id = sent.message_id,
            province = %order.customer.province,
            total = %order.total,
            "Order submitted"
        );

        Ok(order)
    }
}
