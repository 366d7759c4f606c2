//! Order notification message.
//!
//! The message is sent with `parse_mode=HTML`, so every customer-supplied
//! value is escaped before it is interpolated.

use std::fmt::Write as _;

use crate::models::Order;

/// Iraqi dinar suffix appended to every amount.
pub const CURRENCY_SUFFIX: &str = "د.ع";

/// Escape the characters Telegram's HTML parse mode treats as markup.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render an order as the Arabic summary sent to the store owner.
///
/// Sections, in order: header, customer details (notes only when given),
/// one bullet per line with its quantity and unit price, then totals.
#[must_use]
pub fn build_order_message(order: &Order) -> String {
    let customer = &order.customer;
    let mut text = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(text, "🛒 طلب جديد");
    let _ = writeln!(text);
    let _ = writeln!(text, "👤 معلومات العميل:");
    let _ = writeln!(text, "الاسم: {}", escape_html(&customer.full_name));
    let _ = writeln!(text, "الهاتف: {}", escape_html(&customer.phone));
    let _ = writeln!(text, "المحافظة: {}", escape_html(&customer.province));
    let _ = writeln!(text, "المدينة/القضاء: {}", escape_html(&customer.city));
    if let Some(notes) = customer.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        let _ = writeln!(text, "الملاحظات: {}", escape_html(notes));
    }

    let _ = writeln!(text);
    let _ = writeln!(text, "📦 تفاصيل الطلب:");
    for line in &order.lines {
        let _ = writeln!(
            text,
            "• {} - الكمية: {} - السعر: {} {CURRENCY_SUFFIX}",
            escape_html(&line.name),
            line.quantity,
            line.unit_price.grouped(),
        );
    }

    let _ = writeln!(text);
    let _ = writeln!(text, "💰 الإجمالي:");
    let _ = writeln!(
        text,
        "قيمة المنتجات: {} {CURRENCY_SUFFIX}",
        order.subtotal.grouped()
    );
    let _ = writeln!(
        text,
        "التوصيل: {} {CURRENCY_SUFFIX}",
        order.delivery_fee.grouped()
    );
    let _ = write!(
        text,
        "المجموع الكلي: {} {CURRENCY_SUFFIX}",
        order.total.grouped()
    );

    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mark_store_core::{Price, ProductId};

    use super::*;
    use crate::models::{CustomerDetails, OrderLine};

    fn order(notes: Option<&str>) -> Order {
        let unit: Price = "12500".parse().unwrap();
        let line_total = unit.checked_times(2).unwrap();
        let delivery_fee = Price::from_whole(5000);
        Order {
            customer: CustomerDetails {
                full_name: "علي حسن كريم".to_string(),
                phone: "07701234567".to_string(),
                province: "بغداد".to_string(),
                city: "الكرادة".to_string(),
                notes: notes.map(String::from),
            },
            lines: vec![OrderLine {
                product_id: ProductId::new(1),
                name: "Mouse <Pro> & Pad".to_string(),
                quantity: 2,
                unit_price: unit,
                line_total,
            }],
            subtotal: line_total,
            delivery_fee,
            total: line_total.checked_add(delivery_fee).unwrap(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_html("بغداد"), "بغداد");
    }

    #[test]
    fn test_message_sections_and_totals() {
        let text = build_order_message(&order(Some("الباب الخلفي")));

        assert!(text.starts_with("🛒 طلب جديد\n"));
        assert!(text.contains("الاسم: علي حسن كريم\n"));
        assert!(text.contains("المحافظة: بغداد\n"));
        assert!(text.contains("الملاحظات: الباب الخلفي\n"));
        assert!(text.contains("• Mouse &lt;Pro&gt; &amp; Pad - الكمية: 2 - السعر: 12,500 د.ع\n"));
        assert!(text.contains("قيمة المنتجات: 25,000 د.ع\n"));
        assert!(text.contains("التوصيل: 5,000 د.ع\n"));
        assert!(text.ends_with("المجموع الكلي: 30,000 د.ع"));
    }

    #[test]
    fn test_notes_line_omitted_when_absent() {
        assert!(!build_order_message(&order(None)).contains("الملاحظات"));
        assert!(!build_order_message(&order(Some("  "))).contains("الملاحظات"));
    }
}
