//! # Order Notifier
//!
//! Renders the operator-facing order summary and defines the one-way
//! outbound message-send capability. The transport (WhatsApp deep link,
//! anything else) lives outside this crate; the core's obligation ends at
//! producing the summary, fire-and-forget.

use crate::checkout::OrderRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Storefront name as it appears in the summary header
pub const STORE_NAME: &str = "REEF STORE";

const SECTION_RULE: &str = "--------------------------------------";

/// Render the operator intake message. Labels and separators are fixed
/// literals so the operator's intake stays consistent.
pub fn order_summary(record: &OrderRecord) -> String {
    let mut lines = Vec::new();
    lines.push(format!("*NOTIFIKASI PESANAN BARU - {}*", STORE_NAME));
    lines.push(SECTION_RULE.to_string());
    lines.push(format!("*ID Transaksi:* {}", record.reference));
    lines.push("*Items:*".to_string());
    for item in record.intent.items() {
        lines.push(format!("- {} ({}x)", item.name, item.quantity));
    }
    lines.push(format!("*Total Bayar:* {}", record.total.display()));
    lines.push(format!("*ID Game:* {}", record.buyer_id));
    lines.push(format!(
        "*WhatsApp Pembeli:* {}",
        record.buyer_contact.as_deref().unwrap_or("-")
    ));
    lines.push(format!("*Waktu:* {} | {}", record.date, record.time));
    lines.push(SECTION_RULE.to_string());
    lines.push("_Mohon segera diproses, terima kasih!_".to_string());
    lines.join("\n")
}

/// One-way outbound handoff to the operator channel.
///
/// Implementations must not assume the message is received or
/// acknowledged; there is no result and no retry contract.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    /// Dispatch a rendered summary
    async fn send(&self, summary: &str);

    /// Channel name (for logging)
    fn channel_name(&self) -> &'static str;
}

/// Type alias for a boxed notifier (dynamic dispatch)
pub type BoxedNotifier = Arc<dyn OrderNotifier>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::checkout::CheckoutIntent;
    use crate::product::Price;

    fn sample_record(contact: Option<&str>) -> OrderRecord {
        OrderRecord {
            reference: "28012026153711".to_string(),
            buyer_id: "PlayerOne".to_string(),
            buyer_contact: contact.map(str::to_string),
            intent: CheckoutIntent::Cart {
                items: vec![
                    CartItem {
                        product_id: "golden-koi".to_string(),
                        name: "Golden Koi".to_string(),
                        unit_price: Price(15000),
                        quantity: 2,
                    },
                    CartItem {
                        product_id: "neon-crate".to_string(),
                        name: "Neon Crate".to_string(),
                        unit_price: Price(5000),
                        quantity: 1,
                    },
                ],
            },
            total: Price(35000),
            date: "28/01/2026".to_string(),
            time: "15:37 WIB".to_string(),
        }
    }

    #[test]
    fn test_summary_layout() {
        let summary = order_summary(&sample_record(Some("081234567890")));
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "*NOTIFIKASI PESANAN BARU - REEF STORE*");
        assert_eq!(lines[2], "*ID Transaksi:* 28012026153711");
        assert_eq!(lines[3], "*Items:*");
        assert_eq!(lines[4], "- Golden Koi (2x)");
        assert_eq!(lines[5], "- Neon Crate (1x)");
        assert_eq!(lines[6], "*Total Bayar:* Rp 35.000");
        assert_eq!(lines[7], "*ID Game:* PlayerOne");
        assert_eq!(lines[8], "*WhatsApp Pembeli:* 081234567890");
        assert_eq!(lines[9], "*Waktu:* 28/01/2026 | 15:37 WIB");
        assert_eq!(lines.last().unwrap(), &"_Mohon segera diproses, terima kasih!_");
    }

    #[test]
    fn test_missing_contact_gets_placeholder() {
        let summary = order_summary(&sample_record(None));
        assert!(summary.contains("*WhatsApp Pembeli:* -"));
    }

    #[test]
    fn test_direct_intent_renders_one_line() {
        let record = OrderRecord {
            intent: CheckoutIntent::Direct {
                item: CartItem {
                    product_id: "vip-pass".to_string(),
                    name: "VIP Pass".to_string(),
                    unit_price: Price(50000),
                    quantity: 1,
                },
            },
            total: Price(50000),
            ..sample_record(None)
        };

        let summary = order_summary(&record);
        assert!(summary.contains("- VIP Pass (1x)"));
        assert!(!summary.contains("Golden Koi"));
    }
}
