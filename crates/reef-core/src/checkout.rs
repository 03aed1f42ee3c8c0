//! # Checkout State Machine
//!
//! Drives one order from "browsing" to "confirmed, pending manual
//! verification". Two entry paths exist: a single-product "buy now"
//! (independent of the cart) and a full-cart checkout. Confirmation
//! produces the immutable `OrderRecord` handed to the operator notifier.

use crate::cart::{total_price, CartItem};
use crate::error::{StoreError, StoreResult};
use crate::product::{Price, Product};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Fixed display timezone label (Western Indonesia Time)
pub const TIMEZONE_LABEL: &str = "WIB";

const WIB_OFFSET_HOURS: i32 = 7;

fn wib_offset() -> FixedOffset {
    FixedOffset::east_opt(WIB_OFFSET_HOURS * 3600).expect("static offset is in range")
}

/// Current wall clock in WIB. One reading feeds both the transaction
/// reference and the display timestamp.
pub fn now_wib() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&wib_offset())
}

/// What is being purchased, snapshotted at checkout start.
/// Immutable once captured: later cart mutation never reaches it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CheckoutIntent {
    /// "Buy now": one product with an explicit quantity, never routed
    /// through the cart
    Direct { item: CartItem },

    /// Full cart contents at the moment checkout was invoked
    Cart { items: Vec<CartItem> },
}

impl CheckoutIntent {
    /// Line items covered by this intent
    pub fn items(&self) -> &[CartItem] {
        match self {
            CheckoutIntent::Direct { item } => std::slice::from_ref(item),
            CheckoutIntent::Cart { items } => items,
        }
    }

    /// Total owed for this intent
    pub fn total(&self) -> Price {
        total_price(self.items())
    }

    /// Sum of quantities across all lines
    pub fn item_count(&self) -> u32 {
        self.items().iter().map(|i| i.quantity).sum()
    }
}

/// Finalized order, built once at confirmation and never mutated.
/// Handed to the operator notifier, then forgotten by the system.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    /// Transaction reference: DDMMYYYYHHMMSS from the confirmation moment.
    /// Best-effort uniqueness; two confirmations in the same second
    /// collide, which manual review absorbs.
    pub reference: String,

    /// Buyer-supplied game id / nickname, trimmed, never blank
    pub buyer_id: String,

    /// Buyer's WhatsApp number, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_contact: Option<String>,

    /// The captured intent this order finalizes
    pub intent: CheckoutIntent,

    /// Total computed from the intent at confirmation
    pub total: Price,

    /// Display date, DD/MM/YYYY
    pub date: String,

    /// Display time, "HH:MM WIB"
    pub time: String,
}

/// Checkout journey states
#[derive(Debug, Clone, Default)]
pub enum CheckoutState {
    /// No active checkout
    #[default]
    Idle,

    /// Intent captured, payment instructions shown, waiting for the
    /// buyer's game id
    AwaitingInput { intent: CheckoutIntent },

    /// OrderRecord created, pending manual verification
    Confirmed { order: OrderRecord },
}

/// State machine owning one checkout at a time
#[derive(Debug, Default)]
pub struct CheckoutSession {
    state: CheckoutState,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, CheckoutState::Idle)
    }

    pub fn is_awaiting_input(&self) -> bool {
        matches!(self.state, CheckoutState::AwaitingInput { .. })
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, CheckoutState::Confirmed { .. })
    }

    /// The uncommitted intent, if a checkout is in progress
    pub fn intent(&self) -> Option<&CheckoutIntent> {
        match &self.state {
            CheckoutState::AwaitingInput { intent } => Some(intent),
            _ => None,
        }
    }

    /// The finalized order, if confirmed
    pub fn order(&self) -> Option<&OrderRecord> {
        match &self.state {
            CheckoutState::Confirmed { order } => Some(order),
            _ => None,
        }
    }

    /// "Buy now" entry path. Valid from any state: a prior uncommitted
    /// intent is overwritten, last call wins.
    pub fn begin_direct(&mut self, product: &Product, quantity: u32) {
        self.state = CheckoutState::AwaitingInput {
            intent: CheckoutIntent::Direct {
                item: CartItem::from_product(product, quantity),
            },
        };
    }

    /// Cart checkout entry path. Returns false and leaves the state
    /// untouched when the snapshot is empty — nothing to check out.
    pub fn begin_cart(&mut self, snapshot: Vec<CartItem>) -> bool {
        if snapshot.is_empty() {
            return false;
        }
        self.state = CheckoutState::AwaitingInput {
            intent: CheckoutIntent::Cart { items: snapshot },
        };
        true
    }

    /// Finalize the captured intent into an `OrderRecord` using the
    /// current wall clock.
    pub fn confirm(
        &mut self,
        buyer_id: &str,
        buyer_contact: Option<&str>,
    ) -> StoreResult<OrderRecord> {
        self.confirm_at(buyer_id, buyer_contact, now_wib())
    }

    /// Clock-injected confirmation. The reference and both display
    /// strings derive from the single `moment` reading.
    ///
    /// Fails with a validation error (state unchanged) when the buyer id
    /// is blank after trimming or no checkout is awaiting input.
    pub fn confirm_at(
        &mut self,
        buyer_id: &str,
        buyer_contact: Option<&str>,
        moment: DateTime<FixedOffset>,
    ) -> StoreResult<OrderRecord> {
        let buyer_id = buyer_id.trim();
        if buyer_id.is_empty() {
            return Err(StoreError::Validation(
                "buyer id must not be blank".to_string(),
            ));
        }

        let intent = match &self.state {
            CheckoutState::AwaitingInput { intent } => intent.clone(),
            _ => {
                return Err(StoreError::Validation(
                    "no checkout awaiting confirmation".to_string(),
                ))
            }
        };

        let buyer_contact = buyer_contact
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let order = OrderRecord {
            reference: moment.format("%d%m%Y%H%M%S").to_string(),
            buyer_id: buyer_id.to_string(),
            buyer_contact,
            total: intent.total(),
            intent,
            date: moment.format("%d/%m/%Y").to_string(),
            time: format!("{} {}", moment.format("%H:%M"), TIMEZONE_LABEL),
        };

        self.state = CheckoutState::Confirmed {
            order: order.clone(),
        };
        Ok(order)
    }

    /// Back to Idle. Discards the intent, buyer data and any generated
    /// reference so a reopened checkout starts from a clean slate.
    pub fn dismiss(&mut self) {
        self.state = CheckoutState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::product::Category;
    use chrono::TimeZone;

    fn koi() -> Product {
        Product::new("golden-koi", "Golden Koi", Price(20000), Category::SecretFish)
    }

    fn fixed_moment() -> DateTime<FixedOffset> {
        wib_offset()
            .with_ymd_and_hms(2026, 1, 28, 15, 37, 11)
            .unwrap()
    }

    #[test]
    fn test_confirm_rejects_blank_buyer_id() {
        let mut session = CheckoutSession::new();
        session.begin_direct(&koi(), 1);

        assert!(matches!(
            session.confirm("", None),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            session.confirm("   ", None),
            Err(StoreError::Validation(_))
        ));
        // State unchanged, intent still live
        assert!(session.is_awaiting_input());

        let order = session.confirm("Budi123", None).unwrap();
        assert_eq!(order.buyer_id, "Budi123");
        assert!(session.is_confirmed());
    }

    #[test]
    fn test_confirm_requires_active_checkout() {
        let mut session = CheckoutSession::new();
        assert!(matches!(
            session.confirm("Budi123", None),
            Err(StoreError::Validation(_))
        ));
        assert!(session.is_idle());
    }

    #[test]
    fn test_reference_and_timestamp_from_one_reading() {
        let mut session = CheckoutSession::new();
        session.begin_direct(&koi(), 2);

        let order = session
            .confirm_at("PlayerOne", Some("081234567890"), fixed_moment())
            .unwrap();

        assert_eq!(order.reference, "28012026153711");
        assert_eq!(order.reference.len(), 14);
        assert!(order.reference.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(order.date, "28/01/2026");
        assert_eq!(order.time, "15:37 WIB");
        assert_eq!(order.total, Price(40000));
        assert_eq!(order.buyer_contact.as_deref(), Some("081234567890"));
    }

    #[test]
    fn test_blank_contact_becomes_none() {
        let mut session = CheckoutSession::new();
        session.begin_direct(&koi(), 1);

        let order = session
            .confirm_at("PlayerOne", Some("   "), fixed_moment())
            .unwrap();
        assert!(order.buyer_contact.is_none());
    }

    #[test]
    fn test_begin_cart_empty_is_a_noop() {
        let mut session = CheckoutSession::new();
        assert!(!session.begin_cart(Vec::new()));
        assert!(session.is_idle());
    }

    #[test]
    fn test_last_begin_wins() {
        let mut session = CheckoutSession::new();
        session.begin_direct(&koi(), 1);

        let other = Product::new("vip-pass", "VIP Pass", Price(50000), Category::Gamepass);
        session.begin_direct(&other, 2);

        let intent = session.intent().unwrap();
        assert_eq!(intent.items()[0].product_id, "vip-pass");
        assert_eq!(intent.total(), Price(100000));
    }

    #[test]
    fn test_captured_intent_ignores_later_cart_mutation() {
        let mut cart = Cart::new();
        cart.add(&koi(), 2);

        let mut session = CheckoutSession::new();
        assert!(session.begin_cart(cart.snapshot()));

        // Mutate the live cart after capture
        cart.add(&koi(), 10);
        cart.remove("golden-koi");

        let intent = session.intent().unwrap();
        assert_eq!(intent.items().len(), 1);
        assert_eq!(intent.items()[0].quantity, 2);
        assert_eq!(intent.total(), Price(40000));
    }

    #[test]
    fn test_direct_checkout_leaves_cart_untouched() {
        let cart = Cart::new();
        let mut session = CheckoutSession::new();

        session.begin_direct(&koi(), 3);
        session.confirm_at("PlayerOne", None, fixed_moment()).unwrap();

        assert!(cart.is_empty());
        assert_eq!(session.order().unwrap().intent.item_count(), 3);
    }

    #[test]
    fn test_dismiss_discards_everything() {
        let mut session = CheckoutSession::new();
        session.begin_direct(&koi(), 1);
        session.confirm_at("PlayerOne", None, fixed_moment()).unwrap();

        session.dismiss();
        assert!(session.is_idle());
        assert!(session.order().is_none());
        assert!(session.intent().is_none());
    }

    #[test]
    fn test_end_to_end_cart_scenario() {
        let product = Product::new("a", "Reef Charm", Price(20000), Category::EnchantItems);

        let mut cart = Cart::new();
        cart.add(&product, 1);
        cart.add(&product, 2); // merges to quantity 3
        assert_eq!(cart.len(), 1);

        let mut session = CheckoutSession::new();
        assert!(session.begin_cart(cart.snapshot()));

        let order = session
            .confirm_at("PlayerOne", None, fixed_moment())
            .unwrap();

        assert_eq!(order.intent.items().len(), 1);
        assert_eq!(order.intent.items()[0].quantity, 3);
        assert_eq!(order.total, Price(60000));
        assert_eq!(order.reference.len(), 14);
        assert!(session.is_confirmed());
    }
}
