//! # Cart Widget
//!
//! Quantity stepper and running cart total. No server interaction.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Widget Events                                   │
//! │                                                                         │
//! │  User Action            Handler            Effect                       │
//! │  ───────────            ───────            ──────                       │
//! │                                                                         │
//! │  Type in field ───────► on_input() ──────► field = valid k, or "1"      │
//! │                                                                         │
//! │  Click "+" / "-" ─────► on_plus/minus() ─► field = max(0, n ± 1)        │
//! │                                            then on_input()              │
//! │                                                                         │
//! │  Leave field ─────────► on_blur() ───────► empty/NaN/negative → "1"     │
//! │                                                                         │
//! │  Click "Add to cart" ─► on_add_to_cart() ► total += k, field = "1"      │
//! │                                                                         │
//! │  NOTE: only add-to-cart touches the total.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use storefront_core::validation::{parse_leading_integer, validate_quantity_input};
use storefront_core::DEFAULT_QUANTITY;
use tracing::{debug, info};

use crate::dom::{Document, DocumentState, Element};
use crate::error::PageResult;

pub const CART_TOTAL_ID: &str = "cart-total-quantity";
pub const PLUS_BTN_ID: &str = "plus-btn";
pub const MINUS_BTN_ID: &str = "minus-btn";
pub const QUANTITY_INPUT_ID: &str = "quantity-input";
pub const ADD_TO_CART_BTN_ID: &str = "add-to-cart-btn";

const REQUIRED_IDS: [&str; 5] = [
    CART_TOTAL_ID,
    PLUS_BTN_ID,
    MINUS_BTN_ID,
    QUANTITY_INPUT_ID,
    ADD_TO_CART_BTN_ID,
];

pub const ZERO_QUANTITY_MESSAGE: &str =
    "Please enter a quantity greater than 0 to add to the cart!";

/// Running total of items added this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cart {
    pub count: u64,
}

/// Cart shared between handlers.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut cart)
    }
}

/// The cart widget bound to its document elements.
#[derive(Debug, Clone)]
pub struct CartWidget {
    doc: DocumentState,
    cart: CartState,
}

impl CartWidget {
    /// A document with every element the widget needs, quantity preset to 1.
    pub fn page() -> Document {
        let mut doc = Document::with_elements(&[
            ("span", CART_TOTAL_ID),
            ("button", PLUS_BTN_ID),
            ("button", MINUS_BTN_ID),
            ("button", ADD_TO_CART_BTN_ID),
        ]);
        doc.insert(
            Element::new("input")
                .with_id(QUANTITY_INPUT_ID)
                .with_value(DEFAULT_QUANTITY.to_string()),
        );
        doc
    }

    /// Binds to the document and renders the empty total.
    pub fn mount(doc: DocumentState, cart: CartState) -> PageResult<Self> {
        doc.with_doc(|d| d.require_all(&REQUIRED_IDS))?;

        let widget = CartWidget { doc, cart };
        widget.render_total()?;
        debug!("Cart widget mounted");
        Ok(widget)
    }

    pub fn total(&self) -> u64 {
        self.cart.with_cart(|c| c.count)
    }

    pub fn quantity_field(&self) -> PageResult<String> {
        self.doc.with_doc(|d| d.value(QUANTITY_INPUT_ID))
    }

    /// Types `raw` into the quantity field and fires the input event.
    pub fn type_quantity(&self, raw: &str) -> PageResult<()> {
        self.write_field(raw)?;
        self.on_input()
    }

    /// Validates the field; invalid input is reported and replaced by 1.
    pub fn on_input(&self) -> PageResult<()> {
        let raw = self.quantity_field()?;
        debug!(raw = %raw, "Quantity input");

        match validate_quantity_input(&raw) {
            Ok(quantity) => self.write_field(&quantity.to_string()),
            Err(e) => {
                self.doc.with_doc_mut(|d| d.alert(e.to_string()));
                self.reset_field()
            }
        }
    }

    pub fn on_plus(&self) -> PageResult<()> {
        self.step(1)
    }

    pub fn on_minus(&self) -> PageResult<()> {
        self.step(-1)
    }

    fn step(&self, delta: i64) -> PageResult<()> {
        let current = parse_leading_integer(&self.quantity_field()?).unwrap_or(0);
        let next = current.saturating_add(delta).max(0);
        debug!(current, next, "Quantity step");

        self.write_field(&next.to_string())?;
        self.on_input()
    }

    pub fn on_blur(&self) -> PageResult<()> {
        let raw = self.quantity_field()?;
        let resets = raw.is_empty() || parse_leading_integer(&raw).map_or(true, |n| n < 0);
        if resets {
            self.reset_field()?;
        }
        self.on_input()
    }

    /// Adds the field's quantity to the total.
    ///
    /// ## Outcomes
    /// - 0: dedicated warning, total unchanged
    /// - valid k > 0: total += k, confirmation alert
    /// - invalid: validation message, total unchanged
    ///
    /// The field is reset to 1 in every case.
    pub fn on_add_to_cart(&self) -> PageResult<()> {
        let raw = self.quantity_field()?;

        match validate_quantity_input(&raw) {
            Ok(0) => {
                self.doc.with_doc_mut(|d| d.alert(ZERO_QUANTITY_MESSAGE));
            }
            Ok(quantity) => {
                let total = self.cart.with_cart_mut(|c| {
                    c.count = c.count.saturating_add(quantity);
                    c.count
                });
                self.render_total()?;
                self.doc.with_doc_mut(|d| {
                    d.alert(format!(
                        "Added {} item(s) to the cart! Total: {}",
                        quantity, total
                    ))
                });
                info!(quantity, total, "Added to cart");
            }
            Err(e) => {
                self.doc.with_doc_mut(|d| d.alert(e.to_string()));
            }
        }

        self.reset_field()
    }

    fn render_total(&self) -> PageResult<()> {
        let total = self.total();
        self.doc
            .with_doc_mut(|d| d.set_text(CART_TOTAL_ID, total.to_string()))
    }

    fn write_field(&self, value: &str) -> PageResult<()> {
        self.doc.with_doc_mut(|d| d.set_value(QUANTITY_INPUT_ID, value))
    }

    fn reset_field(&self) -> PageResult<()> {
        self.write_field(&DEFAULT_QUANTITY.to_string())
    }
}
