//! # Product List Widget
//!
//! Loads the catalogue from the backend on demand and renders one list item
//! per product.
//!
//! ```text
//! click "Load products"
//!    │  status = "Loading... please wait", button disabled
//!    ▼
//! StorefrontApi::fetch_products
//!    ├── Ok, non-empty ──► <li><strong>name</strong><span>NT$ 35,000</span></li> ...
//!    ├── Ok, empty ──────► <li>No products available.</li>
//!    └── Err ────────────► status = "Load failed: ...", single error item
//!    ▼
//! button enabled (always)
//!
//! click while disabled ──► Busy, no request
//! ```

use std::sync::Arc;

use storefront_client::StorefrontApi;
use storefront_core::{CoreResult, ProductRecord};
use tracing::{debug, error, info};

use crate::dom::{Document, DocumentState, Element};
use crate::error::{PageError, PageResult};
use crate::state::config::PageConfig;

pub const LOAD_PRODUCTS_BTN_ID: &str = "load-products-btn";
pub const PRODUCT_LIST_ID: &str = "product-list";
pub const STATUS_MESSAGE_ID: &str = "status-message";

const REQUIRED_IDS: [&str; 3] = [LOAD_PRODUCTS_BTN_ID, PRODUCT_LIST_ID, STATUS_MESSAGE_ID];

pub const LOADING_MESSAGE: &str = "Loading... please wait";
pub const NO_PRODUCTS_MESSAGE: &str = "No products available.";
pub const LOAD_ERROR_ITEM: &str =
    "An error occurred while loading products. Check the backend server or network connection.";

/// How a load attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Number of products rendered (0 shows the empty-list item).
    Loaded(usize),
    Failed(String),
    /// A previous load is still in flight; nothing was fetched.
    Busy,
}

#[derive(Clone)]
pub struct ProductListWidget {
    doc: DocumentState,
    api: Arc<dyn StorefrontApi>,
    config: PageConfig,
}

impl ProductListWidget {
    pub fn page() -> Document {
        Document::with_elements(&[
            ("button", LOAD_PRODUCTS_BTN_ID),
            ("ul", PRODUCT_LIST_ID),
            ("p", STATUS_MESSAGE_ID),
        ])
    }

    pub fn mount(
        doc: DocumentState,
        api: Arc<dyn StorefrontApi>,
        config: PageConfig,
    ) -> PageResult<Self> {
        doc.with_doc(|d| d.require_all(&REQUIRED_IDS))?;
        debug!("Product list widget mounted");
        Ok(ProductListWidget { doc, api, config })
    }

    /// Handles a click on the load button.
    pub async fn load(&self) -> PageResult<LoadOutcome> {
        let claimed = self.doc.with_doc_mut(|d| {
            if d.is_disabled(LOAD_PRODUCTS_BTN_ID)? {
                return Ok(false);
            }
            d.set_text(STATUS_MESSAGE_ID, LOADING_MESSAGE)?;
            d.set_disabled(LOAD_PRODUCTS_BTN_ID, true)?;
            Ok::<_, PageError>(true)
        })?;
        if !claimed {
            debug!("Load ignored while a request is in flight");
            return Ok(LoadOutcome::Busy);
        }

        let result = match self.api.fetch_products().await {
            Ok(response) => self
                .render_items(&response.products)
                .map(|items| (items, response.products.len()))
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        let rendered = match result {
            Ok((items, count)) => self
                .doc
                .with_doc_mut(|d| {
                    d.set_inner_html(PRODUCT_LIST_ID, "")?;
                    for item in items {
                        d.append_child(PRODUCT_LIST_ID, item)?;
                    }
                    d.set_text(STATUS_MESSAGE_ID, "")
                })
                .map(|()| {
                    info!(count, "Products rendered");
                    LoadOutcome::Loaded(count)
                }),
            Err(message) => {
                error!(error = %message, "Loading products failed");
                self.doc
                    .with_doc_mut(|d| {
                        d.set_text(STATUS_MESSAGE_ID, format!("Load failed: {}", message))?;
                        d.set_inner_html(PRODUCT_LIST_ID, &format!("<li>{}</li>", LOAD_ERROR_ITEM))
                    })
                    .map(|()| LoadOutcome::Failed(message))
            }
        };

        let enabled = self
            .doc
            .with_doc_mut(|d| d.set_disabled(LOAD_PRODUCTS_BTN_ID, false));
        let outcome = rendered?;
        enabled?;

        Ok(outcome)
    }

    /// Builds the list items; an empty catalogue yields the placeholder item.
    fn render_items(&self, products: &[ProductRecord]) -> CoreResult<Vec<Element>> {
        if products.is_empty() {
            return Ok(vec![Element::new("li").with_text(NO_PRODUCTS_MESSAGE)]);
        }

        products
            .iter()
            .map(|product| {
                let price = self.config.format_price(product.price_money()?);
                Ok(Element::new("li")
                    .with_child(Element::new("strong").with_text(product.name.clone()))
                    .with_child(Element::new("span").with_text(price)))
            })
            .collect()
    }
}
