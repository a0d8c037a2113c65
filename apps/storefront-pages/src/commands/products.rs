//! # Products Command
//!
//! Clicks "Load products" once and prints the rendered list.

use std::io::Write;
use std::sync::Arc;

use storefront_client::StorefrontApi;

use crate::dom::DocumentState;
use crate::error::{PageError, PageResult};
use crate::state::products::{PRODUCT_LIST_ID, STATUS_MESSAGE_ID};
use crate::state::{LoadOutcome, PageConfig, ProductListWidget};

pub async fn load_products<W: Write>(
    api: Arc<dyn StorefrontApi>,
    config: PageConfig,
    out: &mut W,
) -> PageResult<LoadOutcome> {
    let doc = DocumentState::new(ProductListWidget::page());
    let widget = ProductListWidget::mount(doc.clone(), api, config)?;

    let outcome = widget.load().await?;

    let (status, items) = doc.with_doc(|d| {
        let status = d.text(STATUS_MESSAGE_ID)?;
        let items: Vec<String> = d
            .children(PRODUCT_LIST_ID)?
            .iter()
            .map(|item| {
                if item.children.is_empty() {
                    item.text_content()
                } else {
                    item.children
                        .iter()
                        .map(|part| part.text_content())
                        .collect::<Vec<_>>()
                        .join("  ")
                }
            })
            .collect();
        Ok::<_, PageError>((status, items))
    })?;

    if !status.is_empty() {
        writeln!(out, "{}", status)?;
    }
    for item in items {
        writeln!(out, "- {}", item)?;
    }

    Ok(outcome)
}
