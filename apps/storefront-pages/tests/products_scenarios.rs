//! Product list scenarios.

mod common;

use std::sync::Arc;

use common::FakeApi;
use storefront_client::ClientError;
use storefront_core::{ProductRecord, ProductsResponse};
use storefront_pages::dom::{DocumentState, Element};
use storefront_pages::state::products::*;
use storefront_pages::state::{LoadOutcome, PageConfig, ProductListWidget};

fn mount(api: FakeApi) -> (ProductListWidget, DocumentState, Arc<FakeApi>) {
    let api = Arc::new(api);
    let doc = DocumentState::new(ProductListWidget::page());
    api.observe(doc.clone());
    let widget =
        ProductListWidget::mount(doc.clone(), api.clone(), PageConfig::default()).unwrap();
    (widget, doc, api)
}

fn one_keyboard() -> FakeApi {
    FakeApi::new().on_products(|| {
        Ok(ProductsResponse {
            products: vec![product(3, "Keyboard", 2500.0)],
        })
    })
}

fn product(id: u64, name: &str, price: f64) -> ProductRecord {
    ProductRecord {
        id: Some(id),
        name: name.to_string(),
        price,
    }
}

#[tokio::test]
async fn server_error_shows_status_and_error_item() {
    let (widget, doc, _) =
        mount(FakeApi::new().on_products(|| Err(ClientError::http_status(500, "boom"))));

    let outcome = widget.load().await.unwrap();

    assert!(matches!(outcome, LoadOutcome::Failed(ref m) if m.contains("500")));
    doc.with_doc(|d| {
        let status = d.text(STATUS_MESSAGE_ID).unwrap();
        assert!(status.starts_with("Load failed: "), "{status}");
        assert!(status.contains("500"), "{status}");

        let items = d.children(PRODUCT_LIST_ID).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tag, "li");
        assert_eq!(items[0].text_content(), LOAD_ERROR_ITEM);
        assert!(!d.is_disabled(LOAD_PRODUCTS_BTN_ID).unwrap());
    });
}

#[tokio::test]
async fn products_render_name_and_price() {
    let (widget, doc, _) = mount(FakeApi::new().on_products(|| {
        Ok(ProductsResponse {
            products: vec![product(1, "Laptop", 35000.0), product(2, "Mouse", 800.0)],
        })
    }));

    assert_eq!(widget.load().await.unwrap(), LoadOutcome::Loaded(2));

    doc.with_doc(|d| {
        let items = d.children(PRODUCT_LIST_ID).unwrap();
        assert_eq!(items.len(), 2);

        let first: &Element = &items[0];
        assert_eq!(first.children[0].tag, "strong");
        assert_eq!(first.children[0].text, "Laptop");
        assert_eq!(first.children[1].tag, "span");
        assert_eq!(first.children[1].text, "NT$ 35,000");
        assert_eq!(items[1].children[1].text, "NT$ 800");

        assert_eq!(d.text(STATUS_MESSAGE_ID).unwrap(), "");
        assert!(!d.is_disabled(LOAD_PRODUCTS_BTN_ID).unwrap());
    });
}

#[tokio::test]
async fn empty_catalogue_shows_placeholder() {
    let (widget, doc, _) = mount(FakeApi::new().on_products(|| Ok(ProductsResponse::default())));

    assert_eq!(widget.load().await.unwrap(), LoadOutcome::Loaded(0));

    doc.with_doc(|d| {
        let items = d.children(PRODUCT_LIST_ID).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text_content(), NO_PRODUCTS_MESSAGE);
    });
}

#[tokio::test]
async fn reload_replaces_previous_items() {
    let (widget, doc, _) = mount(one_keyboard());

    widget.load().await.unwrap();
    widget.load().await.unwrap();

    assert_eq!(doc.with_doc(|d| d.children(PRODUCT_LIST_ID).map(|c| c.len())).unwrap(), 1);
}

#[tokio::test]
async fn unrepresentable_price_fails_the_load() {
    let (widget, doc, _) = mount(
        FakeApi::new().on_products(|| {
            Ok(ProductsResponse {
                products: vec![product(4, "Broken", f64::NAN)],
            })
        }),
    );

    let outcome = widget.load().await.unwrap();

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert_eq!(
        doc.with_doc(|d| d.children(PRODUCT_LIST_ID).map(|c| c.len())).unwrap(),
        1
    );
}

#[tokio::test]
async fn connection_failure_mentions_the_url() {
    let (widget, doc, _) = mount(FakeApi::new().on_products(|| {
        Err(ClientError::Connection("http://127.0.0.1:5000/api/products".into()))
    }));

    widget.load().await.unwrap();

    let status = doc.with_doc(|d| d.text(STATUS_MESSAGE_ID)).unwrap();
    assert_eq!(
        status,
        "Load failed: Cannot connect to http://127.0.0.1:5000/api/products"
    );
}

#[tokio::test]
async fn button_is_disabled_and_status_loading_while_fetching() {
    let (widget, doc, api) = mount(one_keyboard());

    widget.load().await.unwrap();

    assert_eq!(
        *api.load_state_in_flight.lock().unwrap(),
        vec![(true, LOADING_MESSAGE.to_string())]
    );
    assert!(!doc.with_doc(|d| d.is_disabled(LOAD_PRODUCTS_BTN_ID)).unwrap());
}

#[tokio::test]
async fn second_click_while_loading_sends_nothing() {
    let (widget, doc, api) = mount(one_keyboard());

    let (first, second) = tokio::join!(widget.load(), widget.load());

    assert_eq!(first.unwrap(), LoadOutcome::Loaded(1));
    assert_eq!(second.unwrap(), LoadOutcome::Busy);
    assert_eq!(api.product_count(), 1);
    assert_eq!(doc.with_doc(|d| d.children(PRODUCT_LIST_ID).map(|c| c.len())).unwrap(), 1);

    // Once the first load finishes the button works again.
    assert_eq!(widget.load().await.unwrap(), LoadOutcome::Loaded(1));
    assert_eq!(api.product_count(), 2);
}

#[test]
fn mount_requires_the_list() {
    let mut page = ProductListWidget::page();
    page.remove(PRODUCT_LIST_ID);
    let result = ProductListWidget::mount(
        DocumentState::new(page),
        Arc::new(FakeApi::new()),
        PageConfig::default(),
    );
    assert!(result.is_err());
}
