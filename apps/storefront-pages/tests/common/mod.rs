//! In-memory `StorefrontApi` for page tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use storefront_client::{ClientResult, StorefrontApi, SubmitReply};
use storefront_core::{ProductsResponse, SubmissionPayload};
use storefront_pages::dom::DocumentState;
use storefront_pages::state::form::SUBMIT_BTN_ID;
use storefront_pages::state::products::{LOAD_PRODUCTS_BTN_ID, STATUS_MESSAGE_ID};

type SubmitFn = Box<dyn Fn(&SubmissionPayload) -> ClientResult<SubmitReply> + Send + Sync>;
type ProductsFn = Box<dyn Fn() -> ClientResult<ProductsResponse> + Send + Sync>;

fn unexpected_submit(_: &SubmissionPayload) -> ClientResult<SubmitReply> {
    panic!("unexpected submit")
}

fn unexpected_fetch() -> ClientResult<ProductsResponse> {
    panic!("unexpected fetch_products")
}

/// Scripted backend that counts calls and records what the observed page
/// showed while each request was in flight.
pub struct FakeApi {
    submit: SubmitFn,
    products: ProductsFn,
    pub submit_calls: AtomicUsize,
    pub product_calls: AtomicUsize,
    pub submitted: Mutex<Vec<SubmissionPayload>>,
    pub button_disabled_in_flight: Mutex<Vec<bool>>,
    /// `(load button disabled, status text)` per fetch.
    pub load_state_in_flight: Mutex<Vec<(bool, String)>>,
    observed: Mutex<Option<DocumentState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        FakeApi {
            submit: Box::new(unexpected_submit),
            products: Box::new(unexpected_fetch),
            submit_calls: AtomicUsize::new(0),
            product_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
            button_disabled_in_flight: Mutex::new(Vec::new()),
            load_state_in_flight: Mutex::new(Vec::new()),
            observed: Mutex::new(None),
        }
    }

    pub fn on_submit(
        mut self,
        f: impl Fn(&SubmissionPayload) -> ClientResult<SubmitReply> + Send + Sync + 'static,
    ) -> Self {
        self.submit = Box::new(f);
        self
    }

    pub fn on_products(
        mut self,
        f: impl Fn() -> ClientResult<ProductsResponse> + Send + Sync + 'static,
    ) -> Self {
        self.products = Box::new(f);
        self
    }

    /// Lets the fake inspect the page document during a request.
    pub fn observe(&self, doc: DocumentState) {
        *self.observed.lock().unwrap() = Some(doc);
    }

    pub fn submit_count(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn product_count(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorefrontApi for FakeApi {
    async fn submit(&self, payload: &SubmissionPayload) -> ClientResult<SubmitReply> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(payload.clone());

        let observed = self.observed.lock().unwrap().clone();
        if let Some(doc) = observed {
            let disabled = doc.with_doc(|d| d.is_disabled(SUBMIT_BTN_ID)).unwrap();
            self.button_disabled_in_flight.lock().unwrap().push(disabled);
        }

        tokio::task::yield_now().await;
        (self.submit)(payload)
    }

    async fn fetch_products(&self) -> ClientResult<ProductsResponse> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);

        let observed = self.observed.lock().unwrap().clone();
        if let Some(doc) = observed {
            let state = doc.with_doc(|d| {
                (
                    d.is_disabled(LOAD_PRODUCTS_BTN_ID).unwrap(),
                    d.text(STATUS_MESSAGE_ID).unwrap(),
                )
            });
            self.load_state_in_flight.lock().unwrap().push(state);
        }

        tokio::task::yield_now().await;
        (self.products)()
    }
}
