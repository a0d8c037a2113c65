//! Cart widget properties.

use proptest::prelude::*;
use storefront_pages::dom::DocumentState;
use storefront_pages::state::cart::*;
use storefront_pages::state::{CartState, CartWidget};

fn mounted() -> (CartWidget, DocumentState) {
    let doc = DocumentState::new(CartWidget::page());
    let widget = CartWidget::mount(doc.clone(), CartState::new()).unwrap();
    (widget, doc)
}

#[derive(Debug, Clone)]
enum Step {
    Plus,
    Minus,
    Blur,
    Type(String),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Plus),
        Just(Step::Minus),
        Just(Step::Blur),
        "[-0-9a-z. ]{0,6}".prop_map(Step::Type),
    ]
}

proptest! {
    #[test]
    fn quantity_field_never_goes_negative(steps in prop::collection::vec(step(), 1..40)) {
        let (widget, _) = mounted();
        for s in steps {
            match s {
                Step::Plus => widget.on_plus().unwrap(),
                Step::Minus => widget.on_minus().unwrap(),
                Step::Blur => widget.on_blur().unwrap(),
                Step::Type(raw) => widget.type_quantity(&raw).unwrap(),
            }
            let field = widget.quantity_field().unwrap();
            prop_assert!(field.parse::<u64>().is_ok(), "field = {:?}", field);
        }
        prop_assert_eq!(widget.total(), 0);
    }

    #[test]
    fn adding_k_grows_total_by_k(adds in prop::collection::vec(1u64..500, 1..10)) {
        let (widget, doc) = mounted();
        let mut expected = 0;
        for k in adds {
            widget.type_quantity(&k.to_string()).unwrap();
            widget.on_add_to_cart().unwrap();
            expected += k;

            prop_assert_eq!(widget.total(), expected);
            prop_assert_eq!(doc.with_doc(|d| d.text(CART_TOTAL_ID)).unwrap(), expected.to_string());
            prop_assert_eq!(widget.quantity_field().unwrap(), "1");
        }
    }

    #[test]
    fn minus_from_n_lands_on_n_minus_one(n in 1u64..1000) {
        let (widget, _) = mounted();
        widget.type_quantity(&n.to_string()).unwrap();
        widget.on_minus().unwrap();
        prop_assert_eq!(widget.quantity_field().unwrap(), (n - 1).to_string());
    }
}

#[test]
fn adding_zero_warns_and_keeps_total() {
    let (widget, doc) = mounted();
    widget.type_quantity("0").unwrap();
    widget.on_add_to_cart().unwrap();

    assert_eq!(widget.total(), 0);
    assert_eq!(
        doc.with_doc(|d| d.last_alert().map(str::to_string)).as_deref(),
        Some(ZERO_QUANTITY_MESSAGE)
    );
    assert_eq!(widget.quantity_field().unwrap(), "1");
}

#[test]
fn widgets_sharing_a_cart_see_one_total() {
    let cart = CartState::new();
    let a = CartWidget::mount(DocumentState::new(CartWidget::page()), cart.clone()).unwrap();
    let b = CartWidget::mount(DocumentState::new(CartWidget::page()), cart.clone()).unwrap();

    a.type_quantity("2").unwrap();
    a.on_add_to_cart().unwrap();
    b.type_quantity("5").unwrap();
    b.on_add_to_cart().unwrap();

    assert_eq!(cart.with_cart(|c| c.count), 7);
    assert_eq!(a.total(), 7);
}
