//! Benchmark page behaviour.

use storefront_pages::dom::{DocumentState, Element};
use storefront_pages::state::bench::*;
use storefront_pages::state::{DedupBenchWidget, DomBenchWidget, PageConfig};

fn config(count: usize) -> PageConfig {
    PageConfig {
        dom_append_count: count,
        dedup_sizes: vec![50, 500],
        dedup_max_value: 100,
        ..PageConfig::default()
    }
}

fn texts(children: &[Element]) -> Vec<String> {
    children.iter().map(Element::text_content).collect()
}

#[test]
fn both_strategies_produce_identical_items() {
    let doc = DocumentState::new(DomBenchWidget::page());
    let widget = DomBenchWidget::mount(doc.clone(), &config(200)).unwrap();

    let naive = widget.run_naive().unwrap();
    let naive_items = doc.with_doc(|d| d.children(ORIGINAL_RESULT_ID).map(|c| texts(c))).unwrap();

    let batched = widget.run_batched().unwrap();
    let batched_items =
        doc.with_doc(|d| d.children(OPTIMIZED_RESULT_ID).map(|c| texts(c))).unwrap();

    assert_eq!(naive.size, 200);
    assert_eq!(batched.size, 200);

    // First child is the timing line; the rest are the generated items.
    assert!(naive_items[0].starts_with("Total time: "));
    assert!(batched_items[0].starts_with("Total time: "));
    assert_eq!(naive_items[1..], batched_items[1..]);
    assert_eq!(naive_items.len(), 201);
    assert_eq!(naive_items[1], "item1");
    assert_eq!(naive_items[200], "item200");
}

#[test]
fn naive_writes_once_per_item_batched_once_overall() {
    let count = 300;

    let doc = DocumentState::new(DomBenchWidget::page());
    let widget = DomBenchWidget::mount(doc.clone(), &config(count)).unwrap();
    let before = doc.with_doc(|d| d.mutation_count());
    widget.run_naive().unwrap();
    let naive_writes = doc.with_doc(|d| d.mutation_count()) - before;

    let before = doc.with_doc(|d| d.mutation_count());
    widget.run_batched().unwrap();
    let batched_writes = doc.with_doc(|d| d.mutation_count()) - before;

    assert!(naive_writes >= count as u64, "{naive_writes}");
    assert!(batched_writes <= 4, "{batched_writes}");
}

#[test]
fn each_run_starts_from_empty_containers() {
    let doc = DocumentState::new(DomBenchWidget::page());
    let widget = DomBenchWidget::mount(doc.clone(), &config(10)).unwrap();

    widget.run_naive().unwrap();
    widget.run_naive().unwrap();
    widget.run_batched().unwrap();

    doc.with_doc(|d| {
        // The batched run cleared the naive container as well.
        assert!(d.children(ORIGINAL_RESULT_ID).unwrap().is_empty());
        assert_eq!(d.children(OPTIMIZED_RESULT_ID).unwrap().len(), 11);
    });

    widget.clear().unwrap();
    assert!(doc
        .with_doc(|d| d.children(OPTIMIZED_RESULT_ID).map(|c| c.is_empty()))
        .unwrap());
}

#[test]
fn dom_bench_mount_needs_containers() {
    let mut page = DomBenchWidget::page();
    page.remove(OPTIMIZED_RESULT_ID);
    assert!(DomBenchWidget::mount(DocumentState::new(page), &config(1)).is_err());
}

#[test]
fn dedup_sample_reports_five_unique() {
    let doc = DocumentState::new(DedupBenchWidget::page());
    let widget = DedupBenchWidget::mount(doc.clone(), config(1)).unwrap();

    let comparison = widget.run_sample().unwrap();

    assert!(comparison.lengths_match());
    doc.with_doc(|d| {
        assert_eq!(d.text(METHOD1_DESCRIPTION_ID).unwrap(), "5 unique elements");
        assert_eq!(d.text(METHOD2_DESCRIPTION_ID).unwrap(), "5 unique elements");
        assert!(d.text(METHOD1_TIME_ID).unwrap().starts_with("Elapsed: "));
        assert!(d.text(METHOD2_TIME_ID).unwrap().ends_with(" ms"));
    });
}

#[test]
fn dedup_sweep_follows_configured_sizes() {
    let doc = DocumentState::new(DedupBenchWidget::page());
    let widget = DedupBenchWidget::mount(doc, config(1)).unwrap();

    let results = widget.sweep();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].size(), 50);
    assert_eq!(results[1].size(), 500);
    assert!(results.iter().all(|c| c.lengths_match()));
    // Values are drawn from 1..=100, so at most 100 survive.
    assert!(results[1].fast_len <= 100);
}
