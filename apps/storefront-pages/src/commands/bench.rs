//! # Benchmark Commands
//!
//! Run the DOM append and dedup pages headlessly and print their results.

use std::io::Write;

use clap::ValueEnum;
use storefront_core::dedup::DedupComparison;
use storefront_core::BenchmarkSample;

use crate::dom::DocumentState;
use crate::error::{PageError, PageResult};
use crate::state::bench::{
    METHOD1_DESCRIPTION_ID, METHOD1_TIME_ID, METHOD2_DESCRIPTION_ID, METHOD2_TIME_ID,
    OPTIMIZED_RESULT_ID, ORIGINAL_RESULT_ID,
};
use crate::state::{DedupBenchWidget, DomBenchWidget, PageConfig};

/// Which DOM append strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Naive,
    Batched,
    Both,
}

pub fn dom_bench<W: Write>(
    config: &PageConfig,
    strategy: Strategy,
    out: &mut W,
) -> PageResult<Vec<BenchmarkSample>> {
    let doc = DocumentState::new(DomBenchWidget::page());
    let widget = DomBenchWidget::mount(doc.clone(), config)?;
    let mut samples = Vec::new();

    if matches!(strategy, Strategy::Naive | Strategy::Both) {
        samples.push(widget.run_naive()?);
        report_container(&doc, ORIGINAL_RESULT_ID, "naive", out)?;
    }
    if matches!(strategy, Strategy::Batched | Strategy::Both) {
        samples.push(widget.run_batched()?);
        report_container(&doc, OPTIMIZED_RESULT_ID, "batched", out)?;
    }

    Ok(samples)
}

fn report_container<W: Write>(
    doc: &DocumentState,
    id: &str,
    label: &str,
    out: &mut W,
) -> PageResult<()> {
    let (summary, items) = doc.with_doc(|d| {
        let children = d.children(id)?;
        let summary = children.first().map(|c| c.text_content()).unwrap_or_default();
        Ok::<_, PageError>((summary, children.len().saturating_sub(1)))
    })?;
    writeln!(out, "{}: {} ({} elements)", label, summary, items)?;
    Ok(())
}

pub fn dedup_bench<W: Write>(
    config: PageConfig,
    out: &mut W,
) -> PageResult<Vec<DedupComparison>> {
    let doc = DocumentState::new(DedupBenchWidget::page());
    let widget = DedupBenchWidget::mount(doc.clone(), config)?;

    widget.run_sample()?;
    let lines = doc.with_doc(|d| {
        Ok::<_, PageError>([
            format!("method 1: {}, {}", d.text(METHOD1_DESCRIPTION_ID)?, d.text(METHOD1_TIME_ID)?),
            format!("method 2: {}, {}", d.text(METHOD2_DESCRIPTION_ID)?, d.text(METHOD2_TIME_ID)?),
        ])
    })?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }

    let sweep = widget.sweep();
    for comparison in &sweep {
        writeln!(
            out,
            "size {:>7}: naive {:>10.3} ms, hash set {:>8.3} ms, {} unique{}",
            comparison.size(),
            comparison.naive.elapsed_ms,
            comparison.fast.elapsed_ms,
            comparison.fast_len,
            if comparison.lengths_match() { "" } else { " (length mismatch)" }
        )?;
    }

    Ok(sweep)
}
