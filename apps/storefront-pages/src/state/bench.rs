//! # Benchmark Widgets
//!
//! Two timing pages.
//!
//! ## DOM Append
//! ```text
//! naive:    for i in 1..=n { container.append(<div>item{i}</div>) }   n writes
//! batched:  container.innerHTML = "<div>item1</div>...<div>itemN</div>"  1 write
//! ```
//! Both strategies leave identical child text. Each run clears both
//! containers first and prepends a "Total time: x.xx ms" line.
//!
//! ## Dedup
//! The page shows both strategies over the fixed sample. A sweep over
//! larger generated inputs is logged and returned.

use std::fmt::Write as _;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use storefront_core::dedup::{compare_strategies, DedupComparison};
use storefront_core::{BenchmarkSample, DEDUP_SAMPLE};
use tracing::{debug, info, warn};

use crate::dom::{Document, DocumentState, Element};
use crate::error::PageResult;
use crate::state::config::PageConfig;

// =============================================================================
// DOM Append
// =============================================================================

pub const RUN_ORIGINAL_ID: &str = "run-original";
pub const RUN_OPTIMIZED_ID: &str = "run-optimized";
pub const CLEAR_RESULTS_ID: &str = "clear-results";
pub const ORIGINAL_RESULT_ID: &str = "original-result";
pub const OPTIMIZED_RESULT_ID: &str = "optimized-result";

const DOM_BENCH_IDS: [&str; 5] = [
    RUN_ORIGINAL_ID,
    RUN_OPTIMIZED_ID,
    CLEAR_RESULTS_ID,
    ORIGINAL_RESULT_ID,
    OPTIMIZED_RESULT_ID,
];

/// Text of the `index`th (0-based) generated element.
pub fn item_text(index: usize) -> String {
    format!("item{}", index + 1)
}

/// Summary line prepended to a result container.
pub fn total_time_line(elapsed_ms: f64) -> String {
    format!("Total time: {:.2} ms", elapsed_ms)
}

#[derive(Debug, Clone)]
pub struct DomBenchWidget {
    doc: DocumentState,
    count: usize,
}

impl DomBenchWidget {
    pub fn page() -> Document {
        Document::with_elements(&[
            ("button", RUN_ORIGINAL_ID),
            ("button", RUN_OPTIMIZED_ID),
            ("button", CLEAR_RESULTS_ID),
            ("div", ORIGINAL_RESULT_ID),
            ("div", OPTIMIZED_RESULT_ID),
        ])
    }

    pub fn mount(doc: DocumentState, config: &PageConfig) -> PageResult<Self> {
        doc.with_doc(|d| d.require_all(&DOM_BENCH_IDS))?;
        debug!(count = config.dom_append_count, "DOM benchmark mounted");
        Ok(DomBenchWidget {
            doc,
            count: config.dom_append_count,
        })
    }

    /// Empties both result containers.
    pub fn clear(&self) -> PageResult<()> {
        self.doc.with_doc_mut(|d| {
            d.set_inner_html(ORIGINAL_RESULT_ID, "")?;
            d.set_inner_html(OPTIMIZED_RESULT_ID, "")
        })?;
        debug!("Benchmark results cleared");
        Ok(())
    }

    /// Appends one element at a time, taking the document lock per item.
    pub fn run_naive(&self) -> PageResult<BenchmarkSample> {
        self.clear()?;
        info!(count = self.count, "Running naive append");

        let start = Instant::now();
        for i in 0..self.count {
            let div = Element::new("div").with_text(item_text(i));
            self.doc
                .with_doc_mut(|d| d.append_child(ORIGINAL_RESULT_ID, div))?;
        }
        let sample = self.finish(ORIGINAL_RESULT_ID, start)?;

        info!(elapsed_ms = sample.elapsed_ms, "Naive append finished");
        Ok(sample)
    }

    /// Builds the whole markup first and assigns it in a single write.
    pub fn run_batched(&self) -> PageResult<BenchmarkSample> {
        self.clear()?;
        info!(count = self.count, "Running batched append");

        let start = Instant::now();
        let mut markup = String::with_capacity(self.count * 20);
        for i in 0..self.count {
            let _ = write!(markup, "<div>{}</div>", item_text(i));
        }
        self.doc
            .with_doc_mut(|d| d.set_inner_html(OPTIMIZED_RESULT_ID, &markup))?;
        let sample = self.finish(OPTIMIZED_RESULT_ID, start)?;

        info!(elapsed_ms = sample.elapsed_ms, "Batched append finished");
        Ok(sample)
    }

    fn finish(&self, container: &str, start: Instant) -> PageResult<BenchmarkSample> {
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.doc.with_doc_mut(|d| {
            d.prepend_child(
                container,
                Element::new("div").with_text(total_time_line(elapsed_ms)),
            )
        })?;
        Ok(BenchmarkSample {
            size: self.count,
            elapsed_ms,
        })
    }
}

// =============================================================================
// Dedup
// =============================================================================

pub const METHOD1_DESCRIPTION_ID: &str = "method1Description";
pub const METHOD1_TIME_ID: &str = "method1Time";
pub const METHOD2_DESCRIPTION_ID: &str = "method2Description";
pub const METHOD2_TIME_ID: &str = "method2Time";

const DEDUP_IDS: [&str; 4] = [
    METHOD1_DESCRIPTION_ID,
    METHOD1_TIME_ID,
    METHOD2_DESCRIPTION_ID,
    METHOD2_TIME_ID,
];

/// `len` values drawn uniformly from `1..=max_value`.
pub fn generate_input(rng: &mut impl Rng, len: usize, max_value: i64) -> Vec<i64> {
    let max_value = max_value.max(1);
    (0..len).map(|_| rng.gen_range(1..=max_value)).collect()
}

#[derive(Debug, Clone)]
pub struct DedupBenchWidget {
    doc: DocumentState,
    config: PageConfig,
}

impl DedupBenchWidget {
    pub fn page() -> Document {
        Document::with_elements(&[
            ("p", METHOD1_DESCRIPTION_ID),
            ("p", METHOD1_TIME_ID),
            ("p", METHOD2_DESCRIPTION_ID),
            ("p", METHOD2_TIME_ID),
        ])
    }

    pub fn mount(doc: DocumentState, config: PageConfig) -> PageResult<Self> {
        doc.with_doc(|d| d.require_all(&DEDUP_IDS))?;
        Ok(DedupBenchWidget { doc, config })
    }

    /// Runs both strategies over the fixed sample and shows the results.
    pub fn run_sample(&self) -> PageResult<DedupComparison> {
        let comparison = compare_strategies(&DEDUP_SAMPLE);

        self.doc.with_doc_mut(|d| {
            d.set_text(
                METHOD1_DESCRIPTION_ID,
                format!("{} unique elements", comparison.naive_len),
            )?;
            d.set_text(
                METHOD1_TIME_ID,
                format!("Elapsed: {:.3} ms", comparison.naive.elapsed_ms),
            )?;
            d.set_text(
                METHOD2_DESCRIPTION_ID,
                format!("{} unique elements", comparison.fast_len),
            )?;
            d.set_text(
                METHOD2_TIME_ID,
                format!("Elapsed: {:.3} ms", comparison.fast.elapsed_ms),
            )
        })?;

        info!(
            naive_ms = comparison.naive.elapsed_ms,
            fast_ms = comparison.fast.elapsed_ms,
            "Dedup sample"
        );
        Ok(comparison)
    }

    /// Compares both strategies over generated inputs of each configured size.
    pub fn sweep(&self) -> Vec<DedupComparison> {
        let mut rng = StdRng::seed_from_u64(self.config.dedup_seed);

        self.config
            .dedup_sizes
            .iter()
            .map(|&size| {
                let input = generate_input(&mut rng, size, self.config.dedup_max_value);
                let comparison = compare_strategies(&input);

                info!(
                    size,
                    naive_ms = comparison.naive.elapsed_ms,
                    fast_ms = comparison.fast.elapsed_ms,
                    unique = comparison.fast_len,
                    "Dedup sweep"
                );
                if !comparison.lengths_match() {
                    warn!(
                        size,
                        naive_len = comparison.naive_len,
                        fast_len = comparison.fast_len,
                        "Dedup strategies disagree on length"
                    );
                }
                comparison
            })
            .collect()
    }
}
