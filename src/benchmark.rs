//! FilterBenchmark - setup once, measure two equivalent filters
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌─────────────────────┐
//! │  setup   │───▶│    verify    │───▶│ criterion group     │
//! │ (1M i32) │    │ (both agree) │    │  declarative/manual │
//! └──────────┘    └──────────────┘    └─────────────────────┘
//! ```
//!
//! The dataset is built once and never mutated, so the measured operations
//! only read it and allocate their own result vector.

use std::fmt;
use std::hint::black_box;

use alloc_tracker::Session;
use criterion::{Criterion, Throughput};

use crate::dataset::Dataset;
use crate::error::BenchError;
use crate::filter::{declarative_filter, manual_filter};

/// Criterion group name; also the prefix of every reported row
pub const GROUP_NAME: &str = "filter_even_gt_500";

/// The measured operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Declarative,
    Manual,
}

impl FilterOp {
    pub const ALL: [FilterOp; 2] = [FilterOp::Declarative, FilterOp::Manual];

    pub fn name(self) -> &'static str {
        match self {
            FilterOp::Declarative => "declarative",
            FilterOp::Manual => "manual_loop",
        }
    }

    #[inline]
    pub fn apply(self, values: &[i32]) -> Vec<i32> {
        match self {
            FilterOp::Declarative => declarative_filter(values),
            FilterOp::Manual => manual_filter(values),
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of the pre-measurement agreement check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equivalence {
    pub matched: usize,
    pub total: usize,
}

impl Equivalence {
    /// Share of the dataset kept by the predicate, in percent
    pub fn selectivity_pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched as f64 / self.total as f64 * 100.0
    }
}

pub struct FilterBenchmark {
    dataset: Dataset,
}

impl FilterBenchmark {
    /// One-time setup: generate the full dataset.
    pub fn setup(seed: Option<u64>) -> Self {
        Self::with_dataset(Dataset::generate(seed))
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Iterator-pipeline variant
    pub fn declarative(&self) -> Vec<i32> {
        declarative_filter(self.dataset.as_slice())
    }

    /// Manual-loop variant
    pub fn manual(&self) -> Vec<i32> {
        manual_filter(self.dataset.as_slice())
    }

    /// Run both operations once and fail if they disagree.
    pub fn verify_equivalence(&self) -> Result<Equivalence, BenchError> {
        let matched = compare_results(&self.declarative(), &self.manual())?;
        let eq = Equivalence {
            matched,
            total: self.dataset.len(),
        };
        tracing::info!(
            matched = eq.matched,
            total = eq.total,
            selectivity_pct = eq.selectivity_pct(),
            "Filter results verified"
        );
        Ok(eq)
    }

    /// Register one criterion function per [`FilterOp`] under [`GROUP_NAME`].
    ///
    /// With `allocs` set, every iteration is also measured for allocation
    /// volume; call `Session::print_to_stdout` after the run.
    pub fn register(&self, c: &mut Criterion, allocs: Option<&Session>) {
        let values = self.dataset.as_slice();
        let mut group = c.benchmark_group(GROUP_NAME);
        group.throughput(Throughput::Elements(values.len() as u64));

        for op in FilterOp::ALL {
            let tracked = allocs.map(|s| s.operation(op.name()));
            tracing::debug!(op = op.name(), allocs = tracked.is_some(), "Registering");

            group.bench_function(op.name(), |b| {
                b.iter(|| {
                    let _span = tracked.as_ref().map(|t| t.measure_process());
                    op.apply(black_box(values))
                })
            });
        }

        group.finish();
    }
}

/// Compare the two result sequences element by element.
///
/// Returns the common length on success.
pub fn compare_results(declarative: &[i32], manual: &[i32]) -> Result<usize, BenchError> {
    if declarative.len() != manual.len() {
        return Err(BenchError::FilterMismatch(format!(
            "length {} (declarative) vs {} (manual)",
            declarative.len(),
            manual.len()
        )));
    }

    if let Some(idx) = declarative.iter().zip(manual).position(|(a, b)| a != b) {
        return Err(BenchError::FilterMismatch(format!(
            "index {}: {} (declarative) vs {} (manual)",
            idx, declarative[idx], manual[idx]
        )));
    }

    Ok(declarative.len())
}
