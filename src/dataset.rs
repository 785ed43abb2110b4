//! Benchmark Dataset Generator
//!
//! Produces the fixed input both filters run over: `DATASET_LEN` integers,
//! each drawn uniformly from `VALUE_RANGE`.
//!
//! # Seeding
//!
//! Passing `Some(seed)` makes generation bit-exact across runs (same seed,
//! same dataset). `None` draws from OS entropy, which is fine for manual
//! benchmarking but not for tests.
//!
//! ```rust,ignore
//! use filter_bench::dataset::Dataset;
//!
//! let ds = Dataset::generate(Some(42));
//! assert_eq!(ds.len(), filter_bench::dataset::DATASET_LEN);
//! ```

use std::ops::Range;
use std::time::Instant;

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of values generated per benchmark run
pub const DATASET_LEN: usize = 1_000_000;

/// Half-open range every generated value is sampled from
pub const VALUE_RANGE: Range<i32> = 1..1000;

/// Immutable, ordered benchmark input.
///
/// Only ever handed out as `&[i32]`, so it can be shared read-only across
/// threads once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Box<[i32]>,
    seed: Option<u64>,
}

impl Dataset {
    /// Generate the full-size dataset.
    ///
    /// `seed = None` seeds from OS entropy.
    pub fn generate(seed: Option<u64>) -> Self {
        let start = Instant::now();
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut ds = Self::from_rng(&mut rng, DATASET_LEN);
        ds.seed = seed;

        tracing::info!(
            len = ds.len(),
            seed = ?seed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Dataset generated"
        );
        ds
    }

    /// Sample `len` values from `VALUE_RANGE` using the given RNG.
    pub fn from_rng<R: Rng>(rng: &mut R, len: usize) -> Self {
        let dist = Uniform::from(VALUE_RANGE);
        let values: Vec<i32> = (0..len).map(|_| rng.sample(&dist)).collect();
        Self {
            values: values.into_boxed_slice(),
            seed: None,
        }
    }

    /// Wrap explicit values (fixed scenarios, tests).
    pub fn from_values(values: Vec<i32>) -> Self {
        Self {
            values: values.into_boxed_slice(),
            seed: None,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Seed this dataset was generated from, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
