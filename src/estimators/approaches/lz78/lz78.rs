use ndarray::{Array1, Array2};

use super::lz78_utils::{Symbol, alphabet_size, entropy_rate, phrase_count, rows_as_vec};
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};
use crate::estimators::validation::{InputValidator, ValidationError};

/// Lempel–Ziv (LZ78) entropy-rate estimator for discrete data (log base 2).
///
/// Partitions the sample into a maximal set of distinct phrases with the LZ78
/// dictionary rule and plugs the phrase count c into
/// H = c * (log2 c + ceil(log2 a)) / n, which converges to the entropy rate
/// of a stationary ergodic source as the sample grows. Distribution-free: no
/// probabilistic model is fitted.
///
/// A single observation or a single-symbol alphabet carries no rate
/// information and estimates to exactly 0. The estimate is a whole-sequence
/// complexity measure, so local values are not supported.
pub struct Lz78Entropy<S: Symbol = i32> {
    data: Array1<S>,
}

impl<S: Symbol> Lz78Entropy<S> {
    pub fn new(data: Array1<S>) -> Self {
        Self { data }
    }

    /// Build a vector of Lz78Entropy estimators, one per row of a 2D array.
    pub fn from_rows(data: Array2<S>) -> Vec<Self> {
        rows_as_vec(data).into_iter().map(Self::new).collect()
    }

    /// Final phrase-table size `c`: the seed entry, every novel phrase, and
    /// one compensation entry when the input ends mid-phrase on a known
    /// prefix.
    pub fn phrase_count(&self) -> usize {
        phrase_count(self.as_slice())
    }

    fn as_slice(&self) -> &[S] {
        self.data
            .as_slice()
            .expect("ndarray Array1 should be contiguous")
    }
}

impl<S: Symbol> GlobalValue for Lz78Entropy<S> {
    /// Estimate the entropy rate in bits per symbol.
    fn global_value(&self) -> f64 {
        let seq = self.as_slice();
        let n = seq.len();
        if n <= 1 {
            return 0.0;
        }
        let a = alphabet_size(seq);
        if a <= 1 {
            // Deterministic source; the log2 terms would be degenerate.
            return 0.0;
        }
        entropy_rate(phrase_count(seq), n, a)
    }
}

impl<S: Symbol> OptionalLocalValues for Lz78Entropy<S> {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Err("Local values are not supported for the LZ78 estimator as the phrase count is a whole-sequence complexity measure.")
    }
}

/// Estimate the entropy rate of a stochastic source from a sample of the
/// symbols it emits.
///
/// Unless `skip_validation` is set, the sample is checked against the default
/// minimum size (5 outcomes) before parsing; a failed check yields no
/// estimate.
///
/// # Arguments
///
/// * `sequence` - The sequence of symbols produced by the source whose
///   entropy rate we want to estimate
/// * `skip_validation` - Disable the input check, at the caller's own risk
///
/// # Returns
///
/// The entropy-rate estimate in bits per symbol, or a [`ValidationError`] for
/// samples below the minimum size.
pub fn estimate_entropy_rate<S: Symbol>(
    sequence: &[S],
    skip_validation: bool,
) -> Result<f64, ValidationError> {
    estimate_entropy_rate_with_validator(sequence, &InputValidator::default(), skip_validation)
}

/// Same as [`estimate_entropy_rate`], with an explicit validator
/// configuration.
pub fn estimate_entropy_rate_with_validator<S: Symbol>(
    sequence: &[S],
    validator: &InputValidator,
    skip_validation: bool,
) -> Result<f64, ValidationError> {
    if !skip_validation {
        validator.check_sample(sequence)?;
    }
    Ok(Lz78Entropy::new(Array1::from(sequence.to_vec())).global_value())
}
