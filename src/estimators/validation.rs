use std::error::Error;
use std::fmt;

/// Default minimum number of outcomes required for a meaningful estimate.
pub const DEFAULT_MINIMUM_SAMPLE_SIZE: usize = 5;

/// Pre-parse input validation for entropy-rate estimation.
///
/// Carries the minimum-sample-size threshold as an explicit value instead of
/// process-wide state, so unrelated calls cannot observe each other's
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidator {
    min_sample_size: usize,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self {
            min_sample_size: DEFAULT_MINIMUM_SAMPLE_SIZE,
        }
    }
}

impl InputValidator {
    /// Create a validator with a custom minimum sample size.
    ///
    /// Lowering the minimum is allowed, at the caller's own risk; the accuracy
    /// of the estimate grows with the sample size.
    pub fn new(min_sample_size: usize) -> Self {
        Self { min_sample_size }
    }

    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }

    /// Check a sample against the configured minimum length.
    pub fn check_sample<S>(&self, sequence: &[S]) -> Result<(), ValidationError> {
        if sequence.len() < self.min_sample_size {
            return Err(ValidationError::SampleTooShort {
                len: sequence.len(),
                min: self.min_sample_size,
            });
        }
        Ok(())
    }
}

/// Errors raised before parsing begins. A failed validation yields no estimate.
///
/// There is no unsupported-data-kind variant: the symbol bound `Eq + Hash`
/// already excludes continuous-valued types at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The sample is shorter than the configured minimum.
    SampleTooShort { len: usize, min: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::SampleTooShort { len, min } => write!(
                f,
                "sample size {len} is below the minimum ({min} outcomes); a lower minimum \
                 can be set, at your own risk, via InputValidator::new. Keep in mind that \
                 the accuracy of the estimate grows with the sample size"
            ),
        }
    }
}

impl Error for ValidationError {}
