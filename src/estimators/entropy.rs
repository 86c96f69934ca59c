use crate::estimators::approaches::lz78;
use crate::estimators::approaches::lz78::Symbol;
use ndarray::Array1;
pub use crate::estimators::traits::GlobalValue;

/// Entropy estimation methods for discrete data
///
/// This struct provides static methods for creating entropy-rate estimators
/// for different symbol types.
pub struct Entropy;

// Non-generic implementation (1D integer default case)
impl Entropy {
    /// Creates a new Lempel–Ziv (LZ78) entropy-rate estimator for 1D integer data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of integer symbols
    ///
    /// # Returns
    ///
    /// An LZ78 entropy-rate estimator configured for the provided data
    pub fn new_lz78(data: Array1<i32>) -> lz78::Lz78Entropy {
        lz78::Lz78Entropy::new(data)
    }

    /// Creates a new LZ78 entropy-rate estimator for an arbitrary discrete symbol type
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of symbols; any `Clone + Eq + Hash` type
    ///
    /// # Returns
    ///
    /// An LZ78 entropy-rate estimator configured for the provided data
    pub fn new_lz78_of<S: Symbol>(data: Array1<S>) -> lz78::Lz78Entropy<S> {
        lz78::Lz78Entropy::new(data)
    }
}
