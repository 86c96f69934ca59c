pub mod entropy;
pub mod traits;
pub mod validation;
pub mod approaches;

pub use traits::{GlobalValue, OptionalLocalValues};
pub use validation::{InputValidator, ValidationError};
pub use approaches::lz78::{estimate_entropy_rate, estimate_entropy_rate_with_validator};
