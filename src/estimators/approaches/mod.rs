pub mod lz78;

// Unified re-exports so tests and users can import
// lzentropy::estimators::approaches::* ergonomically.
pub use lz78::Lz78Entropy;
