// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # lzentropy
//!
//! Compressor-based entropy-rate estimation for discrete stationary sources,
//! using the Lempel–Ziv (LZ78) phrase-parsing complexity estimator.
//!
//! The estimator partitions a single finite sample into a maximal set of
//! distinct phrases with the LZ78 dictionary rule and turns the phrase count
//! into bits per symbol. It is distribution-free: no probabilistic model is
//! fitted to the data.
//!
//! ## Quick Start
//!
//! ```rust
//! use lzentropy::estimators::entropy::Entropy;
//! use lzentropy::estimators::traits::GlobalValue;
//! use ndarray::array;
//!
//! // Entropy rate (bits/symbol) of a binary sample
//! let data = array![0, 1, 0, 1, 0, 1, 0, 1, 0, 1];
//! let rate = Entropy::new_lz78(data).global_value();
//!
//! // Validated entry point with the default minimum sample size
//! let rate2 = lzentropy::estimators::estimate_entropy_rate(
//!     &[0, 1, 1, 0, 1, 0, 0, 1],
//!     false,
//! )
//! .unwrap();
//! ```
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: the `Entropy` factory type and the validated
//!    `estimate_entropy_rate` entry point
//! 2. **Estimation Approach**: the LZ78 phrase parser and the entropy-rate
//!    formula it feeds
//! 3. **Core Infrastructure**: shared estimator traits and input validation
//!
//! ## Validation
//!
//! Samples shorter than a configurable minimum (5 outcomes by default) are
//! rejected before parsing, since very short samples make the estimate
//! statistically meaningless. The threshold is carried by an explicit
//! [`estimators::InputValidator`] value, never by process-wide state, and the
//! check can be skipped entirely at the caller's own risk.
//!
//! Symbols must be discrete: the phrase table is keyed by symbol values, so
//! the symbol type has to implement `Eq + Hash`. Continuous-valued types
//! (`f32`/`f64`) do not, which rules out estimation on raw continuous data at
//! compile time; quantize or re-encode such data first.

pub mod estimators;
