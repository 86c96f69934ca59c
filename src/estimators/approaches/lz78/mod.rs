// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// LZ78 estimator module: groups the phrase parser, the entropy-rate formula
// and the estimator type, and exposes them to the parent approaches module.

pub mod lz78;
pub mod lz78_utils;

pub use lz78::{Lz78Entropy, estimate_entropy_rate, estimate_entropy_rate_with_validator};
pub use lz78_utils::{PhraseKey, Symbol, binary_entropy};
