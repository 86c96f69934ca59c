use ndarray::{Array1, Array2, Axis};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A discrete symbol usable as part of a phrase-table key.
///
/// Equality and hashing must be value-stable, since the parser keys phrases by
/// the symbols they contain. Continuous-valued types (`f32`/`f64`) do not
/// implement `Eq`/`Hash` and are rejected at compile time; quantize or
/// re-encode such data before estimation.
pub trait Symbol: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Symbol for T {}

/// Key space of the LZ78 phrase table.
///
/// The end-of-input compensation entry lives in the same table as the parsed
/// phrases, so the key is a tagged variant rather than a raw phrase encoding
/// with a reserved sentinel that could collide with real data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhraseKey<S> {
    /// A contiguous run of symbols observed during parsing. The empty run is
    /// the seed entry at index 0.
    Phrase(Vec<S>),
    /// Marker counting a trailing, already-seen partial phrase as one full
    /// phrase.
    EndOfInput,
}

/// Parse a sequence with the LZ78 dictionary rule and return the final
/// phrase-table size, the phrase count `c`.
///
/// The table is seeded with the empty phrase at index 0 and the `k`-th
/// distinct phrase inserted receives index `k`. Every maximal phrase except
/// possibly the last is novel; when the input ends mid-phrase on an
/// already-seen prefix, one [`PhraseKey::EndOfInput`] entry is inserted so
/// that the truncated tail still counts as a full phrase. Without it, short
/// sequences whose final phrase repeats an earlier one would under-count `c`
/// and bias the estimate low.
pub fn phrase_count<S: Symbol>(sequence: &[S]) -> usize {
    let n = sequence.len();
    let mut table: HashMap<PhraseKey<S>, usize> = HashMap::new();
    table.insert(PhraseKey::Phrase(Vec::new()), 0);
    let mut buffer: Vec<S> = Vec::new();

    for (idx, symbol) in sequence.iter().enumerate() {
        buffer.push(symbol.clone());
        let key = PhraseKey::Phrase(buffer.clone());
        if table.contains_key(&key) {
            if idx == n - 1 {
                // Known phrase at end of input: count the partial tail.
                let marker_index = table.len();
                table.insert(PhraseKey::EndOfInput, marker_index);
                break;
            }
            // Known prefix, keep extending on the next symbol.
        } else {
            let next_index = table.len();
            table.insert(key, next_index);
            buffer.clear();
        }
    }
    table.len()
}

/// Number of distinct symbols in the sequence, computed once over the whole
/// input.
pub fn alphabet_size<S: Symbol>(sequence: &[S]) -> usize {
    let mut seen: HashSet<&S> = HashSet::new();
    for symbol in sequence {
        seen.insert(symbol);
    }
    seen.len()
}

/// Entropy-rate formula of the Lempel–Ziv complexity estimator, in bits per
/// symbol: `c * (log2(c) + ceil(log2(a))) / n`.
///
/// `ceil(log2(a))` is the alphabet description length, the bits needed to
/// index among all distinct symbols seen. A seed-only table (`phrase_count ==
/// 1`) cannot be produced once the length-1 and single-symbol bypasses have
/// run, so it is asserted rather than special-cased.
pub fn entropy_rate(phrase_count: usize, n: usize, alphabet_size: usize) -> f64 {
    debug_assert!(phrase_count > 1, "seed-only phrase table is unreachable");
    debug_assert!(alphabet_size > 1, "single-symbol alphabets are bypassed");
    let c = phrase_count as f64;
    let adl = (alphabet_size as f64).log2().ceil();
    c * (c.log2() + adl) / n as f64
}

/// Closed-form entropy of a Bernoulli(p) source in bits per outcome.
pub fn binary_entropy(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// Split a 2D array into a Vec of owned 1D rows for batch processing.
pub fn rows_as_vec<S: Symbol>(data: Array2<S>) -> Vec<Array1<S>> {
    data.axis_iter(Axis(0)).map(|row| row.to_owned()).collect()
}
