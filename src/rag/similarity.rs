//! Lexical overlap scoring
//!
//! # Mathematical Specification
//!
//! ```text
//! jaccard(a, b) = |a ∩ b| / |a ∪ b|      (0.0 when a ∪ b = ∅)
//!
//! Symmetric, bounded to [0.0, 1.0]
//! Complexity: O(min(|a|, |b|)) expected
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard index of two token sets
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
