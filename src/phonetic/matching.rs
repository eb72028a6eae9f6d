//! Phonetic equality over encoded code pairs.

use super::encoder::double_metaphone;

/// True iff two words encode to the same phonetic code pair.
///
/// The comparison is pairwise: the primary codes must match *and* the
/// secondary codes must match. There is no cross- or fuzzy-matching at this
/// layer.
///
/// The relation is reflexive and symmetric, but not guaranteed transitive.
///
/// # Example
///
/// ```rust
/// use libmetaphone::phonetic::phonetic_eq;
///
/// assert!(phonetic_eq("John", "Jon"));
/// assert!(phonetic_eq("mère", "mer"));
/// assert!(!phonetic_eq("bloat", "float"));
/// ```
pub fn phonetic_eq(a: &str, b: &str) -> bool {
    double_metaphone(a) == double_metaphone(b)
}
