//! Sørensen-Dice bigram overlap coefficient.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Bigram overlap coefficient between two strings.
///
/// Twice the size of the intersection of the two words' distinct
/// adjacent-character-pair sets, divided by the sum of the two set sizes.
/// Returns a score in `[0, 1]`, and 0.0 whenever either input has fewer
/// than 2 characters (no bigrams to compare).
///
/// # Example
///
/// ```rust
/// use libmetaphone::similarity::dice_coefficient;
///
/// assert_eq!(dice_coefficient("night", "nacht"), 0.25);
/// assert_eq!(dice_coefficient("seal", "seal"), 1.0);
/// assert_eq!(dice_coefficient("a", "ab"), 0.0);
/// ```
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let s1: SmallVec<[char; 32]> = a.chars().collect();
    let s2: SmallVec<[char; 32]> = b.chars().collect();

    if s1.len() < 2 || s2.len() < 2 {
        return 0.0;
    }

    let s1_bigrams: FxHashSet<[char; 2]> = s1.windows(2).map(|w| [w[0], w[1]]).collect();
    let s2_bigrams: FxHashSet<[char; 2]> = s2.windows(2).map(|w| [w[0], w[1]]).collect();

    let intersection = s2_bigrams.intersection(&s1_bigrams).count();

    (2 * intersection) as f64 / (s1_bigrams.len() + s2_bigrams.len()) as f64
}
