//! Edit distance between two strings.
//!
//! Space-optimized dynamic programming over code points (two rolling rows
//! instead of the full matrix).

use smallvec::SmallVec;

/// Compute the edit distance between two strings.
///
/// The minimum number of single-character edits (insertions, deletions,
/// substitutions) required to transform `source` into `target`, counted
/// over code points.
///
/// # Example
///
/// ```rust
/// use libmetaphone::distance::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("test", "test"), 0);
/// assert_eq!(edit_distance("", "test"), 4);
/// ```
pub fn edit_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row = vec![0; n + 1];
    let mut curr_row = vec![0; n + 1];

    for (j, item) in prev_row.iter_mut().enumerate().take(n + 1) {
        *item = j;
    }

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
