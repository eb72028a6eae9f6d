//! # libmetaphone
//!
//! "Sounds like" encoding and string similarity metrics.
//!
//! The core of the crate is a Double-Metaphone-style phonetic encoder: it
//! maps a word to a pair of coarse phonetic codes so that words spelled
//! differently but pronounced alike (including common transliteration and
//! loanword variants) compare as equal. Around it sit three independent,
//! self-contained similarity metrics:
//!
//! - [`distance::edit_distance`] - minimum single-character edit count
//! - [`similarity::jaro_winkler`] - Jaro similarity with a common-prefix bonus
//! - [`similarity::dice_coefficient`] - bigram-overlap coefficient
//!
//! ## Example
//!
//! ```rust
//! use libmetaphone::prelude::*;
//!
//! let codes = double_metaphone("Smith");
//! assert_eq!(codes.primary, "SM0");
//! assert_eq!(codes.secondary, "XMT");
//!
//! assert!(phonetic_eq("Smith", "Smyth"));
//! assert!(phonetic_eq("peke", "pique"));
//! assert!(!phonetic_eq("bloat", "float"));
//! ```
//!
//! All functions are total: they accept any `&str` (including the empty
//! string), never panic, and hold no state between calls, so they are safe
//! to call concurrently without coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod phonetic;
pub mod similarity;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::edit_distance;
    pub use crate::phonetic::{double_metaphone, phonetic_eq, PhoneticCodes, MAX_CODE_LEN};
    pub use crate::similarity::{dice_coefficient, jaro_winkler, jaro_winkler_with_factor};
}
