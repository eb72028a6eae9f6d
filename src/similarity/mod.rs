//! Normalized string similarity scores in `[0, 1]`.
//!
//! Two independent metrics:
//!
//! - [`jaro_winkler`] - Jaro similarity with a bonus for shared leading
//!   characters, suited to short strings such as person names
//! - [`dice_coefficient`] - overlap of adjacent-character-pair sets, suited
//!   to detecting shared fragments regardless of position

pub mod dice;
pub mod jaro;

pub use dice::dice_coefficient;
pub use jaro::{jaro_winkler, jaro_winkler_with_factor};
