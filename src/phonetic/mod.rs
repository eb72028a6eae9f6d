//! Phonetic "sounds like" encoding.
//!
//! Words are uppercased, scanned left to right and encoded into a pair of
//! coarse phonetic codes - a primary reading and a plausible alternate one -
//! by an ordered cascade of per-letter rules with up to four characters of
//! context on either side of the cursor. Words that are spelled differently
//! but pronounced alike (Smith/Smyth, peke/pique) encode to the same pair.
//!
//! # Example
//!
//! ```rust
//! use libmetaphone::phonetic::{double_metaphone, phonetic_eq};
//!
//! let codes = double_metaphone("Thomas");
//! assert_eq!(codes.primary, "TMS");
//!
//! assert!(phonetic_eq("Katherine", "Catherine"));
//! ```
//!
//! # Properties
//!
//! - Total: every input, including the empty string, encodes without error.
//! - Pure: no state survives a call; concurrent use needs no coordination.
//! - Bounded: each code holds at most [`MAX_CODE_LEN`] symbols, and the scan
//!   halts once both codes are full, so work is bounded even on pathological
//!   repeated-character inputs.

pub mod code;
pub mod encoder;
pub mod matching;
mod word;

pub use code::{PhoneticCodes, MAX_CODE_LEN};
pub use encoder::double_metaphone;
pub use matching::phonetic_eq;
