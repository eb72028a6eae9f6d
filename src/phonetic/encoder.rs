//! The phonetic rule cascade.
//!
//! A left-to-right scan over the normalized word: each step dispatches on
//! the character under the cursor into one of the per-letter transition
//! functions below, which examine up to four characters of context on each
//! side, append zero or more symbols to the primary and/or secondary code,
//! and advance the cursor by 1-4 positions. Conditions inside a letter
//! class are ordered; the first match fully determines the emission and the
//! advance.
//!
//! The rule set is English-centric with Slavic, Germanic, Italian, Spanish
//! and French heuristics. Only Ç and Ñ carry dedicated non-ASCII rules;
//! every other character without a rule is consumed silently. This limited
//! coverage is intentional scope, not an omission.

use super::code::PhoneticCodes;
use super::word::Word;

/// Word-initial consonant clusters whose first letter is silent.
const SILENT_STARTERS: [&str; 5] = ["GN", "KN", "PN", "WR", "PS"];

/// Encode a word into its primary/secondary phonetic code pair.
///
/// The encoder is total: any input, including the empty string, produces a
/// (possibly empty) code pair without error. The scan halts once both codes
/// reach the cap, so even pathological repeated-letter inputs terminate in
/// bounded work.
///
/// # Example
///
/// ```rust
/// use libmetaphone::phonetic::double_metaphone;
///
/// let codes = double_metaphone("Schmidt");
/// assert_eq!(codes.primary, "XMT");
/// assert_eq!(codes.secondary, "SMT");
///
/// assert_eq!(double_metaphone("").into_pair(), (String::new(), String::new()));
/// ```
pub fn double_metaphone(input: &str) -> PhoneticCodes {
    let word = Word::new(input);
    let mut codes = PhoneticCodes::new();
    let mut pos: usize = 0;

    // skip these when at start of word
    if word.matches_any(0, 2, &SILENT_STARTERS) {
        pos += 1;
    }

    // initial 'X' is pronounced 'Z' e.g. 'Xavier'; 'Z' maps to 'S'
    if word.char_at(0) == 'X' {
        codes.emit("S");
        pos += 1;
    }

    while codes.is_open() && pos < word.len() {
        let next = transition(&word, pos, &mut codes);
        debug_assert!(next > pos, "cursor must advance on every rule");
        pos = next;
    }

    codes.finish()
}

/// Apply the rule for the character at `pos`, returning the new cursor.
fn transition(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;
    match w.char_at(cur) {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
            if pos == 0 {
                // all initial vowels map to 'A'
                codes.emit("A");
            }
            pos + 1
        }

        'B' => {
            // "-mb" as in "dumb" is skipped by the M rule before we get here
            codes.emit("P");
            if w.char_at(cur + 1) == 'B' {
                pos + 2
            } else {
                pos + 1
            }
        }

        'Ç' => {
            codes.emit("S");
            pos + 1
        }

        'C' => on_c(w, pos, codes),
        'D' => on_d(w, pos, codes),

        'F' => {
            codes.emit("F");
            if w.char_at(cur + 1) == 'F' {
                pos + 2
            } else {
                pos + 1
            }
        }

        'G' => on_g(w, pos, codes),

        'H' => {
            // only kept word-initially or between two vowels
            if (pos == 0 || w.is_vowel(cur - 1)) && w.is_vowel(cur + 1) {
                codes.emit("H");
                pos + 2
            } else {
                // also swallows 'HH'
                pos + 1
            }
        }

        'J' => on_j(w, pos, codes),

        'K' => {
            codes.emit("K");
            if w.char_at(cur + 1) == 'K' {
                pos + 2
            } else {
                pos + 1
            }
        }

        'L' => on_l(w, pos, codes),
        'M' => on_m(w, pos, codes),

        'N' => {
            codes.emit("N");
            if w.char_at(cur + 1) == 'N' {
                pos + 2
            } else {
                pos + 1
            }
        }

        'Ñ' => {
            codes.emit("N");
            pos + 1
        }

        'P' => {
            if w.char_at(cur + 1) == 'H' {
                codes.emit("F");
                pos + 2
            } else {
                codes.emit("P");
                // also account for "campbell", "raspberry"
                if w.matches_any(cur + 1, 1, &["P", "B"]) {
                    pos + 2
                } else {
                    pos + 1
                }
            }
        }

        'Q' => {
            codes.emit("K");
            if w.char_at(cur + 1) == 'Q' {
                pos + 2
            } else {
                pos + 1
            }
        }

        'R' => on_r(w, pos, codes),
        'S' => on_s(w, pos, codes),
        'T' => on_t(w, pos, codes),

        'V' => {
            codes.emit("F");
            if w.char_at(cur + 1) == 'V' {
                pos + 2
            } else {
                pos + 1
            }
        }

        'W' => on_w(w, pos, codes),
        'X' => on_x(w, pos, codes),
        'Z' => on_z(w, pos, codes),

        // no rule: consume silently
        _ => pos + 1,
    }
}

fn on_c(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    // various germanic
    if cur > 1
        && !w.is_vowel(cur - 2)
        && w.matches_any(cur - 1, 3, &["ACH"])
        && w.char_at(cur + 2) != 'I'
        && (w.char_at(cur + 2) != 'E' || w.matches_any(cur - 2, 6, &["BACHER", "MACHER"]))
    {
        codes.emit("K");
        return pos + 2;
    }

    // special case 'caesar'
    if cur == 0 && w.matches_any(cur, 6, &["CAESAR"]) {
        codes.emit("S");
        return pos + 2;
    }

    // italian 'chianti'
    if w.matches_any(cur, 4, &["CHIA"]) {
        codes.emit("K");
        return pos + 2;
    }

    if w.matches_any(cur, 2, &["CH"]) {
        // find 'michael'
        if cur > 0 && w.matches_any(cur, 4, &["CHAE"]) {
            codes.emit_split("K", "X");
            return pos + 2;
        }

        // greek roots e.g. 'chemistry', 'chorus'
        if cur == 0
            && (w.matches_any(cur + 1, 5, &["HARAC", "HARIS"])
                || w.matches_any(cur + 1, 3, &["HOR", "HYM", "HIA", "HEM"]))
            && !w.matches_any(0, 5, &["CHORE"])
        {
            codes.emit("K");
            return pos + 2;
        }

        // germanic, greek, or otherwise 'ch' for 'kh' sound
        if w.matches_any(0, 4, &["VAN ", "VON "])
            || w.matches_any(0, 3, &["SCH"])
            // 'architect' but not 'arch', 'orchestra', 'orchid'
            || w.matches_any(cur - 2, 6, &["ORCHES", "ARCHIT", "ORCHID"])
            || w.matches_any(cur + 2, 1, &["T", "S"])
            || ((w.matches_any(cur - 1, 1, &["A", "O", "U", "E"]) || cur == 0)
                // e.g. 'wachtler', 'wechsler', but not 'tichner'
                && w.matches_any(
                    cur + 2,
                    1,
                    &["L", "R", "N", "M", "B", "H", "F", "V", "W", " "],
                ))
        {
            codes.emit("K");
        } else if cur > 0 {
            if w.matches_any(0, 2, &["MC"]) {
                // e.g. "McHugh"
                codes.emit("K");
            } else {
                codes.emit_split("X", "K");
            }
        } else {
            codes.emit("X");
        }
        return pos + 2;
    }

    // e.g. 'czerny'
    if w.matches_any(cur, 2, &["CZ"]) && !w.matches_any(cur - 2, 4, &["WICZ"]) {
        codes.emit_split("S", "X");
        return pos + 2;
    }

    // e.g. 'focaccia'
    if w.matches_any(cur + 1, 3, &["CIA"]) {
        codes.emit("X");
        return pos + 3;
    }

    // double 'C', but not if e.g. 'McClellan'
    if w.matches_any(cur, 2, &["CC"]) && !(cur == 1 && w.char_at(0) == 'M') {
        // 'bellocchio' but not 'bacchus'
        if w.matches_any(cur + 2, 1, &["I", "E", "H"]) && !w.matches_any(cur + 2, 2, &["HU"]) {
            // 'accident', 'accede', 'succeed'
            if (cur == 1 && w.char_at(cur - 1) == 'A')
                || w.matches_any(cur - 1, 5, &["UCCEE", "UCCES"])
            {
                codes.emit("KS");
            } else {
                // 'bacci', 'bertucci', other italian
                codes.emit("X");
            }
            return pos + 3;
        }
        // Pierce's rule
        codes.emit("K");
        return pos + 2;
    }

    if w.matches_any(cur, 2, &["CK", "CG", "CQ"]) {
        codes.emit("K");
        return pos + 2;
    }

    if w.matches_any(cur, 2, &["CI", "CE", "CY"]) {
        // italian vs. english
        if w.matches_any(cur, 3, &["CIO", "CIE", "CIA"]) {
            codes.emit_split("S", "X");
        } else {
            codes.emit("S");
        }
        return pos + 2;
    }

    codes.emit("K");
    // name sent in 'mac caffrey', 'mac gregor'
    if w.matches_any(cur + 1, 2, &[" C", " Q", " G"]) {
        pos + 3
    } else if w.matches_any(cur + 1, 1, &["C", "K", "Q"])
        && !w.matches_any(cur + 1, 2, &["CE", "CI"])
    {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_d(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    if w.matches_any(cur, 2, &["DG"]) {
        if w.matches_any(cur + 2, 1, &["I", "E", "Y"]) {
            // e.g. 'edge'
            codes.emit("J");
            return pos + 3;
        }
        // e.g. 'edgar'
        codes.emit("TK");
        return pos + 2;
    }

    if w.matches_any(cur, 2, &["DT", "DD"]) {
        codes.emit("T");
        return pos + 2;
    }

    codes.emit("T");
    pos + 1
}

fn on_g(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    if w.char_at(cur + 1) == 'H' {
        if cur > 0 && !w.is_vowel(cur - 1) {
            codes.emit("K");
            return pos + 2;
        }

        // 'ghislane', 'ghiradelli'
        if cur == 0 {
            if w.char_at(cur + 2) == 'I' {
                codes.emit("J");
            } else {
                codes.emit("K");
            }
            return pos + 2;
        }

        // Parker's rule (with some further refinements), e.g. 'hugh'
        if (cur > 1 && w.matches_any(cur - 2, 1, &["B", "H", "D"]))
            // e.g. 'bough'
            || (cur > 2 && w.matches_any(cur - 3, 1, &["B", "H", "D"]))
            // e.g. 'broughton'
            || (cur > 3 && w.matches_any(cur - 4, 1, &["B", "H"]))
        {
            return pos + 2;
        }

        // e.g. 'laugh', 'McLaughlin', 'cough', 'gough', 'rough', 'tough'
        if cur > 2
            && w.char_at(cur - 1) == 'U'
            && w.matches_any(cur - 3, 1, &["C", "G", "L", "R", "T"])
        {
            codes.emit("F");
        } else if cur > 0 && w.char_at(cur - 1) != 'I' {
            codes.emit("K");
        }
        return pos + 2;
    }

    if w.char_at(cur + 1) == 'N' {
        if cur == 1 && w.is_vowel(0) && !w.is_slavo_germanic() {
            codes.emit_split("KN", "N");
        } else if !w.matches_any(cur + 2, 2, &["EY"]) && !w.is_slavo_germanic() {
            // not e.g. 'cagney'
            codes.emit_split("N", "KN");
        } else {
            codes.emit("KN");
        }
        return pos + 2;
    }

    // 'tagliaro'
    if w.matches_any(cur + 1, 2, &["LI"]) && !w.is_slavo_germanic() {
        codes.emit_split("KL", "L");
        return pos + 2;
    }

    // -ges-, -gep-, -gel-, -gie- at beginning
    if cur == 0
        && (w.char_at(cur + 1) == 'Y'
            || w.matches_any(
                cur + 1,
                2,
                &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
            ))
    {
        codes.emit_split("K", "J");
        return pos + 2;
    }

    // -ger-, -gy-
    if (w.matches_any(cur + 1, 2, &["ER"]) || w.char_at(cur + 1) == 'Y')
        && !w.matches_any(0, 6, &["DANGER", "RANGER", "MANGER"])
        && !w.matches_any(cur - 1, 1, &["E", "I"])
        && !w.matches_any(cur - 1, 3, &["RGY", "OGY"])
    {
        codes.emit_split("K", "J");
        return pos + 2;
    }

    // italian e.g. 'biaggi'
    if w.matches_any(cur + 1, 1, &["E", "I", "Y"]) || w.matches_any(cur - 1, 4, &["AGGI", "OGGI"])
    {
        if w.matches_any(0, 4, &["VAN ", "VON "])
            || w.matches_any(0, 3, &["SCH"])
            || w.matches_any(cur + 1, 2, &["ET"])
        {
            // obvious germanic
            codes.emit("K");
        } else if w.matches_any(cur + 1, 4, &["IER "]) {
            // always soft if french ending
            codes.emit("J");
        } else {
            codes.emit_split("J", "K");
        }
        return pos + 2;
    }

    codes.emit("K");
    if w.char_at(cur + 1) == 'G' {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_j(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    // obvious spanish, 'jose', 'san jacinto'
    if w.matches_any(cur, 4, &["JOSE"]) || w.matches_any(0, 4, &["SAN "]) {
        if (cur == 0 && w.char_at(cur + 4) == ' ') || w.matches_any(0, 4, &["SAN "]) {
            codes.emit("H");
        } else {
            codes.emit_split("J", "H");
        }
        return pos + 1;
    }

    if cur == 0 {
        // Yankelovich/Jankelowicz
        codes.emit_split("J", "A");
    } else if w.is_vowel(cur - 1)
        && !w.is_slavo_germanic()
        && (w.char_at(cur + 1) == 'A' || w.char_at(cur + 1) == 'O')
    {
        // spanish pron. of e.g. 'bajador'
        codes.emit_split("J", "H");
    } else if cur == w.last() {
        codes.emit_split("J", "");
    } else if !w.matches_any(cur + 1, 1, &["L", "T", "K", "S", "N", "M", "B", "Z"])
        && !w.matches_any(cur - 1, 1, &["S", "K", "L"])
    {
        codes.emit("J");
    }

    // it could happen
    if w.char_at(cur + 1) == 'J' {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_l(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    if w.char_at(cur + 1) == 'L' {
        // spanish e.g. 'cabrillo', 'gallegos'
        if (cur == w.len() as isize - 3 && w.matches_any(cur - 1, 4, &["ILLO", "ILLA", "ALLE"]))
            || ((w.matches_any(w.last() - 1, 2, &["AS", "OS"])
                || w.matches_any(w.last(), 1, &["A", "O"]))
                && w.matches_any(cur - 1, 4, &["ALLE"]))
        {
            codes.emit_split("L", "");
            return pos + 2;
        }
        codes.emit("L");
        return pos + 2;
    }

    codes.emit("L");
    pos + 1
}

fn on_m(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    codes.emit("M");
    // 'dumb', 'thumb'
    if (w.matches_any(cur - 1, 3, &["UMB"])
        && (cur + 1 == w.last() || w.matches_any(cur + 2, 2, &["ER"])))
        || w.char_at(cur + 1) == 'M'
    {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_r(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    // french e.g. 'rogier', but exclude 'hochmeier'
    if cur == w.last()
        && !w.is_slavo_germanic()
        && w.matches_any(cur - 2, 2, &["IE"])
        && !w.matches_any(cur - 4, 2, &["ME", "MA"])
    {
        codes.emit_split("", "R");
    } else {
        codes.emit("R");
    }

    if w.char_at(cur + 1) == 'R' {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_s(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    // special cases 'island', 'isle', 'carlisle', 'carlysle'
    if w.matches_any(cur - 1, 3, &["ISL", "YSL"]) {
        return pos + 1;
    }

    // special case 'sugar-'
    if cur == 0 && w.matches_any(cur, 5, &["SUGAR"]) {
        codes.emit_split("X", "S");
        return pos + 1;
    }

    if w.matches_any(cur, 2, &["SH"]) {
        // germanic
        if w.matches_any(cur + 1, 4, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            codes.emit("S");
        } else {
            codes.emit("X");
        }
        return pos + 2;
    }

    // italian & armenian
    if w.matches_any(cur, 3, &["SIO", "SIA"]) || w.matches_any(cur, 4, &["SIAN"]) {
        if !w.is_slavo_germanic() {
            codes.emit_split("S", "X");
        } else {
            codes.emit("S");
        }
        return pos + 3;
    }

    // german & anglicisations: 'smith' matches 'schmidt', 'snider' matches
    // 'schneider'; also -sz- in slavic, pronounced 's' in hungarian
    if (cur == 0 && w.matches_any(cur + 1, 1, &["M", "N", "L", "W"]))
        || w.matches_any(cur + 1, 1, &["Z"])
    {
        codes.emit_split("S", "X");
        return if w.matches_any(cur + 1, 1, &["Z"]) {
            pos + 2
        } else {
            pos + 1
        };
    }

    if w.matches_any(cur, 2, &["SC"]) {
        // Schlesinger's rule
        if w.char_at(cur + 2) == 'H' {
            // dutch origin, e.g. 'school', 'schooner'
            if w.matches_any(cur + 3, 2, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                // 'schermerhorn', 'schenker'
                if w.matches_any(cur + 3, 2, &["ER", "EN"]) {
                    codes.emit_split("X", "SK");
                } else {
                    codes.emit("SK");
                }
            } else if cur == 0 && !w.is_vowel(3) && w.char_at(3) != 'W' {
                codes.emit_split("X", "S");
            } else {
                codes.emit("X");
            }
            return pos + 3;
        }

        if w.matches_any(cur + 2, 1, &["I", "E", "Y"]) {
            codes.emit("S");
            return pos + 3;
        }
        codes.emit("SK");
        return pos + 3;
    }

    // french e.g. 'resnais', 'artois'
    if cur == w.last() && w.matches_any(cur - 2, 2, &["AI", "OI"]) {
        codes.emit_split("", "S");
    } else {
        codes.emit("S");
    }

    if w.matches_any(cur + 1, 1, &["S", "Z"]) {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_t(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    if w.matches_any(cur, 4, &["TION"]) {
        codes.emit("X");
        return pos + 3;
    }

    if w.matches_any(cur, 3, &["TIA", "TCH"]) {
        codes.emit("X");
        return pos + 3;
    }

    if w.matches_any(cur, 2, &["TH"]) || w.matches_any(cur, 3, &["TTH"]) {
        // special case 'thomas', 'thames' or germanic
        if w.matches_any(cur + 2, 2, &["OM", "AM"])
            || w.matches_any(0, 4, &["VAN ", "VON "])
            || w.matches_any(0, 3, &["SCH"])
        {
            codes.emit("T");
        } else {
            // the glyph '0', a distinct symbol (not the digit)
            codes.emit_split("0", "T");
        }
        return pos + 2;
    }

    codes.emit("T");
    if w.matches_any(cur + 1, 1, &["T", "D"]) {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_w(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    // can also be in middle of word
    if w.matches_any(cur, 2, &["WR"]) {
        codes.emit("R");
        return pos + 2;
    }

    if cur == 0 && (w.is_vowel(cur + 1) || w.matches_any(cur, 2, &["WH"])) {
        if w.is_vowel(cur + 1) {
            // Wasserman should match Vasserman
            codes.emit_split("A", "F");
        } else {
            // need Uomo to match Womo
            codes.emit("A");
        }
        // deliberately no advance: the word-final and -OWSKY/-WICZ checks
        // below still apply to this same position
    }

    // Arnow should match Arnoff
    if (cur == w.last() && w.is_vowel(cur - 1))
        || w.matches_any(cur - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || w.matches_any(0, 3, &["SCH"])
    {
        codes.emit_split("", "F");
        return pos + 1;
    }

    // polish e.g. 'filipowicz'
    if w.matches_any(cur, 4, &["WICZ", "WITZ"]) {
        codes.emit_split("TS", "FX");
        return pos + 4;
    }

    // else skip it
    pos + 1
}

fn on_x(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    // french e.g. 'breaux'
    if !(cur == w.last()
        && (w.matches_any(cur - 3, 3, &["IAU", "EAU"]) || w.matches_any(cur - 2, 2, &["AU", "OU"])))
    {
        codes.emit("KS");
    }

    if w.matches_any(cur + 1, 1, &["C", "X"]) {
        pos + 2
    } else {
        pos + 1
    }
}

fn on_z(w: &Word, pos: usize, codes: &mut PhoneticCodes) -> usize {
    let cur = pos as isize;

    // chinese pinyin e.g. 'zhao'
    if w.char_at(cur + 1) == 'H' {
        codes.emit("J");
        return pos + 2;
    }

    if w.matches_any(cur + 1, 2, &["ZO", "ZI", "ZA"])
        || (w.is_slavo_germanic() && cur > 0 && w.char_at(cur - 1) != 'T')
    {
        codes.emit_split("S", "TS");
    } else {
        codes.emit("S");
    }

    if w.char_at(cur + 1) == 'Z' {
        pos + 2
    } else {
        pos + 1
    }
}
