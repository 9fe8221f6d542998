//! # Chromatic Speller
//!
//! The single naming authority for derived notes. Scale and chord construction both
//! spell every tone relative to the root, so a whole pattern gets consistent enharmonic
//! spelling.
//!
//! Note names follow German convention: `H` is the B natural, `B` the B flat, sharps
//! end in `is` (`Fis`) and flats in `es`/`s` (`Es`, `As`, `Des`).
//!
//! ## Spelling choice
//! Roots `F`, `B`, `Es`, `As`, `Des` and `Ges` spell with flats; every other root spells
//! with sharps. This approximates key-signature practice without a full key model.
//!
//! ```rust
//! use scalemaker::speller::spell;
//!
//! assert_eq!(spell("G", 4)?, "H");
//! assert_eq!(spell("F", 5)?, "B");
//! assert_eq!(spell("Es", 7)?, "B");
//! assert_eq!(spell("D", 4)?, "Fis");
//! # Ok::<(), scalemaker::TheoryError>(())
//! ```

use crate::error::TheoryError;

/// Sharp-based names by chromatic index
pub const CHROMATIC_SHARP: [&str; 12] = [
    "C", "Cis", "D", "Dis", "E", "F", "Fis", "G", "Gis", "A", "B", "H",
];

/// Flat-based names by chromatic index
pub const CHROMATIC_FLAT: [&str; 12] = [
    "C", "Des", "D", "Es", "E", "F", "Ges", "G", "As", "A", "B", "H",
];

/// Lower-cased name with octave apostrophes removed.
fn clean(letter: &str) -> String {
    letter.replace('\'', "").trim().to_lowercase()
}

/// Position of a note name in the 12-tone cycle (C = 0 ... H = 11).
///
/// Octave markers (`'`) and case are ignored. Names outside the enharmonic table fail
/// with [`TheoryError::UnrecognizedChromaticLetter`].
pub fn chromatic_index(letter: &str) -> Result<u8, TheoryError> {
    let index = match clean(letter).as_str() {
        "c" => 0,
        "cis" | "des" => 1,
        "d" => 2,
        "dis" | "es" => 3,
        "e" => 4,
        "f" => 5,
        "fis" | "ges" => 6,
        "g" => 7,
        "gis" | "as" => 8,
        "a" => 9,
        "b" | "ais" => 10,
        "h" => 11,
        _ => return Err(TheoryError::UnrecognizedChromaticLetter(letter.to_string())),
    };
    Ok(index)
}

/// Whether notes derived from this root use sharp spellings.
pub fn use_sharp_spelling(letter: &str) -> bool {
    !matches!(
        clean(letter).as_str(),
        "f" | "b" | "es" | "as" | "des" | "ges"
    )
}

/// Name of the note `semitone_offset` semitones above `root`.
///
/// Offsets wrap around the octave; negative offsets count downwards.
pub fn spell(root: &str, semitone_offset: i32) -> Result<&'static str, TheoryError> {
    // Reduce the offset first so the sum cannot overflow
    let offset = semitone_offset.rem_euclid(12);
    let index = (i32::from(chromatic_index(root)?) + offset).rem_euclid(12) as usize;
    let names = if use_sharp_spelling(root) {
        &CHROMATIC_SHARP
    } else {
        &CHROMATIC_FLAT
    };
    Ok(names[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOTS: [&str; 17] = [
        "C", "Cis", "Des", "D", "Dis", "Es", "E", "F", "Fis", "Ges", "G", "Gis", "As", "A",
        "Ais", "B", "H",
    ];

    #[test]
    fn test_chromatic_index() {
        assert_eq!(chromatic_index("C").unwrap(), 0);
        assert_eq!(chromatic_index("Cis").unwrap(), 1);
        assert_eq!(chromatic_index("Des").unwrap(), 1);
        assert_eq!(chromatic_index("Es").unwrap(), 3);
        assert_eq!(chromatic_index("Ges").unwrap(), 6);
        assert_eq!(chromatic_index("As").unwrap(), 8);
        assert_eq!(chromatic_index("Ais").unwrap(), 10);
        assert_eq!(chromatic_index("B").unwrap(), 10);
        assert_eq!(chromatic_index("H").unwrap(), 11);
    }

    #[test]
    fn test_chromatic_index_ignores_octave_marks_and_case() {
        assert_eq!(chromatic_index("c''").unwrap(), 0);
        assert_eq!(chromatic_index("FIS'").unwrap(), 6);
        assert_eq!(chromatic_index("a'").unwrap(), 9);
    }

    #[test]
    fn test_chromatic_index_rejects_unknown_names() {
        assert_eq!(
            chromatic_index("X"),
            Err(TheoryError::UnrecognizedChromaticLetter("X".to_string()))
        );
        // Eis has a default frequency but no chromatic slot
        assert!(chromatic_index("Eis").is_err());
        assert!(chromatic_index("").is_err());
    }

    #[test]
    fn test_spelling_choice() {
        for flat in ["F", "B", "Es", "As", "Des", "Ges", "es'"] {
            assert!(!use_sharp_spelling(flat), "{} should spell with flats", flat);
        }
        for sharp in ["C", "G", "D", "A", "E", "H", "Fis", "Cis", "Gis", "Dis", "Ais"] {
            assert!(use_sharp_spelling(sharp), "{} should spell with sharps", sharp);
        }
    }

    #[test]
    fn test_unison_reproduces_root() {
        for root in ROOTS {
            // Ais has no entry of its own in the sharp table; it spells as B
            let expected = if root == "Ais" { "B" } else { root };
            assert_eq!(spell(root, 0).unwrap(), expected);
        }
    }

    #[test]
    fn test_spell_wraps_octave() {
        assert_eq!(spell("A", 3).unwrap(), "C");
        assert_eq!(spell("C", 12).unwrap(), "C");
        assert_eq!(spell("H", 1).unwrap(), "C");
        assert_eq!(spell("C", -1).unwrap(), "H");
        assert_eq!(spell("C", -9).unwrap(), "Dis");
    }

    #[test]
    fn test_spell_extreme_offsets() {
        assert_eq!(spell("H", i32::MAX).unwrap(), "Fis");
        assert_eq!(spell("C", i32::MIN).unwrap(), "E");
        assert_eq!(spell("H", i32::MIN).unwrap(), "Dis");
        assert_eq!(spell("F", i32::MAX).unwrap(), "C");
    }

    #[test]
    fn test_flat_roots_spell_flats() {
        assert_eq!(spell("F", 1).unwrap(), "Ges");
        assert_eq!(spell("Es", 5).unwrap(), "As");
        assert_eq!(spell("B", 3).unwrap(), "Des");
    }

    #[test]
    fn test_spell_unknown_root_fails() {
        assert!(matches!(
            spell("Q", 4),
            Err(TheoryError::UnrecognizedChromaticLetter(_))
        ));
    }
}
