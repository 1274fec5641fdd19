//! Chord voicing tables for each section of the composition.
//!
//! The same chord name voices differently per section: mid-range triads for
//! the classical strings, triads with an E minor variant for the reggae skank,
//! and root-fifth-octave power chords for the rock guitar.

use crate::error::BlendError;

/// Classical string triads, mid-range voicings.
pub fn classical_chord(name: &str) -> Result<&'static [u8], BlendError> {
    let notes: &'static [u8] = match name {
        "Am" => &[57, 60, 64], // A3, C4, E4
        "G" => &[55, 59, 62],  // G3, B3, D4
        "F" => &[53, 57, 60],  // F3, A3, C4
        "E" => &[52, 56, 59],  // E3, G#3, B3
        _ => return Err(unknown_chord("classical", name)),
    };
    Ok(notes)
}

/// Reggae skank triads.
///
/// `Em` keeps the G natural; the `E` major voicing only appears in the final
/// bar to set up the transition into the rock section.
pub fn reggae_chord(name: &str) -> Result<&'static [u8], BlendError> {
    match name {
        "Em" => Ok(&[52, 55, 59]), // E3, G3, B3
        "Am" | "G" | "F" | "E" => classical_chord(name),
        _ => Err(unknown_chord("reggae", name)),
    }
}

/// Rock power chords: root, fifth, octave root.
pub fn rock_chord(name: &str) -> Result<&'static [u8], BlendError> {
    let notes: &'static [u8] = match name {
        "Am" => &[45, 52, 57], // A5: A2, E3, A3
        "G" => &[43, 50, 55],  // G5: G2, D3, G3
        "F" => &[41, 48, 53],  // F5: F2, C3, F3
        "E" => &[40, 47, 52],  // E5: E2, B2, E3
        _ => return Err(unknown_chord("rock", name)),
    };
    Ok(notes)
}

/// Single low-octave bass pitch for the root of a chord.
///
/// The root is the first letter of the chord name, so `Am` and `A` share
/// the same bass note.
pub fn bass_root(chord_name: &str) -> Result<u8, BlendError> {
    match chord_name.chars().next() {
        Some('A') => Ok(33), // A1
        Some('G') => Ok(31), // G1
        Some('F') => Ok(29), // F1
        Some('E') => Ok(28), // E1
        _ => Err(unknown_chord("bass", chord_name)),
    }
}

fn unknown_chord(table: &str, name: &str) -> BlendError {
    BlendError::ScoreError(format!("unknown {table} chord {name:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reggae_shares_classical_voicings() {
        assert_eq!(reggae_chord("Am").unwrap(), classical_chord("Am").unwrap());
        assert_eq!(reggae_chord("E").unwrap(), classical_chord("E").unwrap());
        // E minor is the one reggae-specific voicing
        assert_eq!(reggae_chord("Em").unwrap(), &[52, 55, 59]);
        assert!(classical_chord("Em").is_err());
    }

    #[test]
    fn test_bass_root_uses_first_letter() {
        assert_eq!(bass_root("Am").unwrap(), 33);
        assert_eq!(bass_root("A").unwrap(), 33);
        assert_eq!(bass_root("Em").unwrap(), 28);
        assert_eq!(bass_root("E").unwrap(), 28);
    }

    #[test]
    fn test_unknown_chord_is_an_error() {
        let err = rock_chord("Bb").unwrap_err();
        assert!(matches!(err, BlendError::ScoreError(_)));
        assert!(bass_root("").is_err());
    }
}
