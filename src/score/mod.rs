pub mod chords;
pub mod score_builder;

/// Time resolution of the generated file in ticks per quarter note
pub const TICKS_PER_BEAT: u16 = 96;

// Channel assignments (0-15, channel 9 is the GM percussion channel)
pub const CHANNEL_CLASSICAL: u8 = 0;
pub const CHANNEL_REGGAE: u8 = 1;
pub const CHANNEL_BASS: u8 = 2;
pub const CHANNEL_ROCK: u8 = 4;
pub const CHANNEL_DRUMS: u8 = 9;

// General MIDI program numbers
pub const PROGRAM_STRINGS: u8 = 48;
pub const PROGRAM_ORGAN: u8 = 16;
pub const PROGRAM_BASS: u8 = 33;
pub const PROGRAM_GUITAR: u8 = 30;

// General MIDI percussion keys, played on the drum channel
pub const KICK: u8 = 36;
pub const SNARE: u8 = 38;
pub const HIHAT_CLOSED: u8 = 42;
pub const RIDE_CYMBAL: u8 = 51;
pub const CRASH_CYMBAL: u8 = 49;
pub const TOM_LOW: u8 = 41;

/// Convert a duration in beats to ticks, truncating fractional results.
///
/// Truncation happens independently at each call site; callers must not
/// accumulate floating-point time across calls.
pub fn beats_to_ticks(beats: f64) -> u32 {
    (beats * f64::from(TICKS_PER_BEAT)) as u32
}

#[cfg(test)]
mod tests {
    use super::beats_to_ticks;

    #[test]
    fn test_beats_to_ticks_whole_beats() {
        assert_eq!(beats_to_ticks(0.0), 0);
        assert_eq!(beats_to_ticks(1.0), 96);
        assert_eq!(beats_to_ticks(4.0), 384);
        assert_eq!(beats_to_ticks(32.0), 3072);
    }

    #[test]
    fn test_beats_to_ticks_truncates_fractions() {
        assert_eq!(beats_to_ticks(0.5), 48);
        assert_eq!(beats_to_ticks(0.25), 24);
        // 0.9 * 96 = 86.4, truncated
        assert_eq!(beats_to_ticks(0.9), 86);
    }
}
