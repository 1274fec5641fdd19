//! Event generation for the fixed three-section composition.
//!
//! The piece runs classical, reggae, then rock over a shared tick timeline:
//! eight bars of 4/4 per section, one chord per bar, with a tempo change at
//! the first tick of each section.

use crate::midi::midi_event::MidiEvent;
use crate::score::chords::{bass_root, classical_chord, reggae_chord, rock_chord};
use crate::score::{
    beats_to_ticks, CHANNEL_BASS, CHANNEL_CLASSICAL, CHANNEL_DRUMS, CHANNEL_REGGAE, CHANNEL_ROCK,
    CRASH_CYMBAL, HIHAT_CLOSED, KICK, PROGRAM_BASS, PROGRAM_GUITAR, PROGRAM_ORGAN, PROGRAM_STRINGS,
    RIDE_CYMBAL, SNARE, TOM_LOW,
};
use crate::BlendError;

const CLASSICAL_BPM: u32 = 90;
const REGGAE_BPM: u32 = 80;
const ROCK_BPM: u32 = 120;

// one chord per bar, eight bars per section
const PROGRESSION_CLASSICAL: [&str; 8] = ["Am", "G", "F", "E", "Am", "G", "F", "E"];
const PROGRESSION_REGGAE: [&str; 8] = ["Am", "G", "F", "Em", "Am", "G", "F", "E"];
const PROGRESSION_ROCK: [&str; 8] = ["Am", "G", "F", "E", "Am", "G", "F", "E"];

/// Beats covered by one section: 8 bars of 4 beats.
const SECTION_BEATS: f64 = 32.0;

pub struct ScoreBuilder {
    events: Vec<MidiEvent>, // events accumulated during build
}

impl Default for ScoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBuilder {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Generate the full event set for the composition.
    ///
    /// Events are returned in build order; sorting is owned by the
    /// serializer. The list ends with an end-of-track event at the final
    /// tick of the piece.
    pub fn build(mut self) -> Result<Vec<MidiEvent>, BlendError> {
        let start_classical = 0;
        let start_reggae = beats_to_ticks(SECTION_BEATS);
        let start_rock = start_reggae + beats_to_ticks(SECTION_BEATS);
        let end_tick = start_rock + beats_to_ticks(SECTION_BEATS);

        self.add_program_changes();
        self.add_tempo_change(start_classical, CLASSICAL_BPM);
        self.add_tempo_change(start_reggae, REGGAE_BPM);
        self.add_tempo_change(start_rock, ROCK_BPM);

        self.add_classical_section(start_classical)?;
        self.add_reggae_section(start_reggae)?;
        self.add_rock_section(start_rock)?;

        self.events.push(MidiEvent::new_end_of_track(end_tick));
        log::debug!("built {} events, end tick {end_tick}", self.events.len());
        Ok(self.events)
    }

    /// Program changes at tick 0 for every melodic channel.
    ///
    /// The drum channel needs none; channel 9 is the standard GM kit.
    fn add_program_changes(&mut self) {
        for (channel, program) in [
            (CHANNEL_CLASSICAL, PROGRAM_STRINGS),
            (CHANNEL_REGGAE, PROGRAM_ORGAN),
            (CHANNEL_BASS, PROGRAM_BASS),
            (CHANNEL_ROCK, PROGRAM_GUITAR),
        ] {
            self.events
                .push(MidiEvent::new_program_change(0, channel, program));
        }
    }

    fn add_tempo_change(&mut self, tick: u32, bpm: u32) {
        self.events.push(MidiEvent::new_tempo_change(tick, bpm));
    }

    /// Sustained string triads: one chord held for the whole bar.
    fn add_classical_section(&mut self, section_start: u32) -> Result<(), BlendError> {
        for (bar, chord_name) in PROGRESSION_CLASSICAL.iter().enumerate() {
            let bar_start = section_start + beats_to_ticks(4.0 * bar as f64);
            let bar_end = bar_start + beats_to_ticks(4.0);
            let notes = classical_chord(chord_name)?;
            for &pitch in notes {
                self.events
                    .push(MidiEvent::new_note_on(bar_start, CHANNEL_CLASSICAL, pitch, 100));
            }
            for &pitch in notes {
                self.events
                    .push(MidiEvent::new_note_off(bar_end, CHANNEL_CLASSICAL, pitch, 64));
            }
        }
        Ok(())
    }

    /// One-drop reggae: bass on 1 and 3, skank stabs on the off-beats,
    /// kick and snare together on beat 3, with a fill closing the section.
    fn add_reggae_section(&mut self, section_start: u32) -> Result<(), BlendError> {
        let bar_count = PROGRESSION_REGGAE.len();
        for (bar, chord_name) in PROGRESSION_REGGAE.iter().enumerate() {
            let bar_start = section_start + beats_to_ticks(4.0 * bar as f64);
            let beat2 = bar_start + beats_to_ticks(1.0);
            let beat3 = bar_start + beats_to_ticks(2.0);
            let beat4 = bar_start + beats_to_ticks(3.0);
            let last_bar = bar == bar_count - 1;

            // bass root on beats 1 and 3, one beat long to separate the notes
            let root = bass_root(chord_name)?;
            for beat in [bar_start, beat3] {
                self.events
                    .push(MidiEvent::new_note_on(beat, CHANNEL_BASS, root, 100));
                self.events.push(MidiEvent::new_note_off(
                    beat + beats_to_ticks(1.0),
                    CHANNEL_BASS,
                    root,
                    64,
                ));
            }

            // off-beat chord stabs on beats 2 and 4, half a beat long;
            // the drum fill takes over beat 4 of the final bar
            let notes = reggae_chord(chord_name)?;
            let mut stab_ticks = vec![beat2];
            if !last_bar {
                stab_ticks.push(beat4);
            }
            for stab in stab_ticks {
                for &pitch in notes {
                    self.events
                        .push(MidiEvent::new_note_on(stab, CHANNEL_REGGAE, pitch, 90));
                    self.events.push(MidiEvent::new_note_off(
                        stab + beats_to_ticks(0.5),
                        CHANNEL_REGGAE,
                        pitch,
                        64,
                    ));
                }
            }

            // closed hat on the off-beat eighths
            let mut hat_beats = vec![0.5, 1.5, 2.5, 3.5];
            if last_bar {
                // drop the 3.5 hit to leave space for the fill
                hat_beats.pop();
            }
            for hat in hat_beats {
                self.add_drum_hit(bar_start + beats_to_ticks(hat), HIHAT_CLOSED, 80);
            }

            // one-drop kick and snare together on beat 3
            self.add_drum_hit(beat3, KICK, 100);
            self.add_drum_hit(beat3, SNARE, 100);

            // transition fill: snare on 4, low tom on 4.5
            if last_bar {
                self.add_drum_hit(beat4, SNARE, 110);
                self.add_drum_hit(beat4 + beats_to_ticks(0.5), TOM_LOW, 110);
            }
        }
        Ok(())
    }

    /// Power-chord rock: strums on 1 and 3, quarter-note bass, standard
    /// groove for the first four bars and a double-time pattern after.
    fn add_rock_section(&mut self, section_start: u32) -> Result<(), BlendError> {
        for (bar, chord_name) in PROGRESSION_ROCK.iter().enumerate() {
            let bar_start = section_start + beats_to_ticks(4.0 * bar as f64);
            let beat2 = bar_start + beats_to_ticks(1.0);
            let beat3 = bar_start + beats_to_ticks(2.0);
            let beat4 = bar_start + beats_to_ticks(3.0);
            let double_time = bar >= 4;

            // strum on beat 1, ringing until the restrike on beat 3,
            // which rings until the next bar start
            let notes = rock_chord(chord_name)?;
            for &pitch in notes {
                self.events
                    .push(MidiEvent::new_note_on(bar_start, CHANNEL_ROCK, pitch, 120));
            }
            for &pitch in notes {
                self.events
                    .push(MidiEvent::new_note_off(beat3, CHANNEL_ROCK, pitch, 64));
            }
            for &pitch in notes {
                self.events
                    .push(MidiEvent::new_note_on(beat3, CHANNEL_ROCK, pitch, 120));
            }
            for &pitch in notes {
                self.events.push(MidiEvent::new_note_off(
                    beat4 + beats_to_ticks(1.0),
                    CHANNEL_ROCK,
                    pitch,
                    64,
                ));
            }

            // quarter-note bass, released at 90% of the beat to keep it punchy
            let root = bass_root(chord_name)?;
            for beat in [bar_start, beat2, beat3, beat4] {
                self.events
                    .push(MidiEvent::new_note_on(beat, CHANNEL_BASS, root, 100));
                self.events.push(MidiEvent::new_note_off(
                    beat + beats_to_ticks(0.9),
                    CHANNEL_BASS,
                    root,
                    64,
                ));
            }

            if double_time {
                // thrash pattern: kick on every sixteenth, snare backbeat,
                // ride on the quarters to cut through
                let step = beats_to_ticks(0.25);
                let mut tick = bar_start;
                while tick < bar_start + beats_to_ticks(4.0) {
                    self.add_drum_hit(tick, KICK, 127);
                    tick += step;
                }
                self.add_drum_hit(beat2, SNARE, 120);
                self.add_drum_hit(beat4, SNARE, 120);
                for beat in [bar_start, beat2, beat3, beat4] {
                    self.add_drum_hit(beat, RIDE_CYMBAL, 100);
                }
            } else {
                // basic 4/4 rock groove
                self.add_drum_hit(bar_start, KICK, 127);
                self.add_drum_hit(beat2, SNARE, 120);
                self.add_drum_hit(beat3, KICK, 127);
                self.add_drum_hit(beat4, SNARE, 120);
                // eighth-note hats; the crash covers beat 1 of the first bar
                for eighth in [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5] {
                    if bar == 0 && eighth == 0.0 {
                        continue;
                    }
                    self.add_drum_hit(bar_start + beats_to_ticks(eighth), HIHAT_CLOSED, 90);
                }
            }
        }
        // crash on the first beat of the section to mark the genre switch
        self.add_drum_hit(section_start, CRASH_CYMBAL, 127);
        Ok(())
    }

    /// Percussion hits are note-ons only; the GM drum channel ignores
    /// note-off.
    fn add_drum_hit(&mut self, tick: u32, key: u8, velocity: u8) {
        self.events
            .push(MidiEvent::new_note_on(tick, CHANNEL_DRUMS, key, velocity));
    }
}
