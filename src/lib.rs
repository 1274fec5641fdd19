//! Genreblend - a fixed composition rendered to a Standard MIDI File
//!
//! This library provides:
//! - Score generation for a three-section piece (classical, reggae, rock)
//!   built from static chord and rhythm data
//! - Standard MIDI File serialization (format 0, single track) with
//!   variable-length delta-time encoding
//!
//! # Example
//!
//! ```no_run
//! use genreblend::{ScoreBuilder, write_midi_file};
//! use std::path::Path;
//!
//! let events = ScoreBuilder::new().build().unwrap();
//! write_midi_file(&events, Path::new("genre_blend.mid")).unwrap();
//! ```

pub mod error;
pub mod midi;
pub mod score;

// Re-export main types for convenience
pub use error::BlendError;
pub use midi::{
    midi_event::{MidiEvent, MidiMessage},
    smf_writer::{render_midi_bytes, write_midi_file},
};
pub use score::{score_builder::ScoreBuilder, TICKS_PER_BEAT};
