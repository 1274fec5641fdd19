//! Standard MIDI File serialization.
//!
//! Events are sorted by tick, delta-times are encoded as variable-length
//! quantities and the result is framed as a format 0 file with a single
//! track chunk.

use crate::error::BlendError;
use crate::midi::midi_event::MidiEvent;
use crate::score::TICKS_PER_BEAT;
use std::path::Path;

/// Render the complete Standard MIDI File byte sequence for the given events.
///
/// The input order of events sharing a tick is preserved, so the output is
/// byte-identical across runs over the same event list.
pub fn render_midi_bytes(events: &[MidiEvent]) -> Result<Vec<u8>, BlendError> {
    let sorted = sort_events(events);
    match sorted.last() {
        None => {
            return Err(BlendError::EncodingError(
                "no events to serialize".to_string(),
            ))
        }
        Some(last) => {
            if !last.is_end_of_track() {
                return Err(BlendError::EncodingError(
                    "track does not end with an end-of-track event".to_string(),
                ));
            }
        }
    }
    let body = render_track_body(&sorted)?;

    let mut bytes = Vec::with_capacity(14 + 8 + body.len());
    // header chunk: format 0, single track
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&6u32.to_be_bytes());
    bytes.extend_from_slice(&0u16.to_be_bytes());
    bytes.extend_from_slice(&1u16.to_be_bytes());
    bytes.extend_from_slice(&TICKS_PER_BEAT.to_be_bytes());
    // track chunk
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Serialize the events and write the file in a single write.
///
/// The full byte buffer is built in memory first, so a failed run leaves no
/// partial file behind.
pub fn write_midi_file(events: &[MidiEvent], path: &Path) -> Result<(), BlendError> {
    let bytes = render_midi_bytes(events)?;
    std::fs::write(path, &bytes)?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Stable sort by tick: events sharing a tick keep their build order.
fn sort_events(events: &[MidiEvent]) -> Vec<&MidiEvent> {
    let mut sorted: Vec<&MidiEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.tick);
    sorted
}

/// Render the delta/message pairs for an already sorted event list.
///
/// A tick going backwards means the input was not sorted, which is a bug in
/// the caller and aborts serialization.
fn render_track_body(sorted: &[&MidiEvent]) -> Result<Vec<u8>, BlendError> {
    let mut body = vec![];
    let mut last_tick = 0;
    for event in sorted {
        let delta = event.tick.checked_sub(last_tick).ok_or_else(|| {
            BlendError::EncodingError(format!(
                "event at tick {} precedes previous event at tick {last_tick}",
                event.tick
            ))
        })?;
        push_vlq(&mut body, delta);
        event.message.render(&mut body)?;
        last_tick = event.tick;
    }
    Ok(body)
}

/// Append the canonical variable-length-quantity encoding of `value`.
///
/// Seven data bits per byte, most significant group first, continuation bit
/// set on every byte except the last, minimum length. The MIDI format caps
/// delta-times at 28 bits.
fn push_vlq(out: &mut Vec<u8>, value: u32) {
    debug_assert!(value < 1 << 28);
    for shift in [21u32, 14, 7] {
        if value >> shift != 0 {
            out.push((value >> shift & 0x7F) as u8 | 0x80);
        }
    }
    out.push((value & 0x7F) as u8);
}
