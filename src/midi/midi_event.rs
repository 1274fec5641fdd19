use crate::error::BlendError;

/// A MIDI event pinned to an absolute tick on the timeline of the piece.
///
/// Events are immutable once created; the full set is built by the score
/// builder, then sorted and consumed by the serializer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MidiEvent {
    /// The tick at which the event occurs.
    pub tick: u32,
    /// The message emitted at that tick.
    pub message: MidiMessage,
}

impl MidiEvent {
    pub const fn new_note_on(tick: u32, channel: u8, key: u8, velocity: u8) -> Self {
        Self {
            tick,
            message: MidiMessage::NoteOn {
                channel,
                key,
                velocity,
            },
        }
    }

    pub const fn new_note_off(tick: u32, channel: u8, key: u8, velocity: u8) -> Self {
        Self {
            tick,
            message: MidiMessage::NoteOff {
                channel,
                key,
                velocity,
            },
        }
    }

    pub const fn new_program_change(tick: u32, channel: u8, program: u8) -> Self {
        Self {
            tick,
            message: MidiMessage::ProgramChange { channel, program },
        }
    }

    pub const fn new_tempo_change(tick: u32, bpm: u32) -> Self {
        Self {
            tick,
            message: MidiMessage::TempoChange { bpm },
        }
    }

    pub const fn new_end_of_track(tick: u32) -> Self {
        Self {
            tick,
            message: MidiMessage::EndOfTrack,
        }
    }

    pub const fn is_end_of_track(&self) -> bool {
        matches!(self.message, MidiMessage::EndOfTrack)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum MidiMessage {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ProgramChange { channel: u8, program: u8 },
    TempoChange { bpm: u32 },
    EndOfTrack,
}

impl MidiMessage {
    /// Append the raw message bytes, excluding the delta-time prefix.
    ///
    /// Channel and data bytes are validated here so that an out-of-range
    /// value aborts serialization instead of producing a malformed file.
    pub fn render(&self, out: &mut Vec<u8>) -> Result<(), BlendError> {
        match self {
            Self::NoteOn {
                channel,
                key,
                velocity,
            } => push_channel_message(out, 0x90, *channel, &[*key, *velocity]),
            Self::NoteOff {
                channel,
                key,
                velocity,
            } => push_channel_message(out, 0x80, *channel, &[*key, *velocity]),
            Self::ProgramChange { channel, program } => {
                push_channel_message(out, 0xC0, *channel, &[*program])
            }
            Self::TempoChange { bpm } => {
                let mpqn = microseconds_per_quarter_note(*bpm)?;
                out.extend_from_slice(&[
                    0xFF,
                    0x51,
                    0x03,
                    (mpqn >> 16) as u8,
                    (mpqn >> 8) as u8,
                    mpqn as u8,
                ]);
                Ok(())
            }
            Self::EndOfTrack => {
                out.extend_from_slice(&[0xFF, 0x2F, 0x00]);
                Ok(())
            }
        }
    }
}

/// Tempo meta event payload: microseconds per quarter note, 3 bytes big-endian.
fn microseconds_per_quarter_note(bpm: u32) -> Result<u32, BlendError> {
    if bpm == 0 {
        return Err(BlendError::EncodingError(
            "tempo of 0 BPM cannot be encoded".to_string(),
        ));
    }
    let mpqn = 60_000_000 / bpm;
    if mpqn > 0x00FF_FFFF {
        return Err(BlendError::EncodingError(format!(
            "tempo {bpm} BPM does not fit in a 3-byte tempo meta event"
        )));
    }
    Ok(mpqn)
}

fn push_channel_message(
    out: &mut Vec<u8>,
    status: u8,
    channel: u8,
    data: &[u8],
) -> Result<(), BlendError> {
    if channel > 15 {
        return Err(BlendError::EncodingError(format!(
            "channel {channel} out of range"
        )));
    }
    for &byte in data {
        if byte > 127 {
            return Err(BlendError::EncodingError(format!(
                "data byte {byte} out of range"
            )));
        }
    }
    out.push(status | channel);
    out.extend_from_slice(data);
    Ok(())
}
