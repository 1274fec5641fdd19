//! Integration tests for genreblend library usage.
//!
//! These tests exercise the full pipeline through the public API:
//! score generation, serialization and file output.

use genreblend::{
    render_midi_bytes, write_midi_file, BlendError, MidiEvent, MidiMessage, ScoreBuilder,
    TICKS_PER_BEAT,
};

/// Test that all major types are accessible from the library.
#[test]
fn test_types_accessible() {
    // This test verifies that the public API types compile and are usable.
    // If any re-export is missing, this test will fail to compile.

    fn _assert_types() {
        let _: fn(&[MidiEvent]) -> Result<Vec<u8>, BlendError> = render_midi_bytes;
        let _: u16 = TICKS_PER_BEAT;
    }
}

/// Test generating the full composition.
#[test]
fn test_score_generation() {
    let events = ScoreBuilder::new().build().expect("Failed to build score");

    assert!(!events.is_empty(), "Should generate MIDI events");

    let has_note_on = events
        .iter()
        .any(|e| matches!(e.message, MidiMessage::NoteOn { .. }));
    assert!(has_note_on, "Should have NoteOn events");

    let last = events.last().expect("Should have a final event");
    assert!(
        matches!(last.message, MidiMessage::EndOfTrack),
        "Final event should be end-of-track"
    );
    assert_eq!(last.tick, 9216, "Piece should end after 24 bars");
}

/// Test the binary layout of the serialized file.
#[test]
fn test_serialized_layout() {
    let events = ScoreBuilder::new().build().expect("Failed to build score");
    let bytes = render_midi_bytes(&events).expect("Failed to serialize");

    // 14-byte header: MThd, length 6, format 0, 1 track, division 96
    assert_eq!(
        &bytes[..14],
        &[0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0x60]
    );

    // track chunk header with an exact length field
    assert_eq!(&bytes[14..18], b"MTrk");
    let track_len = u32::from_be_bytes(bytes[18..22].try_into().unwrap());
    assert_eq!(track_len as usize, bytes.len() - 22);

    // the body ends with the end-of-track meta event
    assert_eq!(&bytes[bytes.len() - 3..], &[0xFF, 0x2F, 0x00]);
}

/// Test that two independent runs produce byte-identical output.
#[test]
fn test_output_idempotence() {
    let first_events = ScoreBuilder::new().build().expect("Failed to build score");
    let second_events = ScoreBuilder::new().build().expect("Failed to build score");
    assert_eq!(first_events, second_events);

    let first = render_midi_bytes(&first_events).expect("Failed to serialize");
    let second = render_midi_bytes(&second_events).expect("Failed to serialize");
    assert_eq!(first, second);
}

/// Test writing the file to disk.
#[test]
fn test_file_output() {
    let events = ScoreBuilder::new().build().expect("Failed to build score");
    let expected = render_midi_bytes(&events).expect("Failed to serialize");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("genre_blend.mid");
    write_midi_file(&events, &path).expect("Failed to write file");

    let written = std::fs::read(&path).expect("Failed to read file back");
    assert_eq!(written, expected);
}

/// Test error handling for invalid event lists.
#[test]
fn test_serialization_error() {
    // a track without an end-of-track event must be rejected
    let events = vec![MidiEvent::new_note_on(0, 0, 60, 100)];
    let result = render_midi_bytes(&events);

    assert!(result.is_err(), "Should return error for invalid track");
    let err = result.unwrap_err();
    assert!(
        matches!(err, BlendError::EncodingError(_)),
        "Should be an EncodingError"
    );
}
