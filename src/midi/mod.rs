pub mod midi_event;
pub mod smf_writer;
