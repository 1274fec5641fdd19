use clap::Parser;
use genreblend::BlendError as LibBlendError;
use genreblend::{write_midi_file, ScoreBuilder};
use std::io;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "genre_blend.mid";

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("genreblend=info"))
        .init();

    // args
    let args = CliArgs::parse();
    let output_path = args
        .output
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    // build the score and serialize it in one pass
    let events = ScoreBuilder::new().build()?;
    log::info!("generated {} MIDI events", events.len());
    write_midi_file(&events, &output_path)?;

    println!(
        "MIDI file '{}' has been generated. You can now open it in a MIDI player or DAW.",
        output_path.display()
    );
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Optional output path for the generated MIDI file.
    #[arg(long)]
    output: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("score error: {0}")]
    ScoreError(String),
    #[error("encoding error: {0}")]
    EncodingError(String),
    #[error("other error: {0}")]
    OtherError(String),
}

impl From<LibBlendError> for AppError {
    fn from(error: LibBlendError) -> Self {
        match error {
            LibBlendError::ScoreError(s) => Self::ScoreError(s),
            LibBlendError::EncodingError(s) => Self::EncodingError(s),
            LibBlendError::IoError(s) => Self::OtherError(s),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}
