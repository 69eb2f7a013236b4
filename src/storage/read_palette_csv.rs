use std::fs::File;
use std::io::Read;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;

const CHANNELS: usize = 4;

#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("failed to open palette file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read palette CSV")]
    Csv(#[from] csv::Error),
    #[error("palette line {line}, column {column}: {value:?} is not an integer")]
    InvalidChannel {
        line: u64,
        column: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("palette line {line}, column {column}: {value} is outside 0..=255")]
    ChannelOutOfRange { line: u64, column: usize, value: i64 },
}

/// Loads an `r,g,b,a` palette from a CSV file.
///
/// See [`parse_palette_csv`] for the row rules.
pub fn read_palette_csv(path: impl AsRef<Path>) -> Result<Option<Palette>, PaletteLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PaletteLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let palette = parse_palette_csv(file)?;

    match &palette {
        Some(palette) => debug!("loaded {} palette colours from {}", palette.len(), path.display()),
        None => warn!("{} has no usable palette rows, using default colours", path.display()),
    }

    Ok(palette)
}

/// Parses palette rows from any CSV source.
///
/// The first row is a header and is skipped. Rows with fewer than four fields
/// are skipped, extra fields are ignored. Any of the first four fields that is
/// not an integer in `0..=255` fails the whole load. Returns `Ok(None)` when no
/// row produced a colour.
pub fn parse_palette_csv<R: Read>(source: R) -> Result<Option<Palette>, PaletteLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut colours = Vec::new();

    for record in reader.records() {
        let record = record?;

        if record.len() < CHANNELS {
            continue;
        }

        let line = record.position().map_or(0, |position| position.line());
        let mut channels = [0u8; CHANNELS];

        for (column, channel) in channels.iter_mut().enumerate() {
            *channel = parse_channel(&record[column], line, column)?;
        }

        let [r, g, b, a] = channels;
        colours.push(Colour::new(r, g, b, a));
    }

    Ok(Palette::new(colours).ok())
}

fn parse_channel(field: &str, line: u64, column: usize) -> Result<u8, PaletteLoadError> {
    let value: i64 = field
        .parse()
        .map_err(|source| PaletteLoadError::InvalidChannel {
            line,
            column,
            value: field.to_string(),
            source,
        })?;

    u8::try_from(value).map_err(|_| PaletteLoadError::ChannelOutOfRange {
        line,
        column,
        value,
    })
}
