use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::warn;

use crate::models::{LicenseEntry, MetadataEntry};

/// Reasons a metadata line is skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataLineError {
    #[error("invalid metadata line format: {0}")]
    MissingName(String),
    #[error("invalid range format: {0}")]
    MissingColon(String),
    #[error("offset/length not integers: {0}")]
    NotIntegers(String),
}

/// Parse one non-blank metadata line of the form `<offset>:<length> <library name>`.
pub fn parse_metadata_line(line: &str) -> Result<MetadataEntry, MetadataLineError> {
    let line = line.trim();
    let (range, library) = line
        .split_once(' ')
        .ok_or_else(|| MetadataLineError::MissingName(line.to_string()))?;
    let (offset, length) = range
        .split_once(':')
        .ok_or_else(|| MetadataLineError::MissingColon(range.to_string()))?;

    let parse = |s: &str| s.trim().parse::<u64>();
    match (parse(offset), parse(length)) {
        (Ok(offset), Ok(length)) => Ok(MetadataEntry {
            library: library.to_string(),
            offset,
            length,
        }),
        _ => Err(MetadataLineError::NotIntegers(range.to_string())),
    }
}

/// Decode license bytes: UTF-8 first, Latin-1 otherwise.
///
/// Latin-1 maps every byte to the code point of the same value, so this never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Read the metadata index and slice every referenced range out of the blob.
pub fn extract_entries(metadata_path: &Path, licenses_path: &Path) -> Result<Vec<LicenseEntry>> {
    let raw = std::fs::read(metadata_path)
        .with_context(|| format!("failed to read {}", metadata_path.display()))?;
    let metadata = String::from_utf8_lossy(&raw);

    let blob = File::open(licenses_path)
        .with_context(|| format!("failed to open {}", licenses_path.display()))?;
    let mut blob = BufReader::new(blob);

    Ok(extract_from(&metadata, &mut blob))
}

/// Same as [`extract_entries`] over in-memory metadata and any seekable blob.
///
/// Bad lines are logged and skipped; ranges running past the end of the blob are
/// truncated rather than rejected.
pub fn extract_from<R: Read + Seek>(metadata: &str, blob: &mut R) -> Vec<LicenseEntry> {
    let mut entries = Vec::new();

    for (idx, line) in metadata.lines().enumerate() {
        let lineno = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let entry = match parse_metadata_line(line) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("{e} (line {lineno})");
                continue;
            }
        };

        match read_range(blob, entry.offset, entry.length) {
            Ok(bytes) => entries.push(LicenseEntry {
                library: entry.library,
                text: decode_text(&bytes),
            }),
            Err(e) => warn!(
                "failed to read range {}:{} (line {lineno}): {e}",
                entry.offset, entry.length
            ),
        }
    }

    entries
}

fn read_range<R: Read + Seek>(blob: &mut R, offset: u64, length: u64) -> std::io::Result<Vec<u8>> {
    blob.seek(SeekFrom::Start(offset))?;
    let mut buf = Vec::new();
    blob.by_ref().take(length).read_to_end(&mut buf)?;
    Ok(buf)
}
