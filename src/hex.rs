use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::{BYTES_PER_WORD, FORMAT_LABEL};
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::pixel::{hex_to_word, word_to_hex};

/// What ended up on disk after a write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteReport {
  pub path: PathBuf,
  pub pixels: usize,
  pub format: &'static str,
  pub bytes: usize,
}

/// One 6-digit uppercase word per line, nothing else.
///
/// Stops at the first word wider than 24 bits.
pub fn write_hex<W: Write>(mut out: W, words: &[u32]) -> Result<()> {
  for (index, &word) in words.iter().enumerate() {
    let hex = word_to_hex(word).ok_or(Error::WordRange { index, word })?;
    writeln!(out, "{hex}")?;
  }

  out.flush()?;
  Ok(())
}

/// Truncates `path` if it exists.
pub fn write_hex_file(path: &Path, words: &[u32]) -> Result<WriteReport> {
  let file = File::create(path)?;
  write_hex(BufWriter::new(file), words)?;

  info!("Wrote {} words to {}", words.len(), path.display());

  Ok(WriteReport {
    path: path.to_owned(),
    pixels: words.len(),
    format: FORMAT_LABEL,
    bytes: words.len() * BYTES_PER_WORD,
  })
}

/// Blank lines are skipped, line numbers in errors are 1-based.
pub fn read_hex<R: Read>(input: R) -> Result<Vec<u32>> {
  let mut words = vec![];

  for (idx, line) in BufReader::new(input).lines().enumerate() {
    let line = line?;
    let text = line.trim();

    if text.is_empty() {
      continue;
    }

    let word = hex_to_word(text).ok_or_else(|| Error::Parse {
      line: idx + 1,
      text: text.to_owned(),
    })?;

    words.push(word);
  }

  Ok(words)
}

pub fn read_hex_file(path: &Path) -> Result<Vec<u32>> {
  let words = read_hex(File::open(path)?)?;
  debug!("Read {} words from {}", words.len(), path.display());

  Ok(words)
}

/// Like [`read_hex_file`], but the file must hold exactly one frame.
pub fn read_frame_file(path: &Path) -> Result<Frame> {
  Frame::from_words(read_hex_file(path)?)
}
