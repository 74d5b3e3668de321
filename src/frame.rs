use tracing::debug;

use crate::consts::{COLUMNS, FRAME_LEN, MAX_WORD, SCAN_ROWS};
use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// One full panel refresh: a packed word per (scan row, column), row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
  words: Vec<u32>,
}

impl Frame {
  pub fn generate(pattern: Pattern) -> Self {
    let words: Vec<_> = (0..SCAN_ROWS)
      .flat_map(|row| (0..COLUMNS).map(move |col| pattern.color_at(row, col)))
      .map(u32::from)
      .collect();

    debug!("Generated {} words for {pattern}", words.len());

    Frame { words }
  }

  pub fn from_words(words: Vec<u32>) -> Result<Self> {
    if words.len() != FRAME_LEN {
      return Err(Error::FrameLength {
        expected: FRAME_LEN,
        found: words.len(),
      });
    }

    let wide = words.iter().enumerate().find(|(_, word)| **word > MAX_WORD);

    if let Some((index, &word)) = wide {
      return Err(Error::WordRange { index, word });
    }

    Ok(Frame { words })
  }

  pub fn words(&self) -> &[u32] {
    &self.words
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
    self.words.iter().copied()
  }

  pub fn get(&self, row: u16, col: u16) -> Option<u32> {
    if row >= SCAN_ROWS || col >= COLUMNS {
      return None;
    }

    self.words.get(row as usize * COLUMNS as usize + col as usize).copied()
  }
}
