use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] io::Error),
  #[error(transparent)]
  Image(#[from] image::ImageError),
  #[error("line {line}: `{text}` is not a 24-bit hex word")]
  Parse { line: usize, text: String },
  #[error("expected {expected} words, found {found}")]
  FrameLength { expected: usize, found: usize },
  #[error("word {index}: {word:#X} does not fit in 24 bits")]
  WordRange { index: usize, word: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
