use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::info;

use crate::consts::{COLUMNS, PANEL_ROWS, SCAN_ROWS};
use crate::error::Result;
use crate::frame::Frame;
use crate::pixel::unpack;

/// Lay a frame out the way the panel shows it.
///
/// The lower nibble group of scan row `r` lights physical row `r`, the upper
/// group lights row `r + 32`.
pub fn render(frame: &Frame) -> RgbImage {
  let mut imgbuf = RgbImage::new(COLUMNS.into(), PANEL_ROWS.into());

  for row in 0..SCAN_ROWS {
    for col in 0..COLUMNS {
      let Some(word) = frame.get(row, col) else {
        continue;
      };
      let (upper, lower) = unpack(word);

      let x = col.into();
      imgbuf.put_pixel(x, row.into(), Rgb(lower.to_rgb8()));
      imgbuf.put_pixel(x, (row + SCAN_ROWS).into(), Rgb(upper.to_rgb8()));
    }
  }

  imgbuf
}

/// Image format follows the extension of `path`.
pub fn save_preview(frame: &Frame, path: &Path) -> Result<()> {
  render(frame).save(path)?;
  info!("Saved preview to {}", path.display());

  Ok(())
}
