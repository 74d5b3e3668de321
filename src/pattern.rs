use std::fmt;

use clap::ValueEnum;

use crate::consts::{COLUMNS, MAX_LEVEL, SCAN_ROWS};
use crate::pixel::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
  /// Red, green and blue thirds fading in from the top row
  #[default]
  Gradient,
  Checkerboard,
  /// Red, green and blue vertical thirds at full brightness
  Stripes,
  /// Generic test pattern
  Frame,
  #[value(name = "all_white")]
  AllWhite,
  #[value(name = "all_black")]
  AllBlack,
}

impl Pattern {
  /// Color of the pixel at scan row `row`, column `col`.
  pub fn color_at(self, row: u16, col: u16) -> Color {
    match self {
      Pattern::Gradient => {
        let brightness = row * MAX_LEVEL as u16 / (SCAN_ROWS - 1);
        column_third(col).scale(brightness as u8)
      }
      Pattern::Checkerboard => {
        if (row + col) % 2 == 0 {
          Color::WHITE
        } else {
          Color::BLACK
        }
      }
      Pattern::Stripes => column_third(col),
      Pattern::AllWhite => Color::WHITE,
      Pattern::AllBlack => Color::BLACK,
      // no dedicated look for `frame`, it shares the fallback
      Pattern::Frame => test_pattern(row, col),
    }
  }
}

impl fmt::Display for Pattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let value = self.to_possible_value().expect("no pattern is skipped");
    f.write_str(value.get_name())
  }
}

/// Columns [0,21) red, [21,42) green, [42,64) blue.
fn column_third(col: u16) -> Color {
  let third = COLUMNS / 3;

  if col < third {
    Color::RED
  } else if col < third * 2 {
    Color::GREEN
  } else {
    Color::BLUE
  }
}

fn test_pattern(row: u16, col: u16) -> Color {
  Color::new((col % 16) as u8, (row % 16) as u8, ((col + row) % 16) as u8)
}
