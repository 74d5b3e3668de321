use crate::consts::{MAX_LEVEL, MAX_WORD};

/// A 12bpp color: three 4-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
  pub const WHITE: Color = Color { r: MAX_LEVEL, g: MAX_LEVEL, b: MAX_LEVEL };
  pub const RED: Color = Color { r: MAX_LEVEL, g: 0, b: 0 };
  pub const GREEN: Color = Color { r: 0, g: MAX_LEVEL, b: 0 };
  pub const BLUE: Color = Color { r: 0, g: 0, b: MAX_LEVEL };

  /// Channels are masked to their low nibble.
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Color {
      r: r & MAX_LEVEL,
      g: g & MAX_LEVEL,
      b: b & MAX_LEVEL,
    }
  }

  /// Integer brightness scaling, `level` out of 15.
  pub fn scale(self, level: u8) -> Self {
    let level = level.min(MAX_LEVEL);
    let ch = |c: u8| ((c & MAX_LEVEL) as u16 * level as u16 / MAX_LEVEL as u16) as u8;

    Color::new(ch(self.r), ch(self.g), ch(self.b))
  }

  /// Expand each nibble to a full byte (0x0 -> 0x00, 0xF -> 0xFF).
  pub fn to_rgb8(self) -> [u8; 3] {
    let c = Color::new(self.r, self.g, self.b);
    [c.r * 17, c.g * 17, c.b * 17]
  }

  fn nibbles(self) -> u32 {
    let Color { r, g, b } = Color::new(self.r, self.g, self.b);
    (r as u32) << 8 | (g as u32) << 4 | b as u32
  }

  fn from_nibbles(bits: u32) -> Self {
    Color::new((bits >> 8) as u8, (bits >> 4) as u8, bits as u8)
  }
}

impl From<Color> for u32 {
  fn from(color: Color) -> Self {
    pack(color)
  }
}

/// Both sub-rows of a scan line get the same color: `{R1,G1,B1,R0,G0,B0}`.
pub fn pack(color: Color) -> u32 {
  let half = color.nibbles();
  half << 12 | half
}

/// Split a word into its `(upper, lower)` nibble groups.
pub fn unpack(word: u32) -> (Color, Color) {
  (Color::from_nibbles(word >> 12), Color::from_nibbles(word & 0xFFF))
}

/// `None` for words wider than 24 bits.
pub fn word_to_hex(word: u32) -> Option<String> {
  (word <= MAX_WORD).then(|| format!("{word:06X}"))
}

pub fn hex_to_word(hex: &str) -> Option<u32> {
  let hex = hex.trim();

  if hex.is_empty() || hex.starts_with('+') {
    return None;
  }

  u32::from_str_radix(hex, 16)
    .ok()
    .filter(|word| *word <= MAX_WORD)
}
