/// Scan rows driven by the panel controller, each one feeding two physical rows.
pub const SCAN_ROWS: u16 = 32;
pub const COLUMNS: u16 = 64;
pub const PANEL_ROWS: u16 = SCAN_ROWS * 2;

/// Words in a full frame: one per (scan row, column).
pub const FRAME_LEN: usize = SCAN_ROWS as usize * COLUMNS as usize;

/// Highest value a 4-bit channel can hold.
pub const MAX_LEVEL: u8 = 15;
pub const MAX_WORD: u32 = 0xFF_FFFF;

pub const FORMAT_LABEL: &str = "12bpp";
pub const BYTES_PER_WORD: usize = 3;

pub const DEFAULT_OUTPUT: &str = "image.hex";
pub const DEFAULT_PREVIEW: &str = "image.png";
