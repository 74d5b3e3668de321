use std::fs;

use clap::ValueEnum;
use led_panel_hex::{
  consts::{FRAME_LEN, MAX_WORD},
  hex::{read_frame_file, read_hex_file, write_hex_file},
  preview::save_preview,
  Error, Frame, Pattern,
};

#[test]
fn file_layout() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("image.hex");

  let frame = Frame::generate(Pattern::Checkerboard);
  let report = write_hex_file(&path, frame.words()).unwrap();

  assert_eq!(report.path, path);
  assert_eq!(report.pixels, FRAME_LEN);
  assert_eq!(report.format, "12bpp");
  assert_eq!(report.bytes, FRAME_LEN * 3);

  let text = fs::read_to_string(&path).unwrap();
  let lines: Vec<_> = text.lines().collect();

  assert_eq!(lines.len(), FRAME_LEN);
  assert!(text.ends_with('\n'));
  assert!(lines.iter().all(|line| {
    line.len() == 6 && line.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
  }));
  assert_eq!(lines[0], "FFFFFF");
  assert_eq!(lines[1], "000000");
}

#[test]
fn round_trip_every_pattern() {
  let dir = tempfile::tempdir().unwrap();

  for &pattern in Pattern::value_variants() {
    let path = dir.path().join(format!("{pattern}.hex"));
    let frame = Frame::generate(pattern);

    write_hex_file(&path, frame.words()).unwrap();

    let words = read_hex_file(&path).unwrap();
    assert_eq!(words, frame.words(), "{pattern}");
    assert!(words.iter().all(|word| *word <= MAX_WORD));
    assert_eq!(read_frame_file(&path).unwrap(), frame);
  }
}

#[test]
fn repeated_runs_are_byte_identical() {
  let dir = tempfile::tempdir().unwrap();
  let first = dir.path().join("first.hex");
  let second = dir.path().join("second.hex");

  write_hex_file(&first, Frame::generate(Pattern::Gradient).words()).unwrap();
  write_hex_file(&second, Frame::generate(Pattern::Gradient).words()).unwrap();

  assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn overwrite_truncates() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("image.hex");

  fs::write(&path, "stale\n".repeat(5000)).unwrap();
  write_hex_file(&path, Frame::generate(Pattern::AllBlack).words()).unwrap();

  let text = fs::read_to_string(&path).unwrap();
  assert_eq!(text, "000000\n".repeat(FRAME_LEN));
}

#[test]
fn unwritable_path_is_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("missing").join("image.hex");

  let res = write_hex_file(&path, Frame::generate(Pattern::AllWhite).words());
  assert!(matches!(res, Err(Error::Io(_))));
}

#[test]
fn short_file_is_not_a_frame() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("short.hex");

  write_hex_file(&path, &[0xFFFFFF; 100]).unwrap();

  assert!(matches!(
    read_frame_file(&path),
    Err(Error::FrameLength { expected: FRAME_LEN, found: 100 }),
  ));
}

#[test]
fn preview_png_is_written() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("preview.png");

  save_preview(&Frame::generate(Pattern::Stripes), &path).unwrap();

  let img = image::open(&path).unwrap().into_rgb8();
  assert_eq!(img.dimensions(), (64, 64));
  assert_eq!(img.get_pixel(22, 5).0, [0, 255, 0]);
  assert_eq!(img.get_pixel(22, 40).0, [0, 255, 0]);
}
