use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use led_panel_hex::{
  consts::DEFAULT_PREVIEW,
  hex::read_frame_file,
  preview::save_preview,
};

#[derive(Parser)]
#[command(name = "hex_to_png")]
#[command(author = "yurzhang")]
#[command(about = "Save a .hex panel frame to an image file.")]
#[command(version, long_about = None)]
struct Args {
  /// Hex file holding one full frame
  input: PathBuf,

  #[arg(short, long, default_value = DEFAULT_PREVIEW)]
  output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
  tracing_subscriber::fmt()
    .with_max_level(LevelFilter::INFO)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let frame = read_frame_file(&args.input)?;
  save_preview(&frame, &args.output)?;

  println!("OK! {} -> {}", args.input.display(), args.output.display());

  Ok(())
}
