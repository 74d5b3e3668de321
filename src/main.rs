use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use led_panel_hex::{
  consts::DEFAULT_OUTPUT,
  hex::{write_hex_file, WriteReport},
  preview::save_preview,
  Frame, Pattern,
};

const SHOWN_WORDS: usize = 8;

#[derive(Parser)]
#[command(name = "led-panel-hex")]
#[command(author = "yurzhang")]
#[command(about = "Generate a .hex test image for a 64x64 LED matrix.")]
#[command(version, long_about = None)]
struct Args {
  /// Output file
  #[arg(short, long, default_value = DEFAULT_OUTPUT)]
  output: PathBuf,

  /// Pattern to generate
  #[arg(short, long, value_enum, default_value_t = Pattern::Gradient)]
  pattern: Pattern,

  /// Also save a PNG preview of the frame
  #[arg(long)]
  preview: Option<PathBuf>,

  /// Show debug logs
  #[arg(short, long)]
  verbose: bool,
}

fn print_report(report: &WriteReport) {
  println!("✓ File generated: {}", report.path.display());
  println!("  Total pixels: {}", report.pixels);
  println!("  Format: {} (4 bits per color)", report.format);
  println!("  Size: {} bytes", report.bytes);
}

fn print_first_words(frame: &Frame) {
  println!("\nFirst {SHOWN_WORDS} words:");

  for (idx, word) in frame.iter().take(SHOWN_WORDS).enumerate() {
    println!("  [{idx:04}] 0x{word:02X} = {word:06b}");
  }
}

fn main() -> Result<(), Box<dyn Error>> {
  let args = Args::parse();

  let level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .init();

  println!("Generating pattern: {}", args.pattern);
  let frame = Frame::generate(args.pattern);

  let report = write_hex_file(&args.output, frame.words())?;
  print_report(&report);

  if let Some(preview) = &args.preview {
    save_preview(&frame, preview)?;
    println!("  Preview: {}", preview.display());
  }

  print_first_words(&frame);

  Ok(())
}
