//! Builds every demo object from a TOML file.
//!
//! Run with: cargo run --bin patterns [-- path/to/patterns.toml]

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;
use structural_patterns::adapter::{class_adapter, Shape};
use structural_patterns::config::PatternsConfig;
use structural_patterns::decorator::visual::Canvas;

const DEFAULT_CONFIG: &str = "config/patterns.toml";

fn main() -> Result<()> {
    pretty_env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = PatternsConfig::from_path(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    println!("{}", "=== Adapter ===".bold());
    let shape = class_adapter::TextShape::new(config.text_view());
    println!("bounding box {} (empty: {})", shape.bounding_box(), shape.is_empty());

    println!("\n{}", "=== Window ===".bold());
    let window = config.build_window().context("[window]")?;
    let mut canvas = Canvas::new();
    window.draw(&mut canvas)?;
    println!("{}", canvas.ops().iter().join("\n"));

    println!("\n{}", "=== Backpack ===".bold());
    let backpack = config.build_backpack().context("[backpack]")?;
    println!("{}", backpack.description().green());
    Ok(())
}
