//! Adapter: a TextView made to look like a Shape, two ways.
//!
//! Run with: cargo run --bin adapter_demo

use anyhow::{Context, Result};
use colored::Colorize;
use structural_patterns::adapter::{
    class_adapter, object_adapter, DrawingEditor, PlainTextView, Shape, TextView,
};
use structural_patterns::{Extent, Point};

fn main() -> Result<()> {
    pretty_env_logger::init();

    println!("{}", "=== Class Adapter ===".bold());
    let extent = Extent::new(10.0, 5.0).context("text view extent")?;
    let view = PlainTextView::new(Point::new(0.0, 0.0), extent, false);
    let owned = class_adapter::TextShape::new(view);
    println!("bounding box: {}", owned.bounding_box());
    println!("empty:        {}", owned.is_empty());

    println!("\n{}", "=== Object Adapter ===".bold());
    let shared_view = PlainTextView::new(Point::new(20.0, 0.0), Extent::new(4.0, 8.0)?, false);
    let borrowed = object_adapter::TextShape::new(&shared_view);
    println!("bounding box: {}", borrowed.bounding_box());

    let mut manipulator = borrowed.create_manipulator();
    manipulator.drag_by(-5.0, 2.5);
    println!("dragged to:   {}", manipulator.preview());
    drop(manipulator);

    println!("\n{}", "=== Drawing Editor ===".bold());
    let mut editor = DrawingEditor::new();
    editor.add(owned);
    editor.add(borrowed);
    match editor.extent_of_all() {
        Some(region) => println!("{} shapes cover {}", editor.len(), region.to_string().green()),
        None => println!("{}", "nothing to show".yellow()),
    }

    // The view is still ours; the object adapter only borrowed it.
    println!("view still at {}", shared_view.origin());
    Ok(())
}
