//! Decorator: a bordered, scrollable text view in a window.
//!
//! Run with: cargo run --bin decorator_demo

use anyhow::Result;
use colored::Colorize;
use structural_patterns::decorator::visual::{
    BorderDecorator, Canvas, ScrollDecorator, Shared, TextArea, Window,
};
use structural_patterns::{Extent, Point};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut window = Window::new();
    let mut canvas = Canvas::new();

    println!("{}", "=== Empty window ===".bold());
    if let Err(err) = window.draw(&mut canvas) {
        println!("{}", err.to_string().red());
    }

    println!("\n{}", "=== Plain text view ===".bold());
    window.set_contents(Box::new(TextArea::new("Hello", Extent::new(80.0, 24.0)?)));
    window.draw(&mut canvas)?;
    print_canvas(&mut canvas);

    // Keep a handle on the text view: once wrapped, the window only sees
    // the outermost decorator.
    println!("\n{}", "=== Bordered, scrollable text view ===".bold());
    let (text, handle) = Shared::new(TextArea::new("Hello", Extent::new(80.0, 24.0)?));
    let mut scroller = ScrollDecorator::new(Box::new(text));
    scroller.scroll_to(Point::new(0.0, 3.0));
    window.set_contents(Box::new(BorderDecorator::new(Box::new(scroller), 1)));
    window.resize(Extent::new(82.0, 26.0)?)?;
    window.draw(&mut canvas)?;
    print_canvas(&mut canvas);

    handle.borrow_mut().set_contents("Hello again");
    window.draw(&mut canvas)?;
    print_canvas(&mut canvas);
    Ok(())
}

fn print_canvas(canvas: &mut Canvas) {
    for (step, op) in canvas.ops().iter().enumerate() {
        println!("  {}. {}", step + 1, op);
    }
    canvas.clear();
}
