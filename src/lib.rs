//! # Structural Patterns in Rust
//!
//! This crate demonstrates two structural design patterns:
//!
//! ## Adapter
//! - `Shape` is the interface clients use, `TextView` is an existing
//!   interface that does not fit it
//! - Class adapter: owns one fixed `TextView` type, exposes only `Shape`
//! - Object adapter: borrows any `TextView` handed in at construction
//! - `DrawingEditor` is the client working purely through `Shape`
//!
//! ## Decorator
//! - Visual components: borders, scroll bars and drop shadows wrapped
//!   around a text area and placed in a `Window`
//! - Backpacks: features stacked around a plain backpack
//!
//! ## Config
//! - `PatternsConfig` builds all of the above from a TOML file
//!
//! Run demos with: `cargo run --bin <name>`

pub mod adapter;
pub mod config;
pub mod decorator;
pub mod error;
pub mod geometry;

pub use error::PatternError;
pub use geometry::{Coord, Extent, Point, Region};
