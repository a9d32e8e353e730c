//! Adapter: make a `TextView` usable wherever a `Shape` is expected.
//!
//! Participants:
//! - Target (`Shape`): the interface `DrawingEditor` works with
//! - Adaptee (`TextView`): an existing interface that needs adapting
//! - Adapter (`TextShape`): two variants, see [`class_adapter`] and
//!   [`object_adapter`]
//! - Client (`DrawingEditor`)

pub mod class_adapter;
mod editor;
mod manipulator;
pub mod object_adapter;
mod shape;
mod text_view;

pub use editor::DrawingEditor;
pub use manipulator::{Manipulator, TextManipulator};
pub use shape::Shape;
pub use text_view::{PlainTextView, TextView};
