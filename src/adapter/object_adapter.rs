//! Object adapter.
//!
//! Holds a borrowed `TextView` supplied by the caller, so any implementation
//! works without touching this code. The caller keeps ownership of the view.

use log::debug;

use crate::adapter::{Manipulator, Shape, TextManipulator, TextView};
use crate::geometry::Region;

pub struct TextShape<'a> {
    text: &'a dyn TextView,
}

impl<'a> TextShape<'a> {
    pub fn new(text: &'a dyn TextView) -> Self {
        debug!("object adapter bound to text view at {}", text.origin());
        TextShape { text }
    }
}

impl Shape for TextShape<'_> {
    fn bounding_box(&self) -> Region {
        Region::from_origin_extent(self.text.origin(), self.text.extent())
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn create_manipulator(&self) -> Box<dyn Manipulator + '_> {
        Box::new(TextManipulator::new(self))
    }
}
