use log::trace;

use crate::adapter::Shape;
use crate::geometry::{Coord, Point, Region};

/// Animates a shape while the user drags it.
pub trait Manipulator {
    /// The shape this manipulator was created for.
    fn shape(&self) -> &dyn Shape;

    fn drag_by(&mut self, dx: Coord, dy: Coord);

    fn offset(&self) -> Point;

    /// Where the shape would land if the drag ended now.
    fn preview(&self) -> Region {
        let offset = self.offset();
        self.shape().bounding_box().translate(offset.x, offset.y)
    }
}

/// Manipulator for text shapes. `TextView` has no notion of manipulation, so
/// this is bound to the adapter rather than to the adapted view.
pub struct TextManipulator<'s> {
    shape: &'s dyn Shape,
    offset: Point,
}

impl<'s> TextManipulator<'s> {
    pub fn new(shape: &'s dyn Shape) -> Self {
        TextManipulator {
            shape,
            offset: Point::ORIGIN,
        }
    }
}

impl Manipulator for TextManipulator<'_> {
    fn shape(&self) -> &dyn Shape {
        self.shape
    }

    fn drag_by(&mut self, dx: Coord, dy: Coord) {
        self.offset = self.offset.offset(dx, dy);
        trace!("text manipulator dragged to {}", self.offset);
    }

    fn offset(&self) -> Point {
        self.offset
    }
}
