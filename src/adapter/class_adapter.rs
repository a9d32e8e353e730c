//! Class adapter.
//!
//! The adapter is tied to one concrete adaptee type, `PlainTextView`, which
//! it owns privately. Callers only ever see the `Shape` side; the
//! `TextView` side is an implementation detail that can't be swapped after
//! construction or replaced by another `TextView` implementation.

use log::debug;

use crate::adapter::{Manipulator, PlainTextView, Shape, TextManipulator, TextView};
use crate::geometry::Region;

#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    view: PlainTextView,
}

impl TextShape {
    pub fn new(view: PlainTextView) -> Self {
        debug!("class adapter bound to text view at {}", view.origin());
        TextShape { view }
    }
}

impl Shape for TextShape {
    // Converts TextView's origin/extent pair into Shape's region.
    fn bounding_box(&self) -> Region {
        Region::from_origin_extent(self.view.origin(), self.view.extent())
    }

    // Direct forwarding.
    fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    // TextView has nothing to forward to here.
    fn create_manipulator(&self) -> Box<dyn Manipulator + '_> {
        Box::new(TextManipulator::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Extent, Point};

    fn shape(x: f64, y: f64, width: f64, height: f64, empty: bool) -> TextShape {
        let view = PlainTextView::new(
            Point::new(x, y),
            Extent::new(width, height).unwrap(),
            empty,
        );
        TextShape::new(view)
    }

    #[test]
    fn test_bounding_box_keeps_axes_apart() {
        let region = shape(0.0, 0.0, 10.0, 5.0, false).bounding_box();
        assert_eq!(region.bottom_left, Point::new(0.0, 0.0));
        assert_eq!(region.top_right, Point::new(10.0, 5.0));
    }

    #[test]
    fn test_bounding_box_is_deterministic() {
        let a = shape(3.0, -2.0, 7.0, 1.5, false);
        let b = a.clone();
        assert_eq!(a.bounding_box(), b.bounding_box());
        assert_eq!(a.bounding_box(), a.bounding_box());
        assert_eq!(a.bounding_box().top_right, Point::new(10.0, -0.5));
    }

    #[test]
    fn test_is_empty_forwards() {
        assert!(shape(0.0, 0.0, 1.0, 1.0, true).is_empty());
        assert!(!shape(0.0, 0.0, 1.0, 1.0, false).is_empty());
    }

    #[test]
    fn test_manipulator_belongs_to_adapter() {
        let text = shape(1.0, 1.0, 2.0, 2.0, false);
        let mut manipulator = text.create_manipulator();

        let target = manipulator.shape() as *const _ as *const ();
        assert!(std::ptr::eq(target, &text as *const TextShape as *const ()));

        manipulator.drag_by(4.0, 0.5);
        manipulator.drag_by(1.0, 0.5);
        assert_eq!(manipulator.offset(), Point::new(5.0, 1.0));
        assert_eq!(manipulator.preview().bottom_left, Point::new(6.0, 2.0));
        assert_eq!(manipulator.preview().top_right, Point::new(8.0, 4.0));
        // the shape itself stays put
        assert_eq!(text.bounding_box().bottom_left, Point::new(1.0, 1.0));
    }
}
