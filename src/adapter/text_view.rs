use crate::geometry::{Extent, Point};

/// The existing text interface. It knows where it sits and how big it is,
/// but nothing about shapes or manipulation.
pub trait TextView {
    fn origin(&self) -> Point;
    fn extent(&self) -> Extent;
    fn is_empty(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlainTextView {
    origin: Point,
    extent: Extent,
    empty: bool,
}

impl PlainTextView {
    pub fn new(origin: Point, extent: Extent, empty: bool) -> Self {
        PlainTextView {
            origin,
            extent,
            empty,
        }
    }
}

impl TextView for PlainTextView {
    fn origin(&self) -> Point {
        self.origin
    }

    fn extent(&self) -> Extent {
        self.extent
    }

    fn is_empty(&self) -> bool {
        self.empty
    }
}
