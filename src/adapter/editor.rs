use log::debug;

use crate::adapter::Shape;
use crate::error::PatternError;
use crate::geometry::{Coord, Region};

/// The client. It only knows about `Shape`, so adapted text sits next to
/// any other shape without the editor noticing.
#[derive(Default)]
pub struct DrawingEditor<'a> {
    shapes: Vec<Box<dyn Shape + 'a>>,
}

impl<'a> DrawingEditor<'a> {
    pub fn new() -> Self {
        DrawingEditor { shapes: Vec::new() }
    }

    pub fn add(&mut self, shape: impl Shape + 'a) -> usize {
        self.shapes.push(Box::new(shape));
        self.shapes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, index: usize) -> Result<&dyn Shape, PatternError> {
        self.shapes
            .get(index)
            .map(|shape| shape.as_ref() as &dyn Shape)
            .ok_or(PatternError::ShapeNotFound {
                index,
                len: self.shapes.len(),
            })
    }

    /// Union of the bounding boxes of every non-empty shape.
    pub fn extent_of_all(&self) -> Option<Region> {
        self.shapes
            .iter()
            .filter(|shape| !shape.is_empty())
            .map(|shape| shape.bounding_box())
            .reduce(Region::union)
    }

    /// Drags the shape at `index` and returns where it would end up.
    pub fn manipulate(&self, index: usize, dx: Coord, dy: Coord) -> Result<Region, PatternError> {
        let shape = self.shape(index)?;
        let mut manipulator = shape.create_manipulator();
        manipulator.drag_by(dx, dy);
        let landed = manipulator.preview();
        debug!("shape {index} dragged by ({dx}, {dy}) to {landed}");
        Ok(landed)
    }
}
