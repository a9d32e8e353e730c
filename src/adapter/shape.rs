use crate::adapter::Manipulator;
use crate::geometry::Region;

/// The domain-specific interface the drawing editor works with.
pub trait Shape {
    fn bounding_box(&self) -> Region;

    fn is_empty(&self) -> bool;

    /// Returns an object that knows how to animate this shape while the user
    /// drags it around.
    fn create_manipulator(&self) -> Box<dyn Manipulator + '_>;
}
