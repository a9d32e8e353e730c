//! Visual components and their decorations.
//!
//! Participants:
//! - Component (`VisualComponent`)
//! - ConcreteComponent (`TextArea`)
//! - Decorator (`Decorator`): forwards everything
//! - ConcreteDecorator (`BorderDecorator`, `ScrollDecorator`,
//!   `DropShadowDecorator`)
//!
//! Nothing is rasterised. Drawing appends `DrawOp`s to a `Canvas` so the
//! order in which layers contribute can be inspected.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use crate::error::PatternError;
use crate::geometry::{Coord, Extent, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text { contents: String, extent: Extent },
    Border { width: u32 },
    ScrollBars { offset: Point },
    DropShadow { offset: Coord },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Text { contents, extent } => write!(f, "text {contents:?} in {extent}"),
            DrawOp::Border { width } => write!(f, "border {width}px"),
            DrawOp::ScrollBars { offset } => write!(f, "scroll bars at {offset}"),
            DrawOp::DropShadow { offset } => write!(f, "drop shadow offset {offset}"),
        }
    }
}

/// Records what was drawn, in order.
#[derive(Debug, Default)]
pub struct Canvas {
    ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new() -> Self {
        Canvas::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        trace!("canvas <- {op}");
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

pub trait VisualComponent {
    fn draw(&self, canvas: &mut Canvas);
    fn resize(&mut self, extent: Extent);
    fn extent(&self) -> Extent;
}

/// The plain component that decorations get attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct TextArea {
    contents: String,
    extent: Extent,
}

impl TextArea {
    pub fn new(contents: impl Into<String>, extent: Extent) -> Self {
        TextArea {
            contents: contents.into(),
            extent,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
    }
}

impl VisualComponent for TextArea {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.push(DrawOp::Text {
            contents: self.contents.clone(),
            extent: self.extent,
        });
    }

    fn resize(&mut self, extent: Extent) {
        self.extent = extent;
    }

    fn extent(&self) -> Extent {
        self.extent
    }
}

/// Lets the caller keep a handle on a component after it has been wrapped.
///
/// A chain only exposes its outermost layer. To talk to an inner one later,
/// hold on to a clone of the `Rc` when building the chain.
pub struct Shared<T>(pub Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(component: T) -> (Self, Rc<RefCell<T>>) {
        let handle = Rc::new(RefCell::new(component));
        (Shared(Rc::clone(&handle)), handle)
    }
}

impl<T: VisualComponent> VisualComponent for Shared<T> {
    fn draw(&self, canvas: &mut Canvas) {
        self.0.borrow().draw(canvas);
    }

    fn resize(&mut self, extent: Extent) {
        self.0.borrow_mut().resize(extent);
    }

    fn extent(&self) -> Extent {
        self.0.borrow().extent()
    }
}

/// Forwards every request to the wrapped component.
///
/// Concrete decorators hold one of these and override only the operations
/// they change.
pub struct Decorator {
    component: Box<dyn VisualComponent>,
}

impl Decorator {
    pub fn new(component: Box<dyn VisualComponent>) -> Self {
        Decorator { component }
    }
}

impl VisualComponent for Decorator {
    fn draw(&self, canvas: &mut Canvas) {
        self.component.draw(canvas);
    }

    fn resize(&mut self, extent: Extent) {
        self.component.resize(extent);
    }

    fn extent(&self) -> Extent {
        self.component.extent()
    }
}

/// Draws a border after its component.
pub struct BorderDecorator {
    inner: Decorator,
    width: u32,
}

impl BorderDecorator {
    pub fn new(component: Box<dyn VisualComponent>, width: u32) -> Self {
        debug!("wrapping component in {width}px border");
        BorderDecorator {
            inner: Decorator::new(component),
            width,
        }
    }

    fn draw_border(&self, canvas: &mut Canvas) {
        canvas.push(DrawOp::Border { width: self.width });
    }
}

impl VisualComponent for BorderDecorator {
    fn draw(&self, canvas: &mut Canvas) {
        self.inner.draw(canvas);
        self.draw_border(canvas);
    }

    // The border eats into the space handed to the component and is
    // counted back in when asked for the size.
    fn resize(&mut self, extent: Extent) {
        self.inner.resize(extent.shrink(Coord::from(self.width)));
    }

    fn extent(&self) -> Extent {
        self.inner.extent().grow(Coord::from(self.width))
    }
}

/// Draws scroll bars after its component.
pub struct ScrollDecorator {
    inner: Decorator,
    offset: Point,
}

impl ScrollDecorator {
    pub fn new(component: Box<dyn VisualComponent>) -> Self {
        debug!("wrapping component in scroller");
        ScrollDecorator {
            inner: Decorator::new(component),
            offset: Point::ORIGIN,
        }
    }

    pub fn scroll_to(&mut self, offset: Point) {
        self.offset = offset;
    }
}

impl VisualComponent for ScrollDecorator {
    fn draw(&self, canvas: &mut Canvas) {
        self.inner.draw(canvas);
        canvas.push(DrawOp::ScrollBars {
            offset: self.offset,
        });
    }

    fn resize(&mut self, extent: Extent) {
        self.inner.resize(extent);
    }

    fn extent(&self) -> Extent {
        self.inner.extent()
    }
}

/// Draws a shadow before its component, so the component lands on top.
pub struct DropShadowDecorator {
    inner: Decorator,
    offset: Coord,
}

impl DropShadowDecorator {
    pub fn new(component: Box<dyn VisualComponent>, offset: Coord) -> Self {
        debug!("wrapping component in drop shadow ({offset})");
        DropShadowDecorator {
            inner: Decorator::new(component),
            offset,
        }
    }
}

impl VisualComponent for DropShadowDecorator {
    fn draw(&self, canvas: &mut Canvas) {
        canvas.push(DrawOp::DropShadow {
            offset: self.offset,
        });
        self.inner.draw(canvas);
    }

    fn resize(&mut self, extent: Extent) {
        self.inner.resize(extent);
    }

    fn extent(&self) -> Extent {
        self.inner.extent()
    }
}

/// Holds whatever `VisualComponent` it is given and can't tell a decorated
/// component from a plain one.
#[derive(Default)]
pub struct Window {
    contents: Option<Box<dyn VisualComponent>>,
}

impl Window {
    pub fn new() -> Self {
        Window::default()
    }

    pub fn set_contents(&mut self, contents: Box<dyn VisualComponent>) {
        self.contents = Some(contents);
    }

    pub fn has_contents(&self) -> bool {
        self.contents.is_some()
    }

    pub fn draw(&self, canvas: &mut Canvas) -> Result<(), PatternError> {
        let contents = self
            .contents
            .as_ref()
            .ok_or_else(|| PatternError::missing("window contents"))?;
        contents.draw(canvas);
        Ok(())
    }

    pub fn resize(&mut self, extent: Extent) -> Result<(), PatternError> {
        let contents = self
            .contents
            .as_mut()
            .ok_or_else(|| PatternError::missing("window contents"))?;
        contents.resize(extent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn text_area() -> TextArea {
        TextArea::new("hello", Extent::new(80.0, 24.0).unwrap())
    }

    fn text_op(contents: &str, width: f64, height: f64) -> DrawOp {
        DrawOp::Text {
            contents: contents.to_string(),
            extent: Extent::new(width, height).unwrap(),
        }
    }

    #[test]
    fn test_plain_decorator_is_transparent() {
        let mut plain = Canvas::new();
        text_area().draw(&mut plain);

        let mut wrapped = Canvas::new();
        Decorator::new(Box::new(Decorator::new(Box::new(text_area())))).draw(&mut wrapped);

        assert_eq!(plain.ops(), wrapped.ops());
    }

    #[test]
    fn test_bordered_scrollable_text_view() {
        let mut window = Window::new();
        window.set_contents(Box::new(BorderDecorator::new(
            Box::new(ScrollDecorator::new(Box::new(text_area()))),
            1,
        )));

        let mut canvas = Canvas::new();
        window.draw(&mut canvas).unwrap();
        assert_eq!(
            canvas.ops(),
            &[
                text_op("hello", 80.0, 24.0),
                DrawOp::ScrollBars {
                    offset: Point::ORIGIN
                },
                DrawOp::Border { width: 1 },
            ]
        );
    }

    #[test]
    fn test_shadow_draws_before_forwarding() {
        let shadowed = DropShadowDecorator::new(Box::new(text_area()), 3.0);
        let mut canvas = Canvas::new();
        shadowed.draw(&mut canvas);
        assert_eq!(canvas.ops()[0], DrawOp::DropShadow { offset: 3.0 });
        assert_eq!(canvas.ops()[1], text_op("hello", 80.0, 24.0));
    }

    #[test]
    fn test_scroll_offset_shows_up() {
        let mut scroller = ScrollDecorator::new(Box::new(text_area()));
        scroller.scroll_to(Point::new(0.0, 12.0));
        let mut canvas = Canvas::new();
        scroller.draw(&mut canvas);
        assert_eq!(
            canvas.ops().last(),
            Some(&DrawOp::ScrollBars {
                offset: Point::new(0.0, 12.0)
            })
        );
    }

    #[test]
    fn test_bordered_extent_includes_border() {
        let mut bordered = BorderDecorator::new(Box::new(text_area()), 1);
        assert_eq!(bordered.extent(), Extent::new(82.0, 26.0).unwrap());

        bordered.resize(Extent::new(20.0, 10.0).unwrap());
        assert_eq!(bordered.extent(), Extent::new(20.0, 10.0).unwrap());
    }

    #[test]
    fn test_resize_passes_through_layers() {
        let (leaf, handle) = Shared::new(text_area());
        let mut chain = ScrollDecorator::new(Box::new(BorderDecorator::new(Box::new(leaf), 2)));

        chain.resize(Extent::new(20.0, 10.0).unwrap());
        assert_eq!(chain.extent(), Extent::new(20.0, 10.0).unwrap());
        assert_eq!(handle.borrow().extent(), Extent::new(16.0, 6.0).unwrap());
    }

    #[test]
    fn test_inner_identity_needs_own_handle() {
        let (leaf, handle) = Shared::new(text_area());
        let mut window = Window::new();
        window.set_contents(Box::new(BorderDecorator::new(Box::new(leaf), 1)));

        handle.borrow_mut().set_contents("edited");

        let mut canvas = Canvas::new();
        window.draw(&mut canvas).unwrap();
        assert_eq!(canvas.ops()[0], text_op("edited", 80.0, 24.0));
        assert_eq!(handle.borrow().contents(), "edited");
    }

    #[test]
    fn test_empty_window_fails_fast() {
        let mut window = Window::new();
        assert!(!window.has_contents());

        let mut canvas = Canvas::new();
        let err = window.draw(&mut canvas).unwrap_err();
        assert!(matches!(err, PatternError::MissingCollaborator { .. }));
        assert!(window.resize(Extent::default()).is_err());
        assert!(canvas.ops().is_empty());
    }

    #[derive(Debug, Clone, Copy)]
    enum Layer {
        Plain,
        Border(u32),
        Scroll,
        Shadow,
    }

    fn layer() -> impl Strategy<Value = Layer> {
        prop_oneof![
            Just(Layer::Plain),
            (1u32..5).prop_map(Layer::Border),
            Just(Layer::Scroll),
            Just(Layer::Shadow),
        ]
    }

    fn wrap(component: Box<dyn VisualComponent>, layer: Layer) -> Box<dyn VisualComponent> {
        match layer {
            Layer::Plain => Box::new(Decorator::new(component)),
            Layer::Border(width) => Box::new(BorderDecorator::new(component, width)),
            Layer::Scroll => Box::new(ScrollDecorator::new(component)),
            Layer::Shadow => Box::new(DropShadowDecorator::new(component, 1.0)),
        }
    }

    proptest! {
        #[test]
        fn test_every_layer_draws_exactly_once(layers in prop::collection::vec(layer(), 0..8)) {
            let chain = layers
                .iter()
                .fold(Box::new(text_area()) as Box<dyn VisualComponent>, |inner, &layer| {
                    wrap(inner, layer)
                });

            let mut canvas = Canvas::new();
            chain.draw(&mut canvas);

            // Shadows come before the text, outermost first. Everything else
            // comes after it, innermost first.
            let mut expected: Vec<DrawOp> = layers
                .iter()
                .rev()
                .filter(|layer| matches!(layer, Layer::Shadow))
                .map(|_| DrawOp::DropShadow { offset: 1.0 })
                .collect();
            expected.push(text_op("hello", 80.0, 24.0));
            expected.extend(layers.iter().filter_map(|layer| match layer {
                Layer::Border(width) => Some(DrawOp::Border { width: *width }),
                Layer::Scroll => Some(DrawOp::ScrollBars { offset: Point::ORIGIN }),
                Layer::Plain | Layer::Shadow => None,
            }));

            prop_assert_eq!(canvas.ops(), expected.as_slice());
        }

        #[test]
        fn test_resize_then_extent_round_trips(
            layers in prop::collection::vec(layer(), 0..8),
            width in 100.0f64..300.0,
            height in 100.0f64..300.0,
        ) {
            let mut chain = layers
                .iter()
                .fold(Box::new(text_area()) as Box<dyn VisualComponent>, |inner, &layer| {
                    wrap(inner, layer)
                });

            let target = Extent::new(width, height).unwrap();
            chain.resize(target);
            let reported = chain.extent();
            prop_assert!((reported.width() - width).abs() < 1e-9);
            prop_assert!((reported.height() - height).abs() < 1e-9);
        }
    }
}
