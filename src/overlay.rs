//! Transient size label shown next to a shape while it is drawn or resized.
//!
//! Shapes and text live in two independent layers, each with its own screen
//! matrix. The label position is found by taking the shape's bounding-box
//! origin out to client space through the shape layer, then back into the
//! text layer.

use std::cell::{Cell, RefCell};

use glam::{DAffine2, DVec2};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::consts;
use crate::errors::{SvgError, TransformError};
use crate::points::fmt_num;
use crate::transform::{ScreenCtm, canvas_to_client, client_to_canvas};
use crate::types::BBox;

/// Anything that can report its current bounding box in its layer's local space.
pub trait Shape {
    fn bbox(&self) -> BBox;
}

impl Shape for BBox {
    fn bbox(&self) -> BBox {
        *self
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    fn bbox(&self) -> BBox {
        (**self).bbox()
    }
}

/// Presentation of a size label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub weight: String,
    pub fill: String,
    pub class: String,
    /// Offset from the bounding-box origin on both axes, in text-layer units
    pub margin: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            weight: consts::TEXT_WEIGHT.to_string(),
            fill: consts::TEXT_FILL.to_string(),
            class: consts::TEXT_CLASS.to_string(),
            margin: consts::TEXT_MARGIN,
        }
    }
}

/// A layer that owns text nodes.
///
/// Methods take `&self`: like DOM handles, a layer is shared between the
/// drawing engine and any number of labels.
pub trait TextLayer: ScreenCtm {
    type Node;

    /// Attach a new, empty text node.
    fn create_text(&self, style: &TextStyle) -> Self::Node;

    /// Replace the node's content and move it to `at` (layer-local).
    fn set_text(&self, node: &Self::Node, text: &str, at: DVec2);

    /// Detach the node.
    fn remove(&self, node: Self::Node);
}

/// Format a bounding box as `<width>x<height>`.
pub fn size_text(bbox: &BBox) -> String {
    format!(
        "{:.prec$}x{:.prec$}",
        bbox.width,
        bbox.height,
        prec = consts::SIZE_PRECISION
    )
}

/// A size label bound to a shape layer and a text layer.
///
/// Owns exactly one text node from creation until [`rm`](Self::rm) or drop.
pub struct ShapeSizeElement<'a, S: ScreenCtm, L: TextLayer> {
    shapes: &'a S,
    text: &'a L,
    style: TextStyle,
    node: Option<L::Node>,
}

impl<'a, S: ScreenCtm, L: TextLayer> ShapeSizeElement<'a, S, L> {
    pub fn new(shapes: &'a S, text: &'a L) -> Self {
        Self::with_style(shapes, text, TextStyle::default())
    }

    pub fn with_style(shapes: &'a S, text: &'a L, style: TextStyle) -> Self {
        let node = text.create_text(&style);
        crate::log::debug!(class = %style.class, "size label created");
        ShapeSizeElement {
            shapes,
            text,
            style,
            node: Some(node),
        }
    }

    /// Re-read `shape`'s bounding box and move the label next to it.
    ///
    /// Does nothing once the label has been removed. Fails if the text
    /// layer's matrix cannot be inverted; the label is left untouched then.
    pub fn update(&mut self, shape: &impl Shape) -> Result<(), TransformError> {
        let Some(node) = &self.node else {
            return Ok(());
        };

        let bbox = shape.bbox();
        let text = size_text(&bbox);
        let client = canvas_to_client(self.shapes, bbox.origin());
        let local = client_to_canvas(self.text, client)?;
        let at = local + DVec2::splat(self.style.margin);

        crate::log::debug!(%text, x = at.x, y = at.y, "size label updated");
        self.text.set_text(node, &text, at);
        Ok(())
    }

    /// Detach the label. Calling it again is a no-op.
    pub fn rm(&mut self) {
        if let Some(node) = self.node.take() {
            crate::log::debug!("size label removed");
            self.text.remove(node);
        }
    }

    pub fn is_removed(&self) -> bool {
        self.node.is_none()
    }

    /// The owned text node, until removal.
    pub fn node(&self) -> Option<&L::Node> {
        self.node.as_ref()
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

impl<S: ScreenCtm, L: TextLayer> Drop for ShapeSizeElement<'_, S, L> {
    fn drop(&mut self) {
        self.rm();
    }
}

/// Create a size label with the default style.
pub fn display_shape_size<'a, S: ScreenCtm, L: TextLayer>(
    shapes: &'a S,
    text: &'a L,
) -> ShapeSizeElement<'a, S, L> {
    ShapeSizeElement::new(shapes, text)
}

// ============================================================================
// In-memory SVG text layer
// ============================================================================

/// Handle to a `<text>` node in an [`SvgTextLayer`]. Not `Clone`: whoever
/// created the node is the only one who can remove it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct TextNode {
    id: usize,
    style: TextStyle,
    content: String,
    at: DVec2,
}

/// A `<g>` of text nodes kept in memory, with its own screen matrix.
#[derive(Debug)]
pub struct SvgTextLayer {
    ctm: Cell<DAffine2>,
    class: Option<String>,
    nodes: RefCell<Vec<TextNode>>,
    next_id: Cell<usize>,
}

impl Default for SvgTextLayer {
    fn default() -> Self {
        SvgTextLayer::new(DAffine2::IDENTITY)
    }
}

impl SvgTextLayer {
    pub fn new(ctm: DAffine2) -> Self {
        SvgTextLayer {
            ctm: Cell::new(ctm),
            class: None,
            nodes: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Change the layer's screen matrix (pan/zoom happened).
    pub fn set_ctm(&self, ctm: DAffine2) {
        self.ctm.set(ctm);
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.borrow().iter().any(|n| n.id == id.0)
    }

    pub fn text_of(&self, id: &NodeId) -> Option<String> {
        self.nodes
            .borrow()
            .iter()
            .find(|n| n.id == id.0)
            .map(|n| n.content.clone())
    }

    pub fn position_of(&self, id: &NodeId) -> Option<DVec2> {
        self.nodes.borrow().iter().find(|n| n.id == id.0).map(|n| n.at)
    }

    /// Serialize the group and its text nodes as SVG markup.
    pub fn to_svg(&self) -> Result<String, SvgError> {
        let mut writer = Writer::new(Vec::new());

        let mut group = BytesStart::new("g");
        if let Some(class) = &self.class {
            group.push_attribute(("class", class.as_str()));
        }
        writer.write_event(Event::Start(group))?;

        for node in self.nodes.borrow().iter() {
            let x = fmt_num(node.at.x);
            let y = fmt_num(node.at.y);
            let mut text = BytesStart::new("text");
            text.push_attribute(("x", x.as_str()));
            text.push_attribute(("y", y.as_str()));
            text.push_attribute(("class", node.style.class.as_str()));
            text.push_attribute(("font-weight", node.style.weight.as_str()));
            text.push_attribute(("fill", node.style.fill.as_str()));
            writer.write_event(Event::Start(text))?;
            writer.write_event(Event::Text(BytesText::new(&node.content)))?;
            writer.write_event(Event::End(BytesEnd::new("text")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("g")))?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

impl ScreenCtm for SvgTextLayer {
    fn screen_ctm(&self) -> DAffine2 {
        self.ctm.get()
    }
}

impl TextLayer for SvgTextLayer {
    type Node = NodeId;

    fn create_text(&self, style: &TextStyle) -> NodeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.nodes.borrow_mut().push(TextNode {
            id,
            style: style.clone(),
            content: String::new(),
            at: DVec2::ZERO,
        });
        NodeId(id)
    }

    fn set_text(&self, node: &NodeId, text: &str, at: DVec2) {
        if let Some(n) = self.nodes.borrow_mut().iter_mut().find(|n| n.id == node.0) {
            n.content.clear();
            n.content.push_str(text);
            n.at = at;
        }
    }

    fn remove(&self, node: NodeId) {
        self.nodes.borrow_mut().retain(|n| n.id != node.0);
    }
}
