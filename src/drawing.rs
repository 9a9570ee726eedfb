//! Low-level lopdf drawing operations

use crate::Result;
use crate::fit::Rect;
use crate::style::Color;
use lopdf::{
    Document, Object, ObjectId,
    content::{Content, Operation},
};
use tracing::{debug, trace};

/// Set stroke color and line width
pub fn stroke_style_ops(color: Color, width: f32) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("w", vec![width.into()]),
    ]
}

/// Stroke a rectangle outline
pub fn rect_stroke_ops(rect: Rect) -> Vec<Operation> {
    vec![
        Operation::new(
            "re",
            vec![
                rect.x.into(),
                rect.y.into(),
                rect.w.into(),
                rect.h.into(),
            ],
        ),
        Operation::new("S", vec![]),
    ]
}

/// Stroke a line between two points
pub fn line_ops(x1: f32, y1: f32, x2: f32, y2: f32) -> Vec<Operation> {
    vec![
        Operation::new("m", vec![x1.into(), y1.into()]),
        Operation::new("l", vec![x2.into(), y2.into()]),
        Operation::new("S", vec![]),
    ]
}

/// Paint a previously registered image XObject into `rect`.
///
/// Wraps the placement in a graphics state save/restore so the CTM change
/// does not leak into later operations.
pub fn image_ops(resource_name: &str, rect: Rect) -> Vec<Operation> {
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                rect.w.into(),
                0.into(),
                0.into(),
                rect.h.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        ),
        Operation::new("Do", vec![Object::Name(resource_name.as_bytes().to_vec())]),
        Operation::new("Q", vec![]),
    ]
}

/// Encode operations and append them as a content stream on the page
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    debug!(
        "adding {} operations to page {:?}",
        operations.len(),
        page_id
    );
    trace!("operations: {:?}", operations);

    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}
