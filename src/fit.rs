//! Proportional image fitting within a box

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page coordinates (origin bottom-left, points)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether `other` lies entirely inside this rectangle (within tolerance)
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.x + other.w <= self.x + self.w + EPS
            && other.y + other.h <= self.y + self.h + EPS
    }
}

/// Image scaling policy for placing a source raster in the viewport.
///
/// `Fill` is not a cover-and-crop mode: it inverts the aspect comparison of
/// `Fit`, matching the box on the other axis. Both modes keep the whole image
/// visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    Fit,
    Fill,
}

impl Default for FitMode {
    fn default() -> Self {
        Self::Fit
    }
}

/// Compute the placement rectangle for an image of `natural` pixel size
/// inside `bbox`, preserving aspect ratio and centering on both axes.
///
/// `inner_pad` is subtracted uniformly from all four sides before fitting,
/// with a minimum usable size of 1pt. A degenerate natural size yields no
/// placement and the caller must skip drawing.
pub fn place_image(natural: (f32, f32), bbox: Rect, mode: FitMode, inner_pad: f32) -> Option<Rect> {
    let (img_w, img_h) = natural;
    if img_w <= 0.0 || img_h <= 0.0 {
        return None;
    }

    let x2 = bbox.x + inner_pad;
    let y2 = bbox.y + inner_pad;
    let w2 = (bbox.w - 2.0 * inner_pad).max(1.0);
    let h2 = (bbox.h - 2.0 * inner_pad).max(1.0);

    let img_aspect = img_w / img_h;
    let box_aspect = w2 / h2;

    let (draw_w, draw_h) = match mode {
        FitMode::Fit => {
            if img_aspect > box_aspect {
                (w2, w2 / img_aspect)
            } else {
                (h2 * img_aspect, h2)
            }
        }
        FitMode::Fill => {
            if img_aspect > box_aspect {
                (h2 * img_aspect, h2)
            } else {
                (w2, w2 / img_aspect)
            }
        }
    };

    Some(Rect {
        x: x2 + (w2 - draw_w) / 2.0,
        y: y2 + (h2 - draw_h) / 2.0,
        w: draw_w,
        h: draw_h,
    })
}
