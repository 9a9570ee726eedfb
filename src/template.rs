//! Sheet templates: paper sizes for drawing sheets
//!
//! All units are points (1/72 inch).

use crate::constants::{A3_HEIGHT, A3_WIDTH, A4_HEIGHT, A4_WIDTH};

/// A named page format a sheet is laid out on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetTemplate {
    pub name: &'static str,
    pub page_width: f32,
    pub page_height: f32,
}

/// The fixed template registry
pub const TEMPLATES: [SheetTemplate; 4] = [
    SheetTemplate {
        name: "A4_Landscape",
        page_width: A4_HEIGHT,
        page_height: A4_WIDTH,
    },
    SheetTemplate {
        name: "A4_Portrait",
        page_width: A4_WIDTH,
        page_height: A4_HEIGHT,
    },
    SheetTemplate {
        name: "A3_Landscape",
        page_width: A3_HEIGHT,
        page_height: A3_WIDTH,
    },
    SheetTemplate {
        name: "A3_Portrait",
        page_width: A3_WIDTH,
        page_height: A3_HEIGHT,
    },
];

/// Name of the template unknown names resolve to
pub const DEFAULT_TEMPLATE: &str = "A3_Landscape";

/// Look up a template by name; unknown names resolve to `A3_Landscape`
pub fn get_template(name: &str) -> SheetTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .copied()
        .unwrap_or_else(|| get_template(DEFAULT_TEMPLATE))
}

/// All registered template names, in registry order
pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}
