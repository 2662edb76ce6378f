//! Renders the tree shape of an `OrdTable` as an SVG image. Nodes are placed
//! in columns by their in-order position and in rows by their depth, so the
//! picture reads left to right in ascending key order.

use std::io;

mod layout;
mod render_node;
mod svg;
pub(crate) use layout::TreeLayout;
pub(crate) use render_node::RenderNode;
pub use svg::{render_to_svg, render_to_svg_file};

pub(crate) const PAD: i32 = 128;
pub(crate) const FONT_WX: i32 = 256;
pub(crate) const FONT_WY: i32 = 512;
// NOTE: do not change without checking that `|` and `_` fit perfectly
pub(crate) const FONT_FAMILY: &str = "monospace";
// the lowest hanging parts of characters should be above text starting point
pub(crate) const FONT_ADJUST_Y: i32 = -192;
pub(crate) const SMALL_FONT_WX: i32 = 128;
pub(crate) const SMALL_FONT_WY: i32 = 256;
pub(crate) const RELATION_WIDTH: i32 = 48;
pub(crate) const NODE_PAD: i32 = 1024;
// Quaternion VScode color theme
pub(crate) const COLORS: [&str; 6] = ["00b2ff", "00cb9d", "c49d00", "ff8080", "ff2adc", "a35bff"];
pub(crate) const NODE_FILL: &str = "171717";
pub(crate) const TEXT_COLOR: &str = "a0a0a0";

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Writing the output file failed
    #[error("could not write the rendered image: {0}")]
    IoError(#[from] io::Error),
}
