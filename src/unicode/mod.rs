//! Unicode utilities for cursor units and display width.

mod grapheme;
mod width;

pub use grapheme::{
    grapheme_byte_offset, grapheme_count, graphemes, is_line_break, is_whitespace,
};
pub use width::{WidthMethod, display_width, display_width_with_method};
