//! Helpers for drawing annotations on images.
//!
//! Every `*_mut` function returns the number of pixels it painted, so callers
//! can tell a stroke that landed on the page from one that missed it.

mod line;
pub use self::line::{draw_thick_line_segment, draw_thick_line_segment_mut};

mod rect;
pub use self::rect::{draw_hollow_rect, draw_hollow_rect_mut};

mod text;
pub use self::text::{draw_text, draw_text_mut, text_size};
