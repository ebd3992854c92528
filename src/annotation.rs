//! Annotation tools and the edits they make to a page.
//!
//! Every tool produces an [`Annotation`], a self-contained description of one
//! edit. Applying it to a bitmap is a pure function of the annotation, the
//! bitmap and the current colour, which is what lets a session replay, undo
//! or roll back edits without knowing anything about the tools.

use crate::color::ColorPixel;
use crate::definitions::Image;
use crate::drawing::{draw_hollow_rect_mut, draw_text_mut, draw_thick_line_segment_mut};
use crate::error::{Error, Result};
use crate::fill::{edge_aware_fill_mut, FillOptions};
use crate::rect::Rect;
use ab_glyph::FontArc;
use image::Rgb;
use std::fmt;

/// Default brush and outline width in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Default brush opacity, out of 255.
pub const DEFAULT_BRUSH_OPACITY: u8 = 200;

/// Default text size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

/// The tools a user can pick from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Edge-aware region fill.
    #[default]
    Fill,
    /// Freehand brush, drawn as a chain of thick segments.
    Brush,
    /// Hollow rectangle dragged out between two corners.
    Rectangle,
    /// Text placed at a point.
    Text,
}

impl ToolKind {
    /// All tools, in the order they are offered to the user.
    pub fn all() -> [ToolKind; 4] {
        [
            ToolKind::Fill,
            ToolKind::Brush,
            ToolKind::Rectangle,
            ToolKind::Text,
        ]
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Fill => "Flood Fill (Smart)",
            ToolKind::Brush => "Brush Stroke",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Text => "Text",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Font and size used by a text annotation.
#[derive(Clone)]
pub struct TextStyle {
    /// Font to render with.
    pub font: FontArc,
    /// Font size in pixels.
    pub size: f32,
}

impl TextStyle {
    /// A style using `font` at [`DEFAULT_FONT_SIZE`].
    pub fn new(font: FontArc) -> TextStyle {
        TextStyle {
            font,
            size: DEFAULT_FONT_SIZE,
        }
    }

    /// Sets the font size in pixels.
    pub fn with_size(mut self, size: f32) -> TextStyle {
        self.size = size;
        self
    }
}

impl fmt::Debug for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStyle")
            .field("font", &"FontArc")
            .field("size", &self.size)
            .finish()
    }
}

/// One edit to a page.
#[derive(Debug, Clone)]
pub enum Annotation {
    /// An edge-aware fill seeded at `(x, y)`.
    Fill {
        /// Seed x-coordinate.
        x: u32,
        /// Seed y-coordinate.
        y: u32,
        /// Fill parameters.
        options: FillOptions,
    },
    /// A brush segment between two points.
    Stroke {
        /// Start of the segment.
        from: (i32, i32),
        /// End of the segment.
        to: (i32, i32),
        /// Stroke width in pixels.
        width: u32,
        /// Opacity out of 255.
        opacity: u8,
    },
    /// A hollow rectangle whose outline grows inward from `rect`.
    Rectangle {
        /// Outer bounds of the rectangle.
        rect: Rect,
        /// Outline width in pixels.
        width: u32,
    },
    /// Text with its top left corner at `(x, y)`.
    Text {
        /// Left edge of the text.
        x: i32,
        /// Top edge of the first line.
        y: i32,
        /// Text to draw. Each `\n` starts a new line.
        text: String,
        /// Font and size.
        style: TextStyle,
    },
}

/// Whether applying an annotation modified the bitmap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Applied {
    /// At least one pixel was written.
    Changed,
    /// Nothing was drawn: a rejected fill, or a shape entirely off the page.
    Unchanged,
}

impl Applied {
    fn from_painted(painted: usize) -> Applied {
        if painted > 0 {
            Applied::Changed
        } else {
            Applied::Unchanged
        }
    }
}

impl Annotation {
    /// A brush segment with the default opacity.
    pub fn stroke(from: (i32, i32), to: (i32, i32), width: u32) -> Annotation {
        Annotation::Stroke {
            from,
            to,
            width,
            opacity: DEFAULT_BRUSH_OPACITY,
        }
    }

    /// A rectangle dragged out between two corners, in either order.
    pub fn rectangle(a: (i32, i32), b: (i32, i32), width: u32) -> Annotation {
        Annotation::Rectangle {
            rect: Rect::from_corners(a, b),
            width,
        }
    }

    /// The tool that produces this kind of annotation.
    pub fn tool(&self) -> ToolKind {
        match self {
            Annotation::Fill { .. } => ToolKind::Fill,
            Annotation::Stroke { .. } => ToolKind::Brush,
            Annotation::Rectangle { .. } => ToolKind::Rectangle,
            Annotation::Text { .. } => ToolKind::Text,
        }
    }

    /// Draws this annotation onto `image` in `color`.
    ///
    /// Fills and rectangles are opaque. Strokes are blended at their opacity
    /// and text at its glyph coverage.
    ///
    /// # Errors
    ///
    /// Fill preconditions as in [`edge_aware_fill`](crate::fill::edge_aware_fill),
    /// and [`Error::EmptyText`] for text that is empty once trimmed.
    pub fn apply<P: ColorPixel>(&self, image: &mut Image<P>, color: Rgb<u8>) -> Result<Applied> {
        match self {
            Annotation::Fill { x, y, options } => {
                let outcome = edge_aware_fill_mut(image, *x, *y, color, options)?;
                Ok(Applied::from_painted(outcome.pixel_count()))
            }
            Annotation::Stroke {
                from,
                to,
                width,
                opacity,
            } => {
                let painted = draw_thick_line_segment_mut(
                    image,
                    (from.0 as f32, from.1 as f32),
                    (to.0 as f32, to.1 as f32),
                    *width as f32,
                    color,
                    *opacity as f32 / 255.0,
                );
                Ok(Applied::from_painted(painted))
            }
            Annotation::Rectangle { rect, width } => {
                let painted = draw_hollow_rect_mut(image, *rect, *width, color);
                Ok(Applied::from_painted(painted))
            }
            Annotation::Text { x, y, text, style } => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(Error::EmptyText);
                }
                let painted = draw_text_mut(image, color, *x, *y, style.size, &style.font, text);
                Ok(Applied::from_painted(painted))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage, RgbImage};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

    fn font() -> FontArc {
        FontArc::try_from_slice(include_bytes!("../tests/data/fonts/DejaVuSans.ttf")).unwrap()
    }

    #[test]
    fn test_tool_labels() {
        let labels: Vec<_> = ToolKind::all().iter().map(ToolKind::label).collect();
        assert_eq!(
            labels,
            vec!["Flood Fill (Smart)", "Brush Stroke", "Rectangle", "Text"]
        );
        assert_eq!(ToolKind::Brush.to_string(), "Brush Stroke");
        assert_eq!(ToolKind::default(), ToolKind::Fill);
    }

    #[test]
    fn test_annotation_tool() {
        assert_eq!(Annotation::stroke((0, 0), (1, 1), 3).tool(), ToolKind::Brush);
        assert_eq!(
            Annotation::rectangle((0, 0), (1, 1), 3).tool(),
            ToolKind::Rectangle
        );
    }

    #[test]
    fn test_fill_annotation() {
        let mut image = RgbImage::from_pixel(4, 4, WHITE);
        let fill = Annotation::Fill {
            x: 1,
            y: 1,
            options: FillOptions::default(),
        };
        assert_eq!(fill.apply(&mut image, BLUE).unwrap(), Applied::Changed);
        assert_pixels_eq!(image, RgbImage::from_pixel(4, 4, BLUE));
    }

    #[test]
    fn test_rejected_fill_is_unchanged() {
        let mut image = RgbImage::from_fn(6, 3, |x, _| if x < 3 { WHITE } else { Rgb([0, 0, 0]) });
        let before = image.clone();
        let fill = Annotation::Fill {
            x: 2,
            y: 1,
            options: FillOptions::default(),
        };
        assert_eq!(fill.apply(&mut image, BLUE).unwrap(), Applied::Unchanged);
        assert_pixels_eq!(image, before);
    }

    #[test]
    fn test_fill_errors_propagate() {
        let mut image = RgbImage::from_pixel(4, 4, WHITE);
        let fill = Annotation::Fill {
            x: 9,
            y: 1,
            options: FillOptions::default(),
        };
        assert!(matches!(
            fill.apply(&mut image, BLUE),
            Err(Error::SeedOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_stroke_uses_brush_opacity() {
        let mut image = RgbImage::from_pixel(5, 5, Rgb([0, 0, 0]));
        let stroke = Annotation::stroke((0, 2), (4, 2), 1);
        assert_eq!(stroke.apply(&mut image, WHITE).unwrap(), Applied::Changed);
        // 255 * 200 / 255 = 200
        assert_eq!(image.get_pixel(2, 2), &Rgb([200, 200, 200]));
        assert_eq!(image.get_pixel(2, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_stroke_off_page_is_unchanged() {
        let mut image = RgbImage::new(5, 5);
        let stroke = Annotation::stroke((50, 50), (60, 60), 5);
        assert_eq!(stroke.apply(&mut image, WHITE).unwrap(), Applied::Unchanged);
    }

    #[test]
    fn test_far_off_page_annotations() {
        let mut image = RgbImage::new(10, 10);
        let stroke = Annotation::stroke((-2_000_000_000, 5), (2_000_000_000, 5), 3);
        assert_eq!(stroke.apply(&mut image, WHITE).unwrap(), Applied::Changed);
        assert_eq!(image.get_pixel(0, 5), &Rgb([200, 200, 200]));
        assert_eq!(image.get_pixel(9, 5), &Rgb([200, 200, 200]));
        assert_eq!(image.get_pixel(9, 8), &Rgb([0, 0, 0]));

        let stroke = Annotation::stroke((i32::MIN, 5), (i32::MAX, 5), 3);
        assert_eq!(stroke.apply(&mut image, WHITE).unwrap(), Applied::Changed);

        // Every edge of this outline lies off the page.
        let mut image = RgbImage::new(10, 10);
        let rect = Annotation::rectangle((i32::MIN, i32::MIN), (i32::MAX, i32::MAX), 1);
        assert_eq!(rect.apply(&mut image, WHITE).unwrap(), Applied::Unchanged);

        let text = Annotation::Text {
            x: i32::MAX,
            y: i32::MAX,
            text: "Elm".to_string(),
            style: TextStyle::new(font()),
        };
        assert_eq!(text.apply(&mut image, WHITE).unwrap(), Applied::Unchanged);
        assert_pixels_eq!(image, RgbImage::new(10, 10));
    }

    #[test]
    fn test_rectangle_annotation() {
        let mut image = RgbaImage::from_pixel(6, 6, Rgba([0, 0, 0, 0]));
        let rect = Annotation::rectangle((4, 4), (1, 1), 1);
        assert_eq!(rect.apply(&mut image, BLUE).unwrap(), Applied::Changed);
        assert_eq!(image.get_pixel(1, 4), &Rgba([0, 0, 255, 255]));
        assert_eq!(image.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
        assert_eq!(image.get_pixel(5, 5), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_text_annotation() {
        let mut image = RgbImage::new(60, 30);
        let text = Annotation::Text {
            x: 2,
            y: 2,
            text: "  Elm  ".to_string(),
            style: TextStyle::new(font()),
        };
        assert_eq!(text.apply(&mut image, WHITE).unwrap(), Applied::Changed);
        assert!(image.pixels().any(|p| p[0] > 0));
    }

    #[test]
    fn test_blank_text_is_an_error() {
        let mut image = RgbImage::new(10, 10);
        let text = Annotation::Text {
            x: 0,
            y: 0,
            text: " \n\t".to_string(),
            style: TextStyle::new(font()).with_size(12.0),
        };
        assert!(matches!(text.apply(&mut image, WHITE), Err(Error::EmptyText)));
        assert_pixels_eq!(image, RgbImage::new(10, 10));
    }
}
