use crate::color::ColorPixel;
use crate::definitions::Image;
use ab_glyph::{point, Font, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont};
use image::Rgb;

// Lays out each line of `text` below the previous one and calls `f` with every
// glyph that has an outline, positioned relative to the top left of the text.
fn layout_glyphs(
    scale: impl Into<PxScale> + Copy,
    font: &impl Font,
    text: &str,
    mut f: impl FnMut(OutlinedGlyph, Rect),
) -> (u32, u32) {
    let font = font.as_scaled(scale);
    let line_advance = font.height() + font.line_gap();
    let (mut w, mut lines) = (0f32, 0u32);

    for (i, line) in text.lines().enumerate() {
        let baseline = font.ascent() + i as f32 * line_advance;
        let mut x = 0f32;
        let mut last: Option<GlyphId> = None;

        for c in line.chars() {
            let glyph_id = font.glyph_id(c);
            if let Some(last) = last {
                x += font.kern(last, glyph_id);
            }
            let glyph = glyph_id.with_scale_and_position(scale, point(x, baseline));
            x += font.h_advance(glyph_id);
            last = Some(glyph_id);
            if let Some(g) = font.outline_glyph(glyph) {
                let bb = g.px_bounds();
                f(g, bb);
            }
        }

        w = w.max(x);
        lines += 1;
    }

    let h = if lines == 0 {
        0.0
    } else {
        font.height() + (lines - 1) as f32 * line_advance
    };
    (w.ceil() as u32, h.ceil() as u32)
}

/// Get the width and height of the given text, rendered with the given font
/// and scale. Each `\n` starts a new line.
pub fn text_size(scale: impl Into<PxScale> + Copy, font: &impl Font, text: &str) -> (u32, u32) {
    layout_glyphs(scale, font, text, |_, _| {})
}

/// Draws colored text on an image in place, returning the number of pixels
/// touched by a glyph.
///
/// `(x, y)` is the top left of the first line and `scale` is the font size in
/// pixels. Each `\n` starts a new line. Glyph coverage is blended onto the
/// image, so edges are antialiased.
pub fn draw_text_mut<P: ColorPixel>(
    image: &mut Image<P>,
    color: Rgb<u8>,
    x: i32,
    y: i32,
    scale: impl Into<PxScale> + Copy,
    font: &impl Font,
    text: &str,
) -> usize {
    let image_width = image.width() as i64;
    let image_height = image.height() as i64;
    let mut painted = 0;

    layout_glyphs(scale, font, text, |g, bb| {
        g.draw(|gx, gy, gv| {
            let image_x = x as i64 + gx as i64 + bb.min.x.round() as i64;
            let image_y = y as i64 + gy as i64 + bb.min.y.round() as i64;
            let gv = gv.clamp(0.0, 1.0);

            if gv > 0.0
                && (0..image_width).contains(&image_x)
                && (0..image_height).contains(&image_y)
            {
                image
                    .get_pixel_mut(image_x as u32, image_y as u32)
                    .blend_rgb(color, gv);
                painted += 1;
            }
        })
    });

    painted
}

/// Draws colored text on a new copy of an image.
///
/// See [`draw_text_mut`].
#[must_use = "the function does not modify the original image"]
pub fn draw_text<P: ColorPixel>(
    image: &Image<P>,
    color: Rgb<u8>,
    x: i32,
    y: i32,
    scale: impl Into<PxScale> + Copy,
    font: &impl Font,
    text: &str,
) -> Image<P> {
    let mut out = image.clone();
    draw_text_mut(&mut out, color, x, y, scale, font, text);
    out
}
