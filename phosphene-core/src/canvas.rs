//! Canvas trait the render engine draws through
//!
//! Defines the seam between scene composition and the actual pixel store.
//! The firmware implements this on a 1-bpp framebuffer; tests implement it
//! on a call recorder.

/// How drawn pixels combine with what is already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaintMode {
    /// Drawn pixels are set
    #[default]
    Normal,
    /// Drawn pixels are cleared (occlusion effects)
    Erase,
    /// Drawn pixels toggle (XOR flash/flicker effects)
    Invert,
}

/// Which of the scene's type sizes to render text in.
///
/// Concrete font choices belong to the canvas implementation; the scene only
/// states the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontRole {
    /// Large hour/minute digits
    Digits,
    /// Seconds digits
    Seconds,
    /// Status caption
    Caption,
    /// Tiny decorative tokens
    Micro,
}

/// Monochrome drawing surface.
///
/// Coordinates are `i32` and may fall outside the surface; implementations
/// clip. Text positions are baseline coordinates, matching how the layout
/// constants in [`crate::render`] were tuned. No operation can fail: a
/// clock must never stop rendering, so the drawing path has no error
/// channel at all.
pub trait Canvas {
    /// Wipe the canvas to background (ignores paint mode)
    fn clear(&mut self);

    /// Select how subsequent draws combine with existing pixels
    fn set_paint_mode(&mut self, mode: PaintMode);

    /// Line segment between two points, inclusive
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Horizontal run of `len` pixels starting at (x, y)
    fn draw_hline(&mut self, x: i32, y: i32, len: i32);

    /// Vertical run of `len` pixels starting at (x, y), growing downward
    fn draw_vline(&mut self, x: i32, y: i32, len: i32);

    /// Rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32);

    /// Filled rectangle
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32);

    /// Filled triangle
    fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Text at a baseline position
    fn draw_text(&mut self, x: i32, y: i32, text: &str, font: FontRole);

    /// Hand the composed frame off for display
    fn present(&mut self);
}
