//! 128x64 monochrome framebuffer
//!
//! One bit per pixel, organized as 8 horizontal pages of 128 vertical
//! bytes - the native RAM layout of SSD13xx-family OLED controllers.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_4X6, FONT_5X8, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use phosphene_core::canvas::{Canvas, FontRole, PaintMode};

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel-tall pages
pub const PAGES: usize = HEIGHT / 8;

/// Page-packed 1-bpp pixel store with a current paint mode.
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
    mode: PaintMode,
    dirty: bool,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            mode: PaintMode::Normal,
            dirty: false,
        }
    }

    /// Apply the active paint mode to one pixel; out-of-bounds is clipped.
    fn plot(&mut self, x: i32, y: i32) {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return;
        }
        let byte = &mut self.pages[(y / 8) as usize][x as usize];
        let bit = 1 << (y % 8);
        match self.mode {
            PaintMode::Normal => *byte |= bit,
            PaintMode::Erase => *byte &= !bit,
            PaintMode::Invert => *byte ^= bit,
        }
    }

    /// Read one pixel; out-of-bounds reads as unlit.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return false;
        }
        self.pages[(y / 8) as usize][x as usize] & (1 << (y % 8)) != 0
    }

    /// Controller-ready page data
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// Consume the presented-since-last-flush flag
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    fn stroke(&self) -> PrimitiveStyle<BinaryColor> {
        PrimitiveStyle::with_stroke(BinaryColor::On, 1)
    }

    fn fill(&self) -> PrimitiveStyle<BinaryColor> {
        PrimitiveStyle::with_fill(BinaryColor::On)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

/// On pixels go through the paint mode; Off pixels are transparent. That
/// routing is the whole trick: styled primitives and font glyphs only emit
/// On pixels, so "draw this in erase mode" or "in invert mode" falls out
/// for free.
impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_on() {
                self.plot(point.x, point.y);
            }
        }
        Ok(())
    }
}

impl Canvas for FrameBuffer {
    fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    fn set_paint_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let style = self.stroke();
        let _ = Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(style)
            .draw(self);
    }

    fn draw_hline(&mut self, x: i32, y: i32, len: i32) {
        for i in 0..len {
            self.plot(x + i, y);
        }
    }

    fn draw_vline(&mut self, x: i32, y: i32, len: i32) {
        for i in 0..len {
            self.plot(x, y + i);
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let style = self.stroke();
        let _ = Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
            .into_styled(style)
            .draw(self);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let style = self.fill();
        let _ = Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
            .into_styled(style)
            .draw(self);
    }

    fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32) {
        let style = self.fill();
        let _ = Triangle::new(
            Point::new(x0, y0),
            Point::new(x1, y1),
            Point::new(x2, y2),
        )
        .into_styled(style)
        .draw(self);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, font: FontRole) {
        let style = MonoTextStyle::new(font_for(font), BinaryColor::On);
        let _ = Text::new(text, Point::new(x, y), style).draw(self);
    }

    fn present(&mut self) {
        self.dirty = true;
    }
}

/// Concrete font per scene role
fn font_for(role: FontRole) -> &'static MonoFont<'static> {
    match role {
        FontRole::Digits => &FONT_10X20,
        FontRole::Seconds => &FONT_9X18_BOLD,
        FontRole::Caption => &FONT_5X8,
        FontRole::Micro => &FONT_4X6,
    }
}
