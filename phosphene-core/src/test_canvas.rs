//! Call-recording canvas used by unit tests

use heapless::{String, Vec};

use crate::canvas::{Canvas, FontRole, PaintMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    Mode(PaintMode),
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    HLine { x: i32, y: i32, len: i32 },
    VLine { x: i32, y: i32, len: i32 },
    Rect { x: i32, y: i32, w: i32, h: i32 },
    FillRect { x: i32, y: i32, w: i32, h: i32 },
    Triangle { x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32 },
    Text { x: i32, y: i32, text: String<16>, font: FontRole },
    Present,
}

/// Records every draw call in order; assertions dig through `ops`.
pub struct RecordingCanvas {
    pub ops: Vec<Op, 128>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    fn record(&mut self, op: Op) {
        self.ops.push(op).expect("test canvas op overflow");
    }

    /// All text draws, in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&Op, &str)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some((op, text.as_str())),
            _ => None,
        })
    }

    /// True if some text op matches content and exact position
    pub fn has_text_at(&self, x: i32, y: i32, wanted: &str) -> bool {
        self.ops.iter().any(|op| {
            matches!(op, Op::Text { x: tx, y: ty, text, .. }
                if *tx == x && *ty == y && text.as_str() == wanted)
        })
    }

    /// True if some text op matches content anywhere
    pub fn has_text(&self, wanted: &str) -> bool {
        self.texts().any(|(_, text)| text == wanted)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.record(Op::Clear);
    }

    fn set_paint_mode(&mut self, mode: PaintMode) {
        self.record(Op::Mode(mode));
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.record(Op::Line { x0, y0, x1, y1 });
    }

    fn draw_hline(&mut self, x: i32, y: i32, len: i32) {
        self.record(Op::HLine { x, y, len });
    }

    fn draw_vline(&mut self, x: i32, y: i32, len: i32) {
        self.record(Op::VLine { x, y, len });
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.record(Op::Rect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.record(Op::FillRect { x, y, w, h });
    }

    fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.record(Op::Triangle { x0, y0, x1, y1, x2, y2 });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, font: FontRole) {
        let mut copy = String::new();
        let _ = copy.push_str(text);
        self.record(Op::Text { x, y, text: copy, font });
    }

    fn present(&mut self) {
        self.record(Op::Present);
    }
}
