//! Minimal ESC/POS binary command builder for thermal receipt printers.
//!
//! Generates raw byte sequences that can be written straight to a printer
//! socket or spooler. Covers the formatting this crate's render targets
//! need: alignment, bold, text sizing, separators, label/value pairs, feed
//! and cut.

use unicode_width::UnicodeWidthStr;

// ESC/POS command bytes
const ESC: u8 = 0x1B;
const GS: u8 = 0x1D;
const LF: u8 = 0x0A;

/// Builder for generating ESC/POS binary command buffers.
///
/// ```rust,ignore
/// let mut b = EscPosBuilder::new(48);
/// b.init()
///     .center()
///     .bold(true)
///     .text("NEPDINE CAFE")
///     .lf()
///     .bold(false)
///     .left()
///     .separator()
///     .line_pair("TOTAL", "Rs 550")
///     .feed(4)
///     .cut();
/// let data = b.build();
/// ```
pub struct EscPosBuilder {
    buffer: Vec<u8>,
    columns: usize,
}

impl EscPosBuilder {
    /// `columns` is the paper width in characters (48 for 80mm, 32 for 58mm).
    pub fn new(columns: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(512),
            columns,
        }
    }

    /// ESC @ — Initialize printer, reset to defaults.
    pub fn init(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x40]);
        self
    }

    // -----------------------------------------------------------------------
    // Text formatting
    // -----------------------------------------------------------------------

    /// ESC E n — Bold on/off.
    pub fn bold(&mut self, on: bool) -> &mut Self {
        self.buffer
            .extend_from_slice(&[ESC, 0x45, if on { 1 } else { 0 }]);
        self
    }

    /// GS ! n — Set text size (width × height multiplier, 1–8 each).
    pub fn text_size(&mut self, width: u8, height: u8) -> &mut Self {
        let w = width.clamp(1, 8) - 1;
        let h = height.clamp(1, 8) - 1;
        self.buffer.extend_from_slice(&[GS, 0x21, (w << 4) | h]);
        self
    }

    /// Reset text size to 1×1.
    pub fn normal_size(&mut self) -> &mut Self {
        self.text_size(1, 1)
    }

    /// Double-height text (1×2).
    pub fn double_height(&mut self) -> &mut Self {
        self.text_size(1, 2)
    }

    // -----------------------------------------------------------------------
    // Alignment
    // -----------------------------------------------------------------------

    /// ESC a 0 — Left-align.
    pub fn left(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x61, 0]);
        self
    }

    /// ESC a 1 — Centre-align.
    pub fn center(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x61, 1]);
        self
    }

    /// ESC a 2 — Right-align.
    pub fn right(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x61, 2]);
        self
    }

    // -----------------------------------------------------------------------
    // Text output
    // -----------------------------------------------------------------------

    /// Append text. ASCII passes through; everything else becomes `?`.
    pub fn text(&mut self, s: &str) -> &mut Self {
        for ch in s.chars() {
            let code = ch as u32;
            if code < 0x80 {
                self.buffer.push(code as u8);
            } else {
                self.buffer.push(b'?');
            }
        }
        self
    }

    /// Append a line-feed.
    pub fn lf(&mut self) -> &mut Self {
        self.buffer.push(LF);
        self
    }

    /// Print a horizontal separator using dashes, matching paper width.
    pub fn separator(&mut self) -> &mut Self {
        for _ in 0..self.columns {
            self.buffer.push(b'-');
        }
        self.buffer.push(LF);
        self
    }

    /// Print a line with left-aligned label and right-aligned value.
    pub fn line_pair(&mut self, label: &str, value: &str) -> &mut Self {
        let gap = self.columns.saturating_sub(label.width() + value.width());
        self.text(label);
        for _ in 0..gap {
            self.buffer.push(b' ');
        }
        self.text(value);
        self.lf()
    }

    // -----------------------------------------------------------------------
    // Feed / cut
    // -----------------------------------------------------------------------

    /// ESC d n — Feed n lines.
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x64, lines]);
        self
    }

    /// GS V A 16 — Partial cut with 16-dot feed.
    pub fn cut(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[GS, 0x56, 0x41, 0x10]);
        self
    }

    /// Consume the builder and return the binary ESC/POS payload.
    pub fn build(self) -> Vec<u8> {
        self.buffer
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
