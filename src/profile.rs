//! Printer profiles: the fixed geometry of a thermal paper class.
//!
//! All lengths are millimetres. A profile is immutable; pick a preset per
//! printer and pass it to every layout call, so 58mm and 80mm printers can
//! coexist in one process.

use crate::error::LayoutError;

/// Character-grid width of the row-number column.
pub(crate) const NO_GRID_COLS: usize = 3;
/// Character-grid width of the quantity column.
pub(crate) const QTY_GRID_COLS: usize = 5;
/// Character-grid width of the amount column.
pub(crate) const AMT_GRID_COLS: usize = 9;

/// Layout geometry for one thermal paper class.
#[derive(Debug, Clone)]
pub struct PrinterProfile {
    /// Physical paper width.
    pub page_width: f32,
    /// Left and right print margin.
    pub margin: f32,
    /// Width of the row-number column.
    pub no_col_width: f32,
    /// Width of the quantity column.
    pub qty_col_width: f32,
    /// Width of the amount column.
    pub amt_col_width: f32,
    /// Vertical advance per text row.
    pub line_height: f32,
    /// Body text height.
    pub body_font: f32,
    /// Header title text height.
    pub title_font: f32,
    /// Mean horizontal advance of one display column at body size.
    pub char_width: f32,
    /// Fixed vertical allowance for the header block (name, location, date,
    /// rules, table header).
    pub header_allowance: f32,
    /// Fixed vertical allowance below the last totals row (footer and trailing
    /// margin).
    pub footer_allowance: f32,
    /// Character columns of the ESC/POS render target.
    pub columns: usize,
}

impl PrinterProfile {
    /// Standard 80mm receipt roll.
    pub fn mm80() -> Self {
        Self {
            page_width: 80.0,
            margin: 5.0,
            no_col_width: 8.0,
            qty_col_width: 10.0,
            amt_col_width: 14.0,
            line_height: 4.0,
            body_font: 2.8,
            title_font: 3.9,
            char_width: 1.7,
            header_allowance: 22.0,
            footer_allowance: 12.0,
            columns: 48,
        }
    }

    /// Compact 58mm receipt roll.
    pub fn mm58() -> Self {
        Self {
            page_width: 58.0,
            margin: 4.0,
            no_col_width: 6.0,
            qty_col_width: 8.0,
            amt_col_width: 12.0,
            line_height: 3.5,
            body_font: 2.5,
            title_font: 3.4,
            char_width: 1.5,
            header_allowance: 19.0,
            footer_allowance: 10.0,
            columns: 32,
        }
    }

    /// Whatever the fixed columns and margins leave for the item name.
    pub fn item_column_width(&self) -> f32 {
        self.page_width
            - 2.0 * self.margin
            - self.no_col_width
            - self.qty_col_width
            - self.amt_col_width
    }

    /// Wrap target for item names, in display columns.
    pub fn item_column_chars(&self) -> usize {
        (self.item_column_width() / self.char_width).floor().max(0.0) as usize
    }

    /// Full printable width in display columns.
    pub fn body_columns(&self) -> usize {
        ((self.page_width - 2.0 * self.margin) / self.char_width)
            .floor()
            .max(0.0) as usize
    }

    /// Wrap target for item names on the character grid.
    pub fn item_grid_chars(&self) -> usize {
        self.columns
            .saturating_sub(NO_GRID_COLS + QTY_GRID_COLS + AMT_GRID_COLS)
    }

    /// Left edge of the row-number column.
    pub fn no_x(&self) -> f32 {
        self.margin
    }

    /// Left edge of the item column.
    pub fn item_x(&self) -> f32 {
        self.margin + self.no_col_width
    }

    /// Right edge of the quantity column.
    pub fn qty_right_x(&self) -> f32 {
        self.page_width - self.margin - self.amt_col_width
    }

    /// Right edge of the amount column (the right margin).
    pub fn amt_right_x(&self) -> f32 {
        self.page_width - self.margin
    }

    /// Reject geometry that leaves the item column with no usable width.
    /// Derived widths are not otherwise guarded, so every layout entry point
    /// calls this first.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let width = self.item_column_width();
        if width <= 0.0 || self.item_column_chars() == 0 {
            return Err(LayoutError::ItemColumnTooNarrow { width });
        }
        if self.item_grid_chars() == 0 {
            return Err(LayoutError::GridTooNarrow {
                columns: self.columns,
            });
        }
        Ok(())
    }
}
