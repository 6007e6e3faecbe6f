//! Character-grid rendering: the same bill and kitchen-ticket semantics as
//! the millimetre layout, expressed on an ESC/POS column grid.
//!
//! Suppression rules, sequential numbering and first-row-only quantity and
//! amount placement are identical between the two targets; only the
//! coordinate system differs.

use tracing::debug;

use crate::document::{BillDoc, KotDoc};
use crate::error::LayoutError;
use crate::escpos::EscPosBuilder;
use crate::layout::{whole_amount, wrap};
use crate::profile::{PrinterProfile, AMT_GRID_COLS, NO_GRID_COLS, QTY_GRID_COLS};

fn grid_row(no: &str, item: &str, qty: &str, amt: &str, item_w: usize) -> String {
    format!(
        "{no:<no_w$}{item:<item_w$}{qty:>qty_w$}{amt:>amt_w$}",
        no_w = NO_GRID_COLS,
        item_w = item_w,
        qty_w = QTY_GRID_COLS,
        amt_w = AMT_GRID_COLS,
    )
}

/// Render a bill to raw ESC/POS bytes.
pub fn render_bill(doc: &BillDoc, profile: &PrinterProfile) -> Result<Vec<u8>, LayoutError> {
    profile.validate()?;
    // 58mm paper has no headroom for double-height banners
    let large = profile.columns > 32;
    let item_w = profile.item_grid_chars();
    let mut b = EscPosBuilder::new(profile.columns);

    b.init().center().bold(true);
    if large {
        b.double_height();
    }
    b.text(&doc.restaurant_name).lf();
    if large {
        b.normal_size();
    }
    b.bold(false);
    if let Some(location) = doc.location_line() {
        b.text(location).lf();
    }
    b.text(&doc.date).lf();
    b.left().separator();

    b.bold(true)
        .text(&grid_row("No", "Item", "Qty", "Amt", item_w))
        .lf()
        .bold(false);
    b.separator();

    for (index, line) in doc.orders.iter().enumerate() {
        let wrapped = wrap(&line.name.to_uppercase(), item_w);
        for (row, fragment) in wrapped.iter().enumerate() {
            if row == 0 {
                b.text(&grid_row(
                    &(index + 1).to_string(),
                    fragment,
                    &line.quantity.to_string(),
                    &whole_amount(line.amount),
                    item_w,
                ))
                .lf();
            } else {
                b.text(&grid_row("", fragment, "", "", item_w)).lf();
            }
        }
    }
    b.separator();

    for row in doc.totals_rows() {
        if row.emphasize {
            b.bold(true);
            if large {
                b.double_height();
            }
        }
        b.line_pair(row.label, &format!("Rs {}", whole_amount(row.amount)));
        if row.emphasize {
            if large {
                b.normal_size();
            }
            b.bold(false);
        }
    }
    b.separator();

    b.center().text("THANK YOU!").lf().left();
    b.feed(4).cut();

    let bytes = b.build();
    debug!(len = bytes.len(), "bill rendered to escpos");
    Ok(bytes)
}

/// Render a kitchen order ticket to raw ESC/POS bytes.
pub fn render_kot(doc: &KotDoc, profile: &PrinterProfile) -> Result<Vec<u8>, LayoutError> {
    profile.validate()?;
    let large = profile.columns > 32;
    let mut b = EscPosBuilder::new(profile.columns);

    b.init().center().bold(true);
    if large {
        b.double_height();
    }
    b.text(&doc.restaurant_name).lf();
    if large {
        b.normal_size();
    }
    b.text("KITCHEN ORDER TICKET").lf().bold(false);
    if let Some(table) = doc.table.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        b.text(&format!("Table: {table}")).lf();
    }
    b.text(&doc.date).lf();
    b.left().separator();

    for line in &doc.orders {
        let wrapped = wrap(
            &format!("{}x {}", line.quantity, line.name),
            profile.columns,
        );
        b.bold(true);
        for fragment in wrapped {
            b.text(&fragment).lf();
        }
        b.bold(false);
    }
    b.separator();
    b.feed(4).cut();

    let bytes = b.build();
    debug!(len = bytes.len(), "kitchen ticket rendered to escpos");
    Ok(bytes)
}
