//! Document model for printable bills and kitchen order tickets.
//!
//! Values are built by the caller immediately before a print or preview
//! action, rendered once, and discarded. Monetary fields are caller-supplied
//! and trusted as-is: `amount` is never re-derived from `rate * quantity`,
//! and nothing here rounds or mutates the caller's numbers.

use serde::{Deserialize, Serialize};

/// One line of an order: a distinct menu item with its billed amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub rate: f64,
    pub amount: f64,
}

/// A customer-facing bill, ready for layout.
///
/// `date` is preformatted by the caller. Optional adjustments carry an
/// explicit amount or are absent; an amount of zero renders identically to
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BillDoc {
    pub restaurant_name: String,
    #[serde(default)]
    pub restaurant_location: Option<String>,
    pub date: String,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub service_charge: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub orders: Vec<OrderLine>,
}

/// One line of a kitchen order ticket. No money on a KOT.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KotLine {
    pub name: String,
    pub quantity: u32,
}

/// A kitchen order ticket, ready for layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KotDoc {
    pub restaurant_name: String,
    pub date: String,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub orders: Vec<KotLine>,
}

/// One row of the totals block. Computed from a [`BillDoc`] at render time,
/// never transported.
#[derive(Debug, Clone, Copy)]
pub struct TotalsRow {
    pub label: &'static str,
    pub amount: f64,
    pub emphasize: bool,
}

fn shown(amount: f64) -> bool {
    amount != 0.0
}

impl BillDoc {
    /// Rows of the totals block, in render order.
    ///
    /// SUB TOTAL, DISCOUNT, SERVICE and TAX each appear only when present
    /// and non-zero. TOTAL always closes the block, zero or not.
    pub fn totals_rows(&self) -> Vec<TotalsRow> {
        let mut rows = Vec::with_capacity(5);
        if shown(self.subtotal) {
            rows.push(TotalsRow {
                label: "SUB TOTAL",
                amount: self.subtotal,
                emphasize: false,
            });
        }
        for (label, value) in [
            ("DISCOUNT", self.discount),
            ("SERVICE", self.service_charge),
            ("TAX", self.tax),
        ] {
            if let Some(amount) = value.filter(|v| shown(*v)) {
                rows.push(TotalsRow {
                    label,
                    amount,
                    emphasize: false,
                });
            }
        }
        rows.push(TotalsRow {
            label: "TOTAL",
            amount: self.total,
            emphasize: true,
        });
        rows
    }

    /// The location header line, if it should render at all. Whitespace-only
    /// strings behave like an absent location.
    pub fn location_line(&self) -> Option<&str> {
        self.restaurant_location
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
