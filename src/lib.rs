//! # thermal-receipt
//!
//! Layout and rendering for restaurant bills and kitchen order tickets on
//! 58mm/80mm thermal paper.
//!
//! ## Scope
//!
//! This crate handles HOW a document gets onto paper:
//! - document model for bills and kitchen order tickets
//! - fixed-width layout with content-sized page height
//! - SVG/HTML preview artifacts and browser hand-off
//! - ESC/POS command building and rendering
//! - raw TCP 9100 dispatch
//!
//! Business logic (WHAT to print — pricing, totals arithmetic, order
//! assembly) stays in application code: documents arrive here with every
//! amount already computed, are rendered once, and are discarded.
//!
//! ## Example
//!
//! ```ignore
//! use thermal_receipt::{layout_bill, render_svg, BillDoc, PrinterProfile};
//!
//! let profile = PrinterProfile::mm80();
//! let page = layout_bill(&bill, &profile)?;
//! let svg = render_svg(&page);
//! let path = thermal_receipt::write_preview_file(&dir, "bill", &svg)?;
//! thermal_receipt::open_preview(&path)?;
//! ```

mod document;
mod error;
mod escpos;
mod layout;
mod page;
mod preview;
mod printer;
mod profile;
mod renderer;
mod svg;

pub use document::{BillDoc, KotDoc, KotLine, OrderLine, TotalsRow};
pub use error::{LayoutError, PreviewError, PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use layout::{estimate_bill_height, estimate_kot_height, layout_bill, layout_kot, wrap};
pub use page::{Align, Element, Page, TextElement};
pub use preview::{open_preview, write_preview_file};
pub use printer::{NetworkPrinter, Printer};
pub use profile::PrinterProfile;
pub use renderer::{render_bill, render_kot};
pub use svg::render_svg;
