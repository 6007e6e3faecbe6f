//! Fixed-width layout passes: documents in, positioned pages out.
//!
//! Both passes are pure, synchronous computations. Page height is estimated
//! from the wrapped content before anything is placed, so the output is
//! exactly as tall as it needs to be — long receipts never truncate and
//! short ones carry no trailing blank paper.

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::document::{BillDoc, KotDoc};
use crate::error::LayoutError;
use crate::page::{Align, Page};
use crate::profile::PrinterProfile;

/// Section rules sit this fraction of a line height above the next baseline.
const RULE_LIFT: f32 = 0.5;

/// Word-wrap `text` to at most `columns` display columns per line.
///
/// Splits on whitespace only; a single token wider than the target keeps its
/// own overflowing line rather than being broken mid-word. Empty input still
/// yields one (empty) line so every item occupies at least one row.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for token in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(token);
            continue;
        }
        let next = line.width() + 1 + token.width();
        if next > columns {
            out.push(std::mem::take(&mut line));
            line.push_str(token);
        } else {
            line.push(' ');
            line.push_str(token);
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Display-only rounding to whole currency units. Never fed back into any
/// arithmetic; the caller's values stay untouched.
pub(crate) fn whole_amount(value: f64) -> String {
    format!("{}", value.round() as i64)
}

fn wrapped_item_lines(doc: &BillDoc, columns: usize) -> usize {
    doc.orders
        .iter()
        .map(|line| wrap(&line.name.to_uppercase(), columns).len())
        .sum()
}

/// Pre-render height pass for a bill.
///
/// Fixed header and footer allowances plus one line height per wrapped item
/// row and per included totals row (TOTAL always counts).
pub fn estimate_bill_height(doc: &BillDoc, profile: &PrinterProfile) -> f32 {
    let item_lines = wrapped_item_lines(doc, profile.item_column_chars());
    let totals_rows = doc.totals_rows().len();
    profile.header_allowance
        + item_lines as f32 * profile.line_height
        + totals_rows as f32 * profile.line_height
        + profile.footer_allowance
}

/// Lay out a bill onto a page sized to its content.
pub fn layout_bill(doc: &BillDoc, profile: &PrinterProfile) -> Result<Page, LayoutError> {
    profile.validate()?;
    let lh = profile.line_height;
    let height = estimate_bill_height(doc, profile);
    let mut page = Page::new(profile.page_width, height, profile.margin);
    let center = profile.page_width / 2.0;

    // Header: name, optional location, date. A blank location renders
    // nothing at all, not an empty line.
    let mut y = profile.margin + lh;
    page.text(
        doc.restaurant_name.clone(),
        center,
        y,
        Align::Center,
        profile.title_font,
        true,
    );
    y += lh;
    if let Some(location) = doc.location_line() {
        page.text(location, center, y, Align::Center, profile.body_font, false);
        y += lh;
    }
    page.text(
        doc.date.clone(),
        center,
        y,
        Align::Center,
        profile.body_font,
        false,
    );
    y += lh;
    page.rule(y - lh * RULE_LIFT);

    page.text("No", profile.no_x(), y, Align::Left, profile.body_font, true);
    page.text(
        "Item",
        profile.item_x(),
        y,
        Align::Left,
        profile.body_font,
        true,
    );
    page.text(
        "Qty",
        profile.qty_right_x(),
        y,
        Align::Right,
        profile.body_font,
        true,
    );
    page.text(
        "Amt",
        profile.amt_right_x(),
        y,
        Align::Right,
        profile.body_font,
        true,
    );
    y += lh;
    page.rule(y - lh * RULE_LIFT);

    // Item rows in input order, numbered 1-based. Quantity and amount sit
    // beside the first wrapped row only; continuation rows carry just the
    // remaining name text.
    let item_chars = profile.item_column_chars();
    for (index, line) in doc.orders.iter().enumerate() {
        let wrapped = wrap(&line.name.to_uppercase(), item_chars);
        for (row, fragment) in wrapped.iter().enumerate() {
            if row == 0 {
                page.text(
                    (index + 1).to_string(),
                    profile.no_x(),
                    y,
                    Align::Left,
                    profile.body_font,
                    false,
                );
                page.text(
                    line.quantity.to_string(),
                    profile.qty_right_x(),
                    y,
                    Align::Right,
                    profile.body_font,
                    false,
                );
                page.text(
                    whole_amount(line.amount),
                    profile.amt_right_x(),
                    y,
                    Align::Right,
                    profile.body_font,
                    false,
                );
            }
            page.text(
                fragment.clone(),
                profile.item_x(),
                y,
                Align::Left,
                profile.body_font,
                false,
            );
            y += lh;
        }
    }
    page.rule(y - lh * RULE_LIFT);

    for row in doc.totals_rows() {
        page.text(
            row.label,
            profile.item_x(),
            y,
            Align::Left,
            profile.body_font,
            row.emphasize,
        );
        page.text(
            format!("Rs {}", whole_amount(row.amount)),
            profile.amt_right_x(),
            y,
            Align::Right,
            profile.body_font,
            row.emphasize,
        );
        y += lh;
    }

    page.text(
        "THANK YOU!",
        center,
        y + lh * RULE_LIFT,
        Align::Center,
        profile.body_font,
        false,
    );

    debug!(
        height,
        elements = page.elements.len(),
        "bill page laid out"
    );
    Ok(page)
}

/// Pre-render height pass for a kitchen order ticket.
pub fn estimate_kot_height(doc: &KotDoc, profile: &PrinterProfile) -> f32 {
    let lines: usize = doc
        .orders
        .iter()
        .map(|line| {
            wrap(
                &format!("{}x {}", line.quantity, line.name),
                profile.body_columns(),
            )
            .len()
        })
        .sum();
    profile.header_allowance
        + lines as f32 * profile.line_height
        + profile.footer_allowance
}

/// Lay out a kitchen order ticket. Same header discipline as the bill but no
/// monetary columns and no totals block.
pub fn layout_kot(doc: &KotDoc, profile: &PrinterProfile) -> Result<Page, LayoutError> {
    profile.validate()?;
    let lh = profile.line_height;
    let height = estimate_kot_height(doc, profile);
    let mut page = Page::new(profile.page_width, height, profile.margin);
    let center = profile.page_width / 2.0;

    let mut y = profile.margin + lh;
    page.text(
        doc.restaurant_name.clone(),
        center,
        y,
        Align::Center,
        profile.title_font,
        true,
    );
    y += lh;
    page.text(
        "KITCHEN ORDER TICKET",
        center,
        y,
        Align::Center,
        profile.body_font,
        true,
    );
    y += lh;
    if let Some(table) = doc.table.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        page.text(
            format!("Table: {table}"),
            center,
            y,
            Align::Center,
            profile.body_font,
            false,
        );
        y += lh;
    }
    page.text(
        doc.date.clone(),
        center,
        y,
        Align::Center,
        profile.body_font,
        false,
    );
    y += lh;
    page.rule(y - lh * RULE_LIFT);

    let columns = profile.body_columns();
    for line in &doc.orders {
        let wrapped = wrap(&format!("{}x {}", line.quantity, line.name), columns);
        for fragment in wrapped {
            page.text(fragment, profile.margin, y, Align::Left, profile.body_font, true);
            y += lh;
        }
    }
    page.rule(y - lh * RULE_LIFT);

    debug!(
        height,
        elements = page.elements.len(),
        "kitchen ticket page laid out"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{KotLine, OrderLine};

    fn order(name: &str, quantity: u32, rate: f64, amount: f64) -> OrderLine {
        OrderLine {
            name: name.to_string(),
            quantity,
            rate,
            amount,
        }
    }

    fn nepdine_bill() -> BillDoc {
        BillDoc {
            restaurant_name: "NEPDINE CAFE".to_string(),
            restaurant_location: Some("Bhaktapur".to_string()),
            date: "01/01/2024 12:00".to_string(),
            subtotal: 500.0,
            discount: Some(0.0),
            service_charge: Some(50.0),
            tax: Some(0.0),
            total: 550.0,
            orders: vec![
                order("chicken momo", 2, 150.0, 300.0),
                order("coke", 1, 200.0, 200.0),
            ],
        }
    }

    #[test]
    fn wrap_splits_on_word_boundaries() {
        assert_eq!(
            wrap("chicken momo steamed", 13),
            vec!["chicken momo".to_string(), "steamed".to_string()]
        );
    }

    #[test]
    fn wrap_keeps_oversized_token_on_its_own_line() {
        assert_eq!(
            wrap("a extraordinarily b", 6),
            vec!["a".to_string(), "extraordinarily".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn wrap_of_empty_input_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn zero_adjustments_render_no_rows_but_total_always_renders() {
        let doc = BillDoc {
            discount: Some(0.0),
            service_charge: Some(0.0),
            tax: Some(0.0),
            subtotal: 0.0,
            total: 0.0,
            ..nepdine_bill()
        };
        let page = layout_bill(&doc, &PrinterProfile::mm80()).expect("layout");
        assert!(page.find_text("DISCOUNT").is_none());
        assert!(page.find_text("SERVICE").is_none());
        assert!(page.find_text("TAX").is_none());
        assert!(page.find_text("SUB TOTAL").is_none());
        assert!(page.find_text("TOTAL").is_some());
        assert!(page.find_text("Rs 0").is_some());
    }

    #[test]
    fn header_omits_blank_location_entirely() {
        let profile = PrinterProfile::mm80();
        let with_location = layout_bill(&nepdine_bill(), &profile).expect("layout");
        let without_location = layout_bill(
            &BillDoc {
                restaurant_location: Some(String::new()),
                ..nepdine_bill()
            },
            &profile,
        )
        .expect("layout");

        let header_lines = |page: &Page| {
            let first_rule = page
                .rules()
                .fold(f32::MAX, f32::min);
            page.texts().filter(|t| t.y < first_rule).count()
        };
        assert_eq!(header_lines(&with_location), 3);
        assert_eq!(header_lines(&without_location), 2);
    }

    #[test]
    fn amounts_display_rounded_to_whole_rupees() {
        let doc = BillDoc {
            orders: vec![order("tea", 1, 12.6, 12.6)],
            subtotal: 12.6,
            discount: None,
            service_charge: None,
            tax: None,
            total: 12.6,
            ..nepdine_bill()
        };
        let page = layout_bill(&doc, &PrinterProfile::mm80()).expect("layout");
        assert!(page.find_text("13").is_some());
        assert!(page.find_text("Rs 13").is_some());
        // the document itself is never rounded
        assert_eq!(doc.orders[0].amount, 12.6);
    }

    #[test]
    fn item_rows_number_sequentially_in_input_order() {
        let doc = BillDoc {
            orders: vec![
                order("zucchini fries with a very long descriptive name", 1, 90.0, 90.0),
                order("aloo chop", 3, 40.0, 120.0),
                order("milk tea", 2, 30.0, 60.0),
            ],
            ..nepdine_bill()
        };
        let profile = PrinterProfile::mm80();
        let page = layout_bill(&doc, &profile).expect("layout");
        let mut numbers: Vec<(f32, String)> = page
            .texts()
            .filter(|t| (t.x - profile.no_x()).abs() < 1e-4 && t.text != "No")
            .map(|t| (t.y, t.text.clone()))
            .collect();
        numbers.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("finite y"));
        let order_of_numbers: Vec<&str> = numbers.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(order_of_numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn wrapped_item_keeps_qty_and_amount_on_first_visual_row_only() {
        let profile = PrinterProfile::mm80();
        let name = "chicken sizzler with extra cheese and peri peri sauce";
        let wrapped = wrap(&name.to_uppercase(), profile.item_column_chars());
        assert!(wrapped.len() >= 3, "test name must wrap to 3+ rows");

        let doc = BillDoc {
            orders: vec![order(name, 2, 493.5, 987.0)],
            ..nepdine_bill()
        };
        let page = layout_bill(&doc, &profile).expect("layout");

        let first_row_y = page.find_text("1").expect("row number").y;
        let amounts: Vec<&crate::page::TextElement> =
            page.texts().filter(|t| t.text == "987").collect();
        assert_eq!(amounts.len(), 1);
        assert!((amounts[0].y - first_row_y).abs() < 1e-3);

        // continuation rows hold nothing but item-column text
        for extra in 1..wrapped.len() {
            let row_y = first_row_y + extra as f32 * profile.line_height;
            let at_row: Vec<&crate::page::TextElement> = page
                .texts()
                .filter(|t| (t.y - row_y).abs() < 1e-3)
                .collect();
            assert_eq!(at_row.len(), 1);
            assert!((at_row[0].x - profile.item_x()).abs() < 1e-4);
            assert_eq!(at_row[0].text, wrapped[extra]);
        }
    }

    #[test]
    fn page_height_grows_linearly_with_item_lines() {
        let profile = PrinterProfile::mm80();
        let one = BillDoc {
            orders: vec![order("coke", 1, 200.0, 200.0)],
            ..nepdine_bill()
        };
        let twenty = BillDoc {
            orders: (0..20).map(|_| order("coke", 1, 200.0, 200.0)).collect(),
            ..nepdine_bill()
        };
        let short = estimate_bill_height(&one, &profile);
        let tall = estimate_bill_height(&twenty, &profile);
        assert!(tall > short);
        assert!((tall - short - 19.0 * profile.line_height).abs() < 1e-3);

        let page = layout_bill(&twenty, &profile).expect("layout");
        assert!((page.height - tall).abs() < 1e-3);
    }

    #[test]
    fn empty_order_list_still_renders_header_totals_and_footer() {
        let doc = BillDoc {
            orders: Vec::new(),
            ..nepdine_bill()
        };
        let page = layout_bill(&doc, &PrinterProfile::mm80()).expect("layout");
        assert!(page.find_text("NEPDINE CAFE").is_some());
        assert!(page.find_text("TOTAL").is_some());
        assert!(page.find_text("THANK YOU!").is_some());
    }

    #[test]
    fn nepdine_totals_block_matches_expected_rows() {
        let profile = PrinterProfile::mm80();
        let page = layout_bill(&nepdine_bill(), &profile).expect("layout");

        let labels = ["SUB TOTAL", "DISCOUNT", "SERVICE", "TAX", "TOTAL"];
        let mut present: Vec<(f32, &str)> = page
            .texts()
            .filter(|t| labels.contains(&t.text.as_str()))
            .map(|t| (t.y, t.text.as_str()))
            .collect();
        present.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("finite y"));
        let order_of_labels: Vec<&str> = present.iter().map(|(_, l)| *l).collect();
        assert_eq!(order_of_labels, vec!["SUB TOTAL", "SERVICE", "TOTAL"]);

        assert!(page.find_text("Rs 500").is_some());
        assert!(page.find_text("Rs 50").is_some());
        assert!(page.find_text("Rs 550").is_some());
        let total = page.find_text("Rs 550").expect("total value");
        assert!(total.bold);
    }

    #[test]
    fn narrow_profile_is_rejected_before_layout() {
        let profile = PrinterProfile {
            no_col_width: 60.0,
            ..PrinterProfile::mm80()
        };
        assert!(matches!(
            layout_bill(&nepdine_bill(), &profile),
            Err(LayoutError::ItemColumnTooNarrow { .. })
        ));
    }

    #[test]
    fn kot_lays_out_banner_table_and_items() {
        let doc = KotDoc {
            restaurant_name: "NEPDINE CAFE".to_string(),
            date: "01/01/2024 12:05".to_string(),
            table: Some("G-4".to_string()),
            orders: vec![
                KotLine {
                    name: "chicken momo".to_string(),
                    quantity: 2,
                },
                KotLine {
                    name: "coke".to_string(),
                    quantity: 1,
                },
            ],
        };
        let profile = PrinterProfile::mm80();
        let page = layout_kot(&doc, &profile).expect("layout");
        assert!(page.find_text("KITCHEN ORDER TICKET").is_some());
        assert!(page.find_text("Table: G-4").is_some());
        assert!(page.find_text("2x chicken momo").is_some());
        assert!((page.height - estimate_kot_height(&doc, &profile)).abs() < 1e-3);
        // a KOT never shows money
        assert!(page.texts().all(|t| !t.text.starts_with("Rs ")));
    }
}
