//! Serialize a laid-out page to a standalone SVG document.
//!
//! The SVG is sized in millimetres with a viewBox in page units, so a
//! browser shows it at physical scale and prints it onto the roll without
//! rescaling.

use std::fmt::Write;

use crate::page::{Align, Element, Page};

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn anchor(align: Align) -> &'static str {
    match align {
        Align::Left => "start",
        Align::Center => "middle",
        Align::Right => "end",
    }
}

/// Render a page as an SVG string.
pub fn render_svg(page: &Page) -> String {
    let mut svg = String::with_capacity(2048 + page.elements.len() * 96);

    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
        w = page.width,
        h = page.height
    )
    .unwrap();

    svg.push_str(
        r#"<style>
  text { font-family: ui-monospace, Menlo, monospace; fill: #111; }
  .bold { font-weight: bold; }
  .rule { stroke: #111; stroke-width: 0.2; stroke-dasharray: 0.8 0.6; }
</style>
"#,
    );

    writeln!(
        &mut svg,
        r##"<rect width="{}" height="{}" fill="#fff" />"##,
        page.width, page.height
    )
    .unwrap();

    for element in &page.elements {
        match element {
            Element::Text(t) => {
                let class = if t.bold { r#" class="bold""# } else { "" };
                writeln!(
                    &mut svg,
                    r#"<text x="{x}" y="{y}" font-size="{size}" text-anchor="{anchor}"{class}>{text}</text>"#,
                    x = t.x,
                    y = t.y,
                    size = t.size,
                    anchor = anchor(t.align),
                    class = class,
                    text = xml_escape(&t.text)
                )
                .unwrap();
            }
            Element::Rule { y } => {
                writeln!(
                    &mut svg,
                    r#"<line class="rule" x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" />"#,
                    x1 = page.margin,
                    y = y,
                    x2 = page.width - page.margin
                )
                .unwrap();
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}
