//! Paint chart primitives onto an SVG document

use crate::core::chart::{Baseline, TextAlign};
use crate::core::{CanvasSize, DrawPrimitive, ThemeTokens};
use std::f64::consts::TAU;
use svg::node::element::{Circle, Path, Rectangle, Text};
use svg::Document;

const FONT_FAMILY: &str = "system-ui, sans-serif";

/// Build an SVG document. The viewBox is in logical units; the physical size
/// is scaled by the device pixel ratio.
pub fn to_svg(primitives: &[DrawPrimitive], canvas: CanvasSize, tokens: &ThemeTokens) -> Document {
    let background = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("fill", tokens.background);

    primitives
        .iter()
        .fold(Document::new().add(background), |doc, primitive| {
            paint(doc, primitive)
        })
        .set("viewBox", (0.0, 0.0, canvas.width, canvas.height))
        .set("width", canvas.width * canvas.device_pixel_ratio)
        .set("height", canvas.height * canvas.device_pixel_ratio)
}

fn paint(doc: Document, primitive: &DrawPrimitive) -> Document {
    match primitive {
        DrawPrimitive::Rect {
            x,
            y,
            width,
            height,
            color,
        } => doc.add(
            Rectangle::new()
                .set("x", *x)
                .set("y", *y)
                .set("width", *width)
                .set("height", *height)
                .set("fill", *color),
        ),
        DrawPrimitive::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
            color,
        } => {
            let span = end_angle - start_angle;
            if span >= TAU - 1e-9 {
                doc.add(
                    Circle::new()
                        .set("cx", *cx)
                        .set("cy", *cy)
                        .set("r", *radius)
                        .set("fill", *color),
                )
            } else {
                doc.add(
                    Path::new()
                        .set("d", wedge(*cx, *cy, *radius, *start_angle, *end_angle))
                        .set("fill", *color),
                )
            }
        }
        DrawPrimitive::Text {
            x,
            y,
            text,
            font,
            align,
            baseline,
            color,
        } => doc.add(
            Text::new()
                .set("x", *x)
                .set("y", *y)
                .set("fill", *color)
                .set("font-family", FONT_FAMILY)
                .set("font-size", font.size)
                .set("font-weight", f64::from(font.weight))
                .set("text-anchor", anchor(*align))
                .set("dominant-baseline", dominant_baseline(*baseline))
                .add(svg::node::Text::new(text.as_str())),
        ),
    }
}

/// Pie wedge path; angles grow clockwise in the y-down coordinate system
fn wedge(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let (x1, y1) = (cx + radius * start.cos(), cy + radius * start.sin());
    let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());
    let large_arc = u8::from(end - start > TAU / 2.0);
    format!("M {cx} {cy} L {x1} {y1} A {radius} {radius} 0 {large_arc} 1 {x2} {y2} Z")
}

fn anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
    }
}

fn dominant_baseline(baseline: Baseline) -> &'static str {
    match baseline {
        Baseline::Top => "hanging",
        Baseline::Middle => "middle",
        Baseline::Bottom => "text-after-edge",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{render_chart, Category, CategoryTotals, ChartType, Theme};
    use rust_decimal_macros::dec;

    #[test]
    fn scales_physical_size_by_pixel_ratio() {
        let canvas = CanvasSize {
            width: 400.0,
            height: 300.0,
            device_pixel_ratio: 2.0,
        };
        let svg = to_svg(&[], canvas, &Theme::Dark.tokens()).to_string();
        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("viewBox=\"0 0 400 300\""));
        assert!(svg.contains("#0f172a"));
    }

    #[test]
    fn paints_bars_and_labels() {
        let mut totals = CategoryTotals::new();
        totals.add(Category::Food, dec!(100));
        totals.add(Category::Transport, dec!(50));
        let canvas = CanvasSize::new(400.0, 300.0);
        let tokens = Theme::Light.tokens();
        let primitives = render_chart(&totals, ChartType::Bar, canvas, &tokens);
        let svg = to_svg(&primitives, canvas, &tokens).to_string();
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("Transport"));
        assert!(svg.contains("Expenses by Category"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn single_slice_pie_is_a_circle() {
        let mut totals = CategoryTotals::new();
        totals.add(Category::Bills, dec!(900));
        let canvas = CanvasSize::new(400.0, 300.0);
        let tokens = Theme::Light.tokens();
        let primitives = render_chart(&totals, ChartType::Pie, canvas, &tokens);
        let svg = to_svg(&primitives, canvas, &tokens).to_string();
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn wedge_flags_large_arcs() {
        assert!(wedge(0.0, 0.0, 10.0, 0.0, 4.0).contains(" 0 1 1 "));
        assert!(wedge(0.0, 0.0, 10.0, 0.0, 1.0).contains(" 0 0 1 "));
    }
}
