//! Spend-by-category chart layout.
//!
//! Rendering produces a list of [`DrawPrimitive`]s in logical canvas units.
//! The output is a pure function of the totals, chart type, canvas size and
//! theme tokens, so redrawing after any change is just calling
//! [`render_chart`] again.

use super::aggregate::CategoryTotals;
use super::money::display_amount;
use super::theme::ThemeTokens;
use rust_decimal::prelude::ToPrimitive;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

pub const TITLE: &str = "Expenses by Category";
pub const NO_DATA: &str = "No expense data to display";

pub const PALETTE: [&str; 8] = [
    "#6366f1", "#22c55e", "#f59e0b", "#ef4444", "#06b6d4", "#a855f7", "#10b981", "#ec4899",
];

const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 14.0;
const PAD_TOP: f64 = 30.0;
const PAD_BOTTOM: f64 = 36.0;
const BAR_GAP: f64 = 12.0;

const PIE_RADIUS_SHARE: f64 = 0.7;
const PIE_LABEL_SHARE: f64 = 0.7;
/// Slices narrower than this (radians) get no percentage label
const PIE_LABEL_MIN_SPAN: f64 = 0.3;
const PIE_LABEL_COLOR: &str = "#ffffff";

const LEGEND_X: f64 = 12.0;
const LEGEND_TOP: f64 = 40.0;
const LEGEND_ROW: f64 = 35.0;
const LEGEND_SWATCH: f64 = 14.0;
const LEGEND_TEXT_GAP: f64 = 8.0;

const LABEL_FONT: Font = Font::new(12.0, 400);
const TITLE_FONT: Font = Font::new(16.0, 600);
const MESSAGE_FONT: Font = Font::new(14.0, 400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Pie,
}

impl ChartType {
    pub fn toggle(self) -> ChartType {
        match self {
            ChartType::Bar => ChartType::Pie,
            ChartType::Pie => ChartType::Bar,
        }
    }
}

/// Canvas dimensions in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    /// Physical pixels per logical unit. Layout ignores it; painters scale by it.
    pub device_pixel_ratio: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        CanvasSize {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: f64,
    pub weight: u16,
}

impl Font {
    pub const fn new(size: f64, weight: u16) -> Self {
        Font { size, weight }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

/// Abstract drawing instruction, independent of any graphics API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawPrimitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    /// Filled wedge from the centre; angles in radians, clockwise from +x
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: &'static str,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font: Font,
        align: TextAlign,
        baseline: Baseline,
        color: &'static str,
    },
}

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn text(
    x: f64,
    y: f64,
    text: String,
    font: Font,
    align: TextAlign,
    baseline: Baseline,
    color: &'static str,
) -> DrawPrimitive {
    DrawPrimitive::Text {
        x,
        y,
        text,
        font,
        align,
        baseline,
        color,
    }
}

pub fn render_chart(
    totals: &CategoryTotals,
    chart_type: ChartType,
    canvas: CanvasSize,
    style: &ThemeTokens,
) -> Vec<DrawPrimitive> {
    if totals.is_empty() {
        return vec![text(
            canvas.width / 2.0,
            canvas.height / 2.0,
            NO_DATA.to_string(),
            MESSAGE_FONT,
            TextAlign::Center,
            Baseline::Middle,
            style.muted,
        )];
    }

    let primitives = match chart_type {
        ChartType::Bar => render_bar(totals, canvas, style),
        ChartType::Pie => render_pie(totals, canvas, style),
    };
    log::debug!(
        "Rendered {:?} chart: {} categories, {} primitives",
        chart_type,
        totals.len(),
        primitives.len()
    );
    primitives
}

fn title(canvas: CanvasSize, style: &ThemeTokens) -> DrawPrimitive {
    text(
        canvas.width / 2.0,
        8.0,
        TITLE.to_string(),
        TITLE_FONT,
        TextAlign::Center,
        Baseline::Top,
        style.text,
    )
}

fn render_bar(totals: &CategoryTotals, canvas: CanvasSize, style: &ThemeTokens) -> Vec<DrawPrimitive> {
    let count = totals.len() as f64;
    let chart_width = (canvas.width - PAD_LEFT - PAD_RIGHT).max(0.0);
    let chart_height = (canvas.height - PAD_TOP - PAD_BOTTOM).max(0.0);
    let bar_width = (chart_width / count - BAR_GAP).max(0.0);

    let max = totals
        .iter()
        .map(|(_, amount)| amount.to_f64().unwrap_or(0.0))
        .fold(f64::NEG_INFINITY, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };

    let mut primitives = Vec::with_capacity(totals.len() * 3 + 1);
    for (index, (category, amount)) in totals.iter().enumerate() {
        let value = amount.to_f64().unwrap_or(0.0);
        let bar_height = value / max * chart_height;
        let x = PAD_LEFT + index as f64 * (bar_width + BAR_GAP);
        let y = PAD_TOP + (chart_height - bar_height);
        let center = x + bar_width / 2.0;

        primitives.push(DrawPrimitive::Rect {
            x,
            y,
            width: bar_width,
            height: bar_height,
            color: color_for(index),
        });
        primitives.push(text(
            center,
            canvas.height - 20.0,
            category.label().to_string(),
            LABEL_FONT,
            TextAlign::Center,
            Baseline::Top,
            style.text,
        ));
        primitives.push(text(
            center,
            y - 4.0,
            display_amount(amount),
            LABEL_FONT,
            TextAlign::Center,
            Baseline::Bottom,
            style.text,
        ));
    }
    primitives.push(title(canvas, style));
    primitives
}

fn render_pie(totals: &CategoryTotals, canvas: CanvasSize, style: &ThemeTokens) -> Vec<DrawPrimitive> {
    let cx = canvas.width / 2.0;
    let cy = canvas.height / 2.0;
    let radius = PIE_RADIUS_SHARE * cx.min(cy).max(0.0);
    let total = totals.total().to_f64().unwrap_or(0.0);
    let count = totals.len();

    // share of the whole circle per category; all-zero totals split evenly
    let shares: Vec<f64> = totals
        .iter()
        .map(|(_, amount)| {
            if total > 0.0 {
                amount.to_f64().unwrap_or(0.0) / total
            } else {
                1.0 / count as f64
            }
        })
        .collect();

    let mut primitives = Vec::with_capacity(count * 4 + 1);
    let mut start = 0.0;
    for (index, share) in shares.iter().enumerate() {
        let end = if index + 1 == count {
            TAU
        } else {
            start + share * TAU
        };
        primitives.push(DrawPrimitive::Arc {
            cx,
            cy,
            radius,
            start_angle: start,
            end_angle: end,
            color: color_for(index),
        });

        let span = end - start;
        if span > PIE_LABEL_MIN_SPAN {
            let mid = start + span / 2.0;
            primitives.push(text(
                cx + mid.cos() * radius * PIE_LABEL_SHARE,
                cy + mid.sin() * radius * PIE_LABEL_SHARE,
                format!("{:.1}%", share * 100.0),
                LABEL_FONT,
                TextAlign::Center,
                Baseline::Middle,
                PIE_LABEL_COLOR,
            ));
        }
        start = end;
    }

    primitives.push(title(canvas, style));

    for (index, ((category, amount), share)) in totals.iter().zip(&shares).enumerate() {
        let row_y = LEGEND_TOP + index as f64 * LEGEND_ROW;
        primitives.push(DrawPrimitive::Rect {
            x: LEGEND_X,
            y: row_y,
            width: LEGEND_SWATCH,
            height: LEGEND_SWATCH,
            color: color_for(index),
        });
        primitives.push(text(
            LEGEND_X + LEGEND_SWATCH + LEGEND_TEXT_GAP,
            row_y + LEGEND_SWATCH / 2.0,
            format!(
                "{} {:.1}% {}",
                category.label(),
                share * 100.0,
                display_amount(amount)
            ),
            LABEL_FONT,
            TextAlign::Left,
            Baseline::Middle,
            style.text,
        ));
    }
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Theme};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn totals(entries: &[(Category, Decimal)]) -> CategoryTotals {
        let mut totals = CategoryTotals::new();
        for (category, amount) in entries {
            totals.add(*category, *amount);
        }
        totals
    }

    fn canvas() -> CanvasSize {
        CanvasSize::new(400.0, 300.0)
    }

    fn rects(primitives: &[DrawPrimitive]) -> Vec<(f64, f64, f64, f64, &'static str)> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => Some((*x, *y, *width, *height, *color)),
                _ => None,
            })
            .collect()
    }

    fn arcs(primitives: &[DrawPrimitive]) -> Vec<(f64, f64)> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Arc {
                    start_angle,
                    end_angle,
                    ..
                } => Some((*start_angle, *end_angle)),
                _ => None,
            })
            .collect()
    }

    fn texts(primitives: &[DrawPrimitive]) -> Vec<&str> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_totals_render_single_message() {
        let tokens = Theme::Light.tokens();
        for chart_type in [ChartType::Bar, ChartType::Pie] {
            let primitives = render_chart(&CategoryTotals::new(), chart_type, canvas(), &tokens);
            assert_eq!(primitives.len(), 1);
            match &primitives[0] {
                DrawPrimitive::Text {
                    x, y, text, color, ..
                } => {
                    assert_eq!(text, NO_DATA);
                    assert_eq!((*x, *y), (200.0, 150.0));
                    assert_eq!(*color, tokens.muted);
                }
                other => panic!("unexpected primitive {other:?}"),
            }
        }
    }

    #[test]
    fn bar_heights_scale_linearly() {
        let t = totals(&[(Category::Food, dec!(100)), (Category::Transport, dec!(50))]);
        let primitives = render_chart(&t, ChartType::Bar, canvas(), &Theme::Light.tokens());
        let bars = rects(&primitives);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].3, 2.0 * bars[1].3);
        // tallest bar fills the plot area
        assert_eq!(bars[0].3, 300.0 - 30.0 - 36.0);
        assert_eq!(bars[0].1, 30.0);
    }

    #[test]
    fn bar_layout_geometry() {
        let t = totals(&[(Category::Food, dec!(100)), (Category::Transport, dec!(50))]);
        let primitives = render_chart(&t, ChartType::Bar, canvas(), &Theme::Light.tokens());
        let bars = rects(&primitives);
        // chart width 346, two bars of 161 with a 12 gap
        assert_eq!(bars[0].2, 161.0);
        assert_eq!(bars[0].0, 40.0);
        assert_eq!(bars[1].0, 40.0 + 161.0 + 12.0);
        assert_eq!(bars[0].4, PALETTE[0]);
        assert_eq!(bars[1].4, PALETTE[1]);

        let labels = texts(&primitives);
        assert_eq!(
            labels,
            vec!["Food", "₹100", "Transport", "₹50", TITLE]
        );
    }

    #[test]
    fn all_zero_totals_still_draw_bars() {
        let t = totals(&[(Category::Bills, dec!(0)), (Category::Health, dec!(0))]);
        let primitives = render_chart(&t, ChartType::Bar, canvas(), &Theme::Dark.tokens());
        let bars = rects(&primitives);
        assert_eq!(bars.len(), 2);
        assert!(bars.iter().all(|b| b.3 == 0.0));
    }

    #[test]
    fn palette_wraps_by_index() {
        let mut t = CategoryTotals::new();
        let all = [
            Category::Food,
            Category::Transport,
            Category::Entertainment,
            Category::Shopping,
            Category::Bills,
            Category::Health,
            Category::Education,
            Category::Other,
        ];
        for (i, category) in all.iter().enumerate() {
            t.add(*category, Decimal::from(i + 1));
        }
        assert_eq!(color_for(8), PALETTE[0]);
        let primitives = render_chart(&t, ChartType::Bar, canvas(), &Theme::Light.tokens());
        let colors: Vec<_> = rects(&primitives).iter().map(|r| r.4).collect();
        assert_eq!(colors, PALETTE.to_vec());
    }

    #[test]
    fn pie_angles_cover_full_circle() {
        let t = totals(&[
            (Category::Food, dec!(123.45)),
            (Category::Transport, dec!(67.8)),
            (Category::Bills, dec!(999)),
            (Category::Other, dec!(0.01)),
        ]);
        let primitives = render_chart(&t, ChartType::Pie, canvas(), &Theme::Light.tokens());
        let slices = arcs(&primitives);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].0, 0.0);
        let sum: f64 = slices.iter().map(|(s, e)| e - s).sum();
        assert!((sum - TAU).abs() < 1e-9);
        assert_eq!(slices[3].1, TAU);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn pie_geometry_and_labels() {
        let t = totals(&[(Category::Food, dec!(300)), (Category::Shopping, dec!(100))]);
        let primitives = render_chart(&t, ChartType::Pie, canvas(), &Theme::Light.tokens());
        match &primitives[0] {
            DrawPrimitive::Arc {
                cx,
                cy,
                radius,
                end_angle,
                ..
            } => {
                assert_eq!((*cx, *cy), (200.0, 150.0));
                assert_eq!(*radius, 0.7 * 150.0);
                assert!((end_angle - 0.75 * TAU).abs() < 1e-12);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
        let labels = texts(&primitives);
        assert_eq!(
            labels,
            vec![
                "75.0%",
                "25.0%",
                TITLE,
                "Food 75.0% ₹300",
                "Shopping 25.0% ₹100"
            ]
        );
    }

    #[test]
    fn thin_slices_have_no_percentage_label() {
        // 1% of the circle is ~0.063 rad
        let t = totals(&[(Category::Food, dec!(99)), (Category::Health, dec!(1))]);
        let primitives = render_chart(&t, ChartType::Pie, canvas(), &Theme::Light.tokens());
        let labels = texts(&primitives);
        assert!(labels.contains(&"99.0%"));
        assert!(!labels.contains(&"1.0%"));
        assert!(labels.contains(&"Health 1.0% ₹1"));
    }

    #[test]
    fn legend_rows_are_evenly_spaced() {
        let t = totals(&[
            (Category::Food, dec!(1)),
            (Category::Bills, dec!(1)),
            (Category::Health, dec!(1)),
        ]);
        let primitives = render_chart(&t, ChartType::Pie, canvas(), &Theme::Light.tokens());
        let swatches: Vec<_> = rects(&primitives).iter().map(|r| r.1).collect();
        assert_eq!(swatches, vec![40.0, 75.0, 110.0]);
    }

    #[test]
    fn all_zero_pie_splits_evenly() {
        let t = totals(&[(Category::Food, dec!(0)), (Category::Bills, dec!(0))]);
        let primitives = render_chart(&t, ChartType::Pie, canvas(), &Theme::Light.tokens());
        let slices = arcs(&primitives);
        assert_eq!(slices[0].1, TAU / 2.0);
        assert_eq!(slices[1].1, TAU);
    }

    #[test]
    fn rendering_is_idempotent() {
        let t = totals(&[
            (Category::Education, dec!(1500)),
            (Category::Food, dec!(420.75)),
        ]);
        let tokens = Theme::Dark.tokens();
        for chart_type in [ChartType::Bar, ChartType::Pie] {
            let first = render_chart(&t, chart_type, canvas(), &tokens);
            let second = render_chart(&t, chart_type, canvas(), &tokens);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn theme_changes_colours_not_geometry() {
        let t = totals(&[(Category::Food, dec!(10)), (Category::Bills, dec!(30))]);
        let light = render_chart(&t, ChartType::Bar, canvas(), &Theme::Light.tokens());
        let dark = render_chart(&t, ChartType::Bar, canvas(), &Theme::Dark.tokens());
        assert_eq!(rects(&light), rects(&dark));
        assert_ne!(light, dark);
    }
}
