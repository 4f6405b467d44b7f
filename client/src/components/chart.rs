//! Dependency-free SVG charts (bar and donut).
//!
//! DESIGN
//! ======
//! Geometry is computed by pure functions ([`bar_layout`], [`donut_segments`])
//! in a fixed viewBox so the components only map shapes to SVG elements and
//! the math is testable without a DOM.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::prelude::*;

/// Series palette, cycled by index.
pub const PALETTE: [&str; 6] = ["#00B4D8", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#F97316"];

const VIEW_W: f64 = 400.0;
const VIEW_H: f64 = 220.0;
const AXIS_PAD: f64 = 24.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

#[must_use]
pub fn color_at(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

// =============================================================================
// BAR
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out vertical bars across `width`, scaled so the tallest bar fills
/// `height`. Negative and non-finite values draw as zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let max = values.iter().copied().map(clean).fold(0.0_f64, f64::max);
    let slot = width / values.len() as f64;
    let bar_w = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = if max > 0.0 { clean(*v) / max * height } else { 0.0 };
            BarRect { x: slot * i as f64 + (slot - bar_w) / 2.0, y: height - h, width: bar_w, height: h }
        })
        .collect()
}

/// Vertical bar chart with category labels under each bar.
#[component]
pub fn BarChart(#[prop(into)] data: Signal<Vec<ChartDatum>>, #[prop(optional)] empty_text: &'static str) -> impl IntoView {
    let empty_text = if empty_text.is_empty() { "No data" } else { empty_text };
    let plot_h = VIEW_H - AXIS_PAD;
    view! {
        <Show
            when=move || data.with(|d| d.iter().any(|p| p.value > 0.0))
            fallback=move || view! { <p class="chart__empty">{empty_text}</p> }
        >
            <svg class="chart chart--bar" viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">
                <line class="chart__axis" x1="0" y1=plot_h.to_string() x2=VIEW_W.to_string() y2=plot_h.to_string()></line>
                {move || {
                    let points = data.get();
                    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
                    bar_layout(&values, VIEW_W, plot_h - 8.0)
                        .into_iter()
                        .zip(points)
                        .enumerate()
                        .map(|(i, (rect, point))| {
                            let label_x = rect.x + rect.width / 2.0;
                            view! {
                                <g>
                                    <rect
                                        x=format!("{:.2}", rect.x)
                                        y=format!("{:.2}", rect.y + 8.0)
                                        width=format!("{:.2}", rect.width)
                                        height=format!("{:.2}", rect.height)
                                        rx="3"
                                        fill=color_at(i)
                                    >
                                        <title>{format!("{}: {}", point.label, point.value)}</title>
                                    </rect>
                                    <text class="chart__label" x=format!("{label_x:.2}") y=(VIEW_H - 6.0).to_string() text-anchor="middle">
                                        {truncate_label(&point.label, 12)}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </Show>
    }
}

/// Shorten long axis labels with an ellipsis.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}\u{2026}")
}

// =============================================================================
// DONUT
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    /// SVG path `d` attribute for the ring slice.
    pub path: String,
    /// Share of the total in `0.0..=1.0`.
    pub fraction: f64,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Ring slices for `values`, starting at twelve o'clock and running clockwise.
/// Zero-valued entries keep their slot with an empty path.
#[must_use]
pub fn donut_segments(values: &[f64], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<DonutSegment> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let value = if v.is_finite() && *v > 0.0 { *v } else { 0.0 };
            if total <= 0.0 || value <= 0.0 {
                return DonutSegment { path: String::new(), fraction: 0.0 };
            }
            let fraction = value / total;
            // A full ring cannot be drawn as one arc; stop just short.
            let sweep = (fraction * TAU).min(TAU - 1e-4);
            let end = start + sweep;
            let large = i32::from(sweep > std::f64::consts::PI);
            let (ox1, oy1) = polar(cx, cy, outer, start);
            let (ox2, oy2) = polar(cx, cy, outer, end);
            let (ix2, iy2) = polar(cx, cy, inner, end);
            let (ix1, iy1) = polar(cx, cy, inner, start);
            let path = format!(
                "M {ox1:.2} {oy1:.2} A {outer} {outer} 0 {large} 1 {ox2:.2} {oy2:.2} \
                 L {ix2:.2} {iy2:.2} A {inner} {inner} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
            );
            start = end;
            DonutSegment { path, fraction }
        })
        .collect()
}

/// Rounded percentage label for a fraction.
#[must_use]
pub fn percent_label(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Donut chart with a legend listing each slice's share.
#[component]
pub fn DonutChart(#[prop(into)] data: Signal<Vec<ChartDatum>>, #[prop(optional)] empty_text: &'static str) -> impl IntoView {
    let empty_text = if empty_text.is_empty() { "No data" } else { empty_text };
    let segments = Memo::new(move |_| {
        let values: Vec<f64> = data.with(|d| d.iter().map(|p| p.value).collect());
        donut_segments(&values, 100.0, 100.0, 85.0, 55.0)
    });

    view! {
        <Show
            when=move || data.with(|d| d.iter().any(|p| p.value > 0.0))
            fallback=move || view! { <p class="chart__empty">{empty_text}</p> }
        >
            <div class="chart chart--donut">
                <svg viewBox="0 0 200 200" role="img">
                    {move || {
                        segments
                            .get()
                            .into_iter()
                            .enumerate()
                            .filter(|(_, s)| !s.path.is_empty())
                            .map(|(i, s)| view! { <path d=s.path fill=color_at(i)></path> })
                            .collect_view()
                    }}
                </svg>
                <ul class="chart__legend">
                    {move || {
                        let fractions: Vec<f64> = segments.get().iter().map(|s| s.fraction).collect();
                        data.get()
                            .into_iter()
                            .zip(fractions)
                            .enumerate()
                            .map(|(i, (point, fraction))| {
                                view! {
                                    <li class="chart__legend-item">
                                        <span class="chart__swatch" style=format!("background:{}", color_at(i))></span>
                                        <span class="chart__legend-label">{point.label}</span>
                                        <span class="chart__legend-value">{percent_label(fraction)}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}
