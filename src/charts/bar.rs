use crate::charts::palette::color;
use crate::charts::{label_font, no_data, render, Canvas, DrawResult, HEIGHT, WIDTH};
use maud::Markup;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text drawn just outside the bar end, e.g. `€812`.
    pub text: String,
}

/// Vertical bars on a zero baseline; negative values hang below it.
/// `rotate_labels` turns the category labels for long names.
pub fn bar_chart(title: &str, bars: &[Bar], rotate_labels: bool) -> Markup {
    if bars.is_empty() {
        return no_data(title);
    }

    render(title, (WIDTH, HEIGHT), |root| {
        draw_bars(root, bars, rotate_labels)
    })
}

/// Value axis spanning zero and every bar, with headroom for the value text.
fn value_range(bars: &[Bar]) -> Range<f64> {
    let lo = bars.iter().map(|b| b.value).fold(0.0, f64::min);
    let hi = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let pad = (hi - lo).max(1.0) * 0.12;

    let bottom = if lo < 0.0 { lo - pad } else { 0.0 };
    let top = if hi > 0.0 || lo == 0.0 { hi + pad } else { 0.0 };
    bottom..top
}

fn draw_bars(root: &Canvas<'_>, bars: &[Bar], rotate_labels: bool) -> DrawResult {
    root.fill(&WHITE)?;

    let range = value_range(bars);
    let floor = range.start;
    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(if rotate_labels { 120 } else { 32 })
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..bars.len() as f64, range)?;

    // category names are placed under each bar below, not on the numeric x axis
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    let fill = color(0);
    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let x = i as f64;
        Rectangle::new(
            [(x + 0.15, bar.value.max(0.0)), (x + 0.85, bar.value.min(0.0))],
            fill.filled(),
        )
    }))?;

    let above = label_font().pos(Pos::new(HPos::Center, VPos::Bottom));
    let below = label_font().pos(Pos::new(HPos::Center, VPos::Top));
    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let style = if bar.value >= 0.0 { above.clone() } else { below.clone() };
        Text::new(bar.text.clone(), (i as f64 + 0.5, bar.value), style)
    }))?;

    let category = if rotate_labels {
        label_font()
            .transform(FontTransform::Rotate90)
            .pos(Pos::new(HPos::Left, VPos::Center))
    } else {
        label_font().pos(Pos::new(HPos::Center, VPos::Top))
    };
    for (i, bar) in bars.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(i as f64 + 0.5, floor));
        root.draw(&Text::new(bar.label.as_str(), (x, y + 8), category.clone()))?;
    }

    Ok(())
}
