use crate::charts::palette::color;
use crate::charts::{no_data, render, Canvas, DrawResult, HEIGHT, WIDTH};
use maud::Markup;
use plotters::element::Pie;
use plotters::prelude::*;

#[derive(Debug, Clone)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Palette index, so a category keeps its color across charts.
    pub color: usize,
}

const RADIUS: f64 = 130.0;

/// Share-of-total pie, clockwise from twelve o'clock in input order. Slices
/// carry their percentage inside and their name outside.
pub fn pie_chart(title: &str, slices: &[Slice]) -> Markup {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total.is_nan() || total <= 0.0 {
        return no_data(title);
    }

    render(title, (WIDTH, HEIGHT), |root| draw_pie(root, slices))
}

fn draw_pie(root: &Canvas<'_>, slices: &[Slice]) -> DrawResult {
    root.fill(&WHITE)?;

    let center = (WIDTH as i32 / 2, HEIGHT as i32 / 2);
    let sizes: Vec<f64> = slices.iter().map(|s| s.value.max(0.0)).collect();
    let colors: Vec<RGBColor> = slices.iter().map(|s| color(s.color)).collect();
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();

    let mut pie = Pie::new(&center, &RADIUS, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 12).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 11).into_font().color(&WHITE));
    root.draw(&pie)?;

    Ok(())
}
