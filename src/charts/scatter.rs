use crate::charts::palette::color;
use crate::charts::{no_data, render, Canvas, DrawResult, HEIGHT, WIDTH};
use maud::Markup;
use plotters::prelude::*;

#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    /// Palette index, so a category keeps its color across charts.
    pub color: usize,
    pub points: Vec<(f64, f64)>,
}

/// Point cloud with one color per series and a legend in the corner.
pub fn scatter_chart(title: &str, series: &[Series], x_label: &str, y_label: &str) -> Markup {
    if series.iter().all(|s| s.points.is_empty()) {
        return no_data(title);
    }

    render(title, (WIDTH, HEIGHT), |root| {
        draw_scatter(root, series, x_label, y_label)
    })
}

/// Upper end of an axis starting at zero, a little past the largest value.
fn axis_end(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

fn draw_scatter(root: &Canvas<'_>, series: &[Series], x_label: &str, y_label: &str) -> DrawResult {
    root.fill(&WHITE)?;

    let points = || series.iter().flat_map(|s| s.points.iter().copied());
    let x_end = axis_end(points().map(|(x, _)| x));
    let y_end = axis_end(points().map(|(_, y)| y));

    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_end, 0.0..y_end)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    for s in series.iter().filter(|s| !s.points.is_empty()) {
        let c = color(s.color);
        chart
            .draw_series(
                s.points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, c.mix(0.6).filled())),
            )?
            .label(s.name.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 4, c.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
