use crate::charts::palette::blues;
use crate::charts::{label_font, no_data, render, Canvas, DrawResult, WIDTH};
use maud::Markup;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const ROW_HEIGHT: u32 = 26;
/// Cells at or above this percentage get light text.
const DARK_CELL: f64 = 55.0;

/// Grid of percentages (0 to 100) on a sequential blue scale. `cells` is
/// row-major with one inner vec per row label; the first row is drawn on top.
pub fn heatmap(title: &str, rows: &[String], cols: &[String], cells: &[Vec<f64>]) -> Markup {
    if rows.is_empty() || cols.is_empty() {
        return no_data(title);
    }

    let height = 80 + rows.len() as u32 * ROW_HEIGHT;
    render(title, (WIDTH, height), |root| {
        draw_heatmap(root, rows, cols, cells)
    })
}

fn draw_heatmap(root: &Canvas<'_>, rows: &[String], cols: &[String], cells: &[Vec<f64>]) -> DrawResult {
    root.fill(&WHITE)?;

    let n_rows = rows.len() as f64;
    let n_cols = cols.len() as f64;
    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(28)
        .y_label_area_size(160)
        .build_cartesian_2d(0.0..n_cols, 0.0..n_rows)?;

    // plotters counts y upwards, so row i sits at n_rows - 1 - i
    let cell = |i: usize, j: usize| (j as f64, n_rows - 1.0 - i as f64);

    chart.draw_series(cells.iter().enumerate().flat_map(|(i, values)| {
        values.iter().enumerate().map(move |(j, &pct)| {
            let (x, y) = cell(i, j);
            Rectangle::new([(x, y + 1.0), (x + 1.0, y)], blues(pct / 100.0).filled())
        })
    }))?;

    chart.draw_series(cells.iter().enumerate().flat_map(|(i, values)| {
        values.iter().enumerate().map(move |(j, &pct)| {
            let (x, y) = cell(i, j);
            let ink = if pct >= DARK_CELL { &WHITE } else { &BLACK };
            Text::new(
                format!("{pct:.1}"),
                (x + 0.5, y + 0.5),
                label_font()
                    .color(ink)
                    .pos(Pos::new(HPos::Center, VPos::Center)),
            )
        })
    }))?;

    let col_style = label_font().pos(Pos::new(HPos::Center, VPos::Top));
    for (j, name) in cols.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(j as f64 + 0.5, 0.0));
        root.draw(&Text::new(name.as_str(), (x, y + 8), col_style.clone()))?;
    }

    let row_style = label_font().pos(Pos::new(HPos::Right, VPos::Center));
    for (i, name) in rows.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(0.0, n_rows - 0.5 - i as f64));
        root.draw(&Text::new(name.as_str(), (x - 8, y), row_style.clone()))?;
    }

    Ok(())
}
