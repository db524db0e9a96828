//! Charts drawn with plotters into an in-memory SVG and embedded in the page.
//!
//! Each chart is a `figure` with the title as caption. Empty inputs render a
//! placeholder, and a drawing failure is logged and rendered the same way.

mod bar;
mod heatmap;
mod palette;
mod pie;
mod scatter;

pub use bar::{bar_chart, Bar};
pub use heatmap::heatmap;
pub use pie::{pie_chart, Slice};
pub use scatter::{scatter_chart, Series};

use log::warn;
use maud::{html, Markup, PreEscaped};
use plotters::coord::Shift;
use plotters::prelude::*;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 400;

type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type DrawResult = Result<(), Box<dyn std::error::Error>>;

/// Runs `draw` on a fresh `size` canvas and wraps the SVG in a figure.
fn render<F>(title: &str, size: (u32, u32), draw: F) -> Markup
where
    F: FnOnce(&Canvas<'_>) -> DrawResult,
{
    let mut svg = String::new();
    let result = {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw(&root).and_then(|()| root.present().map_err(Into::into))
    };

    match result {
        Ok(()) => figure(title, html! { div class="chart-svg" { (PreEscaped(svg)) } }),
        Err(e) => {
            warn!("Failed to draw chart '{title}': {e}");
            no_data(title)
        }
    }
}

fn figure(title: &str, body: Markup) -> Markup {
    html! {
        figure class="chart" {
            figcaption { (title) }
            (body)
        }
    }
}

fn no_data(title: &str) -> Markup {
    figure(
        title,
        html! { p class="chart-empty" { "No data for the current selection" } },
    )
}

/// Font for tick, value and category labels.
fn label_font() -> TextStyle<'static> {
    TextStyle::from(("sans-serif", 12).into_font())
}
