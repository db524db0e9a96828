use maud::{html, Markup, DOCTYPE};

fn chart_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24"
            fill="none" stroke="#1f77b4" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" class="icon"
        {
            path d="M3 21h18" {}
            rect x="5" y="11" width="3" height="7" rx="0.5" {}
            rect x="10.5" y="6" width="3" height="12" rx="0.5" {}
            rect x="16" y="9" width="3" height="9" rx="0.5" {}
        }
    }
}

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        (chart_icon())
                        h1 { "🏠 German Rental Market Analysis" }
                    }
                    p class="subtitle" { "Thesis Dashboard - Interactive Analysis" }
                }
                (content)
                footer class="site-footer" {
                    hr;
                    p { strong { "Thesis Research Dashboard" } " • Rental listings across Germany's federal states" }
                }
            }
        }
    }
}
