use maud::{html, Markup, DOCTYPE};

/// A basic standalone HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p class="alert alert-error" { (message) }
                p { a href="/" { "← Back to the dashboard" } }
            }
        }
    }
}
