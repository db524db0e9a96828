use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod filters;

pub use card::metric_card;
pub use error::error_page;
pub use filters::filter_sidebar;

pub fn alert(kind: &str, message: &str) -> Markup {
    html! {
        p class=(format!("alert alert-{kind}")) { (message) }
    }
}
