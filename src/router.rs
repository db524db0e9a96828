use crate::dashboard::{DashboardVm, Tab};
use crate::data::DatasetCache;
use crate::domain::filter::Filter;
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, redirect, ResultResp};
use crate::templates;
use astra::Request;
use log::debug;
use std::collections::HashMap;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Shared by every worker thread.
pub struct AppState {
    pub cache: DatasetCache,
}

impl AppState {
    pub fn new(cache: DatasetCache) -> Self {
        Self { cache }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => dashboard(&req, state),
        ("POST", "/refresh") => {
            state.cache.invalidate();
            redirect("/")
        }
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let param = |key: &str| params.get(key).map(String::as_str);

    let filter = Filter::from_selection(param("region"), param("segment"))
        .map_err(ServerError::BadRequest)?;
    let tab = Tab::from_slug(param("tab"));

    let snapshot = state.cache.get_or_load()?;
    let vm = DashboardVm::build(&snapshot, filter, tab, &mut rand::thread_rng());

    html_response(templates::pages::dashboard_page(&vm))
}

/// Decoded query parameters; the last occurrence of a key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
