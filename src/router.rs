use crate::catalog::{CatalogEvent, CatalogStore, CatalogView};
use crate::config::CatalogConfig;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, redirect_response, ResultResp};
use crate::templates::pages::{catalog_page, CatalogPageVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use tracing::debug;
use url::form_urlencoded;

/// Shared handles the routes need.
pub struct App {
    pub store: Arc<CatalogStore>,
    pub config: CatalogConfig,
}

/// Paths whose only verb is POST: each one changes session state.
const MUTATING_PATHS: [&str; 4] = ["/group", "/criteria", "/select", "/close"];

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    debug!(method = method.as_str(), path = path.as_str(), "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let state = app.store.snapshot();
            html_response(catalog_page(&CatalogPageVm {
                state: &state,
                fallback_image: &app.config.fallback_image,
                price_max: app.config.price_max,
                area_max: app.config.area_max,
            }))
        }
        ("GET", "/api/catalog") => {
            let state = app.store.snapshot();
            json_response(&CatalogView::from_state(&state))
        }
        ("POST", "/group") => {
            let params = parse_form(req)?;
            let group = params.get("group").cloned().unwrap_or_default();
            app.store.dispatch(CatalogEvent::SetGroup(group));
            redirect_response("/")
        }
        ("POST", "/criteria") => {
            let params = parse_form(req)?;
            app.store.dispatch_all(criteria_events(&params, &app.config)?);
            redirect_response("/")
        }
        ("POST", "/select") => {
            let params = parse_form(req)?;
            let id = params
                .get("id")
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ServerError::BadRequest("missing community id".into()))?;
            app.store.dispatch(CatalogEvent::Select(id.clone()));
            redirect_response("/")
        }
        ("POST", "/close") => {
            app.store.dispatch(CatalogEvent::Close);
            redirect_response("/")
        }
        (_, p) if MUTATING_PATHS.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Decodes an `application/x-www-form-urlencoded` request body.
fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(form_urlencoded::parse(&raw).into_owned().collect())
}

/// Turns the criteria form into events.
///
/// Only the parameters present produce events. Ranges are clamped into the
/// configured full range and ordered so that min <= max. A range given with
/// one bound takes the full-range default for the other.
fn criteria_events(
    params: &HashMap<String, String>,
    config: &CatalogConfig,
) -> Result<Vec<CatalogEvent>, ServerError> {
    let mut events = Vec::new();

    if let Some(home_type) = params.get("type") {
        events.push(CatalogEvent::SetHomeType(home_type.clone()));
    }

    let defaults = config.initial_criteria();

    if let Some((min, max)) = range_param(params, "price_min", "price_max", config.price_max)? {
        events.push(CatalogEvent::SetPriceRange(
            min.unwrap_or(defaults.price.min),
            max.unwrap_or(defaults.price.max),
        ));
    }
    if let Some((min, max)) = range_param(params, "area_min", "area_max", config.area_max)? {
        events.push(CatalogEvent::SetAreaRange(
            min.unwrap_or(defaults.area.min),
            max.unwrap_or(defaults.area.max),
        ));
    }

    Ok(events.into_iter().map(order_range).collect())
}

type RangeParam = Option<(Option<f64>, Option<f64>)>;

fn range_param(
    params: &HashMap<String, String>,
    min_key: &str,
    max_key: &str,
    limit: f64,
) -> Result<RangeParam, ServerError> {
    let min = number_param(params, min_key, limit)?;
    let max = number_param(params, max_key, limit)?;
    if min.is_none() && max.is_none() {
        return Ok(None);
    }
    Ok(Some((min, max)))
}

fn number_param(
    params: &HashMap<String, String>,
    key: &str,
    limit: f64,
) -> Result<Option<f64>, ServerError> {
    let Some(raw) = params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let value: f64 = raw
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("{key} must be a number, got {raw:?}")))?;
    if !value.is_finite() {
        return Err(ServerError::BadRequest(format!("{key} must be finite")));
    }
    Ok(Some(value.clamp(0.0, limit)))
}

fn order_range(event: CatalogEvent) -> CatalogEvent {
    match event {
        CatalogEvent::SetPriceRange(a, b) => CatalogEvent::SetPriceRange(a.min(b), a.max(b)),
        CatalogEvent::SetAreaRange(a, b) => CatalogEvent::SetAreaRange(a.min(b), a.max(b)),
        other => other,
    }
}
