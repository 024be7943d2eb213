use crate::domain::Listing;
use crate::errors::ServerError;
use crate::images::photos_for;
use crate::responses::{asset_response, html_response, json_response, ResultResp};
use crate::store::{Filter, ListingStore, SortKey};
use crate::templates;
use crate::templates::components::{carousel, lightbox, results, ResultsVm};
use crate::viewer::{Carousel, Direction, Lightbox, PhotoRef, Pinch, Point};
use astra::Request;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Everything a request handler needs. The store here is never modified;
/// each request works on its own cheap clone.
pub struct App {
    pub store: ListingStore,
    pub title: String,
}

type Params = HashMap<String, String>;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let store = query_session(app, &params)?;
            html_response(templates::pages::home_page(&app.title, &store))
        }
        ("GET", "/listings") => {
            let store = query_session(app, &params)?;
            html_response(results(&ResultsVm { store: &store }))
        }
        ("GET", "/api/listings") => {
            let store = query_session(app, &params)?;
            json_response(&ListingsPayload::from_store(&store))
        }
        ("GET", "/viewer") => open_viewer(app, &params),
        ("GET", "/viewer/event") => viewer_event(app, &params),
        ("GET", p) if p.starts_with("/static/") => asset_response(&p["/static/".len()..]),
        ("GET", p) if p.starts_with("/cards/") => {
            let listing = p
                .strip_prefix("/cards/")
                .and_then(|rest| rest.strip_suffix("/carousel"))
                .and_then(|id| id.parse::<usize>().ok())
                .ok_or(ServerError::NotFound)?;
            carousel_fragment(app, listing, &params)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn param<'a>(params: &'a Params, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn required<T: FromStr>(params: &Params, key: &str) -> Result<T, ServerError> {
    let raw = params
        .get(key)
        .ok_or_else(|| ServerError::BadRequest(format!("missing parameter '{key}'")))?;
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid value for '{key}': {raw}")))
}

fn optional<T: FromStr>(params: &Params, key: &str) -> Result<Option<T>, ServerError> {
    match params.get(key) {
        Some(_) => required(params, key).map(Some),
        None => Ok(None),
    }
}

/// A gesture coordinate or distance: any finite float.
fn finite(params: &Params, key: &str) -> Result<f64, ServerError> {
    let value: f64 = required(params, key)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ServerError::BadRequest(format!("'{key}' must be finite")))
    }
}

fn optional_finite(params: &Params, key: &str) -> Result<Option<f64>, ServerError> {
    match params.get(key) {
        Some(_) => finite(params, key).map(Some),
        None => Ok(None),
    }
}

fn known_filter(options: &[Filter], raw: &str, key: &str) -> Result<Filter, ServerError> {
    let filter = Filter::parse(raw);
    if filter.is_all() || options.contains(&filter) {
        Ok(filter)
    } else {
        Err(ServerError::BadRequest(format!("unknown {key}: {raw}")))
    }
}

/// Applies the request's filters (each resetting the sort) and then its sort key
/// to a fresh session over the canonical listings.
fn query_session(app: &App, params: &Params) -> Result<ListingStore, ServerError> {
    let mut store = app.store.clone();
    let options = app.store.options();

    let unit_type = known_filter(&options.unit_types, param(params, "unit_type"), "unit type")?;
    let status = known_filter(&options.statuses, param(params, "status"), "status")?;
    store.set_unit_type_filter(unit_type);
    store.set_status_filter(status);

    if let Some(raw) = params.get("sort") {
        let key = raw
            .parse::<SortKey>()
            .map_err(|e| ServerError::BadRequest(e.to_string()))?;
        store.sort(key);
    }

    Ok(store)
}

fn listing_at(app: &App, index: usize) -> Result<&Listing, ServerError> {
    app.store.listing(index).ok_or(ServerError::NotFound)
}

fn carousel_fragment(app: &App, index: usize, params: &Params) -> ResultResp {
    let listing = listing_at(app, index)?;
    let unit_type = Filter::parse(param(params, "unit_type"));
    let photos = photos_for(listing, &unit_type).len();
    let mut state = Carousel::new(photos, optional(params, "index")?.unwrap_or(0));

    let direction = match params.get("dir") {
        Some(raw) => Some(
            Direction::parse(raw)
                .ok_or_else(|| ServerError::BadRequest(format!("invalid direction: {raw}")))?,
        ),
        None => match (
            optional_finite(params, "start_x")?,
            optional_finite(params, "end_x")?,
        ) {
            (Some(start), Some(end)) => Direction::from_swipe(start, end),
            _ => None,
        },
    };

    if let Some(dir) = direction {
        state.advance(dir);
    }

    html_response(carousel(index, listing, &unit_type, state))
}

fn open_viewer(app: &App, params: &Params) -> ResultResp {
    let photo = PhotoRef {
        listing: required(params, "listing")?,
        photo: required(params, "image")?,
    };
    let unit_type = Filter::parse(param(params, "unit_type"));

    let mut viewer = Lightbox::closed();
    viewer.open(photo);

    render_viewer(app, &viewer, &unit_type)
}

/// Re-applies one gesture event to the lightbox state the client carried along.
fn viewer_event(app: &App, params: &Params) -> ResultResp {
    let photo = PhotoRef {
        listing: required(params, "listing")?,
        photo: required(params, "image")?,
    };
    let unit_type = Filter::parse(param(params, "unit_type"));

    let pinch = match (
        optional_finite(params, "pinch_dist")?,
        optional_finite(params, "pinch_scale")?,
    ) {
        (Some(initial_distance), Some(initial_scale)) => Some(Pinch {
            initial_distance,
            initial_scale,
        }),
        _ => None,
    };
    let last_touch = match (
        optional_finite(params, "touch_x")?,
        optional_finite(params, "touch_y")?,
    ) {
        (Some(x), Some(y)) => Some(Point::new(x, y)),
        _ => None,
    };

    let mut viewer = Lightbox::restore(
        photo,
        finite(params, "scale")?,
        Point::new(finite(params, "x")?, finite(params, "y")?),
        pinch,
        last_touch,
    );

    let touch = || -> Result<Point, ServerError> {
        Ok(Point::new(finite(params, "tx")?, finite(params, "ty")?))
    };

    match param(params, "kind") {
        "wheel" => viewer.wheel(finite(params, "delta_y")?),
        "pinch-start" => viewer.pinch_start(finite(params, "dist")?),
        "pinch" => viewer.pinch_move(finite(params, "dist")?),
        "drag-start" => viewer.drag_start(touch()?),
        "drag" => viewer.drag_move(touch()?),
        "touch-end" => viewer.touch_end(),
        "click" => {
            viewer.click();
        }
        "close" => viewer.close(),
        other => {
            return Err(ServerError::BadRequest(format!(
                "unknown viewer event: {other}"
            )))
        }
    }

    render_viewer(app, &viewer, &unit_type)
}

fn render_viewer(app: &App, viewer: &Lightbox, unit_type: &Filter) -> ResultResp {
    let photo = match viewer.photo() {
        Some(p) => {
            let listing = listing_at(app, p.listing)?;
            let photo = photos_for(listing, unit_type).get(p.photo).copied();
            Some(photo.ok_or(ServerError::NotFound)?)
        }
        None => None,
    };

    html_response(lightbox(viewer, photo, unit_type))
}

#[derive(Serialize)]
struct ListingsPayload<'a> {
    scrape_time: Option<&'a str>,
    unit_type: &'a str,
    status: &'a str,
    sort: &'static str,
    total: usize,
    listings: Vec<&'a Listing>,
}

impl<'a> ListingsPayload<'a> {
    fn from_store(store: &'a ListingStore) -> Self {
        let listings: Vec<&Listing> = store.displayed().map(|(_, l)| l).collect();
        Self {
            scrape_time: store.scrape_time(),
            unit_type: store.unit_type_filter().as_str(),
            status: store.status_filter().as_str(),
            sort: store.sort_key().as_str(),
            total: listings.len(),
            listings,
        }
    }
}
