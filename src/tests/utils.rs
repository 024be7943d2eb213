use crate::domain::{Document, FieldValue, Listing, UnitType};
use crate::responses::{error_to_response, ResultResp};
use crate::router::App;
use crate::store::ListingStore;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn unit(name: &str, image: Option<&str>) -> UnitType {
    UnitType {
        name: name.to_string(),
        area: Some("建面 100㎡".to_string()),
        price: Some("约80万/套".to_string()),
        local_image: image.map(str::to_string),
        ..Default::default()
    }
}

fn listing(name: &str, status: &str, total: &str, date: &str, units: Vec<UnitType>) -> Listing {
    Listing {
        name: name.to_string(),
        location: Some(format!("汉台区/{name}路")),
        status: Some(status.to_string()),
        kind: Some("住宅".to_string()),
        price: Some(FieldValue::Text("6800".to_string())),
        price_unit: Some("元/㎡(均价)".to_string()),
        total_price: Some(FieldValue::Text(total.to_string())),
        latest_open_date: Some(date.to_string()),
        house_types: units,
        ..Default::default()
    }
}

/// Four developments covering both statuses, shared and unique unit types,
/// an unparseable total price and an invalid date.
pub fn sample_document() -> Document {
    Document {
        scrape_time: Some("2024-08-01 10:00:00".to_string()),
        loupans: vec![
            listing(
                "汉江御园",
                "在售",
                "¥120万",
                "2024-05-01",
                vec![unit("3室2厅", Some("/images/a.jpg")), unit("2室1厅", None)],
            ),
            listing("天汉府", "待售", "98.5万", "2023-01-01", vec![unit("3室2厅", None)]),
            listing("兴元里", "在售", "abc", "not-a-date", vec![]),
            listing(
                "龙岗新城",
                "在售",
                "60万",
                "2022-10-10",
                vec![unit("4室2厅", None), unit("2室1厅", None), unit("3室2厅", None)],
            ),
        ],
    }
}

pub fn test_app() -> App {
    App {
        store: ListingStore::load(sample_document()),
        title: "汉中楼盘信息".to_string(),
    }
}

pub fn get(app: &App, uri: &str) -> ResultResp {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    crate::router::handle(req, app)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// GET through the same error conversion the server uses; returns status and body.
pub fn get_page(app: &App, uri: &str) -> (u16, String) {
    let resp = match get(app, uri) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };
    (resp.status().as_u16(), body_string(resp))
}

/// Listing names in the order they appear in rendered HTML.
pub fn names_in_order(body: &str, names: &[&str]) -> Vec<String> {
    let mut found: Vec<(usize, String)> = names
        .iter()
        .filter_map(|n| {
            body.find(&format!("<h5 class=\"card-title\">{n}</h5>"))
                .map(|pos| (pos, n.to_string()))
        })
        .collect();
    found.sort();
    found.into_iter().map(|(_, n)| n).collect()
}

pub const ALL_NAMES: [&str; 4] = ["汉江御园", "天汉府", "兴元里", "龙岗新城"];
