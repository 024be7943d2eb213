// src/tests/router_tests/listings_tests.rs

use crate::router::App;
use crate::store::ListingStore;
use crate::tests::utils::{get, get_page, names_in_order, test_app, ALL_NAMES};

// 在售 / 3室2厅 / 4室2厅, percent-encoded
const ON_SALE: &str = "%E5%9C%A8%E5%94%AE";
const THREE_ROOMS: &str = "3%E5%AE%A42%E5%8E%85";
const FOUR_ROOMS: &str = "4%E5%AE%A42%E5%8E%85";

#[test]
fn home_page_renders_all_listings_in_canonical_order() {
    let app = test_app();
    let (status, body) = get_page(&app, "/");

    assert_eq!(status, 200);
    assert!(body.contains("<title>汉中楼盘信息</title>"));
    assert!(body.contains("数据更新时间: 2024-08-01 10:00:00"));
    assert!(body.contains("<div id=\"lightbox\"></div>"));
    assert_eq!(names_in_order(&body, &ALL_NAMES), ALL_NAMES);
}

#[test]
fn filter_options_list_every_distinct_value_once() {
    let app = test_app();
    let (_, body) = get_page(&app, "/");

    assert_eq!(body.matches("<option value=\"3室2厅\"").count(), 1);
    assert_eq!(body.matches("<option value=\"在售\"").count(), 1);
    assert!(body.contains("<option value=\"待售\""));
    assert!(body.contains("<option value=\"4室2厅\""));
    assert!(body.contains("全部户型"));
    assert!(body.contains("全部状态"));
}

#[test]
fn unit_type_filter_shows_only_matching_listings() {
    let app = test_app();
    let (status, body) = get_page(&app, &format!("/listings?unit_type={THREE_ROOMS}&status=__all__"));

    assert_eq!(status, 200);
    assert_eq!(
        names_in_order(&body, &ALL_NAMES),
        vec!["汉江御园", "天汉府", "龙岗新城"]
    );
    assert!(body.contains("<option value=\"3室2厅\" selected>"));
}

#[test]
fn fragment_is_not_a_full_page() {
    let app = test_app();
    let (_, body) = get_page(&app, "/listings");

    assert!(body.starts_with("<section id=\"results\">"));
    assert!(!body.contains("<html"));
}

#[test]
fn filters_combine_and_sort_applies_to_filtered_view() {
    let app = test_app();
    let (_, body) = get_page(
        &app,
        &format!("/listings?unit_type=__all__&status={ON_SALE}&sort=totalPrice"),
    );

    assert_eq!(
        names_in_order(&body, &ALL_NAMES),
        vec!["兴元里", "龙岗新城", "汉江御园"]
    );
    assert!(body.contains("<option value=\"totalPrice\" selected>"));
}

#[test]
fn filter_change_comes_back_with_default_sort() {
    let app = test_app();
    let (_, body) = get_page(&app, &format!("/listings?status={ON_SALE}"));

    assert!(body.contains("<option value=\"default\" selected>"));
    assert_eq!(
        names_in_order(&body, &ALL_NAMES),
        vec!["汉江御园", "兴元里", "龙岗新城"]
    );
}

#[test]
fn default_sort_ignores_active_filters() {
    let app = test_app();
    let (_, body) = get_page(
        &app,
        &format!("/listings?unit_type={FOUR_ROOMS}&status=__all__&sort=default"),
    );

    assert_eq!(names_in_order(&body, &ALL_NAMES), ALL_NAMES);
    assert!(body.contains("<option value=\"4室2厅\" selected>"));
}

#[test]
fn open_date_sort_puts_newer_first() {
    let app = test_app();
    let (_, body) = get_page(&app, "/listings?sort=openDate");
    let order = names_in_order(&body, &ALL_NAMES);

    let pos = |name: &str| order.iter().position(|n| n == name).unwrap();
    assert!(pos("汉江御园") < pos("天汉府"));
    assert!(pos("天汉府") < pos("龙岗新城"));
    assert_eq!(pos("兴元里"), 3);
}

#[test]
fn unknown_filter_or_sort_is_bad_request() {
    let app = test_app();

    let (status, body) = get_page(&app, "/listings?status=%E5%B7%B2%E5%94%AE");
    assert_eq!(status, 400);
    assert!(body.contains("unknown status"));

    let (status, _) = get_page(&app, "/listings?sort=cheapest");
    assert_eq!(status, 400);
}

#[test]
fn empty_store_renders_placeholder() {
    let app = App {
        store: ListingStore::empty(),
        title: "汉中楼盘信息".to_string(),
    };
    let (status, body) = get_page(&app, "/");

    assert_eq!(status, 200);
    assert!(body.contains("暂无楼盘数据"));
    assert!(!body.contains("数据更新时间"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    assert!(matches!(
        get(&app, "/admin"),
        Err(crate::errors::ServerError::NotFound)
    ));

    let (status, body) = get_page(&app, "/nope");
    assert_eq!(status, 404);
    assert!(body.contains("Error 404"));
}
