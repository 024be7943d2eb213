use crate::tests::utils::{get_page, test_app};

const CLOSED: &str = "<div id=\"lightbox\"></div>";

fn event(state: &str, payload: &str) -> String {
    format!("/viewer/event?listing=0&image=0&unit_type=__all__&{state}&{payload}")
}

#[test]
fn thumbnail_click_opens_at_scale_one() {
    let app = test_app();
    let (status, body) = get_page(&app, "/viewer?listing=0&image=0&unit_type=__all__");

    assert_eq!(status, 200);
    assert!(body.contains("data-state=\"open\""));
    assert!(body.contains("lightbox-dialog modal-sm"));
    assert!(body.contains("translate(0px, 0px) scale(1)"));
    assert!(body.contains("/images/a.jpg"));
    assert!(body.contains("scale=1&amp;x=0&amp;y=0"));
}

#[test]
fn wheel_zooms_to_medium_modal() {
    let app = test_app();
    let (_, body) = get_page(&app, &event("scale=1&x=0&y=0", "kind=wheel&delta_y=-50"));

    assert!(body.contains("data-state=\"zoomed\""));
    assert!(body.contains("lightbox-dialog modal-lg"));
    assert!(body.contains("scale(1.5)"));
}

#[test]
fn wheel_clamps_to_three_and_full_bleed() {
    let app = test_app();
    let (_, body) = get_page(&app, &event("scale=2.5&x=0&y=0", "kind=wheel&delta_y=-400"));

    assert!(body.contains("scale(3)"));
    assert!(body.contains("modal-fullscreen"));
}

#[test]
fn click_at_scale_one_closes() {
    let app = test_app();
    let (status, body) = get_page(&app, &event("scale=1&x=0&y=0", "kind=click"));

    assert_eq!(status, 200);
    assert_eq!(body, CLOSED);
}

#[test]
fn click_while_zoomed_keeps_viewer_open() {
    let app = test_app();
    let (_, body) = get_page(&app, &event("scale=1.5&x=0&y=0", "kind=click"));

    assert!(body.contains("data-state=\"zoomed\""));
    assert!(body.contains("scale(1.5)"));
}

#[test]
fn close_button_always_closes() {
    let app = test_app();
    let (_, body) = get_page(&app, &event("scale=2&x=10&y=10", "kind=close"));
    assert_eq!(body, CLOSED);
}

#[test]
fn drag_accumulates_offset_from_last_touch() {
    let app = test_app();
    let (_, body) = get_page(
        &app,
        &event("scale=1.5&x=5&y=5&touch_x=10&touch_y=10", "kind=drag&tx=30&ty=0"),
    );

    assert!(body.contains("translate(25px, -5px)"));
    assert!(body.contains("touch_x=30&amp;touch_y=0"));
}

#[test]
fn drag_start_records_touch_without_moving() {
    let app = test_app();
    let (_, body) = get_page(&app, &event("scale=1&x=0&y=0", "kind=drag-start&tx=40&ty=60"));

    assert!(body.contains("translate(0px, 0px)"));
    assert!(body.contains("touch_x=40&amp;touch_y=60"));
}

#[test]
fn pinch_scales_by_distance_ratio() {
    let app = test_app();

    let (_, body) = get_page(&app, &event("scale=1&x=0&y=0", "kind=pinch-start&dist=100"));
    assert!(body.contains("pinch_dist=100&amp;pinch_scale=1"));

    let (_, body) = get_page(
        &app,
        &event("scale=1&x=0&y=0&pinch_dist=100&pinch_scale=1", "kind=pinch&dist=250"),
    );
    assert!(body.contains("scale(2.5)"));
    assert!(body.contains("modal-fullscreen"));
}

#[test]
fn touch_end_forgets_gesture_state() {
    let app = test_app();
    let (_, body) = get_page(
        &app,
        &event("scale=2&x=0&y=0&pinch_dist=100&pinch_scale=1&touch_x=1&touch_y=1", "kind=touch-end"),
    );

    assert!(!body.contains("pinch_dist"));
    assert!(!body.contains("touch_x"));
    assert!(body.contains("scale(2)"));
}

#[test]
fn viewer_uses_filtered_photo_list() {
    let app = test_app();
    // Listing 3 under the 2室1厅 filter has a single photo at index 0.
    let (status, body) = get_page(&app, "/viewer?listing=3&image=0&unit_type=2%E5%AE%A41%E5%8E%85");

    assert_eq!(status, 200);
    assert!(body.contains("text=2%E5%AE%A41%E5%8E%85"));
}

#[test]
fn bad_viewer_requests() {
    let app = test_app();

    assert_eq!(get_page(&app, "/viewer?listing=99&image=0").0, 404);
    assert_eq!(get_page(&app, "/viewer?listing=0&image=5").0, 404);
    assert_eq!(get_page(&app, "/viewer?listing=0").0, 400);
    assert_eq!(get_page(&app, &event("scale=1&x=0&y=0", "kind=spin")).0, 400);
    assert_eq!(get_page(&app, &event("x=0&y=0", "kind=wheel&delta_y=1")).0, 400);
    assert_eq!(get_page(&app, &event("scale=1&x=0&y=0", "kind=drag&tx=1")).0, 400);
}

#[test]
fn non_finite_gesture_values_are_rejected() {
    let app = test_app();

    let (status, body) = get_page(&app, &event("scale=1&x=NaN&y=inf", "kind=wheel&delta_y=-50"));
    assert_eq!(status, 400);
    assert!(!body.contains("NaNpx"));

    assert_eq!(get_page(&app, &event("scale=inf&x=0&y=0", "kind=click")).0, 400);
    assert_eq!(
        get_page(&app, &event("scale=1&x=0&y=0&touch_x=NaN&touch_y=0", "kind=touch-end")).0,
        400
    );
    assert_eq!(get_page(&app, &event("scale=1&x=0&y=0", "kind=wheel&delta_y=-inf")).0, 400);
    assert_eq!(get_page(&app, &event("scale=1&x=0&y=0", "kind=drag&tx=NaN&ty=0")).0, 400);
}

#[test]
fn tap_without_movement_closes_at_scale_one() {
    let app = test_app();

    let (_, body) = get_page(&app, &event("scale=1&x=0&y=0", "kind=drag-start&tx=40&ty=60"));
    assert!(body.contains("touch_x=40&amp;touch_y=60"));

    let (_, body) = get_page(
        &app,
        &event("scale=1&x=0&y=0&touch_x=40&touch_y=60", "kind=touch-end"),
    );
    assert!(body.contains("data-state=\"open\""));

    let (status, body) = get_page(&app, &event("scale=1&x=0&y=0", "kind=click"));
    assert_eq!(status, 200);
    assert_eq!(body, CLOSED);
}

#[test]
fn gesture_script_sends_taps_and_sums_queued_wheel_deltas() {
    let app = test_app();
    let (_, script) = get_page(&app, "/static/viewer.js");

    assert!(script.contains("last.delta_y += params.delta_y"));
    assert!(script.contains("send({ kind: \"click\" }, false)"));
}
