use crate::domain::{listing::or_na, UnitType};
use crate::images::image_src;
use crate::store::Filter;
use crate::templates::components::carousel::image_fallback;
use crate::templates::urls::viewer_event_url;
use crate::viewer::{Lightbox, LightboxState};
use maud::{html, Markup};

fn transform(lightbox: &Lightbox) -> String {
    let offset = lightbox.offset();
    format!(
        "transform: translate({}px, {}px) scale({});",
        offset.x,
        offset.y,
        lightbox.scale()
    )
}

fn state_name(state: LightboxState) -> &'static str {
    match state {
        LightboxState::Closed => "closed",
        LightboxState::OpenAtScaleOne => "open",
        LightboxState::OpenZoomed => "zoomed",
    }
}

/// The overlay. Always renders the `#lightbox` container so later events have
/// a swap target; it is empty while closed or when `photo` is missing.
pub fn lightbox(lightbox: &Lightbox, photo: Option<&UnitType>, unit_type: &Filter) -> Markup {
    let event_url = viewer_event_url(lightbox, unit_type);

    match (event_url, photo) {
        (Some(event_url), Some(photo)) => {
            let click_url = format!("{event_url}&kind=click");
            let close_url = format!("{event_url}&kind=close");

            html! {
                div
                    id="lightbox"
                    class="lightbox-backdrop"
                    data-state=(state_name(lightbox.state()))
                    data-event-url=(event_url)
                {
                    div class={ "lightbox-dialog " (lightbox.modal_size().css_class()) } {
                        button
                            type="button"
                            class="lightbox-close"
                            aria-label="关闭"
                            hx-get=(close_url)
                            hx-target="#lightbox"
                            hx-swap="outerHTML"
                        { "×" }

                        div class="lightbox-stage" {
                            img
                                class="lightbox-image"
                                src=(image_src(photo))
                                alt=(photo.name)
                                draggable="false"
                                style=(transform(lightbox))
                                onerror=(image_fallback())
                                hx-get=(click_url)
                                hx-target="#lightbox"
                                hx-swap="outerHTML";
                        }

                        div class="lightbox-caption" {
                            strong { (photo.name) }
                            " · " (or_na(photo.area.as_deref()))
                            " · " (or_na(photo.price.as_deref()))
                        }
                    }
                }
            }
        }
        _ => html! { div id="lightbox" {} },
    }
}
