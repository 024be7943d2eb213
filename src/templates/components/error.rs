use maud::{html, Markup};

/// Body of an HTML error page.
pub fn error_body(status: u16, message: &str) -> Markup {
    html! {
        main class="error" {
            h1 { "Error " (status) }
            p { (message) }
            p { a href="/" { "← 返回首页" } }
        }
    }
}
