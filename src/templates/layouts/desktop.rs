use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, scrape_time: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {}
                script src="/static/viewer.js" defer {}
            }
            body {
                header class="page-header" {
                    h1 { (title) }
                    @if let Some(time) = scrape_time {
                        p class="scrape-time" { "数据更新时间: " (time) }
                    }
                }
                main class="container" {
                    (content)
                }
                div id="lightbox" {}
            }
        }
    }
}
