use maud::{Markup, html};

pub const APP_TITLE: &str = "Round Tracker";

#[must_use]
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="/static/styles.css";
            title { (title) }
        }
        body {
            h1 { (title) }
            nav {
                a href="/" { "Entry" }
                " | "
                a href="/stats" { "Stats" }
                " | "
                a href="/export" { "Export" }
            }
            (body)
        }
    }
}
