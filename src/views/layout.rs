use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href=(names::STYLESHEET_URL);
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                a href=(names::QUESTIONNAIRE_URL) {
                    strong { "Screener" }
                }
                small { (utils::VERSION) }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light";

                (css())

                title { (format!("{title} - Screener")) }
            }

            body {
                (header())
                (main(body))
            }
        }
    }
}
