use chrono::Datelike;
use derive_builder::Builder;
use maud::{html, Markup, DOCTYPE};

pub const DEFAULT_SITE_TITLE: &str = "Restaurant App";
pub const DEFAULT_STYLESHEET: &str = "/bundled/css/index.css";

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Site-wide settings shared by every page document.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct LayoutOptions {
    #[builder(default = "DEFAULT_SITE_TITLE.to_string()")]
    pub site_title: String,
    #[builder(default = "DEFAULT_STYLESHEET.to_string()")]
    pub stylesheet: String,
    /// shown in the footer
    #[builder(default = "current_year()")]
    pub copyright_year: i32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            copyright_year: current_year(),
        }
    }
}

fn header(options: &LayoutOptions) -> Markup {
    html! {
        header class="bg-gray-800 text-white py-4" {
            div class="container mx-auto px-4 flex justify-between items-center" {
                a href="/" class="text-2xl font-bold" { (options.site_title) }
            }
        }
    }
}

fn footer(options: &LayoutOptions) -> Markup {
    html! {
        footer class="bg-gray-700 text-white py-6" {
            div class="container mx-auto px-4 text-center" {
                p {
                    "© " (options.copyright_year) " " (options.site_title) ". All rights reserved."
                }
            }
        }
    }
}

/// Wrap page content into a complete document mounted at `mount_id`.
pub fn layout(options: &LayoutOptions, title: Option<&str>, mount_id: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title.unwrap_or(&options.site_title)) }
                link rel="stylesheet" href=(options.stylesheet);
            }
            body {
                div id=(mount_id) {
                    div class="flex flex-col min-h-screen" {
                        (header(options))
                        main class="flex-grow" { (content) }
                        (footer(options))
                    }
                }
            }
        }
    }
}
