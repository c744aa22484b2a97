//! Page assemblers: take the injected page data once and lay out a whole page.

use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use maud::{html, Markup};

use crate::data::{Restaurant, WpData};
use crate::render::{layout, restaurant_card, restaurant_detail, LayoutOptions};

pub const NO_RESTAURANTS_MESSAGE: &str = "No restaurants found.";

pub const LISTING_MOUNT: &str = "page";
pub const DETAIL_MOUNT: &str = "single-restaurants";

/// Restaurants whose name fuzzy matches `pattern`, in their original order.
/// A blank pattern keeps everything.
pub fn search_restaurants<'a>(restaurants: &'a [Restaurant], pattern: &str) -> Vec<&'a Restaurant> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return restaurants.iter().collect();
    }

    let matcher = SkimMatcherV2::default();
    restaurants
        .iter()
        .filter(|restaurant| matcher.fuzzy_match(&restaurant.name, pattern).is_some())
        .collect()
}

/// Card grid, or the empty-state message.
pub fn listing_view(restaurants: &[&Restaurant]) -> Markup {
    tracing::debug!("render listing with {} restaurants", restaurants.len());

    if restaurants.is_empty() {
        return html! {
            p class="text-red-400 text-center mt-6" { (NO_RESTAURANTS_MESSAGE) }
        };
    }

    html! {
        div class="max-w-4xl mx-auto p-6 bg-gray-200 shadow-lg rounded-lg min-h-screen overflow-y-auto" {
            div class="mt-6" {
                div class="mt-4 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6" {
                    @for restaurant in restaurants {
                        (restaurant_card(restaurant))
                    }
                }
            }
        }
    }
}

/// Listing document. Absent data renders as an empty listing.
pub fn listing_page(data: Option<&WpData>, options: &LayoutOptions) -> Markup {
    filtered_listing_page(data, "", options)
}

/// Listing document restricted to restaurants matching `pattern`.
pub fn filtered_listing_page(data: Option<&WpData>, pattern: &str, options: &LayoutOptions) -> Markup {
    let empty = WpData::default();
    let data = data.unwrap_or(&empty);
    let restaurants = search_restaurants(data.restaurants(), pattern);
    layout(options, data.page_name(), LISTING_MOUNT, listing_view(&restaurants))
}

/// Detail document for the page's restaurant.
pub fn detail_page(data: Option<&WpData>, options: &LayoutOptions) -> Markup {
    let restaurant = data.and_then(WpData::restaurant);
    tracing::debug!(
        "render detail for restaurant {:?}",
        restaurant.map(|r| r.id)
    );
    let title = restaurant.map(|r| r.name.as_str()).filter(|name| !name.is_empty());
    layout(options, title, DETAIL_MOUNT, restaurant_detail(restaurant))
}
