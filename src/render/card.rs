use maud::{html, Markup};

use super::stars::{star_row, DEFAULT_TOTAL_STARS};
use crate::countries::country_name;
use crate::data::Restaurant;

const COUNTRY_SEPARATOR: &str = " | ";

/// Resolved country names joined for the card footer.
pub fn card_countries(restaurant: &Restaurant) -> String {
    restaurant
        .countries
        .iter()
        .map(|code| country_name(code))
        .collect::<Vec<_>>()
        .join(COUNTRY_SEPARATOR)
}

/// Summary card; the whole card links to the restaurant's permalink.
pub fn restaurant_card(restaurant: &Restaurant) -> Markup {
    html! {
        a href=(restaurant.permalink)
            class="w-64 h-96 bg-white border border-gray-300 rounded-lg overflow-hidden flex flex-col" {
            div class="h-3/5 w-full overflow-hidden" {
                @if let Some(src) = &restaurant.image {
                    img src=(src) alt=(restaurant.name) class="w-full h-full object-cover";
                }
            }
            div class="text-xl font-semibold p-4" { (restaurant.name) }
            (star_row("flex mb-2 ml-4", restaurant.rating, DEFAULT_TOTAL_STARS))
            div class="flex justify-between p-2" {
                div class="text-sm text-gray-600" { (card_countries(restaurant)) }
            }
        }
    }
}
