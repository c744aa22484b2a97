use maud::{html, Markup};

use super::menu::menu_item;
use super::stars::{star_rating, DEFAULT_TOTAL_STARS};
use crate::data::Restaurant;

pub const NO_RESTAURANT_MESSAGE: &str = "No restaurant data found.";
pub const NO_MENU_MESSAGE: &str = "No menu items available.";

// Unlike the card, the detail view lists the raw codes.
const COUNTRY_SEPARATOR: &str = ", ";

/// Full restaurant page body, or the empty state when there is no restaurant.
pub fn restaurant_detail(restaurant: Option<&Restaurant>) -> Markup {
    let Some(restaurant) = restaurant else {
        return html! {
            div class="max-w-xl mx-auto p-4 text-center" {
                p class="text-red-500 text-lg" { (NO_RESTAURANT_MESSAGE) }
            }
        };
    };

    html! {
        div class="max-w-4xl mx-auto mt-10 p-6 bg-white rounded shadow" {
            h1 class="text-4xl font-bold mb-4 text-center" { (restaurant.name) }
            @if let Some(src) = &restaurant.image {
                div class="mb-6 flex justify-center" {
                    img src=(src) alt=(restaurant.name)
                        class="w-full max-w-2xl h-60 object-cover rounded";
                }
            }
            div class="text-lg mb-6 space-y-2" {
                (star_rating(restaurant.rating, DEFAULT_TOTAL_STARS))
                p {
                    span class="font-semibold" { "Countries:" }
                    " " (restaurant.countries.join(COUNTRY_SEPARATOR))
                }
            }
            @if restaurant.menus.is_empty() {
                p class="text-gray-500 italic mt-2" { (NO_MENU_MESSAGE) }
            } @else {
                div class="mt-8" {
                    h2 class="text-2xl font-semibold mb-6" { "Our Menu" }
                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                        @for menu in &restaurant.menus {
                            (menu_item(menu))
                        }
                    }
                }
            }
        }
    }
}
