//! HTML components. Every function here is a pure mapping from data to markup.

pub mod card;
pub mod detail;
pub mod layout;
pub mod menu;
pub mod stars;

pub use card::restaurant_card;
pub use detail::restaurant_detail;
pub use layout::{layout, LayoutOptions, LayoutOptionsBuilder};
pub use menu::{menu_details, menu_item};
pub use stars::{star_rating, star_states, DEFAULT_TOTAL_STARS};

/// Two decimal places, the way prices are shown everywhere. Ties round away
/// from zero, so 2.125 shows as 2.13.
pub(crate) fn format_price(price: f64) -> String {
    format!("{:.2}", (price * 100.0).round() / 100.0)
}
