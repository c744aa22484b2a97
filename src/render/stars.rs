use maud::{html, Markup};

pub const DEFAULT_TOTAL_STARS: usize = 5;

const FILLED: &str = "text-yellow-500 text-2xl";
const EMPTY: &str = "text-gray-300 text-2xl";

/// One entry per star, `true` when filled.
///
/// Star `i` is filled iff `i < rating`, so a negative rating leaves every star
/// empty and a rating above `total_stars` fills all of them.
pub fn star_states(rating: f64, total_stars: usize) -> Vec<bool> {
    (0..total_stars).map(|index| (index as f64) < rating).collect()
}

pub(crate) fn star_row(class: &str, rating: f64, total_stars: usize) -> Markup {
    html! {
        div class=(class) {
            @for filled in star_states(rating, total_stars) {
                @let class = if filled { FILLED } else { EMPTY };
                span class=(class) { "★" }
            }
        }
    }
}

/// Centered star rating.
pub fn star_rating(rating: f64, total_stars: usize) -> Markup {
    star_row("flex justify-center", rating, total_stars)
}
