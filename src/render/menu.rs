use maud::{html, Markup};

use super::format_price;
use crate::data::{Menu, MenuDetail};

pub const NO_DETAILS_MESSAGE: &str = "No additional details for this menu item.";

/// One block per detail, or the fallback message when there are none.
pub fn menu_details(details: &[MenuDetail]) -> Markup {
    html! {
        @if details.is_empty() {
            p class="text-gray-500 italic mt-2" { (NO_DETAILS_MESSAGE) }
        } @else {
            @for detail in details {
                div class="mt-4 p-3 border-t border-gray-200" {
                    @if let Some(price) = detail.price {
                        div class="mb-1 text-green-700 font-semibold" {
                            "Sub-price: $" (format_price(price))
                        }
                    }
                    @if let Some(description) = &detail.description {
                        p class="text-gray-600" { (description) }
                    }
                    @if !detail.ingredients.is_empty() {
                        div class="mt-2" {
                            h4 class="text-sm font-semibold text-gray-700" { "Ingredients:" }
                            p class="text-sm text-gray-500" { (detail.ingredients.join(", ")) }
                        }
                    }
                    @if let Some(minutes) = detail.prep_time {
                        div class="mt-1 text-sm text-gray-500" {
                            "Prep Time: " (minutes) " minutes"
                        }
                    }
                }
            }
        }
    }
}

pub fn menu_item(menu: &Menu) -> Markup {
    html! {
        div class="bg-white rounded-lg shadow-md overflow-hidden border border-gray-200" {
            @if let Some(src) = &menu.image {
                img src=(src) alt=(menu.name) class="w-full h-48 object-cover";
            }
            div class="p-4" {
                div class="flex justify-between items-start mb-2" {
                    h3 class="text-xl font-semibold" { (menu.name) }
                    @if let Some(price) = menu.price {
                        span class="text-lg font-medium text-green-600" {
                            "$" (format_price(price))
                        }
                    }
                }
                (menu_details(&menu.details))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(price: Option<f64>, prep_time: Option<u32>) -> MenuDetail {
        MenuDetail {
            price,
            prep_time,
            ..MenuDetail::default()
        }
    }

    #[test]
    fn test_empty_details_fallback() {
        let html = menu_details(&[]).into_string();
        assert!(html.contains(NO_DETAILS_MESSAGE));
        assert!(!html.contains("border-t"));
    }

    #[test]
    fn test_one_block_per_detail_in_order() {
        let details = vec![
            MenuDetail {
                description: Some("first".to_string()),
                ..MenuDetail::default()
            },
            MenuDetail {
                description: Some("second".to_string()),
                ingredients: vec!["rice".to_string(), "nori".to_string()],
                ..MenuDetail::default()
            },
        ];
        let html = menu_details(&details).into_string();
        assert_eq!(html.matches("mt-4 p-3 border-t").count(), 2);
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
        assert!(html.contains("rice, nori"));
        assert!(!html.contains(NO_DETAILS_MESSAGE));
    }

    #[test]
    fn test_optional_detail_lines() {
        let html = menu_details(&[detail(Some(3.5), Some(15))]).into_string();
        assert!(html.contains("Sub-price: $3.50"));
        assert!(html.contains("Prep Time: 15 minutes"));

        let html = menu_details(&[detail(None, None)]).into_string();
        assert!(!html.contains("Sub-price"));
        assert!(!html.contains("Prep Time"));
        assert!(!html.contains("Ingredients"));
    }

    #[test]
    fn test_zero_sub_price_hidden() {
        let detail: MenuDetail = serde_json::from_str(r#"{"menu_price": 0}"#).unwrap();
        let html = menu_details(&[detail]).into_string();
        assert!(!html.contains("Sub-price"));
    }

    #[test]
    fn test_price_ties_round_up() {
        let detail: MenuDetail = serde_json::from_str(r#"{"menu_price": 2.125}"#).unwrap();
        let html = menu_details(&[detail]).into_string();
        assert!(html.contains("Sub-price: $2.13"));

        let menu: Menu = serde_json::from_str(r#"{"menu_name": "Tea", "menu_price": 0.125}"#).unwrap();
        assert!(menu_item(&menu).into_string().contains("$0.13"));
    }

    #[test]
    fn test_description_is_escaped() {
        let detail = MenuDetail {
            description: Some("<b>spicy</b>".to_string()),
            ..MenuDetail::default()
        };
        let html = menu_details(&[detail]).into_string();
        assert!(html.contains("&lt;b&gt;spicy&lt;/b&gt;"));
    }

    #[test]
    fn test_menu_item_without_details_field() {
        let menu: Menu =
            serde_json::from_str(r#"{"ID": 1, "menu_name": "Udon", "menu_price": 8}"#).unwrap();
        let html = menu_item(&menu).into_string();
        assert!(html.contains("Udon"));
        assert!(html.contains("$8.00"));
        assert!(html.contains(NO_DETAILS_MESSAGE));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_menu_item_image() {
        let menu: Menu = serde_json::from_str(
            r#"{"ID": 1, "menu_name": "Udon", "menu_image": {"guid": "https://cdn/udon.jpg"}}"#,
        )
        .unwrap();
        let html = menu_item(&menu).into_string();
        assert!(html.contains(r#"src="https://cdn/udon.jpg""#));
        assert!(!html.contains("text-green-600"));
    }
}
