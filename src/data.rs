use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub id: u64,
    #[serde(rename = "restaurant_name", default, deserialize_with = "de::lenient_string")]
    pub name: String,
    /// url to image
    #[serde(rename = "restaurant_image", default, deserialize_with = "de::lenient_image")]
    pub image: Option<String>,
    #[serde(rename = "restaurant_rating", default, deserialize_with = "de::lenient_rating")]
    pub rating: f64,
    /// country codes, e.g. `us`
    #[serde(rename = "restaurant_countries", default, deserialize_with = "de::one_or_many")]
    pub countries: Vec<String>,
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub menus: Vec<Menu>,
    #[serde(default, deserialize_with = "de::verbatim_string")]
    pub permalink: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(rename = "ID", default, deserialize_with = "de::lenient_id")]
    pub id: u64,
    #[serde(rename = "menu_name", default, deserialize_with = "de::lenient_string")]
    pub name: String,
    #[serde(rename = "menu_image", default, deserialize_with = "de::lenient_image")]
    pub image: Option<String>,
    #[serde(rename = "menu_price", default, deserialize_with = "de::lenient_price")]
    pub price: Option<f64>,
    #[serde(rename = "menu_details", default, deserialize_with = "de::lenient_list")]
    pub details: Vec<MenuDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDetail {
    #[serde(rename = "menu_price", default, deserialize_with = "de::lenient_price")]
    pub price: Option<f64>,
    /// may contain inline markup, rendered as text
    #[serde(rename = "menu_description", default, deserialize_with = "de::optional_string")]
    pub description: Option<String>,
    #[serde(rename = "menu_ingredients", default, deserialize_with = "de::one_or_many")]
    pub ingredients: Vec<String>,
    /// minutes
    #[serde(default, deserialize_with = "de::lenient_minutes")]
    pub prep_time: Option<u32>,
}

/// Custom fields of the current page plus its related restaurants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default, deserialize_with = "de::optional_string")]
    pub page_name: Option<String>,
    /// listing context
    #[serde(default, deserialize_with = "de::lenient_list")]
    pub restaurants: Vec<Restaurant>,
    /// detail context
    #[serde(default, deserialize_with = "de::lenient_object")]
    pub restaurant: Option<Restaurant>,
}

/// The data object injected into each page before rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WpData {
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub post_id: u64,
    #[serde(default, deserialize_with = "de::lenient_object")]
    #[serde(serialize_with = "serialize_page_data")]
    pub page_data: Option<PageData>,
    /// legacy duplicate of `pageData.restaurant`
    #[serde(default, deserialize_with = "de::lenient_object")]
    pub restaurant: Option<Restaurant>,
}

fn serialize_page_data<S>(page_data: &Option<PageData>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    page_data.clone().unwrap_or_default().serialize(s)
}

const SCRIPT_PREFIX: &str = "var WPData";

impl WpData {
    /// Parse page data; `null` or a non-object document counts as empty data.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("page data is not valid JSON")?;
        if !value.is_object() {
            tracing::warn!("page data is not an object, render as empty");
            return Ok(Self::default());
        }
        serde_json::from_value(value).context("fail to read page data")
    }

    /// Parse the localized script form, `var WPData = {...};`, or bare JSON.
    pub fn from_script(raw: &str) -> anyhow::Result<Self> {
        let raw = raw.trim();
        let Some(rest) = raw.strip_prefix(SCRIPT_PREFIX) else {
            return Self::from_json(raw);
        };
        let json = rest
            .trim_start()
            .strip_prefix('=')
            .with_context(|| format!("expect '=' after {SCRIPT_PREFIX}"))?;
        let json = json.trim().trim_end_matches(';');
        Self::from_json(json)
    }

    /// Detail-context data for one restaurant.
    pub fn for_restaurant(restaurant: Restaurant) -> Self {
        Self {
            post_id: restaurant.id,
            page_data: Some(PageData {
                restaurant: Some(restaurant.clone()),
                ..PageData::default()
            }),
            restaurant: Some(restaurant),
        }
    }

    pub fn page_name(&self) -> Option<&str> {
        self.page_data.as_ref()?.page_name.as_deref()
    }

    /// Listing restaurants, empty when absent.
    pub fn restaurants(&self) -> &[Restaurant] {
        self.page_data
            .as_ref()
            .map(|page| page.restaurants.as_slice())
            .unwrap_or_default()
    }

    /// The detail-context restaurant, falling back to the legacy top-level field.
    pub fn restaurant(&self) -> Option<&Restaurant> {
        self.page_data
            .as_ref()
            .and_then(|page| page.restaurant.as_ref())
            .or(self.restaurant.as_ref())
    }

    /// Look a restaurant up by id across both contexts.
    pub fn find_restaurant(&self, id: u64) -> Option<&Restaurant> {
        self.restaurants()
            .iter()
            .chain(self.restaurant())
            .find(|restaurant| restaurant.id == id)
    }
}
