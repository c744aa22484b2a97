use actix_web::{http::header::ContentType, web, HttpResponse};
use anyhow::Context;
use maud::Markup;
use restaurant_pages::{
    config::ServerConfig,
    data::WpData,
    page,
    render::LayoutOptions,
};

/// Page data snapshot, read once at startup and never mutated.
pub(super) struct SiteState {
    data: WpData,
    layout: LayoutOptions,
}

impl SiteState {
    pub(super) async fn load(config: &ServerConfig) -> anyhow::Result<Self> {
        let path = config.data_path();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("fail to read page data from {}", path.display()))?;
        let data = WpData::from_script(&raw)
            .with_context(|| format!("fail to parse page data from {}", path.display()))?;
        Ok(Self::new(data, config.layout().clone()))
    }

    pub(super) fn new(data: WpData, layout: LayoutOptions) -> Self {
        Self { data, layout }
    }

    pub(super) fn restaurant_count(&self) -> usize {
        self.data.restaurants().len()
    }
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

fn html_response(mut builder: actix_web::HttpResponseBuilder, page: Markup) -> HttpResponse {
    builder.content_type(ContentType::html()).body(page.into_string())
}

#[derive(serde::Deserialize)]
pub(super) struct ListingQuery {
    #[serde(default)]
    q: String,
}

#[actix_web::get("/")]
pub(super) async fn listing(
    state: web::Data<SiteState>,
    query: web::Query<ListingQuery>,
) -> HttpResponse {
    let page = page::filtered_listing_page(Some(&state.data), &query.q, &state.layout);
    html_response(HttpResponse::Ok(), page)
}

#[derive(serde::Deserialize)]
pub(super) struct RestaurantPath {
    id: u64,
}

#[actix_web::get("/restaurant/{id}")]
pub(super) async fn detail(
    state: web::Data<SiteState>,
    path: web::Path<RestaurantPath>,
) -> HttpResponse {
    match state.data.find_restaurant(path.id) {
        Some(found) => {
            let data = WpData::for_restaurant(found.clone());
            html_response(HttpResponse::Ok(), page::detail_page(Some(&data), &state.layout))
        }
        None => {
            tracing::info!("no restaurant with id {}", path.id);
            html_response(HttpResponse::NotFound(), page::detail_page(None, &state.layout))
        }
    }
}

#[actix_web::get("/api/v1/page-data")]
pub(super) async fn page_data(state: web::Data<SiteState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.data)
}

#[actix_web::get("/api/v1/restaurants")]
pub(super) async fn restaurants(state: web::Data<SiteState>) -> HttpResponse {
    HttpResponse::Ok().json(state.data.restaurants())
}

#[actix_web::get("/api/v1/restaurants/{id}")]
pub(super) async fn restaurant(
    state: web::Data<SiteState>,
    path: web::Path<RestaurantPath>,
) -> HttpResponse {
    match state.data.find_restaurant(path.id) {
        Some(found) => HttpResponse::Ok().json(found),
        None => HttpResponse::NotFound().json(ErrJsonResp {
            message: format!("no restaurant with id {}", path.id),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use restaurant_pages::render::LayoutOptionsBuilder;

    const SITE: &str = include_str!("../../../fixtures/site.json");

    fn state() -> web::Data<SiteState> {
        let layout = LayoutOptionsBuilder::default()
            .copyright_year(2024)
            .build()
            .unwrap();
        web::Data::new(SiteState::new(WpData::from_json(SITE).unwrap(), layout))
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(state())
                    .service(listing)
                    .service(detail)
                    .service(page_data)
                    .service(restaurants)
                    .service(restaurant),
            )
            .await
        };
    }

    async fn body_of(resp: actix_web::dev::ServiceResponse) -> String {
        let body = test::read_body(resp).await;
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_listing_page() {
        let app = app!();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_of(resp).await;
        assert!(body.contains("Sushi Ginza"));
        assert!(body.contains("Trattoria Roma"));
        assert!(body.contains("Italy | France"));
    }

    #[actix_web::test]
    async fn test_listing_search() {
        let app = app!();
        let req = test::TestRequest::get().uri("/?q=roma").to_request();
        let body = body_of(test::call_service(&app, req).await).await;
        assert!(body.contains("Trattoria Roma"));
        assert!(!body.contains("Sushi Ginza"));
    }

    #[actix_web::test]
    async fn test_detail_page() {
        let app = app!();
        let req = test::TestRequest::get().uri("/restaurant/102").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_of(resp).await;
        assert!(body.contains("Taqueria La Luz"));
        assert!(body.contains("Tacos al Pastor"));
        assert!(body.contains("Sub-price: $3.00"));
        assert!(body.contains("Prep Time: 15 minutes"));
    }

    #[actix_web::test]
    async fn test_unknown_restaurant() {
        let app = app!();
        let req = test::TestRequest::get().uri("/restaurant/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_of(resp).await.contains("No restaurant data found."));

        let req = test::TestRequest::get().uri("/api/v1/restaurants/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_of(resp).await.contains("no restaurant with id 999"));
    }

    #[actix_web::test]
    async fn test_json_api() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/v1/restaurants/102").to_request();
        let body = body_of(test::call_service(&app, req).await).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["restaurant_name"], "Taqueria La Luz");
        assert_eq!(value["restaurant_countries"], serde_json::json!(["mx"]));

        let req = test::TestRequest::get().uri("/api/v1/page-data").to_request();
        let body = body_of(test::call_service(&app, req).await).await;
        let data = WpData::from_json(&body).unwrap();
        assert_eq!(data.restaurants().len(), 5);
        assert_eq!(data.post_id, 12);
    }
}
