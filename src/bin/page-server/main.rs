use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use restaurant_pages::config::ServerConfig;

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let config = ServerConfig::from_env()?;
    let state = web::Data::new(routes::SiteState::load(&config).await?);
    tracing::info!(
        "serving {} restaurants from {}",
        state.restaurant_count(),
        config.data_path().display()
    );

    let origin = config.allowed_origin().to_string();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allowed_origin(&origin)
                    .allowed_methods(vec!["GET"]),
            )
            .app_data(state.clone())
            .service(routes::listing)
            .service(routes::detail)
            .service(routes::page_data)
            .service(routes::restaurants)
            .service(routes::restaurant)
    })
    .bind(config.addr())?
    .run()
    .await?;
    Ok(())
}
