use actix_web::middleware::{DefaultHeaders, Logger, NormalizePath, TrailingSlash};
use actix_web::web::{self, Data, QueryConfig};
use actix_web::{App, HttpServer};
use anyhow::Context as AnyhowContext;
use noble_site::config::SiteConfig;
use noble_site::control::{self, ControllerError};
use noble_site::fallback::BuiltinProducts;
use noble_site::wordpress::WordPressProductRepository;
use noble_types::product::ProductRepository;
use reqwest::header::{HeaderMap, HeaderValue};
use std::env;
use std::sync::Arc;

static DEFAULT_ACCEPT_ENCODING: &str = "br;q=1.0, gzip;q=0.6, deflate;q=0.4, *;q=0.2";

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    if let Err(env::VarError::NotPresent) = env::var("RUST_LOG") {
        env::set_var("RUST_LOG", "INFO");
    }
    pretty_env_logger::formatted_timed_builder()
        .parse_default_env()
        .init();

    match std::fs::File::open(".env") {
        Ok(_) => envmnt::load_file(".env")?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            std::fs::File::create(".env")?;
            envmnt::load_file(".env")?;
        }
        Err(err) => {
            return Err(anyhow::anyhow!("Unable to open .env file: {err}"));
        }
    }

    let config = SiteConfig::from_env()?;
    match &config.wp_url {
        Some(url) => log::info!("Reading products from {url}"),
        None => log::info!("WP_URL not set, serving builtin products"),
    }

    let mut headers = HeaderMap::new();
    headers.append(
        reqwest::header::ACCEPT_ENCODING,
        HeaderValue::from_str(DEFAULT_ACCEPT_ENCODING)?,
    );
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(config.request_timeout)
        .build()
        .context("Unable to build HTTP client")?;

    let product_repository: Arc<dyn ProductRepository> = Arc::new(WordPressProductRepository::new(
        client,
        config.wp_url.clone(),
        Arc::new(BuiltinProducts),
        config.cache_ttl,
    )?);

    let addr = (config.bind_addr.clone(), config.port);
    log::info!("Listening on {}:{}", addr.0, addr.1);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .app_data(QueryConfig::default().error_handler(|err, _| {
                ControllerError::InvalidInput {
                    field: "query".to_string(),
                    msg: err.to_string(),
                }
                .into()
            }))
            .app_data(Data::new(product_repository.clone()))
            .service(actix_files::Files::new("/static", "static"))
            .service(control::landing::index)
            .service(control::landing::about)
            .service(control::landing::contact)
            .service(control::catalog::export_csv)
            .service(control::catalog::products)
            .service(control::site_api::list_products)
            .service(control::site_api::list_categories)
            .service(control::site_api::company)
            .default_service(web::to(control::not_found))
    })
    .bind(addr)
    .context("Unable to bind server")?
    .run()
    .await?;
    Ok(())
}
