use actix_web::{http::header::ContentType, HttpResponse};
use anyhow::anyhow;
use askama::Template;
use derive_more::{Display, Error};
use log_error::LogError;
use noble_types::company::{CompanyInfo, COMPANY};

pub mod catalog;
pub mod landing;
pub mod site_api;

pub type Response = Result<HttpResponse, ControllerError>;

#[derive(Debug, Display, Error)]
pub enum ControllerError {
    NotFound,
    #[error(ignore)]
    InternalServerError(anyhow::Error),
    #[error(ignore)]
    #[display("Invalid field {field}")]
    InvalidInput { field: String, msg: String },
}

impl From<anyhow::Error> for ControllerError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalServerError(err)
    }
}

impl From<serde_json::Error> for ControllerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InternalServerError(err.into())
    }
}

impl actix_web::error::ResponseError for ControllerError {
    fn error_response(&self) -> HttpResponse {
        log::warn!("{self:?}\n");
        use ControllerError::*;
        match self {
            NotFound => NotFoundPage { company: &COMPANY }
                .render()
                .log_error("Unable to render error template")
                .map(|res| {
                    HttpResponse::NotFound()
                        .content_type(ContentType::html())
                        .body(res)
                })
                .unwrap_or_else(|| HttpResponse::NotFound().body(())),
            InternalServerError(err) => InternalServerErrorPage {
                company: &COMPANY,
                error: format!("{err:?}"),
            }
            .render()
            .log_error("Unable to render error template")
            .map(|res| {
                HttpResponse::InternalServerError()
                    .content_type(ContentType::html())
                    .body(res)
            })
            .unwrap_or_else(|| HttpResponse::InternalServerError().body(err.to_string())),
            InvalidInput { field, msg } => {
                HttpResponse::BadRequest().body(format!("{field}\n{msg}"))
            }
        }
    }
}

#[derive(Template)]
#[template(path = "500.html")]
pub struct InternalServerErrorPage {
    company: &'static CompanyInfo,
    error: String,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage {
    company: &'static CompanyInfo,
}

pub async fn not_found() -> Response {
    Err(ControllerError::NotFound)
}

pub fn render_template(t: impl Template) -> Result<HttpResponse, ControllerError> {
    let result = t
        .render()
        .map_err(|x| ControllerError::InternalServerError(anyhow!(x)))?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(result))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::fallback::{BuiltinProducts, DefaultProducts};
    use crate::wordpress::WordPressProductRepository;
    use noble_types::product::ProductRepository;
    use noble_types::Product;
    use std::sync::Arc;
    use std::time::Duration;

    fn offline_repository(fallback: Arc<dyn DefaultProducts>) -> Arc<dyn ProductRepository> {
        Arc::new(
            WordPressProductRepository::new(
                reqwest::Client::new(),
                None,
                fallback,
                Duration::from_secs(60),
            )
            .expect("repository"),
        )
    }

    /// Two solvents, one API, one intermediate and one uncategorized product.
    pub fn fixture_repository() -> Arc<dyn ProductRepository> {
        offline_repository(Arc::new(vec![
            Product::catalog_entry(1, "3-Acetyl Pyridine", "Imatinib & Nilotinib", "350-03-8", "Intermediate", "3-acetyl-pyridine"),
            Product::catalog_entry(31, "Acetone", "Solvent for various processes", "67-64-1", "Solvent", "acetone"),
            Product::catalog_entry(32, "Methanol", "Industrial solvent", "67-56-1", "solvents", "methanol"),
            Product::catalog_entry(46, "Paracetamol", "Analgesic and antipyretic", "103-90-2", "API", "paracetamol"),
            Product::catalog_entry(60, "Zeolite", "Drying agent", "1318-02-1", "Catalyst", "zeolite"),
        ]))
    }

    pub fn builtin_repository() -> Arc<dyn ProductRepository> {
        offline_repository(Arc::new(BuiltinProducts))
    }
}
