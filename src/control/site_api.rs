use crate::control::catalog::{load_view, CatalogParams};
use crate::control::Response;
use actix_web::get;
use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use noble_types::category::ProductSet;
use noble_types::company::{CompanyInfo, Feature, COMPANY, WHY_CHOOSE_US};
use noble_types::product::ProductRepository;
use noble_types::{CategorySet, CategorySummary, Product};
use serde::Serialize;
use std::sync::Arc;
use typesafe_repository::async_ops::List;

#[derive(Serialize)]
pub struct ProductsResponse<'a> {
    pub items: &'a [Product],
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub categories: Vec<CategorySummary>,
}

#[get("/api/products")]
pub async fn list_products(
    product_repo: Data<Arc<dyn ProductRepository>>,
    params: Query<CatalogParams>,
) -> Response {
    let view = load_view(product_repo.get_ref().as_ref(), &params).await?;
    Ok(HttpResponse::Ok().json(ProductsResponse {
        items: view.visible(),
        page: view.current_page(),
        page_size: view.page_size(),
        total_pages: view.total_pages(),
        filtered_count: view.filtered().len(),
        total_count: view.products().len(),
        categories: view.summaries(),
    }))
}

#[get("/api/categories")]
pub async fn list_categories(product_repo: Data<Arc<dyn ProductRepository>>) -> Response {
    let products = product_repo.list().await?;
    Ok(HttpResponse::Ok()
        .json(CategorySet::default().summarize(ProductSet::Loaded(&products))))
}

#[derive(Serialize)]
pub struct CompanyResponse {
    #[serde(flatten)]
    pub company: &'static CompanyInfo,
    pub why_choose_us: &'static [Feature],
}

#[get("/api/company")]
pub async fn company() -> Response {
    Ok(HttpResponse::Ok().json(CompanyResponse {
        company: &COMPANY,
        why_choose_us: &WHY_CHOOSE_US,
    }))
}
