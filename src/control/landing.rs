use crate::control::{render_template, Response};
use actix_web::get;
use actix_web::web::Data;
use askama::Template;
use noble_types::category::{ProductSet, CANONICAL_CATEGORIES};
use noble_types::company::{CompanyInfo, Feature, COMPANY, WHY_CHOOSE_US};
use noble_types::product::ProductRepository;
use noble_types::{CategorySet, CategorySummary};
use std::sync::Arc;
use typesafe_repository::async_ops::List;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    company: &'static CompanyInfo,
    categories: Vec<CategorySummary>,
    features: &'static [Feature],
}

#[get("/")]
pub async fn index(product_repo: Data<Arc<dyn ProductRepository>>) -> Response {
    let products = product_repo.list().await?;
    render_template(IndexPage {
        company: &COMPANY,
        categories: CategorySet::default().summarize(ProductSet::Loaded(&products)),
        features: &WHY_CHOOSE_US,
    })
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    company: &'static CompanyInfo,
    features: &'static [Feature],
    category_count: usize,
}

#[get("/about")]
pub async fn about() -> Response {
    render_template(AboutPage {
        company: &COMPANY,
        features: &WHY_CHOOSE_US,
        category_count: CANONICAL_CATEGORIES.len(),
    })
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    company: &'static CompanyInfo,
}

#[get("/contact")]
pub async fn contact() -> Response {
    render_template(ContactPage { company: &COMPANY })
}
