use crate::control::{render_template, ControllerError, Response};
use crate::csv::{export_products, EXPORT_FILE_NAME};
use crate::{empty_string_as_none, empty_string_as_none_parse};
use actix_web::get;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use askama::Template;
use noble_types::company::{CompanyInfo, COMPANY};
use noble_types::product::ProductRepository;
use noble_types::{CatalogView, CategorySummary, Product, ALL_CATEGORIES};
use serde::Deserialize;
use std::sync::Arc;
use typesafe_repository::async_ops::List;
use url::form_urlencoded;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none_parse")]
    pub page: Option<usize>,
}

impl CatalogParams {
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// Loads the products and applies the requested filters and page.
pub async fn load_view(
    repo: &dyn ProductRepository,
    params: &CatalogParams,
) -> Result<CatalogView, ControllerError> {
    let mut view = CatalogView::default();
    let ticket = view.begin_load();
    let items = repo.list().await?;
    view.finish_load(ticket, items);
    if let Some(category) = &params.category {
        view.set_category(category.to_lowercase());
    }
    if let Some(search) = params.search() {
        view.set_search(search);
    }
    if let Some(page) = params.page {
        if !view.go_to_page(page) {
            log::debug!("Page {page} out of range, showing page 1");
        }
    }
    Ok(view)
}

fn catalog_href(path: &str, search: &str, category: &str, page: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("q", search);
    }
    if !category.eq_ignore_ascii_case(ALL_CATEGORIES) {
        query.append_pair("category", category);
    }
    if page > 1 {
        query.append_pair("page", &page.to_string());
    }
    let query = query.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

pub struct CategoryButton {
    pub summary: CategorySummary,
    pub href: String,
    pub selected: bool,
}

pub struct ProductRow {
    pub number: usize,
    pub product: Product,
}

pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsPage {
    company: &'static CompanyInfo,
    search: String,
    category: String,
    total_count: usize,
    all_href: String,
    all_selected: bool,
    categories: Vec<CategoryButton>,
    rows: Vec<ProductRow>,
    showing: String,
    pages: Vec<PageLink>,
    prev_href: Option<String>,
    next_href: Option<String>,
    export_href: String,
}

fn showing_label(view: &CatalogView) -> String {
    match view.showing() {
        Some((first, last)) => {
            let mut label = format!(
                "Showing {first}-{last} of {} products",
                view.filtered().len()
            );
            if let Some(name) = view.category_name() {
                label.push_str(&format!(" in {name}"));
            }
            label
        }
        None => "No products found".to_string(),
    }
}

impl ProductsPage {
    fn new(view: &CatalogView) -> Self {
        let search = view.search().to_string();
        let category = view.category().to_string();
        let href = |category: &str, page: usize| catalog_href("/products", &search, category, page);
        let current = view.current_page();
        let categories = view
            .summaries()
            .into_iter()
            .map(|summary| CategoryButton {
                href: href(&summary.slug, 1),
                selected: summary.slug.eq_ignore_ascii_case(&category),
                summary,
            })
            .collect();
        let rows = view
            .visible()
            .iter()
            .enumerate()
            .map(|(i, product)| ProductRow {
                number: view.offset() + i + 1,
                product: product.clone(),
            })
            .collect();
        let pages = view
            .page_numbers()
            .into_iter()
            .map(|number| PageLink {
                number,
                href: href(&category, number),
                current: number == current,
            })
            .collect();
        let prev_href = (current > 1).then(|| href(&category, current - 1));
        let next_href = (current < view.total_pages()).then(|| href(&category, current + 1));
        Self {
            company: &COMPANY,
            total_count: view.products().len(),
            all_href: href(ALL_CATEGORIES, 1),
            all_selected: category.eq_ignore_ascii_case(ALL_CATEGORIES),
            categories,
            rows,
            showing: showing_label(view),
            pages,
            prev_href,
            next_href,
            export_href: catalog_href("/products/export.csv", &search, &category, 1),
            search,
            category,
        }
    }
}

#[get("/products")]
pub async fn products(
    product_repo: Data<Arc<dyn ProductRepository>>,
    params: Query<CatalogParams>,
) -> Response {
    let view = load_view(product_repo.get_ref().as_ref(), &params).await?;
    render_template(ProductsPage::new(&view))
}

#[get("/products/export.csv")]
pub async fn export_csv(
    product_repo: Data<Arc<dyn ProductRepository>>,
    params: Query<CatalogParams>,
) -> Response {
    let view = load_view(product_repo.get_ref().as_ref(), &params).await?;
    let body = export_products(view.filtered())?;
    Ok(HttpResponse::Ok()
        .content_type(mime::TEXT_CSV_UTF_8)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
        })
        .body(body))
}
