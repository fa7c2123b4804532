use crate::category::{CategorySet, CategorySummary, ProductSet};
use crate::product::Product;
use crate::ALL_CATEGORIES;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const PAGE_WINDOW: usize = 7;

/// Filters `products` by category and search term, keeping input order.
pub fn apply(products: &[Product], search: &str, category: &str) -> Vec<Product> {
    apply_with(&CategorySet::default(), products, search, category)
}

pub fn apply_with(
    categories: &CategorySet,
    products: &[Product],
    search: &str,
    category: &str,
) -> Vec<Product> {
    let search = search.to_lowercase();
    products
        .iter()
        .filter(|p| {
            category.eq_ignore_ascii_case(ALL_CATEGORIES)
                || categories.matches(&p.category, category)
        })
        .filter(|p| {
            search.is_empty()
                || p.product_name.to_lowercase().contains(&search)
                || p.end_product.to_lowercase().contains(&search)
                || p.cas_number.to_lowercase().contains(&search)
        })
        .cloned()
        .collect()
}

/// Slice for the 1-based `page`. Out of range input gives an empty slice.
pub fn page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = match (page - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Page numbers to offer as buttons: at most `width` pages around `current`.
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total <= width {
        return (1..=total).collect();
    }
    let half = width / 2;
    let first = if current <= half + 1 {
        1
    } else if current + half >= total {
        total + 1 - width
    } else {
        current - half
    };
    (first..first + width).collect()
}

/// Issued by [`CatalogView::begin_load`]; only the latest one is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// State of a single catalog view: loaded products, filters and current page.
#[derive(Debug, Clone)]
pub struct CatalogView {
    categories: CategorySet,
    products: Option<Vec<Product>>,
    filtered: Vec<Product>,
    search: String,
    category: String,
    page: usize,
    page_size: usize,
    issued: u64,
    loading: bool,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogView {
    pub fn new(page_size: usize) -> Self {
        Self::with_categories(CategorySet::default(), page_size)
    }

    pub fn with_categories(categories: CategorySet, page_size: usize) -> Self {
        Self {
            categories,
            products: None,
            filtered: vec![],
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            page: 1,
            page_size,
            issued: 0,
            loading: false,
        }
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.loading = true;
        LoadTicket(self.issued)
    }

    /// Installs `products` unless a newer load was started after `ticket`.
    pub fn finish_load(&mut self, ticket: LoadTicket, products: Vec<Product>) -> bool {
        if ticket.0 != self.issued {
            log::debug!(
                "Discarding catalog load {} superseded by {}",
                ticket.0,
                self.issued
            );
            return false;
        }
        self.loading = false;
        self.products = Some(products);
        self.refilter();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.products.is_some()
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.refilter();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.category = ALL_CATEGORIES.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = apply_with(
            &self.categories,
            self.products(),
            &self.search,
            &self.category,
        );
        self.page = 1;
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn visible(&self) -> &[Product] {
        page(&self.filtered, self.page, self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Offset of the first visible row within the filtered set.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// 1-based inclusive range of the visible rows.
    pub fn showing(&self) -> Option<(usize, usize)> {
        let visible = self.visible().len();
        if visible == 0 {
            return None;
        }
        Some((self.offset() + 1, self.offset() + visible))
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages(), PAGE_WINDOW)
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        let products = match &self.products {
            Some(products) => ProductSet::Loaded(products),
            None => ProductSet::NotLoaded,
        };
        self.categories.summarize(products)
    }

    /// Display name of the selected category, `None` for all categories.
    pub fn category_name(&self) -> Option<&'static str> {
        if self.category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return None;
        }
        self.categories.get(&self.category).map(|c| c.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, end_product: &str, cas: &str, category: &str) -> Product {
        Product::catalog_entry(id, name, end_product, cas, category, name.to_lowercase())
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "3-Acetyl Pyridine", "Imatinib & Nilotinib", "350-03-8", "Intermediate"),
            product(31, "Acetone", "Solvent for various processes", "67-64-1", "Solvent"),
            product(32, "Methanol", "Industrial solvent", "67-56-1", "Solvent"),
            product(46, "Paracetamol", "Analgesic and antipyretic", "103-90-2", "API"),
            product(49, "Amoxicillin", "Antibiotic", "26787-78-0", "API"),
            product(60, "Zeolite", "Drying agent", "1318-02-1", "Catalyst"),
        ]
    }

    fn numbered(n: usize) -> Vec<Product> {
        (1..=n as u64)
            .map(|i| product(i, &format!("Item {i}"), "N/A", "N/A", "API"))
            .collect()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    fn loaded(products: Vec<Product>) -> CatalogView {
        let mut view = CatalogView::default();
        let ticket = view.begin_load();
        assert!(view.finish_load(ticket, products));
        view
    }

    #[test]
    fn all_with_empty_search_is_identity() {
        let products = sample();
        assert_eq!(apply(&products, "", "all"), products);
    }

    #[test]
    fn all_matches_case_insensitively() {
        let products = sample();
        assert_eq!(apply(&products, "", "ALL"), products);
        assert_eq!(apply(&products, "", "All"), products);
        let mut view = loaded(sample());
        view.set_category("ALL");
        assert_eq!(view.filtered(), products.as_slice());
        assert_eq!(view.category_name(), None);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = sample();
        assert_eq!(ids(&apply(&products, "aceton", "all")), vec![31]);
        assert_eq!(ids(&apply(&products, "ANTIBIOTIC", "all")), vec![49]);
        assert_eq!(ids(&apply(&products, "67-", "all")), vec![31, 32]);
    }

    #[test]
    fn category_and_search_intersect() {
        let products = sample();
        assert_eq!(ids(&apply(&products, "", "solvents")), vec![31, 32]);
        assert_eq!(ids(&apply(&products, "a", "apis")), vec![46, 49]);
        assert_eq!(ids(&apply(&products, "acet", "apis")), vec![46]);
        assert_eq!(ids(&apply(&products, "acet", "solvents")), vec![31]);
        assert_eq!(ids(&apply(&products, "acet", "all")), vec![1, 31, 46]);
        assert_eq!(ids(&apply(&products, "zeolite", "apis")), Vec::<u64>::new());
    }

    #[test]
    fn uncategorized_products_only_show_under_all() {
        let products = sample();
        assert!(ids(&apply(&products, "", "all")).contains(&60));
        for slug in ["solvents", "intermediates", "apis"] {
            assert!(!ids(&apply(&products, "", slug)).contains(&60));
        }
        assert_eq!(ids(&apply(&products, "", "catalyst")), vec![60]);
    }

    #[test]
    fn apply_is_idempotent() {
        let products = sample();
        assert_eq!(
            apply(&products, "a", "apis"),
            apply(&products, "a", "apis")
        );
    }

    #[test]
    fn page_slices_and_clips() {
        let items: Vec<usize> = (0..45).collect();
        assert_eq!(page(&items, 1, 20), &items[0..20]);
        assert_eq!(page(&items, 3, 20), &items[40..45]);
        assert!(page(&items, 4, 20).is_empty());
        assert!(page(&items, 0, 20).is_empty());
        assert!(page(&items, usize::MAX, 20).is_empty());
        assert!(page(&items, 1, 0).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(0, 20), 0);
    }

    #[test]
    fn navigation_is_guarded() {
        let mut view = loaded(numbered(45));
        assert_eq!(view.total_pages(), 3);
        assert!(!view.prev_page());
        assert!(view.next_page());
        assert!(view.next_page());
        assert_eq!(view.current_page(), 3);
        assert!(!view.next_page());
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.visible().len(), 5);
        assert!(!view.go_to_page(4));
        assert!(!view.go_to_page(0));
        assert!(view.go_to_page(2));
        assert!(view.prev_page());
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let mut view = loaded(sample());
        view.set_search("no such product");
        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.current_page(), 1);
        assert!(view.visible().is_empty());
        assert_eq!(view.showing(), None);
        assert!(!view.go_to_page(1));
        assert!(!view.next_page());
        assert!(view.page_numbers().is_empty());
    }

    #[test]
    fn changing_filters_resets_page() {
        let mut view = loaded(numbered(45));
        assert!(view.go_to_page(3));
        view.set_category("apis");
        assert_eq!(view.current_page(), 1);

        assert!(view.go_to_page(2));
        view.set_search("Item");
        assert_eq!(view.current_page(), 1);

        assert!(view.go_to_page(3));
        view.clear_filters();
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.category(), "all");
    }

    #[test]
    fn showing_reports_global_positions() {
        let mut view = loaded(numbered(45));
        assert_eq!(view.showing(), Some((1, 20)));
        view.go_to_page(3);
        assert_eq!(view.showing(), Some((41, 45)));
        assert_eq!(view.offset(), 40);
    }

    #[test]
    fn page_window_follows_current_page() {
        assert_eq!(page_window(1, 3, 7), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10, 7), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(4, 10, 7), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(5, 10, 7), vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(page_window(7, 10, 7), vec![4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10, 7), vec![4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut view = CatalogView::default();
        let first = view.begin_load();
        let second = view.begin_load();
        assert!(view.is_loading());
        assert!(view.finish_load(second, sample()));
        assert!(!view.is_loading());
        assert!(!view.finish_load(first, numbered(3)));
        assert_eq!(view.products().len(), sample().len());
    }

    #[test]
    fn summaries_before_and_after_load() {
        let mut view = CatalogView::default();
        let counts = |view: &CatalogView| -> Vec<usize> {
            view.summaries().iter().map(|s| s.count).collect()
        };
        assert_eq!(counts(&view), vec![15, 25, 10]);
        let ticket = view.begin_load();
        view.finish_load(ticket, vec![]);
        assert_eq!(counts(&view), vec![0, 0, 0]);
        let ticket = view.begin_load();
        view.finish_load(ticket, sample());
        assert_eq!(counts(&view), vec![2, 1, 2]);
    }

    #[test]
    fn category_name_for_selection() {
        let mut view = loaded(sample());
        assert_eq!(view.category_name(), None);
        view.set_category("apis");
        assert_eq!(view.category_name(), Some("APIs"));
        view.set_category("catalyst");
        assert_eq!(view.category_name(), None);
    }
}
