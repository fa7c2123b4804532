use crate::product::Product;
use derive_more::Display;
use serde::Serialize;

/// Canonical catalog category.
///
/// `slug` is the plural form used for filtering and routing, `singular` the
/// alternative spelling accepted on product records. A category without a
/// singular form only matches its slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    pub name: &'static str,
    pub slug: &'static str,
    pub singular: Option<&'static str>,
    pub description: &'static str,
    /// Count shown before any products are loaded.
    pub default_count: usize,
}

pub static CANONICAL_CATEGORIES: [CategoryDef; 3] = [
    CategoryDef {
        name: "Solvents",
        slug: "solvents",
        singular: Some("solvent"),
        description: "High-quality chemical solvents for pharmaceutical applications",
        default_count: 15,
    },
    CategoryDef {
        name: "Intermediates",
        slug: "intermediates",
        singular: Some("intermediate"),
        description: "API intermediates for pharmaceutical manufacturing",
        default_count: 25,
    },
    CategoryDef {
        name: "APIs",
        slug: "apis",
        singular: Some("api"),
        description: "Active Pharmaceutical Ingredients",
        default_count: 10,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("{name} ({count})")]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub count: usize,
}

/// Products as seen by [`CategorySet::summarize`].
///
/// `NotLoaded` and `Loaded(&[])` are different things: the first yields the
/// static default counts, the second yields zeros.
#[derive(Debug, Clone, Copy)]
pub enum ProductSet<'a> {
    NotLoaded,
    Loaded(&'a [Product]),
}

#[derive(Debug, Clone, Copy)]
pub struct CategorySet {
    defs: &'static [CategoryDef],
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(&CANONICAL_CATEGORIES)
    }
}

impl CategorySet {
    pub const fn new(defs: &'static [CategoryDef]) -> Self {
        Self { defs }
    }

    pub fn defs(&self) -> &'static [CategoryDef] {
        self.defs
    }

    pub fn get(&self, slug: &str) -> Option<&'static CategoryDef> {
        let slug = slug.to_lowercase();
        self.defs.iter().find(|c| c.slug.to_lowercase() == slug)
    }

    /// Whether a free-text category label belongs to the category `slug`.
    pub fn matches(&self, raw: &str, slug: &str) -> bool {
        let raw = raw.to_lowercase();
        let slug = slug.to_lowercase();
        match self.get(&slug).and_then(|c| c.singular.map(|s| (s, c.slug))) {
            Some((singular, plural)) => raw == singular.to_lowercase() || raw == plural.to_lowercase(),
            None => raw == slug,
        }
    }

    /// Labels matching no configured category are left out of every count.
    pub fn summarize(&self, products: ProductSet<'_>) -> Vec<CategorySummary> {
        self.defs
            .iter()
            .map(|c| CategorySummary {
                name: c.name.to_string(),
                slug: c.slug.to_string(),
                description: c.description.to_string(),
                count: match products {
                    ProductSet::NotLoaded => c.default_count,
                    ProductSet::Loaded(products) => products
                        .iter()
                        .filter(|p| self.matches(&p.category, c.slug))
                        .count(),
                },
            })
            .collect()
    }
}

pub fn normalize(raw: &str, slug: &str) -> bool {
    CategorySet::default().matches(raw, slug)
}

pub fn summarize(products: ProductSet<'_>) -> Vec<CategorySummary> {
    CategorySet::default().summarize(products)
}
