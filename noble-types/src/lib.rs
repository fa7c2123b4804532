pub mod catalog;
pub mod category;
pub mod company;
pub mod product;

pub use catalog::{CatalogView, LoadTicket};
pub use category::{normalize, CategoryDef, CategorySet, CategorySummary, ProductSet};
pub use product::Product;

/// Slug selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Label assigned to records that arrive without a category.
pub const DEFAULT_CATEGORY_LABEL: &str = "Intermediate";

/// Placeholder for text fields missing from a record.
pub const NOT_AVAILABLE: &str = "N/A";
