use crate::{DEFAULT_CATEGORY_LABEL, NOT_AVAILABLE};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use typesafe_repository::async_ops::{List, Select};
use typesafe_repository::macros::Id;
use typesafe_repository::prelude::*;
use typesafe_repository::{SelectBy, Selector};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Id)]
pub struct Product {
    #[id]
    pub id: u64,
    pub display_title: String,
    pub product_name: String,
    pub end_product: String,
    pub cas_number: String,
    pub category: String,
    pub slug: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Product {
    /// Published catalog product whose display title is its name.
    pub fn catalog_entry(
        id: u64,
        name: impl Into<String>,
        end_product: impl Into<String>,
        cas_number: impl Into<String>,
        category: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id,
            display_title: name.clone(),
            product_name: name,
            end_product: end_product.into(),
            cas_number: cas_number.into(),
            category: category.into(),
            slug: slug.into(),
            status: "publish".to_string(),
            kind: "product".to_string(),
        }
    }
}

/// Selects products whose category normalizes to the given slug.
pub struct ByCategory(pub String);

impl Selector for ByCategory {}
impl SelectBy<ByCategory> for Product {}

#[async_trait]
pub trait ProductRepository:
    Repository<Product, Error = anyhow::Error>
    + List<Product>
    + Select<Product, ByCategory>
    + Send
    + Sync
{
}

/// Product record as served by `/wp-json/wp/v2/products`.
///
/// Every field is optional and wrongly typed values fall back to defaults, so
/// one odd record never spoils the listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WpProduct {
    #[serde(default, deserialize_with = "de_lenient_u64")]
    pub id: u64,
    #[serde(default)]
    pub title: WpRendered,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub status: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "de_opt_string")]
    pub kind: Option<String>,
    #[serde(default)]
    pub meta: WpFields,
    #[serde(default)]
    pub acf: WpFields,
}

#[derive(Debug, Clone, Default)]
pub struct WpRendered {
    pub rendered: String,
}

impl<'de> Deserialize<'de> for WpRendered {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RenderedOrOther {
            Rendered {
                #[serde(default, deserialize_with = "de_opt_string")]
                rendered: Option<String>,
            },
            Text(String),
            Other(serde_json::Value),
        }
        Ok(match RenderedOrOther::deserialize(deserializer)? {
            RenderedOrOther::Rendered { rendered } => WpRendered {
                rendered: rendered.unwrap_or_default(),
            },
            RenderedOrOther::Text(rendered) => WpRendered { rendered },
            RenderedOrOther::Other(_) => WpRendered::default(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFields {
    #[serde(default, deserialize_with = "de_opt_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub end_product: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub cas_number: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub category: Option<String>,
}

/// `meta`/`acf` block. WordPress sends `[]` or `false` instead of an object
/// when nothing is registered, those end up as empty fields.
#[derive(Debug, Clone, Default)]
pub struct WpFields(pub ProductFields);

impl<'de> Deserialize<'de> for WpFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FieldsOrOther {
            Fields(ProductFields),
            Other(serde_json::Value),
        }
        Ok(match FieldsOrOther::deserialize(deserializer)? {
            FieldsOrOther::Fields(f) => WpFields(f),
            FieldsOrOther::Other(_) => WpFields::default(),
        })
    }
}

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(v.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
    .filter(|s| !s.is_empty()))
}

fn de_lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(serde_json::Value::Number(n)) => n.as_u64().unwrap_or_default(),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

impl WpProduct {
    fn field(&self, f: impl Fn(&ProductFields) -> &Option<String>) -> Option<String> {
        f(&self.meta.0).clone().or_else(|| f(&self.acf.0).clone())
    }

    pub fn into_product(self, default_category: &str) -> Product {
        let product_name = self
            .field(|f| &f.product_name)
            .unwrap_or_else(|| self.title.rendered.clone());
        let end_product = self
            .field(|f| &f.end_product)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let cas_number = self
            .field(|f| &f.cas_number)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let category = self
            .field(|f| &f.category)
            .unwrap_or_else(|| default_category.to_string());
        Product {
            id: self.id,
            display_title: self.title.rendered,
            product_name,
            end_product,
            cas_number,
            category,
            slug: self.slug.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
        }
    }
}

impl From<WpProduct> for Product {
    fn from(p: WpProduct) -> Self {
        p.into_product(DEFAULT_CATEGORY_LABEL)
    }
}

/// Parses a products listing. Anything other than a JSON array is an error,
/// array entries that are not objects are skipped.
pub fn parse_wp_products(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<WpProduct>(record) {
            Ok(record) => Some(Product::from(record)),
            Err(err) => {
                log::warn!("Skipping unreadable product record: {err}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_meta_fields() {
        let products = parse_wp_products(
            r#"[{
                "id": 31,
                "title": {"rendered": "Acetone"},
                "slug": "acetone",
                "status": "publish",
                "type": "product",
                "meta": {
                    "product_name": "Acetone",
                    "end_product": "Solvent for various processes",
                    "cas_number": "67-64-1",
                    "category": "Solvent"
                }
            }]"#,
        )
        .expect("valid listing");
        assert_eq!(
            products,
            vec![Product::catalog_entry(
                31,
                "Acetone",
                "Solvent for various processes",
                "67-64-1",
                "Solvent",
                "acetone"
            )]
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let products = parse_wp_products(
            r#"[{"id": 7, "title": {"rendered": "4-Aminopyridine"}, "slug": "4-aminopyridine", "meta": []}]"#,
        )
        .expect("valid listing");
        let p = &products[0];
        assert_eq!(p.product_name, "4-Aminopyridine");
        assert_eq!(p.display_title, "4-Aminopyridine");
        assert_eq!(p.end_product, "N/A");
        assert_eq!(p.cas_number, "N/A");
        assert_eq!(p.category, "Intermediate");
        assert_eq!(p.status, "");
    }

    #[test]
    fn acf_fills_gaps_left_by_meta() {
        let products = parse_wp_products(
            r#"[{
                "id": 46,
                "title": {"rendered": "Paracetamol"},
                "meta": {"product_name": "", "category": "API"},
                "acf": {"product_name": "Paracetamol BP", "cas_number": 10390, "category": "Solvent"}
            }]"#,
        )
        .expect("valid listing");
        let p = &products[0];
        assert_eq!(p.product_name, "Paracetamol BP");
        assert_eq!(p.cas_number, "10390");
        assert_eq!(p.category, "API");
    }

    #[test]
    fn non_object_field_blocks_are_empty() {
        let products =
            parse_wp_products(r#"[{"id": 1, "title": {"rendered": "X"}, "meta": false, "acf": []}]"#)
                .expect("valid listing");
        assert_eq!(products[0].product_name, "X");
        assert_eq!(products[0].category, "Intermediate");
    }

    #[test]
    fn wrongly_typed_fields_default_without_dropping_records() {
        let products = parse_wp_products(
            r#"[
                {"id": 1, "title": {"rendered": "Acetone"}, "meta": {"category": "Solvent"}},
                {"id": 2, "title": {"rendered": "Methanol"}, "status": 5, "slug": 7},
                {"id": "3", "title": "Ethanol", "type": null},
                {"id": {"raw": 4}, "title": 12, "status": ["publish"]},
                "not a record"
            ]"#,
        )
        .expect("valid listing");
        assert_eq!(ids(&products), vec![1, 2, 3, 0]);
        assert_eq!(products[0].category, "Solvent");
        assert_eq!(products[1].product_name, "Methanol");
        assert_eq!(products[1].status, "5");
        assert_eq!(products[1].slug, "7");
        assert_eq!(products[2].display_title, "Ethanol");
        assert_eq!(products[2].kind, "");
        assert_eq!(products[3].display_title, "");
        assert_eq!(products[3].status, "");
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(parse_wp_products(r#"{"code": "rest_no_route"}"#).is_err());
        assert!(parse_wp_products("<html></html>").is_err());
    }
}
