//! Product entity model and DTOs.
//!
//! DTOs are built field by field from a parsed request body using the
//! coercion table in `prodbench_core::product`, never by structural decoding.

use prodbench_core::product::{coerced_fields, FieldValue};
use prodbench_core::types::DbId;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from the `product` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub currency: String,
    pub stock: i32,
    pub ean: String,
    pub color: String,
    pub size: String,
    pub availability: String,
    pub internal_id: String,
}

/// DTO for creating a product. Unsupplied fields hold their zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub currency: String,
    pub stock: i32,
    pub ean: String,
    pub color: String,
    pub size: String,
    pub availability: String,
    pub internal_id: String,
}

/// Sparse fieldset: only `Some` fields were supplied by the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub stock: Option<i32>,
    pub ean: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub availability: Option<String>,
    pub internal_id: Option<String>,
}

impl ProductFields {
    /// Collect every assignable field from a parsed request body.
    pub fn from_json(map: &Map<String, Value>) -> Self {
        let mut fields = Self::default();
        for (name, value) in coerced_fields(map) {
            fields.set(name, value);
        }
        fields
    }

    fn set(&mut self, name: &str, value: FieldValue) {
        match (name, value) {
            ("name", FieldValue::Text(v)) => self.name = Some(v),
            ("description", FieldValue::Text(v)) => self.description = Some(v),
            ("brand", FieldValue::Text(v)) => self.brand = Some(v),
            ("category", FieldValue::Text(v)) => self.category = Some(v),
            ("price", FieldValue::Decimal(v)) => self.price = Some(v),
            ("currency", FieldValue::Text(v)) => self.currency = Some(v),
            ("stock", FieldValue::Integer(v)) => self.stock = Some(v),
            ("ean", FieldValue::Text(v)) => self.ean = Some(v),
            ("color", FieldValue::Text(v)) => self.color = Some(v),
            ("size", FieldValue::Text(v)) => self.size = Some(v),
            ("availability", FieldValue::Text(v)) => self.availability = Some(v),
            ("internal_id", FieldValue::Text(v)) => self.internal_id = Some(v),
            _ => {}
        }
    }

    /// Overwrite the supplied fields on an in-memory product.
    pub fn apply_to(&self, product: &mut Product) {
        fn merge<T: Clone>(target: &mut T, source: &Option<T>) {
            if let Some(v) = source {
                *target = v.clone();
            }
        }

        merge(&mut product.name, &self.name);
        merge(&mut product.description, &self.description);
        merge(&mut product.brand, &self.brand);
        merge(&mut product.category, &self.category);
        merge(&mut product.price, &self.price);
        merge(&mut product.currency, &self.currency);
        merge(&mut product.stock, &self.stock);
        merge(&mut product.ean, &self.ean);
        merge(&mut product.color, &self.color);
        merge(&mut product.size, &self.size);
        merge(&mut product.availability, &self.availability);
        merge(&mut product.internal_id, &self.internal_id);
    }
}

impl NewProduct {
    /// Build a create DTO from a parsed request body.
    pub fn from_json(map: &Map<String, Value>) -> Self {
        ProductFields::from_json(map).into()
    }
}

impl From<ProductFields> for NewProduct {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            brand: fields.brand.unwrap_or_default(),
            category: fields.category.unwrap_or_default(),
            price: fields.price.unwrap_or_default(),
            currency: fields.currency.unwrap_or_default(),
            stock: fields.stock.unwrap_or_default(),
            ean: fields.ean.unwrap_or_default(),
            color: fields.color.unwrap_or_default(),
            size: fields.size.unwrap_or_default(),
            availability: fields.availability.unwrap_or_default(),
            internal_id: fields.internal_id.unwrap_or_default(),
        }
    }
}
