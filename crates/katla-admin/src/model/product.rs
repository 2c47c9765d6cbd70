//! Catalogue product, filed under exactly one product category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::require;
use super::ProductCategoryId;
use lifecycle_framework::LifecycleError;

/// Type-safe identifier for CatalogueProducts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub code: String,
    pub manufacturer_code: String,
    pub name: String,
    pub description: String,
    pub category_id: ProductCategoryId,
    pub is_deleted: bool,
    pub created_by: i32,
    pub last_updated_by: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueProduct {
    pub id: ProductId,
    pub code: String,
    pub manufacturer_code: String,
    pub name: String,
    pub description: String,
    pub category_id: ProductCategoryId,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub category_id: ProductCategoryId,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub code: String,
    #[serde(default)]
    pub manufacturer_code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: ProductCategoryId,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        require("code", &self.code)?;
        require("name", &self.name)
    }
}

impl From<&ProductRecord> for CatalogueProduct {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            manufacturer_code: record.manufacturer_code.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            category_id: record.category_id,
            is_deleted: record.is_deleted,
            last_updated: record.last_updated,
        }
    }
}

impl From<&ProductRecord> for ProductListItem {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            category_id: record.category_id,
            is_deleted: record.is_deleted,
        }
    }
}
