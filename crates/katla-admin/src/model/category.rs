use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::require;
use lifecycle_framework::LifecycleError;

/// Type-safe identifier for ProductCategories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCategoryId(pub u32);

impl From<u32> for ProductCategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub id: ProductCategoryId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub created_by: i32,
    pub last_updated_by: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: ProductCategoryId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryListItem {
    pub id: ProductCategoryId,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductCategoryRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl UpdateProductCategoryRequest {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        require("code", &self.code)?;
        require("name", &self.name)
    }
}

impl From<&CategoryRecord> for ProductCategory {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            is_deleted: record.is_deleted,
            last_updated: record.last_updated,
        }
    }
}

impl From<&CategoryRecord> for ProductCategoryListItem {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            is_deleted: record.is_deleted,
        }
    }
}
