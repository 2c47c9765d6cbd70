//! Hive: a storage location owning any number of sections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::require;
use lifecycle_framework::LifecycleError;

/// Type-safe identifier for Hives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiveId(pub u32);

impl From<u32> for HiveId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for HiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hive_{}", self.0)
    }
}

/// Stored form of a hive.
#[derive(Debug, Clone, PartialEq)]
pub struct HiveRecord {
    pub id: HiveId,
    pub code: String,
    pub name: String,
    pub address: String,
    pub is_deleted: bool,
    pub created_by: i32,
    pub last_updated_by: i32,
    pub last_updated: DateTime<Utc>,
}

/// Detail view of a hive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hive {
    pub id: HiveId,
    pub code: String,
    pub name: String,
    pub address: String,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveListItem {
    pub id: HiveId,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
}

/// Payload for both creating and updating a hive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHiveRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl UpdateHiveRequest {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        require("code", &self.code)?;
        require("name", &self.name)
    }
}

impl From<&HiveRecord> for Hive {
    fn from(record: &HiveRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            address: record.address.clone(),
            is_deleted: record.is_deleted,
            last_updated: record.last_updated,
        }
    }
}

impl From<&HiveRecord> for HiveListItem {
    fn from(record: &HiveRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            is_deleted: record.is_deleted,
        }
    }
}
