//! Hive section: a slot inside a hive. Sections can be moved between hives by update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::require;
use super::HiveId;
use lifecycle_framework::LifecycleError;

/// Type-safe identifier for HiveSections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiveSectionId(pub u32);

impl From<u32> for HiveSectionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for HiveSectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "section_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionRecord {
    pub id: HiveSectionId,
    pub code: String,
    pub name: String,
    pub hive_section_count: i32,
    pub store_hive_id: HiveId,
    pub is_deleted: bool,
    pub created_by: i32,
    pub last_updated_by: i32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveSection {
    pub id: HiveSectionId,
    pub code: String,
    pub name: String,
    pub hive_section_count: i32,
    pub store_hive_id: HiveId,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiveSectionListItem {
    pub id: HiveSectionId,
    pub code: String,
    pub name: String,
    pub store_hive_id: HiveId,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHiveSectionRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub hive_section_count: i32,
    pub store_hive_id: HiveId,
}

impl UpdateHiveSectionRequest {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        require("code", &self.code)?;
        require("name", &self.name)?;
        if self.hive_section_count < 0 {
            return Err(LifecycleError::invalid("hiveSectionCount must not be negative"));
        }
        Ok(())
    }
}

impl From<&SectionRecord> for HiveSection {
    fn from(record: &SectionRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            hive_section_count: record.hive_section_count,
            store_hive_id: record.store_hive_id,
            is_deleted: record.is_deleted,
            last_updated: record.last_updated,
        }
    }
}

impl From<&SectionRecord> for HiveSectionListItem {
    fn from(record: &SectionRecord) -> Self {
        Self {
            id: record.id,
            code: record.code.clone(),
            name: record.name.clone(),
            store_hive_id: record.store_hive_id,
            is_deleted: record.is_deleted,
        }
    }
}
