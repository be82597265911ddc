//! Display transform
//!
//! Pure projection of raw backend records into UI-ready `DisplayItem`s. The
//! same record always yields the same item, whichever page it arrived in.

use crate::catalog::RawBike;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Normalized, display-ready projection of a bike record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: String,
    pub title: String,
    pub brand: String,
    /// Stringified year, empty when unknown
    pub year: String,
    pub price: Option<f64>,
    /// Primary image
    pub image: Option<String>,
    /// Record badges plus the tuning stage, without duplicates
    pub badges: Vec<String>,
    pub specs: Vec<JsonValue>,
}

/// Project a record. The record is only borrowed.
pub fn to_display_item(record: &RawBike) -> DisplayItem {
    DisplayItem {
        id: first_present(&record.id, &record.document_id),
        title: first_present(&record.title, &record.name),
        brand: record.brand.clone().unwrap_or_default(),
        year: first_present(&record.year, &record.registration_year),
        price: record.price,
        image: primary_image(record),
        badges: collect_badges(record),
        specs: record.specs.clone().unwrap_or_default(),
    }
}

fn first_present(primary: &Option<String>, fallback: &Option<String>) -> String {
    primary
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(fallback.as_deref())
        .unwrap_or_default()
        .to_string()
}

fn primary_image(record: &RawBike) -> Option<String> {
    record
        .image
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            record
                .images
                .as_ref()
                .and_then(|images| images.iter().find(|s| !s.is_empty()))
                .map(String::as_str)
        })
        .map(str::to_string)
}

fn collect_badges(record: &RawBike) -> Vec<String> {
    let existing = record.badges.iter().flatten();
    let stage = record.tuning_stage.iter();

    let mut badges: Vec<String> = Vec::new();
    for badge in existing.chain(stage) {
        if badge.is_empty() || badges.iter().any(|b| b == badge) {
            continue;
        }
        badges.push(badge.clone());
    }
    badges
}
