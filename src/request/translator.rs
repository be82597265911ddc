//! Filter set to backend parameter translation

use super::types::{ApiRequest, RequestMode};
use crate::error::{Error, Result};
use crate::filter::{keys, FilterSet, FilterValue};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Filter name to browse parameter name.
///
/// Applied in order, so `brands` overrides `brand` when both are set.
pub const BROWSE_RENAMES: &[(&str, &str)] = &[
    (keys::BRAND, "brands"),
    (keys::BRANDS, "brands"),
    (keys::YEAR, "registrationYear"),
    (keys::SORT_BY, "sortBy"),
    (keys::DESIGNER_ID, "designerId"),
];

/// Filters forwarded to the search endpoint besides `q` and `cursor`
const SEARCH_FORWARDED: &[&str] = &[keys::SORT_BY];

static PRICE_BOUND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid price regex"));

/// Build the request for one page of a filter set.
///
/// An explicit `cursor` overrides any cursor carried in the filter set.
/// Fails with `Error::Validation` before anything touches the network when a
/// filter cannot be translated.
pub fn translate(filters: &FilterSet, cursor: Option<&str>) -> Result<ApiRequest> {
    let mode = RequestMode::select(filters);
    let mut request = ApiRequest::new(mode);

    match mode {
        RequestMode::Search => {
            if let Some(q) = filters.search_text() {
                request.params.insert(keys::QUERY.to_string(), q.to_string());
            }
            for name in SEARCH_FORWARDED {
                insert_param(&mut request, name, filters.get(name));
            }
        }
        RequestMode::Browse => {
            for (from, to) in BROWSE_RENAMES {
                insert_param(&mut request, to, filters.get(from));
            }
            if let Some(value) = filters.get(keys::PRICE) {
                let range = PriceRange::from_value(value)?;
                if let Some(min) = range.min {
                    request.params.insert("minPrice".to_string(), min);
                }
                if let Some(max) = range.max {
                    request.params.insert("maxPrice".to_string(), max);
                }
            }
            for (name, _) in filters.iter() {
                if !is_browse_filter(name) {
                    debug!("Dropping unrecognized filter '{name}'");
                }
            }
        }
    }

    let cursor = cursor.filter(|c| !c.is_empty()).or_else(|| filters.cursor());
    if let Some(cursor) = cursor {
        request
            .params
            .insert(keys::CURSOR.to_string(), cursor.to_string());
    }

    Ok(request)
}

fn insert_param(request: &mut ApiRequest, name: &str, value: Option<&FilterValue>) {
    if let Some(param) = value.and_then(FilterValue::to_param) {
        request.params.insert(name.to_string(), param);
    }
}

fn is_browse_filter(name: &str) -> bool {
    name == keys::PRICE
        || name == keys::QUERY
        || name == keys::CURSOR
        || BROWSE_RENAMES.iter().any(|(from, _)| *from == name)
}

/// A price range split from "min-max"; either side may be open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceRange {
    /// Lower bound, as sent to the backend
    pub min: Option<String>,
    /// Upper bound, as sent to the backend
    pub max: Option<String>,
}

impl PriceRange {
    /// Parse "100-500", "100-" or "-500"
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.trim().split('-').collect();
        if parts.len() != 2 {
            return Err(Error::validation(
                keys::PRICE,
                format!("expected 'min-max' with a single '-', got '{raw}'"),
            ));
        }

        let min = parse_bound(parts[0], raw)?;
        let max = parse_bound(parts[1], raw)?;

        if let (Some(lo), Some(hi)) = (&min, &max) {
            let lo: f64 = lo.parse().unwrap_or(0.0);
            let hi: f64 = hi.parse().unwrap_or(0.0);
            if lo > hi {
                return Err(Error::validation(
                    keys::PRICE,
                    format!("minimum exceeds maximum in '{raw}'"),
                ));
            }
        }

        Ok(Self { min, max })
    }

    /// Parse a filter value; null and empty text give an unbounded range
    pub fn from_value(value: &FilterValue) -> Result<Self> {
        match value {
            FilterValue::Null => Ok(Self::default()),
            FilterValue::Text(s) if s.trim().is_empty() => Ok(Self::default()),
            FilterValue::Text(s) => Self::parse(s),
            other => Err(Error::validation(
                keys::PRICE,
                format!("expected a string like '100-500', got {}", other.to_json()),
            )),
        }
    }

    /// Check if neither side is bounded
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

fn parse_bound(part: &str, raw: &str) -> Result<Option<String>> {
    let part = part.trim();
    if part.is_empty() {
        return Ok(None);
    }
    if !PRICE_BOUND.is_match(part) {
        return Err(Error::validation(
            keys::PRICE,
            format!("'{part}' in '{raw}' is not a number"),
        ));
    }
    Ok(Some(part.to_string()))
}
