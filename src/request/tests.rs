//! Tests for request translation

use super::*;
use crate::error::Error;
use crate::filter::{keys, FilterSet};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use test_case::test_case;

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ============================================================================
// Mode Selection Tests
// ============================================================================

#[test_case("cafe racer", RequestMode::Search ; "plain query")]
#[test_case("  bobber  ", RequestMode::Search ; "padded query")]
#[test_case("", RequestMode::Browse ; "empty query")]
#[test_case("   \t", RequestMode::Browse ; "blank query")]
fn test_mode_select(q: &str, expected: RequestMode) {
    let filters = FilterSet::new().with(keys::QUERY, q);
    assert_eq!(RequestMode::select(&filters), expected);
}

#[test]
fn test_mode_select_without_query() {
    let filters = FilterSet::new().with(keys::BRAND, "bmw");
    assert_eq!(RequestMode::select(&filters), RequestMode::Browse);
}

#[test]
fn test_endpoint_paths() {
    assert_eq!(RequestMode::Browse.endpoint().path(), "/bikes");
    assert_eq!(RequestMode::Search.endpoint().path(), "/bikes/search");
    assert_eq!(Endpoint::FilterOptions.to_string(), "/bikes/filters");
}

// ============================================================================
// Search Translation Tests
// ============================================================================

#[test]
fn test_search_forwards_only_query_sort_and_cursor() {
    let filters = FilterSet::new()
        .with(keys::QUERY, " scrambler ")
        .with(keys::SORT_BY, "newest")
        .with(keys::BRAND, vec!["bmw", "ducati"])
        .with(keys::YEAR, 2020_i64)
        .with(keys::PRICE, "100-500")
        .with(keys::DESIGNER_ID, "d-9");

    let request = translate(&filters, Some("c1")).unwrap();

    assert_eq!(request.mode, RequestMode::Search);
    assert_eq!(request.endpoint, Endpoint::Search);
    assert_eq!(
        request.params,
        params(&[("q", "scrambler"), ("sortBy", "newest"), ("cursor", "c1")])
    );
}

#[test]
fn test_search_joins_list_sort() {
    let filters = FilterSet::new()
        .with(keys::QUERY, "tracker")
        .with(keys::SORT_BY, vec!["price", "year"]);

    let request = translate(&filters, None).unwrap();
    assert_eq!(request.param("sortBy"), Some("price,year"));
}

// ============================================================================
// Browse Translation Tests
// ============================================================================

#[test]
fn test_browse_renames() {
    let filters = FilterSet::new()
        .with(keys::BRAND, vec!["bmw", "ducati"])
        .with(keys::YEAR, 2020_i64)
        .with(keys::SORT_BY, "price_asc")
        .with(keys::DESIGNER_ID, "d-42");

    let request = translate(&filters, None).unwrap();

    assert_eq!(request.endpoint, Endpoint::Browse);
    assert_eq!(
        request.params,
        params(&[
            ("brands", "bmw,ducati"),
            ("registrationYear", "2020"),
            ("sortBy", "price_asc"),
            ("designerId", "d-42"),
        ])
    );
}

#[test]
fn test_browse_with_blank_query() {
    let filters = FilterSet::new()
        .with(keys::QUERY, "  ")
        .with(keys::BRAND, "honda");

    let request = translate(&filters, None).unwrap();
    assert_eq!(request.mode, RequestMode::Browse);
    assert_eq!(request.params, params(&[("brands", "honda")]));
}

#[test]
fn test_browse_brands_overrides_brand() {
    let filters = FilterSet::new()
        .with(keys::BRAND, "bmw")
        .with(keys::BRANDS, vec!["ktm"]);

    let request = translate(&filters, None).unwrap();
    assert_eq!(request.param("brands"), Some("ktm"));
}

#[test]
fn test_browse_omits_empty_but_keeps_zero_and_false() {
    let filters = FilterSet::new()
        .with(keys::BRAND, "")
        .with(keys::SORT_BY, crate::filter::FilterValue::Null)
        .with(keys::YEAR, 0_i64)
        .with(keys::DESIGNER_ID, false);

    let request = translate(&filters, None).unwrap();
    assert_eq!(
        request.params,
        params(&[("registrationYear", "0"), ("designerId", "false")])
    );
}

#[test]
fn test_browse_drops_unknown_filters() {
    let filters = FilterSet::new()
        .with("color", "red")
        .with(keys::YEAR, "2018");

    let request = translate(&filters, None).unwrap();
    assert_eq!(request.params, params(&[("registrationYear", "2018")]));
}

// ============================================================================
// Price Tests
// ============================================================================

#[test_case("100-500", Some("100"), Some("500") ; "closed range")]
#[test_case("100-", Some("100"), None ; "open upper")]
#[test_case("-500", None, Some("500") ; "open lower")]
#[test_case(" 99.5 - 250 ", Some("99.5"), Some("250") ; "padded decimal")]
#[test_case("-", None, None ; "fully open")]
fn test_price_split(raw: &str, min: Option<&str>, max: Option<&str>) {
    let filters = FilterSet::new().with(keys::PRICE, raw);
    let request = translate(&filters, None).unwrap();

    assert_eq!(request.param("minPrice"), min);
    assert_eq!(request.param("maxPrice"), max);
}

#[test_case("500" ; "missing hyphen")]
#[test_case("1-2-3" ; "two hyphens")]
#[test_case("abc-500" ; "non numeric")]
#[test_case("900-100" ; "inverted")]
fn test_price_validation_errors(raw: &str) {
    let filters = FilterSet::new().with(keys::PRICE, raw);
    let err = translate(&filters, None).unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "price"));
}

#[test]
fn test_price_non_string_rejected() {
    let filters = FilterSet::new().with(keys::PRICE, 500_i64);
    assert!(matches!(
        translate(&filters, None),
        Err(Error::Validation { .. })
    ));
}

#[test]
fn test_price_empty_is_omitted() {
    let filters = FilterSet::new().with(keys::PRICE, "");
    let request = translate(&filters, None).unwrap();
    assert!(request.params.is_empty());
}

#[test]
fn test_price_ignored_in_search_mode() {
    let filters = FilterSet::new()
        .with(keys::QUERY, "cafe")
        .with(keys::PRICE, "not-a-range-at-all");
    assert!(translate(&filters, None).is_ok());
}

#[test]
fn test_price_range_parse() {
    let range = PriceRange::parse("100-").unwrap();
    assert_eq!(range.min.as_deref(), Some("100"));
    assert!(range.max.is_none());
    assert!(!range.is_unbounded());
    assert!(PriceRange::parse("-").unwrap().is_unbounded());
}

// ============================================================================
// Cursor Tests
// ============================================================================

#[test]
fn test_cursor_argument_overrides_filter_cursor() {
    let filters = FilterSet::new().with(keys::CURSOR, "from-filters");

    let request = translate(&filters, Some("explicit")).unwrap();
    assert_eq!(request.cursor(), Some("explicit"));

    let request = translate(&filters, None).unwrap();
    assert_eq!(request.cursor(), Some("from-filters"));
}

#[test]
fn test_no_cursor_on_first_page() {
    let request = translate(&FilterSet::new(), None).unwrap();
    assert!(request.cursor().is_none());
    assert!(request.params.is_empty());
}
