//! Cross-stage pipeline tests: the documented identities plus concrete
//! list-view scenarios over account-shaped records.


use crate::{
    compare::{SortDirection, SortKind},
    query::{
        config::{FilterConfig, FilterKind, FilterRule, SearchConfig, SortConfig, SortOption},
        filter::FilterValues,
        pipeline::{self, PipelineConfig, QueryInput},
    },
};
use serde_json::{Value, json};

fn records() -> Vec<Value> {
    vec![
        json!({ "name": "Alpha", "balance": 100 }),
        json!({ "name": "Beta", "balance": 50 }),
    ]
}

fn config() -> PipelineConfig {
    PipelineConfig {
        search: SearchConfig::new(["name"]),
        filter: FilterConfig::new()
            .with_rule("tier", FilterRule::new("balance", FilterKind::Range)),
        sort: SortConfig::new().with_option(
            "balanceDesc",
            SortOption::new("balance", SortKind::Number, SortDirection::Desc),
        ),
    }
}

fn input(term: &str, filters: FilterValues, sort_by: &str) -> QueryInput {
    QueryInput {
        search_term: term.to_string(),
        filters,
        sort_by: sort_by.to_string(),
    }
}

#[test]
fn empty_input_derives_the_collection_unchanged() {
    let records = records();
    let derived = pipeline::derive(&records, &QueryInput::default(), &config());

    assert_eq!(derived, records);
}

#[test]
fn descending_balance_puts_alpha_first() {
    let derived = pipeline::derive(
        &records(),
        &input("", FilterValues::new(), "balanceDesc"),
        &config(),
    );

    assert_eq!(derived[0]["name"], json!("Alpha"));
    assert_eq!(derived[1]["name"], json!("Beta"));
}

#[test]
fn search_term_narrows_to_the_matching_record() {
    let derived = pipeline::derive(
        &records(),
        &input("alp", FilterValues::new(), "default"),
        &config(),
    );

    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0]["name"], json!("Alpha"));
}

#[test]
fn inclusive_range_filter_keeps_both_boundary_records() {
    let filters: FilterValues = [("tier".to_string(), json!("50-100"))].into_iter().collect();
    let derived = pipeline::derive(&records(), &input("", filters, "default"), &config());

    assert_eq!(derived.len(), 2);
}

#[test]
fn stages_compose_in_search_filter_sort_order() {
    let records = vec![
        json!({ "name": "Alpha One", "balance": 30 }),
        json!({ "name": "Alpha Two", "balance": 90 }),
        json!({ "name": "Beta", "balance": 60 }),
    ];
    let filters: FilterValues = [("tier".to_string(), json!("25-95"))].into_iter().collect();
    let derived = pipeline::derive(&records, &input("alpha", filters, "balanceDesc"), &config());

    // Beta passes the filter but not the search; the survivors sort by
    // balance descending.
    assert_eq!(derived.len(), 2);
    assert_eq!(derived[0]["name"], json!("Alpha Two"));
    assert_eq!(derived[1]["name"], json!("Alpha One"));
}

#[test]
fn derive_indices_mirrors_derive() {
    let records = records();
    let query = input("", FilterValues::new(), "balanceDesc");
    let indices = pipeline::derive_indices(&records, &query, &config());
    let derived = pipeline::derive(&records, &query, &config());

    let via_indices: Vec<&Value> = indices.iter().map(|&i| &records[i]).collect();
    let direct: Vec<&Value> = derived.iter().collect();
    assert_eq!(via_indices, direct);
}
