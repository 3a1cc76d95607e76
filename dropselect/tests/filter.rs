use std::borrow::Cow;

use dropselect::{Entry, OptionGroup, Query, SearchStyle, SelectOption, filter, flatten};
use proptest::prelude::*;

fn condiments() -> Vec<Entry> {
    vec![
        SelectOption::new("mustard", "Mustard").into(),
        SelectOption::new("ketchup", "Ketchup").into(),
        OptionGroup::new(
            "Camping",
            [
                SelectOption::new("tent", "Tent"),
                SelectOption::new("flashlight", "Flashlight"),
                SelectOption::new("toilet-paper", "Toilet Paper"),
            ],
        )
        .into(),
    ]
}

fn meals() -> Vec<Entry> {
    vec![
        SelectOption::new("hot-dog", "Hot Dog, Fries and a Soda")
            .tokens(["ketchup", "mustard"])
            .into(),
        SelectOption::new("burger", "Burger, Shake and a Smile")
            .tokens(["mustard"])
            .into(),
        SelectOption::new("sugar", "Sugar, Spice and all things nice")
            .tokens(["frosting"])
            .into(),
    ]
}

fn matched(entries: &[Entry], term: &str, style: &SearchStyle) -> Vec<String> {
    flatten(&filter(entries, term, style))
        .values()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Empty terms
// ============================================================================

#[test]
fn test_empty_term_returns_input_unchanged() {
    let entries = condiments();
    let result = filter(&entries, "", &SearchStyle::Contains);
    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result.as_ref(), entries.as_slice());
}

#[test]
fn test_whitespace_term_returns_input_unchanged() {
    let entries = condiments();
    let result = filter(&entries, "   ", &SearchStyle::StartsWith);
    assert!(matches!(result, Cow::Borrowed(_)));
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_matching_is_case_insensitive() {
    let entries = meals();
    let upper = filter(&entries, "MUSTARD", &SearchStyle::Contains).into_owned();
    let lower = filter(&entries, "mustard", &SearchStyle::Contains).into_owned();
    assert_eq!(upper, lower);
    assert_eq!(
        matched(&entries, "MUSTARD", &SearchStyle::Contains),
        vec!["hot-dog", "burger"]
    );
}

#[test]
fn test_tokens_are_candidates() {
    assert_eq!(
        matched(&meals(), "frost", &SearchStyle::Contains),
        vec!["sugar"]
    );
}

#[test]
fn test_order_is_preserved() {
    let entries: Vec<Entry> = vec![
        SelectOption::new("a", "Apple").into(),
        SelectOption::new("b", "Banana").into(),
        SelectOption::new("c", "Apricot").into(),
    ];
    assert_eq!(matched(&entries, "ap", &SearchStyle::Contains), vec!["a", "c"]);
}

#[test]
fn test_group_keeps_only_matching_members() {
    let items = condiments();
    let result = filter(&items, "ten", &SearchStyle::Contains);
    assert_eq!(
        result.as_ref(),
        &[Entry::Group(OptionGroup::new(
            "Camping",
            [SelectOption::new("tent", "Tent")]
        ))]
    );
}

#[test]
fn test_group_without_matches_is_dropped() {
    let items = condiments();
    let result = filter(&items, "must", &SearchStyle::Contains);
    assert_eq!(result.len(), 1);
    assert!(!result[0].is_group());
}

#[test]
fn test_starts_with() {
    let entries = meals();
    assert!(matched(&entries, "spice", &SearchStyle::StartsWith).is_empty());
    assert_eq!(
        matched(&entries, "spice", &SearchStyle::Contains),
        vec!["sugar"]
    );
    assert_eq!(
        matched(&entries, "FRO", &SearchStyle::StartsWith),
        vec!["sugar"]
    );
}

#[test]
fn test_predicate_receives_lowercased_arguments() {
    let style = SearchStyle::predicate(|candidate, term| candidate.ends_with(term));
    assert_eq!(matched(&meals(), "SMILE", &style), vec!["burger"]);
}

#[test]
fn test_fuzzy() {
    assert_eq!(
        matched(&meals(), "hdfs", &SearchStyle::Fuzzy),
        vec!["hot-dog"]
    );
}

#[test]
fn test_no_matches_is_empty() {
    let items = condiments();
    let result = filter(&items, "zzz", &SearchStyle::Contains);
    assert!(result.is_empty());
}

#[test]
fn test_normalization_strips_diacritics() {
    let option = SelectOption::new("dessert", "Crème brûlée");
    let style = SearchStyle::Contains;

    assert!(!Query::new("creme", &style).matches(&option));
    assert!(Query::with_normalization("creme brulee", &style, true).matches(&option));
    assert!(Query::with_normalization("CRÈME", &style, true).matches(&option));
}

#[test]
fn test_disabled_options_are_filtered_not_removed() {
    let entries: Vec<Entry> = vec![SelectOption::new("r", "Relish").disabled().into()];
    let result = filter(&entries, "rel", &SearchStyle::Contains);
    assert_eq!(result.len(), 1);
    assert!(flatten(&result).is_empty());
}

// ============================================================================
// Generated option lists
// ============================================================================

fn option_strategy() -> impl Strategy<Value = SelectOption> {
    (
        "[a-z]{1,6}",
        "[A-Za-z ]{0,12}",
        prop::collection::vec("[A-Za-z]{1,5}", 0..3),
        any::<bool>(),
    )
        .prop_map(|(value, label, tokens, disabled)| {
            let option = SelectOption::new(value, label).tokens(tokens);
            if disabled { option.disabled() } else { option }
        })
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    prop_oneof![
        option_strategy().prop_map(Entry::from),
        ("[A-Z][a-z]{0,6}", prop::collection::vec(option_strategy(), 0..4))
            .prop_map(|(label, options)| Entry::from(OptionGroup::new(label, options))),
    ]
}

fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry_strategy(), 0..8)
}

fn style_strategy() -> impl Strategy<Value = SearchStyle> {
    prop_oneof![
        Just(SearchStyle::Contains),
        Just(SearchStyle::StartsWith),
        Just(SearchStyle::Fuzzy),
    ]
}

fn all_options(entries: &[Entry]) -> Vec<&SelectOption> {
    entries
        .iter()
        .flat_map(|entry| entry.options().map(|(option, _)| option))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_blank_term_borrows_input(
        entries in entries_strategy(),
        term in "[ \t]{0,3}",
        style in style_strategy(),
    ) {
        let result = filter(&entries, &term, &style);
        prop_assert!(matches!(result, Cow::Borrowed(_)));
        prop_assert_eq!(result.as_ref(), entries.as_slice());
    }

    #[test]
    fn prop_matching_ignores_case(
        entries in entries_strategy(),
        term in "[a-zA-Z]{1,3}",
        style in style_strategy(),
    ) {
        let upper = filter(&entries, &term.to_uppercase(), &style).into_owned();
        let lower = filter(&entries, &term.to_lowercase(), &style).into_owned();
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn prop_keeps_matching_options_in_order(
        entries in entries_strategy(),
        term in "[a-z]{1,2}",
        style in style_strategy(),
    ) {
        let result = filter(&entries, &term, &style);

        let mut query = Query::new(&term, &style);
        let expected: Vec<&SelectOption> = all_options(&entries)
            .into_iter()
            .filter(|option| query.matches(option))
            .collect();
        prop_assert_eq!(all_options(&result), expected);

        let no_empty_groups = result.iter().all(|entry| match entry {
            Entry::Group(group) => !group.options.is_empty(),
            Entry::Option(_) => true,
        });
        prop_assert!(no_empty_groups);
    }
}
