use census_reader::{
    DemographicStatistics, DemographicStats, Household, HouseholdCollection,
    RelationshipVocabulary, Resident,
};
use chrono::NaiveDate;

/// Reference date all ages in this suite are computed against
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()
}

/// Create a test resident born on the given date
fn create_test_resident(name: &str, birth: (i32, u32, u32), relationship: &str) -> Resident {
    Resident::new(
        name.to_string(),
        NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
        relationship.to_string(),
    )
}

/// Collect households into a collection
fn create_test_collection(households: Vec<Household>) -> HouseholdCollection {
    let mut collection = HouseholdCollection::new();
    for household in households {
        collection.add_household(household);
    }
    collection
}

#[test]
fn test_age_sixteen_belongs_to_the_lower_bracket_only() {
    // Born exactly sixteen years before the reference date
    let collection = create_test_collection(vec![Household::new(vec![create_test_resident(
        "An",
        (2004, 6, 1),
        "child",
    )])]);

    let reference = reference_date();
    assert_eq!(
        DemographicStatistics::count_minors(&collection, &reference),
        1
    );
    assert_eq!(
        DemographicStatistics::count_working_age(&collection, &reference),
        0
    );
    assert_eq!(
        DemographicStatistics::count_households_with_minors(&collection, &reference),
        1
    );
}

#[test]
fn test_age_sixty_belongs_to_the_upper_bracket_only() {
    let collection = create_test_collection(vec![Household::new(vec![create_test_resident(
        "Binh",
        (1960, 6, 1),
        "grandmother",
    )])]);

    let reference = reference_date();
    assert_eq!(
        DemographicStatistics::count_seniors(&collection, &reference),
        1
    );
    assert_eq!(
        DemographicStatistics::count_working_age(&collection, &reference),
        0
    );
    assert_eq!(
        DemographicStatistics::count_households_with_seniors(&collection, &reference),
        1
    );
}

#[test]
fn test_middle_bracket_spans_seventeen_to_fifty_nine() {
    let collection = create_test_collection(vec![Household::new(vec![
        create_test_resident("An", (2003, 6, 1), "child"),
        create_test_resident("Binh", (1961, 6, 1), "mother"),
    ])]);

    let reference = reference_date();
    assert_eq!(
        DemographicStatistics::count_working_age(&collection, &reference),
        2
    );
    assert_eq!(
        DemographicStatistics::count_minors(&collection, &reference),
        0
    );
    assert_eq!(
        DemographicStatistics::count_seniors(&collection, &reference),
        0
    );
}

#[test]
fn test_counts_across_two_households() {
    // Ages at the reference date: 10 and 70 in the first household, 30 in
    // the second
    let collection = create_test_collection(vec![
        Household::new(vec![
            create_test_resident("An", (2010, 6, 1), "child"),
            create_test_resident("Binh", (1950, 6, 1), "mother"),
        ]),
        Household::new(vec![create_test_resident("Chi", (1990, 6, 1), "child")]),
    ]);

    let vocabulary = RelationshipVocabulary::default();
    let stats = DemographicStatistics::calculate(&collection, &vocabulary, &reference_date());
    assert_eq!(
        stats,
        DemographicStats {
            minors: 1,
            seniors: 1,
            working_age: 1,
            households_with_seniors: 1,
            households_with_minors: 1,
            single_parent_households: 1,
        }
    );
}

#[test]
fn test_single_parent_rule_accepts_two_distinct_permitted_labels() {
    let vocabulary = RelationshipVocabulary::default();
    let collection = create_test_collection(vec![
        Household::new(vec![
            create_test_resident("An", (1980, 1, 1), "mother"),
            create_test_resident("Binh", (2010, 1, 1), "child"),
            create_test_resident("Chi", (2012, 1, 1), "child"),
        ]),
        Household::new(vec![
            create_test_resident("Dung", (1975, 1, 1), "head of household"),
            create_test_resident("Em", (2008, 1, 1), "child"),
        ]),
    ]);

    assert_eq!(
        DemographicStatistics::count_single_parent_households(&collection, &vocabulary),
        2
    );
}

#[test]
fn test_single_parent_rule_is_deliberately_narrow() {
    let vocabulary = RelationshipVocabulary::default();
    let collection = create_test_collection(vec![
        // Three distinct permitted labels fail the two-label requirement
        Household::new(vec![
            create_test_resident("An", (1950, 1, 1), "head of household"),
            create_test_resident("Binh", (1980, 1, 1), "mother"),
            create_test_resident("Chi", (2010, 1, 1), "child"),
        ]),
        // One out-of-set label excludes the household outright
        Household::new(vec![
            create_test_resident("Dung", (1980, 1, 1), "mother"),
            create_test_resident("Em", (2010, 1, 1), "child"),
            create_test_resident("Giang", (2015, 1, 1), "grandchild"),
        ]),
        // A single distinct label is not a parent-plus-children shape
        Household::new(vec![
            create_test_resident("Ha", (2010, 1, 1), "child"),
            create_test_resident("Khanh", (2012, 1, 1), "child"),
        ]),
        // An absent label is outside the permitted set
        Household::new(vec![
            create_test_resident("Lan", (1980, 1, 1), "mother"),
            create_test_resident("Minh", (2010, 1, 1), ""),
        ]),
    ]);

    assert_eq!(
        DemographicStatistics::count_single_parent_households(&collection, &vocabulary),
        0
    );
}

#[test]
fn test_empty_collection_reports_zero_everywhere() {
    let collection = HouseholdCollection::new();
    let vocabulary = RelationshipVocabulary::default();

    let stats = DemographicStatistics::calculate(&collection, &vocabulary, &reference_date());
    assert_eq!(stats, DemographicStats::default());
}
