use census_reader::{
    GenerationClassifier, GenerationDepth, Household, HouseholdCollection,
    RelationshipVocabulary, Resident,
};
use chrono::NaiveDate;

/// Create a test resident with the given relationship label
fn create_test_resident(name: &str, relationship: &str) -> Resident {
    Resident::new(
        name.to_string(),
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        relationship.to_string(),
    )
}

/// Create a household from one label per resident
fn create_test_household(labels: &[&str]) -> Household {
    Household::new(
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| create_test_resident(&format!("Resident {i}"), label))
            .collect(),
    )
}

#[test]
fn test_tier_counts_map_to_depths() {
    let vocabulary = RelationshipVocabulary::default();

    let single = create_test_household(&["grandmother"]);
    let two = create_test_household(&["mother", "child"]);
    let three = create_test_household(&["grandmother", "mother", "child"]);
    let four = create_test_household(&["grandmother", "mother", "child", "grandchild"]);

    assert_eq!(
        GenerationClassifier::classify(&single, &vocabulary),
        GenerationDepth::Single
    );
    assert_eq!(
        GenerationClassifier::classify(&two, &vocabulary),
        GenerationDepth::Two
    );
    assert_eq!(
        GenerationClassifier::classify(&three, &vocabulary),
        GenerationDepth::Three
    );
    assert_eq!(
        GenerationClassifier::classify(&four, &vocabulary),
        GenerationDepth::Indeterminate
    );
}

#[test]
fn test_repeated_labels_count_each_tier_once() {
    let vocabulary = RelationshipVocabulary::default();
    let household = create_test_household(&["child", "child", "daughter-in-law", "mother"]);

    // Three residents in the child tier still count it once
    assert_eq!(
        GenerationClassifier::classify(&household, &vocabulary),
        GenerationDepth::Two
    );
}

#[test]
fn test_sentinel_short_circuits_to_indeterminate() {
    let vocabulary = RelationshipVocabulary::default();
    // Without the sentinel these labels would span two tiers
    let household = create_test_household(&["mother", "other/unknown", "child"]);

    assert_eq!(
        GenerationClassifier::classify(&household, &vocabulary),
        GenerationDepth::Indeterminate
    );
}

#[test]
fn test_labels_outside_every_tier_are_indeterminate() {
    let vocabulary = RelationshipVocabulary::default();
    let household = create_test_household(&["neighbor", "lodger"]);

    assert_eq!(
        GenerationClassifier::classify(&household, &vocabulary),
        GenerationDepth::Indeterminate
    );
}

#[test]
fn test_tally_partitions_the_collection() {
    let vocabulary = RelationshipVocabulary::default();
    let mut collection = HouseholdCollection::new();
    collection.add_household(create_test_household(&["grandmother"]));
    collection.add_household(create_test_household(&["mother", "child"]));
    collection.add_household(create_test_household(&["grandmother", "mother", "child"]));
    collection.add_household(create_test_household(&["other/unknown"]));
    collection.add_household(create_test_household(&["grandmother", "mother", "wife", "child"]));
    collection.add_household(create_test_household(&["head of household"]));

    let tally = GenerationClassifier::tally(&collection, &vocabulary);
    assert_eq!(tally.single_generation, 1);
    assert_eq!(tally.two_generation, 1);
    assert_eq!(tally.three_generation, 1);
    // Sentinel, four matched tiers, and a label in no tier at all
    assert_eq!(tally.indeterminate, 3);
    assert_eq!(tally.total(), collection.household_count());
}

#[test]
fn test_vocabulary_table_can_overlap_tiers() {
    // A replacement table may place one label in several tiers; each
    // matched tier adds one to the household's count
    let json = serde_json::json!({
        "tiers": [
            ["matriarch"],
            ["parent", "kin"],
            ["kin"],
            ["child"],
            [],
            []
        ],
        "sentinel": "unknown",
        "single_parent_labels": ["parent", "child"]
    });
    let vocabulary: RelationshipVocabulary = serde_json::from_value(json).unwrap();

    let household = create_test_household(&["kin"]);
    assert_eq!(
        GenerationClassifier::classify(&household, &vocabulary),
        GenerationDepth::Two
    );
}
