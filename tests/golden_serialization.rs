use catalog_recs::catalog::{Availability, Edition, Item};
use catalog_recs::types::{
    RankedItem, RankedRecommendations, RankingSummary, Recommendation, ScoreDetails,
    SnapshotVersion,
};

fn normalized(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn mock_version() -> SnapshotVersion {
    serde_json::from_str("\"sha256:mock\"").unwrap()
}

#[test]
fn golden_ranked_recommendation_serialization() {
    let result = Recommendation::Ranked(RankedRecommendations {
        items: vec![RankedItem {
            id: "item1".into(),
            name: "Star Raiders".to_string(),
            score: 3,
            catalog_position: 0,
            why: ScoreDetails {
                matched_tags: vec!["3D".into(), "Shooter".into()],
                matched_platforms: vec!["PS4".into()],
            },
        }],
        summary: RankingSummary {
            snapshot_version: mock_version(),
            items_considered: 3,
            excluded_not_for_sale: 1,
            excluded_purchased: 0,
            excluded_zero_score: 1,
            items_ranked: 1,
        },
    });

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    let outcome_pos = json_str.find("\"outcome\":").expect("Missing outcome tag");
    let items_pos = json_str.find("\"items\":").expect("Missing items key");
    let summary_pos = json_str.find("\"summary\":").expect("Missing summary key");
    assert!(outcome_pos < items_pos);
    assert!(items_pos < summary_pos, "items should appear before summary");

    const EXPECTED_JSON: &str = r#"{
      "outcome": "ranked",
      "items": [
        {
          "id": "item1",
          "name": "Star Raiders",
          "score": 3,
          "catalog_position": 0,
          "why": {
            "matched_tags": ["3D", "Shooter"],
            "matched_platforms": ["PS4"]
          }
        }
      ],
      "summary": {
        "snapshot_version": "sha256:mock",
        "items_considered": 3,
        "excluded_not_for_sale": 1,
        "excluded_purchased": 0,
        "excluded_zero_score": 1,
        "items_ranked": 1
      }
    }"#;

    assert_eq!(
        normalized(&json_str),
        normalized(EXPECTED_JSON),
        "JSON structure mismatch against golden snapshot"
    );

    let roundtrip: Recommendation = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(roundtrip, result);
}

#[test]
fn golden_bypass_serialization() {
    let json_str = serde_json::to_string(&Recommendation::Bypass).unwrap();
    assert_eq!(json_str, r#"{"outcome":"bypass"}"#);

    let parsed: Recommendation = serde_json::from_str(&json_str).unwrap();
    assert!(parsed.is_bypass());
}

#[test]
fn golden_item_serialization() {
    let item = Item::new("item1", "Star Raiders")
        .with_tag("Shooter")
        .with_tag("3D")
        .with_edition(Edition::new("sr-ps4", "PS4", Availability::PreOrder));

    let json_str = serde_json::to_string(&item).unwrap();

    // Tags are a sorted set
    const EXPECTED_JSON: &str = r#"{
      "id": "item1",
      "name": "Star Raiders",
      "tags": ["3D", "Shooter"],
      "editions": [
        { "sku": "sr-ps4", "platform": "PS4", "availability": "pre_order" }
      ]
    }"#;

    assert_eq!(normalized(&json_str), normalized(EXPECTED_JSON));
}

#[test]
fn item_fields_default_when_absent() {
    let item: Item = serde_json::from_str(r#"{"id":"bare","name":"Bare"}"#).unwrap();

    assert!(item.tags.is_empty());
    assert!(item.editions.is_empty());
    assert_eq!(item.availability(), Availability::NotForSale);
}
