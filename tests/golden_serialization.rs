use context_search::corpus::Corpus;
use context_search::search;
use context_search::types::SearchResult;

fn sample_result() -> SearchResult {
    SearchResult {
        id: "doc-2".to_string(),
        title: "Getting Started with Webhooks".to_string(),
        content: "Webhooks allow real-time notifications.".to_string(),
        key_takeaways: vec![
            "Webhooks provide real-time event notifications".to_string(),
            "Configure endpoint URL in dashboard".to_string(),
        ],
        source: "Integration Guide".to_string(),
        relevance_score: 0.5,
    }
}

#[test]
fn golden_search_result_serialization() {
    let json_str = serde_json::to_string_pretty(&sample_result()).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "id": "doc-2",
      "title": "Getting Started with Webhooks",
      "content": "Webhooks allow real-time notifications.",
      "keyTakeaways": [
        "Webhooks provide real-time event notifications",
        "Configure endpoint URL in dashboard"
      ],
      "source": "Integration Guide",
      "relevanceScore": 0.5
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let deserialized: SearchResult = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, sample_result());
}

#[test]
fn search_output_never_exposes_keywords() {
    let corpus = Corpus::builtin();
    let results = search("legal agreement", &corpus);
    assert!(!results.is_empty());

    let value = serde_json::to_value(&results).unwrap();
    for entry in value.as_array().unwrap() {
        let object = entry.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["content", "id", "keyTakeaways", "relevanceScore", "source", "title"]
        );
    }
}

#[test]
fn golden_markdown_export() {
    const EXPECTED: &str = "# Getting Started with Webhooks

## Content
Webhooks allow real-time notifications.

## Key Takeaways
• Webhooks provide real-time event notifications
• Configure endpoint URL in dashboard

Source: Integration Guide";

    assert_eq!(sample_result().to_markdown(), EXPECTED);
}
