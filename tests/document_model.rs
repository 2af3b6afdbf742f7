use context_search::document::{Document, DocumentId, DocumentIdError};

fn make_doc(id: &str) -> Document {
    Document::new(DocumentId::new(id).unwrap(), "Title", "Body", "Source")
}

#[test]
fn invariant_empty_id_rejected() {
    assert_eq!(DocumentId::new(""), Err(DocumentIdError::Empty));
    assert_eq!(DocumentId::new("   \t"), Err(DocumentIdError::Empty));
    assert_eq!(DocumentId::new("doc-1").unwrap().as_str(), "doc-1");
}

#[test]
fn invariant_keywords_stored_lowercase() {
    let doc = make_doc("a").with_keywords(["Lease", "REAL-TIME", "user experience"]);
    assert_eq!(doc.keywords, vec!["lease", "real-time", "user experience"]);
}

#[test]
fn invariant_key_takeaways_keep_order_and_case() {
    let doc = make_doc("a").with_key_takeaways(["Second thing", "First thing"]);
    assert_eq!(doc.key_takeaways, vec!["Second thing", "First thing"]);
}

#[test]
fn deserialization_normalizes_keywords() {
    let json = r#"{
        "id": "doc-9",
        "title": "Caching",
        "content": "Cache everything.",
        "keyTakeaways": ["Cache it"],
        "source": "Ops Guide",
        "keywords": ["Cache", "CDN"]
    }"#;

    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.id.as_str(), "doc-9");
    assert_eq!(doc.key_takeaways, vec!["Cache it"]);
    assert_eq!(doc.keywords, vec!["cache", "cdn"]);
}

#[test]
fn deserialization_defaults_optional_lists() {
    let json = r#"{"id": "x", "title": "T", "content": "C", "source": "S"}"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert!(doc.key_takeaways.is_empty());
    assert!(doc.keywords.is_empty());
}

#[test]
fn deserialization_rejects_empty_id() {
    let json = r#"{"id": "", "title": "T", "content": "C", "source": "S"}"#;
    assert!(serde_json::from_str::<Document>(json).is_err());
}

#[test]
fn serialization_uses_camel_case() {
    let doc = make_doc("a").with_key_takeaways(["t"]).with_keywords(["k"]);
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["id"], "a");
    assert_eq!(value["keyTakeaways"][0], "t");
    assert_eq!(value["keywords"][0], "k");
    assert!(value.get("key_takeaways").is_none());

    let back: Document = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
}
