use nlu::error::ErrorKind;
use nlu::features::{
    CategoriesOptions, ConceptsOptions, EmotionOptions, EntitiesOptions, Features,
    KeywordsOptions, MetadataOptions, RelationsOptions, SemanticRolesOptions, SentimentOptions,
};
use nlu::options::analyze_options::AnalyzeOptions;

#[test]
fn test_request_body_matches_the_wire_contract() {
    let opts = AnalyzeOptions::new(
        Features::new()
            .concepts(ConceptsOptions::new().limit(8))
            .entities(
                EntitiesOptions::new()
                    .limit(10)
                    .mentions(true)
                    .sentiment(true),
            )
            .keywords(KeywordsOptions::new().limit(5).emotion(true))
            .semantic_roles(SemanticRolesOptions::new().keywords(true).entities(true))
            .sentiment(SentimentOptions::new().targets(vec!["IBM".to_string()])),
    )
    .url("https://www.example.org/about")
    .clean(true)
    .xpath("//body")
    .fallback_to_raw(true)
    .return_analyzed_text(false)
    .language("en")
    .limit_text_characters(2048);

    let body = opts.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!("https://www.example.org/about", value["url"]);
    assert!(!object.contains_key("text"));
    assert!(!object.contains_key("html"));
    assert_eq!(true, value["clean"]);
    assert_eq!("//body", value["xpath"]);
    assert_eq!(true, value["fallback_to_raw"]);
    assert_eq!(false, value["return_analyzed_text"]);
    assert_eq!("en", value["language"]);
    assert_eq!(2048, value["limit_text_characters"]);

    let features = value["features"].as_object().unwrap();
    assert_eq!(8, features["concepts"]["limit"]);
    assert_eq!(true, features["entities"]["mentions"]);
    assert_eq!(5, features["keywords"]["limit"]);
    assert_eq!(true, features["semantic_roles"]["keywords"]);
    assert_eq!("IBM", features["sentiment"]["targets"][0]);
    assert!(!features.contains_key("emotion"));
    assert!(!features.contains_key("metadata"));
    assert!(!features.contains_key("relations"));
    assert!(!features.contains_key("categories"));
}

#[test]
fn test_presence_only_features_serialize_as_empty_objects() {
    let opts = AnalyzeOptions::new(
        Features::new()
            .metadata(MetadataOptions::new())
            .categories(CategoriesOptions::new()),
    )
    .url("https://www.example.org/about");

    let body = opts.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        r#"{"metadata":{},"categories":{}}"#,
        value["features"].to_string()
    );
}

#[test]
fn test_to_json_refuses_an_invalid_request() {
    let err = AnalyzeOptions::new(Features::new().emotion(EmotionOptions::new()))
        .to_json()
        .unwrap_err();

    match err.kind() {
        ErrorKind::InvalidArgument(kind) => {
            assert_eq!(Some("text"), kind.arg.as_deref());
        }
        kind => panic!("expected invalid argument, got {kind:?}"),
    }
}

#[test]
fn test_features_deserialize_from_the_wire_shape() {
    let features: Features = serde_json::from_str(
        r#"{
          "relations": {"model": "en-news"},
          "semantic_roles": {"limit": 10},
          "unrecognized": {"limit": 1}
        }"#,
    )
    .unwrap();

    assert_eq!(
        Features::new()
            .relations(RelationsOptions::new().model("en-news"))
            .semantic_roles(SemanticRolesOptions::new().limit(10)),
        features
    );
}
