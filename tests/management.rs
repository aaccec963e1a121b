use nlu::management::models::{DeleteModelResult, ListModelsResult};
use nlu::transcoding;

#[test]
fn test_list_models_payload_decodes() {
    let listing: ListModelsResult = transcoding::decode(
        br#"{
          "models": [
            {
              "status": "available",
              "model_id": "10:3c79bca4-a836-4eca-b692-0cd25e796ce8",
              "language": "en",
              "description": "Contract clause extraction model"
            },
            {
              "model_id": "10:6e3ab5cd-5a55-4fd3-8bbe-4b3aa1a42df2",
              "language": "de"
            }
          ]
        }"#,
    )
    .unwrap();

    let models = listing.models.unwrap();
    assert_eq!(2, models.len());
    assert_eq!(Some("available"), models[0].status.as_deref());
    assert_eq!(
        Some("10:3c79bca4-a836-4eca-b692-0cd25e796ce8"),
        models[0].model_id.as_deref()
    );
    assert_eq!(None, models[1].status);
    assert_eq!(Some("de"), models[1].language.as_deref());
}

#[test]
fn test_delete_model_payload_decodes() {
    let deleted: DeleteModelResult =
        transcoding::decode(br#"{"deleted": "10:3c79bca4-a836-4eca-b692-0cd25e796ce8"}"#).unwrap();

    assert_eq!(
        Some("10:3c79bca4-a836-4eca-b692-0cd25e796ce8"),
        deleted.deleted.as_deref()
    );
}
