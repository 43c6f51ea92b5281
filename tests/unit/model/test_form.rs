use api_base::model::form::{FieldValue, FilePart, FormData, FormEntry, FormFields};
use serde_json::json;

fn texts(form: &FormData) -> Vec<(String, String)> {
    form.entries()
        .iter()
        .map(|(k, v)| (k.clone(), v.as_text().unwrap_or("<file>").to_string()))
        .collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_fields_without_brackets() {
    let fields = FormFields::new()
        .field("a", vec![json!(1), json!(2)])
        .field("b", "x")
        .field("c", json!({"d": 1}));

    let form = FormData::from_fields(&fields, false);

    assert_eq!(
        texts(&form),
        pairs(&[("a", "1"), ("a", "2"), ("b", "x"), ("c", r#"{"d":1}"#)])
    );
}

#[test]
fn test_fields_with_brackets() {
    let fields = FormFields::new()
        .field("a", json!([1, 2]))
        .field("b", "x")
        .field("c", json!({"d": 1}));

    let form = FormData::from_fields(&fields, true);

    assert_eq!(
        texts(&form),
        pairs(&[("a[]", "1"), ("a[]", "2"), ("b", "x"), ("c", r#"{"d":1}"#)])
    );
}

#[test]
fn test_fields_keep_insertion_order() {
    let fields = FormFields::new().field("z", "1").field("a", "2");
    let form = FormData::from_fields(&fields, false);
    assert_eq!(texts(&form), pairs(&[("z", "1"), ("a", "2")]));
}

#[test]
fn test_files_are_appended_as_is() {
    let avatar = FilePart::new(b"PNG".to_vec())
        .with_file_name("avatar.png")
        .with_mime_type("image/png");
    let fields = FormFields::new()
        .field("avatar", avatar.clone())
        .field("attachments", vec![FieldValue::from(avatar.clone()), FieldValue::from("note")]);

    let form = FormData::from_fields(&fields, true);

    assert_eq!(form.get_all("avatar"), vec![&FormEntry::File(avatar.clone())]);
    assert_eq!(
        form.get_all("attachments[]"),
        vec![&FormEntry::File(avatar), &FormEntry::Text("note".to_string())]
    );
    assert!(form.has_files());
}

#[test]
fn test_null_fields_produce_no_entries() {
    let fields = FormFields::new()
        .field("gone", json!(null))
        .field("kept", json!(0));
    let form = FormData::from_fields(&fields, false);
    assert_eq!(texts(&form), pairs(&[("kept", "0")]));
}

#[test]
fn test_scalars_use_their_string_form() {
    let form = FormData::from_value(
        &json!({"zeta": "1", "flag": true, "ratio": 0.5, "alpha": [null, 3]}),
        false,
    );
    assert_eq!(
        texts(&form),
        pairs(&[("zeta", "1"), ("flag", "true"), ("ratio", "0.5"), ("alpha", "3")])
    );
}

#[test]
fn test_nested_objects_in_sequences_become_json() {
    let form = FormData::from_value(&json!({"items": [{"id": 1}, "plain"]}), false);
    assert_eq!(
        texts(&form),
        pairs(&[("items", r#"{"id":1}"#), ("items", "plain")])
    );
}

#[test]
fn test_into_multipart_accepts_files() {
    let mut form = FormData::new();
    form.append_text("name", "rex");
    form.append_file(
        "photo",
        FilePart::new(vec![1u8, 2, 3]).with_mime_type("image/jpeg"),
    );
    assert!(form.into_multipart().is_ok());
}

#[test]
fn test_into_multipart_rejects_bad_mime() {
    let mut form = FormData::new();
    form.append_file("photo", FilePart::new(vec![1u8]).with_mime_type("not a mime"));
    assert!(form.into_multipart().is_err());
}
