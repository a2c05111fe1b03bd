use recto::{Record, RectoRecord, RequestParts};
use serde::{Deserialize, Serialize};

#[derive(RectoRecord, Serialize, Deserialize, Debug, PartialEq)]
#[record(from_query)]
struct QuerySignup {
    id: i64,
    #[record(default = "anon")]
    name: String,
}

#[derive(RectoRecord, Serialize, Deserialize, Debug, PartialEq)]
#[record(from_query)]
struct MixedSignup {
    id: i64,
    #[record(from_body, default = "anon")]
    name: String,
}

#[derive(RectoRecord, Serialize, Deserialize, Debug, PartialEq)]
struct PlainSignup {
    id: i64,
    name: String,
}

#[derive(RectoRecord, Serialize, Deserialize, Debug, PartialEq)]
struct RoutedComment {
    #[record(from_route = "post_id")]
    post: i64,
    #[record(from_body)]
    text: String,
}

#[test]
fn class_tag_covers_all_untagged_fields() {
    let request = RequestParts::new().query("id", 3).body("id", 99);
    let signup = QuerySignup::from_request(&request).unwrap();
    assert_eq!(
        signup,
        QuerySignup {
            id: 3,
            name: "anon".into()
        }
    );
}

#[test]
fn member_tag_dominates_class_tag() {
    let request = RequestParts::new()
        .query("id", 1)
        .query("name", "Grace")
        .body("name", "Ada");
    let signup = MixedSignup::from_request(&request).unwrap();
    assert_eq!(signup.name, "Ada");
    assert_eq!(signup.id, 1);
}

#[test]
fn untagged_record_uses_generic_input() {
    let request = RequestParts::new()
        .body("id", 5)
        .body("name", "Ada")
        .query("name", "Grace");
    let signup = PlainSignup::from_request(&request).unwrap();
    assert_eq!(signup.name, "Ada");

    // Query-only values still reach untagged fields through generic input.
    let request = RequestParts::new().query("id", 5).query("name", "Grace");
    let signup = PlainSignup::from_request(&request).unwrap();
    assert_eq!(signup.name, "Grace");
}

#[test]
fn tag_rename_changes_the_lookup_name_only() {
    let request = RequestParts::new().route("post_id", 12).body("text", "hello");
    let comment = RoutedComment::from_request(&request).unwrap();
    assert_eq!(
        comment,
        RoutedComment {
            post: 12,
            text: "hello".into()
        }
    );
}

#[test]
fn missing_request_keys_fall_back_to_defaults_without_error() {
    let request = RequestParts::new().query("id", 8);
    let signup = MixedSignup::from_request(&request).unwrap();
    assert_eq!(signup.name, "anon");
}

#[test]
fn tagged_field_does_not_read_other_channels() {
    // `name` is tagged from_body; a query value must not leak into it.
    let request = RequestParts::new().query("id", 2).query("name", "Grace");
    let signup = MixedSignup::from_request(&request).unwrap();
    assert_eq!(signup.name, "anon");
}
