use recto::types::Callable;
use recto::{RecordError, RectoRecord, Reflection, SourceKind};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(RectoRecord, Serialize, Deserialize)]
#[record(from_query)]
struct Invite {
    #[record(from_body)]
    code: String,
    uses: u32,
}

impl Callable for Invite {
    fn call_method(&self, name: &str, args: &[Value]) -> Option<Value> {
        match name {
            "remaining" => {
                let cap = args.first().and_then(Value::as_u64)?;
                Some(json!(cap.saturating_sub(u64::from(self.uses))))
            }
            _ => None,
        }
    }
}

#[test]
fn type_reflection_has_no_member_values() {
    let reflect = Reflection::of::<Invite>();
    assert_eq!(reflect.member_value("code"), None);
    assert_eq!(reflect.constructor_params().len(), 2);
}

#[test]
fn instance_reflection_reads_member_values() {
    let invite = Invite {
        code: "xyz".into(),
        uses: 2,
    };
    let reflect = Reflection::of_instance(&invite).unwrap();
    assert_eq!(reflect.member_value("code"), Some(json!("xyz")));
    assert_eq!(reflect.member_value("nope"), None);
    assert!(reflect.member("nope").is_none());
}

#[test]
fn tag_lookups_respect_levels() {
    let reflect = Reflection::of::<Invite>();

    let member = reflect.find_member_tag("code", |_| true).unwrap();
    assert_eq!(member.kind, SourceKind::Body);

    assert!(reflect.member_tags("uses").is_empty());
    assert!(reflect.member_tags("nope").is_empty());

    let class = reflect.find_class_tag(|_| true).unwrap();
    assert_eq!(class.kind, SourceKind::Query);
    assert!(reflect.find_class_tag(|tag| tag.kind == SourceKind::Route).is_none());
}

#[test]
fn invoke_dispatches_through_the_context() {
    let invite = Invite {
        code: "xyz".into(),
        uses: 2,
    };
    let reflect = Reflection::of_instance(&invite).unwrap().with_context(&invite);

    assert_eq!(reflect.invoke("remaining", &[json!(5)]).unwrap(), json!(3));

    let err = reflect.invoke("expiry", &[]).unwrap_err();
    assert!(matches!(err, RecordError::UnknownMethod { .. }));
}

#[test]
fn invoke_without_context_is_an_unknown_method() {
    let reflect = Reflection::of::<Invite>();
    let err = reflect.invoke("remaining", &[]).unwrap_err();
    assert!(matches!(err, RecordError::UnknownMethod { .. }));
}
