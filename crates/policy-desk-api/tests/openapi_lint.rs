use policy_desk_api::openapi_v1_spec;
use serde_json::Value;

#[test]
fn openapi_paths_and_component_schemas_are_lexicographically_sorted() {
    let spec = openapi_v1_spec();
    assert_sorted_object(spec.get("paths").expect("paths"));
    let schemas = spec
        .get("components")
        .and_then(|v| v.get("schemas"))
        .expect("components.schemas");
    assert_sorted_object(schemas);
}

#[test]
fn openapi_schema_lint_rules_hold() {
    let spec = openapi_v1_spec();
    assert_eq!(spec["openapi"], "3.0.3");
    assert_eq!(spec["info"]["version"], "v1");

    let policy = &spec["components"]["schemas"]["Policy"];
    assert_eq!(policy["additionalProperties"], Value::Bool(false));
    let required = policy["required"]
        .as_array()
        .expect("Policy.required array")
        .iter()
        .map(|v| v.as_str().expect("required string"))
        .collect::<Vec<_>>();
    assert_eq!(
        required,
        vec!["id", "title", "provider", "region", "target", "benefit", "period", "category"]
    );
}

#[test]
fn policy_schema_matches_serialized_policy_keys() {
    let policy = policy_desk_model::Policy::from_upstream(0, Default::default());
    let wire = serde_json::to_value(policy).expect("serialize");
    let spec = openapi_v1_spec();
    let props = spec["components"]["schemas"]["Policy"]["properties"]
        .as_object()
        .expect("properties");
    let mut wire_keys = wire.as_object().expect("object").keys().cloned().collect::<Vec<_>>();
    let mut schema_keys = props.keys().cloned().collect::<Vec<_>>();
    wire_keys.sort();
    schema_keys.sort();
    assert_eq!(wire_keys, schema_keys);
}

fn assert_sorted_object(value: &Value) {
    let object = value.as_object().expect("json object");
    let observed = object.keys().map(String::as_str).collect::<Vec<_>>();
    let mut sorted = observed.clone();
    sorted.sort_unstable();
    assert_eq!(observed, sorted);
}
