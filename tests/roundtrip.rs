//! Serializer conformance tests.
//!
//! Verifies the compact output grammar, the fixed number format, the
//! exactness of the size pass, the buffer entry point, and that parsing a
//! serialized tree reproduces the original structure.

use dotjson::{
    parse, serialization_size, serialize_into, serialize_to_string, Array, JsonError, Object,
    Value,
};

// ============================================================================
// Output format
// ============================================================================

#[test]
fn integer_and_float_forms() {
    let mut obj = Object::new();
    obj.set_number("n", 2.0).unwrap();
    obj.set_number("m", 2.5).unwrap();
    obj.set_string("s", "he said \"hi\"").unwrap();
    let value = Value::Object(obj);

    let text = serialize_to_string(&value).unwrap();
    assert_eq!(text, r#"{"n":2,"m":2.500000,"s":"he said \"hi\""}"#);
    assert_eq!(text.len(), serialization_size(&value).unwrap() - 1);
}

#[test]
fn compact_output_has_no_interstitial_whitespace() {
    let root = parse(r#"{ "a" : [ 1 , 2 ] , "b" : { "c" : true } }"#).unwrap();
    assert_eq!(
        serialize_to_string(&root).unwrap(),
        r#"{"a":[1,2],"b":{"c":true}}"#
    );
}

#[test]
fn literals_and_empty_containers() {
    let mut arr = Array::new();
    arr.append_bool(true).unwrap();
    arr.append_bool(false).unwrap();
    arr.append_null().unwrap();
    arr.append(Value::Object(Object::new())).unwrap();
    arr.append(Value::Array(Array::new())).unwrap();
    assert_eq!(
        serialize_to_string(&Value::Array(arr)).unwrap(),
        "[true,false,null,{},[]]"
    );
}

#[test]
fn string_escapes_in_output() {
    let mut arr = Array::new();
    arr.append_string("tab\there\nquote\"back\\slash").unwrap();
    assert_eq!(
        serialize_to_string(&Value::Array(arr)).unwrap(),
        r#"["tab\there\nquote\"back\\slash"]"#
    );
}

#[test]
fn non_ascii_emitted_verbatim() {
    let mut arr = Array::new();
    arr.append_string("héllo \u{1F600}").unwrap();
    let text = serialize_to_string(&Value::Array(arr)).unwrap();
    assert_eq!(text, "[\"héllo \u{1F600}\"]");
}

#[test]
fn non_finite_numbers_fail_serialization() {
    let mut arr = Array::new();
    arr.append_number(f64::NAN).unwrap();
    let value = Value::Array(arr);
    assert!(matches!(
        serialize_to_string(&value),
        Err(JsonError::NonFiniteNumber)
    ));
    assert!(serialization_size(&value).is_err());
}

// ============================================================================
// Size pass exactness
// ============================================================================

#[test]
fn size_matches_output_for_assorted_trees() {
    let inputs = [
        "{}",
        "[]",
        r#"{"a":1}"#,
        r#"[1,2.5,"x",true,null]"#,
        r#"{"nested":{"deep":[{"leaf":"véry"}]}}"#,
        r#"{"esc":"a\nb\tc\"d\\e"}"#,
    ];
    for input in inputs {
        let value = parse(input).unwrap();
        let text = serialize_to_string(&value).unwrap();
        assert_eq!(
            text.len(),
            serialization_size(&value).unwrap() - 1,
            "input {input:?}"
        );
    }
}

// ============================================================================
// Buffer entry point
// ============================================================================

#[test]
fn serialize_into_exact_buffer() {
    let value = parse(r#"{"k":[1,2]}"#).unwrap();
    let size = serialization_size(&value).unwrap();
    let mut buf = vec![0xFFu8; size];
    let written = serialize_into(&value, &mut buf).unwrap();
    assert_eq!(written, size - 1);
    assert_eq!(&buf[..written], br#"{"k":[1,2]}"#);
    assert_eq!(buf[written], 0);
}

#[test]
fn serialize_into_short_buffer_fails() {
    let value = parse(r#"{"k":[1,2]}"#).unwrap();
    let size = serialization_size(&value).unwrap();
    let mut buf = vec![0u8; size - 1];
    assert!(matches!(
        serialize_into(&value, &mut buf),
        Err(JsonError::BufferTooSmall)
    ));
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn parse_of_serialize_is_structurally_equal() {
    let mut obj = Object::new();
    obj.set_number("int", 42.0).unwrap();
    obj.set_number("float", 2.5).unwrap();
    obj.set_string("text", "with \"escapes\"\n").unwrap();
    obj.set_bool("flag", true).unwrap();
    obj.set_null("nothing").unwrap();
    let mut arr = Array::new();
    arr.append_number(-1.0).unwrap();
    let mut inner = Object::new();
    inner.set_string("k", "v").unwrap();
    arr.append(Value::Object(inner)).unwrap();
    obj.add("list", arr).unwrap();
    let value = Value::Object(obj);

    let reparsed = parse(&serialize_to_string(&value).unwrap()).unwrap();
    assert!(reparsed.equals(&value));
}

#[test]
fn serialized_text_is_a_fixed_point() {
    let input = r#"{"a":1,"b":[true,null,"x"],"c":{"d":2.500000}}"#;
    let once = serialize_to_string(&parse(input).unwrap()).unwrap();
    assert_eq!(once, input);
    let twice = serialize_to_string(&parse(&once).unwrap()).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn sub_epsilon_fractions_survive_equality_round_trip() {
    let mut arr = Array::new();
    arr.append_number(1.0 + 1e-9).unwrap();
    let value = Value::Array(arr);
    let reparsed = parse(&serialize_to_string(&value).unwrap()).unwrap();
    assert!(reparsed.equals(&value));
}
