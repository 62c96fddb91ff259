use specular::meta::TaggedUnion;
use specular::{encode_to_string, reflect_struct, reflect_variant};

#[test]
fn optional_is_transparent() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode_to_string(&None::<i32>)?, "null");
    assert_eq!(encode_to_string(&Some(5))?, "5");

    // Nesting adds no wrapper either way.
    assert_eq!(encode_to_string(&Some(Some(3)))?, "3");
    assert_eq!(encode_to_string(&Some(None::<i32>))?, "null");
    Ok(())
}

#[test]
fn result_encodes_state_and_payload() -> Result<(), Box<dyn std::error::Error>> {
    let ok: Result<i32, String> = Ok(12);
    assert_eq!(encode_to_string(&ok)?, r#"{"state":"value","value":12}"#);

    let err: Result<i32, String> = Err("boom".into());
    assert_eq!(encode_to_string(&err)?, r#"{"state":"error","error":"boom"}"#);
    Ok(())
}

#[test]
fn result_payloads_recurse() -> Result<(), Box<dyn std::error::Error>> {
    let ok: Result<Vec<i32>, String> = Ok(vec![1, 2]);
    assert_eq!(encode_to_string(&ok)?, r#"{"state":"value","value":[1,2]}"#);

    let err: Result<i32, Option<String>> = Err(None);
    assert_eq!(encode_to_string(&err)?, r#"{"state":"error","error":null}"#);
    Ok(())
}

enum Packet {
    Count(u32),
    Label(String),
    Ratio(f64),
}

reflect_variant!(Packet { Count, Label, Ratio });

#[test]
fn variant_emits_index_then_value() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        encode_to_string(&Packet::Count(3))?,
        r#"{"index":0,"value":3}"#
    );
    assert_eq!(
        encode_to_string(&Packet::Label("hi".into()))?,
        r#"{"index":1,"value":"hi"}"#
    );
    assert_eq!(
        encode_to_string(&Packet::Ratio(0.5))?,
        r#"{"index":2,"value":0.5}"#
    );
    Ok(())
}

#[test]
fn variant_index_follows_declaration_order() {
    assert_eq!(Packet::Count(0).index(), 0);
    assert_eq!(Packet::Label(String::new()).index(), 1);
    assert_eq!(Packet::Ratio(0.0).index(), 2);
}

struct Reading {
    sensor: String,
    measurement: Packet,
}

reflect_struct!(Reading { fields: { sensor, measurement } });

#[test]
fn variants_nest_inside_records() -> Result<(), Box<dyn std::error::Error>> {
    let reading = Reading {
        sensor: "s1".into(),
        measurement: Packet::Count(9),
    };
    assert_eq!(
        encode_to_string(&reading)?,
        r#"{"sensor":"s1","measurement":{"index":0,"value":9}}"#
    );
    Ok(())
}

enum Either {
    Left(i32),
    Right(String),
}

reflect_variant!(Either { Left, Right });

#[test]
fn two_alternative_union() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        encode_to_string(&Either::Left(3))?,
        r#"{"index":0,"value":3}"#
    );
    assert_eq!(
        encode_to_string(&Either::Right("hi".into()))?,
        r#"{"index":1,"value":"hi"}"#
    );
    Ok(())
}
