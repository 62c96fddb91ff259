use specular::meta::Describe;
use specular::{Encode, encode_to_string, reflect_struct};

#[derive(Default)]
struct Named {
    name: String,
}

#[derive(Default)]
struct Address {
    street: String,
    number: i32,
}

#[derive(Default)]
struct Employee {
    base: Named,
    id: i32,
    address: Address,
    favorite_numbers: Vec<i32>,
}

reflect_struct!(Named { fields: { name } });
reflect_struct!(Address { fields: { street, number } });
reflect_struct!(Employee {
    bases: { base: Named },
    fields: { id, address, favorite_numbers },
});

fn sample_employee() -> Employee {
    Employee {
        base: Named {
            name: "Vera".into(),
        },
        id: 7,
        address: Address {
            street: "Harbor Lane".into(),
            number: 9,
        },
        favorite_numbers: vec![3, 5, 7],
    }
}

#[test]
fn base_fields_precede_own_fields() -> Result<(), Box<dyn std::error::Error>> {
    let expected = concat!(
        r#"{"name":"Vera","id":7,"#,
        r#""address":{"street":"Harbor Lane","number":9},"#,
        r#""favorite_numbers":[3,5,7]}"#
    );
    assert_eq!(encode_to_string(&sample_employee())?, expected);
    Ok(())
}

struct Created {
    created_at: i64,
}

struct Updated {
    updated_at: i64,
}

struct Document {
    created: Created,
    updated: Updated,
    title: String,
}

reflect_struct!(Created { fields: { created_at } });
reflect_struct!(Updated { fields: { updated_at } });
reflect_struct!(Document {
    bases: { created: Created, updated: Updated },
    fields: { title },
});

#[test]
fn multiple_bases_flatten_in_declared_order() -> Result<(), Box<dyn std::error::Error>> {
    let document = Document {
        created: Created { created_at: 100 },
        updated: Updated { updated_at: 200 },
        title: "notes".into(),
    };
    assert_eq!(
        encode_to_string(&document)?,
        r#"{"created_at":100,"updated_at":200,"title":"notes"}"#
    );
    Ok(())
}

struct Root {
    id: u32,
}

struct Middle {
    root: Root,
    level: u32,
}

struct Leaf {
    middle: Middle,
    name: String,
}

reflect_struct!(Root { fields: { id } });
reflect_struct!(Middle {
    bases: { root: Root },
    fields: { level },
});
reflect_struct!(Leaf {
    bases: { middle: Middle },
    fields: { name },
});

#[test]
fn base_chains_flatten_recursively() -> Result<(), Box<dyn std::error::Error>> {
    let leaf = Leaf {
        middle: Middle {
            root: Root { id: 1 },
            level: 2,
        },
        name: "leaf".into(),
    };
    assert_eq!(
        encode_to_string(&leaf)?,
        r#"{"id":1,"level":2,"name":"leaf"}"#
    );
    Ok(())
}

struct Empty {}

reflect_struct!(Empty { fields: {} });

#[test]
fn empty_record_is_an_empty_object() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode_to_string(&Empty {})?, "{}");
    Ok(())
}

struct Stamp {
    id: u32,
}

struct Ticket {
    stamp: Stamp,
    id: u32,
}

reflect_struct!(Stamp { fields: { id } });
reflect_struct!(Ticket {
    bases: { stamp: Stamp },
    fields: { id },
});

#[test]
fn duplicate_field_names_are_preserved() -> Result<(), Box<dyn std::error::Error>> {
    // A base and the record itself may both contribute a field called `id`;
    // both keys are emitted, nothing is deduplicated.
    let ticket = Ticket {
        stamp: Stamp { id: 1 },
        id: 2,
    };
    assert_eq!(encode_to_string(&ticket)?, r#"{"id":1,"id":2}"#);
    Ok(())
}

struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

reflect_struct!(Node { fields: { value, next } });

#[test]
fn recursion_follows_the_value_structure() -> Result<(), Box<dyn std::error::Error>> {
    let list = Node {
        value: 1,
        next: Some(Box::new(Node {
            value: 2,
            next: None,
        })),
    };
    assert_eq!(
        encode_to_string(&list)?,
        r#"{"value":1,"next":{"value":2,"next":null}}"#
    );
    Ok(())
}

#[test]
fn descriptor_exposes_own_fields() {
    let descriptor = Employee::descriptor();
    let names: Vec<_> = descriptor.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["id", "address", "favorite_numbers"]);
}

#[test]
fn visit_fields_yields_flattened_order() -> Result<(), Box<dyn std::error::Error>> {
    let employee = sample_employee();
    let mut names = Vec::new();
    Employee::descriptor().visit_fields(&employee, &mut |name, _| {
        names.push(name);
        Ok(())
    })?;
    assert_eq!(names, ["name", "id", "address", "favorite_numbers"]);
    Ok(())
}

#[test]
fn field_accessors_read_single_fields() -> Result<(), Box<dyn std::error::Error>> {
    let employee = sample_employee();
    let id_field = &Employee::descriptor().fields()[0];
    let mut out = specular::JsonWriter::new();
    id_field.get(&employee).encode(&mut out)?;
    assert_eq!(out.as_str(), "7");
    Ok(())
}
