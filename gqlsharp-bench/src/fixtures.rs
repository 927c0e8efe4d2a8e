//! Synthetic schema fixtures.

use gqlsharp_schema::{
    EnumDef, FieldDef, InterfaceDef, ObjectDef, Schema, SchemaError, TypeDef, TypeRef,
};

const SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Builds a schema with `objects` object types of `fields` fields each.
///
/// Every object implements two shared interfaces and references the next
/// object type, and an enum is interleaved every ten objects so the visitor
/// also has types to skip.
///
/// # Errors
/// Returns `SchemaError` if two generated types share a name.
pub fn synthetic_schema(objects: usize, fields: usize) -> Result<Schema, SchemaError> {
    let mut types: Vec<TypeDef> = vec![
        InterfaceDef::new("Node")
            .with_field(FieldDef::new("id", TypeRef::named("ID").non_null()))
            .into(),
        InterfaceDef::new("Entity").into(),
    ];

    for i in 0..objects {
        if i % 10 == 0 {
            types.push(EnumDef::new(format!("Kind{i}"), vec!["A".into(), "B".into()]).into());
        }

        let mut object = ObjectDef::new(format!("Type{i}"))
            .implements("Node")
            .implements("Entity");
        for j in 0..fields {
            let mut ty = TypeRef::named(SCALARS[j % SCALARS.len()]);
            if j % 2 == 0 {
                ty = ty.non_null();
            }
            if j % 3 == 0 {
                ty = ty.list();
            }
            object.add_field(FieldDef::new(format!("field_{j}"), ty));
        }
        object.add_field(FieldDef::new("next", TypeRef::named(format!("Type{}", (i + 1) % objects))));
        types.push(object.into());
    }

    Schema::from_types(types)
}
