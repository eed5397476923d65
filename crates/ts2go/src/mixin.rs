//! Document customizations applied between building and rendering.
//!
//! A mixin gets the whole [`Document`] mutably and may change anything in
//! it. Mixins run one after another in the order they were registered; each
//! sees exactly what the previous ones left behind, and nothing is validated
//! in between.

use crate::model::Document;

/// A document mutation step. Any `Fn(&mut Document)` closure converts into one.
pub type Mixin = Box<dyn Fn(&mut Document)>;

/// Apply `mixins` to `document` in order.
pub fn apply(document: &mut Document, mixins: &[Mixin]) {
    for mixin in mixins {
        mixin(document);
    }
}

/// Render optional fields as plain values; `omitempty` is kept.
pub fn skip_optional_pointer() -> Mixin {
    Box::new(|document: &mut Document| {
        for field in document.fields_mut() {
            field.is_pointer = false;
        }
    })
}

/// Omit the generated-code header and package clause.
pub fn skip_header() -> Mixin {
    Box::new(|document: &mut Document| document.skip_header = true)
}

pub fn set_package_name(name: impl Into<String>) -> Mixin {
    let name = name.into();
    Box::new(move |document: &mut Document| document.package_name.clone_from(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Struct};
    use serde_json::json;

    fn document_with_optional_field() -> Document {
        Document {
            structs: vec![Struct {
                name: "Foo".to_string(),
                fields: vec![Field {
                    name: "Bar".to_string(),
                    json_name: "bar".to_string(),
                    type_name: "string".to_string(),
                    optional: true,
                    is_pointer: true,
                    ..Field::default()
                }],
                ..Struct::default()
            }],
            ..Document::default()
        }
    }

    #[test]
    fn test_skip_optional_pointer_keeps_optional() {
        let mut document = document_with_optional_field();
        apply(&mut document, &[skip_optional_pointer()]);

        let bar = &document.structs[0].fields[0];
        assert!(!bar.is_pointer);
        assert!(bar.optional);
    }

    #[test]
    fn test_settings_mixins() {
        let mut document = Document::default();
        apply(&mut document, &[skip_header(), set_package_name("api")]);
        assert!(document.skip_header);
        assert_eq!(document.package_name, "api");
    }

    #[test]
    fn test_mixins_run_in_order() {
        let mut document = Document::default();
        let mixins: Vec<Mixin> = vec![
            set_package_name("first"),
            Box::new(|d: &mut Document| {
                let seen = d.package_name.clone();
                d.package_name = format!("{seen}_second");
            }),
        ];
        apply(&mut document, &mixins);
        assert_eq!(document.package_name, "first_second");
    }

    #[test]
    fn test_custom_mixin_can_rename_and_tag() {
        let mut document = document_with_optional_field();
        let tag: Mixin = Box::new(|d: &mut Document| {
            if let Some(foo) = d.find_struct_mut("Foo") {
                foo.name = "FooDTO".to_string();
                foo.custom_data.insert("table".to_string(), json!("foos"));
            }
        });
        apply(&mut document, &[tag]);

        let renamed = document.find_struct("FooDTO").unwrap();
        assert_eq!(renamed.custom_data["table"], json!("foos"));
    }

    #[test]
    fn test_mixin_may_leave_document_inconsistent() {
        let mut document = document_with_optional_field();
        let clear: Mixin = Box::new(|d: &mut Document| {
            d.structs[0].name.clear();
            d.structs[0].fields.clear();
        });
        apply(&mut document, &[clear]);
        assert!(document.structs[0].name.is_empty());
        assert!(document.structs[0].fields.is_empty());
    }
}
