//! Render-ready data model handed to mixins and templates.
//!
//! A [`Document`] is built once per generation run, mutated by mixins, then
//! serialised into the template context. Field names here are the names
//! templates see (`struct.fields`, `field.is_pointer`, ...).
//!
//! Records are stored per kind, and the document separately remembers the
//! order in which the walker met them across kinds. Templates iterate
//! [`Document::declarations`] to emit records in source order.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

/// Package name used when no mixin overrides it.
pub const DEFAULT_PACKAGE_NAME: &str = "types";

/// Arbitrary data attached to a record for use by template overrides.
///
/// Nothing in this crate reads it; mixins write it and overridden templates
/// read it (e.g. `{{ struct.custom_data.table }}`).
pub type CustomData = BTreeMap<String, serde_json::Value>;

/// Root of the model: everything one template render consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Omit the generated-code header and package clause.
    pub skip_header: bool,
    pub package_name: String,
    pub structs: Vec<Struct>,
    pub type_aliases: Vec<TypeAlias>,
    /// Reserved for declarations the builder does not materialise yet.
    pub const_groups: Vec<ConstGroup>,
    /// Encounter order across the three record lists.
    #[serde(skip)]
    pub order: Vec<RecordRef>,
}

/// Which record list a [`RecordRef`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Struct,
    TypeAlias,
    ConstGroup,
}

/// Position of one record: its kind and its index in that kind's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordRef {
    pub kind: RecordKind,
    pub index: usize,
}

/// One record in render order, as the entry template sees it.
///
/// Serialises as `{ "kind": "struct", "record": { ... } }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Declaration<'a> {
    Struct(&'a Struct),
    TypeAlias(&'a TypeAlias),
    ConstGroup(&'a ConstGroup),
}

impl Default for Document {
    fn default() -> Self {
        Self {
            skip_header: false,
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            structs: Vec::new(),
            type_aliases: Vec::new(),
            const_groups: Vec::new(),
            order: Vec::new(),
        }
    }
}

/// Data model for `struct.tera`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Struct {
    pub name: String,
    pub doc: Vec<String>,
    /// Embedded (inherited) type names, in declared order.
    pub embeds: Vec<String>,
    pub fields: Vec<Field>,
    pub custom_data: CustomData,
}

/// A field within a [`Struct`], rendered by `field.tera`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Field {
    /// Exported Go field name.
    pub name: String,
    pub doc: Vec<String>,
    /// Resolved Go type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Render the field as a pointer. Starts equal to `optional`.
    pub is_pointer: bool,
    /// Member name exactly as declared, used in the `json` tag.
    pub json_name: String,
    /// Declared with `?`; adds `omitempty` to the tag.
    pub optional: bool,
    pub custom_data: CustomData,
}

/// Data model for `type_alias.tera`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TypeAlias {
    pub name: String,
    pub doc: Vec<String>,
    /// Name of the aliased type.
    #[serde(rename = "type")]
    pub type_name: String,
    pub custom_data: CustomData,
}

/// Data model for `const_group.tera`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConstGroup {
    pub doc: Vec<String>,
    pub custom_data: CustomData,
}

impl Document {
    /// Append a struct and record its position in source order.
    pub fn push_struct(&mut self, record: Struct) {
        self.order.push(RecordRef {
            kind: RecordKind::Struct,
            index: self.structs.len(),
        });
        self.structs.push(record);
    }

    /// Append a type alias and record its position in source order.
    pub fn push_type_alias(&mut self, record: TypeAlias) {
        self.order.push(RecordRef {
            kind: RecordKind::TypeAlias,
            index: self.type_aliases.len(),
        });
        self.type_aliases.push(record);
    }

    /// Every record in render order.
    ///
    /// Follows [`Document::order`], which fixes which kind fills each slot;
    /// the record in a slot is whatever sits at that index now, so a mixin
    /// that sorts one list reorders that kind in place. References that are
    /// out of range or repeated are skipped. Records the order does not
    /// cover, such as ones a mixin pushed directly, follow at the end,
    /// structs first, then type aliases, then const groups.
    pub fn declarations(&self) -> Vec<Declaration<'_>> {
        let mut seen: HashSet<RecordRef> = HashSet::with_capacity(self.order.len());
        let mut declarations = Vec::with_capacity(
            self.structs.len() + self.type_aliases.len() + self.const_groups.len(),
        );

        for &record in &self.order {
            if let Some(declaration) = self.declaration(record) {
                if seen.insert(record) {
                    declarations.push(declaration);
                }
            }
        }

        let lengths = [
            (RecordKind::Struct, self.structs.len()),
            (RecordKind::TypeAlias, self.type_aliases.len()),
            (RecordKind::ConstGroup, self.const_groups.len()),
        ];
        for (kind, len) in lengths {
            for index in 0..len {
                let record = RecordRef { kind, index };
                if !seen.contains(&record) {
                    declarations.extend(self.declaration(record));
                }
            }
        }

        declarations
    }

    fn declaration(&self, record: RecordRef) -> Option<Declaration<'_>> {
        match record.kind {
            RecordKind::Struct => self.structs.get(record.index).map(Declaration::Struct),
            RecordKind::TypeAlias => self.type_aliases.get(record.index).map(Declaration::TypeAlias),
            RecordKind::ConstGroup => self.const_groups.get(record.index).map(Declaration::ConstGroup),
        }
    }

    /// Look up a struct by its current name.
    ///
    /// A convenience for mixins, which usually target records by name.
    pub fn find_struct(&self, name: &str) -> Option<&Struct> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Mutable variant of [`Document::find_struct`], for mixins that edit
    /// one named struct.
    pub fn find_struct_mut(&mut self, name: &str) -> Option<&mut Struct> {
        self.structs.iter_mut().find(|s| s.name == name)
    }

    /// Iterate every field of every struct, mutably.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.structs.iter_mut().flat_map(|s| s.fields.iter_mut())
    }
}

impl Struct {
    /// Look up a field by its member name as declared (the `json` tag
    /// name), which mixins cannot change by renaming the Go field.
    pub fn field(&self, json_name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.json_name == json_name)
    }

    /// Mutable variant of [`Struct::field`].
    pub fn field_mut(&mut self, json_name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.json_name == json_name)
    }
}
