//! Case-conversion filters available to override templates.

use std::collections::HashMap;

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use tera::{Result, Tera, Value};

/// Register every filter on `tera`.
pub(crate) fn register(tera: &mut Tera) {
    tera.register_filter("snake_case", snake_case);
    tera.register_filter("pascal_case", pascal_case);
    tera.register_filter("camel_case", camel_case);
    tera.register_filter("kebab_case", kebab_case);
}

fn convert(filter: &str, value: &Value, case: fn(&str) -> String) -> Result<Value> {
    value
        .as_str()
        .map(|s| Value::String(case(s)))
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter expects a string")))
}

pub(crate) fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("snake_case", value, |s| s.to_snake_case())
}

pub(crate) fn pascal_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("pascal_case", value, |s| s.to_pascal_case())
}

pub(crate) fn camel_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("camel_case", value, |s| s.to_lower_camel_case())
}

pub(crate) fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    convert("kebab_case", value, |s| s.to_kebab_case())
}
