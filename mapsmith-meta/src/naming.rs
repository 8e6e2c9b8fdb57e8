//! Metadata-to-identifier naming rules shared by the generator passes.

use crate::ColumnMetadata;

/// Convert a string to PascalCase (e.g., "dept_info" -> "DeptInfo")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "tenant_id" -> "tenantId")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Derive a valid bean property name from a type name, following the
/// JavaBeans decapitalization rule: a leading acronym (first two characters
/// both uppercase) is left untouched, otherwise the first character is
/// lowercased.
pub fn valid_property_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    match chars.as_slice() {
        [] => String::new(),
        [first, second, ..] if first.is_uppercase() && second.is_uppercase() => name.to_string(),
        [first, rest @ ..] => first
            .to_lowercase()
            .chain(rest.iter().copied())
            .collect(),
    }
}

/// Calculate the name of the generated column-definition field a predicate
/// references for `column`.
///
/// The field is normally the column's Java property; when that property
/// collides with the table-definition field itself, the reference must be
/// qualified through the table field.
pub fn calculate_field_name(table_field_name: &str, column: &ColumnMetadata) -> String {
    let property = column.property();
    if property == table_field_name {
        format!("{table_field_name}.{property}")
    } else {
        property.to_string()
    }
}
