use std::collections::BTreeMap;

pub type ValidationResult = Result<(), String>;

/// camelCase field name -> message shown next to that field.
pub type FieldErrors = BTreeMap<String, String>;
