//! Keyed-map combinator
//!
//! Validates a string-keyed map against a table of per-key validators.
//! Each key in the table is required, optional or forbidden:
//!
//! - a missing required key fails the whole map before anything is validated;
//! - unknown input keys fail the map unless the table ignores them;
//! - every present key is validated in table order, and the first failure
//!   aborts the map;
//! - a forbidden key fails when its validator *accepts* the value and is
//!   passed through untouched when the validator rejects it.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use sift_value::{Object, Value};

use crate::config::ValidatorConfig;
use crate::foundation::{
    BoxedValidator, ErrorKind, Validate, ValidateTyped, ValidationError, ValidationResult,
};

// ============================================================================
// KEY
// ============================================================================

/// A schema key and its presence rule.
///
/// Equality and hashing use the name alone, so a table cannot hold two
/// keys with the same name under different rules.
#[derive(Debug, Clone)]
pub enum Key {
    /// Must be present.
    Required(String),
    /// May be absent. The default is recorded with the key but never
    /// injected into the output.
    Optional {
        name: String,
        default: Option<Value>,
    },
    /// Fails the map if present and its validator accepts the value.
    Forbidden(String),
}

impl Key {
    pub fn required(name: impl Into<String>) -> Self {
        Self::Required(name.into())
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self::Optional {
            name: name.into(),
            default: None,
        }
    }

    pub fn optional_with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self::Optional {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    pub fn forbidden(name: impl Into<String>) -> Self {
        Self::Forbidden(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Required(name) | Self::Forbidden(name) => name,
            Self::Optional { name, .. } => name,
        }
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required(_))
    }

    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// The recorded default of an optional key.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Self::Optional { default, .. } => default.as_ref(),
            Self::Required(_) | Self::Forbidden(_) => None,
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::required(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Required(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// KEYED MAP
// ============================================================================

struct Entry {
    key: Key,
    validator: BoxedValidator,
}

/// Validates string-keyed maps against a per-key schema table.
///
/// # Examples
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let person = KeyedMap::new()
///     .required("name", of_type::<String>())
///     .required("age", predicate(|age: &i64| (18..=99).contains(age)));
///
/// let sue = Value::object([("name", Value::from("Sue")), ("age", Value::from(28))]);
/// assert_eq!(person.validate(&sue), Ok(sue.clone()));
///
/// let child = Value::object([("name", Value::from("Sue")), ("age", Value::from(8))]);
/// let err = person.validate(&child).unwrap_err();
/// assert_eq!(err.key.as_deref(), Some("age"));
/// assert!(err.find(ErrorKind::PredicateFailure).is_some());
/// ```
#[derive(Default)]
pub struct KeyedMap {
    entries: IndexMap<String, Entry>,
    ignore_unknown_keys: bool,
}

impl KeyedMap {
    /// An empty table that rejects unknown keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(key, validator)` pairs.
    pub fn from_entries<I>(entries: I, ignore_unknown_keys: bool) -> Self
    where
        I: IntoIterator<Item = (Key, BoxedValidator)>,
    {
        let mut map = Self::new().ignore_unknown_keys(ignore_unknown_keys);
        for (key, validator) in entries {
            map.insert(key, validator);
        }
        map
    }

    /// Adds `key` to the table, replacing any earlier key with the same name.
    pub fn insert(&mut self, key: Key, validator: BoxedValidator) {
        let name = key.name().to_owned();
        if self.entries.shift_remove(&name).is_some() {
            tracing::debug!(key = %name, "key redeclared, replacing earlier definition");
        }
        self.entries.insert(name, Entry { key, validator });
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn key<V>(mut self, key: Key, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.insert(key, Box::new(validator));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.key(Key::required(name), validator)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.key(Key::optional(name), validator)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn optional_with_default<V>(
        self,
        name: impl Into<String>,
        default: impl Into<Value>,
        validator: V,
    ) -> Self
    where
        V: Validate + 'static,
    {
        self.key(Key::optional_with_default(name, default), validator)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn forbidden<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate + 'static,
    {
        self.key(Key::forbidden(name), validator)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn ignore_unknown_keys(mut self, ignore: bool) -> Self {
        self.ignore_unknown_keys = ignore;
        self
    }

    /// Applies the schema-wide unknown-key setting.
    ///
    /// Child validators keep their own coercion policy; build them with
    /// [`Type::with_config`](crate::validators::Type::with_config) to share
    /// `config.coercion`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(self, config: &ValidatorConfig) -> Self {
        self.ignore_unknown_keys(config.ignore_unknown_keys)
    }

    #[must_use]
    pub fn ignores_unknown_keys(&self) -> bool {
        self.ignore_unknown_keys
    }

    /// Schema keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.values().map(|entry| &entry.key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates a map, producing a new map of the validated values.
    pub fn validate_object(&self, input: &Object) -> ValidationResult<Object> {
        let mut resolved = Vec::with_capacity(self.entries.len());

        for (name, entry) in &self.entries {
            match input.get(name) {
                Some(raw) => {
                    tracing::trace!(key = %name, "resolved key");
                    resolved.push((name, entry, raw));
                }
                None if entry.key.is_required() => {
                    tracing::trace!(key = %name, "required key missing");
                    return Err(ValidationError::new(
                        ErrorKind::MissingRequiredKey,
                        format!("missing key '{name}'"),
                    )
                    .with_key(name.clone()));
                }
                None => tracing::trace!(key = %name, "optional key absent"),
            }
        }

        if !self.ignore_unknown_keys {
            let unexpected: Vec<&str> = input
                .keys()
                .filter(|name| !self.entries.contains_key(name.as_str()))
                .map(String::as_str)
                .collect();
            if !unexpected.is_empty() {
                return Err(unexpected_keys(&unexpected));
            }
        }

        let mut output = Object::with_capacity(resolved.len());
        for (name, entry, raw) in resolved {
            let validated = validate_entry(name, entry, raw).map_err(|cause| {
                tracing::trace!(key = %name, kind = %cause.kind, "key failed validation");
                ValidationError::new(
                    ErrorKind::KeyValidationFailed,
                    format!("validation failed for key '{name}'"),
                )
                .with_key(name.clone())
                .with_cause(cause)
            })?;
            output.insert(name.clone(), validated);
        }

        Ok(output)
    }
}

fn validate_entry(name: &str, entry: &Entry, raw: &Value) -> ValidationResult<Value> {
    if !entry.key.is_forbidden() {
        return entry.validator.validate(raw);
    }

    match entry.validator.validate(raw) {
        Ok(_) => Err(ValidationError::new(
            ErrorKind::ForbiddenKeyPresent,
            format!("positive match for forbidden key '{name}'"),
        )
        .with_key(name)),
        Err(_) => Ok(raw.clone()),
    }
}

fn unexpected_keys(names: &[&str]) -> ValidationError {
    let listed = names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let message = if names.len() == 1 {
        format!("unexpected key {listed}")
    } else {
        format!("unexpected keys {listed}")
    };
    ValidationError::new(ErrorKind::UnexpectedKeys, message).with_param("keys", names.join(", "))
}

impl fmt::Debug for KeyedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedMap")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("ignore_unknown_keys", &self.ignore_unknown_keys)
            .finish()
    }
}

impl FromIterator<(Key, BoxedValidator)> for KeyedMap {
    fn from_iter<I: IntoIterator<Item = (Key, BoxedValidator)>>(iter: I) -> Self {
        Self::from_entries(iter, false)
    }
}

impl Validate for KeyedMap {
    fn validate(&self, value: &Value) -> ValidationResult<Value> {
        let input = value
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch("object", value.kind()))?;
        self.validate_object(input).map(Value::Object)
    }
}

impl ValidateTyped for KeyedMap {
    type Input = Object;
    type Output = Object;

    fn validate_typed(&self, input: &Object) -> ValidationResult<Object> {
        self.validate_object(input)
    }
}

/// Builds a keyed map from `(key, validator)` pairs.
pub fn keyed<I>(entries: I, ignore_unknown_keys: bool) -> KeyedMap
where
    I: IntoIterator<Item = (Key, BoxedValidator)>,
{
    KeyedMap::from_entries(entries, ignore_unknown_keys)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{of_type, predicate};
    use pretty_assertions::assert_eq;

    fn person() -> KeyedMap {
        KeyedMap::new()
            .required("name", of_type::<String>())
            .required("age", predicate(|age: &i64| (18..=99).contains(age)))
    }

    fn obj<const N: usize>(pairs: [(&str, Value); N]) -> Value {
        Value::object(pairs)
    }

    #[test]
    fn test_key_identity_is_name() {
        assert_eq!(Key::required("a"), Key::forbidden("a"));
        assert_ne!(Key::required("a"), Key::required("b"));
        assert_eq!(
            Key::optional_with_default("a", 3).default_value(),
            Some(&Value::from(3))
        );
        assert_eq!(Key::from("x"), Key::Required("x".to_owned()));
        assert!(Key::from("x").is_required());
    }

    #[test]
    fn test_valid_map_is_returned() {
        let sue = obj([("name", Value::from("Sue")), ("age", Value::from(28))]);
        assert_eq!(person().validate(&sue), Ok(sue.clone()));
    }

    #[test]
    fn test_failure_is_attributed_to_key() {
        let child = obj([("name", Value::from("Sue")), ("age", Value::from(8))]);
        let err = person().validate(&child).unwrap_err();
        assert_eq!(err.kind, ErrorKind::KeyValidationFailed);
        assert_eq!(err.key.as_deref(), Some("age"));
        assert_eq!(err.causes[0].kind, ErrorKind::PredicateFailure);
        assert_eq!(
            err.to_string(),
            "validation failed for key 'age' (predicate failed to validate)"
        );
    }

    #[test]
    fn test_missing_required_key() {
        let schema = KeyedMap::new().required("x", of_type::<Value>());
        let err = schema.validate(&obj([])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredKey);
        assert_eq!(err.key.as_deref(), Some("x"));
        assert_eq!(err.message, "missing key 'x'");
    }

    #[test]
    fn test_all_optional_accepts_empty() {
        let schema = KeyedMap::new()
            .optional("a", of_type::<i64>())
            .optional_with_default("b", 7, of_type::<i64>());
        assert_eq!(schema.validate(&obj([])), Ok(obj([])));
    }

    #[test]
    fn test_unexpected_keys_listed_in_input_order() {
        let schema = KeyedMap::new().required("name", of_type::<String>());

        let err = schema
            .validate(&obj([("name", Value::from("Sue")), ("extra", Value::from(1))]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedKeys);
        assert_eq!(err.message, "unexpected key 'extra'");

        let err = schema
            .validate(&obj([
                ("b", Value::Null),
                ("name", Value::from("Sue")),
                ("a", Value::Null),
            ]))
            .unwrap_err();
        assert_eq!(err.message, "unexpected keys 'b', 'a'");
        assert_eq!(err.param("keys"), Some("b, a"));
    }

    #[test]
    fn test_ignore_unknown_keys_drops_them() {
        let schema = KeyedMap::new()
            .required("name", of_type::<String>())
            .with_config(&ValidatorConfig::new().with_ignore_unknown_keys(true));
        assert_eq!(
            schema.validate(&obj([("name", Value::from("Sue")), ("extra", Value::from(1))])),
            Ok(obj([("name", Value::from("Sue"))]))
        );
    }

    #[test]
    fn test_missing_key_reported_before_unexpected() {
        let schema = KeyedMap::new().required("name", of_type::<String>());
        let err = schema.validate(&obj([("extra", Value::from(1))])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequiredKey);
    }

    #[test]
    fn test_values_are_coerced() {
        let schema = KeyedMap::new().required("age", of_type::<i64>());
        assert_eq!(
            schema.validate(&obj([("age", Value::from("28"))])),
            Ok(obj([("age", Value::from(28))]))
        );
    }

    #[test]
    fn test_forbidden_key_matching_fails() {
        let schema = KeyedMap::new()
            .required("name", of_type::<String>())
            .forbidden("password", of_type::<String>());

        let err = schema
            .validate(&obj([
                ("name", Value::from("Sue")),
                ("password", Value::from("hunter2")),
            ]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::KeyValidationFailed);
        assert_eq!(err.key.as_deref(), Some("password"));
        let inner = err.find(ErrorKind::ForbiddenKeyPresent).unwrap();
        assert_eq!(inner.message, "positive match for forbidden key 'password'");
    }

    #[test]
    fn test_forbidden_key_not_matching_passes_raw_value() {
        let schema = KeyedMap::new()
            .required("name", of_type::<String>())
            .forbidden("password", of_type::<String>());

        let input = obj([("name", Value::from("Sue")), ("password", Value::Null)]);
        assert_eq!(schema.validate(&input), Ok(input.clone()));
    }

    #[test]
    fn test_absent_forbidden_key_is_fine() {
        let schema = KeyedMap::new().forbidden("password", of_type::<Value>());
        assert_eq!(schema.validate(&obj([])), Ok(obj([])));
    }

    #[test]
    fn test_redeclared_key_last_wins() {
        let schema = KeyedMap::new()
            .required("x", of_type::<i64>())
            .optional("x", of_type::<String>());
        assert_eq!(schema.len(), 1);
        assert!(!schema.keys().next().unwrap().is_required());
        assert_eq!(schema.validate(&obj([])), Ok(obj([])));
        assert_eq!(
            schema.validate(&obj([("x", Value::from(1))])),
            Ok(obj([("x", Value::from("1"))]))
        );
    }

    #[test]
    fn test_fail_fast_in_table_order() {
        let schema = KeyedMap::new()
            .required("a", of_type::<i64>())
            .required("b", of_type::<i64>());
        let err = schema
            .validate(&obj([("b", Value::from("x")), ("a", Value::from("y"))]))
            .unwrap_err();
        assert_eq!(err.key.as_deref(), Some("a"));
    }

    #[test]
    fn test_non_map_input() {
        let err = person().validate(&Value::array([1])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.param("expected"), Some("object"));
    }

    #[test]
    fn test_keyed_from_pairs() {
        let schema = keyed(
            [
                (Key::required("id"), of_type::<i64>().boxed()),
                (Key::optional("tag"), of_type::<String>().boxed()),
            ],
            true,
        );
        assert!(schema.ignores_unknown_keys());
        assert_eq!(
            schema.validate_typed(
                obj([("id", Value::from("5")), ("junk", Value::Null)])
                    .as_object()
                    .unwrap()
            ),
            Ok(Object::from_iter([("id".to_owned(), Value::from(5))]))
        );
    }

    #[test]
    fn test_nested_maps() {
        let schema = KeyedMap::new().required("owner", person());
        let err = schema
            .validate(&obj([(
                "owner",
                obj([("name", Value::from("Sue")), ("age", Value::from(8))]),
            )]))
            .unwrap_err();
        assert_eq!(err.key.as_deref(), Some("owner"));
        assert_eq!(err.causes[0].key.as_deref(), Some("age"));
    }
}
