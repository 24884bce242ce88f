//! Null-safe navigation over untyped webhook payloads.
//!
//! Every step yields another [`Field`]; a missing key, a `null`, or a
//! non-object in the middle of a path simply produces an empty field.

use serde_json::{Map, Value};

/// What sits at the end of a path, without coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf<'a> {
    /// Absent key, `null`, or a broken path.
    Missing,
    Text(&'a str),
    Other(&'a Value),
}

#[derive(Debug, Clone, Copy)]
pub struct Field<'a>(Option<&'a Value>);

impl<'a> Field<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self(Some(value))
    }

    pub fn get(self, key: &str) -> Self {
        Self(self.0.and_then(|value| value.get(key)))
    }

    /// Walks a dotted path such as `"merged_by.login"`.
    pub fn path(self, path: &str) -> Self {
        path.split('.').fold(self, |field, key| field.get(key))
    }

    pub fn leaf(self) -> Leaf<'a> {
        match self.0 {
            None | Some(Value::Null) => Leaf::Missing,
            Some(Value::String(value)) => Leaf::Text(value),
            Some(other) => Leaf::Other(other),
        }
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.0.and_then(Value::as_str)
    }

    pub fn as_bool(self) -> Option<bool> {
        self.0.and_then(Value::as_bool)
    }

    pub fn as_object(self) -> Option<&'a Map<String, Value>> {
        self.0.and_then(Value::as_object)
    }

    pub fn string(self) -> Option<String> {
        self.as_str().map(str::to_string)
    }

    /// Renders scalar identifiers as strings; numeric ids keep their digits.
    pub fn to_id_string(self) -> Option<String> {
        match self.0? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_intermediate_levels_are_empty() {
        let payload = json!({"head_commit": {"id": "abc"}});
        let root = Field::root(&payload);
        assert_eq!(root.path("head_commit.author.name").as_str(), None);
        assert_eq!(root.path("nope.deeper.still").as_str(), None);
        assert_eq!(root.path("head_commit.id").as_str(), Some("abc"));
    }

    #[test]
    fn null_and_scalar_intermediates_are_empty() {
        let payload = json!({"merged_by": null, "user": "octocat"});
        let root = Field::root(&payload);
        assert_eq!(root.path("merged_by.login").as_str(), None);
        assert_eq!(root.path("user.login").as_str(), None);
    }

    #[test]
    fn id_strings_cover_numbers_and_strings() {
        let payload = json!({"a": 1_234_567_890_u64, "b": "sha", "c": true, "d": null});
        let root = Field::root(&payload);
        assert_eq!(root.get("a").to_id_string().as_deref(), Some("1234567890"));
        assert_eq!(root.get("b").to_id_string().as_deref(), Some("sha"));
        assert_eq!(root.get("c").to_id_string(), None);
        assert_eq!(root.get("d").to_id_string(), None);
        assert_eq!(root.get("e").to_id_string(), None);
    }

    #[test]
    fn leaf_separates_missing_text_and_other() {
        let payload = json!({"s": "x", "n": 12, "o": {"k": 1}, "z": null});
        let root = Field::root(&payload);
        assert_eq!(root.get("s").leaf(), Leaf::Text("x"));
        assert_eq!(root.get("n").leaf(), Leaf::Other(&json!(12)));
        assert_eq!(root.get("o").leaf(), Leaf::Other(&json!({"k": 1})));
        assert_eq!(root.get("z").leaf(), Leaf::Missing);
        assert_eq!(root.path("absent.deeper").leaf(), Leaf::Missing);
    }

    #[test]
    fn typed_reads_do_not_coerce() {
        let payload = json!({"merged": "true", "flag": true});
        let root = Field::root(&payload);
        assert_eq!(root.get("merged").as_bool(), None);
        assert_eq!(root.get("flag").as_bool(), Some(true));
        assert!(root.get("flag").as_object().is_none());
    }
}
