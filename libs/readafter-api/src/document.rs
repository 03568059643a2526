use crate::error::ParseError;
use crate::optime::Timestamp;
use crate::value::{Value, ValueKind};

/// Ordered command document: field names to dynamically typed values.
///
/// Names are case-sensitive. Duplicate names are kept as decoded;
/// lookups return the first occurrence.
/// Callers read values via typed extractors that report missing fields
/// and kind mismatches as [`ParseError`]: no panics, no defaults for
/// malformed fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style append, for constructing command documents in place.
    pub fn append(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ---- typed extraction ----

    /// Optional sub-document. Absent → `Ok(None)`.
    pub fn get_document(&self, name: &str) -> Result<Option<&Document>, ParseError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        value
            .as_document()
            .map(Some)
            .ok_or_else(|| ParseError::type_mismatch(name, ValueKind::Document, value.kind()))
    }

    pub fn require_document(&self, name: &str) -> Result<&Document, ParseError> {
        self.get_document(name)?.ok_or_else(|| ParseError::missing(name))
    }

    pub fn require_timestamp(&self, name: &str) -> Result<Timestamp, ParseError> {
        let value = self.require(name)?;
        value
            .as_timestamp()
            .ok_or_else(|| ParseError::type_mismatch(name, ValueKind::Timestamp, value.kind()))
    }

    /// Required integral number; see [`Value::as_i64`] for accepted kinds.
    pub fn require_integer(&self, name: &str) -> Result<i64, ParseError> {
        let value = self.require(name)?;
        Self::integer(name, value)
    }

    /// Optional integral number. Absent → `default`; present but not
    /// integral is still an error.
    pub fn get_integer_or(&self, name: &str, default: i64) -> Result<i64, ParseError> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => Self::integer(name, value),
        }
    }

    fn require(&self, name: &str) -> Result<&Value, ParseError> {
        self.get(name).ok_or_else(|| ParseError::missing(name))
    }

    fn integer(name: &str, value: &Value) -> Result<i64, ParseError> {
        value
            .as_i64()
            .ok_or_else(|| ParseError::type_mismatch(name, ValueKind::Integer, value.kind()))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn first_duplicate_wins() {
        let doc = Document::new().append("a", 1).append("a", 2);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("a"), Some(&Value::Int32(1)));
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let doc = Document::new().append("find", "test").append("b", 1).append("a", 2);
        let names: Vec<&str> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["find", "b", "a"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let doc = Document::new().append("ts", Timestamp::new(1, 0));
        assert!(doc.contains("ts"));
        assert!(!doc.contains("TS"));
    }

    #[test]
    fn absent_optional_document_is_none() {
        let doc = Document::new().append("find", "test");
        assert_eq!(doc.get_document("sub"), Ok(None));
    }

    #[test]
    fn non_document_is_type_mismatch() {
        let doc = Document::new().append("sub", "x");
        let err = doc.get_document("sub").unwrap_err();
        assert_eq!(err, ParseError::type_mismatch("sub", ValueKind::Document, ValueKind::String));
    }

    #[test]
    fn required_document_reports_missing() {
        let err = Document::new().require_document("sub").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
        assert_eq!(err.field(), "sub");
    }

    #[test]
    fn timestamp_extraction_checks_kind() {
        let doc = Document::new()
            .append("good", Timestamp::new(20, 30))
            .append("bad", Document::new().append("x", 1));
        assert_eq!(doc.require_timestamp("good"), Ok(Timestamp::new(20, 30)));
        assert_eq!(doc.require_timestamp("bad").unwrap_err().kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            doc.require_timestamp("none").unwrap_err().kind(),
            ErrorKind::MissingRequiredField
        );
    }

    #[test]
    fn integer_extraction_accepts_all_integral_kinds() {
        let doc: Document = [
            ("i", Value::Int32(2)),
            ("l", Value::Int64(-3)),
            ("d", Value::Double(4.0)),
            ("f", Value::Double(4.5)),
            ("s", Value::from("y")),
        ]
        .into_iter()
        .collect();
        assert_eq!(doc.require_integer("i"), Ok(2));
        assert_eq!(doc.require_integer("l"), Ok(-3));
        assert_eq!(doc.require_integer("d"), Ok(4));
        assert_eq!(
            doc.require_integer("f"),
            Err(ParseError::type_mismatch("f", ValueKind::Integer, ValueKind::Double))
        );
        assert_eq!(
            doc.require_integer("s"),
            Err(ParseError::type_mismatch("s", ValueKind::Integer, ValueKind::String))
        );
    }

    #[test]
    fn optional_integer_defaults_only_when_absent() {
        let doc = Document::new().append("n", "abc");
        assert_eq!(doc.get_integer_or("missing", 0), Ok(0));
        assert_eq!(doc.get_integer_or("n", 0).unwrap_err().kind(), ErrorKind::TypeMismatch);
    }
}
