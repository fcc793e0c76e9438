//! Parameter values
//!
//! Graph documents carry every parameter as plain text. Typing is a
//! heuristic over that text: whole-token `true`/`false` become booleans,
//! digits with an optional decimal part become numbers and everything else
//! stays text. A text parameter that happens to read `42` therefore becomes
//! a number; there is no operator schema to consult.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde::ser::SerializeMap;

static BOOLEAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:true|false)$").unwrap());

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.?[0-9]*$").unwrap());

/// Key under which the band structure is stored
pub const TARGET_BANDS: &str = "targetBands";

/// A typed parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `true` or `false`
    Bool(bool),
    /// Digits with an optional decimal part, as written in the document
    #[serde(serialize_with = "serialize_number")]
    Number(String),
    /// Anything else, verbatim
    Text(String),
    /// Nested target band structure
    Bands(BandMap),
}

impl ParamValue {
    /// Classify a non-empty text token
    ///
    /// Callers are expected to skip empty or whitespace-only text before
    /// getting here.
    pub fn coerce(text: &str) -> Self {
        if BOOLEAN.is_match(text) {
            return ParamValue::Bool(text == "true");
        }
        if NUMBER.is_match(text) {
            return ParamValue::Number(text.to_string());
        }
        ParamValue::Text(text.to_string())
    }

    /// Textual form of a scalar value, `None` for band structures
    pub fn as_text(&self) -> Option<String> {
        match self {
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Number(s) | ParamValue::Text(s) => Some(s.clone()),
            ParamValue::Bands(_) => None,
        }
    }
}

// JSON numbers where they fit in an f64, the original digits otherwise
fn serialize_number<S: serde::Serializer>(text: &str, serializer: S) -> Result<S::Ok, S::Error> {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => serializer.serialize_f64(n),
        _ => serializer.serialize_str(text),
    }
}

/// Parameters of one node, in document order
///
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a parameter by name
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate parameters in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameter survived parsing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ParameterMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// One output band of a band-maths style operator
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandDescriptor {
    /// Band name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Data type, e.g. `float32`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub band_type: Option<String>,

    /// Band maths expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Physical unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// No-data value, emitted unquoted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_data_value: Option<String>,
}

impl BandDescriptor {
    /// Set a field by its element name. Returns `false` for unknown fields.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "type" => &mut self.band_type,
            "expression" => &mut self.expression,
            "description" => &mut self.description,
            "unit" => &mut self.unit,
            "noDataValue" => &mut self.no_data_value,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// Target bands of one node, keyed by synthetic name in encounter order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandMap {
    bands: Vec<(String, BandDescriptor)>,
}

impl BandMap {
    /// Create an empty band map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a band under the next synthetic name (`targetBand1`, ...)
    /// and return that name
    pub fn push(&mut self, band: BandDescriptor) -> String {
        let name = format!("targetBand{}", self.bands.len() + 1);
        self.bands.push((name.clone(), band));
        name
    }

    /// Iterate `(synthetic name, band)` pairs in encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BandDescriptor)> {
        self.bands.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of bands
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the structure had no band entries
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Serialize for BandMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bands.len()))?;
        for (k, v) in &self.bands {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", ParamValue::Bool(true))]
    #[case("false", ParamValue::Bool(false))]
    #[case("10", ParamValue::Number("10".into()))]
    #[case("10.", ParamValue::Number("10.".into()))]
    #[case("0.25", ParamValue::Number("0.25".into()))]
    #[case("007", ParamValue::Number("007".into()))]
    #[case("12345678901234567891", ParamValue::Number("12345678901234567891".into()))]
    fn test_coerce_typed(#[case] text: &str, #[case] expected: ParamValue) {
        assert_eq!(ParamValue::coerce(text), expected);
    }

    #[rstest]
    #[case("True")]
    #[case("FALSE")]
    #[case("truely")]
    #[case("-5")]
    #[case(".5")]
    #[case("1e5")]
    #[case(" 10")]
    #[case("10 ")]
    #[case("1.2.3")]
    #[case("GeoTIFF")]
    fn test_coerce_keeps_text(#[case] text: &str) {
        assert_eq!(ParamValue::coerce(text), ParamValue::Text(text.to_string()));
    }

    #[test]
    fn test_numeric_looking_string_becomes_number() {
        // No schema: a band name of "42" is indistinguishable from a count
        assert_eq!(ParamValue::coerce("42"), ParamValue::Number("42".into()));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(ParamValue::coerce("10").as_text().unwrap(), "10");
        assert_eq!(ParamValue::coerce("10.50").as_text().unwrap(), "10.50");
        assert_eq!(ParamValue::Bool(true).as_text().unwrap(), "true");
        assert!(ParamValue::Bands(BandMap::new()).as_text().is_none());
    }

    #[test]
    fn test_parameter_map_replaces_in_place() {
        let mut map = ParameterMap::new();
        map.insert("a", ParamValue::coerce("1"));
        map.insert("b", ParamValue::Bool(true));
        map.insert("a", ParamValue::Text("x".into()));

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&ParamValue::Text("x".into())));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_band_map_names_in_encounter_order() {
        let mut bands = BandMap::new();
        for _ in 0..11 {
            bands.push(BandDescriptor::default());
        }
        let names: Vec<&str> = bands.iter().map(|(n, _)| n).collect();
        assert_eq!(names[0], "targetBand1");
        assert_eq!(names[8], "targetBand9");
        assert_eq!(names[9], "targetBand10");
        assert_eq!(names[10], "targetBand11");
    }

    #[test]
    fn test_band_descriptor_set_field() {
        let mut band = BandDescriptor::default();
        assert!(band.set_field("type", "float32".into()));
        assert!(band.set_field("noDataValue", "NaN".into()));
        assert!(!band.set_field("spectralWavelength", "665".into()));
        assert_eq!(band.band_type.as_deref(), Some("float32"));
        assert_eq!(band.no_data_value.as_deref(), Some("NaN"));
    }

    #[test]
    fn test_parameter_map_serializes_in_order() {
        let mut map = ParameterMap::new();
        map.insert("z", ParamValue::coerce("1"));
        map.insert("a", ParamValue::Text("x".into()));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":1.0,"a":"x"}"#);
    }

    #[test]
    fn test_oversized_number_serializes_as_digits() {
        let digits = "9".repeat(400);
        let json = serde_json::to_string(&ParamValue::coerce(&digits)).unwrap();
        assert_eq!(json, format!("\"{}\"", digits));
    }
}
