//! Segment descriptors and badge values
//!
//! Both types accept loose input when deserialized: a segment may be a bare
//! label string or a table with accessibility metadata, and a badge entry may
//! be any value, of which only numbers produce a badge.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Accessibility role announced for a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessibilityRole {
    #[default]
    Button,
    Tab,
    Radio,
}

impl fmt::Display for AccessibilityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessibilityRole::Button => "button",
            AccessibilityRole::Tab => "tab",
            AccessibilityRole::Radio => "radio",
        };
        f.write_str(name)
    }
}

/// Accessibility state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessibilityState {
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// Accessibility properties of a segment
///
/// Used both for caller-supplied overrides and for the resolved description
/// produced by [`crate::accessibility::describe_segment`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessibilityProps {
    /// Spoken label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// What happens when the element is activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AccessibilityRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<AccessibilityState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One selectable option of a segmented control
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub accessibility: Option<AccessibilityProps>,
}

impl Segment {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accessibility: None,
        }
    }

    /// Replace the default accessibility description of this segment
    pub fn with_accessibility(mut self, props: AccessibilityProps) -> Self {
        self.accessibility = Some(props);
        self
    }
}

impl From<&str> for Segment {
    fn from(label: &str) -> Self {
        Segment::new(label)
    }
}

impl From<String> for Segment {
    fn from(label: String) -> Self {
        Segment::new(label)
    }
}

// Plain segments serialize back to a bare string
impl Serialize for Segment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.accessibility {
            None => serializer.serialize_str(&self.label),
            Some(props) => {
                let mut state = serializer.serialize_struct("Segment", 2)?;
                state.serialize_field("label", &self.label)?;
                state.serialize_field("accessibility", props)?;
                state.end()
            }
        }
    }
}

// Custom deserializer to accept either a string or a table
impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SegmentVisitor;

        impl<'de> Visitor<'de> for SegmentVisitor {
            type Value = Segment;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    "a label string or a map with 'label' and optional 'accessibility'",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Segment, E>
            where
                E: de::Error,
            {
                Ok(Segment::new(value))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Segment, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut label: Option<String> = None;
                let mut accessibility: Option<AccessibilityProps> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "label" => label = Some(map.next_value()?),
                        "accessibility" => accessibility = Some(map.next_value()?),
                        _ => {
                            let _: IgnoredAny = map.next_value()?;
                        }
                    }
                }

                let label = label.ok_or_else(|| de::Error::missing_field("label"))?;
                Ok(Segment {
                    label,
                    accessibility,
                })
            }
        }

        deserializer.deserialize_any(SegmentVisitor)
    }
}

/// Badge entry aligned by position with a segment
///
/// Only [`BadgeValue::Count`] renders a badge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeValue {
    #[default]
    Empty,
    Count(f64),
}

impl BadgeValue {
    pub fn count(&self) -> Option<f64> {
        match self {
            BadgeValue::Count(n) => Some(*n),
            BadgeValue::Empty => None,
        }
    }
}

/// Integral counts print without a fractional part
pub fn format_count(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<f64> for BadgeValue {
    fn from(n: f64) -> Self {
        BadgeValue::Count(n)
    }
}

impl From<i64> for BadgeValue {
    fn from(n: i64) -> Self {
        BadgeValue::Count(n as f64)
    }
}

impl From<u32> for BadgeValue {
    fn from(n: u32) -> Self {
        BadgeValue::Count(n as f64)
    }
}

impl From<i32> for BadgeValue {
    fn from(n: i32) -> Self {
        BadgeValue::Count(n as f64)
    }
}

impl<T: Into<BadgeValue>> From<Option<T>> for BadgeValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

// TOML has no null, so empty markers serialize as an empty string
impl Serialize for BadgeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BadgeValue::Empty => serializer.serialize_str(""),
            BadgeValue::Count(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            BadgeValue::Count(n) => serializer.serialize_f64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for BadgeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BadgeVisitor;

        impl<'de> Visitor<'de> for BadgeVisitor {
            type Value = BadgeValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, or any other value for no badge")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<BadgeValue, E> {
                Ok(BadgeValue::Count(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<BadgeValue, E> {
                Ok(BadgeValue::Count(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<BadgeValue, E> {
                Ok(BadgeValue::Count(v))
            }

            fn visit_bool<E: de::Error>(self, _v: bool) -> Result<BadgeValue, E> {
                Ok(BadgeValue::Empty)
            }

            fn visit_str<E: de::Error>(self, _v: &str) -> Result<BadgeValue, E> {
                Ok(BadgeValue::Empty)
            }

            fn visit_unit<E: de::Error>(self) -> Result<BadgeValue, E> {
                Ok(BadgeValue::Empty)
            }

            fn visit_none<E: de::Error>(self) -> Result<BadgeValue, E> {
                Ok(BadgeValue::Empty)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<BadgeValue, D::Error>
            where
                D: Deserializer<'de>,
            {
                BadgeValue::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<BadgeValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(BadgeValue::Empty)
            }

            fn visit_map<M>(self, mut map: M) -> Result<BadgeValue, M::Error>
            where
                M: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(BadgeValue::Empty)
            }
        }

        deserializer.deserialize_any(BadgeVisitor)
    }
}

/// Badge for segment `index`, if the badge list has a number at that position
pub fn badge_at(badges: Option<&[BadgeValue]>, index: usize) -> Option<f64> {
    badges.and_then(|b| b.get(index)).and_then(BadgeValue::count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_from_str() {
        let segment: Segment = "Inbox".into();
        assert_eq!(segment.label, "Inbox");
        assert!(segment.accessibility.is_none());
    }

    #[test]
    fn test_segment_deserialize_string_or_table() {
        let segments: Vec<Segment> = serde_json::from_str(
            r#"[
                "A",
                {"label": "B", "accessibility": {"hint": "custom"}},
                {"label": "C", "extra": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(segments[0], Segment::new("A"));
        assert_eq!(segments[1].label, "B");
        assert_eq!(
            segments[1].accessibility.as_ref().unwrap().hint.as_deref(),
            Some("custom")
        );
        assert_eq!(segments[2], Segment::new("C"));
    }

    #[test]
    fn test_segment_table_requires_label() {
        let result: Result<Segment, _> = serde_json::from_str(r#"{"accessibility": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_badge_values_only_numbers_count() {
        let badges: Vec<BadgeValue> =
            serde_json::from_str(r#"[2, null, 5, "x", true, {"a": 1}, [1], 1.5]"#).unwrap();

        assert_eq!(badges[0], BadgeValue::Count(2.0));
        assert_eq!(badges[1], BadgeValue::Empty);
        assert_eq!(badges[2], BadgeValue::Count(5.0));
        assert_eq!(badges[3], BadgeValue::Empty);
        assert_eq!(badges[4], BadgeValue::Empty);
        assert_eq!(badges[5], BadgeValue::Empty);
        assert_eq!(badges[6], BadgeValue::Empty);
        assert_eq!(badges[7], BadgeValue::Count(1.5));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(12.0), "12");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(2.5), "2.5");
        assert_eq!(BadgeValue::Empty.count(), None);
    }

    #[test]
    fn test_badge_at() {
        let badges = vec![BadgeValue::from(2), BadgeValue::Empty, BadgeValue::from(5)];
        assert_eq!(badge_at(Some(&badges), 0), Some(2.0));
        assert_eq!(badge_at(Some(&badges), 1), None);
        assert_eq!(badge_at(Some(&badges), 2), Some(5.0));
        assert_eq!(badge_at(Some(&badges), 3), None);
        assert_eq!(badge_at(None, 0), None);
    }

    #[test]
    fn test_badge_from_option() {
        assert_eq!(BadgeValue::from(Some(3)), BadgeValue::Count(3.0));
        assert_eq!(BadgeValue::from(None::<i32>), BadgeValue::Empty);
    }
}
