use serde::{Deserialize, Serialize};

use super::error::LazyImageError;
use crate::utils::CCStr;

/// Minimum fraction of the image area that must be inside the viewport.
///
/// The value is forwarded as-is to the platform observer: it is neither
/// validated nor clamped, so an out-of-range value behaves however the
/// platform decides (usually the observer refuses it and the image never
/// comes into view).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub const fn new(fraction: f64) -> Self {
        Self(fraction)
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// `true` when a visible `ratio` satisfies this threshold.
    pub fn is_reached_by(&self, ratio: f64) -> bool {
        ratio >= self.0
    }

    /// Renders the threshold as a JavaScript number literal.
    pub fn to_js(&self) -> String {
        if self.0.is_nan() {
            "NaN".to_owned()
        } else if self.0 == f64::INFINITY {
            "Infinity".to_owned()
        } else if self.0 == f64::NEG_INFINITY {
            "-Infinity".to_owned()
        } else {
            format!("{:?}", self.0)
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// Attributes the lazy image sets itself on the `img` element.
pub const RESERVED_ATTRIBUTES: [&str; 4] = ["src", "alt", "id", "style"];

/// Open bag of extra attributes forwarded untouched onto the `img` element.
///
/// Keys owned by the component ([`RESERVED_ATTRIBUTES`]) are refused. Keys
/// are compared ASCII case-insensitively, as HTML attribute names are.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AttributeBag(Vec<(&'static str, CCStr)>);

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `name`. A replaced entry takes the new spelling of `name`.
    pub fn insert(
        &mut self,
        name: &'static str,
        value: impl Into<CCStr>,
    ) -> Result<(), LazyImageError> {
        if let Some(reserved) = RESERVED_ATTRIBUTES
            .into_iter()
            .find(|reserved| reserved.eq_ignore_ascii_case(name))
        {
            return Err(LazyImageError::ReservedAttribute(reserved));
        }
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(entry) => *entry = (name, value),
            None => self.0.push((name, value)),
        }
        Ok(())
    }

    /// Builder flavour of [`AttributeBag::insert`].
    pub fn with(
        mut self,
        name: &'static str,
        value: impl Into<CCStr>,
    ) -> Result<Self, LazyImageError> {
        self.insert(name, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&CCStr> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CCStr)> {
        self.0.iter().map(|(n, v)| (*n, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_defaults_to_ten_percent() {
        assert_eq!(Threshold::default().fraction(), 0.1);
        assert!(Threshold::default().is_reached_by(0.1));
        assert!(!Threshold::default().is_reached_by(0.09));
    }

    #[test]
    fn threshold_is_not_clamped() {
        let t = Threshold::new(1.5);
        assert_eq!(t.fraction(), 1.5);
        assert!(!t.is_reached_by(1.0));
        assert_eq!(t.to_js(), "1.5");
        assert_eq!(Threshold::new(f64::NAN).to_js(), "NaN");
        assert_eq!(Threshold::new(f64::NEG_INFINITY).to_js(), "-Infinity");
        assert_eq!(Threshold::new(0.0).to_js(), "0.0");
    }

    #[test]
    fn threshold_deserializes_from_a_bare_number() {
        let t: Threshold = serde_json::from_str("0.5").unwrap();
        assert_eq!(t, Threshold::new(0.5));
    }

    #[test]
    fn bag_refuses_owned_keys() {
        let mut bag = AttributeBag::new();
        assert_eq!(
            bag.insert("src", "https://evil.example/x.png"),
            Err(LazyImageError::ReservedAttribute("src"))
        );
        assert_eq!(
            bag.insert("ALT", "nope"),
            Err(LazyImageError::ReservedAttribute("alt"))
        );
        assert!(bag.is_empty());
    }

    #[test]
    fn bag_replaces_existing_keys() {
        let bag = AttributeBag::new()
            .with("width", "320")
            .and_then(|b| b.with("decoding", "async"))
            .and_then(|b| b.with("width", "640"))
            .unwrap();
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get("width").map(|v| v.as_ref()), Some("640"));
        assert!(bag.contains("decoding"));
        assert!(!bag.contains("loading"));
    }

    #[test]
    fn bag_keys_ignore_ascii_case() {
        let bag = AttributeBag::new()
            .with("width", "320")
            .and_then(|b| b.with("Width", "640"))
            .unwrap();
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.iter().collect::<Vec<_>>(), vec![("Width", &CCStr::from("640"))]);
        assert!(bag.contains("WIDTH"));
        assert_eq!(bag.get("width").map(|v| v.as_ref()), Some("640"));
    }
}
