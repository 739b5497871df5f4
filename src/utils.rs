use std::borrow::Borrow;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

pub fn log_error<E: core::fmt::Display>(error: E) -> String {
    log::error!("{error}");
    error.to_string()
}

pub type CheapClone<T> = std::rc::Rc<T>;

/// Reference-counted string, cloned into every callback of a lazy image
/// without copying the underlying URL or label.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CCStr(CheapClone<str>);
impl Clone for CCStr {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}

impl Serialize for CCStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_ref())
    }
}

impl<'de> Deserialize<'de> for CCStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(CCStr::from)
    }
}

impl core::str::FromStr for CCStr {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CCStr::from(s))
    }
}
impl From<String> for CCStr {
    fn from(value: String) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl From<&String> for CCStr {
    fn from(value: &String) -> Self {
        CCStr(CheapClone::from(value.as_str()))
    }
}
impl From<&str> for CCStr {
    fn from(value: &str) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl core::ops::Deref for CCStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
impl AsRef<str> for CCStr {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl core::fmt::Display for CCStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for CCStr {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}
