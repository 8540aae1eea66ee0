//
//  confluence-sdk
//  api/model/field.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Field Resolution
//!
//! Confluence omits keys it was not asked for (or does not support on a given
//! site), sends `null` for keys that exist but carry nothing, and sends real
//! values otherwise, including `0`, `""` and `false`. Callers frequently need
//! to tell these apart: "the API did not return an icon" is a different answer
//! from "this space has no icon".
//!
//! [`Field`] carries that answer. Every response accessor in this crate
//! returns one:
//!
//! | JSON payload | Result |
//! |--------------|--------|
//! | key missing | [`Field::Absent`] |
//! | `"key": null` | [`Field::Null`] |
//! | `"key": <value>` | [`Field::Value`] |
//!
//! Typed accessors add a fourth outcome, [`Field::Mismatch`], for a key that
//! is present but whose JSON type is not the declared one. The key still
//! counts as present; only its shape is unexpected.
//!
//! ## Example
//!
//! ```rust
//! use confluence_sdk::api::model::{resolve, Field};
//! use serde_json::json;
//!
//! let raw = json!({"count": 0, "parent": null});
//! let raw = raw.as_object().unwrap();
//!
//! assert_eq!(resolve(raw, "count"), Field::Value(&json!(0)));
//! assert_eq!(resolve(raw, "parent"), Field::Null);
//! assert_eq!(resolve(raw, "missing"), Field::Absent);
//! ```

use std::fmt;

use serde_json::{Map, Value};

/// The parsed JSON object backing a response wrapper.
pub type RawData = Map<String, Value>;

/// Result of looking up a key in a JSON object.
///
/// `Absent` is a distinct variant rather than a reserved value, so no payload
/// content can ever be mistaken for it. `Absent` only ever means the key is
/// missing.
///
/// The untyped primitive [`resolve`] never yields `Mismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The key is not present in the payload.
    Absent,
    /// The key is present and its value is JSON `null`.
    Null,
    /// The key is present with a concrete value.
    Value(T),
    /// The key is present with a non-null value of an unexpected JSON type.
    /// The exact value is still reachable through the untyped lookup.
    Mismatch,
}

impl<T> Field<T> {
    /// Returns `true` if the key was not present.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the key was present with a JSON `null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the key was present with a concrete value.
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if the key was present with a value of the wrong type.
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch)
    }

    /// Returns `true` if the key was in the payload, whatever its value.
    pub const fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Converts from `&Field<T>` to `Field<&T>`.
    pub const fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(v),
            Self::Mismatch => Field::Mismatch,
        }
    }

    /// Maps the concrete value, leaving `Absent` and `Null` untouched.
    pub fn map<U, F>(self, f: F) -> Field<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(f(v)),
            Self::Mismatch => Field::Mismatch,
        }
    }

    /// Chains a lookup on the concrete value.
    ///
    /// Useful for walking nested wrappers: an absent or null parent yields an
    /// absent or null result without touching the closure.
    ///
    /// ```rust
    /// use confluence_sdk::api::model::Field;
    ///
    /// let outer: Field<Field<&str>> = Field::Value(Field::Null);
    /// assert_eq!(outer.and_then(|inner| inner), Field::Null);
    ///
    /// let missing: Field<Field<&str>> = Field::Absent;
    /// assert_eq!(missing.and_then(|inner| inner), Field::Absent);
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Field<U>
    where
        F: FnOnce(T) -> Field<U>,
    {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(v) => f(v),
            Self::Mismatch => Field::Mismatch,
        }
    }

    /// Returns the concrete value, collapsing every other outcome to `None`.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into a nested option: `None` for absent, `Some(None)` for
    /// null or mismatched values and `Some(Some(v))` for a value.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Absent => None,
            Self::Null | Self::Mismatch => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }

    /// Returns the concrete value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Value(v) => v,
            _ => default,
        }
    }

    /// Returns the concrete value.
    ///
    /// # Panics
    ///
    /// Panics if the field is not a value.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Value(v) => v,
            Self::Null => panic!("called `Field::unwrap()` on a null field"),
            Self::Absent => panic!("called `Field::unwrap()` on an absent field"),
            Self::Mismatch => panic!("called `Field::unwrap()` on a mismatched field"),
        }
    }

    /// Returns the concrete value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the field is not a value.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Value(v) => v,
            _ => panic!("{msg}"),
        }
    }
}

impl<T: std::ops::Deref> Field<T> {
    /// Converts from `Field<T>` (or `&Field<T>`) to `Field<&T::Target>`.
    pub fn as_deref(&self) -> Field<&T::Target> {
        self.as_ref().map(|v| &**v)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

/// Human-readable rendering for logs and messages.
///
/// A value prints as itself and the other outcomes print as `<absent>`,
/// `<null>` and `<mismatch>`. A string value can spell the same text, so
/// branch on the variant (or [`Field::is_absent`]) rather than on the
/// rendered form.
impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("<absent>"),
            Self::Null => f.write_str("<null>"),
            Self::Mismatch => f.write_str("<mismatch>"),
            Self::Value(v) => v.fmt(f),
        }
    }
}

/// Resolves `field` in `raw` into one of the three states.
///
/// This is the primitive every accessor builds on. Only key omission is
/// absence and only JSON `null` is null; `0`, `""` and `false` are values.
pub fn resolve<'a>(raw: &'a RawData, field: &str) -> Field<&'a Value> {
    match raw.get(field) {
        None => Field::Absent,
        Some(Value::Null) => Field::Null,
        Some(value) => Field::Value(value),
    }
}

/// Borrowing conversion from a JSON value into a declared accessor type.
///
/// Returns `None` when the JSON type does not match.
pub trait FromJson<'a>: Sized {
    /// Human-readable name of the expected JSON type, used in diagnostics.
    const EXPECTED: &'static str;

    /// Attempts the conversion.
    fn from_json(value: &'a Value) -> Option<Self>;
}

impl<'a> FromJson<'a> for &'a Value {
    const EXPECTED: &'static str = "any";

    fn from_json(value: &'a Value) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromJson<'a> for &'a str {
    const EXPECTED: &'static str = "string";

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromJson<'a> for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> FromJson<'a> for u64 {
    const EXPECTED: &'static str = "unsigned integer";

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_u64()
    }
}

impl<'a> FromJson<'a> for f64 {
    const EXPECTED: &'static str = "number";

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<'a> FromJson<'a> for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromJson<'a> for &'a RawData {
    const EXPECTED: &'static str = "object";

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

impl<'a> FromJson<'a> for &'a [Value] {
    const EXPECTED: &'static str = "array";

    fn from_json(value: &'a Value) -> Option<Self> {
        value.as_array().map(Vec::as_slice)
    }
}
