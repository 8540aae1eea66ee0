//
//  confluence-sdk
//  api/model/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Wrappers
//!
//! Every Confluence response is kept as the raw JSON object it arrived as.
//! Typed wrappers sit on top of a [`ResponseBase`] and expose one accessor per
//! documented key. Scalars are borrowed straight out of the payload; nested
//! objects and lists are materialized on first access and cached in a
//! [`OnceCell`] owned by the wrapper.
//!
//! ## Writing a Wrapper
//!
//! ```rust
//! use confluence_sdk::api::model::{Field, Response, ResponseBase};
//! use once_cell::sync::OnceCell;
//!
//! #[derive(Debug, Clone)]
//! struct Icon {
//!     base: ResponseBase,
//! }
//!
//! impl Response for Icon {
//!     fn from_base(base: ResponseBase) -> Self {
//!         Self { base }
//!     }
//!
//!     fn base(&self) -> &ResponseBase {
//!         &self.base
//!     }
//! }
//!
//! impl Icon {
//!     fn path(&self) -> Field<&str> {
//!         self.base.get_as("path")
//!     }
//! }
//!
//! #[derive(Debug, Clone)]
//! struct Space {
//!     base: ResponseBase,
//!     icon: OnceCell<Field<Icon>>,
//! }
//!
//! impl Response for Space {
//!     fn from_base(base: ResponseBase) -> Self {
//!         Self { base, icon: OnceCell::new() }
//!     }
//!
//!     fn base(&self) -> &ResponseBase {
//!         &self.base
//!     }
//! }
//!
//! impl Space {
//!     fn icon(&self) -> Field<&Icon> {
//!         self.base.one(&self.icon, "icon")
//!     }
//! }
//!
//! let raw = serde_json::json!({"icon": {"path": "/icon.png"}});
//! let space = Space::from_value(raw).unwrap();
//! assert_eq!(space.icon().and_then(|i| i.path()), Field::Value("/icon.png"));
//! ```
//!
//! ## Immutability
//!
//! The payload is only reachable through a shared reference, so it cannot be
//! changed once a wrapper exists:
//!
//! ```rust,compile_fail
//! use confluence_sdk::api::model::{Response, ResponseBase};
//!
//! let response = ResponseBase::from_raw(serde_json::Map::new());
//! response.raw_data().insert("key".to_string(), serde_json::Value::Null);
//! ```

use once_cell::sync::OnceCell;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use super::field::{resolve, Field, FromJson, RawData};
use crate::api::common::ApiError;

/// Transport metadata from the HTTP exchange that produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in arrival order, names lower-cased.
    pub headers: Vec<(String, String)>,
}

impl ResponseMeta {
    /// Returns the first header value named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Immutable holder of one raw payload plus optional transport metadata.
///
/// `ResponseBase` also implements [`Response`] itself, which makes it the
/// untyped wrapper for endpoints or sub-objects that have no dedicated type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBase {
    raw: RawData,
    meta: Option<ResponseMeta>,
}

impl ResponseBase {
    /// Wraps `raw`. `meta` is `None` unless the payload came off the wire.
    pub fn new(raw: RawData, meta: Option<ResponseMeta>) -> Self {
        Self { raw, meta }
    }

    /// Read-only view of the raw payload.
    pub fn raw_data(&self) -> &RawData {
        &self.raw
    }

    /// Transport metadata, if this wrapper was built from a live call.
    pub fn meta(&self) -> Option<&ResponseMeta> {
        self.meta.as_ref()
    }

    /// Resolves `field` without any type conversion.
    pub fn get(&self, field: &str) -> Field<&Value> {
        resolve(&self.raw, field)
    }

    /// Resolves `field` and converts the value into `T`.
    ///
    /// A value of the wrong JSON type is reported as [`Field::Mismatch`]. The
    /// exact value is still reachable through [`get`](Self::get).
    pub fn get_as<'a, T: FromJson<'a>>(&'a self, field: &str) -> Field<T> {
        self.get(field).and_then(|value| match T::from_json(value) {
            Some(converted) => Field::Value(converted),
            None => {
                shape_mismatch(field, T::EXPECTED, value);
                Field::Mismatch
            }
        })
    }

    /// Builds a nested wrapper from the object at `field`. Not cached.
    ///
    /// Any non-object value gives [`Field::Mismatch`].
    pub fn nested<T: Response>(&self, field: &str) -> Field<T> {
        self.get(field).and_then(|value| match value {
            Value::Object(map) => Field::Value(T::from_raw(map.clone())),
            other => {
                shape_mismatch(field, "object", other);
                Field::Mismatch
            }
        })
    }

    /// Builds one nested wrapper per element of the array at `field`, in
    /// order. Not cached.
    ///
    /// An empty array gives an empty vector. A non-array, or an array with
    /// any non-object element, gives [`Field::Mismatch`] so element positions
    /// always line up with the payload.
    pub fn nested_many<T: Response>(&self, field: &str) -> Field<Vec<T>> {
        self.get(field).and_then(|value| {
            let Some(items) = value.as_array() else {
                shape_mismatch(field, "array", value);
                return Field::Mismatch;
            };

            let mut wrappers = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => wrappers.push(T::from_raw(map.clone())),
                    other => {
                        shape_mismatch(field, "array of objects", other);
                        return Field::Mismatch;
                    }
                }
            }
            Field::Value(wrappers)
        })
    }

    /// Memoized [`nested`](Self::nested): computed on first call, then the
    /// same wrapper is handed out for the lifetime of `cell`.
    pub fn one<'a, T: Response>(&self, cell: &'a OnceCell<Field<T>>, field: &str) -> Field<&'a T> {
        cell.get_or_init(|| self.nested(field)).as_ref()
    }

    /// Memoized [`nested_many`](Self::nested_many).
    pub fn many<'a, T: Response>(
        &self,
        cell: &'a OnceCell<Field<Vec<T>>>,
        field: &str,
    ) -> Field<&'a [T]> {
        cell.get_or_init(|| self.nested_many(field))
            .as_ref()
            .map(Vec::as_slice)
    }
}

impl Serialize for ResponseBase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// A typed view over one JSON object from the Confluence API.
pub trait Response: Sized {
    /// Builds the wrapper around an already constructed base.
    fn from_base(base: ResponseBase) -> Self;

    /// The base holding the raw payload.
    fn base(&self) -> &ResponseBase;

    /// Wraps a bare map, with no transport metadata.
    fn from_raw(raw: RawData) -> Self {
        Self::from_base(ResponseBase::new(raw, None))
    }

    /// Wraps a JSON value, which must be an object.
    fn from_value(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Object(raw) => Ok(Self::from_raw(raw)),
            other => Err(ApiError::Decode(format!(
                "expected a JSON object, found {}",
                json_type(&other)
            ))),
        }
    }

    /// Read-only view of the raw payload.
    fn raw_data(&self) -> &RawData {
        self.base().raw_data()
    }

    /// Transport metadata, if this wrapper was built from a live call.
    fn meta(&self) -> Option<&ResponseMeta> {
        self.base().meta()
    }
}

impl Response for ResponseBase {
    fn from_base(base: ResponseBase) -> Self {
        base
    }

    fn base(&self) -> &ResponseBase {
        self
    }
}

/// Name of the JSON type of `value`, for diagnostics.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn shape_mismatch(field: &str, expected: &str, found: &Value) {
    warn!(
        field,
        expected,
        found = json_type(found),
        "response field has an unexpected JSON type"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone)]
    struct Address {
        base: ResponseBase,
    }

    impl Response for Address {
        fn from_base(base: ResponseBase) -> Self {
            Self { base }
        }

        fn base(&self) -> &ResponseBase {
            &self.base
        }
    }

    impl Address {
        fn city(&self) -> Field<&str> {
            self.base.get_as("city")
        }

        fn zip_code(&self) -> Field<&str> {
            self.base.get_as("zip_code")
        }
    }

    #[derive(Debug, Clone)]
    struct Contact {
        base: ResponseBase,
    }

    impl Response for Contact {
        fn from_base(base: ResponseBase) -> Self {
            Self { base }
        }

        fn base(&self) -> &ResponseBase {
            &self.base
        }
    }

    impl Contact {
        fn phone(&self) -> Field<&str> {
            self.base.get_as("phone")
        }

        fn email(&self) -> Field<&str> {
            self.base.get_as("email")
        }
    }

    #[derive(Debug, Clone)]
    struct User {
        base: ResponseBase,
        contact: OnceCell<Field<Contact>>,
        addresses: OnceCell<Field<Vec<Address>>>,
    }

    impl Response for User {
        fn from_base(base: ResponseBase) -> Self {
            Self {
                base,
                contact: OnceCell::new(),
                addresses: OnceCell::new(),
            }
        }

        fn base(&self) -> &ResponseBase {
            &self.base
        }
    }

    impl User {
        fn name(&self) -> Field<&str> {
            self.base.get_as("name")
        }

        fn contact(&self) -> Field<&Contact> {
            self.base.one(&self.contact, "contact")
        }

        fn addresses(&self) -> Field<&[Address]> {
            self.base.many(&self.addresses, "addresses")
        }
    }

    fn user(value: Value) -> User {
        User::from_value(value).unwrap()
    }

    #[test]
    fn test_raw_data_is_the_payload() {
        let data = json!({"name": "Alice", "age": 30});
        let response = ResponseBase::from_value(data.clone()).unwrap();
        assert_eq!(Value::Object(response.raw_data().clone()), data);
        assert!(response.meta().is_none());
    }

    #[test]
    fn test_raw_data_preserves_nesting() {
        let data = json!({"user": {"name": "Bob", "scores": [1, 2, 3]}});
        let response = ResponseBase::from_value(data.clone()).unwrap();
        assert_eq!(response.raw_data()["user"]["scores"], json!([1, 2, 3]));
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let err = ResponseBase::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_get_three_states() {
        let response = ResponseBase::from_value(json!({"explicit_null": null, "zero": 0})).unwrap();
        assert_eq!(response.get("explicit_null"), Field::Null);
        assert_eq!(response.get("absent_field"), Field::Absent);
        assert_eq!(response.get("zero"), Field::Value(&json!(0)));
    }

    #[test]
    fn test_get_as_falsy_values() {
        let response =
            ResponseBase::from_value(json!({"s": "", "n": 0, "b": false})).unwrap();
        assert_eq!(response.get_as::<&str>("s"), Field::Value(""));
        assert_eq!(response.get_as::<i64>("n"), Field::Value(0));
        assert_eq!(response.get_as::<bool>("b"), Field::Value(false));
    }

    #[test]
    fn test_get_as_type_mismatch_is_present() {
        let response = ResponseBase::from_value(json!({"id": 42})).unwrap();
        let id = response.get_as::<&str>("id");
        assert_eq!(id, Field::Mismatch);
        assert!(!id.is_absent());
        assert_eq!(response.get("id"), Field::Value(&json!(42)));
        assert_eq!(response.get_as::<&str>("missing"), Field::Absent);
    }

    #[test]
    fn test_get_as_null_stays_null() {
        let response = ResponseBase::from_value(json!({"id": null})).unwrap();
        assert_eq!(response.get_as::<&str>("id"), Field::Null);
    }

    #[test]
    fn test_absent_is_the_same_for_every_wrapper() {
        let first = ResponseBase::from_raw(RawData::new());
        let second = ResponseBase::from_raw(RawData::new());
        assert_eq!(first.get("missing"), second.get("missing"));
        assert_eq!(first.get("missing"), Field::Absent);
    }

    #[test]
    fn test_nested_object_with_data() {
        let user = user(json!({
            "name": "Alice",
            "contact": {"phone": "123-456", "email": "alice@example.com"}
        }));
        let contact = user.contact().unwrap();
        assert_eq!(contact.phone(), Field::Value("123-456"));
        assert_eq!(contact.email(), Field::Value("alice@example.com"));
        assert_eq!(user.name(), Field::Value("Alice"));
    }

    #[test]
    fn test_nested_object_null_and_absent() {
        assert!(user(json!({"name": "Alice", "contact": null})).contact().is_null());
        assert!(user(json!({"name": "Alice"})).contact().is_absent());
    }

    #[test]
    fn test_nested_object_exposes_its_raw_data() {
        let contact_data = json!({"phone": "123-456", "email": "test@test.com"});
        let user = user(json!({"contact": contact_data.clone()}));
        let contact = user.contact().unwrap();
        assert_eq!(Value::Object(contact.raw_data().clone()), contact_data);
    }

    #[test]
    fn test_nested_list_preserves_order() {
        let user = user(json!({
            "name": "Alice",
            "addresses": [
                {"city": "New York", "zip_code": "10001"},
                {"city": "Boston", "zip_code": "02101"}
            ]
        }));
        let addresses = user.addresses().unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].city(), Field::Value("New York"));
        assert_eq!(addresses[0].zip_code(), Field::Value("10001"));
        assert_eq!(addresses[1].city(), Field::Value("Boston"));
        assert_eq!(addresses[1].zip_code(), Field::Value("02101"));
    }

    #[test]
    fn test_nested_list_empty_null_absent() {
        let empty = user(json!({"addresses": []}));
        assert_eq!(empty.addresses().map(<[Address]>::len), Field::Value(0));
        assert!(user(json!({"addresses": null})).addresses().is_null());
        assert!(user(json!({"name": "Alice"})).addresses().is_absent());
    }

    #[test]
    fn test_nested_list_single_item() {
        let user = user(json!({"addresses": [{"city": "Chicago", "zip_code": "60601"}]}));
        let addresses = user.addresses().unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].city(), Field::Value("Chicago"));
    }

    #[test]
    fn test_nested_list_of_scalars_is_mismatch() {
        let user = user(json!({"addresses": ["NYC"]}));
        assert!(user.addresses().is_mismatch());
        assert!(!user.addresses().is_absent());
    }

    #[test]
    fn test_nested_list_with_one_bad_element_is_mismatch() {
        let user = user(json!({"addresses": [{"city": "NYC"}, null]}));
        assert!(user.addresses().is_mismatch());
        assert_eq!(user.raw_data()["addresses"][0]["city"], json!("NYC"));
    }

    #[test]
    fn test_nested_list_field_holding_an_object_is_mismatch() {
        let user = user(json!({"addresses": {"city": "NYC"}}));
        assert!(user.addresses().is_mismatch());
    }

    #[test]
    fn test_nested_object_holding_a_scalar_is_mismatch() {
        let user = user(json!({"contact": "alice@example.com"}));
        assert!(user.contact().is_mismatch());
        assert!(user.contact().is_present());
    }

    #[test]
    fn test_memoized_accessors_return_the_same_instance() {
        let user = user(json!({
            "contact": {"phone": "1"},
            "addresses": [{"city": "NYC"}]
        }));
        let first = user.contact().unwrap();
        let second = user.contact().unwrap();
        assert!(std::ptr::eq(first, second));

        let first = user.addresses().unwrap();
        let second = user.addresses().unwrap();
        assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
    }

    #[test]
    fn test_meta_header_lookup() {
        let meta = ResponseMeta {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
        };
        let response = ResponseBase::new(RawData::new(), Some(meta));
        let meta = response.meta().unwrap();
        assert_eq!(meta.header("Content-Type"), Some("application/json"));
        assert_eq!(meta.header("link"), None);
    }

    #[test]
    fn test_serializes_as_raw_payload() {
        let response = ResponseBase::from_value(json!({"id": "1"})).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({"id": "1"}));
    }
}
