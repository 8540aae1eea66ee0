//
//  confluence-sdk
//  api/methods/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Confluence v2 Endpoints
//!
//! One module per API group, one submodule per endpoint. Every endpoint
//! contributes a request struct implementing [`Request`] and the response
//! wrapper it produces.
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `GET /spaces` | [`space::GetSpacesRequest`] | [`space::GetSpacesResponse`] |
//! | `GET /spaces/{id}` | [`space::GetSpaceRequest`] | [`space::GetSpaceResponse`] |
//! | `POST /spaces` | [`space::CreateSpaceRequest`] | [`space::CreateSpaceResponse`] |
//! | `GET /pages` | [`page::GetPagesRequest`] | [`page::GetPagesResponse`] |
//!
//! [`Request`]: crate::api::model::Request

/// Declares an enum of values the API accepts, with its wire spelling.
///
/// The generated type converts to and from the wire string, serializes as
/// that string and can be used directly as a query parameter.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Spelling used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!(
                        "invalid value '{}', expected one of: {}",
                        other,
                        [$($wire),+].join(", ")
                    )),
                }
            }
        }

        impl $crate::api::model::ToQuery for $name {
            fn to_query(&self) -> Vec<String> {
                vec![self.as_str().to_string()]
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

mod shared;

pub mod page;
pub mod space;

pub use shared::{BodyType, Version};
