//
//  confluence-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Layer
//!
//! Typed access to the Confluence Cloud REST API v2.
//!
//! ## Architecture
//!
//! - [`model`]: the request/response protocol every endpoint is built on
//! - [`methods`]: one request struct and response wrapper per endpoint
//! - [`transport`]: the seam between requests and HTTP
//! - [`client`]: reqwest-backed transports, blocking and async
//! - [`common`]: errors and pagination envelopes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use confluence_sdk::api::Confluence;
//! use confluence_sdk::api::methods::space::GetSpaceRequest;
//! use confluence_sdk::api::model::{Field, Request};
//! use confluence_sdk::auth::AuthCredential;
//!
//! let client = Confluence::new("https://acme.atlassian.net")?
//!     .with_auth(AuthCredential::basic("me@example.com", "api-token"));
//!
//! let space = GetSpaceRequest {
//!     include_labels: Some(true),
//!     ..GetSpaceRequest::new(98306)
//! }
//! .sync(&client)?;
//!
//! match space.homepage_id() {
//!     Field::Value(id) => println!("homepage: {id}"),
//!     Field::Null => println!("no homepage"),
//!     Field::Absent => println!("homepage not returned"),
//!     Field::Mismatch => println!("unexpected homepage id"),
//! }
//! # Ok::<(), confluence_sdk::api::ApiError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<_, ApiError>`:
//!
//! - `Http`: the server answered with a non-2xx status
//! - `Decode`: a 2xx body that is not a JSON object
//! - `Encode`: a request field that failed to serialize
//! - `Network`: connection, TLS or timeout failures
//! - `InvalidUrl`: the site URL could not be used

/// Declares a wrapper whose only state is its [`ResponseBase`].
///
/// [`ResponseBase`]: crate::api::model::ResponseBase
macro_rules! leaf_response {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: $crate::api::model::ResponseBase,
        }

        impl $crate::api::model::Response for $name {
            fn from_base(base: $crate::api::model::ResponseBase) -> Self {
                Self { base }
            }

            fn base(&self) -> &$crate::api::model::ResponseBase {
                &self.base
            }
        }
    };
}

/// Reqwest-backed transports.
pub mod client;

/// Shared error type and pagination envelopes.
pub mod common;

/// Endpoint request and response types.
pub mod methods;

/// Field resolution, response wrappers and the request protocol.
pub mod model;

/// HTTP collaborator traits.
pub mod transport;

pub use client::{AsyncConfluence, Confluence};
pub use common::ApiError;
pub use transport::{AsyncTransport, HttpResponse, Query, Transport};
