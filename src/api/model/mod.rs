//
//  confluence-sdk
//  api/model/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request and response base protocol.
//!
//! - [`field`]: three-state resolution of a JSON key ([`Field`])
//! - [`response`]: immutable response wrappers with memoized nested access
//! - [`request`]: request values, wire-name mapping and dispatch

pub mod field;
pub mod request;
pub mod response;

pub use field::{resolve, Field, FromJson, RawData};
pub use request::{Body, Method, Params, Request, ToQuery};
pub use response::{Response, ResponseBase, ResponseMeta};
