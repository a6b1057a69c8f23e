//! Request and response DTOs.
//!
//! Every endpoint has an explicit schema with named fields and explicit
//! optionality; nothing downstream touches raw JSON values. Response
//! field names are camelCase for wire compatibility with the dashboard
//! frontend.

pub mod analytics;
pub mod auth;
pub mod links;
pub mod qr;

mod common;

pub use common::{DataResponse, ListResponse, MessageResponse};
