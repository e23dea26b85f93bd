//! HTTP plumbing: client construction and the JSON GET executor.

pub mod client;
pub mod request;

pub use client::build_http_client_from_config;
pub use request::get_json;
