//! Outbound HTTP plumbing: request options, anti-forgery augmentation, and
//! the gateway all portal calls dispatch through.

pub mod gateway;
pub mod options;

pub use gateway::{FetchOutcome, HttpGateway};
pub use options::{CSRF_HEADER, RequestBody, RequestOptions, augment_request};
