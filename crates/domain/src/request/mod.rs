//! Request types: methods, target URLs and outgoing request specs.

mod base_url;
mod method;
mod spec;

pub use base_url::BaseUrl;
pub use method::HttpMethod;
pub use spec::{JSON_CONTENT_TYPE, RequestSpec};
