//! HTTP protocol layer module
//!
//! Response builders shared by the route handlers and the dispatcher.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_options_response, json_response, strip_body,
    with_server_header,
};
