pub mod errors;
pub mod html;

pub use errors::error_to_response;
pub use html::{html_response, html_response_with_cookie, text_response};

pub use crate::errors::ResultResp;
