//! Utility functions for identifier encoding and URL handling.
//!
//! - [`codec`] - Counter value to short identifier encoding
//! - [`url_validator`] - URL well-formedness check and hostname extraction

pub mod codec;
pub mod url_validator;
