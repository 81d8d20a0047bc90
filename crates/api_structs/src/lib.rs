mod account;
mod status;

pub mod dtos {
    pub use crate::account::dtos::*;
}

pub use crate::account::api::*;
pub use crate::status::api::*;

/// Header carrying the shared secret. Header names are case insensitive.
pub const API_KEY_HEADER: &str = "x-api-key";
