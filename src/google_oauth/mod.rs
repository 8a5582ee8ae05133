pub mod credentials;
pub mod endpoints;
pub mod utils;

pub use credentials::{ClientCredentials, TokenSet};
