pub mod append;
pub mod oauth;
