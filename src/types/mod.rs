pub mod append;

pub use append::AppendRequest;
