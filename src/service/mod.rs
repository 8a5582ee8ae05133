pub mod row_builder;
pub mod token_import;
