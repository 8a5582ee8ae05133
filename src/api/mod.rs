pub mod sheets_api;
