pub mod forex_api;
