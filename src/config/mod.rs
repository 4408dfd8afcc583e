//! Request configuration file loading.
mod loader;
mod types;


pub use loader::{load_request_spec, parse_request_spec};
pub use types::RequestFile;
