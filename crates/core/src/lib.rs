#![forbid(unsafe_code)]

pub mod catalog;
pub mod constants;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod selectors;
pub mod state;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use state::{AppState, CheckupState};
