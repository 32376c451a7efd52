#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod store;
pub mod traits;
pub mod types;

pub use config::{Config, SearchSettings};
pub use error::{Error, Result};
pub use store::{LocationSnapshot, MemoryLocationStore};
pub use traits::LocationStore;
pub use types::{City, LocationId, Place, PlaceKind, ResultKind, SearchResult, TypePriority};
