use std::sync::Arc;

use crate::types::{City, Place};

/// Read side of the data-access layer that owns city and place records.
///
/// Snapshots may be stale or partial while a load is in flight; consumers
/// treat whatever they get as valid input.
pub trait LocationStore: Send + Sync {
    fn cities(&self) -> Arc<[City]>;
    fn places(&self) -> Arc<[Place]>;
    fn is_loading(&self) -> bool;
}

impl<S: LocationStore + ?Sized> LocationStore for Arc<S> {
    fn cities(&self) -> Arc<[City]> {
        (**self).cities()
    }

    fn places(&self) -> Arc<[Place]> {
        (**self).places()
    }

    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }
}
