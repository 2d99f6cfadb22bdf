#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod classify;
mod config;
mod error;
mod host;
mod location;
mod navigator;

pub use classify::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use location::*;
pub use navigator::*;

/// A collection of useful items most applications using the interceptor need.
pub mod prelude {
    pub use crate::{
        is_internal, AnchorClick, ClickOutcome, LocationInput, LocationState, MemoryHost,
        NavigationError, NavigationHost, Navigator, NavigatorConfig, Query,
    };
}
