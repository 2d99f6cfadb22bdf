#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod codec;
mod component;
mod host;
mod listeners;

pub use codec::*;
pub use component::*;
pub use host::*;
pub use listeners::*;

pub use dioxus_intercept::*;
