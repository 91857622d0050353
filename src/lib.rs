#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod binder;
pub mod errors;
pub mod value;

pub use binder::{bind, try_bind};
pub use errors::BindError;
pub use value::BindValue;
