//! Platform glue and small shared helpers.

pub mod categories;
pub mod format;
pub mod platform;
pub mod shared;
pub mod storage;
