//! Domain module containing HTTP response models and the key identifier table.

pub mod keys;
pub mod responses;

pub use responses::{AppInfo, DeviceInfo, ResponseShapeError};
