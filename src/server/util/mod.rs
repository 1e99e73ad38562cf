//! Small self-contained helpers used by the service and controller layers.

pub mod image;
pub mod password;
pub mod random;
pub mod url;
