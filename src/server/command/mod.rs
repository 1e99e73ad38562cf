//! Management commands run from the command line instead of the HTTP server.

pub mod ingredients;
pub mod sample_data;
pub mod superuser;
