//! Request guards shared by the controllers.

pub mod auth;
pub mod payload;

#[cfg(test)]
mod test;
