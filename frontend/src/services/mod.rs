//! Backend services.
//!
//! # Services
//!
//! - [`analysis`] - PDF upload to the legal analysis backend

pub mod analysis;

pub use analysis::*;
