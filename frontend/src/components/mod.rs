//! UI Components for the legal document analysis page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF selection, submission and error display
//! - [`ResultSection`] - Analysis summary, risk badge and entities
//! - [`HowItWorks`] - Workflow explanation shown on an empty page

mod hero;
mod upload;
mod result;
mod info;
mod footer;

pub use hero::*;
pub use upload::*;
pub use result::*;
pub use info::*;
pub use footer::*;
