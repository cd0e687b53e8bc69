//! Browsable catalogue of cryptographic weakness classes (CWE entries).
//!
//! Every page pairs "do" and "don't" code samples, each shown through its
//! own [`Slideshow`](carousel::Slideshow) carousel.

pub mod app;
pub mod carousel;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod layout;
pub mod page;

pub use app::{Action, App, Screen};
pub use carousel::{Indicator, SlideView, Slideshow};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use page::{CodeSample, CveReference, PageView, PracticePage, Side, SlideAction};
