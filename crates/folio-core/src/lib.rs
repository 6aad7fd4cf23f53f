//! Browser-independent pieces of the folio page.
//!
//! The web crate owns everything that touches the DOM; this crate owns the
//! data shapes and the arithmetic behind them so they can be tested on the
//! host.

pub mod calendar;
pub mod config;
pub mod dataset;
pub mod error;
pub mod latch;
pub mod nav;
pub mod scrape;
pub mod slides;
pub mod synth;
pub mod tooltip;

pub use calendar::*;
pub use config::*;
pub use dataset::*;
pub use error::*;
pub use latch::*;
pub use nav::*;
pub use scrape::*;
pub use slides::*;
pub use synth::*;
pub use tooltip::*;
