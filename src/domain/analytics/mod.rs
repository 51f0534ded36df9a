//! Analytics aggregate: filter criteria, derived views, state and export.

pub mod export;
pub mod filters;
pub mod services;
pub mod state;

pub use export::*;
pub use filters::*;
pub use services::{DerivedViews, MonthlyRevenue};
pub use state::*;
