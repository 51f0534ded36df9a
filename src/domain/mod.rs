pub mod analytics;
pub mod chart;
pub mod config;
pub mod errors;
pub mod logging;
pub mod routing;
pub mod sales;
pub mod theme;
