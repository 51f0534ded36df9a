pub mod dashboard;
pub mod reports;
pub mod settings;

pub use dashboard::DashboardPage;
pub use reports::ReportsPage;
pub use settings::SettingsPage;
