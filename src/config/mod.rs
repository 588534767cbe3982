//! Configuration module for the dashboard.

// Can all be private because we have a public re-export.
mod dashboard;
mod debug;
mod persistence;

// Re-export commonly used items
pub use dashboard::{ChartLayoutConfig, DASHBOARD, DashboardConfig, FooterConfig, ServerDefaults};
pub use debug::DF;
pub use persistence::{DatabaseConfig, PERSISTENCE, PersistenceConfig, TableNamingConfig};
