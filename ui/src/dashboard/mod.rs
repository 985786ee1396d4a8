//! Building blocks of the dashboard page.

mod card;
pub use card::ChartCard;

mod header;
pub use header::DashboardHeader;
