pub mod alerts_tab;
pub mod dashboard;
pub mod messages_tab;
pub mod orders_tab;

pub use dashboard::AdminDashboard;
