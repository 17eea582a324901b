pub mod building;
pub mod debug;
pub mod tick_report;
