pub mod article;
pub mod filter;
pub mod format;
pub mod metrics;
pub mod month;
pub mod table_filter;
pub mod timeseries;
