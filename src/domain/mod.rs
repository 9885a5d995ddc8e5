pub mod ai_trading;
pub mod auth;
pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod navigation;
pub mod notification;
