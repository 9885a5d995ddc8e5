pub mod ai_trading;
pub mod authentication;
pub mod dashboard;
pub mod index;
pub mod not_found;

pub use ai_trading::AiTradingPage;
pub use authentication::AuthenticationPage;
pub use dashboard::MarketDashboardPage;
pub use index::IndexPage;
pub use not_found::NotFoundPage;
