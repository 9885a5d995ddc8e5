pub mod chart;
pub mod footer;
pub mod navbar;
pub mod primitives;
pub mod sections;
pub mod toaster;

pub use chart::LineChartView;
pub use footer::Footer;
pub use navbar::Navbar;
pub use primitives::*;
pub use sections::{CommoditiesOverview, Hero, MarketSnapshot};
pub use toaster::Toaster;
