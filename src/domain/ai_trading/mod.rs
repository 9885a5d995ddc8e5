//! Mock "AI trading" tables: forecasts, bots, risk analysis and alerts,
//! plus the selection state the panels keep over them.

pub mod alerts;
pub mod bots;
pub mod forecast;
pub mod risk;
pub mod toggles;

pub use alerts::*;
pub use bots::*;
pub use forecast::*;
pub use risk::*;
pub use toggles::*;

use derive_more::Display;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum AiTab {
    #[default]
    #[display(fmt = "Price Forecasting")]
    Forecast,
    #[display(fmt = "Trading Bots")]
    Bots,
    #[display(fmt = "Risk Management")]
    Risk,
    #[display(fmt = "Fraud Detection")]
    Fraud,
}

impl AiTab {
    /// Label used on narrow screens
    pub fn short_label(&self) -> &'static str {
        match self {
            AiTab::Forecast => "Forecast",
            AiTab::Bots => "Bots",
            AiTab::Risk => "Risk",
            AiTab::Fraud => "Fraud",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AiTab::Forecast => "🧠",
            AiTab::Bots => "🤖",
            AiTab::Risk => "🛡",
            AiTab::Fraud => "⚠",
        }
    }
}
