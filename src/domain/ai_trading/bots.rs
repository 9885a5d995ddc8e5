use derive_more::Display;
use serde::Serialize;

use super::toggles::ToggleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "badge bg-green-100 text-green-800",
            RiskLevel::Medium => "badge bg-amber-100 text-amber-800",
            RiskLevel::High => "badge bg-red-100 text-red-800",
        }
    }
}

/// Static description of a mock trading bot. Its on/off state lives in
/// [`BotRoster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradingBotConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub commodity: &'static str,
    pub strategy: &'static str,
    pub success_rate: &'static str,
    pub monthly_return: &'static str,
    pub risk_level: RiskLevel,
}

pub static TRADING_BOTS: [TradingBotConfig; 3] = [
    TradingBotConfig {
        id: "gold-momentum",
        name: "Gold Momentum Trader",
        description: "Uses momentum indicators to identify potential entry and exit points for gold trading",
        commodity: "Gold",
        strategy: "Momentum",
        success_rate: "76%",
        monthly_return: "+3.2%",
        risk_level: RiskLevel::Medium,
    },
    TradingBotConfig {
        id: "oil-reversal",
        name: "Oil Reversal Strategy",
        description: "Identifies potential reversal points in crude oil prices using pattern recognition",
        commodity: "Crude Oil",
        strategy: "Reversal",
        success_rate: "68%",
        monthly_return: "+4.1%",
        risk_level: RiskLevel::High,
    },
    TradingBotConfig {
        id: "multi-commodity",
        name: "Multi-Commodity Arbitrage",
        description: "Exploits price differences between related commodities across different markets",
        commodity: "Multiple",
        strategy: "Arbitrage",
        success_rate: "82%",
        monthly_return: "+2.8%",
        risk_level: RiskLevel::Low,
    },
];

/// Active flags for the configured bots. Every bot starts paused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotRoster {
    bots: &'static [TradingBotConfig],
    active: ToggleSet,
}

impl Default for BotRoster {
    fn default() -> Self {
        Self::new(&TRADING_BOTS)
    }
}

impl BotRoster {
    pub fn new(bots: &'static [TradingBotConfig]) -> Self {
        Self { bots, active: ToggleSet::all_off(bots.iter().map(|b| b.id)) }
    }

    pub fn bots(&self) -> &'static [TradingBotConfig] {
        self.bots
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.is_on(id)
    }

    /// Flip one bot. Unknown ids leave the roster untouched.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        self.active.toggle(id)
    }

    pub fn status_label(&self, id: &str) -> &'static str {
        if self.is_active(id) { "Active" } else { "Inactive" }
    }

    pub fn active_count(&self) -> usize {
        self.active.active_count()
    }
}
