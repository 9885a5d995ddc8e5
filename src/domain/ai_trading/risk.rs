use derive_more::Display;
use serde::Serialize;

use super::bots::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum RiskStatus {
    Normal,
    Elevated,
    High,
    Low,
}

impl RiskStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskStatus::Normal => "badge bg-green-100 text-green-800",
            RiskStatus::Elevated => "badge bg-amber-100 text-amber-800",
            RiskStatus::High | RiskStatus::Low => "badge bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub factor: &'static str,
    pub status: RiskStatus,
    pub impact: &'static str,
    pub recommendation: &'static str,
}

pub static RISK_FACTORS: [RiskFactor; 5] = [
    RiskFactor {
        factor: "Market Volatility",
        status: RiskStatus::Elevated,
        impact: "High",
        recommendation: "Reduce position sizes by 15%",
    },
    RiskFactor {
        factor: "Liquidity Risk",
        status: RiskStatus::Normal,
        impact: "Low",
        recommendation: "Standard operations",
    },
    RiskFactor {
        factor: "Correlation Risk",
        status: RiskStatus::Elevated,
        impact: "Medium",
        recommendation: "Diversify commodity selections",
    },
    RiskFactor {
        factor: "Geopolitical Risk",
        status: RiskStatus::High,
        impact: "High",
        recommendation: "Implement hedging strategies",
    },
    RiskFactor {
        factor: "Regulatory Risk",
        status: RiskStatus::Low,
        impact: "Low",
        recommendation: "Standard operations",
    },
];

/// Slider value 0..=100. Out-of-range input is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RiskTolerance(u8);

impl Default for RiskTolerance {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl RiskTolerance {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const STEP: u8 = 1;
    pub const DEFAULT: u8 = 50;

    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Slider input arrives as text from the range element.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| Self::new(v.round() as i64))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> RiskLevel {
        match self.0 {
            0..=32 => RiskLevel::Low,
            33..=65 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn label(&self) -> String {
        format!("{} Risk", self.band())
    }
}
