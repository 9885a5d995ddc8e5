use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - quoted price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(pub(super) f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Two decimals, as every price table shows it
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - 24h change in percent
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct ChangePercent(pub(super) f64);

impl ChangePercent {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn trend(&self) -> Trend {
        if self.0 >= 0.0 { Trend::Up } else { Trend::Down }
    }

    /// `+0.40%` / `-0.85%`; zero counts as up.
    pub fn formatted(&self) -> String {
        let sign = if self.0 >= 0.0 { "+" } else { "" };
        format!("{}{:.2}%", sign, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Trend {
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "down")]
    Down,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "text-commodity-green",
            Trend::Down => "text-commodity-red",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// Commodities with an AI forecast table, keyed the way the selector is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr,
)]
pub enum Commodity {
    #[default]
    #[strum(serialize = "gold")]
    Gold,
    #[strum(serialize = "oil")]
    Oil,
    #[strum(serialize = "silver")]
    Silver,
    #[strum(serialize = "copper")]
    Copper,
}

impl Commodity {
    /// Label in the forecast selector
    pub fn label(&self) -> &'static str {
        match self {
            Commodity::Gold => "Gold",
            Commodity::Oil => "Crude Oil",
            Commodity::Silver => "Silver",
            Commodity::Copper => "Copper",
        }
    }

    /// The key with its first letter upper-cased: `gold` -> `Gold`
    pub fn capitalized(&self) -> String {
        let key = self.as_ref();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Trailing window of the dashboard history chart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr,
)]
pub enum HistoryWindow {
    #[strum(serialize = "3d")]
    ThreeDays,
    #[strum(serialize = "5d")]
    FiveDays,
    #[default]
    #[strum(serialize = "7d")]
    SevenDays,
}

impl HistoryWindow {
    pub fn days(&self) -> usize {
        match self {
            HistoryWindow::ThreeDays => 3,
            HistoryWindow::FiveDays => 5,
            HistoryWindow::SevenDays => 7,
        }
    }

    pub fn title(&self) -> String {
        format!("{}-Day Price Movement", self.days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn change_formatting() {
        assert_eq!(ChangePercent::new(0.4).formatted(), "+0.40%");
        assert_eq!(ChangePercent::new(-0.85).formatted(), "-0.85%");
        assert_eq!(ChangePercent::new(0.0).formatted(), "+0.00%");
        assert_eq!(ChangePercent::new(0.0).trend(), Trend::Up);
    }

    #[test]
    fn commodity_keys_round_trip() {
        assert_eq!(Commodity::from_str("oil").ok(), Some(Commodity::Oil));
        assert_eq!(Commodity::Copper.to_string(), "copper");
        assert_eq!(Commodity::Silver.capitalized(), "Silver");
        assert!(Commodity::from_str("platinum").is_err());
    }
}
