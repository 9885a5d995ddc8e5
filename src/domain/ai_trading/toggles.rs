use std::collections::BTreeMap;

use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Named on/off flags. Flipping one key never touches another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToggleSet {
    flags: BTreeMap<&'static str, bool>,
}

impl ToggleSet {
    pub fn new<I>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, bool)>,
    {
        Self { flags: defaults.into_iter().collect() }
    }

    /// All keys start off.
    pub fn all_off<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self::new(keys.into_iter().map(|k| (k, false)))
    }

    pub fn is_on(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Flip `key`. Returns the new value, or `None` for an unknown key.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let flag = self.flags.get_mut(key)?;
        *flag = !*flag;
        log_debug!(LogComponent::Domain("Toggles"), "{} -> {}", key, *flag);
        Some(*flag)
    }

    pub fn active_count(&self) -> usize {
        self.flags.values().filter(|on| **on).count()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.flags.iter().map(|(k, v)| (*k, *v))
    }
}

/// A labelled switch in a settings list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingToggle {
    pub key: &'static str,
    pub label: &'static str,
    pub default_on: bool,
}

pub static RISK_SETTINGS: [SettingToggle; 4] = [
    SettingToggle { key: "stop-loss", label: "Stop Loss Protection", default_on: true },
    SettingToggle { key: "volatility-alerts", label: "Volatile Market Alerts", default_on: true },
    SettingToggle { key: "exposure-limits", label: "Exposure Limits", default_on: true },
    SettingToggle { key: "hedging", label: "Hedging Automation", default_on: false },
];

pub static SECURITY_SETTINGS: [SettingToggle; 4] = [
    SettingToggle { key: "unusual-activity", label: "Unusual Activity Detection", default_on: true },
    SettingToggle { key: "ip-auth", label: "IP-based Authentication", default_on: true },
    SettingToggle { key: "tx-verification", label: "Transaction Verification", default_on: true },
    SettingToggle { key: "pattern-detection", label: "Advanced Pattern Detection", default_on: false },
];

pub fn settings_toggles(settings: &[SettingToggle]) -> ToggleSet {
    ToggleSet::new(settings.iter().map(|s| (s.key, s.default_on)))
}
