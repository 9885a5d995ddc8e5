use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    #[display(fmt = "fraud")]
    Fraud,
    #[display(fmt = "risk")]
    Risk,
    #[display(fmt = "system")]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::High => "badge bg-red-100 text-red-800",
            Severity::Medium => "badge bg-amber-100 text-amber-800",
            Severity::Low => "badge bg-blue-100 text-blue-800",
        }
    }

    pub fn panel_class(&self) -> &'static str {
        match self {
            Severity::High => "alert-row border-red-300 bg-red-50",
            Severity::Medium => "alert-row border-amber-300 bg-amber-50",
            Severity::Low => "alert-row border-blue-300 bg-blue-50",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityAlert {
    pub id: u32,
    pub category: AlertCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub time: &'static str,
}

pub static RECENT_ALERTS: [SecurityAlert; 4] = [
    SecurityAlert {
        id: 1,
        category: AlertCategory::Fraud,
        title: "Suspicious Trading Pattern Detected",
        description: "Unusual volume in silver trades detected from IP 192.168.1.45",
        severity: Severity::High,
        time: "5 minutes ago",
    },
    SecurityAlert {
        id: 2,
        category: AlertCategory::Risk,
        title: "Risk Threshold Exceeded",
        description: "Gold position exceeds 25% of portfolio allocation",
        severity: Severity::Medium,
        time: "27 minutes ago",
    },
    SecurityAlert {
        id: 3,
        category: AlertCategory::System,
        title: "API Connection Issue",
        description: "Temporary connection issue with market data provider",
        severity: Severity::Low,
        time: "1 hour ago",
    },
    SecurityAlert {
        id: 4,
        category: AlertCategory::Fraud,
        title: "Multiple Failed Authentication",
        description: "5 failed login attempts from unknown location",
        severity: Severity::Medium,
        time: "2 hours ago",
    },
];
