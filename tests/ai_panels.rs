use commodity_hub::domain::ai_trading::{
    AiTab, BotRoster, ForecastPanel, RECENT_ALERTS, RISK_FACTORS, RISK_SETTINGS, RiskLevel,
    RiskTolerance, SECURITY_SETTINGS, Severity, TRADING_BOTS, format_target, settings_toggles,
};
use commodity_hub::domain::market_data::Commodity;
use insta::assert_snapshot;
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

fn target_lines(panel: &ForecastPanel) -> String {
    panel
        .targets()
        .iter()
        .map(|t| format!("{}: ${}", t.horizon, format_target(t.predicted)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn gold_is_selected_by_default() {
    let panel = ForecastPanel::default();
    assert_eq!(panel.selected(), Commodity::Gold);
    assert_snapshot!(target_lines(&panel), @r"
    24 Hours: $2018.5
    3 Days: $2030.4
    7 Days: $2053.2
    ");
}

#[test]
fn switching_to_oil_updates_targets_and_note() {
    let mut panel = ForecastPanel::default();
    assert!(panel.select_key("oil"));

    assert_snapshot!(target_lines(&panel), @r"
    24 Hours: $77.85
    3 Days: $78.1
    7 Days: $80.75
    ");
    assert_eq!(
        panel.accuracy_note(),
        "These predictions have a 78% historical accuracy rate for oil"
    );
}

#[test]
fn unknown_selector_key_keeps_choice() {
    let mut panel = ForecastPanel::new(Commodity::Silver);
    assert!(!panel.select_key("platinum"));
    assert_eq!(panel.selected(), Commodity::Silver);
}

#[test]
fn every_forecast_starts_from_an_actual_price() {
    for commodity in ForecastPanel::options() {
        let series = ForecastPanel::new(commodity).series();
        assert_eq!(series.len(), 8, "{commodity}");
        assert!(series[0].actual.is_some());
        assert!(series[1..].iter().all(|p| p.actual.is_none()));
        assert!(series.iter().all(|p| p.min <= p.predicted && p.predicted <= p.max));
    }
}

#[test]
fn bots_start_inactive() {
    let roster = BotRoster::default();
    assert_eq!(roster.bots().len(), 3);
    assert_eq!(roster.active_count(), 0);
    assert!(roster.bots().iter().all(|b| roster.status_label(b.id) == "Inactive"));
}

#[test]
fn toggling_unknown_bot_changes_nothing() {
    let mut roster = BotRoster::default();
    assert_eq!(roster.toggle("copper-scalper"), None);
    assert_eq!(roster, BotRoster::default());
}

#[quickcheck]
fn toggling_a_bot_flips_only_that_bot(picks: Vec<u8>) -> bool {
    let mut roster = BotRoster::default();
    let mut expected = [false; 3];
    for pick in picks {
        let idx = pick as usize % TRADING_BOTS.len();
        roster.toggle(TRADING_BOTS[idx].id);
        expected[idx] = !expected[idx];
    }
    TRADING_BOTS.iter().zip(expected).all(|(bot, on)| roster.is_active(bot.id) == on)
}

#[test]
fn bot_risk_levels() {
    let levels: Vec<RiskLevel> = TRADING_BOTS.iter().map(|b| b.risk_level).collect();
    assert_eq!(levels, vec![RiskLevel::Medium, RiskLevel::High, RiskLevel::Low]);
}

#[test]
fn risk_tolerance_bands() {
    assert_eq!(RiskTolerance::default().value(), 50);
    assert_eq!(RiskTolerance::default().label(), "Medium Risk");
    assert_eq!(RiskTolerance::new(32).band(), RiskLevel::Low);
    assert_eq!(RiskTolerance::new(33).band(), RiskLevel::Medium);
    assert_eq!(RiskTolerance::new(65).band(), RiskLevel::Medium);
    assert_eq!(RiskTolerance::new(66).label(), "High Risk");
}

#[test]
fn risk_tolerance_parses_slider_values() {
    assert_eq!(RiskTolerance::parse("70").map(|r| r.value()), Some(70));
    assert_eq!(RiskTolerance::parse(" 12.6 ").map(|r| r.value()), Some(13));
    assert_eq!(RiskTolerance::parse("250").map(|r| r.value()), Some(100));
    assert_eq!(RiskTolerance::parse("abc"), None);
    assert_eq!(RiskTolerance::parse("NaN"), None);
}

#[quickcheck]
fn risk_tolerance_is_clamped(raw: i64) -> bool {
    let value = RiskTolerance::new(raw).value();
    value <= RiskTolerance::MAX && (raw < 0 || raw > 100 || value as i64 == raw)
}

#[test]
fn settings_start_from_defaults() {
    let mut risk = settings_toggles(&RISK_SETTINGS);
    assert_eq!(risk.len(), 4);
    assert_eq!(risk.active_count(), 3);
    assert!(!risk.is_on("hedging"));
    assert_eq!(risk.toggle("hedging"), Some(true));
    assert_eq!(risk.active_count(), 4);

    let mut security = settings_toggles(&SECURITY_SETTINGS);
    assert_eq!(security.toggle("ip-auth"), Some(false));
    assert_eq!(security.toggle("missing"), None);
    assert_eq!(security.active_count(), 2);
}

#[test]
fn fraud_and_risk_tables() {
    assert_eq!(RISK_FACTORS.len(), 5);
    assert_eq!(RECENT_ALERTS.len(), 4);
    assert_eq!(Severity::High.to_string(), "High");
}

#[test]
fn tab_labels() {
    let labels: Vec<String> = AiTab::iter().map(|t| t.to_string()).collect();
    assert_eq!(
        labels,
        vec!["Price Forecasting", "Trading Bots", "Risk Management", "Fraud Detection"]
    );
    assert_eq!(AiTab::default(), AiTab::Forecast);
}
