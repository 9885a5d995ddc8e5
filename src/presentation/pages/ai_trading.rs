use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::ai_trading::{
    AiTab, BotRoster, ForecastPanel, RECENT_ALERTS, RISK_FACTORS, RISK_SETTINGS, RiskTolerance,
    SECURITY_SETTINGS, SettingToggle, ToggleSet, TradingBotConfig, format_target,
    settings_toggles,
};
use crate::domain::chart::LineChart;
use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::presentation::components::{
    AlertBox, Badge, Card, CardContent, CardHeader, LineChartView, Navbar, Switch,
};

#[component]
pub fn AiTradingPage() -> impl IntoView {
    let (tab, set_tab) = create_signal(AiTab::default());
    // Panels are rebuilt on every tab switch; their state is owned here.
    let panel = create_rw_signal(ForecastPanel::default());
    let roster = create_rw_signal(BotRoster::default());
    let tolerance = create_rw_signal(RiskTolerance::default());
    let risk_settings = create_rw_signal(settings_toggles(&RISK_SETTINGS));
    let security_settings = create_rw_signal(settings_toggles(&SECURITY_SETTINGS));

    let tabs = AiTab::iter()
        .map(|option| {
            view! {
                <button
                    type="button"
                    role="tab"
                    class="tab"
                    class:active=move || tab.get() == option
                    aria-selected=move || (tab.get() == option).to_string()
                    on:click=move |_| {
                        log_debug!(LogComponent::Presentation("AiTrading"), "tab {}", option);
                        set_tab.set(option);
                    }
                >
                    <span aria-hidden="true">{option.icon()}</span>
                    " "
                    <span class="label-long">{option.to_string()}</span>
                    <span class="label-short">{option.short_label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="page muted-bg">
            <Navbar/>
            <main class="page-main">
                <h1 class="page-title">"AI & Automated Trading"</h1>
                <p class="page-subtitle">
                    "Advanced AI tools for forecasting, trading automation, and risk management"
                </p>
                <div class="tab-strip" role="tablist">{tabs}</div>
                <div class="tab-panel">
                    {move || match tab.get() {
                        AiTab::Forecast => view! { <ForecastTab panel=panel/> }.into_view(),
                        AiTab::Bots => view! { <BotsTab roster=roster/> }.into_view(),
                        AiTab::Risk => {
                            view! { <RiskTab tolerance=tolerance settings=risk_settings/> }.into_view()
                        }
                        AiTab::Fraud => view! { <FraudTab settings=security_settings/> }.into_view(),
                    }}
                </div>
            </main>
        </div>
    }
}

#[component]
fn ForecastTab(panel: RwSignal<ForecastPanel>) -> impl IntoView {
    let chart = Signal::derive(move || LineChart::from_forecast(panel.with(|p| p.series())));

    let options = ForecastPanel::options()
        .map(|commodity| {
            view! {
                <option value=commodity.as_ref().to_string() selected=move || panel.with(|p| p.selected() == commodity)>
                    {commodity.label()}
                </option>
            }
        })
        .collect_view();

    let targets = move || {
        panel
            .with(|p| p.targets())
            .into_iter()
            .map(|target| {
                view! {
                    <div class="setting-row">
                        <span>{target.horizon}</span>
                        <span class="trend text-commodity-green">
                            "↗ " {format_target(target.predicted)}
                        </span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="grid grid-3">
            <Card class="span-2">
                <CardHeader
                    title="AI Price Forecast"
                    icon="📈"
                    description="7-day price forecast using machine learning models"
                >
                    <select
                        aria-label="Select commodity"
                        on:change=move |ev| {
                            let key = event_target_value(&ev);
                            panel.update(|p| {
                                p.select_key(&key);
                            });
                        }
                    >
                        {options}
                    </select>
                </CardHeader>
                <CardContent>
                    <LineChartView chart=chart/>
                </CardContent>
            </Card>
            <Card>
                <CardHeader
                    title="Price Predictions"
                    icon="💲"
                    description=Signal::derive(move || {
                        format!("AI-powered price targets for {}", panel.with(|p| p.selected().capitalized()))
                    })
                />
                <CardContent>
                    <div class="setting-row" style="border-bottom: 1px solid var(--border); font-weight: 500">
                        <span>"Time Frame"</span>
                        <span>"Prediction"</span>
                    </div>
                    {targets}
                    <div style="padding-top: 1rem">
                        <AlertBox title="Prediction Confidence">
                            {move || panel.with(|p| p.accuracy_note())}
                        </AlertBox>
                    </div>
                    <div style="padding-top: 1rem">
                        <button type="button" class="btn btn-block btn-blue">
                            "↗ Generate Detailed Analysis"
                        </button>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn BotsTab(roster: RwSignal<BotRoster>) -> impl IntoView {
    let bots = roster.with_untracked(|r| r.bots());

    view! {
        <Card>
            <CardHeader
                title="Automated Trading Agents"
                icon="🤖"
                description="Configure and manage AI-powered trading bots to automate your trading strategy"
            />
            <CardContent>
                <div class="grid">
                    {bots.iter().map(|bot| view! { <BotCard bot=bot roster=roster/> }).collect_view()}
                </div>
                <div style="margin-top: 1.5rem">
                    <button type="button" class="btn btn-gold">"🤖 Create New Trading Bot"</button>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn BotCard(bot: &'static TradingBotConfig, roster: RwSignal<BotRoster>) -> impl IntoView {
    let id = bot.id;
    let active = Signal::derive(move || roster.with(|r| r.is_active(id)));
    let toggle = move || {
        roster.update(|r| {
            r.toggle(id);
        });
    };

    let stat = |label: &'static str, value: &'static str, class: &'static str| {
        view! {
            <div class="alert" style="background: #f9fafb; border: none">
                <div class="muted">{label}</div>
                <div class=class style="font-weight: 500">{value}</div>
            </div>
        }
    };

    view! {
        <div class="alert">
            <div class="form-row">
                <div>
                    <h3 class="section-title" style="font-size: 1rem; margin: 0">
                        {bot.name}
                        <Badge class=bot.risk_level.badge_class()>{format!("{} Risk", bot.risk_level)}</Badge>
                    </h3>
                    <p class="muted">{bot.description}</p>
                </div>
                <div class="checkbox-row">
                    <span class="muted">{move || roster.with(|r| r.status_label(id))}</span>
                    <Switch checked=active on_toggle=move |_| toggle() label=bot.name/>
                    <button type="button" class="btn btn-sm btn-outline" aria-label="Bot settings">"⚙"</button>
                </div>
            </div>
            <div class="grid grid-4" style="gap: 1rem">
                {stat("Commodity", bot.commodity, "")}
                {stat("Strategy", bot.strategy, "")}
                {stat("Success Rate", bot.success_rate, "")}
                {stat("Monthly Return", bot.monthly_return, "text-commodity-green")}
            </div>
            <Show when=move || active.get()>
                <div class="alert form-row" style="margin-top: 1rem; background: #f0fdf4; border-color: #bbf7d0">
                    <span style="color: #166534">"▶ Bot is actively monitoring market conditions"</span>
                    <button type="button" class="btn btn-sm btn-danger" on:click=move |_| toggle()>
                        "⏸ Pause Bot"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn RiskTab(tolerance: RwSignal<RiskTolerance>, settings: RwSignal<ToggleSet>) -> impl IntoView {

    let rows = RISK_FACTORS
        .iter()
        .map(|risk| {
            view! {
                <tr>
                    <td style="font-weight: 500">{risk.factor}</td>
                    <td><Badge class=risk.status.badge_class()>{risk.status.to_string()}</Badge></td>
                    <td>{risk.impact}</td>
                    <td>{risk.recommendation}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="grid grid-3">
            <Card class="span-2">
                <CardHeader
                    title="Risk Analysis"
                    icon="🛡"
                    description="AI-powered analysis of current market risks and recommendations"
                />
                <CardContent>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Risk Factor"</th>
                                <th>"Status"</th>
                                <th>"Impact"</th>
                                <th>"Recommendation"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </CardContent>
            </Card>
            <Card>
                <CardHeader
                    title="Risk Settings"
                    icon="⚙"
                    description="Configure your risk tolerance and management settings"
                />
                <CardContent>
                    <h3 style="font-size: 1rem; font-weight: 500">"Risk Tolerance Level"</h3>
                    <div class="slider-row">
                        <span class="muted">"Conservative"</span>
                        <input
                            type="range"
                            aria-label="Risk tolerance"
                            min=RiskTolerance::MIN
                            max=RiskTolerance::MAX
                            step=RiskTolerance::STEP
                            prop:value=move || tolerance.get().value().to_string()
                            on:input=move |ev| {
                                if let Some(value) = RiskTolerance::parse(&event_target_value(&ev)) {
                                    tolerance.set(value);
                                }
                            }
                        />
                        <span class="muted">"Aggressive"</span>
                    </div>
                    <div style="text-align: center; margin: 0.5rem 0 1.5rem">
                        <Badge class=Signal::derive(move || tolerance.get().band().badge_class().to_string())>
                            {move || tolerance.get().label()}
                        </Badge>
                    </div>
                    <SettingsList settings=&RISK_SETTINGS flags=settings/>
                    <button type="button" class="btn btn-block btn-blue" style="margin-top: 1.5rem">
                        "Save Risk Settings"
                    </button>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn FraudTab(settings: RwSignal<ToggleSet>) -> impl IntoView {
    let alerts = RECENT_ALERTS
        .iter()
        .map(|alert| {
            view! {
                <div class=alert.severity.panel_class()>
                    <div class="form-row" style="margin: 0">
                        <div>
                            <div class="checkbox-row">
                                <h3 style="font-size: 1rem; margin: 0">{alert.title}</h3>
                                <Badge class=alert.severity.badge_class()>{alert.severity.to_string()}</Badge>
                            </div>
                            <p style="margin: 0.25rem 0 0; font-size: 0.875rem">{alert.description}</p>
                        </div>
                        <div class="muted">{alert.time}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Card>
            <CardHeader
                title="Fraud Detection & Security Alerts"
                icon="⚠"
                description="Real-time monitoring system to detect suspicious activities"
            />
            <CardContent>
                <div class="grid" style="gap: 1rem">{alerts}</div>
                <h3 style="font-size: 1rem; margin-top: 1.5rem">"Security Settings"</h3>
                <SettingsList settings=&SECURITY_SETTINGS flags=settings/>
                <div style="margin-top: 1rem">
                    <AlertBox title="Security Status" class="alert-info">
                        "Your account is protected by multi-factor authentication and AI fraud detection"
                    </AlertBox>
                </div>
            </CardContent>
        </Card>
    }
}

/// Independent switches, one per setting.
#[component]
fn SettingsList(settings: &'static [SettingToggle], flags: RwSignal<ToggleSet>) -> impl IntoView {
    settings
        .iter()
        .map(|setting| {
            let key = setting.key;
            view! {
                <div class="setting-row">
                    <span>{setting.label}</span>
                    <Switch
                        checked=Signal::derive(move || flags.with(|f| f.is_on(key)))
                        on_toggle=move |_| {
                            flags.update(|f| {
                                f.toggle(key);
                            })
                        }
                        label=setting.label
                    />
                </div>
            }
        })
        .collect_view()
}
