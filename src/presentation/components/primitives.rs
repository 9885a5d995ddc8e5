use leptos::*;

use crate::domain::market_data::ChangePercent;

#[component]
pub fn Card(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = match class {
        Some(extra) => format!("card {}", extra),
        None => "card".to_string(),
    };
    view! { <div class=class>{children()}</div> }
}

/// Title row of a card, with an optional icon and description line.
#[component]
pub fn CardHeader(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional, into)] description: Option<MaybeSignal<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <h3 class="card-title">
                {icon.map(|i| view! { <span aria-hidden="true">{i}</span> })}
                {move || title.get()}
            </h3>
            {description.map(|d| view! { <p class="card-description">{move || d.get()}</p> })}
            {children.map(|c| c())}
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

#[component]
pub fn Badge(#[prop(into)] class: MaybeSignal<String>, children: Children) -> impl IntoView {
    view! { <span class=move || class.get()>{children()}</span> }
}

/// Accessible on/off button. The caller owns the state.
#[component]
pub fn Switch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(optional)] label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class="switch"
            class:on=move || checked.get()
            aria-checked=move || checked.get().to_string()
            aria-label=label
            on:click=move |_| on_toggle.call(())
        >
            <span class="switch-thumb"></span>
        </button>
    }
}

#[component]
pub fn AlertBox(
    #[prop(into)] title: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = format!("alert {}", class.unwrap_or_default());
    view! {
        <div class=class role="alert">
            <p class="alert-title">"ℹ " {title}</p>
            <div>{children()}</div>
        </div>
    }
}

/// First validation message for a field, if any.
#[component]
pub fn FieldMessage(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|m| view! { <p class="field-error">{m}</p> })
}

/// Signed percentage with the trend arrow and colour.
#[component]
pub fn TrendChange(change: ChangePercent) -> impl IntoView {
    let trend = change.trend();
    view! {
        <span class=format!("trend {}", trend.css_class())>
            <span aria-hidden="true">{trend.arrow()}</span>
            <span>{change.formatted()}</span>
        </span>
    }
}
