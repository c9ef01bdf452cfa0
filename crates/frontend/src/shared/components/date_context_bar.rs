use leptos::prelude::*;

use crate::shared::components::ui::Select;
use crate::shared::date_context::DateContextStore;

/// The three reporting-period selects plus the current-period label.
///
/// Pure presentation: all state and option generation lives in the
/// [`DateContextStore`]; consumers react through its listener registry.
#[component]
pub fn DateContextBar(store: DateContextStore) -> impl IntoView {
    let year_options = store.financial_year_options();
    let type_options = store.period_type_options();

    let period_label = move || {
        store
            .context()
            .formatted_label()
            .map(|label| format!("Current Period: {}", label))
            .unwrap_or_else(|| "Current Period: Not Set".to_string())
    };

    view! {
        <div class="context-bar">
            <Select
                label="Financial Year"
                id="financial-year-select"
                value=Signal::derive(move || store.financial_year.get())
                options=Signal::derive(move || year_options.clone())
                placeholder="Select Financial Year"
                on_change=Callback::new(move |value| store.set_financial_year(value))
            />
            <Select
                label="Period Type"
                id="period-type-select"
                value=Signal::derive(move || store.period_type.get())
                options=Signal::derive(move || type_options.clone())
                placeholder="Select Period Type"
                on_change=Callback::new(move |value| store.set_period_type(value))
            />
            <Select
                label="Period"
                id="period-identifier-select"
                value=Signal::derive(move || store.period_identifier.get())
                options=Signal::derive(move || store.period_identifier_options())
                placeholder="Select Period"
                on_change=Callback::new(move |value| store.set_period_identifier(value))
            />
            <div class="context-bar__label" id="period-label">
                {period_label}
            </div>
        </div>
    }
}
