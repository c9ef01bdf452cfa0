use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use contracts::domain::actual::{ActualEntry, ActualRecord, SaveActualsRequest};
use contracts::domain::distributor::Distributor;
use contracts::shared::api::ActualsQuery;

use crate::domain::actuals::api::{delete_actual, fetch_actuals, save_actuals};
use crate::domain::distributors::api::fetch_distributors;
use crate::shared::components::date_context_bar::DateContextBar;
use crate::shared::components::ui::Button;
use crate::shared::date_context::DateContextStore;
use crate::shared::format::{format_money, format_percent};
use crate::shared::icons::icon;
use crate::shared::numeric::sanitize_numeric;
use crate::shared::toast::{ToastKind, ToastService, UndoPayload};

fn input_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Actuals recording screen: one amount field per distributor, saved in
/// bulk against the selected reporting period.
#[component]
#[allow(non_snake_case)]
pub fn ActualsPage() -> impl IntoView {
    let store = DateContextStore::new();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (distributors, set_distributors) = signal::<Vec<Distributor>>(Vec::new());
    let (actuals, set_actuals) = signal::<Vec<ActualRecord>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let entries: RwSignal<HashMap<i64, String>> = RwSignal::new(HashMap::new());

    // Loads only for a complete context; a partial selection clears the
    // table instead.
    let load = move || {
        let context = store.snapshot();
        if !context.is_valid() {
            set_actuals.set(Vec::new());
            entries.update(|map| map.clear());
            return;
        }
        let query = ActualsQuery::from_context(&context);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_actuals(&query).await {
                Ok(records) => {
                    entries.update(|map| {
                        map.clear();
                        for record in &records {
                            map.insert(record.distributor_id, input_amount(record.value));
                        }
                    });
                    set_actuals.set(records);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("load actuals: {e}");
                    set_error.set(Some(format!("Failed to load actuals: {}", e)));
                }
            }
        });
    };

    store.subscribe(move |_| load());

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_distributors().await {
            Ok(list) => set_distributors.set(list),
            Err(e) => {
                log::error!("load distributors: {e}");
                set_error.set(Some(format!("Failed to load distributors: {}", e)));
            }
        }
    });
    load();

    let handle_submit = move |_| {
        let context = store.snapshot();
        let mut collected = Vec::new();
        for distributor in distributors.get_untracked() {
            let raw = entries
                .get_untracked()
                .get(&distributor.id)
                .cloned()
                .unwrap_or_default();
            let raw = raw.trim().to_string();
            if raw.is_empty() {
                continue;
            }
            if let Ok(value) = raw.parse::<f64>() {
                collected.push(ActualEntry {
                    distributor_id: distributor.id,
                    value,
                });
            }
        }

        let request = SaveActualsRequest::new(&context, collected);
        if let Err(message) = request.validate() {
            toasts.show(message, ToastKind::Warning);
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match save_actuals(&request).await {
                Ok(result) if result.success => {
                    toasts.show("Actuals saved successfully.", ToastKind::Success);
                    load();
                }
                Ok(result) => {
                    let message = result
                        .message
                        .unwrap_or_else(|| "Failed to save actuals.".to_string());
                    toasts.show(message, ToastKind::Error);
                }
                Err(e) => {
                    log::error!("save actuals: {e}");
                    toasts.show("Failed to save actuals. Please try again.", ToastKind::Error);
                }
            }
        });
    };

    // Copy the row's value back into its form field and focus it.
    let handle_edit = move |record: ActualRecord| {
        entries.update(|map| {
            map.insert(record.distributor_id, input_amount(record.value));
        });
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let field_id = format!("actual-input-{}", record.distributor_id);
            if let Some(element) = document.get_element_by_id(&field_id) {
                element.scroll_into_view();
                if let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() {
                    _ = input.focus();
                }
            }
        }
    };

    let handle_delete = move |record: ActualRecord| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Are you sure you want to delete this actual?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let item_data = serde_json::to_value(&record).unwrap_or_default();
        let id = record.id;
        wasm_bindgen_futures::spawn_local(async move {
            match delete_actual(id).await {
                Ok(result) if result.success => {
                    toasts.show_with_undo(
                        "Actual deleted successfully.",
                        ToastKind::Success,
                        UndoPayload {
                            item_type: "actual".to_string(),
                            item_id: id,
                            item_data,
                        },
                    );
                    load();
                }
                Ok(result) => {
                    let message = result
                        .message
                        .unwrap_or_else(|| "Failed to delete actual.".to_string());
                    toasts.show(message, ToastKind::Error);
                }
                Err(e) => {
                    log::error!("delete actual {id}: {e}");
                    toasts.show("Failed to delete actual. Please try again.", ToastKind::Error);
                }
            }
        });
    };

    let distributor_name = move |id: i64| {
        distributors
            .get()
            .into_iter()
            .find(|d| d.id == id)
            .map(|d| d.name)
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Sales Actuals"}</h1>
                </div>
            </div>

            <DateContextBar store=store />

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="card">
                <h2 class="card__title">{"Record Actuals"}</h2>
                <div class="form">
                    <For
                        each=move || distributors.get()
                        key=|d| d.id
                        children=move |distributor: Distributor| {
                            let id = distributor.id;
                            view! {
                                <div class="form__row">
                                    <label class="form__label" for=format!("actual-input-{}", id)>
                                        {distributor.name.clone()}
                                    </label>
                                    <div class="input-group">
                                        <span class="input-group__prefix">{"₹"}</span>
                                        <input
                                            id=format!("actual-input-{}", id)
                                            class="form__input"
                                            type="text"
                                            placeholder="Enter actual value"
                                            prop:value=move || {
                                                entries.get().get(&id).cloned().unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let sanitized =
                                                    sanitize_numeric(&event_target_value(&ev));
                                                entries.update(|map| {
                                                    map.insert(id, sanitized);
                                                });
                                            }
                                        />
                                    </div>
                                </div>
                            }
                        }
                    />
                    <div class="form__actions">
                        <Button on_click=Callback::new(handle_submit)>
                            {icon("save")}
                            {"Save Actuals"}
                        </Button>
                    </div>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Distributor"}</th>
                            <th class="table__header-cell">{"Period"}</th>
                            <th class="table__header-cell">{"Actual"}</th>
                            <th class="table__header-cell">{"Target"}</th>
                            <th class="table__header-cell">{"Achievement"}</th>
                            <th class="table__header-cell table__header-cell--actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let records = actuals.get();
                            if records.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="table__cell table__cell--empty">
                                            {"No actuals found for the selected period."}
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            records.into_iter().map(|record| {
                                let achievement = record
                                    .attainment_percent()
                                    .map(format_percent)
                                    .unwrap_or_else(|| "N/A".to_string());
                                let record_for_edit = record.clone();
                                let record_for_delete = record.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{distributor_name(record.distributor_id)}</td>
                                        <td class="table__cell">{record.period_identifier.clone()}</td>
                                        <td class="table__cell">{format!("₹{}", format_money(record.value))}</td>
                                        <td class="table__cell">{format!("₹{}", format_money(record.target.unwrap_or(0.0)))}</td>
                                        <td class="table__cell">{achievement}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--secondary button--sm"
                                                on:click=move |_| handle_edit(record_for_edit.clone())
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--danger button--sm"
                                                on:click=move |_| handle_delete(record_for_delete.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
