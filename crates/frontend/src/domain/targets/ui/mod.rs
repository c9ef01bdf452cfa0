use leptos::prelude::*;

use contracts::domain::distributor::Distributor;
use contracts::domain::target::{TargetDraft, TargetPayload, TargetRecord};
use contracts::shared::api::TargetsQuery;

use crate::domain::distributors::api::fetch_distributors;
use crate::domain::targets::api::{
    create_target, delete_target, fetch_targets, sample_targets, update_target,
};
use crate::domain::targets::regions::{states_for_region, territories_for_state, REGIONS};
use crate::shared::components::date_context_bar::DateContextBar;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::date_context::DateContextStore;
use crate::shared::format::format_inr;
use crate::shared::icons::icon;
use crate::shared::numeric::sanitize_numeric;
use crate::shared::toast::ToastKind;

/// How long success/info notices stay up, milliseconds.
const NOTICE_TIMEOUT_MS: u32 = 3_000;

fn notice_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "notice--success",
        ToastKind::Error => "notice--error",
        ToastKind::Info => "notice--info",
        ToastKind::Warning => "notice--warning",
    }
}

// The backend echoes the stored record back; in development-mode fallback
// we fabricate the same shape locally.
fn record_from_payload(id: i64, payload: &TargetPayload) -> TargetRecord {
    TargetRecord {
        id,
        distributor: payload.distributor.clone(),
        region: payload.region.clone(),
        state: payload.state.clone(),
        territory: payload.territory.clone(),
        target_amount: payload.target_amount,
        notes: payload.notes.clone(),
    }
}

/// Targets management screen: editor form with cascading geography
/// selects above the period's target table.
#[component]
#[allow(non_snake_case)]
pub fn TargetsPage() -> impl IntoView {
    let store = DateContextStore::new();

    let (targets, set_targets) = signal::<Vec<TargetRecord>>(Vec::new());
    let (distributors, set_distributors) = signal::<Vec<Distributor>>(Vec::new());
    let (edit_id, set_edit_id) = signal::<Option<i64>>(None);
    let (invalid, set_invalid) = signal::<Vec<&'static str>>(Vec::new());
    let draft: RwSignal<TargetDraft> = RwSignal::new(TargetDraft::default());

    // Single notification slot. A superseding notice bumps the generation
    // so a stale auto-hide timer cannot clear it.
    let notice: RwSignal<Option<(String, ToastKind)>> = RwSignal::new(None);
    let notice_generation: RwSignal<u64> = RwSignal::new(0);

    let show_notice = move |message: String, kind: ToastKind, auto_hide: Option<u32>| {
        let generation = notice_generation.get_untracked() + 1;
        notice_generation.set(generation);
        notice.set(Some((message, kind)));
        if let Some(ms) = auto_hide {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(ms).await;
                if notice_generation.get_untracked() == generation {
                    notice.set(None);
                }
            });
        }
    };
    let clear_notice = move || {
        notice_generation.update(|g| *g += 1);
        notice.set(None);
    };

    let load = move || {
        let context = store.snapshot();
        if !context.is_valid() {
            set_targets.set(Vec::new());
            return;
        }
        let query = TargetsQuery::from_context(&context);
        show_notice("Loading targets...".to_string(), ToastKind::Info, None);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_targets(&query).await {
                Ok(records) => {
                    set_targets.set(records);
                    clear_notice();
                }
                Err(e) => {
                    log::error!("load targets: {e}");
                    show_notice(format!("Failed to load targets: {}", e), ToastKind::Error, None);
                    if cfg!(debug_assertions) {
                        set_targets.set(sample_targets());
                        show_notice(
                            "Loaded sample data (development mode)".to_string(),
                            ToastKind::Info,
                            Some(NOTICE_TIMEOUT_MS),
                        );
                    }
                }
            }
        });
    };

    store.subscribe(move |_| load());

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_distributors().await {
            Ok(list) => set_distributors.set(list),
            Err(e) => log::error!("load distributors: {e}"),
        }
    });
    load();

    let reset_form = move || {
        draft.set(TargetDraft::default());
        set_invalid.set(Vec::new());
    };
    let exit_edit_mode = move || {
        set_edit_id.set(None);
        reset_form();
    };

    let handle_submit = move |_| {
        let context = store.snapshot();
        if !context.is_valid() {
            show_notice(
                "Please select a valid period before adding targets.".to_string(),
                ToastKind::Warning,
                None,
            );
            return;
        }

        let current = draft.get_untracked();
        let fields = current.invalid_fields();
        set_invalid.set(fields.clone());
        if !fields.is_empty() {
            return;
        }
        let payload = match current.to_payload(&context) {
            Ok(payload) => payload,
            Err(message) => {
                show_notice(message, ToastKind::Error, None);
                return;
            }
        };

        match edit_id.get_untracked() {
            Some(id) => {
                show_notice("Updating target...".to_string(), ToastKind::Info, None);
                wasm_bindgen_futures::spawn_local(async move {
                    match update_target(id, &payload).await {
                        Ok(updated) => {
                            set_targets.update(|list| {
                                if let Some(slot) = list.iter_mut().find(|t| t.id == id) {
                                    *slot = updated;
                                }
                            });
                            exit_edit_mode();
                            show_notice(
                                "Target updated successfully".to_string(),
                                ToastKind::Success,
                                Some(NOTICE_TIMEOUT_MS),
                            );
                        }
                        Err(e) => {
                            log::error!("update target {id}: {e}");
                            show_notice(
                                format!("Failed to update target: {}", e),
                                ToastKind::Error,
                                None,
                            );
                            if cfg!(debug_assertions) {
                                set_targets.update(|list| {
                                    if let Some(slot) = list.iter_mut().find(|t| t.id == id) {
                                        *slot = record_from_payload(id, &payload);
                                    }
                                });
                                exit_edit_mode();
                                show_notice(
                                    "Target updated successfully (development mode)".to_string(),
                                    ToastKind::Success,
                                    Some(NOTICE_TIMEOUT_MS),
                                );
                            }
                        }
                    }
                });
            }
            None => {
                show_notice("Creating target...".to_string(), ToastKind::Info, None);
                wasm_bindgen_futures::spawn_local(async move {
                    match create_target(&payload).await {
                        Ok(created) => {
                            set_targets.update(|list| list.push(created));
                            reset_form();
                            show_notice(
                                "Target created successfully".to_string(),
                                ToastKind::Success,
                                Some(NOTICE_TIMEOUT_MS),
                            );
                        }
                        Err(e) => {
                            log::error!("create target: {e}");
                            show_notice(
                                format!("Failed to create target: {}", e),
                                ToastKind::Error,
                                None,
                            );
                            if cfg!(debug_assertions) {
                                let next_id = targets
                                    .get_untracked()
                                    .iter()
                                    .map(|t| t.id)
                                    .max()
                                    .unwrap_or(0)
                                    + 1;
                                set_targets
                                    .update(|list| list.push(record_from_payload(next_id, &payload)));
                                reset_form();
                                show_notice(
                                    "Target created successfully (development mode)".to_string(),
                                    ToastKind::Success,
                                    Some(NOTICE_TIMEOUT_MS),
                                );
                            }
                        }
                    }
                });
            }
        }
    };

    let handle_edit = move |record: TargetRecord| {
        set_edit_id.set(Some(record.id));
        draft.set(TargetDraft::from_record(&record));
        set_invalid.set(Vec::new());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(form) = document.get_element_by_id("targets-form") {
                form.scroll_into_view();
            }
        }
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Are you sure you want to delete this target?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        show_notice("Deleting target...".to_string(), ToastKind::Info, None);
        wasm_bindgen_futures::spawn_local(async move {
            match delete_target(id).await {
                Ok(()) => {
                    set_targets.update(|list| list.retain(|t| t.id != id));
                    show_notice(
                        "Target deleted successfully".to_string(),
                        ToastKind::Success,
                        Some(NOTICE_TIMEOUT_MS),
                    );
                }
                Err(e) => {
                    log::error!("delete target {id}: {e}");
                    show_notice(format!("Failed to delete target: {}", e), ToastKind::Error, None);
                    if cfg!(debug_assertions) {
                        set_targets.update(|list| list.retain(|t| t.id != id));
                        show_notice(
                            "Target deleted successfully (development mode)".to_string(),
                            ToastKind::Success,
                            Some(NOTICE_TIMEOUT_MS),
                        );
                    }
                }
            }
        });
    };

    let is_invalid = move |field: &'static str| invalid.get().contains(&field);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Sales Targets"}</h1>
                </div>
            </div>

            <DateContextBar store=store />

            {move || notice.get().map(|(message, kind)| view! {
                <div class=format!("notice {}", notice_class(kind)) id="notification">
                    <span class="notice__text">{message}</span>
                    <button class="notice__close" on:click=move |_| clear_notice()>
                        {icon("close")}
                    </button>
                </div>
            })}

            <div class="card" id="targets-form">
                <h2 class="card__title">
                    {move || if edit_id.get().is_some() { "Edit Target" } else { "New Target" }}
                </h2>
                <div class="form">
                    <Select
                        label="Distributor"
                        id="target-distributor"
                        value=Signal::derive(move || draft.get().distributor)
                        options=Signal::derive(move || {
                            distributors
                                .get()
                                .into_iter()
                                .map(|d| (d.name.clone(), d.name))
                                .collect::<Vec<_>>()
                        })
                        placeholder="Select Distributor"
                        invalid=Signal::derive(move || is_invalid("distributor"))
                        on_change=Callback::new(move |value| {
                            draft.update(|d| d.distributor = value);
                        })
                    />
                    <Select
                        label="Region"
                        id="target-region"
                        value=Signal::derive(move || draft.get().region)
                        options=Signal::derive(move || {
                            REGIONS
                                .iter()
                                .map(|r| (r.to_string(), r.to_string()))
                                .collect::<Vec<_>>()
                        })
                        placeholder="Select Region"
                        invalid=Signal::derive(move || is_invalid("region"))
                        on_change=Callback::new(move |value| {
                            // Region drives the state and territory lists.
                            draft.update(|d| {
                                d.region = value;
                                d.state.clear();
                                d.territory.clear();
                            });
                        })
                    />
                    <Select
                        label="State"
                        id="target-state"
                        value=Signal::derive(move || draft.get().state)
                        options=Signal::derive(move || {
                            states_for_region(&draft.get().region)
                                .into_iter()
                                .map(|s| (s.clone(), s))
                                .collect::<Vec<_>>()
                        })
                        placeholder="Select State"
                        on_change=Callback::new(move |value| {
                            draft.update(|d| {
                                d.state = value;
                                d.territory.clear();
                            });
                        })
                    />
                    <Select
                        label="Territory"
                        id="target-territory"
                        value=Signal::derive(move || draft.get().territory)
                        options=Signal::derive(move || {
                            territories_for_state(&draft.get().state)
                                .into_iter()
                                .map(|t| (t.clone(), t))
                                .collect::<Vec<_>>()
                        })
                        placeholder="Select Territory"
                        on_change=Callback::new(move |value| {
                            draft.update(|d| d.territory = value);
                        })
                    />
                    <Input
                        label="Target Amount"
                        id="target-amount"
                        value=Signal::derive(move || draft.get().target_amount)
                        placeholder="e.g. 500000"
                        invalid=Signal::derive(move || is_invalid("target_amount"))
                        on_input=Callback::new(move |value: String| {
                            draft.update(|d| d.target_amount = sanitize_numeric(&value));
                        })
                    />
                    <Textarea
                        label="Notes"
                        id="target-notes"
                        value=Signal::derive(move || draft.get().notes)
                        placeholder="Optional notes"
                        on_input=Callback::new(move |value| {
                            draft.update(|d| d.notes = value);
                        })
                    />

                    <div class="form__actions">
                        <Button on_click=Callback::new(handle_submit)>
                            {icon("save")}
                            {move || if edit_id.get().is_some() { "Update Target" } else { "Add Target" }}
                        </Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| exit_edit_mode())
                        >
                            {"Reset"}
                        </Button>
                    </div>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Distributor"}</th>
                            <th class="table__header-cell">{"Region"}</th>
                            <th class="table__header-cell">{"State"}</th>
                            <th class="table__header-cell">{"Territory"}</th>
                            <th class="table__header-cell">{"Target Amount"}</th>
                            <th class="table__header-cell table__header-cell--actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let records = targets.get();
                            if records.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="table__cell table__cell--empty">
                                            {"No targets found for the selected period. Add a new target using the form above."}
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            records.into_iter().map(|record| {
                                let id = record.id;
                                let record_for_edit = record.clone();
                                let dash = |s: String| if s.is_empty() { "-".to_string() } else { s };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{record.distributor.clone()}</td>
                                        <td class="table__cell">{dash(record.region.clone())}</td>
                                        <td class="table__cell">{dash(record.state.clone())}</td>
                                        <td class="table__cell">{dash(record.territory.clone())}</td>
                                        <td class="table__cell">{format_inr(record.target_amount)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--secondary button--sm"
                                                on:click=move |_| handle_edit(record_for_edit.clone())
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--danger button--sm"
                                                on:click=move |_| handle_delete(id)
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
