use leptos::prelude::*;

use contracts::domain::distributor::Distributor;

use crate::domain::distributors::api::{
    delete_distributor, fetch_distributor_raw, fetch_distributors,
};
use crate::shared::icons::icon;
use crate::shared::toast::{ToastKind, ToastService, UndoPayload};

#[derive(Clone, Debug)]
pub struct DistributorRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub area: String,
}

impl From<Distributor> for DistributorRow {
    fn from(d: Distributor) -> Self {
        Self {
            id: d.id,
            name: d.name,
            email: d.email.unwrap_or_else(|| "-".to_string()),
            whatsapp: d.whatsapp.unwrap_or_else(|| "-".to_string()),
            area: d.area.unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DistributorList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<DistributorRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_distributors().await {
                Ok(list) => {
                    let rows: Vec<DistributorRow> = list.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |id: i64, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete distributor '{}'?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            // Capture the record first so the delete can be undone.
            let item_data = fetch_distributor_raw(id).await.unwrap_or_default();
            match delete_distributor(id).await {
                Ok(()) => {
                    toasts.show_with_undo(
                        format!("Distributor '{}' deleted.", name),
                        ToastKind::Success,
                        UndoPayload {
                            item_type: "distributor".to_string(),
                            item_id: id,
                            item_data,
                        },
                    );
                    fetch();
                }
                Err(e) => {
                    log::error!("delete distributor {id}: {e}");
                    toasts.show(format!("Error deleting distributor: {}", e), ToastKind::Error);
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Distributors"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Email"}</th>
                            <th class="table__header-cell">{"WhatsApp"}</th>
                            <th class="table__header-cell">{"Area"}</th>
                            <th class="table__header-cell table__header-cell--actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = items.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="5" class="table__cell table__cell--empty">
                                            {"No distributors found."}
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let id = row.id;
                                let name_for_delete = row.name.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.email}</td>
                                        <td class="table__cell">{row.whatsapp}</td>
                                        <td class="table__cell">{row.area}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--danger button--sm"
                                                on:click=move |_| handle_delete(id, name_for_delete.clone())
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
