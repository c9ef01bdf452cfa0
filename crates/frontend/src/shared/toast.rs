//! Toast notifications with optional undo.
//!
//! Delete flows capture the removed record and hand it to
//! [`ToastService::show_with_undo`]; the undo action posts the payload to
//! the restore endpoint and reloads on success. Toasts auto-dismiss after
//! a few seconds; closing one early is always allowed.

use gloo_net::http::Request;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

use contracts::shared::api::MutationResponse;

use crate::shared::api_utils::api_url;
use crate::shared::icons::icon;

/// Auto-dismiss delay for toasts, milliseconds.
const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    fn as_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
            ToastKind::Warning => "toast--warning",
        }
    }
}

/// Everything needed to restore a deleted record.
#[derive(Debug, Clone)]
pub struct UndoPayload {
    pub item_type: String,
    pub item_id: i64,
    pub item_data: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub undo: Option<UndoPayload>,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.push(message.into(), kind, None);
    }

    /// Show a toast carrying an "Undo" action for a just-deleted record.
    pub fn show_with_undo(&self, message: impl Into<String>, kind: ToastKind, undo: UndoPayload) {
        self.push(message.into(), kind, Some(undo));
    }

    /// Removing an already-dismissed toast is a no-op, so a stale
    /// auto-dismiss timer cannot hurt.
    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, message: String, kind: ToastKind, undo: Option<UndoPayload>) {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message,
                kind,
                undo,
            })
        });

        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            service.dismiss(id);
        });
    }

    /// Restore a deleted record, then reload so every table reflects it.
    fn undo(&self, toast_id: Uuid, undo: UndoPayload) {
        let service = *self;
        service.dismiss(toast_id);
        wasm_bindgen_futures::spawn_local(async move {
            match restore_item(&undo).await {
                Ok(response) if response.success => {
                    service.show(
                        format!("{} restored successfully!", undo.item_type),
                        ToastKind::Success,
                    );
                    if let Some(window) = web_sys::window() {
                        _ = window.location().reload();
                    }
                }
                Ok(response) => {
                    let message = response
                        .message
                        .unwrap_or_else(|| "restore rejected".to_string());
                    service.show(
                        format!("Error restoring {}: {}", undo.item_type, message),
                        ToastKind::Error,
                    );
                }
                Err(e) => {
                    log::error!("restore failed: {e}");
                    service.show(
                        format!("Error restoring {}: {}", undo.item_type, e),
                        ToastKind::Error,
                    );
                }
            }
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

async fn restore_item(undo: &UndoPayload) -> Result<MutationResponse, String> {
    let url = api_url(&format!("/api/restore/{}/{}", undo.item_type, undo.item_id));
    let response = Request::post(&url)
        .json(&undo.item_data)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<MutationResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Convert server-rendered flash messages (`.alert` elements) into
/// toasts and drop them from the DOM. Runs once at startup.
pub fn convert_flash_messages(toasts: &ToastService) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".alert") else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let message = element
            .text_content()
            .unwrap_or_default()
            .trim()
            .to_string();
        let classes = element.class_list();
        let kind = if classes.contains("alert-success") {
            ToastKind::Success
        } else if classes.contains("alert-danger") {
            ToastKind::Error
        } else {
            ToastKind::Info
        };
        if !message.is_empty() {
            toasts.show(message, kind);
        }
        element.remove();
    }
}

/// The toast stack. Lives once in the shell, bottom-right.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        <div class="toast-container">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let toast_id = toast.id;
                    let undo = toast.undo.clone();
                    view! {
                        <div class=format!("toast {} toast--show", toast.kind.as_class())>
                            <div class="toast__content">
                                <span class="toast__message">{toast.message.clone()}</span>
                            </div>
                            {undo.map(|payload| view! {
                                <a
                                    class="toast__action"
                                    on:click=move |_| service.undo(toast_id, payload.clone())
                                >
                                    {"Undo"}
                                </a>
                            })}
                            <button
                                class="toast__close"
                                on:click=move |_| service.dismiss(toast_id)
                            >
                                {icon("close")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
