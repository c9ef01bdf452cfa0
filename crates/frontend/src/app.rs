use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::toast::{convert_flash_messages, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // Provide ToastService for centralized notifications
    let toasts = ToastService::new();
    provide_context(toasts);

    // Server-rendered flash messages (if the page carried any) become
    // toasts once, at startup.
    convert_flash_messages(&toasts);

    view! {
        <AppRoutes />
    }
}
