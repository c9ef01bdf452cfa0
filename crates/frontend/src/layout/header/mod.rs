use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

/// Top navigation bar. The active tab is derived from the current path,
/// mirroring the per-tab body classes of the server-rendered screens.
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let tab_class = move |prefix: &'static str| {
        let path = location.pathname.get();
        if path.starts_with(prefix) {
            "nav__link nav__link--active"
        } else {
            "nav__link"
        }
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{"Sales Management"}</span>
            </div>
            <nav class="nav">
                <A href="/actuals" attr:class=move || tab_class("/actuals")>
                    {icon("actuals")}
                    {"Actuals"}
                </A>
                <A href="/targets" attr:class=move || tab_class("/targets")>
                    {icon("targets")}
                    {"Targets"}
                </A>
                <A href="/distributors" attr:class=move || tab_class("/distributors")>
                    {icon("distributors")}
                    {"Distributors"}
                </A>
            </nav>
        </header>
    }
}
