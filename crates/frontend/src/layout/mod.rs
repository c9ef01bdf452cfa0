pub mod header;

use leptos::prelude::*;

use crate::shared::toast::ToastHost;
use header::Header;

/// Application shell: top navigation, routed content, toast stack.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |                 Content                   |
/// +------------------------------------------+
///                              [toast stack]
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />

            <main class="app-main">
                {children()}
            </main>

            <ToastHost />
        </div>
    }
}
