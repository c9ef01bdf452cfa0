use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::actuals::ui::ActualsPage;
use crate::domain::distributors::ui::list::DistributorList;
use crate::domain::targets::ui::TargetsPage;
use crate::layout::Shell;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/actuals" /> } />
                    <Route path=path!("/actuals") view=ActualsPage />
                    <Route path=path!("/targets") view=TargetsPage />
                    <Route path=path!("/distributors") view=DistributorList />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Page not found"}</h1>
                </div>
            </div>
        </div>
    }
}
