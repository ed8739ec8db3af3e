use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::routes::Page;
use crate::shared::api_client::ApiClient;

#[component]
pub fn App() -> impl IntoView {
    // The session-owning API client lives for the whole app: restored from
    // storage here, set at login, cleared at logout.
    provide_context(ApiClient::new());

    // Active page for the navbar; views declare their data dependencies
    // against it instead of hooking navigation events.
    provide_context(RwSignal::new(Page::Products));

    view! {
        <AppRoutes />
    }
}
