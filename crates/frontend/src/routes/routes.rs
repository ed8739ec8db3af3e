use leptos::prelude::*;

use super::Page;
use crate::domain::low_stock::ui::list::LowStockPage;
use crate::domain::products::ui::list::ProductsPage;
use crate::domain::sales::ui::dashboard::SalesPage;
use crate::layout::navbar::Navbar;
use crate::shared::api_client::use_api;
use crate::system::pages::auth::AuthPage;

#[component]
fn MainLayout() -> impl IntoView {
    let page = use_context::<RwSignal<Page>>().expect("active page signal not provided");

    view! {
        <Navbar />
        {move || match page.get() {
            Page::Products => view! { <ProductsPage /> }.into_any(),
            Page::Sales => view! { <SalesPage /> }.into_any(),
            Page::LowStock => view! { <LowStockPage /> }.into_any(),
        }}
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let client = use_api();

    view! {
        <Show
            when=move || client.is_authenticated()
            fallback=|| view! { <AuthPage /> }
        >
            <MainLayout />
        </Show>
    }
}
