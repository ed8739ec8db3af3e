use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::low_stock::api as low_stock_api;
use crate::routes::Page;
use crate::shared::api_client::use_api;

#[component]
pub fn Navbar() -> impl IntoView {
    let client = use_api();
    let page = use_context::<RwSignal<Page>>().expect("active page signal not provided");
    let (low_stock_count, set_low_stock_count) = signal(0i64);
    let (menu_open, set_menu_open) = signal(false);

    // The badge declares its data dependency on the active page: moving
    // between pages is the moment stock levels may have changed under us.
    Effect::new({
        let client = client.clone();
        move |_| {
            page.track();
            let client = client.clone();
            spawn_local(async move {
                match low_stock_api::fetch_count(&client).await {
                    Ok(count) => set_low_stock_count.set(count.count),
                    Err(e) => {
                        log::error!("Failed to load low-stock count: {e}");
                        set_low_stock_count.set(0);
                    }
                }
            });
        }
    });

    let username = {
        let client = client.clone();
        move || client.username()
    };

    let logout = {
        let client = client.clone();
        move |_| client.end_session()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="navbar-logo" on:click=move |_| page.set(Page::Products)>
                    "AP Tiles"
                </div>
                <div class=move || {
                    if menu_open.get() { "navbar-links open" } else { "navbar-links" }
                }>
                    {move || username().map(|u| view! { <span class="navbar-username">{u}</span> })}
                    <button on:click=move |_| page.set(Page::Products)>"Products"</button>
                    <button on:click=move |_| page.set(Page::Sales)>"Sales"</button>
                    <button on:click=move |_| page.set(Page::LowStock)>
                        "Low Stock "
                        <Show when=move || { low_stock_count.get() > 0 }>
                            <span class="badge">{move || low_stock_count.get()}</span>
                        </Show>
                    </button>
                    <button on:click=logout>"Logout"</button>
                </div>
                <div class="navbar-toggle" on:click=move |_| set_menu_open.update(|v| *v = !*v)>
                    "☰"
                </div>
            </div>
        </nav>
    }
}
