use contracts::domain::products::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::low_stock::api;
use crate::shared::api_client::use_api;

#[component]
#[allow(non_snake_case)]
pub fn LowStockPage() -> impl IntoView {
    let client = use_api();
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);

    {
        let client = client.clone();
        spawn_local(async move {
            match api::fetch_low_stock(&client).await {
                Ok(list) => set_products.set(list),
                Err(e) => {
                    log::error!("Failed to fetch low-stock products: {e}");
                    set_products.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    }

    view! {
        <div class="page-container">
            <h2>"Low Stock Alerts"</h2>

            {move || {
                if loading.get() {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                let products = products.get();
                if products.is_empty() {
                    return view! {
                        <p>"All products are above minimum stock levels 🎉"</p>
                    }
                        .into_any();
                }
                view! {
                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Category"</th>
                                    <th>"Stock Qty"</th>
                                    <th>"Min Stock"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {products
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <tr>
                                                <td>{p.id}</td>
                                                <td>{p.name.clone()}</td>
                                                <td>{p.category.clone()}</td>
                                                <td class="stock-alert">{p.stock_qty}</td>
                                                <td>{p.min_stock}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
