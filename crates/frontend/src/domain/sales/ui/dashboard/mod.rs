use contracts::domain::products::Product;
use contracts::domain::sales::{DateReportRow, NewSale, ReportFilter, SaleReportRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::products::api as products_api;
use crate::domain::sales::{api, report};
use crate::shared::api_client::use_api;
use crate::shared::components::charts::{BarChart, LineChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Select;
use crate::shared::date_utils;

#[component]
#[allow(non_snake_case)]
pub fn SalesPage() -> impl IntoView {
    let client = use_api();

    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    // One product selection shared by the sale and stock forms.
    let (selected_product, set_selected_product) = signal(String::new());
    let (sale_quantity, set_sale_quantity) = signal("1".to_string());
    let (stock_delta, set_stock_delta) = signal("1".to_string());
    let (message, set_message) = signal::<Option<String>>(None);

    let (filter_from, set_filter_from) = signal(String::new());
    let (filter_to, set_filter_to) = signal(String::new());
    let (filter_product, set_filter_product) = signal(String::new());
    let (filter_error, set_filter_error) = signal::<Option<String>>(None);

    let (product_rows, set_product_rows) = signal::<Vec<SaleReportRow>>(Vec::new());
    let (date_rows, set_date_rows) = signal::<Vec<DateReportRow>>(Vec::new());
    let (report_error, set_report_error) = signal::<Option<String>>(None);
    let (show_reports, set_show_reports) = signal(false);

    // Monotonic sequence so a late response from a superseded filter can
    // never overwrite a newer one.
    let request_seq = StoredValue::new(0u64);

    let current_filter = move || ReportFilter {
        from: Some(filter_from.get()).filter(|s| !s.is_empty()),
        to: Some(filter_to.get()).filter(|s| !s.is_empty()),
        product_id: filter_product.get().parse::<i64>().ok(),
    };

    let load_products = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                match products_api::fetch_products(&client).await {
                    Ok(list) => set_products.set(list),
                    Err(e) => {
                        log::error!("Failed to fetch products: {e}");
                        set_products.set(Vec::new());
                    }
                }
            });
        }
    };
    load_products();

    let fetch_report = {
        let client = client.clone();
        move || {
            let filter = current_filter();
            if let Err(e) = date_utils::validate_window(
                filter.from.as_deref().unwrap_or(""),
                filter.to.as_deref().unwrap_or(""),
            ) {
                set_filter_error.set(Some(e));
                return;
            }
            set_filter_error.set(None);

            request_seq.update_value(|v| *v += 1);
            let seq = request_seq.get_value();
            let client = client.clone();
            spawn_local(async move {
                let result = api::fetch_report(&client, &filter).await;
                // Only the latest request may touch the row sets.
                if request_seq.get_value() != seq {
                    return;
                }
                match result {
                    Ok((by_product, by_date)) => {
                        // Written back-to-back with no await between them:
                        // the view never mixes fresh and stale groupings.
                        set_product_rows.set(by_product);
                        set_date_rows.set(by_date);
                        set_report_error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to fetch sales report: {e}");
                        set_product_rows.set(Vec::new());
                        set_date_rows.set(Vec::new());
                        set_report_error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    // Declared data dependency: the report follows the filter. Covers the
    // initial load as well.
    Effect::new({
        let fetch_report = fetch_report.clone();
        move |_| fetch_report()
    });

    let summary = Signal::derive(move || report::summarize(&product_rows.get()));
    let bar_series = Signal::derive(move || report::to_bar_series(&product_rows.get()));
    let line_series = Signal::derive(move || report::to_line_series(&date_rows.get()));

    let on_record_sale = {
        let client = client.clone();
        let fetch_report = fetch_report.clone();
        let load_products = load_products.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Ok(product_id) = selected_product.get().parse::<i64>() else {
                set_message.set(Some("Select a product first".to_string()));
                return;
            };
            let quantity = sale_quantity.get().parse::<i64>().unwrap_or(0);
            if quantity < 1 {
                set_message.set(Some("Quantity must be at least 1".to_string()));
                return;
            }
            let client = client.clone();
            let fetch_report = fetch_report.clone();
            let load_products = load_products.clone();
            spawn_local(async move {
                match api::record_sale(&client, &NewSale { product_id, quantity }).await {
                    Ok(response) => {
                        set_message.set(Some(response.message));
                        set_sale_quantity.set("1".to_string());
                        set_selected_product.set(String::new());
                        load_products();
                        fetch_report();
                    }
                    Err(e) => set_message.set(Some(e.to_string())),
                }
            });
        }
    };

    let on_update_stock = {
        let client = client.clone();
        let fetch_report = fetch_report.clone();
        let load_products = load_products.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Ok(product_id) = selected_product.get().parse::<i64>() else {
                set_message.set(Some("Select a product first".to_string()));
                return;
            };
            let delta = stock_delta.get().parse::<i64>().unwrap_or(0);
            if delta < 1 {
                set_message.set(Some("Added stock must be at least 1".to_string()));
                return;
            }
            let Some(current) = products
                .get()
                .iter()
                .find(|p| p.id == product_id)
                .map(|p| p.stock_qty)
            else {
                set_message.set(Some("Select a product first".to_string()));
                return;
            };
            let client = client.clone();
            let fetch_report = fetch_report.clone();
            let load_products = load_products.clone();
            spawn_local(async move {
                match products_api::update_stock(&client, product_id, current + delta).await {
                    Ok(response) => {
                        set_message.set(Some(response.message));
                        set_stock_delta.set("1".to_string());
                        load_products();
                        fetch_report();
                    }
                    Err(e) => set_message.set(Some(e.to_string())),
                }
            });
        }
    };

    let download_csv = {
        let client = client.clone();
        move || {
            let url = report::build_export_url(client.base_url(), &current_filter());
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    log::error!("Failed to open CSV export: {e:?}");
                }
            }
        }
    };

    let sale_options = Signal::derive(move || {
        products
            .get()
            .iter()
            .map(|p| (p.id.to_string(), format!("{} (Stock: {})", p.name, p.stock_qty)))
            .collect::<Vec<_>>()
    });

    let filter_options = Signal::derive(move || {
        products
            .get()
            .iter()
            .map(|p| (p.id.to_string(), p.name.clone()))
            .collect::<Vec<_>>()
    });

    let total_revenue_text =
        Signal::derive(move || format!("${:.2}", summary.get().total_revenue));
    let total_quantity_text = Signal::derive(move || summary.get().total_quantity.to_string());
    let top_product_text =
        Signal::derive(move || summary.get().top_product_name().to_string());

    view! {
        <div class="page-container">
            <h2>"Sales & Stock Management"</h2>

            <div class="stat-grid">
                <StatCard label="Total Revenue" accent="revenue" value=total_revenue_text />
                <StatCard label="Total Quantity" accent="quantity" value=total_quantity_text />
                <StatCard label="Top Product" accent="top" value=top_product_text />
            </div>

            {move || message.get().map(|m| view! { <div class="flash-message">{m}</div> })}

            <div class="sales-layout">
                <div class="dashboard-card">
                    <h3>"Record Sale"</h3>
                    <form on:submit=on_record_sale>
                        <Select
                            label="Select Product"
                            value=selected_product
                            on_change=Callback::new(move |val: String| {
                                set_selected_product.set(val)
                            })
                            options=sale_options
                            placeholder="Search product..."
                            required=true
                        />
                        <div class="input-group">
                            <label>"Quantity"</label>
                            <input
                                type="number"
                                min="1"
                                value=move || sale_quantity.get()
                                on:input=move |ev| set_sale_quantity.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <button type="submit" class="full-width">"Add Sale"</button>
                    </form>
                </div>

                <div class="dashboard-card">
                    <h3>"Quick Stock Update"</h3>
                    <form on:submit=on_update_stock>
                        <Select
                            label="Select Product"
                            value=selected_product
                            on_change=Callback::new(move |val: String| {
                                set_selected_product.set(val)
                            })
                            options=sale_options
                            placeholder="Search product..."
                            required=true
                        />
                        <div class="input-group">
                            <label>"Add Stock"</label>
                            <input
                                type="number"
                                min="1"
                                value=move || stock_delta.get()
                                on:input=move |ev| set_stock_delta.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <button type="submit" class="full-width">"Update Stock"</button>
                    </form>
                </div>
            </div>

            <button
                class="secondary full-width"
                on:click=move |_| set_show_reports.update(|v| *v = !*v)
            >
                {move || {
                    if show_reports.get() {
                        "Hide Reports & Analytics"
                    } else {
                        "Show Reports & Analytics"
                    }
                }}
            </button>

            <Show when=move || show_reports.get()>
                <div class="dashboard-card">
                    <h3>"Sales Report"</h3>

                    <div class="grid-form">
                        <div class="input-group">
                            <label>"From Date"</label>
                            <input
                                type="date"
                                value=move || filter_from.get()
                                on:change=move |ev| set_filter_from.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <label>"To Date"</label>
                            <input
                                type="date"
                                value=move || filter_to.get()
                                on:change=move |ev| set_filter_to.set(event_target_value(&ev))
                            />
                        </div>
                        <Select
                            label="Filter by Product"
                            value=filter_product
                            on_change=Callback::new(move |val: String| {
                                set_filter_product.set(val)
                            })
                            options=filter_options
                            placeholder="All Products"
                        />
                        <div class="form-actions">
                            <button class="secondary" on:click={
                                let fetch_report = fetch_report.clone();
                                move |_| fetch_report()
                            }>
                                "Generate Report"
                            </button>
                            <button class="outline" on:click={
                                let download_csv = download_csv.clone();
                                move |_| download_csv()
                            }>
                                "Download CSV"
                            </button>
                        </div>
                    </div>

                    {move || {
                        filter_error.get().map(|e| view! { <div class="error">{e}</div> })
                    }}
                    {move || {
                        report_error.get().map(|e| view! { <div class="error">{e}</div> })
                    }}

                    {move || {
                        let rows = product_rows.get();
                        if rows.is_empty() {
                            return view! {
                                <p>"No sales found for the selected period."</p>
                            }
                                .into_any();
                        }
                        let totals = summary.get();
                        view! {
                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th>"Product Name"</th>
                                            <th>"Qty Sold"</th>
                                            <th>"Total Revenue"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        <td>{row.product_name.clone()}</td>
                                                        <td>{row.total_quantity_sold}</td>
                                                        <td>{format!("${:.2}", row.total_revenue)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                        <tr class="totals-row">
                                            <td>"TOTAL"</td>
                                            <td>{totals.total_quantity}</td>
                                            <td>{format!("${:.2}", totals.total_revenue)}</td>
                                        </tr>
                                    </tbody>
                                </table>
                            </div>
                        }
                            .into_any()
                    }}
                </div>

                <Show when=move || !product_rows.get().is_empty()>
                    <div class="dashboard-card">
                        <h3>"Sales Analytics"</h3>
                        <div class="chart-grid">
                            <div class="chart-panel">
                                <h4>"Quantity by Product"</h4>
                                <BarChart series=bar_series />
                            </div>
                            <div class="chart-panel">
                                <h4>"Revenue Over Time"</h4>
                                <LineChart series=line_series />
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
