use contracts::domain::products::{Product, ProductInput};
use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::domain::products::api;
use crate::shared::api_client::use_api;
use crate::shared::components::ui::Select;

/// String-typed form state backing both the add panel and inline row
/// editing; parsed into a [`ProductInput`] on submit.
#[derive(Clone, Debug, Default)]
struct ProductForm {
    name: String,
    category: String,
    size: String,
    price: String,
    stock_qty: String,
    min_stock: String,
}

impl ProductForm {
    fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            size: product.size.clone(),
            price: product.price.to_string(),
            stock_qty: product.stock_qty.to_string(),
            min_stock: product.min_stock.to_string(),
        }
    }

    /// Client-side validation before anything goes on the wire. A blank
    /// `min_stock` is omitted so the service picks its category default.
    fn to_input(&self) -> Result<ProductInput, String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".to_string());
        }
        let price = self
            .price
            .trim()
            .parse::<Decimal>()
            .map_err(|_| "Invalid price".to_string())?;
        let stock_qty = self
            .stock_qty
            .trim()
            .parse::<i64>()
            .map_err(|_| "Invalid stock quantity".to_string())?;
        let min_stock = match self.min_stock.trim() {
            "" => None,
            value => Some(
                value
                    .parse::<i64>()
                    .map_err(|_| "Invalid minimum stock".to_string())?,
            ),
        };
        Ok(ProductInput {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            size: self.size.trim().to_string(),
            price,
            stock_qty,
            min_stock,
        })
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductsPage() -> impl IntoView {
    let client = use_api();
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (message, set_message) = signal::<Option<String>>(None);
    let (filter_product, set_filter_product) = signal(String::new());
    let (editing, set_editing) = signal::<Option<i64>>(None);
    let new_form = RwSignal::new(ProductForm::default());
    let edit_form = RwSignal::new(ProductForm::default());

    let load_products = {
        let client = client.clone();
        move || {
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_products(&client).await {
                    Ok(list) => {
                        set_products.set(list);
                        set_error.set(None);
                        set_loading.set(false);
                    }
                    Err(e) => {
                        log::error!("Failed to fetch products: {e}");
                        set_error.set(Some("Failed to fetch products".to_string()));
                        set_loading.set(false);
                    }
                }
            });
        }
    };
    load_products();

    let on_add = {
        let client = client.clone();
        let load_products = load_products.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            match new_form.with_untracked(|form| form.to_input()) {
                Ok(input) => {
                    let client = client.clone();
                    let load_products = load_products.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::create_product(&client, &input).await {
                            Ok(_) => {
                                new_form.set(ProductForm::default());
                                set_message.set(None);
                                load_products();
                            }
                            Err(e) => set_message.set(Some(e.to_string())),
                        }
                    });
                }
                Err(e) => set_message.set(Some(e)),
            }
        }
    };

    let start_edit = Callback::new(move |product: Product| {
        edit_form.set(ProductForm::from_product(&product));
        set_editing.set(Some(product.id));
    });

    let save_edit = Callback::new({
        let client = client.clone();
        let load_products = load_products.clone();
        move |id: i64| {
            match edit_form.with_untracked(|form| form.to_input()) {
                Ok(input) => {
                    let client = client.clone();
                    let load_products = load_products.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::update_product(&client, id, &input).await {
                            Ok(_) => {
                                set_editing.set(None);
                                set_message.set(None);
                                load_products();
                            }
                            Err(e) => set_message.set(Some(e.to_string())),
                        }
                    });
                }
                Err(e) => set_message.set(Some(e)),
            }
        }
    });

    let delete = Callback::new({
        let client = client.clone();
        let load_products = load_products.clone();
        move |id: i64| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to delete this product?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let client = client.clone();
            let load_products = load_products.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_product(&client, id).await {
                    Ok(_) => load_products(),
                    Err(e) => set_message.set(Some(e.to_string())),
                }
            });
        }
    });

    let filter_options = Signal::derive(move || {
        products
            .get()
            .iter()
            .map(|p| {
                (
                    p.id.to_string(),
                    format!("{} ({}) - Stock: {}", p.name, p.category, p.stock_qty),
                )
            })
            .collect::<Vec<_>>()
    });

    // A selected product narrows the table to that one row.
    let displayed_products = move || {
        let all = products.get();
        match filter_product.get().parse::<i64>() {
            Ok(id) => all.into_iter().filter(|p| p.id == id).collect::<Vec<_>>(),
            Err(_) => all,
        }
    };

    let edit_input = move |field: fn(&ProductForm) -> String, update: fn(&mut ProductForm, String)| {
        view! {
            <input
                value=move || edit_form.with(|form| field(form))
                on:input=move |ev| edit_form.update(|form| update(form, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="page-container">
            <h2>"Products Inventory"</h2>

            <div class="dashboard-card">
                <h3>"Add New Product"</h3>
                <form on:submit=on_add class="grid-form">
                    <div class="input-group">
                        <label>"Product Name"</label>
                        <input
                            placeholder="e.g. Marble Tile"
                            value=move || new_form.with(|form| form.name.clone())
                            on:input=move |ev| {
                                new_form.update(|form| form.name = event_target_value(&ev))
                            }
                            required
                        />
                    </div>
                    <div class="input-group">
                        <label>"Category"</label>
                        <input
                            placeholder="e.g. Ceramic"
                            value=move || new_form.with(|form| form.category.clone())
                            on:input=move |ev| {
                                new_form.update(|form| form.category = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="input-group">
                        <label>"Size"</label>
                        <input
                            placeholder="e.g. 60x60 cm"
                            value=move || new_form.with(|form| form.size.clone())
                            on:input=move |ev| {
                                new_form.update(|form| form.size = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="input-group">
                        <label>"Price"</label>
                        <input
                            type="number"
                            step="0.01"
                            placeholder="0.00"
                            value=move || new_form.with(|form| form.price.clone())
                            on:input=move |ev| {
                                new_form.update(|form| form.price = event_target_value(&ev))
                            }
                            required
                        />
                    </div>
                    <div class="input-group">
                        <label>"Stock Quantity"</label>
                        <input
                            type="number"
                            placeholder="0"
                            value=move || new_form.with(|form| form.stock_qty.clone())
                            on:input=move |ev| {
                                new_form.update(|form| form.stock_qty = event_target_value(&ev))
                            }
                            required
                        />
                    </div>
                    <div class="input-group">
                        <label>"Min Stock (Optional)"</label>
                        <input
                            type="number"
                            placeholder="Auto"
                            value=move || new_form.with(|form| form.min_stock.clone())
                            on:input=move |ev| {
                                new_form.update(|form| form.min_stock = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form-actions">
                        <button type="submit">"Add Product"</button>
                    </div>
                </form>
            </div>

            {move || message.get().map(|m| view! { <div class="error">{m}</div> })}

            <Select
                value=filter_product
                on_change=Callback::new(move |val: String| set_filter_product.set(val))
                options=filter_options
                placeholder="Search or filter products..."
            />

            {move || {
                if loading.get() {
                    return view! { <p>"Loading products..."</p> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! { <p class="error">{e}</p> }.into_any();
                }
                let displayed = displayed_products();
                if displayed.is_empty() {
                    return view! { <p>"No products available."</p> }.into_any();
                }
                view! {
                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Category"</th>
                                    <th>"Size"</th>
                                    <th>"Price"</th>
                                    <th>"Stock Qty"</th>
                                    <th>"Min Stock"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {displayed
                                    .into_iter()
                                    .map(|product| {
                                        let is_editing = editing.get() == Some(product.id);
                                        let id = product.id;
                                        if is_editing {
                                            view! {
                                                <tr>
                                                    <td>{id}</td>
                                                    <td>{edit_input(|f| f.name.clone(), |f, v| f.name = v)}</td>
                                                    <td>{edit_input(|f| f.category.clone(), |f, v| f.category = v)}</td>
                                                    <td>{edit_input(|f| f.size.clone(), |f, v| f.size = v)}</td>
                                                    <td>{edit_input(|f| f.price.clone(), |f, v| f.price = v)}</td>
                                                    <td>{edit_input(|f| f.stock_qty.clone(), |f, v| f.stock_qty = v)}</td>
                                                    <td>{edit_input(|f| f.min_stock.clone(), |f, v| f.min_stock = v)}</td>
                                                    <td>
                                                        <div class="table-actions">
                                                            <button on:click=move |_| save_edit.run(id)>"Save"</button>
                                                            <button
                                                                class="secondary"
                                                                on:click=move |_| set_editing.set(None)
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        } else {
                                            let row = product.clone();
                                            view! {
                                                <tr>
                                                    <td>{id}</td>
                                                    <td>{product.name.clone()}</td>
                                                    <td>{product.category.clone()}</td>
                                                    <td>{product.size.clone()}</td>
                                                    <td>{format!("${}", product.price)}</td>
                                                    <td>{product.stock_qty}</td>
                                                    <td>{product.min_stock}</td>
                                                    <td>
                                                        <div class="table-actions">
                                                            <button
                                                                class="secondary"
                                                                on:click=move |_| start_edit.run(row.clone())
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="danger"
                                                                on:click=move |_| delete.run(id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
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

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Marble Tile".to_string(),
            category: "Tiles".to_string(),
            size: "60x60 cm".to_string(),
            price: "12.50".to_string(),
            stock_qty: "80".to_string(),
            min_stock: String::new(),
        }
    }

    #[test]
    fn blank_min_stock_is_omitted() {
        let input = filled_form().to_input().unwrap();
        assert_eq!(input.min_stock, None);
        assert_eq!(input.price, "12.50".parse().unwrap());
        assert_eq!(input.stock_qty, 80);
    }

    #[test]
    fn provided_min_stock_is_sent() {
        let mut form = filled_form();
        form.min_stock = "25".to_string();
        assert_eq!(form.to_input().unwrap().min_stock, Some(25));
    }

    #[test]
    fn invalid_fields_are_rejected_before_submission() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert!(form.to_input().is_err());

        let mut form = filled_form();
        form.price = "abc".to_string();
        assert_eq!(form.to_input().unwrap_err(), "Invalid price");

        let mut form = filled_form();
        form.stock_qty = String::new();
        assert_eq!(form.to_input().unwrap_err(), "Invalid stock quantity");
    }
}
