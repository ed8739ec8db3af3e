use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::use_api;
use crate::system::auth::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
    Reset,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let client = use_api();
    let (mode, set_mode) = signal(Mode::Login);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (error_message, set_error_message) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let current_mode = mode.get();
            let username_val = username.get();
            let password_val = password.get();
            let old_val = old_password.get();
            let new_val = new_password.get();

            set_is_loading.set(true);
            set_error_message.set(None);
            set_notice.set(None);

            let client = client.clone();
            spawn_local(async move {
                match current_mode {
                    Mode::Login => {
                        match api::login(&client, username_val.clone(), password_val).await {
                            Ok(response) => {
                                // Installing the session flips AppRoutes to
                                // the main layout.
                                client.start_session(response.token, username_val);
                            }
                            Err(e) => set_error_message.set(Some(e.to_string())),
                        }
                    }
                    Mode::Register => match api::register(&client, username_val, password_val).await
                    {
                        Ok(response) => {
                            set_notice.set(Some(format!("{} Please login.", response.message)));
                            set_mode.set(Mode::Login);
                        }
                        Err(e) => set_error_message.set(Some(e.to_string())),
                    },
                    Mode::Reset => match api::change_password(&client, old_val, new_val).await {
                        Ok(response) => {
                            set_notice.set(Some(response.message));
                            set_mode.set(Mode::Login);
                        }
                        Err(e) => set_error_message.set(Some(e.to_string())),
                    },
                }
                set_is_loading.set(false);
            });
        }
    };

    let title = move || match mode.get() {
        Mode::Login => "Login",
        Mode::Register => "Register",
        Mode::Reset => "Reset Password",
    };

    let submit_label = move || match mode.get() {
        Mode::Login => "Login",
        Mode::Register => "Register",
        Mode::Reset => "Change Password",
    };

    view! {
        <div class="auth-page">
            <div class="auth-box">
                <h2>{title}</h2>

                <form on:submit=on_submit>
                    <Show when=move || mode.get() != Mode::Reset>
                        <input
                            type="text"
                            placeholder="Username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </Show>

                    <Show when=move || mode.get() == Mode::Reset>
                        <input
                            type="password"
                            placeholder="Old Password"
                            value=move || old_password.get()
                            on:input=move |ev| set_old_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <input
                            type="password"
                            placeholder="New Password"
                            value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </Show>

                    <button type="submit" disabled=move || is_loading.get()>
                        {submit_label}
                    </button>
                </form>

                {move || error_message.get().map(|e| view! { <p class="auth-error">{e}</p> })}
                {move || notice.get().map(|n| view! { <p class="auth-notice">{n}</p> })}

                <div class="auth-links">
                    <Show when=move || mode.get() == Mode::Login>
                        <p>
                            "New user? "
                            <button on:click=move |_| set_mode.set(Mode::Register)>"Register"</button>
                        </p>
                        <p>
                            "Forgot password? "
                            <button on:click=move |_| set_mode.set(Mode::Reset)>"Reset"</button>
                        </p>
                    </Show>
                    <Show when=move || mode.get() != Mode::Login>
                        <p>
                            "Already have an account? "
                            <button on:click=move |_| set_mode.set(Mode::Login)>"Login"</button>
                        </p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
