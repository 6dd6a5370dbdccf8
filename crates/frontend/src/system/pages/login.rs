use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::notifications::use_notifications;
use crate::system::auth::{api, use_session};

const DEFAULT_MOBILE: &str = "13800000002";
const DEFAULT_CODE: &str = "246810";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (mobile, set_mobile) = signal(DEFAULT_MOBILE.to_string());
    let (code, set_code) = signal(DEFAULT_CODE.to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest::new(mobile.get(), code.get());
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    log::info!("Logged in as {}", request.mobile);
                    session.set_token(response.token);
                    notifications.success("Logged in");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    notifications.error(format!("Login failed: {}", e));
                    set_error_message.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Blog Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="mobile">"Mobile number"</label>
                        <input
                            type="tel"
                            id="mobile"
                            placeholder="Please enter your mobile number"
                            prop:value=move || mobile.get()
                            on:input=move |ev| set_mobile.set(event_target_value(&ev))
                            maxlength="11"
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="code">"Verification code"</label>
                        <input
                            type="text"
                            id="code"
                            placeholder="Please enter the verification code"
                            prop:value=move || code.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                            maxlength="6"
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
