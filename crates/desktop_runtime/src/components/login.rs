use std::time::Duration;

use leptos::*;

use crate::reducer::ShellAction;
use crate::runtime_context::use_shell_runtime;

/// Cosmetic sign-in delay so the spinner is actually visible.
const SIGN_IN_DELAY: Duration = Duration::from_millis(800);

#[component]
/// Lock screen. The delay is purely visual; the reducer verifies the password
/// when the timer lands.
pub(super) fn LoginScreen() -> impl IntoView {
    let runtime = use_shell_runtime();
    let password = create_rw_signal(String::new());
    let signing_in = create_rw_signal(false);

    let username = Signal::derive(move || runtime.state.get().identity.username.clone());
    let login_error = Signal::derive(move || runtime.state.get().login_error);

    // A failed attempt lands back here; drop the spinner and the stale input.
    create_effect(move |_| {
        if login_error.get() {
            signing_in.set(false);
            password.set(String::new());
        }
    });

    let submit = move || {
        if signing_in.get_untracked() {
            return;
        }
        signing_in.set(true);
        let attempt = password.get_untracked();
        let dispatch = runtime.dispatch;
        set_timeout(
            move || dispatch.call(ShellAction::SubmitLogin { password: attempt }),
            SIGN_IN_DELAY,
        );
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };
    let on_input = move |ev| {
        password.set(event_target_value(&ev));
        runtime.dispatch_action(ShellAction::LoginInputChanged);
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <div class="login-avatar" aria-hidden="true"></div>
                <h1>{move || username.get()}</h1>
                <input
                    type="password"
                    placeholder="Password"
                    disabled=move || signing_in.get()
                    prop:value=move || password.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <Show
                    when=move || signing_in.get()
                    fallback=move || {
                        view! {
                            <button class="primary" on:click=move |_| submit()>
                                "Sign in"
                            </button>
                        }
                    }
                >
                    <div class="login-spinner" role="status" aria-label="Signing in"></div>
                </Show>
                <Show when=move || login_error.get() fallback=|| ()>
                    <p class="login-error" role="alert">
                        "The password is incorrect. Try again."
                    </p>
                </Show>
            </div>
        </div>
    }
}
