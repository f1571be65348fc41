use leptos::*;

use crate::reducer::ShellAction;
use crate::runtime_context::use_shell_runtime;

/// Wizard steps in order. Region and network are cosmetic; only the account
/// step feeds the reducer.
const STEP_COUNT: u8 = 3;

#[component]
/// First-run wizard: region, network, account. Finishing signs the new
/// account straight in.
pub(super) fn SetupScreen() -> impl IntoView {
    let runtime = use_shell_runtime();
    let step = create_rw_signal(0u8);
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let account_valid = Signal::derive(move || {
        !username.get().trim().is_empty() && !password.get().is_empty()
    });
    let back = move |_| step.update(|s| *s = s.saturating_sub(1));
    let next = move |_| {
        if step.get_untracked() + 1 < STEP_COUNT {
            step.update(|s| *s += 1);
        }
    };
    let finish = move |_| {
        if !account_valid.get_untracked() {
            return;
        }
        runtime.dispatch_action(ShellAction::CompleteSetup {
            username: username.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="setup-screen">
            <div class="setup-card">
                {move || match step.get() {
                    0 => view! {
                        <div class="setup-step">
                            <h1>"Is this the right region?"</h1>
                            <ul class="setup-choices">
                                <li class="selected">"United States"</li>
                                <li>"United Kingdom"</li>
                                <li>"Germany"</li>
                                <li>"Japan"</li>
                            </ul>
                        </div>
                    }
                    .into_view(),
                    1 => view! {
                        <div class="setup-step">
                            <h1>"Let's connect you to a network"</h1>
                            <ul class="setup-choices">
                                <li class="selected">"Home Wi-Fi (connected)"</li>
                                <li>"Neighbor's Wi-Fi"</li>
                                <li>"Coffee Shop Guest"</li>
                            </ul>
                        </div>
                    }
                    .into_view(),
                    _ => view! {
                        <div class="setup-step">
                            <h1>"Who's going to use this PC?"</h1>
                            <input
                                type="text"
                                placeholder="Name"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                            <input
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    }
                    .into_view(),
                }}
                <div class="setup-nav">
                    <Show when=move || { step.get() > 0 } fallback=|| ()>
                        <button on:click=back>"Back"</button>
                    </Show>
                    {move || if step.get() + 1 < STEP_COUNT {
                        view! {
                            <button class="primary" on:click=next>
                                "Next"
                            </button>
                        }
                        .into_view()
                    } else {
                        view! {
                            <button
                                class="primary"
                                disabled=move || !account_valid.get()
                                on:click=finish
                            >
                                "Finish"
                            </button>
                        }
                        .into_view()
                    }}
                </div>
            </div>
        </div>
    }
}
