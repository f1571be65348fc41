//! Host-side runtime helpers for executing reducer effects.
//!
//! The reducer stays synchronous and pure; everything that touches the
//! browser (storage writes, timers, notifications) runs here, driven by the
//! [`RuntimeEffect`] values the reducer emits.

use std::rc::Rc;
use std::time::Duration;

use leptos::{Callback, SignalGetUntracked};
use platform_host::{clear_identity, load_identity, save_identity, KeyValueStore, SessionIdentity};

use crate::persistence;
use crate::reducer::{RuntimeEffect, ShellAction};
use crate::runtime_context::ShellRuntimeContext;

/// Delay before the boot splash text fades in.
pub const BOOT_SPLASH_DELAY: Duration = Duration::from_millis(500);
/// Total boot duration before the shell leaves the boot screen.
pub const BOOT_COMPLETE_DELAY: Duration = Duration::from_millis(6000);

#[derive(Clone)]
/// Host service bundle for shell runtime side effects.
pub struct ShellHostContext {
    store: Rc<dyn KeyValueStore>,
}

impl Default for ShellHostContext {
    fn default() -> Self {
        Self {
            store: persistence::default_identity_store(),
        }
    }
}

impl ShellHostContext {
    /// Builds a host around an explicit store. Used by tests to observe
    /// persistence without a browser.
    pub fn with_store(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted identity for boot hydration.
    pub fn load_identity(&self) -> SessionIdentity {
        load_identity(self.store.as_ref())
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: ShellRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistIdentity => {
                let identity = runtime.state.get_untracked().identity;
                save_identity(self.store.as_ref(), &identity);
            }
            RuntimeEffect::ClearIdentity => {
                clear_identity(self.store.as_ref());
            }
            RuntimeEffect::ScheduleBootSequence { generation } => {
                schedule_boot_sequence(runtime.dispatch, generation);
            }
            RuntimeEffect::Notify { message } => notify(&message),
        }
    }
}

/// Arms the two boot timers. The tick actions echo the generation so ticks
/// from a superseded boot are discarded by the reducer.
fn schedule_boot_sequence(dispatch: Callback<ShellAction>, generation: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::Callable;

        leptos::set_timeout(
            move || dispatch.call(ShellAction::BootSplashElapsed { generation }),
            BOOT_SPLASH_DELAY,
        );
        leptos::set_timeout(
            move || dispatch.call(ShellAction::BootCompleteElapsed { generation }),
            BOOT_COMPLETE_DELAY,
        );
    }

    // Off the web there is no event loop to arm; tests dispatch the tick
    // actions directly.
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (dispatch, generation);
    }
}

fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    leptos::logging::log!("{message}");
}
