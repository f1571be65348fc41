//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect
//! queue, and boot bootstrapping. UI composition stays in
//! [`crate::components`].

use leptos::*;

use crate::{
    apps::{self, AppViewContext, FileSystem, UploadedFile},
    effect_executor,
    host::ShellHostContext,
    model::{InteractionState, ShellState},
    reducer::{reduce_shell, RuntimeEffect, ShellAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`]
/// values.
pub struct ShellRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<ShellHostContext>,
    /// Reactive shell state signal.
    pub state: RwSignal<ShellState>,
    /// Reactive pointer-gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Shared virtual file system, consumed by apps only.
    pub file_system: RwSignal<FileSystem>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }

    /// Builds the fixed prop bundle handed to app views.
    pub fn app_view_context(&self) -> AppViewContext {
        let state = self.state;
        let dispatch = self.dispatch;
        let file_system = self.file_system;
        AppViewContext {
            username: Signal::derive(move || state.get().identity.username.clone()),
            wallpaper_url: Signal::derive(move || state.get().wallpaper_url.clone()),
            set_wallpaper: Callback::new(move |url: String| {
                dispatch.call(ShellAction::SetWallpaper { url });
            }),
            file_system,
            upload_files: Callback::new(move |files: Vec<UploadedFile>| {
                file_system.update(|fs| {
                    apps::append_uploaded_files(fs, files, apps::UPLOAD_TARGET_FOLDER);
                });
            }),
        }
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components and starts the
/// boot sequence.
pub fn ShellProvider(children: Children) -> impl IntoView {
    let host = store_value(ShellHostContext::default());
    let state = create_rw_signal(ShellState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let file_system = create_rw_signal(apps::initial_file_system());

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_shell = shell.clone();
        let previous_ui = ui.clone();

        match reduce_shell(&mut shell, &mut ui, action) {
            Ok(new_effects) => {
                if shell != previous_shell {
                    state.set(shell);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("shell reducer error: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        host,
        state,
        interaction,
        effects,
        file_system,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    // Hydrate the saved account before the boot sequence decides whether to
    // route to setup or login.
    let identity = host.get_value().load_identity();
    dispatch.call(ShellAction::HydrateIdentity(identity));
    dispatch.call(ShellAction::BeginBoot);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
