//! Desktop shell runtime: session state machine, window manager, and UI.
//!
//! State lives in [`model`], transitions in [`reducer`], and everything
//! browser-facing in [`host`] and [`components`].

pub mod apps;
pub mod components;
pub mod effect_executor;
pub mod geometry;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod registry;
pub mod runtime_context;

pub use components::{ShellProvider, ShellRoot};
pub use model::*;
pub use reducer::{reduce_shell, ReducerError, RuntimeEffect, ShellAction};
pub use runtime_context::{use_shell_runtime, ShellRuntimeContext};
