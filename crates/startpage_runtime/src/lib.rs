pub mod bookmarks;
pub mod categories;
pub mod components;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod presets;
pub mod reducer;

mod effect_executor;
mod host;
mod runtime_context;

pub use components::{use_start_runtime, StartProvider, StartRuntimeContext, StartShell};
pub use host::StartHostContext;
pub use model::*;
pub use persistence::{
    delete_legacy_snapshot, load_durable_boot_snapshot, load_legacy_snapshot,
    persist_config_snapshot,
};
pub use reducer::{reduce_start, ReducerError, RuntimeEffect, StartAction};
