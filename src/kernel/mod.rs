//! Headless session core (state/action/effect).

pub mod action;
pub mod effect;
pub mod language;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use language::{language_id_for_name, LanguageId};
pub use state::{
    AppState, ExplorerState, InlineInputKind, InlineInputState, StatusBarState, UiState,
};
pub use store::{DispatchResult, Store};
