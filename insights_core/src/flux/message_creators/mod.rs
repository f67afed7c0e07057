//! Message creators: typed intents in, one dispatched message out
//!
//! Creators never touch stores. Telemetry travels inside the payload, or as a
//! `Telemetry.Send` message for intents that change no state.

pub mod card_selection;
pub mod details_view;
pub mod popup;
pub mod user_config;

pub use card_selection::CardSelectionMessageCreator;
pub use details_view::DetailsViewActionMessageCreator;
pub use popup::PopupActionMessageCreator;
pub use user_config::UserConfigMessageCreator;
