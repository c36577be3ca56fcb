pub mod actions;
pub mod app_state;
pub mod events;
pub mod scroll;
pub mod transcript_list;

pub use actions::ActionsService;
pub use actions::LinkOpener;
pub use actions::SystemOpener;
pub use app_state::AppState;
pub use app_state::AppStateProps;
pub use events::EventsService;
pub use scroll::Scroll;
pub use transcript_list::TranscriptList;
