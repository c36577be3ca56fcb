mod action;
mod event;

pub use action::Action;
pub use event::Event;
