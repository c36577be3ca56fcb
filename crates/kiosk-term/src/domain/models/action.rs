/// Work handed off to the background actions service so the UI loop never
/// blocks on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenLink(String),
}
