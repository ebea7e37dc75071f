use crate::domains::navigation::route::Route;

#[derive(Clone, Debug)]
pub enum Message {
    /// Go to a route, remembering the current one
    Navigate(Route),
    /// Go to a path given as text, e.g. `/user/3`
    NavigateTo(String),
    /// Return to the previous history entry
    NavigateBack,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "Navigation::Navigate",
            Self::NavigateTo(_) => "Navigation::NavigateTo",
            Self::NavigateBack => "Navigation::NavigateBack",
        }
    }
}
