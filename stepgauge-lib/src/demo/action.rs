use strum::{Display, EnumIter, EnumString};

/// A single step of a demo session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DemoAction {
    /// Complete one more step
    #[strum(to_string = "next", serialize = "n")]
    Next,

    /// Undo one step
    #[strum(to_string = "prev", serialize = "p")]
    Prev,

    /// Start over from zero
    #[strum(to_string = "reset", serialize = "r")]
    Reset,

    /// Show the panel
    #[strum(to_string = "show", serialize = "s")]
    Show,

    /// Hide the panel
    #[strum(to_string = "hide", serialize = "h")]
    Hide,

    /// End the session
    #[strum(to_string = "quit", serialize = "q")]
    Quit,
}
