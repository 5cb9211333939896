use super::export::ExportResponse;

/// All messages that can be sent through the FLTK channel.
/// Each menu item, tab button and key binding sends one of these; the
/// dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Deck navigation
    SelectSlide(usize),
    NextSlide,
    PreviousSlide,

    // View
    ToggleNotes,
    ToggleDarkMode,

    // Export
    ExportDeck,
    /// Result of the background fetch; errors arrive stringified because the
    /// message crosses the channel.
    ExportFinished(Result<ExportResponse, String>),

    // Banner & misc
    DismissBanner,
    ShowAbout,
    Quit,
}
