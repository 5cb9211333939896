pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod notes_panel;
pub mod slide_view;
pub mod theme;
