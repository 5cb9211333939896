#[cfg(not(target_os = "windows"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::cell::RefCell;
use std::rc::Rc;

use fltk::app;

use slide_forge::app::deck::Deck;
use slide_forge::app::messages::Message;
use slide_forge::app::platform::detect_system_dark_mode;
use slide_forge::app::settings::{AppSettings, ThemeMode};
use slide_forge::app::state::AppState;
use slide_forge::ui::dialogs::about::show_about_dialog;
use slide_forge::ui::main_window::build_main_window;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let dark_mode = match settings.borrow().theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    let deck = Deck::builtin();
    let ui = build_main_window(&deck, sender);
    let mut state = AppState::new(deck, ui, sender, settings, dark_mode);

    state.apply_theme();
    state.show_slide();
    state.show_window();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::SelectSlide(index) => state.select_slide(index),
                Message::NextSlide => state.next_slide(),
                Message::PreviousSlide => state.previous_slide(),
                Message::ToggleNotes => state.toggle_notes(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ExportDeck => state.start_export(),
                Message::ExportFinished(result) => state.finish_export(result),
                Message::DismissBanner => state.dismiss_banner(),
                Message::ShowAbout => show_about_dialog(),
                Message::Quit => app::quit(),
            }
        }
    }
}
