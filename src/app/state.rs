use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use fltk::{
    app::Sender, button::Button, frame::Frame, group::Flex, menu::MenuBar, prelude::*,
    window::Window,
};

use super::deck::Deck;
use super::error::{AppError, Result};
use super::export::{ExportController, ExportEndpoint, ExportResponse, FileSink, HttpEndpoint};
use super::messages::Message;
use super::navigation::NavigationController;
use super::notify::{Notice, NoticeKind, Notifier};
use super::settings::{AppSettings, ThemeMode};
use crate::ui::file_dialogs::native_save_dialog;
use crate::ui::main_window::{BANNER_HEIGHT, MainWindow};
use crate::ui::notes_panel::NotesPanel;
use crate::ui::slide_view::SlideView;
use crate::ui::theme::{self, ThemeTargets, apply_theme};
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub deck: Deck,
    pub nav: NavigationController,
    pub export: ExportController,
    pub settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
    sender: Sender<Message>,

    window: Window,
    flex: Flex,
    menu: MenuBar,
    banner: Frame,
    header_title: Frame,
    header_subtitle: Frame,
    tab_buttons: Vec<Button>,
    slide_view: SlideView,
    notes_panel: NotesPanel,
    footer_label: Frame,
    prev_button: Button,
    next_button: Button,
}

impl AppState {
    pub fn new(
        deck: Deck,
        ui: MainWindow,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        dark_mode: bool,
    ) -> Self {
        let nav = NavigationController::new(deck.len());
        let font_size = settings.borrow().font_size as i32;

        let mut state = Self {
            deck,
            nav,
            export: ExportController::new(),
            settings,
            dark_mode,
            sender,
            window: ui.window,
            flex: ui.flex,
            menu: ui.menu,
            banner: ui.banner,
            header_title: ui.header_title,
            header_subtitle: ui.header_subtitle,
            tab_buttons: ui.tab_buttons,
            slide_view: ui.slide_view,
            notes_panel: ui.notes_panel,
            footer_label: ui.footer_label,
            prev_button: ui.prev_button,
            next_button: ui.next_button,
        };
        state.slide_view.set_text_size(font_size);
        state.notes_panel.set_text_size((font_size - 2).max(8));
        state
    }

    pub fn show_window(&mut self) {
        self.window.show();
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);
    }

    /// Re-render everything derived from the active slide: content, tab
    /// highlight, footer counter, nav button availability, and the notes
    /// panel when it is open.
    pub fn show_slide(&mut self) {
        let index = self.nav.active_slide();
        if let Some(slide) = self.deck.slide(index) {
            self.slide_view.render(slide);
        }

        let (active_bg, active_fg, inactive_bg, inactive_fg) = theme::tab_palette(self.dark_mode);
        for (i, button) in self.tab_buttons.iter_mut().enumerate() {
            if i == index {
                button.set_color(active_bg);
                button.set_label_color(active_fg);
            } else {
                button.set_color(inactive_bg);
                button.set_label_color(inactive_fg);
            }
            button.redraw();
        }

        self.footer_label
            .set_label(&format!("  Slide {} of {}", index + 1, self.nav.slide_count()));
        if self.nav.at_first() {
            self.prev_button.deactivate();
        } else {
            self.prev_button.activate();
        }
        if self.nav.at_last() {
            self.next_button.deactivate();
        } else {
            self.next_button.activate();
        }

        if self.nav.notes_visible() {
            self.render_notes();
        }
        self.window.redraw();
    }

    fn render_notes(&mut self) {
        if let Some(notes) = self.deck.notes_for(self.nav.active_slide()) {
            self.notes_panel.render(notes);
        }
    }

    // --- Navigation ---

    pub fn select_slide(&mut self, index: usize) {
        if self.nav.select_slide(index) {
            self.show_slide();
        }
    }

    pub fn next_slide(&mut self) {
        if self.nav.next() {
            self.show_slide();
        }
    }

    pub fn previous_slide(&mut self) {
        if self.nav.previous() {
            self.show_slide();
        }
    }

    // --- View toggles ---

    pub fn toggle_notes(&mut self) {
        self.nav.toggle_notes();
        if self.nav.notes_visible() {
            self.render_notes();
            self.notes_panel.show(&mut self.flex);
        } else {
            self.notes_panel.hide(&mut self.flex);
        }
        self.update_menu_checkbox("View/Speaker Notes", self.nav.notes_visible());
        self.window.redraw();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.apply_theme();
        self.show_slide();

        let mut settings = self.settings.borrow_mut();
        settings.theme_mode = if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        let _ = settings.save();
    }

    pub fn apply_theme(&mut self) {
        let mut targets = ThemeTargets {
            window: &mut self.window,
            menu: &mut self.menu,
            header_title: &mut self.header_title,
            header_subtitle: &mut self.header_subtitle,
            slide_display: self.slide_view.display_mut(),
            notes_display: self.notes_panel.display_mut(),
            footer_label: &mut self.footer_label,
            prev_button: &mut self.prev_button,
            next_button: &mut self.next_button,
        };
        apply_theme(&mut targets, self.dark_mode);
        #[cfg(target_os = "windows")]
        if self.window.shown() {
            set_windows_titlebar_theme(&self.window, self.dark_mode);
        }
        self.update_menu_checkbox("View/Dark Mode", self.dark_mode);
    }

    // --- Export ---

    /// Kick off the export fetch on a worker thread. A second request while
    /// one is running is dropped by the guard.
    pub fn start_export(&mut self) {
        if !self.export.begin() {
            return;
        }
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = HttpEndpoint::new().fetch().map_err(|e| e.to_string());
            sender.send(Message::ExportFinished(result));
        });
    }

    /// Back on the main thread: decode, ask where to save, write, notify.
    pub fn finish_export(&mut self, result: std::result::Result<ExportResponse, String>) {
        let result = result.map_err(AppError::Export);
        let mut sink = SaveDialogSink {
            settings: Rc::clone(&self.settings),
        };
        let mut notifier = BannerNotifier {
            banner: &mut self.banner,
            flex: &mut self.flex,
            window: &mut self.window,
            dark_mode: self.dark_mode,
        };
        self.export.finish(result, &mut sink, &mut notifier);
    }

    pub fn dismiss_banner(&mut self) {
        self.banner.hide();
        self.flex.fixed(&self.banner, 0);
        self.window.redraw();
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}

/// Save mechanism backed by the native save dialog; remembers the chosen
/// directory for the next export.
struct SaveDialogSink {
    settings: Rc<RefCell<AppSettings>>,
}

impl FileSink for SaveDialogSink {
    fn save(&mut self, bytes: &[u8], filename: &str, _mime: &str) -> Result<()> {
        let start_dir = self.settings.borrow().last_export_directory.clone();
        let path = native_save_dialog(start_dir.as_deref(), filename)
            .ok_or_else(|| AppError::Export("save cancelled".into()))?;
        fs::write(&path, bytes)?;

        if let Some(parent) = Path::new(&path).parent() {
            let mut settings = self.settings.borrow_mut();
            settings.last_export_directory = Some(parent.to_string_lossy().to_string());
            let _ = settings.save();
        }
        Ok(())
    }
}

/// Notification sink backed by the banner frame above the deck header.
struct BannerNotifier<'a> {
    banner: &'a mut Frame,
    flex: &'a mut Flex,
    window: &'a mut Window,
    dark_mode: bool,
}

impl Notifier for BannerNotifier<'_> {
    fn notify(&mut self, notice: Notice) {
        let glyph = match notice.kind {
            NoticeKind::Success => "\u{2705}",
            NoticeKind::Error => "\u{26a0}",
        };
        self.banner.set_label(&format!(
            "  {} {}: {}  (click or press ESC to dismiss)",
            glyph, notice.title, notice.detail
        ));
        let (bg, fg) = theme::banner_colors(notice.kind, self.dark_mode);
        self.banner.set_color(bg);
        self.banner.set_label_color(fg);
        self.banner.show();
        self.flex.fixed(&*self.banner, BANNER_HEIGHT);
        self.window.redraw();
    }
}
