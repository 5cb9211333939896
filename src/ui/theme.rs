use fltk::{
    button::Button,
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextDisplay,
    window::Window,
};

use crate::app::notify::NoticeKind;

/// The copper accent used for the active tab and header, after the deck's
/// own palette.
pub fn accent_color() -> Color {
    Color::from_rgb(180, 83, 9)
}

/// (active bg, active label, inactive bg, inactive label) for the slide tabs.
pub fn tab_palette(is_dark: bool) -> (Color, Color, Color, Color) {
    if is_dark {
        (
            accent_color(),
            Color::White,
            Color::from_rgb(48, 44, 40),
            Color::from_rgb(180, 175, 170),
        )
    } else {
        (
            accent_color(),
            Color::White,
            Color::from_rgb(226, 222, 218),
            Color::from_rgb(70, 60, 52),
        )
    }
}

/// (background, label) colors for the notification banner.
pub fn banner_colors(kind: NoticeKind, is_dark: bool) -> (Color, Color) {
    match (kind, is_dark) {
        (NoticeKind::Success, true) => (Color::from_rgb(30, 70, 32), Color::from_rgb(200, 230, 201)),
        (NoticeKind::Success, false) => (Color::from_rgb(212, 237, 218), Color::from_rgb(21, 87, 36)),
        (NoticeKind::Error, true) => (Color::from_rgb(88, 28, 28), Color::from_rgb(248, 215, 218)),
        (NoticeKind::Error, false) => (Color::from_rgb(248, 215, 218), Color::from_rgb(114, 28, 36)),
    }
}

pub struct ThemeTargets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub header_title: &'a mut Frame,
    pub header_subtitle: &'a mut Frame,
    pub slide_display: &'a mut TextDisplay,
    pub notes_display: &'a mut TextDisplay,
    pub footer_label: &'a mut Frame,
    pub prev_button: &'a mut Button,
    pub next_button: &'a mut Button,
}

pub fn apply_theme(t: &mut ThemeTargets, is_dark: bool) {
    if is_dark {
        // Dark mode: the deck's own industrial palette
        t.window.set_color(Color::from_rgb(28, 25, 23));
        t.window.set_label_color(Color::from_rgb(220, 220, 220));
        t.menu.set_color(Color::from_rgb(38, 34, 31));
        t.menu.set_text_color(Color::from_rgb(220, 220, 220));
        t.menu.set_selection_color(Color::from_rgb(64, 58, 52)); // Hover color
        t.header_title.set_label_color(Color::White);
        t.header_subtitle.set_label_color(Color::from_rgb(214, 211, 209));
        t.slide_display.set_color(Color::from_rgb(38, 35, 33));
        t.slide_display.set_text_color(Color::from_rgb(230, 228, 225));
        t.notes_display.set_color(Color::from_rgb(48, 42, 37));
        t.notes_display.set_text_color(Color::from_rgb(214, 211, 209));
        t.footer_label.set_label_color(Color::from_rgb(214, 211, 209));
        t.prev_button.set_label_color(Color::from_rgb(220, 220, 220));
        t.next_button.set_label_color(Color::from_rgb(220, 220, 220));
    } else {
        // Light mode colors
        t.window.set_color(Color::from_rgb(245, 243, 240));
        t.window.set_label_color(Color::Black);
        t.menu.set_color(Color::from_rgb(240, 238, 235));
        t.menu.set_text_color(Color::Black);
        t.menu.set_selection_color(Color::from_rgb(210, 205, 200)); // Hover color
        t.header_title.set_label_color(Color::from_rgb(40, 32, 26));
        t.header_subtitle.set_label_color(Color::from_rgb(110, 100, 92));
        t.slide_display.set_color(Color::White);
        t.slide_display.set_text_color(Color::Black);
        t.notes_display.set_color(Color::from_rgb(252, 249, 240));
        t.notes_display.set_text_color(Color::from_rgb(70, 60, 52));
        t.footer_label.set_label_color(Color::from_rgb(110, 100, 92));
        t.prev_button.set_label_color(Color::Black);
        t.next_button.set_label_color(Color::Black);
    }

    t.slide_display.redraw();
    t.notes_display.redraw();
    t.menu.redraw();
    t.window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
