use fltk::{
    button::Button,
    dialog,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

const HOMEPAGE: &str = "https://github.com/slideforge/slideforge";

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog_window = Window::default()
        .with_size(420, 300)
        .with_label("About SlideForge")
        .center_screen();
    dialog_window.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 280, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("\u{2699} SlideForge");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label(
        "A native viewer for the Industrial Revolution deck,\n\
         with speaker notes and PPTX export",
    );
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    desc_frame.set_align(Align::Center | Align::Inside);
    flex.fixed(&desc_frame, 45);

    let mut info_frame = Frame::default();
    info_frame.set_label("Built with Rust and FLTK\nLicensed under the MIT License");
    info_frame.set_label_size(12);
    info_frame.set_align(Align::Center | Align::Inside);
    flex.fixed(&info_frame, 50);

    let mut _spacer = Frame::default();

    let mut homepage_btn = Button::default().with_label("Project Page");
    flex.fixed(&homepage_btn, 35);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog_window.end();

    homepage_btn.set_callback(move |_| {
        if let Err(e) = open::that(HOMEPAGE) {
            dialog::alert_default(&format!("Failed to open browser: {}", e));
        }
    });

    let mut dialog_close = dialog_window.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog_window.show();
    super::run_dialog(&dialog_window);
}
