use fltk::{
    app,
    app::Sender,
    button::Button,
    enums::{Align, Event, Font, FrameType, Key, Shortcut},
    frame::Frame,
    group::{Flex, FlexType},
    menu::{MenuBar, MenuFlag},
    prelude::*,
    window::Window,
};

use crate::app::deck::{DECK_SUBTITLE, DECK_TITLE, Deck};
use crate::app::messages::Message;

use super::notes_panel::NotesPanel;
use super::slide_view::SlideView;

pub const WINDOW_WIDTH: i32 = 900;
pub const WINDOW_HEIGHT: i32 = 640;
pub const BANNER_HEIGHT: i32 = 30;

const MENU_HEIGHT: i32 = 30;
const HEADER_TITLE_HEIGHT: i32 = 44;
const HEADER_SUBTITLE_HEIGHT: i32 = 22;
const TAB_ROW_HEIGHT: i32 = 40;
const FOOTER_HEIGHT: i32 = 36;
const NAV_BUTTON_WIDTH: i32 = 110;

/// All widget handles the coordinator needs after construction.
pub struct MainWindow {
    pub window: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub banner: Frame,
    pub header_title: Frame,
    pub header_subtitle: Frame,
    pub tab_buttons: Vec<Button>,
    pub slide_view: SlideView,
    pub notes_panel: NotesPanel,
    pub footer_label: Frame,
    pub prev_button: Button,
    pub next_button: Button,
}

/// Build the widget tree: a single flex column with menu, notification
/// banner, deck header, slide tabs, the content display, the collapsed notes
/// panel and the footer with prev/next controls.
pub fn build_main_window(deck: &Deck, sender: Sender<Message>) -> MainWindow {
    let mut window = Window::default()
        .with_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .with_label("SlideForge")
        .center_screen();

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(FlexType::Column);

    let mut menu = MenuBar::default();
    flex.fixed(&menu, MENU_HEIGHT);
    build_menu(&mut menu, deck, sender);

    let mut banner = Frame::default();
    banner.set_frame(FrameType::FlatBox);
    banner.set_align(Align::Inside | Align::Left);
    banner.hide();
    flex.fixed(&banner, 0);
    banner.handle(move |_, event| {
        if event == Event::Push {
            sender.send(Message::DismissBanner);
            true
        } else {
            false
        }
    });

    let mut header_title = Frame::default().with_label(DECK_TITLE);
    header_title.set_label_font(Font::HelveticaBold);
    header_title.set_label_size(26);
    flex.fixed(&header_title, HEADER_TITLE_HEIGHT);

    let mut header_subtitle = Frame::default().with_label(DECK_SUBTITLE);
    header_subtitle.set_label_size(13);
    flex.fixed(&header_subtitle, HEADER_SUBTITLE_HEIGHT);

    let mut tab_row = Flex::default();
    tab_row.set_type(FlexType::Row);
    tab_row.set_spacing(8);
    let mut tab_buttons = Vec::with_capacity(deck.len());
    for slide in deck.slides() {
        let mut button =
            Button::default().with_label(&format!("{}  {}", slide.icon, slide.tab_label()));
        button.set_label_size(14);
        button.emit(sender, Message::SelectSlide(slide.id));
        tab_buttons.push(button);
    }
    tab_row.end();
    flex.fixed(&tab_row, TAB_ROW_HEIGHT);

    // The one flexible child: everything else keeps a fixed height.
    let slide_view = SlideView::new();

    let mut notes_panel = NotesPanel::new();
    notes_panel.hide(&mut flex);

    let mut footer = Flex::default();
    footer.set_type(FlexType::Row);
    footer.set_spacing(8);
    let mut footer_label = Frame::default();
    footer_label.set_align(Align::Inside | Align::Left);
    footer_label.set_label_size(12);
    let mut prev_button = Button::default().with_label("\u{25c0} Prev");
    prev_button.emit(sender, Message::PreviousSlide);
    footer.fixed(&prev_button, NAV_BUTTON_WIDTH);
    let mut next_button = Button::default().with_label("Next \u{25b6}");
    next_button.emit(sender, Message::NextSlide);
    footer.fixed(&next_button, NAV_BUTTON_WIDTH);
    footer.end();
    flex.fixed(&footer, FOOTER_HEIGHT);

    flex.end();
    window.resizable(&flex);
    window.end();

    // Arrow keys page through the deck; Escape dismisses the banner instead
    // of closing the window.
    window.handle(move |_, event| {
        if event != Event::KeyDown {
            return false;
        }
        match app::event_key() {
            Key::Left => {
                sender.send(Message::PreviousSlide);
                true
            }
            Key::Right => {
                sender.send(Message::NextSlide);
                true
            }
            Key::Escape => {
                sender.send(Message::DismissBanner);
                true
            }
            _ => false,
        }
    });

    MainWindow {
        window,
        flex,
        menu,
        banner,
        header_title,
        header_subtitle,
        tab_buttons,
        slide_view,
        notes_panel,
        footer_label,
        prev_button,
        next_button,
    }
}

fn build_menu(menu: &mut MenuBar, deck: &Deck, sender: Sender<Message>) {
    menu.add_emit(
        "File/Export PPTX...",
        Shortcut::Ctrl | 'e',
        MenuFlag::Normal,
        sender,
        Message::ExportDeck,
    );
    menu.add_emit(
        "File/Quit",
        Shortcut::Ctrl | 'q',
        MenuFlag::Normal,
        sender,
        Message::Quit,
    );

    for slide in deck.slides() {
        let label = format!("Deck/Go to Slide {}", slide.id + 1);
        let key = (b'1' + slide.id as u8) as char;
        menu.add_emit(
            &label,
            Shortcut::Alt | key,
            MenuFlag::Normal,
            sender,
            Message::SelectSlide(slide.id),
        );
    }
    menu.add_emit(
        "Deck/Next Slide",
        Shortcut::Ctrl | '.',
        MenuFlag::Normal,
        sender,
        Message::NextSlide,
    );
    menu.add_emit(
        "Deck/Previous Slide",
        Shortcut::Ctrl | ',',
        MenuFlag::Normal,
        sender,
        Message::PreviousSlide,
    );

    menu.add_emit(
        "View/Speaker Notes",
        Shortcut::Ctrl | 'n',
        MenuFlag::Toggle,
        sender,
        Message::ToggleNotes,
    );
    menu.add_emit(
        "View/Dark Mode",
        Shortcut::Ctrl | 'd',
        MenuFlag::Toggle,
        sender,
        Message::ToggleDarkMode,
    );

    menu.add_emit(
        "Help/About SlideForge",
        Shortcut::None,
        MenuFlag::Normal,
        sender,
        Message::ShowAbout,
    );
}
