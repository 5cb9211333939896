use fltk::{
    enums::Font,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
};

use crate::app::deck::SpeakerNotes;

pub const NOTES_PANEL_HEIGHT: i32 = 170;

/// Collapsible speaker-notes overlay under the slide content. Hidden panels
/// keep their flex slot at height 0, the same trick the notification banner
/// uses.
pub struct NotesPanel {
    display: TextDisplay,
    buffer: TextBuffer,
}

impl NotesPanel {
    pub fn new() -> Self {
        let buffer = TextBuffer::default();
        let mut display = TextDisplay::default();
        display.set_buffer(buffer.clone());
        display.wrap_mode(WrapMode::AtBounds, 0);
        display.set_text_font(Font::HelveticaItalic);
        Self { display, buffer }
    }

    pub fn display(&self) -> &TextDisplay {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut TextDisplay {
        &mut self.display
    }

    pub fn set_text_size(&mut self, size: i32) {
        self.display.set_text_size(size);
        self.display.redraw();
    }

    pub fn render(&mut self, notes: &SpeakerNotes) {
        self.buffer.set_text(&format_notes(notes));
        self.display.scroll(0, 0);
    }

    pub fn show(&mut self, flex: &mut Flex) {
        self.display.show();
        flex.fixed(&self.display, NOTES_PANEL_HEIGHT);
    }

    pub fn hide(&mut self, flex: &mut Flex) {
        self.display.hide();
        flex.fixed(&self.display, 0);
    }
}

impl Default for NotesPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats one slide's notes: intro paragraph, then numbered per-card points.
pub fn format_notes(notes: &SpeakerNotes) -> String {
    let mut out = String::new();
    out.push_str(notes.intro);
    out.push_str("\n\n");
    for (number, point) in notes.points.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", number + 1, point));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::deck::Deck;

    #[test]
    fn test_format_notes_numbers_points() {
        let deck = Deck::builtin();
        let text = format_notes(deck.notes_for(0).unwrap());

        assert!(text.starts_with("Начните с общей картины"));
        assert!(text.contains("1. "));
        assert!(text.contains("3. "));
        assert!(!text.contains("4. "));
    }

    #[test]
    fn test_format_notes_covers_every_slide() {
        let deck = Deck::builtin();
        for index in 0..deck.len() {
            let notes = deck.notes_for(index).unwrap();
            let text = format_notes(notes);
            for number in 1..=notes.points.len() {
                assert!(text.contains(&format!("{}. ", number)));
            }
        }
    }
}
