use fltk::{
    enums::Font,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
};

use crate::app::deck::{Slide, SlideContent};

/// The content area: renders the active slide's cards as formatted text.
pub struct SlideView {
    display: TextDisplay,
    buffer: TextBuffer,
}

impl SlideView {
    pub fn new() -> Self {
        let buffer = TextBuffer::default();
        let mut display = TextDisplay::default();
        display.set_buffer(buffer.clone());
        display.wrap_mode(WrapMode::AtBounds, 0);
        display.set_text_font(Font::Helvetica);
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

    pub fn render(&mut self, slide: &Slide) {
        self.buffer.set_text(&format_slide(slide));
        self.display.scroll(0, 0);
    }
}

impl Default for SlideView {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a slide as plain text: heading, then one block per card with its
/// examples as a bulleted list.
pub fn format_slide(slide: &Slide) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n\n", slide.icon, slide.title));

    match &slide.content {
        SlideContent::Stages(cards) => {
            for card in cards {
                out.push_str(&format!("{} ({})\n", card.stage, card.period));
                out.push_str(&format!("    {}\n", card.description));
                push_examples(&mut out, card.examples);
            }
        }
        SlideContent::Inventions(cards) => {
            for card in cards {
                out.push_str(&format!(
                    "{} ({}), {}\n",
                    card.invention, card.year, card.inventor
                ));
                out.push_str(&format!("    {}\n", card.impact));
                push_examples(&mut out, card.examples);
            }
        }
        SlideContent::Outcomes(cards) => {
            for card in cards {
                out.push_str(&format!(
                    "{}: {} ({})\n",
                    card.result, card.metric, card.period
                ));
                out.push_str(&format!("    {}\n", card.description));
                push_examples(&mut out, card.examples);
            }
        }
    }

    out
}

fn push_examples(out: &mut String, examples: &[&str]) {
    for example in examples {
        out.push_str(&format!("      \u{2022} {}\n", example));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::deck::Deck;

    #[test]
    fn test_format_stages_slide() {
        let deck = Deck::builtin();
        let text = format_slide(deck.slide(0).unwrap());

        assert!(text.contains("Этапы Индустриальной Революции"));
        assert!(text.contains("Первая революция (1760-1840)"));
        assert!(text.contains("\u{2022} Паровые машины Уатта"));
    }

    #[test]
    fn test_format_inventions_slide() {
        let deck = Deck::builtin();
        let text = format_slide(deck.slide(1).unwrap());

        assert!(text.contains("Паровой двигатель (1769), Джеймс Уатт"));
        assert!(text.contains("Революция в транспорте и производстве"));
    }

    #[test]
    fn test_format_outcomes_slide() {
        let deck = Deck::builtin();
        let text = format_slide(deck.slide(2).unwrap());

        assert!(text.contains("Рост ВВП: +400% (1800-1900)"));
        assert!(text.contains("\u{2022} Лондон: 1M → 7M жителей"));
    }

    #[test]
    fn test_every_card_and_example_is_rendered() {
        let deck = Deck::builtin();
        for slide in deck.slides() {
            let text = format_slide(slide);
            let bullets = text.matches('\u{2022}').count();
            // Three cards with three examples each
            assert_eq!(bullets, 9, "slide {}", slide.id);
        }
    }
}
