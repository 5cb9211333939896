//! The built-in deck: authored slides and speaker notes.
//!
//! Everything here is static configuration. The deck is constructed once at
//! startup and never mutated; runtime state (which slide is showing, whether
//! the notes panel is open) lives in the navigation controller.

pub const DECK_TITLE: &str = "ИНДУСТРИАЛЬНАЯ РЕВОЛЮЦИЯ";
pub const DECK_SUBTITLE: &str = "Экономическая трансформация человечества";

/// A stage of the industrial revolution (slide 1).
pub struct StageCard {
    pub stage: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// A key invention (slide 2).
pub struct InventionCard {
    pub invention: &'static str,
    pub year: &'static str,
    pub inventor: &'static str,
    pub impact: &'static str,
    pub examples: &'static [&'static str],
}

/// An economic outcome with its headline metric (slide 3).
pub struct OutcomeCard {
    pub result: &'static str,
    pub metric: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// Card list of one slide. Each slide carries one homogeneous card shape;
/// the shapes differ between slides, hence one variant per slide.
pub enum SlideContent {
    Stages(Vec<StageCard>),
    Inventions(Vec<InventionCard>),
    Outcomes(Vec<OutcomeCard>),
}

impl SlideContent {
    pub fn card_count(&self) -> usize {
        match self {
            SlideContent::Stages(cards) => cards.len(),
            SlideContent::Inventions(cards) => cards.len(),
            SlideContent::Outcomes(cards) => cards.len(),
        }
    }
}

pub struct Slide {
    /// Ordinal position in the deck; always equals the slide's index.
    pub id: usize,
    pub title: &'static str,
    pub icon: &'static str,
    pub content: SlideContent,
}

impl Slide {
    /// Short label for the slide's tab button (first word of the title).
    pub fn tab_label(&self) -> &'static str {
        self.title.split_whitespace().next().unwrap_or(self.title)
    }
}

/// Speaker notes for one slide: an intro plus one note per card, indexed in
/// lockstep with the deck.
pub struct SpeakerNotes {
    pub intro: &'static str,
    pub points: &'static [&'static str],
}

pub struct Deck {
    slides: Vec<Slide>,
    notes: Vec<SpeakerNotes>,
}

impl Deck {
    pub fn builtin() -> Self {
        Self {
            slides: builtin_slides(),
            notes: builtin_notes(),
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn notes_for(&self, index: usize) -> Option<&SpeakerNotes> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

fn builtin_slides() -> Vec<Slide> {
    vec![
        Slide {
            id: 0,
            title: "Этапы Индустриальной Революции",
            icon: "\u{2699}",
            content: SlideContent::Stages(vec![
                StageCard {
                    stage: "Первая революция",
                    period: "1760-1840",
                    description: "Механизация производства, паровой двигатель, текстильная промышленность",
                    examples: &[
                        "Великобритания: текстильные фабрики",
                        "Паровые машины Уатта",
                        "Железные дороги",
                    ],
                },
                StageCard {
                    stage: "Вторая революция",
                    period: "1870-1914",
                    description: "Электричество, нефть, массовое производство",
                    examples: &[
                        "США: конвейер Форда",
                        "Электрификация городов",
                        "Химическая промышленность",
                    ],
                },
                StageCard {
                    stage: "Третья революция",
                    period: "1950-2000",
                    description: "Компьютеризация, автоматизация, информационные технологии",
                    examples: &[
                        "Роботизация производства",
                        "Интернет и IT-сектор",
                        "Глобализация экономики",
                    ],
                },
            ]),
        },
        Slide {
            id: 1,
            title: "Ключевые Изобретения",
            icon: "\u{1f527}",
            content: SlideContent::Inventions(vec![
                InventionCard {
                    invention: "Паровой двигатель",
                    year: "1769",
                    inventor: "Джеймс Уатт",
                    impact: "Революция в транспорте и производстве",
                    examples: &["Паровозы", "Пароходы", "Фабричные станки"],
                },
                InventionCard {
                    invention: "Ткацкий станок",
                    year: "1785",
                    inventor: "Эдмунд Картрайт",
                    impact: "Рост производительности в 40 раз",
                    examples: &[
                        "Текстильные фабрики",
                        "Массовое производство ткани",
                        "Снижение цен",
                    ],
                },
                InventionCard {
                    invention: "Электрическая лампа",
                    year: "1879",
                    inventor: "Томас Эдисон",
                    impact: "Круглосуточная работа предприятий",
                    examples: &["Ночные смены", "Рост производства", "Урбанизация"],
                },
            ]),
        },
        Slide {
            id: 2,
            title: "Экономические Результаты",
            icon: "\u{1f4c8}",
            content: SlideContent::Outcomes(vec![
                OutcomeCard {
                    result: "Рост ВВП",
                    metric: "+400%",
                    period: "1800-1900",
                    description: "Увеличение валового продукта развитых стран",
                    examples: &[
                        "Великобритания: с £350M до £2B",
                        "США: рост экономики в 15 раз",
                        "Германия: промышленный бум",
                    ],
                },
                OutcomeCard {
                    result: "Урбанизация",
                    metric: "10% → 80%",
                    period: "1800-2000",
                    description: "Переселение населения в города",
                    examples: &[
                        "Лондон: 1M → 7M жителей",
                        "Новые промышленные города",
                        "Развитие инфраструктуры",
                    ],
                },
                OutcomeCard {
                    result: "Производительность труда",
                    metric: "+1500%",
                    period: "1760-1900",
                    description: "Рост выработки на одного рабочего",
                    examples: &[
                        "Текстиль: с 1 до 40 метров/день",
                        "Сталь: рост производства в 200 раз",
                        "Снижение стоимости товаров",
                    ],
                },
            ]),
        },
    ]
}

fn builtin_notes() -> Vec<SpeakerNotes> {
    vec![
        SpeakerNotes {
            intro: "Начните с общей картины: три волны индустриализации, каждая \
                    со своим источником энергии и своей ведущей отраслью.",
            points: &[
                "Подчеркните роль Великобритании как родины первой революции: \
                 уголь, пар и текстиль.",
                "Вторая волна — переход к электричеству и нефти; конвейер Форда \
                 как символ массового производства.",
                "Третья волна — информационная: производство автоматизируется, \
                 экономика глобализируется.",
            ],
        },
        SpeakerNotes {
            intro: "Каждое изобретение разбирается по схеме: что изобрели, кто и \
                    когда, и как это изменило экономику.",
            points: &[
                "Двигатель Уатта освободил фабрики от привязки к рекам и ветру.",
                "Станок Картрайта: рост выработки в 40 раз — хороший момент, \
                 чтобы спросить аудиторию о последствиях для цен.",
                "Лампа Эдисона сделала возможными ночные смены; свяжите это с \
                 урбанизацией на следующем слайде.",
            ],
        },
        SpeakerNotes {
            intro: "Финальный слайд — цифры. Дайте аудитории время рассмотреть \
                    метрики, затем пройдитесь по каждой.",
            points: &[
                "Рост ВВП в четыре раза за столетие — беспрецедентный темп для \
                 доиндустриальной эпохи.",
                "Урбанизация: от одного горожанина из десяти до восьми из десяти.",
                "Производительность труда выросла в 15 раз; завершите выводом о \
                 снижении стоимости товаров и росте уровня жизни.",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck_has_three_slides() {
        let deck = Deck::builtin();
        assert_eq!(deck.len(), 3);
        assert!(!deck.is_empty());
    }

    #[test]
    fn test_slide_ids_match_positions() {
        let deck = Deck::builtin();
        for (index, slide) in deck.slides().iter().enumerate() {
            assert_eq!(slide.id, index);
        }
    }

    #[test]
    fn test_notes_indexed_in_lockstep() {
        let deck = Deck::builtin();
        for index in 0..deck.len() {
            let slide = deck.slide(index).unwrap();
            let notes = deck.notes_for(index).unwrap();
            assert_eq!(
                notes.points.len(),
                slide.content.card_count(),
                "slide {} notes out of lockstep",
                index
            );
            assert!(!notes.intro.is_empty());
        }
    }

    #[test]
    fn test_out_of_range_lookups_return_none() {
        let deck = Deck::builtin();
        assert!(deck.slide(3).is_none());
        assert!(deck.notes_for(3).is_none());
    }

    #[test]
    fn test_each_slide_has_three_cards() {
        let deck = Deck::builtin();
        for slide in deck.slides() {
            assert_eq!(slide.content.card_count(), 3);
        }
    }

    #[test]
    fn test_tab_labels_are_first_words() {
        let deck = Deck::builtin();
        let labels: Vec<&str> = deck.slides().iter().map(|s| s.tab_label()).collect();
        assert_eq!(labels, vec!["Этапы", "Ключевые", "Экономические"]);
    }
}
