use std::rc::Rc;

use yew::functional::Reducible;

use crate::config;

/// Lifecycle of the hero title. Ordering is the order phases are reached in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TitlePhase {
    #[default]
    Initial,
    Entered,
    ShineActive,
    Idle,
}

impl TitlePhase {
    /// Phases with their delay from mount.
    pub const SCHEDULE: [(TitlePhase, u32); 3] = [
        (TitlePhase::Entered, config::TITLE_ENTER_MS),
        (TitlePhase::ShineActive, config::TITLE_SHINE_MS),
        (TitlePhase::Idle, config::TITLE_IDLE_MS),
    ];

    pub fn has_entered(self) -> bool {
        self >= TitlePhase::Entered
    }

    pub fn shine_active(self) -> bool {
        self >= TitlePhase::ShineActive
    }

    pub fn is_idle(self) -> bool {
        self == TitlePhase::Idle
    }
}

/// Reducer state for the title. The only action is "reach this phase", which
/// is ignored unless it moves the sequence forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TitleState {
    pub phase: TitlePhase,
}

impl Reducible for TitleState {
    type Action = TitlePhase;

    fn reduce(self: Rc<Self>, target: TitlePhase) -> Rc<Self> {
        if target <= self.phase {
            return self;
        }
        Rc::new(Self { phase: target })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// Position in the full text, counting the single space between words.
    pub index: usize,
    pub enter_delay_ms: u32,
    pub idle_delay_s: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TitleLayout {
    pub words: Vec<Vec<Glyph>>,
}

impl TitleLayout {
    pub fn new(text: &str) -> Self {
        let mut index = 0;
        let mut words = Vec::new();

        for (word_index, word) in text.split(' ').enumerate() {
            if word_index > 0 {
                index += 1;
            }
            let glyphs = word
                .chars()
                .map(|ch| {
                    let glyph = Glyph {
                        ch,
                        index,
                        enter_delay_ms: index as u32 * config::TITLE_CHAR_STAGGER_MS,
                        idle_delay_s: index as f64 * config::TITLE_IDLE_STAGGER_S,
                    };
                    index += 1;
                    glyph
                })
                .collect();
            words.push(glyphs);
        }

        Self { words }
    }

    #[cfg(test)]
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.words.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_count_the_word_separator() {
        let layout = TitleLayout::new("Universal Downloader");
        assert_eq!(layout.words.len(), 2);
        assert_eq!(layout.words[0].len(), 9);
        assert_eq!(layout.words[1][0].ch, 'D');
        assert_eq!(layout.words[1][0].index, 10);
        assert_eq!(layout.words[1][0].enter_delay_ms, 600);
        assert!((layout.words[1][0].idle_delay_s - 1.5).abs() < 1e-9);
    }

    #[test]
    fn one_strictly_increasing_delay_per_character() {
        let text = "Universal Downloader";
        let layout = TitleLayout::new(text);
        let delays: Vec<u32> = layout.glyphs().map(|glyph| glyph.enter_delay_ms).collect();

        assert_eq!(delays.len(), text.chars().filter(|c| *c != ' ').count());
        assert_eq!(delays[0], 0);
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn multibyte_characters_count_once() {
        let layout = TitleLayout::new("Zoë Ω");
        let indexes: Vec<usize> = layout.glyphs().map(|glyph| glyph.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 4]);
    }

    #[test]
    fn phases_only_move_forward() {
        let state = Rc::new(TitleState::default());
        let state = state.reduce(TitlePhase::Entered);
        let state = state.reduce(TitlePhase::Idle);
        assert_eq!(state.phase, TitlePhase::Idle);

        let before = state.clone();
        let state = state.reduce(TitlePhase::ShineActive);
        assert!(Rc::ptr_eq(&before, &state));
        assert_eq!(state.phase, TitlePhase::Idle);
    }

    #[test]
    fn schedule_is_ordered() {
        let schedule = TitlePhase::SCHEDULE;
        assert!(schedule.windows(2).all(|pair| pair[0].0 < pair[1].0 && pair[0].1 < pair[1].1));

        let mut state = Rc::new(TitleState::default());
        let mut seen = Vec::new();
        for (phase, _) in schedule {
            state = state.reduce(phase);
            seen.push(state.phase);
        }
        assert_eq!(seen, vec![TitlePhase::Entered, TitlePhase::ShineActive, TitlePhase::Idle]);
        assert!(state.phase.has_entered() && state.phase.shine_active() && state.phase.is_idle());
    }
}
