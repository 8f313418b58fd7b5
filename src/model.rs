//! Application state.
//!
//! `AppState` owns one screen selector plus the per-widget sessions. All
//! mutation happens through the methods below, driven by `event::apply_action`
//! and the controller's tick; every transition runs to completion before the
//! next input is handled, so there is exactly one writer at a time.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::genetics::{amino_palette, AminoAcid, RnaBase};
use crate::quiz::QuizSession;
use crate::replication::{Comparison, MeselsonExplorer, Walkthrough};
use crate::trainer::{Outcome, TrainerSession};

/// Display delay between finishing the mRNA and revealing the codon wheel.
pub const REVEAL_DELAY: Duration = Duration::from_millis(800);

/// The screens reachable from the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Trainer,
    Walkthrough,
    Meselson,
    Comparison,
    Quiz,
    Glossary,
}

/// One entry of the home menu.
pub struct MenuEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub screen: Screen,
}

pub static MENU: [MenuEntry; 6] = [
    MenuEntry {
        title: "Codon Trainer",
        description: "Practice transcription and translation step by step.",
        screen: Screen::Trainer,
    },
    MenuEntry {
        title: "Replication Walkthrough",
        description: "Step through the replication fork, enzyme by enzyme.",
        screen: Screen::Walkthrough,
    },
    MenuEntry {
        title: "Meselson-Stahl",
        description: "The historical proof of semiconservative replication.",
        screen: Screen::Meselson,
    },
    MenuEntry {
        title: "Leading vs. Lagging",
        description: "Why the two strands are synthesized differently.",
        screen: Screen::Comparison,
    },
    MenuEntry {
        title: "Final Quiz",
        description: "Test your replication knowledge.",
        screen: Screen::Quiz,
    },
    MenuEntry {
        title: "Glossary",
        description: "Key terms at a glance.",
        screen: Screen::Glossary,
    },
];

/// One-shot deferred reveal of the codon wheel, tied to a trainer session.
///
/// A reset bumps the session generation, so a reveal scheduled against the
/// old game is recognized as stale and dropped instead of applied.
#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    generation: u64,
    due: Instant,
}

/// The complete application state.
pub struct AppState {
    pub screen: Screen,
    pub menu_index: usize,
    pub trainer: TrainerSession,
    pub palette: Vec<&'static AminoAcid>,
    pub palette_index: usize,
    pub wheel_revealed: bool,
    pending_reveal: Option<PendingReveal>,
    pub quiz: QuizSession,
    pub walkthrough: Walkthrough,
    walkthrough_due: Option<Instant>,
    pub meselson: MeselsonExplorer,
    pub comparison: Comparison,
    pub glossary_scroll: usize,
    pub feedback: String,
    pub should_quit: bool,
    rng: StdRng,
}

impl AppState {
    /// Creates the application state, optionally seeded for reproducible
    /// template generation.
    pub fn new(start: Screen, infill_codons: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let trainer = TrainerSession::new(infill_codons, &mut rng);
        let mut state = Self {
            screen: start,
            menu_index: 0,
            trainer,
            palette: amino_palette(),
            palette_index: 0,
            wheel_revealed: false,
            pending_reveal: None,
            quiz: QuizSession::new(),
            walkthrough: Walkthrough::new(),
            walkthrough_due: None,
            meselson: MeselsonExplorer::new(),
            comparison: Comparison::default(),
            glossary_scroll: 0,
            feedback: String::new(),
            should_quit: false,
            rng,
        };
        state.feedback = state.transcription_prompt();
        state
    }

    fn transcription_prompt(&self) -> String {
        format!(
            "Transcribe the DNA into mRNA. Which base pairs with {}?",
            self.trainer.template()[0]
        )
    }

    // --- menu -----------------------------------------------------------

    pub fn menu_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        self.menu_index = (self.menu_index + 1).min(MENU.len() - 1);
    }

    pub fn menu_select(&mut self) {
        self.screen = MENU[self.menu_index].screen;
    }

    pub fn menu_jump(&mut self, index: usize) {
        if index < MENU.len() {
            self.menu_index = index;
            self.menu_select();
        }
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Menu;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // --- codon trainer --------------------------------------------------

    /// Submits an mRNA base and updates the feedback line. A completed
    /// transcript schedules the codon wheel reveal.
    pub fn trainer_submit_base(&mut self, base: RnaBase, now: Instant) {
        let position = self.trainer.cursor();
        match self.trainer.submit_transcription_base(base) {
            Outcome::Advanced => {
                self.feedback = "Correct! Next base.".to_string();
            }
            Outcome::TranscriptComplete => {
                self.feedback = "Well done, the mRNA is complete. On to translation!".to_string();
                self.pending_reveal = Some(PendingReveal {
                    generation: self.trainer.generation(),
                    due: now + REVEAL_DELAY,
                });
            }
            Outcome::Rejected => {
                let template = self.trainer.template()[position];
                self.feedback = format!(
                    "Not quite: {} pairs with {} in RNA.",
                    template,
                    template.transcribes_to()
                );
            }
            Outcome::ProteinComplete | Outcome::Ignored => {}
        }
    }

    /// Submits the highlighted palette entry for the current codon.
    pub fn trainer_submit_choice(&mut self) {
        let Some(codon) = self.trainer.current_codon() else {
            return;
        };
        let code = self.palette[self.palette_index].code;
        match self.trainer.submit_translation_choice(code) {
            Outcome::Advanced => {
                self.feedback =
                    format!("Correct! {} codes for {}.", codon, codon.amino_acid().name);
            }
            Outcome::ProteinComplete => {
                self.feedback = "Congratulations, the protein is complete!".to_string();
            }
            Outcome::Rejected => {
                self.feedback = format!("That is not right. Find {} on the codon wheel.", codon);
            }
            Outcome::TranscriptComplete | Outcome::Ignored => {}
        }
    }

    pub fn palette_prev(&mut self) {
        self.palette_index = self.palette_index.saturating_sub(1);
    }

    pub fn palette_next(&mut self) {
        self.palette_index = (self.palette_index + 1).min(self.palette.len() - 1);
    }

    /// Starts a new game. Any deferred reveal of the old game goes stale
    /// through the generation bump and is discarded on the next tick.
    pub fn trainer_reset(&mut self) {
        self.trainer.reset(&mut self.rng);
        self.wheel_revealed = false;
        self.palette_index = 0;
        self.feedback = self.transcription_prompt();
    }

    // --- quiz -----------------------------------------------------------

    pub fn quiz_answer(&mut self, option: char) {
        self.quiz.answer(option);
    }

    pub fn quiz_advance(&mut self) {
        self.quiz.advance();
    }

    pub fn quiz_reset(&mut self) {
        self.quiz.reset();
    }

    // --- replication explorer -------------------------------------------

    pub fn walkthrough_toggle_overlay(&mut self, slot: u8) {
        let overlay = &mut self.walkthrough.overlay;
        match slot {
            1 => overlay.helicase = !overlay.helicase,
            2 => overlay.primase = !overlay.primase,
            3 => overlay.polymerase = !overlay.polymerase,
            4 => overlay.ligase = !overlay.ligase,
            5 => overlay.labels = !overlay.labels,
            _ => {}
        }
    }

    pub fn glossary_up(&mut self) {
        self.glossary_scroll = self.glossary_scroll.saturating_sub(1);
    }

    pub fn glossary_down(&mut self) {
        self.glossary_scroll = (self.glossary_scroll + 1).min(crate::glossary::GLOSSARY.len() - 1);
    }

    // --- time -----------------------------------------------------------

    /// Applies due deferred work: the codon wheel reveal and walkthrough
    /// autoplay. Called once per controller tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending_reveal {
            if pending.generation != self.trainer.generation() {
                // The session was reset; the reveal is stale.
                self.pending_reveal = None;
            } else if now >= pending.due {
                self.pending_reveal = None;
                self.wheel_revealed = true;
                if let Some(codon) = self.trainer.current_codon() {
                    self.feedback = format!(
                        "Use the codon wheel: which amino acid does {} code for?",
                        codon
                    );
                }
            }
        }

        if self.walkthrough.playing() {
            match self.walkthrough_due {
                None => {
                    self.walkthrough_due = Some(now + self.walkthrough.speed().interval());
                }
                Some(due) if now >= due => {
                    self.walkthrough.next();
                    self.walkthrough_due = self
                        .walkthrough
                        .playing()
                        .then(|| now + self.walkthrough.speed().interval());
                }
                Some(_) => {}
            }
        } else {
            self.walkthrough_due = None;
        }
    }

    /// True while a reveal is scheduled and not yet due or discarded.
    pub fn reveal_pending(&self) -> bool {
        self.pending_reveal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::Stage;

    fn test_state() -> AppState {
        AppState::new(Screen::Trainer, 2, Some(11))
    }

    fn complete_transcription(state: &mut AppState, now: Instant) {
        while state.trainer.stage() == Stage::Transcription {
            let expected = state.trainer.expected_base().unwrap();
            state.trainer_submit_base(expected, now);
        }
    }

    #[test]
    fn test_menu_navigation_clamps_and_selects() {
        let mut state = AppState::new(Screen::Menu, 2, Some(1));
        state.menu_up();
        assert_eq!(state.menu_index, 0);

        for _ in 0..10 {
            state.menu_down();
        }
        assert_eq!(state.menu_index, MENU.len() - 1);
        state.menu_select();
        assert_eq!(state.screen, Screen::Glossary);

        state.go_home();
        state.menu_jump(0);
        assert_eq!(state.screen, Screen::Trainer);
    }

    #[test]
    fn test_reveal_fires_after_delay() {
        let mut state = test_state();
        let t0 = Instant::now();

        complete_transcription(&mut state, t0);
        assert_eq!(state.trainer.stage(), Stage::Translation);
        assert!(state.reveal_pending());
        assert!(!state.wheel_revealed);

        // Not due yet.
        state.tick(t0 + Duration::from_millis(100));
        assert!(!state.wheel_revealed);

        state.tick(t0 + REVEAL_DELAY);
        assert!(state.wheel_revealed);
        assert!(!state.reveal_pending());
        assert!(state.feedback.contains("codon wheel"));
    }

    #[test]
    fn test_stale_reveal_is_discarded_after_reset() {
        let mut state = test_state();
        let t0 = Instant::now();

        complete_transcription(&mut state, t0);
        assert!(state.reveal_pending());

        // Reset before the delay elapses: the scheduled reveal is stale.
        state.trainer_reset();
        state.tick(t0 + REVEAL_DELAY * 2);
        assert!(!state.wheel_revealed);
        assert!(!state.reveal_pending());
        assert_eq!(state.trainer.stage(), Stage::Transcription);
    }

    #[test]
    fn test_palette_selection_clamps() {
        let mut state = test_state();
        state.palette_prev();
        assert_eq!(state.palette_index, 0);
        for _ in 0..100 {
            state.palette_next();
        }
        assert_eq!(state.palette_index, state.palette.len() - 1);
    }

    #[test]
    fn test_choice_feedback_mentions_codon() {
        let mut state = test_state();
        let t0 = Instant::now();
        complete_transcription(&mut state, t0);

        // The first codon is always AUG; pick Met from the palette.
        let met = state.palette.iter().position(|a| a.code == "Met").unwrap();
        state.palette_index = met;
        state.trainer_submit_choice();
        assert!(state.feedback.contains("AUG"));
        assert!(state.trainer.protein()[0].is_some());
    }

    #[test]
    fn test_walkthrough_autoplay_advances_on_tick() {
        let mut state = test_state();
        let t0 = Instant::now();

        state.walkthrough.toggle_play();
        state.tick(t0); // arms the timer
        assert_eq!(state.walkthrough.step(), 0);

        let interval = state.walkthrough.speed().interval();
        state.tick(t0 + interval);
        assert_eq!(state.walkthrough.step(), 1);

        // Pausing clears the timer.
        state.walkthrough.toggle_play();
        state.tick(t0 + interval * 3);
        assert_eq!(state.walkthrough.step(), 1);
    }

    #[test]
    fn test_wrong_base_feedback_names_the_pairing() {
        let mut state = test_state();
        let t0 = Instant::now();

        let expected = state.trainer.expected_base().unwrap();
        let wrong = RnaBase::ALL.into_iter().find(|b| *b != expected).unwrap();
        state.trainer_submit_base(wrong, t0);
        assert!(state.feedback.contains("pairs with"));
        assert_eq!(state.trainer.cursor(), 0);
    }
}
