//! Keyboard event handling.
//!
//! Key bindings per screen:
//! - Menu: `j`/`k` or arrows to move, `Enter` to open, `1`-`6` to jump
//! - Trainer: `a`/`u`/`g`/`c` submit a base; `h`/`l` + `Enter` pick an
//!   amino acid; `r` starts a new game
//! - Walkthrough: `h`/`l` step, `Space` autoplay, `+`/`-` tempo,
//!   `1`-`5` toggle enzyme markers, `r` restart
//! - Meselson-Stahl: `h`/`l` step, `r` restart
//! - Comparison: `Enter` reveals the self-test answer
//! - Quiz: `a`-`d` (or `1`-`4`) answer, `Enter` next question, `r` restart
//! - Everywhere: `Esc` back to the menu, `q` or `Ctrl+C` quits

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::genetics::RnaBase;
use crate::model::{AppState, Screen};
use crate::trainer::Stage;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Return to the home menu
    GoHome,
    /// Move the menu selection up
    MenuUp,
    /// Move the menu selection down
    MenuDown,
    /// Open the selected menu entry
    MenuSelect,
    /// Jump to a menu entry by index
    MenuJump(usize),
    /// Submit an mRNA base in the transcription stage
    SubmitBase(RnaBase),
    /// Move the amino acid palette selection left
    PalettePrev,
    /// Move the amino acid palette selection right
    PaletteNext,
    /// Submit the selected amino acid
    PaletteConfirm,
    /// Start a new trainer game
    TrainerReset,
    /// Answer the current quiz question
    QuizAnswer(char),
    /// Advance to the next quiz question (or the result)
    QuizNext,
    /// Restart the quiz
    QuizReset,
    /// Next walkthrough / Meselson step
    StepNext,
    /// Previous walkthrough / Meselson step
    StepPrev,
    /// Back to the first step
    StepReset,
    /// Start or pause walkthrough autoplay
    TogglePlay,
    /// Faster autoplay
    SpeedUp,
    /// Slower autoplay
    SpeedDown,
    /// Toggle an enzyme overlay slot (1-5)
    ToggleOverlay(u8),
    /// Reveal or hide the comparison self-test answer
    ToggleAnswer,
    /// Scroll up (glossary)
    ScrollUp,
    /// Scroll down (glossary)
    ScrollDown,
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action for the current screen.
pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Key(key) => handle_key_event(key, state),
        _ => Action::None,
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if key.code == KeyCode::Char('q') {
        return Action::Quit;
    }
    if key.code == KeyCode::Esc {
        return if state.screen == Screen::Menu {
            Action::Quit
        } else {
            Action::GoHome
        };
    }

    match state.screen {
        Screen::Menu => handle_menu(key),
        Screen::Trainer => handle_trainer(key, state.trainer.stage()),
        Screen::Walkthrough => handle_walkthrough(key),
        Screen::Meselson => handle_meselson(key),
        Screen::Comparison => handle_comparison(key),
        Screen::Quiz => handle_quiz(key, state.quiz.finished()),
        Screen::Glossary => handle_glossary(key),
    }
}

fn handle_menu(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
        KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
        KeyCode::Enter => Action::MenuSelect,
        KeyCode::Char(c @ '1'..='6') => Action::MenuJump(c as usize - '1' as usize),
        _ => Action::None,
    }
}

fn handle_trainer(key: KeyEvent, stage: Stage) -> Action {
    if key.code == KeyCode::Char('r') {
        return Action::TrainerReset;
    }
    match stage {
        Stage::Transcription => match key.code {
            KeyCode::Char('a') => Action::SubmitBase(RnaBase::A),
            KeyCode::Char('u') => Action::SubmitBase(RnaBase::U),
            KeyCode::Char('g') => Action::SubmitBase(RnaBase::G),
            KeyCode::Char('c') => Action::SubmitBase(RnaBase::C),
            _ => Action::None,
        },
        Stage::Translation => match key.code {
            KeyCode::Char('h') | KeyCode::Left => Action::PalettePrev,
            KeyCode::Char('l') | KeyCode::Right => Action::PaletteNext,
            KeyCode::Enter | KeyCode::Char(' ') => Action::PaletteConfirm,
            _ => Action::None,
        },
    }
}

fn handle_walkthrough(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => Action::StepNext,
        KeyCode::Char('h') | KeyCode::Left => Action::StepPrev,
        KeyCode::Char(' ') => Action::TogglePlay,
        KeyCode::Char('r') => Action::StepReset,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::SpeedUp,
        KeyCode::Char('-') => Action::SpeedDown,
        KeyCode::Char(c @ '1'..='5') => Action::ToggleOverlay(c as u8 - b'0'),
        _ => Action::None,
    }
}

fn handle_meselson(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => Action::StepNext,
        KeyCode::Char('h') | KeyCode::Left => Action::StepPrev,
        KeyCode::Char('r') => Action::StepReset,
        _ => Action::None,
    }
}

fn handle_comparison(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleAnswer,
        _ => Action::None,
    }
}

fn handle_quiz(key: KeyEvent, finished: bool) -> Action {
    if key.code == KeyCode::Char('r') {
        return Action::QuizReset;
    }
    if finished {
        return Action::None;
    }
    match key.code {
        KeyCode::Char(c @ 'a'..='d') => Action::QuizAnswer(c.to_ascii_uppercase()),
        KeyCode::Char(c @ '1'..='4') => {
            Action::QuizAnswer((b'A' + (c as u8 - b'1')) as char)
        }
        KeyCode::Enter => Action::QuizNext,
        _ => Action::None,
    }
}

fn handle_glossary(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action, now: Instant) -> bool {
    match action {
        Action::None => {}
        Action::Quit => state.quit(),
        Action::GoHome => state.go_home(),
        Action::MenuUp => state.menu_up(),
        Action::MenuDown => state.menu_down(),
        Action::MenuSelect => state.menu_select(),
        Action::MenuJump(index) => state.menu_jump(index),
        Action::SubmitBase(base) => state.trainer_submit_base(base, now),
        Action::PalettePrev => state.palette_prev(),
        Action::PaletteNext => state.palette_next(),
        Action::PaletteConfirm => state.trainer_submit_choice(),
        Action::TrainerReset => state.trainer_reset(),
        Action::QuizAnswer(option) => state.quiz_answer(option),
        Action::QuizNext => state.quiz_advance(),
        Action::QuizReset => state.quiz_reset(),
        Action::StepNext => match state.screen {
            Screen::Meselson => state.meselson.next(),
            _ => state.walkthrough.next(),
        },
        Action::StepPrev => match state.screen {
            Screen::Meselson => state.meselson.prev(),
            _ => state.walkthrough.prev(),
        },
        Action::StepReset => match state.screen {
            Screen::Meselson => state.meselson.reset(),
            _ => state.walkthrough.reset(),
        },
        Action::TogglePlay => state.walkthrough.toggle_play(),
        Action::SpeedUp => state.walkthrough.speed_up(),
        Action::SpeedDown => state.walkthrough.speed_down(),
        Action::ToggleOverlay(slot) => state.walkthrough_toggle_overlay(slot),
        Action::ToggleAnswer => state.comparison.toggle_answer(),
        Action::ScrollUp => state.glossary_up(),
        Action::ScrollDown => state.glossary_down(),
    }

    !state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on(screen: Screen) -> AppState {
        let mut state = AppState::new(Screen::Menu, 2, Some(5));
        state.screen = screen;
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_keys() {
        let state = state_on(Screen::Menu);

        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &state), Action::MenuDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('k')), &state), Action::MenuUp);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &state), Action::MenuSelect);
        assert_eq!(handle_key_event(key(KeyCode::Char('3')), &state), Action::MenuJump(2));
        assert_eq!(handle_key_event(key(KeyCode::Esc), &state), Action::Quit);
    }

    #[test]
    fn test_trainer_keys_follow_stage() {
        let state = state_on(Screen::Trainer);

        // Transcription: the four base keys submit.
        assert_eq!(
            handle_key_event(key(KeyCode::Char('a')), &state),
            Action::SubmitBase(RnaBase::A)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('u')), &state),
            Action::SubmitBase(RnaBase::U)
        );
        // Palette keys are inert during transcription.
        assert_eq!(handle_key_event(key(KeyCode::Enter), &state), Action::None);
        assert_eq!(handle_key_event(key(KeyCode::Char('r')), &state), Action::TrainerReset);

        // Translation: palette navigation takes over.
        let mut state = state;
        let t0 = Instant::now();
        while state.trainer.stage() == Stage::Transcription {
            let expected = state.trainer.expected_base().unwrap();
            state.trainer_submit_base(expected, t0);
        }
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &state), Action::PalettePrev);
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &state), Action::PaletteNext);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &state), Action::PaletteConfirm);
        assert_eq!(handle_key_event(key(KeyCode::Char('a')), &state), Action::None);
    }

    #[test]
    fn test_walkthrough_keys() {
        let state = state_on(Screen::Walkthrough);

        assert_eq!(handle_key_event(key(KeyCode::Right), &state), Action::StepNext);
        assert_eq!(handle_key_event(key(KeyCode::Left), &state), Action::StepPrev);
        assert_eq!(handle_key_event(key(KeyCode::Char(' ')), &state), Action::TogglePlay);
        assert_eq!(handle_key_event(key(KeyCode::Char('+')), &state), Action::SpeedUp);
        assert_eq!(handle_key_event(key(KeyCode::Char('2')), &state), Action::ToggleOverlay(2));
        assert_eq!(handle_key_event(key(KeyCode::Esc), &state), Action::GoHome);
    }

    #[test]
    fn test_quiz_keys() {
        let state = state_on(Screen::Quiz);

        assert_eq!(handle_key_event(key(KeyCode::Char('b')), &state), Action::QuizAnswer('B'));
        assert_eq!(handle_key_event(key(KeyCode::Char('1')), &state), Action::QuizAnswer('A'));
        assert_eq!(handle_key_event(key(KeyCode::Char('4')), &state), Action::QuizAnswer('D'));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &state), Action::QuizNext);
        assert_eq!(handle_key_event(key(KeyCode::Char('r')), &state), Action::QuizReset);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for screen in [Screen::Menu, Screen::Trainer, Screen::Quiz, Screen::Glossary] {
            let state = state_on(screen);
            let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(handle_key_event(key, &state), Action::Quit);
        }
    }

    #[test]
    fn test_apply_action_routes_step_keys_by_screen() {
        let now = Instant::now();

        let mut state = state_on(Screen::Meselson);
        apply_action(&mut state, Action::StepNext, now);
        assert_eq!(state.meselson.step(), 1);
        assert_eq!(state.walkthrough.step(), 0);

        let mut state = state_on(Screen::Walkthrough);
        apply_action(&mut state, Action::StepNext, now);
        assert_eq!(state.walkthrough.step(), 1);
        assert_eq!(state.meselson.step(), 0);
    }

    #[test]
    fn test_apply_quit_stops_the_loop() {
        let mut state = state_on(Screen::Menu);
        assert!(apply_action(&mut state, Action::None, Instant::now()));
        assert!(!apply_action(&mut state, Action::Quit, Instant::now()));
    }
}
