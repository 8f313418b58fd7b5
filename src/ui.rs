//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Home menu and per-module screens
//! - Colored base and amino acid display for the codon trainer
//! - ASCII replication fork schematic
//! - Status bar with contextual key hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::genetics::{Codon, ResidueClass, RnaBase};
use crate::glossary::GLOSSARY;
use crate::model::{AppState, Screen, MENU};
use crate::quiz::closing_message;
use crate::replication::{fork_diagram, MODEL_PREDICTIONS, LAGGING_STRAND, LEADING_STRAND};
use crate::replication::{COMPARISON_INTRO, SELF_TEST_ANSWER, SELF_TEST_QUESTION, WALKTHROUGH_STEPS};
use crate::trainer::Stage;

/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Columns per codon in the trainer sequence rows.
const CODON_CELL_WIDTH: usize = 5;

/// Color scheme for sequence characters.
///
/// This trait allows different schemes for the DNA and RNA rows.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// DNA nucleotide color scheme.
pub struct DnaColorScheme;

impl ColorScheme for DnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// RNA nucleotide color scheme. U takes over T's slot.
pub struct RnaColorScheme;

impl ColorScheme for RnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'U' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Palette color for an amino acid grouping.
pub fn class_color(class: ResidueClass) -> Color {
    match class {
        ResidueClass::Hydrophobic => Color::Yellow,
        ResidueClass::Polar => Color::Green,
        ResidueClass::Basic => Color::Blue,
        ResidueClass::Acidic => Color::Red,
        ResidueClass::Stop => Color::Magenta,
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);

    let content = main_layout[0];
    match state.screen {
        Screen::Menu => render_menu(frame, state, content),
        Screen::Trainer => render_trainer(frame, state, content),
        Screen::Walkthrough => render_walkthrough(frame, state, content),
        Screen::Meselson => render_meselson(frame, state, content),
        Screen::Comparison => render_comparison(frame, state, content),
        Screen::Quiz => render_quiz(frame, state, content),
        Screen::Glossary => render_glossary(frame, state, content),
    }
    render_status_bar(frame, state, main_layout[1]);
}

fn wrapped_lines(text: &str, width: usize) -> Vec<Line<'static>> {
    textwrap::wrap(text, width.max(20))
        .into_iter()
        .map(|s| Line::from(s.into_owned()))
        .collect()
}

// --- menu ---------------------------------------------------------------

fn render_menu(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "BioTUI — molecular biology trainer",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, entry) in MENU.iter().enumerate() {
        let selected = i == state.menu_index;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}. {}", marker, i + 1, entry.title), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", entry.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title("Modules");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// --- codon trainer ------------------------------------------------------

/// Fixed-width cell for one codon of the protein row.
pub(crate) fn amino_slot(code: Option<&str>) -> String {
    format!("{:<width$}", code.unwrap_or("..."), width = CODON_CELL_WIDTH)
}

/// The sixteen codons sharing a first base, in second/third base order.
pub(crate) fn quadrant_codons(first: RnaBase) -> Vec<(String, &'static str)> {
    let mut entries = Vec::with_capacity(16);
    for second in RnaBase::ALL {
        for third in RnaBase::ALL {
            let codon = Codon::new(first, second, third);
            entries.push((codon.to_string(), codon.amino_acid().code));
        }
    }
    entries
}

fn render_trainer(frame: &mut Frame, state: &AppState, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // stage header
            Constraint::Length(5), // sequences
            Constraint::Length(3), // feedback
            Constraint::Min(4),    // controls / palette / wheel
        ])
        .split(area);

    render_stage_header(frame, state, layout[0]);
    render_sequences(frame, state, layout[1]);

    let feedback = Paragraph::new(wrapped_lines(&state.feedback, layout[2].width.saturating_sub(2) as usize))
        .block(Block::default().borders(Borders::ALL).title("Feedback"));
    frame.render_widget(feedback, layout[2]);

    match state.trainer.stage() {
        Stage::Transcription => render_base_controls(frame, layout[3]),
        Stage::Translation => render_translation_controls(frame, state, layout[3]),
    }
}

fn render_stage_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let active = Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);
    let (s1, s2) = match state.trainer.stage() {
        Stage::Transcription => (active, inactive),
        Stage::Translation => (inactive, active),
    };
    let line = Line::from(vec![
        Span::styled(" 1. Transcription ", s1),
        Span::raw("  "),
        Span::styled(" 2. Translation ", s2),
    ]);
    let block = Block::default().borders(Borders::ALL).title("Protein synthesis");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_sequences(frame: &mut Frame, state: &AppState, area: Rect) {
    let dna_scheme = DnaColorScheme;
    let rna_scheme = RnaColorScheme;
    let trainer = &state.trainer;
    let cursor = trainer.cursor();
    let in_transcription = trainer.stage() == Stage::Transcription;

    let mut dna_spans = vec![Span::styled("DNA     ", Style::default().fg(Color::DarkGray))];
    let mut rna_spans = vec![Span::styled("mRNA    ", Style::default().fg(Color::DarkGray))];
    let mut protein_spans = vec![Span::styled("Protein ", Style::default().fg(Color::DarkGray))];

    for (i, base) in trainer.template().iter().enumerate() {
        let c = base.as_char();
        let codon_index = i / 3;
        let gap = if i % 3 == 2 { "  " } else { "" };

        let mut dna_style = Style::default().fg(dna_scheme.get_color(c));
        if in_transcription && i == cursor {
            dna_style = dna_style.bg(Color::White).add_modifier(Modifier::BOLD);
        }
        dna_spans.push(Span::styled(c.to_string(), dna_style));
        dna_spans.push(Span::raw(gap));

        let (rna_char, mut rna_style) = match trainer.transcript()[i] {
            Some(base) => {
                let c = base.as_char();
                (c, Style::default().fg(rna_scheme.get_color(c)))
            }
            None => ('?', Style::default().fg(Color::DarkGray)),
        };
        let codon_is_current = !in_transcription && codon_index == cursor;
        if (in_transcription && i == cursor) || codon_is_current {
            rna_style = rna_style.bg(Color::White).add_modifier(Modifier::BOLD);
        }
        rna_spans.push(Span::styled(rna_char.to_string(), rna_style));
        rna_spans.push(Span::raw(gap));
    }

    for (codon_index, slot) in trainer.protein().iter().enumerate() {
        let mut style = match slot {
            Some(amino) => Style::default().fg(class_color(amino.class)),
            None => Style::default().fg(Color::DarkGray),
        };
        if !in_transcription && codon_index == cursor {
            style = style.add_modifier(Modifier::BOLD);
        }
        protein_spans.push(Span::styled(amino_slot(slot.map(|a| a.code)), style));
    }

    let block = Block::default().borders(Borders::ALL).title("Sequences");
    let paragraph = Paragraph::new(vec![
        Line::from(dna_spans),
        Line::from(rna_spans),
        Line::from(protein_spans),
    ])
    .block(block);
    frame.render_widget(paragraph, area);
}

fn render_base_controls(frame: &mut Frame, area: Rect) {
    let scheme = RnaColorScheme;
    let mut spans = vec![Span::raw("Choose the pairing RNA base:  ")];
    for base in RnaBase::ALL {
        let c = base.as_char();
        spans.push(Span::styled(
            format!(" {} ", c.to_ascii_lowercase()),
            Style::default().fg(Color::Black).bg(scheme.get_color(c)),
        ));
        spans.push(Span::raw("  "));
    }
    let lines = vec![Line::from(spans), Line::from(""), Line::from("r starts a new game")];
    let block = Block::default().borders(Borders::ALL).title("Controls");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_translation_controls(frame: &mut Frame, state: &AppState, area: Rect) {
    if !state.wheel_revealed {
        let lines = vec![
            Line::from("The mRNA is ready."),
            Line::from("The codon wheel appears in a moment..."),
        ];
        let block = Block::default().borders(Borders::ALL).title("Translation");
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    // Palette of distinct amino acid codes.
    let mut spans = Vec::new();
    for (i, amino) in state.palette.iter().enumerate() {
        let mut style = Style::default().fg(Color::Black).bg(class_color(amino.class));
        if i == state.palette_index {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", amino.code), style));
        spans.push(Span::raw(" "));
    }
    let current = state
        .trainer
        .current_codon()
        .map(|c| c.to_string())
        .unwrap_or_default();
    let palette_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Pick the amino acid for {} (h/l + Enter)", current));
    frame.render_widget(
        Paragraph::new(vec![Line::from(spans)]).wrap(ratatui::widgets::Wrap { trim: false }).block(palette_block),
        layout[0],
    );

    // One quadrant of the codon wheel: all codons sharing the first base.
    if let Some(codon) = state.trainer.current_codon() {
        let first = codon.bases()[0];
        let mut lines = Vec::new();
        for chunk in quadrant_codons(first).chunks(4) {
            let mut spans = Vec::new();
            for (codon_str, code) in chunk {
                let highlight = *codon_str == current;
                let mut style = Style::default();
                if highlight {
                    style = style.bg(Color::White).fg(Color::Black).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!("{} {:<4}", codon_str, code), style));
                spans.push(Span::raw("   "));
            }
            lines.push(Line::from(spans));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Codon wheel — {}.. quadrant (full chart: --export-wheel)", first));
        frame.render_widget(Paragraph::new(lines).block(block), layout[1]);
    }
}

// --- replication explorer -----------------------------------------------

fn render_walkthrough(frame: &mut Frame, state: &AppState, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // diagram
            Constraint::Length(4), // caption
            Constraint::Min(3),    // controls
        ])
        .split(area);

    let w = &state.walkthrough;
    let diagram: Vec<Line> = fork_diagram(w.step(), w.overlay)
        .into_iter()
        .map(Line::from)
        .collect();
    let title = format!("Replication fork — step {}/{}", w.step(), WALKTHROUGH_STEPS.len() - 1);
    frame.render_widget(
        Paragraph::new(diagram).block(Block::default().borders(Borders::ALL).title(title)),
        layout[0],
    );

    frame.render_widget(
        Paragraph::new(wrapped_lines(w.caption(), layout[1].width.saturating_sub(2) as usize))
            .block(Block::default().borders(Borders::ALL).title("What happens here")),
        layout[1],
    );

    let overlay = w.overlay;
    let toggle = |on: bool| if on { "on" } else { "off" };
    let lines = vec![
        Line::from(format!(
            "h/l step   Space {}   +/- tempo ({})   r restart",
            if w.playing() { "pause" } else { "autoplay" },
            w.speed().label()
        )),
        Line::from(format!(
            "markers: 1 helicase ({})  2 primase ({})  3 polymerase ({})  4 ligase ({})  5 labels ({})",
            toggle(overlay.helicase),
            toggle(overlay.primase),
            toggle(overlay.polymerase),
            toggle(overlay.ligase),
            toggle(overlay.labels),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Controls")),
        layout[2],
    );
}

/// Text gauge for one density band, 20 columns at full scale.
fn band_line(label: &str, percent: u8, color: Color) -> Line<'static> {
    let filled = (percent as usize) / 5;
    Line::from(vec![
        Span::styled(format!("{:<7}", label), Style::default().fg(Color::DarkGray)),
        Span::styled("#".repeat(filled), Style::default().fg(color)),
        Span::raw(" ".repeat(20 - filled)),
        Span::raw(format!(" {:>3}%", percent)),
    ])
}

fn render_meselson(frame: &mut Frame, state: &AppState, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // bands
            Constraint::Length(5), // description
            Constraint::Min(3),    // interpretation table
        ])
        .split(area);

    let phase = state.meselson.phase();
    let lines = vec![
        band_line("heavy", phase.composition.heavy, Color::Magenta),
        band_line("hybrid", phase.composition.hybrid, Color::Cyan),
        band_line("light", phase.composition.light, Color::Yellow),
        Line::from(Span::styled(
            phase.label,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let title = format!(
        "Meselson-Stahl — {} ({}/{})",
        phase.title,
        state.meselson.step() + 1,
        crate::replication::MESELSON_PHASES.len()
    );
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        layout[0],
    );

    frame.render_widget(
        Paragraph::new(wrapped_lines(phase.description, layout[1].width.saturating_sub(2) as usize))
            .block(Block::default().borders(Borders::ALL).title("Centrifugation result")),
        layout[1],
    );

    if state.meselson.is_last() {
        let mut lines = vec![Line::from(Span::styled(
            format!("{:<18}{:<24}{}", "Model", "Generation 1", "Generation 2"),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for (model, gen1, gen2) in MODEL_PREDICTIONS {
            let style = if model == "Semiconservative" {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(Span::styled(
                format!("{:<18}{:<24}{}", model, gen1, gen2),
                style,
            )));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Three models, one survivor")),
            layout[2],
        );
    } else {
        frame.render_widget(
            Paragraph::new("h/l to step through the experiment, r to restart")
                .block(Block::default().borders(Borders::ALL)),
            layout[2],
        );
    }
}

fn render_comparison(frame: &mut Frame, state: &AppState, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // intro
            Constraint::Min(6),    // two cards
            Constraint::Length(5), // self-test
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(wrapped_lines(COMPARISON_INTRO, layout[0].width.saturating_sub(2) as usize))
            .block(Block::default().borders(Borders::ALL).title("Leading vs. lagging strand")),
        layout[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    for (facts, area, color) in [
        (&LEADING_STRAND, cards[0], Color::Green),
        (&LAGGING_STRAND, cards[1], Color::Red),
    ] {
        let mut lines = vec![
            Line::from(Span::styled(facts.subtitle, Style::default().fg(color))),
            Line::from(""),
        ];
        for point in facts.points {
            lines.push(Line::from(format!("- {}", point)));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(facts.title)),
            area,
        );
    }

    let answer: Vec<Line> = if state.comparison.answer_revealed {
        wrapped_lines(SELF_TEST_ANSWER, layout[2].width.saturating_sub(2) as usize)
    } else {
        vec![Line::from(Span::styled(
            "Press Enter to reveal the answer.",
            Style::default().fg(Color::DarkGray),
        ))]
    };
    let mut lines = wrapped_lines(SELF_TEST_QUESTION, layout[2].width.saturating_sub(2) as usize);
    lines.extend(answer);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Self-test")),
        layout[2],
    );
}

// --- quiz ---------------------------------------------------------------

fn render_quiz(frame: &mut Frame, state: &AppState, area: Rect) {
    let quiz = &state.quiz;

    if quiz.finished() {
        let lines = vec![
            Line::from(Span::styled(
                format!("Result: {} / {}", quiz.score(), quiz.total()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(closing_message(quiz.score(), quiz.total())),
            Line::from(""),
            Line::from(Span::styled("r starts a new run", Style::default().fg(Color::DarkGray))),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Quiz result")),
            area,
        );
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // question
            Constraint::Length(6), // options
            Constraint::Min(3),    // feedback
        ])
        .split(area);

    let question = quiz.question();
    let title = format!(
        "Question {} of {}  |  Score: {}",
        quiz.index() + 1,
        quiz.total(),
        quiz.score()
    );
    frame.render_widget(
        Paragraph::new(wrapped_lines(question.question, layout[0].width.saturating_sub(2) as usize))
            .block(Block::default().borders(Borders::ALL).title(title)),
        layout[0],
    );

    let mut option_lines = Vec::new();
    for option in &question.options {
        let style = match quiz.selected() {
            None => Style::default(),
            Some(_) if option.id == question.correct => {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            }
            Some(selected) if option.id == selected => Style::default().fg(Color::Red),
            Some(_) => Style::default().fg(Color::DarkGray),
        };
        option_lines.push(Line::from(Span::styled(
            format!("{}) {}", option.id, option.text),
            style,
        )));
    }
    frame.render_widget(
        Paragraph::new(option_lines)
            .block(Block::default().borders(Borders::ALL).title("a-d to answer")),
        layout[1],
    );

    let feedback: Vec<Line> = match quiz.selected() {
        None => vec![Line::from(Span::styled(
            "Pick an answer.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(selected) => {
            let correct = selected == question.correct;
            let text = if correct { question.feedback_correct } else { question.feedback_wrong };
            let mut lines = vec![Line::from(Span::styled(
                if correct { "Correct!" } else { "Wrong!" },
                Style::default()
                    .fg(if correct { Color::Green } else { Color::Red })
                    .add_modifier(Modifier::BOLD),
            ))];
            lines.extend(wrapped_lines(text, layout[2].width.saturating_sub(2) as usize));
            lines.push(Line::from(Span::styled(
                "Enter continues",
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
    };
    frame.render_widget(
        Paragraph::new(feedback).block(Block::default().borders(Borders::ALL).title("Feedback")),
        layout[2],
    );
}

// --- glossary -----------------------------------------------------------

fn render_glossary(frame: &mut Frame, state: &AppState, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for entry in GLOSSARY.iter().skip(state.glossary_scroll) {
        lines.push(Line::from(Span::styled(
            entry.term,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for wrapped in textwrap::wrap(entry.definition, width) {
            lines.push(Line::from(format!("  {}", wrapped)));
        }
        lines.push(Line::from(""));
    }
    let title = format!("Glossary ({}/{})", state.glossary_scroll + 1, GLOSSARY.len());
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

// --- status bar ---------------------------------------------------------

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (name, hints) = match state.screen {
        Screen::Menu => ("MENU", "j/k + Enter select | 1-6 jump | q quit"),
        Screen::Trainer => ("TRAINER", "Esc menu | r new game | q quit"),
        Screen::Walkthrough => ("WALKTHROUGH", "h/l step | Space play | Esc menu"),
        Screen::Meselson => ("MESELSON-STAHL", "h/l step | r restart | Esc menu"),
        Screen::Comparison => ("COMPARISON", "Enter reveal | Esc menu"),
        Screen::Quiz => ("QUIZ", "a-d answer | Enter next | r restart | Esc menu"),
        Screen::Glossary => ("GLOSSARY", "j/k scroll | Esc menu"),
    };

    let left_content = format!(" {} | {} ", name, hints);
    let left_len = left_content.len();
    let status_line = Line::from(vec![
        Span::styled(left_content, Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len)),
            Style::default().bg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(status_line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_colors() {
        let dna = DnaColorScheme;
        assert_eq!(dna.get_color('A'), Color::Red);
        assert_eq!(dna.get_color('a'), Color::Red); // Case insensitive
        assert_eq!(dna.get_color('T'), Color::Blue);
        assert_eq!(dna.get_color('N'), Color::DarkGray);

        let rna = RnaColorScheme;
        assert_eq!(rna.get_color('U'), Color::Blue);
        assert_eq!(rna.get_color('T'), Color::DarkGray);
    }

    #[test]
    fn test_class_colors_are_distinct() {
        let classes = [
            ResidueClass::Hydrophobic,
            ResidueClass::Polar,
            ResidueClass::Basic,
            ResidueClass::Acidic,
            ResidueClass::Stop,
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(class_color(*a), class_color(*b));
            }
        }
    }

    #[test]
    fn test_amino_slot_width() {
        assert_eq!(amino_slot(Some("Met")), "Met  ");
        assert_eq!(amino_slot(Some("STOP")), "STOP ");
        assert_eq!(amino_slot(None), "...  ");
    }

    #[test]
    fn test_quadrant_lists_sixteen_codons() {
        let quadrant = quadrant_codons(RnaBase::A);
        assert_eq!(quadrant.len(), 16);
        assert!(quadrant.iter().any(|(codon, code)| codon == "AUG" && *code == "Met"));
        assert!(quadrant.iter().all(|(codon, _)| codon.starts_with('A')));
    }

    #[test]
    fn test_band_line_scale() {
        let full = band_line("heavy", 100, Color::Magenta);
        let text: String = full.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains(&"#".repeat(20)));
        assert!(text.contains("100%"));

        let half = band_line("light", 50, Color::Yellow);
        let text: String = half.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains(&"#".repeat(10)));
        assert!(!text.contains(&"#".repeat(11)));
    }
}
