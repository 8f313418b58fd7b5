//! Replication quiz: a fixed question bank and a small scoring session.

/// One answer option, addressed by its letter id.
#[derive(Debug, Clone, Copy)]
pub struct QuizOption {
    pub id: char,
    pub text: &'static str,
}

/// A multiple-choice question with canned feedback for both outcomes.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [QuizOption; 4],
    pub correct: char,
    pub feedback_correct: &'static str,
    pub feedback_wrong: &'static str,
}

/// The fixed 10-question bank on DNA replication.
pub static QUIZ_QUESTIONS: [QuizQuestion; 10] = [
    QuizQuestion {
        question: "What did the Meselson-Stahl experiment prove?",
        options: [
            QuizOption { id: 'A', text: "DNA is a double helix" },
            QuizOption { id: 'B', text: "Replication is semiconservative" },
            QuizOption { id: 'C', text: "DNA polymerase needs a primer" },
            QuizOption { id: 'D', text: "Okazaki fragments exist" },
        ],
        correct: 'B',
        feedback_correct: "Correct! After one round of replication every DNA molecule was hybrid.",
        feedback_wrong: "Not quite. The point was that each old strand serves as a template (semiconservative).",
    },
    QuizQuestion {
        question: "What is the function of helicase?",
        options: [
            QuizOption { id: 'A', text: "Joins Okazaki fragments" },
            QuizOption { id: 'B', text: "Synthesizes RNA primers" },
            QuizOption { id: 'C', text: "Separates the DNA strands" },
            QuizOption { id: 'D', text: "Adds nucleotides" },
        ],
        correct: 'C',
        feedback_correct: "Right! Helicase unzips the double helix.",
        feedback_wrong: "Helicase is the zipper-opener at the start.",
    },
    QuizQuestion {
        question: "In which direction does DNA polymerase synthesize?",
        options: [
            QuizOption { id: 'A', text: "3'->5'" },
            QuizOption { id: 'B', text: "5'->3'" },
            QuizOption { id: 'C', text: "Both directions" },
            QuizOption { id: 'D', text: "It varies" },
        ],
        correct: 'B',
        feedback_correct: "Correct! Always from 5' to 3'.",
        feedback_wrong: "Chemistry only allows adding to the 3'-OH end, so the strand grows 5'->3'.",
    },
    QuizQuestion {
        question: "Why is an RNA primer necessary?",
        options: [
            QuizOption { id: 'A', text: "RNA is more stable" },
            QuizOption { id: 'B', text: "Polymerase cannot start on its own" },
            QuizOption { id: 'C', text: "It prevents errors" },
            QuizOption { id: 'D', text: "It marks the end" },
        ],
        correct: 'B',
        feedback_correct: "Exactly! The polymerase needs a free 3' end to start from.",
        feedback_wrong: "The polymerase cannot start from nothing; it needs a foothold (the primer).",
    },
    QuizQuestion {
        question: "Why is the leading strand synthesized continuously?",
        options: [
            QuizOption { id: 'A', text: "It is shorter" },
            QuizOption { id: 'B', text: "Synthesis direction matches the fork movement" },
            QuizOption { id: 'C', text: "It needs no primer" },
            QuizOption { id: 'D', text: "It is more important" },
        ],
        correct: 'B',
        feedback_correct: "Right! The polymerase simply follows the helicase.",
        feedback_wrong: "It is about direction: the fork opens the same way the synthesis runs.",
    },
    QuizQuestion {
        question: "What are Okazaki fragments?",
        options: [
            QuizOption { id: 'A', text: "Primers on the leading strand" },
            QuizOption { id: 'B', text: "Short DNA pieces on the lagging strand" },
            QuizOption { id: 'C', text: "Replication errors" },
            QuizOption { id: 'D', text: "Enzymes" },
        ],
        correct: 'B',
        feedback_correct: "Correct! They arise from discontinuous synthesis.",
        feedback_wrong: "They are the short pieces on the lagging strand.",
    },
    QuizQuestion {
        question: "What is the function of DNA ligase?",
        options: [
            QuizOption { id: 'A', text: "Opens the helix" },
            QuizOption { id: 'B', text: "Adds nucleotides" },
            QuizOption { id: 'C', text: "Joins fragments" },
            QuizOption { id: 'D', text: "Makes primers" },
        ],
        correct: 'C',
        feedback_correct: "Right! It is the molecular glue.",
        feedback_wrong: "It connects the Okazaki fragments at the end.",
    },
    QuizQuestion {
        question: "Why are there a leading and a lagging strand?",
        options: [
            QuizOption { id: 'A', text: "Because DNA is a double helix" },
            QuizOption { id: 'B', text: "Antiparallel strands plus the 5'->3' constraint" },
            QuizOption { id: 'C', text: "Different enzymes" },
            QuizOption { id: 'D', text: "Coincidence" },
        ],
        correct: 'B',
        feedback_correct: "Excellent! A combination of structure and enzyme chemistry.",
        feedback_wrong: "The strands are antiparallel, but the polymerase only works one way.",
    },
    QuizQuestion {
        question: "What happens to the RNA primers?",
        options: [
            QuizOption { id: 'A', text: "They stay in place" },
            QuizOption { id: 'B', text: "They are removed and replaced by DNA" },
            QuizOption { id: 'C', text: "They become proteins" },
            QuizOption { id: 'D', text: "They mark the end" },
        ],
        correct: 'B',
        feedback_correct: "Correct! The finished DNA should contain no RNA.",
        feedback_wrong: "They are swapped out for DNA building blocks.",
    },
    QuizQuestion {
        question: "What does 'semiconservative' mean?",
        options: [
            QuizOption { id: 'A', text: "Replicated by half" },
            QuizOption { id: 'B', text: "Parent strands stay together" },
            QuizOption { id: 'C', text: "One old plus one new strand per molecule" },
            QuizOption { id: 'D', text: "Only at certain sites" },
        ],
        correct: 'C',
        feedback_correct: "Perfect! Half (semi) is preserved (conservative).",
        feedback_wrong: "Every new double strand keeps one old strand as its template.",
    },
];

/// Closing message picked from the final score.
///
/// All correct earns the top message, at least 7 the middle one, anything
/// less the encouragement.
pub fn closing_message(score: usize, total: usize) -> &'static str {
    if score == total {
        "Perfect! You are a DNA expert!"
    } else if score >= 7 {
        "Well done! You understood most of it."
    } else {
        "Practice makes perfect. Revisit the walkthrough and try again."
    }
}

/// Index-stepping quiz state: current question, selection, running score.
#[derive(Debug)]
pub struct QuizSession {
    index: usize,
    selected: Option<char>,
    score: usize,
    finished: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            index: 0,
            selected: None,
            score: 0,
            finished: false,
        }
    }

    pub fn question(&self) -> &'static QuizQuestion {
        &QUIZ_QUESTIONS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        QUIZ_QUESTIONS.len()
    }

    pub fn selected(&self) -> Option<char> {
        self.selected
    }

    pub fn answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Records an answer for the current question. Only the first answer per
    /// question counts; later clicks are ignored.
    pub fn answer(&mut self, option: char) {
        if self.finished || self.answered() {
            return;
        }
        let option = option.to_ascii_uppercase();
        if !self.question().options.iter().any(|o| o.id == option) {
            return;
        }
        if option == self.question().correct {
            self.score += 1;
        }
        self.selected = Some(option);
    }

    /// Moves to the next question, or finishes the quiz after the last one.
    /// Requires the current question to be answered.
    pub fn advance(&mut self) {
        if self.finished || !self.answered() {
            return;
        }
        if self.index + 1 < QUIZ_QUESTIONS.len() {
            self.index += 1;
            self.selected = None;
        } else {
            self.finished = true;
        }
    }

    /// Starts a fresh run.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_shape() {
        assert_eq!(QUIZ_QUESTIONS.len(), 10);
        for q in &QUIZ_QUESTIONS {
            assert!(q.options.iter().any(|o| o.id == q.correct));
            let ids: Vec<char> = q.options.iter().map(|o| o.id).collect();
            assert_eq!(ids, ['A', 'B', 'C', 'D']);
        }
    }

    #[test]
    fn test_all_correct_scores_ten_with_top_message() {
        let mut quiz = QuizSession::new();
        for _ in 0..QUIZ_QUESTIONS.len() {
            let correct = quiz.question().correct;
            quiz.answer(correct);
            quiz.advance();
        }
        assert!(quiz.finished());
        assert_eq!(quiz.score(), 10);
        assert_eq!(closing_message(quiz.score(), quiz.total()), "Perfect! You are a DNA expert!");
    }

    #[test]
    fn test_all_wrong_scores_zero_with_encouragement() {
        let mut quiz = QuizSession::new();
        for _ in 0..QUIZ_QUESTIONS.len() {
            let correct = quiz.question().correct;
            let wrong = quiz
                .question()
                .options
                .iter()
                .find(|o| o.id != correct)
                .unwrap()
                .id;
            quiz.answer(wrong);
            quiz.advance();
        }
        assert!(quiz.finished());
        assert_eq!(quiz.score(), 0);
        assert_eq!(
            closing_message(quiz.score(), quiz.total()),
            "Practice makes perfect. Revisit the walkthrough and try again."
        );
    }

    #[test]
    fn test_threshold_messages() {
        assert_eq!(closing_message(10, 10), "Perfect! You are a DNA expert!");
        assert_eq!(closing_message(7, 10), "Well done! You understood most of it.");
        assert_eq!(closing_message(9, 10), "Well done! You understood most of it.");
        assert_eq!(
            closing_message(6, 10),
            "Practice makes perfect. Revisit the walkthrough and try again."
        );
    }

    #[test]
    fn test_first_answer_wins() {
        let mut quiz = QuizSession::new();
        let correct = quiz.question().correct;
        let wrong = quiz
            .question()
            .options
            .iter()
            .find(|o| o.id != correct)
            .unwrap()
            .id;

        quiz.answer(wrong);
        quiz.answer(correct); // ignored, already answered
        assert_eq!(quiz.selected(), Some(wrong));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut quiz = QuizSession::new();
        quiz.advance();
        assert_eq!(quiz.index(), 0);

        quiz.answer('a'); // lowercase accepted
        assert!(quiz.answered());
        quiz.advance();
        assert_eq!(quiz.index(), 1);
        assert!(!quiz.answered());
    }

    #[test]
    fn test_reset_restores_fresh_run() {
        let mut quiz = QuizSession::new();
        quiz.answer(quiz.question().correct);
        quiz.advance();
        quiz.reset();
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.finished());
        assert!(!quiz.answered());
    }
}
