//! Codon trainer state machine.
//!
//! A session walks the learner through two stages:
//! - transcription: derive the mRNA strand base by base from a DNA template
//! - translation: derive the protein chain codon by codon from the mRNA
//!
//! Progression is strictly forward. Wrong answers are normal, retryable
//! outcomes and never mutate sequence state; submissions outside the
//! current stage are silently ignored.

use rand::Rng;
use thiserror::Error;

use crate::genetics::{AminoAcid, Codon, DnaBase, RnaBase, START_TEMPLATE, STOP_TEMPLATE};

/// Number of random codons between the fixed start and stop flanks.
pub const DEFAULT_INFILL_CODONS: usize = 3;

/// The current phase of the guided exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Filling the mRNA strand, one base per step.
    Transcription,
    /// Filling the protein chain, one codon per step. Terminal.
    Translation,
}

/// Advisory feedback flag for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Answer {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

/// What a submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted; cursor advanced within the current stage.
    Advanced,
    /// Last base accepted; stage flipped to translation, cursor back to 0.
    TranscriptComplete,
    /// Last codon solved; the protein is finished.
    ProteinComplete,
    /// Wrong answer; only the feedback flag changed.
    Rejected,
    /// Submitted outside the operation's stage; nothing happened.
    Ignored,
}

/// Error for caller-supplied templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template length {0} is not a positive multiple of 3")]
    NotCodonAligned(usize),
    #[error("template needs start, infill and stop codons (at least 9 bases), got {0}")]
    TooShort(usize),
    #[error("template must begin with the TAC start pattern")]
    BadStart,
    #[error("template must end with the ACT stop pattern")]
    BadStop,
}

/// Mutable per-game state. Created fresh, mutated only through the two
/// submission operations, replaced wholesale on reset.
#[derive(Debug)]
pub struct TrainerSession {
    template: Vec<DnaBase>,
    transcript: Vec<Option<RnaBase>>,
    protein: Vec<Option<&'static AminoAcid>>,
    cursor: usize,
    stage: Stage,
    last_answer: Answer,
    infill_codons: usize,
    generation: u64,
}

impl TrainerSession {
    /// Creates a session with a freshly generated template.
    ///
    /// The random source is injected so callers (and tests) control
    /// determinism; infill bases are drawn uniformly per position.
    pub fn new<R: Rng>(infill_codons: usize, rng: &mut R) -> Self {
        let template = generate_template(infill_codons, rng);
        let codons = template.len() / 3;
        Self {
            transcript: vec![None; template.len()],
            protein: vec![None; codons],
            template,
            cursor: 0,
            stage: Stage::Transcription,
            last_answer: Answer::Unknown,
            infill_codons,
            generation: 0,
        }
    }

    /// Creates a session over a caller-supplied template.
    pub fn from_template(template: Vec<DnaBase>) -> Result<Self, TemplateError> {
        let len = template.len();
        if len == 0 || len % 3 != 0 {
            return Err(TemplateError::NotCodonAligned(len));
        }
        if len < 9 {
            return Err(TemplateError::TooShort(len));
        }
        if template[..3] != START_TEMPLATE {
            return Err(TemplateError::BadStart);
        }
        if template[len - 3..] != STOP_TEMPLATE {
            return Err(TemplateError::BadStop);
        }
        Ok(Self {
            transcript: vec![None; len],
            protein: vec![None; len / 3],
            infill_codons: len / 3 - 2,
            template,
            cursor: 0,
            stage: Stage::Transcription,
            last_answer: Answer::Unknown,
            generation: 0,
        })
    }

    /// Discards all progress and starts over with a new random template.
    ///
    /// Bumps the session generation so deferred work scheduled against the
    /// previous game can recognize it is stale.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.template = generate_template(self.infill_codons, rng);
        self.transcript = vec![None; self.template.len()];
        self.protein = vec![None; self.template.len() / 3];
        self.cursor = 0;
        self.stage = Stage::Transcription;
        self.last_answer = Answer::Unknown;
        self.generation += 1;
    }

    pub fn template(&self) -> &[DnaBase] {
        &self.template
    }

    pub fn transcript(&self) -> &[Option<RnaBase>] {
        &self.transcript
    }

    pub fn protein(&self) -> &[Option<&'static AminoAcid>] {
        &self.protein
    }

    /// Position in the transcript (transcription) or codon index (translation).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn last_answer(&self) -> Answer {
        self.last_answer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn codon_count(&self) -> usize {
        self.protein.len()
    }

    /// True once every codon of the protein chain is filled in.
    pub fn is_complete(&self) -> bool {
        self.protein.iter().all(|slot| slot.is_some())
    }

    /// The mRNA base expected at the cursor during transcription.
    pub fn expected_base(&self) -> Option<RnaBase> {
        match self.stage {
            Stage::Transcription => Some(self.template[self.cursor].transcribes_to()),
            Stage::Translation => None,
        }
    }

    /// The codon under the cursor during translation.
    ///
    /// Transcription completes before the stage flips, so all three bases
    /// are present.
    pub fn current_codon(&self) -> Option<Codon> {
        match self.stage {
            Stage::Transcription => None,
            Stage::Translation => {
                let start = self.cursor * 3;
                let base = |i: usize| {
                    self.transcript[start + i].expect("transcript filled before translation")
                };
                Some(Codon::new(base(0), base(1), base(2)))
            }
        }
    }

    /// Submits a candidate mRNA base for the current template position.
    pub fn submit_transcription_base(&mut self, candidate: RnaBase) -> Outcome {
        if self.stage != Stage::Transcription {
            return Outcome::Ignored;
        }

        let expected = self.template[self.cursor].transcribes_to();
        if candidate != expected {
            self.last_answer = Answer::Incorrect;
            return Outcome::Rejected;
        }

        self.transcript[self.cursor] = Some(candidate);
        self.last_answer = Answer::Correct;
        if self.cursor + 1 == self.transcript.len() {
            self.stage = Stage::Translation;
            self.cursor = 0;
            Outcome::TranscriptComplete
        } else {
            self.cursor += 1;
            Outcome::Advanced
        }
    }

    /// Submits an amino acid code for the codon under the cursor.
    pub fn submit_translation_choice(&mut self, code: &str) -> Outcome {
        if self.stage != Stage::Translation {
            return Outcome::Ignored;
        }

        let codon = self
            .current_codon()
            .expect("translation stage has a current codon");
        let entry = codon.amino_acid();
        if entry.code != code {
            self.last_answer = Answer::Incorrect;
            return Outcome::Rejected;
        }

        self.protein[self.cursor] = Some(entry);
        self.last_answer = Answer::Correct;
        if self.cursor + 1 < self.protein.len() {
            self.cursor += 1;
            Outcome::Advanced
        } else {
            // Translation is terminal; the cursor stays on the last codon.
            Outcome::ProteinComplete
        }
    }
}

/// Builds `TAC` + `3 * infill_codons` uniform random bases + `ACT`.
fn generate_template<R: Rng>(infill_codons: usize, rng: &mut R) -> Vec<DnaBase> {
    let mut template = Vec::with_capacity(6 + infill_codons * 3);
    template.extend_from_slice(&START_TEMPLATE);
    for _ in 0..infill_codons * 3 {
        template.push(DnaBase::ALL[rng.random_range(0..DnaBase::ALL.len())]);
    }
    template.extend_from_slice(&STOP_TEMPLATE);
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn template_of(s: &str) -> Vec<DnaBase> {
        s.chars().map(|c| DnaBase::try_from(c).unwrap()).collect()
    }

    fn rna_of(s: &str) -> Vec<RnaBase> {
        s.chars().map(|c| RnaBase::try_from(c).unwrap()).collect()
    }

    /// Plays the transcription stage with only correct answers.
    fn transcribe_all(session: &mut TrainerSession) {
        while session.stage() == Stage::Transcription {
            let expected = session.expected_base().unwrap();
            assert_ne!(session.submit_transcription_base(expected), Outcome::Rejected);
        }
    }

    #[test]
    fn test_generated_template_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let session = TrainerSession::new(DEFAULT_INFILL_CODONS, &mut rng);

        assert_eq!(session.template().len(), 15);
        assert_eq!(session.template()[..3], START_TEMPLATE);
        assert_eq!(session.template()[12..], STOP_TEMPLATE);
        assert_eq!(session.codon_count(), 5);
        assert_eq!(session.stage(), Stage::Transcription);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.last_answer(), Answer::Unknown);
        assert!(session.transcript().iter().all(|slot| slot.is_none()));
        assert!(session.protein().iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = TrainerSession::new(3, &mut StdRng::seed_from_u64(42));
        let b = TrainerSession::new(3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.template(), b.template());
    }

    #[test]
    fn test_from_template_validation() {
        assert_eq!(
            TrainerSession::from_template(template_of("TACG")).unwrap_err(),
            TemplateError::NotCodonAligned(4)
        );
        assert_eq!(
            TrainerSession::from_template(template_of("TACACT")).unwrap_err(),
            TemplateError::TooShort(6)
        );
        assert_eq!(
            TrainerSession::from_template(template_of("ATCGGGACT")).unwrap_err(),
            TemplateError::BadStart
        );
        assert_eq!(
            TrainerSession::from_template(template_of("TACGGGACC")).unwrap_err(),
            TemplateError::BadStop
        );
        assert!(TrainerSession::from_template(template_of("TACGGGACT")).is_ok());
    }

    #[test]
    fn test_full_transcription_builds_complement_and_flips_stage() {
        let mut session = TrainerSession::from_template(template_of("TACGGAATTACT")).unwrap();

        transcribe_all(&mut session);

        let transcript: Vec<RnaBase> = session.transcript().iter().map(|b| b.unwrap()).collect();
        assert_eq!(transcript, rna_of("AUGCCUUAAUGA"));
        assert_eq!(session.stage(), Stage::Translation);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.last_answer(), Answer::Correct);
    }

    #[test]
    fn test_wrong_base_changes_nothing_but_feedback() {
        let mut session = TrainerSession::from_template(template_of("TACGGAATTACT")).unwrap();

        // Template starts with T, so the expected base is A; U is wrong.
        assert_eq!(session.submit_transcription_base(RnaBase::U), Outcome::Rejected);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.transcript()[0], None);
        assert_eq!(session.last_answer(), Answer::Incorrect);

        // Retries are unlimited at the same position.
        assert_eq!(session.submit_transcription_base(RnaBase::A), Outcome::Advanced);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_example_scenario_translation() {
        // Template TACGGAATTACT -> mRNA AUGCCUUAAUGA -> Met, Pro, STOP, STOP.
        let mut session = TrainerSession::from_template(template_of("TACGGAATTACT")).unwrap();
        transcribe_all(&mut session);

        assert_eq!(session.current_codon().unwrap().to_string(), "AUG");
        assert_eq!(session.submit_translation_choice("Met"), Outcome::Advanced);
        assert!(session.protein()[0].unwrap().is_start());

        assert_eq!(session.current_codon().unwrap().to_string(), "CCU");
        assert_eq!(session.submit_translation_choice("Pro"), Outcome::Advanced);

        assert_eq!(session.current_codon().unwrap().to_string(), "UAA");
        assert!(session.current_codon().unwrap().amino_acid().is_stop());
        assert_eq!(session.submit_translation_choice("STOP"), Outcome::Advanced);

        assert_eq!(session.current_codon().unwrap().to_string(), "UGA");
        assert_eq!(session.submit_translation_choice("STOP"), Outcome::ProteinComplete);
        assert!(session.is_complete());

        // Terminal: the cursor never moves past the last codon.
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn test_wrong_amino_choice_changes_nothing_but_feedback() {
        let mut session = TrainerSession::from_template(template_of("TACGGAATTACT")).unwrap();
        transcribe_all(&mut session);

        assert_eq!(session.submit_translation_choice("Pro"), Outcome::Rejected);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.protein()[0], None);
        assert_eq!(session.last_answer(), Answer::Incorrect);
    }

    #[test]
    fn test_out_of_stage_submissions_are_ignored() {
        let mut session = TrainerSession::from_template(template_of("TACGGAATTACT")).unwrap();

        assert_eq!(session.submit_translation_choice("Met"), Outcome::Ignored);
        assert_eq!(session.protein()[0], None);

        transcribe_all(&mut session);
        assert_eq!(session.submit_transcription_base(RnaBase::A), Outcome::Ignored);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.last_answer(), Answer::Correct);
    }

    #[test]
    fn test_reset_restores_fresh_state_and_bumps_generation() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut session = TrainerSession::new(2, &mut rng);

        transcribe_all(&mut session);
        assert_eq!(session.stage(), Stage::Translation);
        assert_eq!(session.generation(), 0);

        session.reset(&mut rng);
        assert_eq!(session.stage(), Stage::Transcription);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.last_answer(), Answer::Unknown);
        assert!(session.transcript().iter().all(|slot| slot.is_none()));
        assert!(session.protein().iter().all(|slot| slot.is_none()));
        assert_eq!(session.generation(), 1);

        // Resetting repeatedly always yields a valid fresh session.
        session.reset(&mut rng);
        session.reset(&mut rng);
        assert_eq!(session.generation(), 3);
        assert_eq!(session.template().len(), 12);
        assert_eq!(session.stage(), Stage::Transcription);
    }
}
