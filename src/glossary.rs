//! Replication glossary: fixed term/definition pairs.

#[derive(Debug, Clone, Copy)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

/// The fixed glossary, ordered for display.
pub static GLOSSARY: [GlossaryEntry; 12] = [
    GlossaryEntry {
        term: "Antiparallel",
        definition: "The two DNA strands run in opposite directions: one strand 5'->3', the other 3'->5'.",
    },
    GlossaryEntry {
        term: "DNA ligase",
        definition: "Enzyme that joins DNA strands by forming phosphodiester bonds. The 'glue' of DNA.",
    },
    GlossaryEntry {
        term: "DNA polymerase",
        definition: "Central enzyme that synthesizes new DNA strands (5'->3'). Requires a primer.",
    },
    GlossaryEntry {
        term: "Lagging strand",
        definition: "The DNA strand synthesized discontinuously in Okazaki fragments.",
    },
    GlossaryEntry {
        term: "Helicase",
        definition: "Enzyme that unwinds the DNA double helix and separates the strands.",
    },
    GlossaryEntry {
        term: "Leading strand",
        definition: "The DNA strand synthesized continuously toward the replication fork.",
    },
    GlossaryEntry {
        term: "Template strand",
        definition: "The parent strand that serves as the copying template.",
    },
    GlossaryEntry {
        term: "Okazaki fragments",
        definition: "Short DNA segments on the lagging strand, joined together later.",
    },
    GlossaryEntry {
        term: "Primase",
        definition: "Enzyme that synthesizes short RNA primers as starting points.",
    },
    GlossaryEntry {
        term: "Primer",
        definition: "Short RNA sequence, the starting point for DNA polymerase.",
    },
    GlossaryEntry {
        term: "Semiconservative",
        definition: "Replication mechanism: each daughter DNA consists of one old and one new strand.",
    },
    GlossaryEntry {
        term: "5'->3' direction",
        definition: "Synthesis direction of DNA polymerase. It can only extend at the 3' end.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossary_entries_are_filled() {
        assert_eq!(GLOSSARY.len(), 12);
        for entry in &GLOSSARY {
            assert!(!entry.term.is_empty());
            assert!(!entry.definition.is_empty());
        }
    }
}
