//! Deterministic, model-free bias detection.
//!
//! Each canonical label owns an ordered list of trigger phrases; a label is
//! detected when any of its phrases occurs in the normalized text (first hit
//! wins, no scoring). Two general patterns add hasty generalization
//! (universal quantifiers) and false dichotomy ("o ... o" plus an explicit
//! "no hay otra/alternativa/opción").
//!
//! The detector is built once and shared read-only; it never fails and has no
//! external dependency, which is what makes it the floor of the bias pipeline.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use lector_core::taxonomy::CanonicalLabel;
use regex::Regex;

use crate::normalize::normalize;
use crate::strategy::DetectionStrategy;

/// Built-in trigger phrases per label.
const BUILTIN_HINTS: [(CanonicalLabel, &[&str]); 11] = [
    (
        CanonicalLabel::AdHominem,
        &[
            "no deberíamos escuchar",
            "no confiar en él",
            "no terminó la universidad",
            "siempre se equivoca",
            "es un ignorante",
            "es un incompetente",
        ],
    ),
    (
        CanonicalLabel::HastyGeneralization,
        &[
            "todos",
            "siempre",
            "nunca",
            "ninguno",
            "la mayoría sin pruebas",
            "como todos",
        ],
    ),
    (
        CanonicalLabel::AppealToAuthority,
        &[
            "lo dijo un famoso",
            "lo dijo una celebridad",
            "porque el actor dijo",
            "mi doctor lo afirma sin pruebas",
            "lo dijo el gurú",
        ],
    ),
    (
        CanonicalLabel::AppealToEmotion,
        &[
            "si te importan los niños",
            "si amas tu país",
            "te haría muy feliz o muy triste",
            "apela al miedo",
            "apela a la compasión",
        ],
    ),
    (
        CanonicalLabel::FalseDichotomy,
        &[
            "o estás con nosotros o",
            "solo hay dos opciones",
            "no hay punto medio",
        ],
    ),
    (
        CanonicalLabel::StrawMan,
        &[
            "ellos quieren que vivamos como",
            "exageras su posición",
            "distorsionas su argumento",
        ],
    ),
    (
        CanonicalLabel::SlipperySlope,
        &[
            "si hacemos esto, entonces inevitablemente",
            "esto nos llevará a",
            "terminaremos en",
        ],
    ),
    (
        CanonicalLabel::Confirmation,
        &[
            "solo leo lo que confirma",
            "ignoro lo que contradice",
            "mis creencias ya prueban",
        ],
    ),
    (
        CanonicalLabel::AvailabilityBias,
        &[
            "vi una noticia y por eso concluyo",
            "como salió en tv",
            "escuché un caso y es común",
        ],
    ),
    (
        CanonicalLabel::SelectionBias,
        &[
            "solo elegimos los que convienen",
            "muestra sesgada",
            "casos favorables únicamente",
        ],
    ),
    (
        CanonicalLabel::CircularReasoning,
        &[
            "es verdad porque es verdad",
            "es cierto porque lo digo",
            "la biblia lo dice luego es cierto",
        ],
    ),
];

/// Universal/absolute quantifiers, matched on the original text.
///
/// `todos los` never wins over `todos`; it only documents the phrase.
const GENERALIZATION_PATTERN: &str =
    r"(?i)\b(todos|siempre|nunca|ninguno|nadie|todos los|la mayoria)\b";

/// "o ... o" disjunction, matched on the normalized text.
const DISJUNCTION_PATTERN: &str = r"\bo\b.+\bo\b";

/// Explicit denial of alternatives, matched on the normalized text.
const NO_ALTERNATIVE_PATTERN: &str = r"no hay (otra|alternativa|opcion)";

/// Label → normalized trigger phrases. Every canonical label has an entry.
#[derive(Debug, Clone)]
pub struct HintTable {
    entries: BTreeMap<CanonicalLabel, Vec<String>>,
}

impl HintTable {
    /// The built-in phrase lists.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (label, hints) in BUILTIN_HINTS {
            table.extend(label, hints.iter().copied());
        }
        table
    }

    /// A table where every label has an empty phrase list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: CanonicalLabel::ALL
                .into_iter()
                .map(|label| (label, Vec::new()))
                .collect(),
        }
    }

    /// Append phrases to a label, normalizing them. Blank phrases are skipped.
    pub fn extend<I, S>(&mut self, label: CanonicalLabel, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.entries.entry(label).or_default();
        for phrase in phrases {
            let phrase = normalize(phrase.as_ref().trim());
            if !phrase.is_empty() && !entry.contains(&phrase) {
                entry.push(phrase);
            }
        }
    }

    /// Append phrases keyed by label name, as read from configuration.
    ///
    /// Keys that do not name a canonical label are skipped with a warning.
    pub fn extend_by_name(&mut self, extra: &BTreeMap<String, Vec<String>>) {
        for (name, phrases) in extra {
            match CanonicalLabel::from_name(name) {
                Some(label) => self.extend(label, phrases),
                None => tracing::warn!(label = %name, "ignoring hints for unknown label"),
            }
        }
    }

    /// Normalized phrases for `label`.
    #[must_use]
    pub fn hints(&self, label: CanonicalLabel) -> &[String] {
        self.entries
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Keyword and pattern based bias detector.
#[derive(Debug, Clone)]
pub struct HeuristicDetector {
    hints: HintTable,
    generalization: Regex,
    disjunction: Regex,
    no_alternative: Regex,
}

impl HeuristicDetector {
    /// Detector over the built-in hint table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(HintTable::builtin())
    }

    /// Detector over the built-in table plus configured extra phrases.
    #[must_use]
    pub fn with_extra_hints(extra: &BTreeMap<String, Vec<String>>) -> Self {
        let mut hints = HintTable::builtin();
        hints.extend_by_name(extra);
        Self::new(hints)
    }

    /// Detector over a custom hint table.
    ///
    /// # Panics
    ///
    /// Panics if one of the built-in patterns fails to compile, which would
    /// be a programming error.
    #[must_use]
    pub fn new(hints: HintTable) -> Self {
        Self {
            hints,
            generalization: Regex::new(GENERALIZATION_PATTERN)
                .expect("generalization pattern should compile"),
            disjunction: Regex::new(DISJUNCTION_PATTERN)
                .expect("disjunction pattern should compile"),
            no_alternative: Regex::new(NO_ALTERNATIVE_PATTERN)
                .expect("no-alternative pattern should compile"),
        }
    }

    #[must_use]
    pub const fn hints(&self) -> &HintTable {
        &self.hints
    }

    /// Labels whose trigger phrases or general patterns occur in `text`.
    #[must_use]
    pub fn detect(&self, text: &str) -> BTreeSet<CanonicalLabel> {
        let folded = normalize(text);
        let mut found = BTreeSet::new();

        for label in CanonicalLabel::ALL {
            if self
                .hints
                .hints(label)
                .iter()
                .any(|hint| folded.contains(hint.as_str()))
            {
                found.insert(label);
            }
        }

        if self.generalization.is_match(text) {
            found.insert(CanonicalLabel::HastyGeneralization);
        }

        if self.disjunction.is_match(&folded) && self.no_alternative.is_match(&folded) {
            found.insert(CanonicalLabel::FalseDichotomy);
        }

        found
    }
}

impl Default for HeuristicDetector {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl DetectionStrategy for HeuristicDetector {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn attempt(&self, text: &str) -> BTreeSet<CanonicalLabel> {
        self.detect(text)
    }
}
