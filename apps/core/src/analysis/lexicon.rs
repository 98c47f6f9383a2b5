//! Cue lexicons.
//!
//! Static word lists driving keyword, sentiment and urgency detection, plus the
//! compiled matchers built from them. Lists mix French and English cues so that
//! mail written in either language is classified.
//!
//! Every entry is matched on Unicode word boundaries, case-insensitively:
//! `asap` matches "ASAP" but not "ASAPest". A `Prefix` entry is a stem that also
//! matches any word continuing it (`problème` matches "problèmes").

use regex::Regex;
use std::sync::LazyLock;

/// How a lexicon term is matched against text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    /// The whole word or phrase, nothing more
    Word,
    /// The term as a stem, followed by any word characters
    Prefix,
}

/// A single cue term and its weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    pub term: &'static str,
    pub weight: u32,
    pub matching: Matching,
}

impl LexiconEntry {
    pub const fn word(term: &'static str, weight: u32) -> Self {
        Self {
            term,
            weight,
            matching: Matching::Word,
        }
    }

    pub const fn prefix(term: &'static str, weight: u32) -> Self {
        Self {
            term,
            weight,
            matching: Matching::Prefix,
        }
    }
}

// ============================================================================
// Static tables
// ============================================================================

/// Topic vocabulary reported as keywords
pub const TOPIC_TERMS: &[LexiconEntry] = &[
    // Work
    LexiconEntry::prefix("projet", 1),
    LexiconEntry::prefix("project", 1),
    LexiconEntry::prefix("réunion", 1),
    LexiconEntry::prefix("meeting", 1),
    LexiconEntry::prefix("budget", 1),
    LexiconEntry::prefix("deadline", 1),
    LexiconEntry::prefix("échéance", 1),
    LexiconEntry::prefix("délai", 1),
    LexiconEntry::prefix("contrat", 1),
    LexiconEntry::prefix("contract", 1),
    LexiconEntry::prefix("facture", 1),
    LexiconEntry::prefix("invoice", 1),
    LexiconEntry::prefix("paiement", 1),
    LexiconEntry::prefix("payment", 1),
    LexiconEntry::word("devis", 1),
    LexiconEntry::prefix("livraison", 1),
    LexiconEntry::word("delivery", 1),
    LexiconEntry::prefix("rapport", 1),
    LexiconEntry::prefix("report", 1),
    LexiconEntry::prefix("présentation", 1),
    LexiconEntry::prefix("presentation", 1),
    LexiconEntry::prefix("proposition", 1),
    LexiconEntry::prefix("proposal", 1),
    LexiconEntry::prefix("commande", 1),
    LexiconEntry::word("planning", 1),
    LexiconEntry::prefix("schedule", 1),
    LexiconEntry::word("rendez-vous", 1),
    LexiconEntry::prefix("appointment", 1),
    LexiconEntry::prefix("client", 1),
    LexiconEntry::prefix("équipe", 1),
    LexiconEntry::prefix("team", 1),
    LexiconEntry::prefix("dossier", 1),
    LexiconEntry::prefix("document", 1),
    LexiconEntry::prefix("candidature", 1),
    LexiconEntry::word("recrutement", 1),
    LexiconEntry::prefix("formation", 1),
    // Personal
    LexiconEntry::prefix("congé", 1),
    LexiconEntry::word("vacances", 1),
    LexiconEntry::prefix("anniversaire", 1),
    LexiconEntry::prefix("dîner", 1),
    LexiconEntry::word("week-end", 1),
    LexiconEntry::prefix("soirée", 1),
];

/// Cues pulling the sentiment score up
pub const POSITIVE_CUES: &[LexiconEntry] = &[
    // French
    LexiconEntry::word("merci", 1),
    LexiconEntry::prefix("remerci", 1),
    LexiconEntry::prefix("ravi", 2),
    LexiconEntry::word("heureux", 2),
    LexiconEntry::word("heureuse", 2),
    LexiconEntry::word("contente", 1),
    LexiconEntry::word("super", 1),
    LexiconEntry::word("génial", 2),
    LexiconEntry::prefix("excellent", 2),
    LexiconEntry::prefix("parfait", 2),
    LexiconEntry::word("bravo", 2),
    LexiconEntry::prefix("félicit", 2),
    LexiconEntry::word("plaisir", 1),
    LexiconEntry::prefix("enchanté", 1),
    // English
    LexiconEntry::prefix("thank", 1),
    LexiconEntry::word("great", 1),
    LexiconEntry::word("happy", 2),
    LexiconEntry::word("glad", 1),
    LexiconEntry::word("pleased", 2),
    LexiconEntry::prefix("appreciat", 1),
    LexiconEntry::word("wonderful", 2),
    LexiconEntry::word("awesome", 2),
    LexiconEntry::prefix("congratulation", 2),
];

/// Cues pulling the sentiment score down
pub const NEGATIVE_CUES: &[LexiconEntry] = &[
    // French
    LexiconEntry::prefix("problème", 2),
    LexiconEntry::prefix("souci", 1),
    LexiconEntry::prefix("inquiet", 2),
    LexiconEntry::prefix("inquiète", 2),
    LexiconEntry::prefix("inquiétude", 2),
    LexiconEntry::prefix("déçu", 2),
    LexiconEntry::prefix("déception", 2),
    LexiconEntry::prefix("retard", 1),
    LexiconEntry::prefix("erreur", 1),
    LexiconEntry::prefix("bloqué", 1),
    LexiconEntry::prefix("mécontent", 2),
    LexiconEntry::prefix("plainte", 2),
    LexiconEntry::word("malheureusement", 1),
    LexiconEntry::prefix("regrett", 1),
    LexiconEntry::prefix("difficile", 1),
    LexiconEntry::prefix("difficulté", 1),
    LexiconEntry::prefix("frustr", 2),
    LexiconEntry::prefix("échec", 2),
    LexiconEntry::prefix("panne", 1),
    // English
    LexiconEntry::prefix("problem", 2),
    LexiconEntry::prefix("issue", 1),
    LexiconEntry::word("concerned", 1),
    LexiconEntry::prefix("worr", 2),
    LexiconEntry::prefix("disappoint", 2),
    LexiconEntry::word("unfortunately", 1),
    LexiconEntry::prefix("delay", 1),
    LexiconEntry::prefix("error", 1),
    LexiconEntry::prefix("fail", 2),
    LexiconEntry::prefix("complain", 2),
    LexiconEntry::word("angry", 2),
    LexiconEntry::word("upset", 2),
];

/// Cues raising the urgency score
pub const URGENCY_CUES: &[LexiconEntry] = &[
    // French
    LexiconEntry::prefix("urgent", 2),
    LexiconEntry::prefix("urgence", 2),
    LexiconEntry::prefix("immédiat", 2),
    LexiconEntry::word("au plus vite", 2),
    LexiconEntry::word("dès que possible", 2),
    LexiconEntry::word("au plus tôt", 1),
    LexiconEntry::word("rapidement", 1),
    LexiconEntry::word("sans tarder", 1),
    LexiconEntry::word("aujourd'hui", 1),
    LexiconEntry::word("ce soir", 1),
    LexiconEntry::prefix("prioritaire", 1),
    LexiconEntry::prefix("priorité", 1),
    LexiconEntry::prefix("échéance", 1),
    // Shared
    LexiconEntry::word("asap", 2),
    LexiconEntry::prefix("deadline", 1),
    // English
    LexiconEntry::word("immediately", 2),
    LexiconEntry::word("as soon as possible", 2),
    LexiconEntry::word("right away", 2),
    LexiconEntry::word("emergency", 2),
    LexiconEntry::word("time-sensitive", 2),
    LexiconEntry::word("today", 1),
    LexiconEntry::word("tonight", 1),
    LexiconEntry::word("critical", 1),
    LexiconEntry::word("priority", 1),
    LexiconEntry::word("quickly", 1),
];

/// Words that open a question even without a trailing `?`
pub const INTERROGATIVE_WORDS: &[&str] = &[
    // French
    "qui", "que", "quoi", "quand", "où", "pourquoi", "comment", "combien", "quel", "quelle",
    "quels", "quelles", "lequel", "laquelle", "est-ce", "qu'est-ce",
    // English
    "who", "what", "when", "where", "why", "how", "which",
];

// ============================================================================
// Compiled lexicons
// ============================================================================

// NOTE: the default tables only contain escaped literals, so compilation cannot fail.
pub(crate) static TOPIC_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::compile(TOPIC_TERMS).expect("Invalid regex: topic lexicon"));

pub(crate) static POSITIVE_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::compile(POSITIVE_CUES).expect("Invalid regex: positive lexicon"));

pub(crate) static NEGATIVE_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::compile(NEGATIVE_CUES).expect("Invalid regex: negative lexicon"));

pub(crate) static URGENCY_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::compile(URGENCY_CUES).expect("Invalid regex: urgency lexicon"));

/// A single hit of a lexicon entry in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconMatch {
    pub term: &'static str,
    pub weight: u32,
    /// Byte offset of the match in the scanned text
    pub start: usize,
}

#[derive(Debug, Clone)]
struct CompiledCue {
    entry: LexiconEntry,
    pattern: Regex,
}

/// A compiled, ready-to-match set of lexicon entries
#[derive(Debug, Clone)]
pub struct Lexicon {
    cues: Vec<CompiledCue>,
}

/// Build the regex source for one entry
pub fn pattern_for(entry: &LexiconEntry) -> String {
    let body = regex::escape(entry.term)
        .replace(' ', r"\s+")
        .replace('\'', "['’]");

    match entry.matching {
        Matching::Word => format!(r"(?i)\b{body}\b"),
        Matching::Prefix => format!(r"(?i)\b{body}\w*\b"),
    }
}

impl Lexicon {
    /// Compile a list of entries into matchers
    pub fn compile(entries: &[LexiconEntry]) -> Result<Self, regex::Error> {
        let cues = entries
            .iter()
            .map(|entry| {
                Ok(CompiledCue {
                    entry: *entry,
                    pattern: Regex::new(&pattern_for(entry))?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { cues })
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Every occurrence of every entry, in lexicon order
    pub fn matches(&self, text: &str) -> Vec<LexiconMatch> {
        self.cues
            .iter()
            .flat_map(|cue| {
                cue.pattern.find_iter(text).map(|m| LexiconMatch {
                    term: cue.entry.term,
                    weight: cue.entry.weight,
                    start: m.start(),
                })
            })
            .collect()
    }

    /// Sum of `occurrences × weight` over all entries
    pub fn weighted_count(&self, text: &str) -> u64 {
        self.cues
            .iter()
            .map(|cue| {
                let hits = cue.pattern.find_iter(text).count() as u64;
                hits.saturating_mul(u64::from(cue.entry.weight))
            })
            .fold(0u64, u64::saturating_add)
    }

    /// Matched terms with the offset of their first occurrence, sorted by offset.
    ///
    /// Each term appears once. Terms starting at the same offset keep lexicon order.
    pub fn first_occurrences(&self, text: &str) -> Vec<(usize, &'static str)> {
        let mut found: Vec<(usize, &'static str)> = self
            .cues
            .iter()
            .filter_map(|cue| cue.pattern.find(text).map(|m| (m.start(), cue.entry.term)))
            .collect();

        found.sort_by_key(|(start, _)| *start);

        let mut seen: Vec<&'static str> = Vec::with_capacity(found.len());
        found.retain(|(_, term)| {
            if seen.contains(term) {
                false
            } else {
                seen.push(term);
                true
            }
        });

        found
    }
}
