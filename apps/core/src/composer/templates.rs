//! Reply template fragments.
//!
//! Two registers hold every fragment: the professional one addresses the reader
//! formally ("vous"), the personal one familiarly ("tu"). The opening paragraph
//! is picked by [`Tone`], itself looked up from (sentiment, urgency).
//!
//! `{name}`, `{subject}`, `{keyword}`, `{keywords}` and `{question}` are
//! placeholders substituted by the renderer.

use serde::{Deserialize, Serialize};

use crate::analysis::{Sentiment, Urgency};
use crate::models::EmailContext;

/// Subject of a reply to a mail that had one
pub const REPLY_SUBJECT: &str = "Re: {subject}";
/// Marker of a subject that is already a reply, before its colon.
/// Compared case-insensitively; "Re:", "RE :" and "re :" all match.
pub const REPLY_MARKER: &str = "re";

/// Opening style of a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Concerned and pressing: acknowledge and reassure
    Reassuring,
    /// Concerned but calm: acknowledge the worry
    Attentive,
    /// Pressing without concern: commit to a fast answer
    Prompt,
    /// Positive and calm
    Warm,
    /// Neutral and calm: plain acknowledgment
    Plain,
}

/// Rows: sentiment (positive, neutral, concerned). Columns: urgency (high, moderate, low).
const TONE_TABLE: [[Tone; 3]; 3] = [
    [Tone::Prompt, Tone::Warm, Tone::Warm],
    [Tone::Prompt, Tone::Plain, Tone::Plain],
    [Tone::Reassuring, Tone::Reassuring, Tone::Attentive],
];

impl Tone {
    pub fn select(sentiment: Sentiment, urgency: Urgency) -> Self {
        let row = match sentiment {
            Sentiment::Positive => 0,
            Sentiment::Neutral => 1,
            Sentiment::Concerned => 2,
        };
        let column = match urgency {
            Urgency::High => 0,
            Urgency::Moderate => 1,
            Urgency::Low => 2,
        };
        TONE_TABLE[row][column]
    }
}

/// Every fragment of one register
#[derive(Debug)]
pub struct Register {
    pub greeting_named: &'static str,
    pub greeting_generic: &'static str,
    pub opening_reassuring: &'static str,
    pub opening_attentive: &'static str,
    pub opening_prompt: &'static str,
    pub opening_warm: &'static str,
    pub opening_plain: &'static str,
    pub keywords_line: &'static str,
    pub question_intro_single: &'static str,
    pub question_intro_multiple: &'static str,
    pub question_item: &'static str,
    pub outcome_intro: &'static str,
    pub notes_intro: &'static str,
    pub follow_up_urgent: &'static str,
    pub follow_up: &'static str,
    pub closing: &'static str,
    pub subject_from_keyword: &'static str,
    pub subject_fallback: &'static str,
}

pub static PROFESSIONAL: Register = Register {
    greeting_named: "Bonjour {name},",
    greeting_generic: "Bonjour,",
    opening_reassuring: "Merci pour votre message. Je mesure l'urgence de la situation et je m'en occupe en priorité : soyez assuré(e) que nous allons trouver une solution.",
    opening_attentive: "Merci pour votre message. Je comprends vos préoccupations et je tiens à y répondre avec toute l'attention qu'elles méritent.",
    opening_prompt: "Merci pour votre message. Je le traite en priorité et reviens vers vous dans les plus brefs délais.",
    opening_warm: "Merci beaucoup pour votre message, qui m'a fait grand plaisir.",
    opening_plain: "Merci pour votre message, dont j'ai bien pris connaissance.",
    keywords_line: "J'ai bien noté les points relatifs à : {keywords}.",
    question_intro_single: "Concernant votre question :",
    question_intro_multiple: "Concernant vos questions :",
    question_item: "- « {question} » : je vous apporte une réponse précise très rapidement.",
    outcome_intro: "Afin d'avancer, je vous propose la chose suivante : ",
    notes_intro: "Je tiens également à préciser : ",
    follow_up_urgent: "Je reviens vers vous très rapidement.",
    follow_up: "Je reste à votre disposition pour tout complément d'information.",
    closing: "Cordialement,",
    subject_from_keyword: "Suite à votre message : {keyword}",
    subject_fallback: "Réponse à votre message",
};

pub static PERSONAL: Register = Register {
    greeting_named: "Salut {name},",
    greeting_generic: "Salut,",
    opening_reassuring: "Merci pour ton message. Je vois que c'est urgent et je m'en occupe tout de suite, ne t'inquiète pas.",
    opening_attentive: "Merci pour ton message. Je comprends ce qui te tracasse et je tenais à te répondre.",
    opening_prompt: "Merci pour ton message ! Je regarde ça au plus vite.",
    opening_warm: "Merci pour ton message, ça m'a fait super plaisir !",
    opening_plain: "Merci pour ton message, je l'ai bien lu.",
    keywords_line: "J'ai bien noté ce que tu dis à propos de : {keywords}.",
    question_intro_single: "Pour ta question :",
    question_intro_multiple: "Pour tes questions :",
    question_item: "- « {question} » : je te réponds dès que possible.",
    outcome_intro: "De mon côté, voilà ce que je te propose : ",
    notes_intro: "Petite précision : ",
    follow_up_urgent: "Je te tiens au courant très vite.",
    follow_up: "N'hésite pas si tu as besoin de quoi que ce soit.",
    closing: "À très vite !",
    subject_from_keyword: "À propos de : {keyword}",
    subject_fallback: "Re : ton message",
};

impl Register {
    pub fn for_context(context: EmailContext) -> &'static Register {
        match context {
            EmailContext::Professional => &PROFESSIONAL,
            EmailContext::Personal => &PERSONAL,
        }
    }

    pub fn opening(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Reassuring => self.opening_reassuring,
            Tone::Attentive => self.opening_attentive,
            Tone::Prompt => self.opening_prompt,
            Tone::Warm => self.opening_warm,
            Tone::Plain => self.opening_plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_table() {
        assert_eq!(Tone::select(Sentiment::Concerned, Urgency::High), Tone::Reassuring);
        assert_eq!(Tone::select(Sentiment::Concerned, Urgency::Moderate), Tone::Reassuring);
        assert_eq!(Tone::select(Sentiment::Concerned, Urgency::Low), Tone::Attentive);
        assert_eq!(Tone::select(Sentiment::Neutral, Urgency::High), Tone::Prompt);
        assert_eq!(Tone::select(Sentiment::Positive, Urgency::High), Tone::Prompt);
        assert_eq!(Tone::select(Sentiment::Positive, Urgency::Low), Tone::Warm);
        assert_eq!(Tone::select(Sentiment::Neutral, Urgency::Moderate), Tone::Plain);
        assert_eq!(Tone::select(Sentiment::Neutral, Urgency::Low), Tone::Plain);
    }

    #[test]
    fn test_openings_are_distinct_per_register() {
        let tones = [
            Tone::Reassuring,
            Tone::Attentive,
            Tone::Prompt,
            Tone::Warm,
            Tone::Plain,
        ];

        for register in [&PROFESSIONAL, &PERSONAL] {
            for (i, a) in tones.iter().enumerate() {
                for b in &tones[i + 1..] {
                    assert_ne!(register.opening(*a), register.opening(*b));
                }
            }
        }
    }

    #[test]
    fn test_registers_differ() {
        assert_ne!(PROFESSIONAL.closing, PERSONAL.closing);
        assert_ne!(PROFESSIONAL.greeting_generic, PERSONAL.greeting_generic);
    }
}
