//! Ordered keyword-rule intent classification.

use crate::intent::matcher::KeywordRule;
use crate::intent::types::Intent;

/// Keyword-based intent classifier.
///
/// Holds an explicit ordered list of [`KeywordRule`]s, evaluated top to
/// bottom; the first rule that fires decides the intent. Returns
/// [`Intent::unknown`] when no rule matches, including for empty input.
/// Deterministic and side-effect-free.
#[derive(Debug, Clone)]
pub struct KeywordIntentClassifier {
    rules: Vec<KeywordRule>,
}

impl KeywordIntentClassifier {
    /// Create a classifier from an ordered rule list.
    ///
    /// Rule order is precedence: earlier rules win over later ones when both
    /// would fire.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        KeywordIntentClassifier { rules }
    }

    /// Create the built-in university-domain classifier.
    ///
    /// The `how_are_you` rule requires all of its keywords so that a lone
    /// "how" (as in "how do I apply") keeps falling through to the topical
    /// rules; everything else matches on any keyword. Greeting outranks it so
    /// "hey, how are you" still greets.
    pub fn university() -> Self {
        let rules = vec![
            KeywordRule::any("greeting", &["hi", "hello", "hey", "greetings"]),
            KeywordRule::all("how_are_you", &["how", "are", "you"]),
            KeywordRule::any(
                "course_info",
                &["course", "program", "subject", "field", "study", "degree"],
            ),
            KeywordRule::any(
                "admission_info",
                &["admission", "apply", "enroll", "register", "application"],
            ),
            KeywordRule::any(
                "career_guidance",
                &[
                    "career",
                    "job",
                    "intern",
                    "internship",
                    "employment",
                    "work",
                    "placement",
                ],
            ),
            KeywordRule::any(
                "scholarship_info",
                &["scholarship", "scholar", "funding", "aid", "grant", "bursary"],
            ),
            KeywordRule::any(
                "general_info",
                &["location", "visit", "contact", "email", "address", "time", "campus"],
            ),
            KeywordRule::any("goodbye", &["bye", "goodbye", "later"]),
            KeywordRule::any("thank_you", &["thank", "thanks"]),
            KeywordRule::any("sorry", &["sorry", "apologize", "pardon"]),
            KeywordRule::any("help", &["help", "assist", "support"]),
            KeywordRule::any("contact_info", &["contact", "reach", "touch", "speak"]),
            KeywordRule::any("phone_number", &["phone", "number", "call", "telephone"]),
            KeywordRule::any("name", &["name"]),
        ];

        KeywordIntentClassifier::new(rules)
    }

    /// Classify a normalized token sequence into an intent.
    pub fn classify(&self, tokens: &[String]) -> Intent {
        self.rules
            .iter()
            .find(|rule| rule.matches(tokens))
            .map(|rule| rule.intent().clone())
            .unwrap_or_else(Intent::unknown)
    }

    /// The ordered rules of this classifier.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextNormalizer;

    fn classify(input: &str) -> Intent {
        let normalizer = TextNormalizer::new();
        KeywordIntentClassifier::university().classify(&normalizer.normalize(input))
    }

    #[test]
    fn test_greeting() {
        assert_eq!(classify("hello"), Intent::new("greeting"));
        assert_eq!(classify("Hey there!"), Intent::new("greeting"));
    }

    #[test]
    fn test_how_are_you_requires_all_tokens() {
        assert_eq!(classify("how are you?"), Intent::new("how_are_you"));
        assert_eq!(classify("how are you doing today"), Intent::new("how_are_you"));
        // A lone "how" falls through to topical rules instead
        assert_eq!(classify("how do I apply"), Intent::new("admission_info"));
    }

    #[test]
    fn test_topical_intents() {
        assert_eq!(classify("what courses are available"), Intent::new("course_info"));
        assert_eq!(
            classify("what scholarships are available"),
            Intent::new("scholarship_info")
        );
        assert_eq!(classify("where is the campus located"), Intent::new("general_info"));
        assert_eq!(classify("any internship placements?"), Intent::new("career_guidance"));
    }

    #[test]
    fn test_rule_precedence() {
        // "hi, how are you" fires both greeting and how_are_you; greeting is
        // ordered first and wins.
        assert_eq!(classify("hi, how are you"), Intent::new("greeting"));
    }

    #[test]
    fn test_unknown_for_no_match() {
        assert_eq!(classify("xyzzy plugh"), Intent::unknown());
    }

    #[test]
    fn test_unknown_for_empty_input() {
        assert_eq!(classify(""), Intent::unknown());
        assert_eq!(classify("   "), Intent::unknown());
    }
}
