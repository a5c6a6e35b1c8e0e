//! Static intent-to-response table.

use std::collections::{HashMap, HashSet};

use rand::seq::IndexedRandom;

use crate::intent::Intent;

/// Immutable mapping from intent to a set of equivalent response phrasings.
///
/// Built once at startup. Lookups return one phrasing chosen uniformly at
/// random (intentional variety), so callers and tests should assert
/// membership in the configured set rather than an exact string.
///
/// Some intents are protected: their responses are small-talk fixtures that
/// learned data must never shadow.
#[derive(Debug, Clone, Default)]
pub struct StaticResponseTable {
    responses: HashMap<Intent, Vec<String>>,
    protected: HashSet<Intent>,
}

impl StaticResponseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an intent with its equivalent response phrasings.
    pub fn with_responses<I: Into<Intent>>(mut self, intent: I, responses: &[&str]) -> Self {
        self.responses.insert(
            intent.into(),
            responses.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    /// Mark an intent as protected.
    pub fn with_protected<I: Into<Intent>>(mut self, intent: I) -> Self {
        self.protected.insert(intent.into());
        self
    }

    /// Get one response for the intent, chosen uniformly at random.
    pub fn get(&self, intent: &Intent) -> Option<&str> {
        self.responses
            .get(intent)
            .and_then(|set| set.choose(&mut rand::rng()))
            .map(String::as_str)
    }

    /// All configured phrasings for an intent.
    pub fn responses_for(&self, intent: &Intent) -> Option<&[String]> {
        self.responses.get(intent).map(Vec::as_slice)
    }

    /// Whether the intent's responses may never be overwritten by learned data.
    pub fn is_protected(&self, intent: &Intent) -> bool {
        self.protected.contains(intent)
    }

    /// The built-in university-domain response table.
    pub fn university() -> Self {
        StaticResponseTable::new()
            // Academic information
            .with_responses(
                "course_info",
                &[
                    "We offer undergraduate and graduate programs in Computer Science, Business Administration, and Engineering.",
                    "Our available courses include Computer Science, Electrical Engineering, and MBA programs. Visit our website for details.",
                    "You can choose from various programs including Data Science, Artificial Intelligence, and Business Analytics.",
                ],
            )
            .with_responses(
                "admission_info",
                &[
                    "The admission process requires an online application, academic transcripts, and two recommendation letters.",
                    "To apply, complete our online application form and submit your academic records. Deadline is May 15th.",
                    "Admissions are open for the fall term. Requirements include a 3.0 GPA and an English proficiency test for international students.",
                ],
            )
            .with_responses(
                "scholarship_info",
                &[
                    "We offer merit-based scholarships covering up to 50% of tuition. Application deadline is March 1st.",
                    "Financial aid options include need-based grants and athletic scholarships. Complete the FAFSA for consideration.",
                    "The university provides several scholarship opportunities based on academic excellence and community service.",
                ],
            )
            // Campus life
            .with_responses(
                "campus_facilities",
                &[
                    "Our campus features state-of-the-art labs, a modern library, and sports complexes open 7am-10pm daily.",
                    "Facilities include computer labs, research centers, and a student recreation center with a swimming pool.",
                    "You'll find excellent facilities including 24/7 study spaces, cafeterias, and fitness centers across campus.",
                ],
            )
            .with_responses(
                "student_activities",
                &[
                    "We have over 100 student clubs including robotics, debate, and cultural organizations.",
                    "Student life includes weekly events, guest lectures, and annual festivals like our Spring Carnival.",
                    "There are many extracurricular activities ranging from academic clubs to intramural sports teams.",
                ],
            )
            // Administrative
            .with_responses(
                "registration_info",
                &[
                    "Course registration opens April 1st for continuing students and June 1st for new students.",
                    "You can register for classes through the student portal during your assigned registration period.",
                    "Registration requires meeting with your academic advisor first to get your PIN for the system.",
                ],
            )
            .with_responses(
                "tuition_info",
                &[
                    "Undergraduate tuition is $15,000 per semester. Financial aid options are available.",
                    "Tuition varies by program. Graduate programs range from $20,000-$25,000 per academic year.",
                    "You can view the complete tuition breakdown on our website under the 'Costs & Aid' section.",
                ],
            )
            // Small talk (protected)
            .with_responses(
                "greeting",
                &[
                    "Hello! Welcome to the university assistant. How can I help you today?",
                    "Hi there! I'm here to help with any questions about our university.",
                    "Greetings! What would you like to know about our programs and campus?",
                ],
            )
            .with_responses(
                "how_are_you",
                &[
                    "I'm functioning perfectly, thank you! How can I help you today?",
                    "Doing great! Ready to answer your questions about the university.",
                    "I'm just an assistant, but I'm happy to help with your inquiries!",
                ],
            )
            .with_responses(
                "goodbye",
                &[
                    "Goodbye! Feel free to come back if you have more questions.",
                    "Have a wonderful day! Contact us anytime if you need assistance.",
                    "See you later! Don't hesitate to ask if you need more information.",
                ],
            )
            .with_responses(
                "thank_you",
                &[
                    "You're welcome! Let me know if you need anything else.",
                    "Happy to help! Don't hesitate to ask more questions.",
                    "My pleasure! Feel free to ask about other topics too.",
                ],
            )
            .with_responses(
                "sorry",
                &[
                    "No problem at all! How can I help you?",
                    "Nothing to apologize for. What would you like to know?",
                ],
            )
            .with_responses(
                "help",
                &[
                    "I can answer questions about courses, admissions, scholarships, and campus life. What do you need?",
                    "Ask me about programs, applying, fees, or anything else about the university.",
                ],
            )
            .with_responses(
                "name",
                &[
                    "I'm the university information assistant. Ask me anything about our programs and campus.",
                    "You can call me the campus assistant. How can I help?",
                ],
            )
            .with_protected("greeting")
            .with_protected("how_are_you")
            .with_protected("goodbye")
            .with_protected("thank_you")
            .with_protected("sorry")
            .with_protected("help")
            .with_protected("name")
    }
}
