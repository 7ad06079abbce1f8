//! Vent Letters
//!
//! The player can slip letters through the library vents; "the others" on
//! the far side write back. Replies are picked from keyword-matched template
//! pools with a seeded hash, so the same letter and seed always get the
//! same response.

use crate::game::state::GameProgress;
use crate::game::types::pick_index;

const FRIENDLY_RESPONSES: &[&str] = &[
    "Thank you for your kind words! It's nice to know someone is thinking of us.",
    "Your letter brought warmth to this cold place. We appreciate your friendship.",
    "It's rare to receive such thoughtful messages. Thank you for reaching out.",
    "We're glad to hear from you! The library sounds like a wonderful place.",
    "Your words are comforting. We hope you and Puro are doing well.",
    "Thank you for sharing your thoughts. It means more than you know.",
];

const CURIOUS_RESPONSES: &[&str] = &[
    "We're curious about life in the library. What's it like there?",
    "Your stories about Puro are fascinating. He sounds like a good friend.",
    "We wonder what books you're reading. Any recommendations?",
    "The bonsai tree sounds beautiful. We wish we could see it.",
];

const ENCOURAGING_RESPONSES: &[&str] = &[
    "Keep building that friendship! It's precious in these times.",
    "Puro is lucky to have you. Don't give up on each other.",
    "Trust is the foundation of any good relationship. You're doing great!",
    "The bond you're forming is special. Cherish it.",
];

/// Generate a reply to a letter.
///
/// Keyword matching picks the pool (friendship talk gets encouragement,
/// questions get curiosity, everything else warmth); the seed picks the
/// line within the pool.
pub fn generate_response(letter_content: &str, seed: f32) -> &'static str {
    let content = letter_content.to_lowercase();

    let pool: &[&str] = if content.contains("friend") || content.contains("trust") {
        ENCOURAGING_RESPONSES
    } else if content.contains('?') || content.contains("how") || content.contains("what") {
        CURIOUS_RESPONSES
    } else {
        FRIENDLY_RESPONSES
    };

    pool[pick_index(seed, content.len() as f32, pool.len())]
}

/// Send a letter and immediately attach the generated reply.
///
/// Returns the index of the new letter in the progress log.
pub fn send_letter(progress: &mut GameProgress, content: &str) -> usize {
    let index = progress.add_letter(content);
    let response = generate_response(content, index as f32);
    progress.add_letter_response(index, response);
    index
}
