//! Dialogue Tree
//!
//! The companion's conversation graph: static nodes with choices that shift
//! trust and lead to follow-up nodes. Some choices only appear above a trust
//! threshold. A choice with no successor ends the conversation.

use crate::game::state::GameProgress;

/// One selectable reply in a dialogue node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogueChoice {
    /// Choice index within its node.
    pub id: u32,
    /// Reply text shown to the player.
    pub text: &'static str,
    /// Trust delta applied when chosen.
    pub trust_effect: i32,
    /// Node to continue to; `None` closes the conversation.
    pub next_node: Option<u32>,
    /// Minimum trust for this choice to be offered.
    pub trust_requirement: Option<i32>,
}

/// One line of companion dialogue and its replies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogueNode {
    /// Node id referenced by `next_node` links.
    pub id: u32,
    /// What the companion says.
    pub text: &'static str,
    /// Replies offered to the player.
    pub choices: &'static [DialogueChoice],
}

const fn choice(id: u32, text: &'static str, trust_effect: i32, next_node: Option<u32>) -> DialogueChoice {
    DialogueChoice {
        id,
        text,
        trust_effect,
        next_node,
        trust_requirement: None,
    }
}

const fn gated_choice(
    id: u32,
    text: &'static str,
    trust_effect: i32,
    next_node: Option<u32>,
    trust_requirement: i32,
) -> DialogueChoice {
    DialogueChoice {
        id,
        text,
        trust_effect,
        next_node,
        trust_requirement: Some(trust_requirement),
    }
}

/// The full conversation graph. Node 0 is the hub every thread returns to.
pub static DIALOGUE_TREE: &[DialogueNode] = &[
    DialogueNode {
        id: 0,
        text: "Hello! It's nice to see you here in the library. What would you like to talk about?",
        choices: &[
            choice(0, "Tell me about the laboratory.", 3, Some(1)),
            choice(1, "What is the Pale virus?", 2, Some(2)),
            choice(2, "Why are you so interested in humans?", 5, Some(3)),
            choice(3, "Let's just spend time together.", 8, None),
        ],
    },
    DialogueNode {
        id: 1,
        text: "The laboratory... it's a place of many mysteries. I don't remember everything clearly, but I know it was where I became... aware. It's both fascinating and frightening to think about.",
        choices: &[
            choice(0, "That sounds difficult. I'm here for you.", 10, Some(4)),
            choice(1, "Do you want to go back?", -5, Some(5)),
            choice(2, "Tell me more about what you remember.", 5, Some(6)),
        ],
    },
    DialogueNode {
        id: 2,
        text: "The Pale virus... it's what changed everything. It transforms living beings into latex creatures like me. But I'm different - I can think, feel, and choose. Most others can't.",
        choices: &[
            choice(0, "You're special, Puro.", 8, Some(7)),
            choice(1, "That sounds dangerous.", -3, Some(8)),
            choice(2, "How did you become sentient?", 4, Some(9)),
        ],
    },
    DialogueNode {
        id: 3,
        text: "Humans are... amazing. You have so much creativity, emotion, and individuality. I've learned so much from the books here, but experiencing friendship with you is something I never imagined possible.",
        choices: &[
            choice(0, "I'm glad we're friends.", 12, Some(10)),
            choice(1, "You're pretty amazing yourself.", 10, Some(11)),
            choice(2, "What do you want to learn next?", 7, Some(12)),
        ],
    },
    DialogueNode {
        id: 4,
        text: "Thank you... that means more to me than you know. Having someone who understands makes this place feel less lonely.",
        choices: &[
            gated_choice(0, "We'll face everything together.", 8, Some(0), 40),
            choice(1, "You're never alone now.", 10, Some(0)),
        ],
    },
    DialogueNode {
        id: 5,
        text: "No... I don't think so. The laboratory holds too many painful memories. This library is my home now, especially with you here.",
        choices: &[choice(0, "I'm glad you're staying.", 7, Some(0))],
    },
    DialogueNode {
        id: 6,
        text: "I remember... cold rooms, bright lights, and the feeling of being watched. But also books - so many books. That's where I learned to read, to think, to dream.",
        choices: &[
            choice(0, "Books saved you.", 6, Some(0)),
            choice(1, "You've come so far.", 8, Some(0)),
        ],
    },
    DialogueNode {
        id: 7,
        text: "*Puro's eyes light up* You really think so? Sometimes I wonder if I'm just... an accident. But when you say that, I feel like maybe I have a purpose.",
        choices: &[
            gated_choice(0, "Your purpose is to be yourself.", 10, Some(0), 50),
            choice(1, "We'll find your purpose together.", 8, Some(0)),
        ],
    },
    DialogueNode {
        id: 8,
        text: "I... I understand your concern. But I promise, I would never hurt you. You're my friend, and that's more important than anything.",
        choices: &[
            choice(0, "I trust you, Puro.", 12, Some(0)),
            choice(1, "I know you wouldn't.", 8, Some(0)),
        ],
    },
    DialogueNode {
        id: 9,
        text: "I'm not entirely sure. One day, I just... woke up. I could think, question, wonder. The books helped me understand what I was experiencing. Consciousness is a strange gift.",
        choices: &[choice(0, "It's a beautiful gift.", 7, Some(0))],
    },
    DialogueNode {
        id: 10,
        text: "*Puro's tail wags slightly* Me too. You've made this library feel like a real home. Thank you for accepting me as I am.",
        choices: &[choice(0, "Always.", 5, Some(0))],
    },
    DialogueNode {
        id: 11,
        text: "*Puro looks down shyly* I... thank you. Coming from you, that means everything.",
        choices: &[choice(0, "I mean it.", 6, Some(0))],
    },
    DialogueNode {
        id: 12,
        text: "I want to learn about friendship, about trust, about what it means to truly connect with someone. You're teaching me that every day.",
        choices: &[choice(0, "We're learning together.", 9, Some(0))],
    },
];

/// Look up a node by id.
pub fn node(id: u32) -> Option<&'static DialogueNode> {
    DIALOGUE_TREE.iter().find(|n| n.id == id)
}

/// Open the conversation at the hub node.
pub fn start(progress: &mut GameProgress) -> &'static DialogueNode {
    progress.current_dialogue_node = Some(0);
    &DIALOGUE_TREE[0]
}

/// Choices from a node that the current trust level unlocks.
pub fn available_choices(node: &'static DialogueNode, trust: i32) -> Vec<&'static DialogueChoice> {
    node.choices
        .iter()
        .filter(|c| c.trust_requirement.is_none_or(|required| trust >= required))
        .collect()
}

/// Apply a choice: shift trust and advance (or close) the conversation.
///
/// Returns the next node, or `None` when the conversation ended.
pub fn choose(
    progress: &mut GameProgress,
    choice: &DialogueChoice,
) -> Option<&'static DialogueNode> {
    progress.adjust_trust(choice.trust_effect);
    progress.current_dialogue_node = choice.next_node;
    choice.next_node.and_then(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_links_resolve() {
        for dialogue_node in DIALOGUE_TREE {
            for c in dialogue_node.choices {
                if let Some(next) = c.next_node {
                    assert!(
                        node(next).is_some(),
                        "node {} choice {} links to missing node {}",
                        dialogue_node.id,
                        c.id,
                        next
                    );
                }
            }
        }
    }

    #[test]
    fn test_start_opens_hub() {
        let mut progress = GameProgress::new();
        let hub = start(&mut progress);
        assert_eq!(hub.id, 0);
        assert_eq!(progress.current_dialogue_node, Some(0));
    }

    #[test]
    fn test_trust_gated_choice_hidden_below_threshold() {
        let deep_node = node(7).unwrap();

        let low = available_choices(deep_node, 49);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, 1);

        let high = available_choices(deep_node, 50);
        assert_eq!(high.len(), 2);
    }

    #[test]
    fn test_choose_applies_trust_and_advances() {
        let mut progress = GameProgress::new();
        let hub = start(&mut progress);

        // "Why are you so interested in humans?" (+5, to node 3)
        let next = choose(&mut progress, &hub.choices[2]).unwrap();
        assert_eq!(next.id, 3);
        assert_eq!(progress.trust_level, 55);
        assert_eq!(progress.current_dialogue_node, Some(3));
    }

    #[test]
    fn test_terminal_choice_closes_conversation() {
        let mut progress = GameProgress::new();
        let hub = start(&mut progress);

        // "Let's just spend time together." (+8, ends)
        let next = choose(&mut progress, &hub.choices[3]);
        assert!(next.is_none());
        assert_eq!(progress.current_dialogue_node, None);
        assert_eq!(progress.trust_level, 58);
    }

    #[test]
    fn test_negative_choice_lowers_trust() {
        let mut progress = GameProgress::new();
        start(&mut progress);
        let lab_node = node(1).unwrap();

        // "Do you want to go back?" (-5)
        choose(&mut progress, &lab_node.choices[1]);
        assert_eq!(progress.trust_level, 45);
    }
}
