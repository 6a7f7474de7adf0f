//! Keyword responder.
//!
//! Maps a raw user message to a canned reply by evaluating an ordered list
//! of keyword rules against the lowercased message. The first matching rule
//! wins; when a rule has several candidate replies one is chosen uniformly
//! at random. Messages that match nothing get a random fallback reply
//! followed by a fixed hint.
//!
//! Keyword patterns are unanchored, so "this" matches the greeting rule via
//! "hi". That is the shop's long-standing behavior and is kept as is.

pub mod rules;

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use rules::{FALLBACK_HINT, FALLBACK_REPLIES, RULES};

/// A compiled keyword rule.
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replies: &'static [&'static str],
}

impl Rule {
    /// Rule name, e.g. `"greeting"` or `"shipping"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Candidate replies for this rule (never empty).
    pub fn replies(&self) -> &'static [&'static str] {
        self.replies
    }

    /// Whether the rule matches an already-lowercased message.
    pub fn is_match(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

static COMPILED_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|def| Rule {
            name: def.name,
            pattern: Regex::new(def.pattern).expect("built-in rule patterns are valid regexes"),
            replies: def.replies,
        })
        .collect()
});

/// The outcome of a single `respond` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to send back to the user.
    pub text: String,
    /// Name of the rule that produced the reply, `None` for the fallback.
    pub rule: Option<&'static str>,
}

/// Stateless keyword responder over the built-in rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Responder;

impl Responder {
    pub fn new() -> Self {
        Self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        COMPILED_RULES.as_slice()
    }

    /// Reply to `message` using the thread-local RNG.
    pub fn respond(&self, message: &str) -> Reply {
        self.respond_with(message, &mut rand::thread_rng())
    }

    /// Reply to `message`, drawing random choices from `rng`.
    ///
    /// Never fails and never returns an empty reply.
    pub fn respond_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Reply {
        let lowered = message.to_lowercase();

        if let Some(rule) = self.rules().iter().find(|rule| rule.is_match(&lowered)) {
            return Reply {
                text: pick(rule.replies, rng).to_string(),
                rule: Some(rule.name),
            };
        }

        Reply {
            text: format!("{}{}", pick(FALLBACK_REPLIES, rng), FALLBACK_HINT),
            rule: None,
        }
    }
}

fn pick<R: Rng + ?Sized>(candidates: &'static [&'static str], rng: &mut R) -> &'static str {
    candidates
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_REPLIES[0])
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn respond(message: &str) -> Reply {
        Responder::new().respond_with(message, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<_> = Responder::new().rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "greeting",
                "classic",
                "sugar_free",
                "strawberry",
                "ginger",
                "lavender",
                "shipping",
                "returns",
                "vegan",
                "price",
                "flavor_list",
                "menu",
            ]
        );
    }

    #[test]
    fn test_every_rule_has_replies() {
        for rule in Responder::new().rules() {
            assert!(!rule.replies().is_empty(), "rule {} has no replies", rule.name());
            assert!(rule.replies().iter().all(|r| !r.is_empty()));
        }
    }

    #[test]
    fn test_greeting_drawn_from_greeting_set() {
        for message in ["hi", "Hello there", "HEY", "greetings, friend"] {
            let reply = respond(message);
            assert_eq!(reply.rule, Some("greeting"));
            assert!(GREETING_REPLIES.contains(&reply.text.as_str()));
        }
    }

    #[test]
    fn test_greeting_takes_precedence_over_products() {
        let reply = respond("hello, do you sell ginger lemonade?");
        assert_eq!(reply.rule, Some("greeting"));
        assert!(GREETING_REPLIES.contains(&reply.text.as_str()));
    }

    #[test]
    fn test_product_takes_precedence_over_faq() {
        let reply = respond("what's the price of the strawberry one?");
        assert_eq!(reply.rule, Some("strawberry"));
        assert_eq!(reply.text, STRAWBERRY_REPLY);
    }

    #[test]
    fn test_product_rules() {
        assert_eq!(respond("I want the original").text, CLASSIC_REPLY);
        assert_eq!(respond("got any sugar-free?").text, SUGAR_FREE_REPLY);
        assert_eq!(respond("I'm on a diet").text, SUGAR_FREE_REPLY);
        assert_eq!(respond("do you have strawberry?").text, STRAWBERRY_REPLY);
        assert_eq!(respond("make it SPICY please").text, GINGER_REPLY);
        assert_eq!(respond("I like purple drinks").text, LAVENDER_REPLY);
    }

    #[test]
    fn test_faq_rules() {
        assert_eq!(respond("delivery time?").text, SHIPPING_REPLY);
        assert_eq!(respond("can I get a refund").text, RETURNS_REPLY);
        assert_eq!(respond("is it vegan").text, VEGAN_REPLY);
        assert_eq!(respond("how much does it cost").text, PRICE_REPLY);
        assert_eq!(respond("what flavors are there").text, FLAVOR_LIST_REPLY);
        assert_eq!(respond("can I see the menu").text, MENU_REPLY);
        assert_eq!(respond("what do you sell").text, MENU_REPLY);
    }

    #[test]
    fn test_unanchored_keywords_match_inside_words() {
        // "shipping" contains "hi", so the greeting rule wins.
        assert_eq!(respond("shipping?").rule, Some("greeting"));
    }

    #[test]
    fn test_fallback_has_hint() {
        let reply = respond("blorp");
        assert_eq!(reply.rule, None);
        assert!(reply.text.ends_with(FALLBACK_HINT));
        let prefix = reply.text.strip_suffix(FALLBACK_HINT).unwrap();
        assert!(FALLBACK_REPLIES.contains(&prefix));
    }

    #[test]
    fn test_empty_message_falls_back() {
        let reply = respond("");
        assert_eq!(reply.rule, None);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = Responder::new().respond_with("hey", &mut StdRng::seed_from_u64(42));
        let b = Responder::new().respond_with("hey", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_reply_is_non_empty() {
        assert!(!Responder::new().respond("tell me a joke").text.is_empty());
    }
}
