//! The canned reply table.
//!
//! Order matters: rules are not mutually exclusive and the first match wins.
//! Greetings come first, then product names, then FAQ topics.

/// A rule as written in source: a name, a keyword pattern, and its replies.
pub(crate) struct RuleDef {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replies: &'static [&'static str],
}

pub const GREETING_REPLIES: &[&str] = &[
    "Hi there! 👋 I'm Sunny, your lemonade expert. How can I help you today?",
    "Welcome to Sunny Sips! 🍋 What kind of lemonade are you looking for?",
    "Hey! Ready to find your perfect lemonade? 😊",
];

pub const CLASSIC_REPLY: &str = "Our Classic Lemonade is our bestseller! Made with fresh lemons and cane sugar. Would you like to try it?";

pub const SUGAR_FREE_REPLY: &str = "Yes! We have Sugar-Free Lemonade sweetened with stevia. It's delicious and has zero sugar!";

pub const STRAWBERRY_REPLY: &str = "Our Strawberry Bliss Lemonade is amazing! Fresh strawberry puree mixed with our classic recipe.";

pub const GINGER_REPLY: &str = "The Ginger Zing Lemonade has a nice kick! Fresh ginger blended perfectly with our lemonade.";

pub const LAVENDER_REPLY: &str = "Lavender Dream is our most unique flavor - floral, refreshing, and absolutely delightful!";

pub const SHIPPING_REPLY: &str = "We ship within 2-3 business days. Standard shipping takes 3-5 days. 🚚";

pub const RETURNS_REPLY: &str = "If you're not satisfied, contact us within 7 days for a full refund! 👍";

pub const VEGAN_REPLY: &str = "All our lemonades are 100% vegan and plant-based! 🌱";

pub const PRICE_REPLY: &str = "Our lemonades range from $4.99 to $27.99 for party packs. Which one interests you? 💰";

pub const FLAVOR_LIST_REPLY: &str = "We have Classic, Sugar-Free, Strawberry Bliss, Ginger Zing, and Lavender Dream! Which sounds good to you? 🍋🍓";

pub const MENU_REPLY: &str = "Here's our menu: Classic Lemonade, Sugar-Free Lemonade, Strawberry Bliss, Ginger Zing, Lavender Dream, and the Sunny Party Pack. Ask me about any of them! 📋";

pub const FALLBACK_REPLIES: &[&str] = &[
    "That's a great question! Let me help you with that.",
    "I'd be happy to help you find the perfect lemonade!",
    "Great choice! Let me tell you more about our options.",
];

/// Appended to every fallback reply.
pub const FALLBACK_HINT: &str = " You can ask me about our flavors, prices, or shipping!";

pub(crate) const RULES: &[RuleDef] = &[
    RuleDef {
        name: "greeting",
        pattern: "hi|hello|hey|greetings",
        replies: GREETING_REPLIES,
    },
    RuleDef {
        name: "classic",
        pattern: "classic|original|regular",
        replies: &[CLASSIC_REPLY],
    },
    RuleDef {
        name: "sugar_free",
        pattern: "sugar[ -]?free|no sugar|diet|zero sugar",
        replies: &[SUGAR_FREE_REPLY],
    },
    RuleDef {
        name: "strawberry",
        pattern: "strawberry|berry",
        replies: &[STRAWBERRY_REPLY],
    },
    RuleDef {
        name: "ginger",
        pattern: "ginger|spicy|zing",
        replies: &[GINGER_REPLY],
    },
    RuleDef {
        name: "lavender",
        pattern: "lavender|floral|purple",
        replies: &[LAVENDER_REPLY],
    },
    RuleDef {
        name: "shipping",
        pattern: "shipping|delivery|how long",
        replies: &[SHIPPING_REPLY],
    },
    RuleDef {
        name: "returns",
        pattern: "return|refund|money back",
        replies: &[RETURNS_REPLY],
    },
    RuleDef {
        name: "vegan",
        pattern: "vegan|plant based|dairy free",
        replies: &[VEGAN_REPLY],
    },
    RuleDef {
        name: "price",
        pattern: "price|cost|how much",
        replies: &[PRICE_REPLY],
    },
    RuleDef {
        name: "flavor_list",
        pattern: "flavor|flavours|types|kinds",
        replies: &[FLAVOR_LIST_REPLY],
    },
    RuleDef {
        name: "menu",
        pattern: "menu|catalog|what do you (sell|have|offer)",
        replies: &[MENU_REPLY],
    },
];
