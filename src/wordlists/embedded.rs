//! Embedded secret-word pool
//!
//! A curated set of common 5-letter words used when the host does not
//! supply a secret. Kept deliberately small and familiar so randomly
//! hosted games stay guessable.

/// Default pool of secret words (5 letters, lowercase)
pub const SECRET_POOL: &[&str] = &[
    "about", "alarm", "alloy", "angel", "apple", "arena", "badge", "basic", "beach", "blaze",
    "bread", "brick", "bride", "brush", "cabin", "candy", "cargo", "chair", "charm", "chess",
    "cider", "cloud", "coast", "coral", "crane", "crate", "cream", "crisp", "crown", "dance",
    "diary", "dough", "draft", "dream", "drift", "eagle", "earth", "ebony", "elbow", "ember",
    "fable", "fairy", "feast", "fence", "fever", "flame", "fleet", "flock", "frost", "fruit",
    "giant", "glade", "glory", "grain", "grape", "grasp", "green", "grove", "heart", "hedge",
    "honey", "hotel", "house", "ivory", "jelly", "jewel", "juice", "lemon", "light", "lunar",
    "maple", "marsh", "melon", "mirth", "mango", "month", "mount", "music", "night", "noble",
    "ocean", "olive", "onion", "opera", "orbit", "peach", "pearl", "piano", "plant", "plaza",
    "pride", "prism", "quilt", "radio", "raven", "ridge", "river", "robin", "salad", "scarf",
    "shade", "shelf", "shore", "slate", "smile", "solar", "speed", "spice", "stone", "storm",
    "sugar", "sunny", "swirl", "table", "tiger", "torch", "trail", "trunk", "tulip", "vivid",
    "wagon", "water", "wheat", "world", "youth", "zesty",
];

/// Number of words in the default pool
pub const SECRET_POOL_COUNT: usize = SECRET_POOL.len();
