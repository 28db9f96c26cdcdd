//! Embedded word lists
//!
//! Category table compiled into the binary.

/// Built-in categories as `(name, words)` pairs
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "animals",
        &[
            "elephant", "giraffe", "kangaroo", "penguin", "dolphin", "tiger", "zebra", "octopus",
            "squirrel", "hedgehog", "cheetah", "gorilla",
        ],
    ),
    (
        "fruits",
        &[
            "banana", "apple", "mango", "pineapple", "strawberry", "cherry", "papaya", "kiwi",
            "apricot", "watermelon", "grape", "coconut",
        ],
    ),
    (
        "countries",
        &[
            "canada", "brazil", "germany", "japan", "kenya", "norway", "mexico", "india",
            "portugal", "argentina", "egypt", "vietnam",
        ],
    ),
    (
        "colors",
        &[
            "purple", "orange", "yellow", "crimson", "turquoise", "magenta", "indigo", "scarlet",
            "violet", "maroon",
        ],
    ),
    (
        "sports",
        &[
            "football", "tennis", "cricket", "basketball", "hockey", "baseball", "volleyball",
            "rugby", "badminton", "swimming",
        ],
    ),
    (
        "programming",
        &[
            "compiler", "variable", "function", "iterator", "closure", "pointer", "borrow",
            "lifetime", "module", "trait", "keyword", "recursion",
        ],
    ),
];

/// Number of built-in categories
pub const CATEGORIES_COUNT: usize = CATEGORIES.len();
