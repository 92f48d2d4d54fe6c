//! Keyword-based category inference.

use std::sync::LazyLock;

use regex::Regex;

use super::message::Category;

/// Keyword bag per category. Matching is case-insensitive, whole-word, and
/// tolerates a plural `s`/`es`.
const KEYWORDS: [(Category, &[&str]); 10] = [
    (
        Category::Career,
        &[
            "career", "career fair", "internship", "job", "recruiting", "recruiter", "resume",
            "hiring", "interview", "employer", "info session",
        ],
    ),
    (
        Category::Food,
        &[
            "food", "pizza", "lunch", "dinner", "breakfast", "brunch", "snack", "refreshment",
            "bbq", "barbecue", "cookie", "donut", "taco", "boba", "dessert", "ice cream",
            "catering", "potluck",
        ],
    ),
    (
        Category::Fun,
        &[
            "fun", "game night", "trivia", "karaoke", "movie", "party", "bingo", "escape room",
            "carnival", "festival",
        ],
    ),
    (
        Category::Academic,
        &[
            "lecture", "seminar", "workshop", "class", "study", "research", "talk", "symposium",
            "colloquium", "thesis", "office hours", "tutoring", "review session",
        ],
    ),
    (
        Category::Networking,
        &[
            "networking", "mixer", "meet and greet", "meet & greet", "alumni", "panel",
            "coffee chat", "linkedin",
        ],
    ),
    (
        Category::Social,
        &[
            "social", "hangout", "hang out", "gathering", "meetup", "meet up", "club",
            "celebration", "mixer", "potluck",
        ],
    ),
    (
        Category::Sports,
        &[
            "sports", "sport", "game", "basketball", "soccer", "football", "volleyball", "tennis",
            "baseball", "intramural", "tournament", "pickup", "athletics",
        ],
    ),
    (
        Category::Arts,
        &[
            "art", "arts", "music", "concert", "theater", "theatre", "dance", "gallery", "film",
            "poetry", "painting", "a cappella", "open mic", "exhibit",
        ],
    ),
    (
        Category::Tech,
        &[
            "tech", "hackathon", "coding", "programming", "software", "ai", "machine learning",
            "startup", "engineering", "developer", "data science", "robotics",
        ],
    ),
    (
        Category::Wellness,
        &[
            "wellness", "yoga", "meditation", "mindfulness", "mental health", "fitness",
            "self-care", "self care", "therapy dog", "workout",
        ],
    ),
];

static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|(category, words)| {
            let alternatives: Vec<String> = words
                .iter()
                .map(|w| regex::escape(w).replace(' ', r"\s+"))
                .collect();
            let pattern = format!(r"(?i)\b(?:{})(?:s|es)?\b", alternatives.join("|"));
            (*category, Regex::new(&pattern).expect("Invalid regex"))
        })
        .collect()
});

/// Infer categories from the full message text.
///
/// Any number of categories may match; they are returned in
/// [`Category::KEYWORDED`] order. No match yields `[Uncategorized]`.
pub fn infer_categories(text: &str) -> Vec<Category> {
    let matched: Vec<Category> = CATEGORY_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(category, _)| *category)
        .collect();

    if matched.is_empty() {
        vec![Category::Uncategorized]
    } else {
        matched
    }
}
