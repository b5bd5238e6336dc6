//! Built-in seed data: search engines, starter bookmarks, and the quote catalog.

use crate::model::{Bookmark, SearchEngine};

/// One entry in the built-in quote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePreset {
    /// Quote body.
    pub text: &'static str,
    /// Attributed author.
    pub author: &'static str,
}

/// Built-in quote catalog, one of which renders per day.
pub const QUOTES: [QuotePreset; 22] = [
    QuotePreset {
        text: "Simplicity is the ultimate sophistication.",
        author: "Leonardo da Vinci",
    },
    QuotePreset {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    QuotePreset {
        text: "Everything you can imagine is real.",
        author: "Pablo Picasso",
    },
    QuotePreset {
        text: "Act as if what you do makes a difference. It does.",
        author: "William James",
    },
    QuotePreset {
        text: "Limit your 'always' and your 'nevers'.",
        author: "Amy Poehler",
    },
    QuotePreset {
        text: "Creativity is intelligence having fun.",
        author: "Albert Einstein",
    },
    QuotePreset {
        text: "Comparison is the thief of joy.",
        author: "Theodore Roosevelt",
    },
    QuotePreset {
        text: "Change the world by being yourself.",
        author: "Amy Poehler",
    },
    QuotePreset {
        text: "Every moment is a fresh beginning.",
        author: "T.S. Eliot",
    },
    QuotePreset {
        text: "Die with memories, not dreams.",
        author: "Unknown",
    },
    QuotePreset {
        text: "Aspire to inspire before we expire.",
        author: "Unknown",
    },
    QuotePreset {
        text: "Whatever you are, be a good one.",
        author: "Abraham Lincoln",
    },
    QuotePreset {
        text: "Turn your wounds into wisdom.",
        author: "Oprah Winfrey",
    },
    QuotePreset {
        text: "The purpose of our lives is to be happy.",
        author: "Dalai Lama",
    },
    QuotePreset {
        text: "Life is what happens when you're busy making other plans.",
        author: "John Lennon",
    },
    QuotePreset {
        text: "Get busy living or get busy dying.",
        author: "Stephen King",
    },
    QuotePreset {
        text: "You only live once, but if you do it right, once is enough.",
        author: "Mae West",
    },
    QuotePreset {
        text: "The best way to predict your future is to create it.",
        author: "Abraham Lincoln",
    },
    QuotePreset {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
    },
    QuotePreset {
        text: "Do not wait; the time will never be 'just right'.",
        author: "Napoleon Hill",
    },
    QuotePreset {
        text: "It always seems impossible until it's done.",
        author: "Nelson Mandela",
    },
    QuotePreset {
        text: "Dream big and dare to fail.",
        author: "Norman Vaughan",
    },
];

/// Returns the catalog quote for a day index (day of year, month day, any stable counter).
pub fn quote_for_day(day_index: u32) -> &'static QuotePreset {
    &QUOTES[day_index as usize % QUOTES.len()]
}

/// Returns the selectable search engines, default first.
pub fn search_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine {
            name: "Google".to_string(),
            url: "https://www.google.com/search?q=".to_string(),
        },
        SearchEngine {
            name: "DuckDuckGo".to_string(),
            url: "https://duckduckgo.com/?q=".to_string(),
        },
        SearchEngine {
            name: "Bing".to_string(),
            url: "https://www.bing.com/search?q=".to_string(),
        },
        SearchEngine {
            name: "YouTube".to_string(),
            url: "https://www.youtube.com/results?search_query=".to_string(),
        },
    ]
}

/// Returns the default search engine.
pub fn default_search_engine() -> SearchEngine {
    SearchEngine {
        name: "Google".to_string(),
        url: "https://www.google.com/search?q=".to_string(),
    }
}

/// Returns the starter bookmark set for a fresh profile.
pub fn seeded_bookmarks() -> Vec<Bookmark> {
    let bookmark = |id: &str, title: &str, url: &str, category: &str, is_favorite: bool| Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        category: category.to_string(),
        is_favorite,
    };
    vec![
        bookmark("1", "GitHub", "https://github.com", "Development", true),
        bookmark("2", "YouTube", "https://youtube.com", "Media", false),
        bookmark("3", "Reddit", "https://reddit.com", "Social", false),
        bookmark("4", "Gmail", "https://mail.google.com", "Work", true),
        bookmark("ai-1", "DeepSeek", "https://chat.deepseek.com", "AI Tools", false),
        bookmark("ai-2", "Gemini", "https://gemini.google.com", "AI Tools", false),
        bookmark("ai-3", "Claude", "https://claude.ai", "AI Tools", false),
        bookmark("ai-4", "Grok", "https://x.com/i/grok", "AI Tools", false),
        bookmark("ai-5", "Aixploria", "https://www.aixploria.com", "AI Tools", false),
    ]
}
