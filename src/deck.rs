//! Built-in flashcard decks
//!
//! Cards are compiled in and receive their id from their position in the deck.

use serde::{Deserialize, Serialize};

/// Stable, 0-based card identifier
pub type CardId = usize;

/// A single prompt/answer pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub front: String,
    pub back: String,
}

/// Which built-in deck to review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeckChoice {
    #[default]
    WebStack,
    Starter,
}

impl DeckChoice {
    pub const ALL: [DeckChoice; 2] = [DeckChoice::WebStack, DeckChoice::Starter];

    pub fn label(self) -> &'static str {
        match self {
            DeckChoice::WebStack => "Web stack (24 cards)",
            DeckChoice::Starter => "Starter (20 cards)",
        }
    }

    fn pairs(self) -> &'static [(&'static str, &'static str)] {
        match self {
            DeckChoice::WebStack => WEB_STACK,
            DeckChoice::Starter => STARTER,
        }
    }
}

const WEB_STACK: &[(&str, &str)] = &[
    ("What is React?", "A JavaScript library for building user interfaces, maintained by Meta and the community."),
    ("What is Figma?", "A collaborative browser-based interface design tool for creating UI/UX designs."),
    ("What is CSS Grid?", "A two-dimensional layout system for the web that handles both columns and rows."),
    ("What is an API?", "Application Programming Interface - allows different software systems to communicate with each other."),
    ("What is JavaScript?", "A high-level programming language that enables interactive web experiences and runs in browsers."),
    ("What is HTML?", "HyperText Markup Language - the standard markup language for structuring content on the web."),
    ("What is TypeScript?", "A superset of JavaScript that adds static typing and advanced features for better code quality."),
    ("What is Git?", "A distributed version control system for tracking changes in code and enabling team collaboration."),
    ("What is Node.js?", "A JavaScript runtime built on Chrome V8 engine that allows JavaScript to run on the server side."),
    ("What is REST API?", "Representational State Transfer - an architectural style for designing networked applications using HTTP."),
    ("What is GraphQL?", "A query language for APIs that provides efficient and flexible data fetching from servers."),
    ("What is Docker?", "A platform for developing, shipping, and running applications in isolated containers."),
    ("What is Kubernetes?", "An open-source system for automating deployment, scaling, and management of containerized applications."),
    ("What is MongoDB?", "A NoSQL document database that stores data in flexible, JSON-like documents."),
    ("What is PostgreSQL?", "A powerful open-source relational database system known for reliability and feature robustness."),
    ("What is Redis?", "An in-memory data structure store used as database, cache, and message broker for fast data access."),
    ("What is Webpack?", "A static module bundler for JavaScript applications that processes and bundles code efficiently."),
    ("What is CI/CD?", "Continuous Integration and Continuous Deployment - practices that automate testing and deployment pipelines."),
    ("What is Three.js?", "A JavaScript 3D library that makes WebGL easier to use for creating 3D graphics in the browser."),
    ("What is React Fiber?", "React's reconciliation algorithm that enables incremental rendering and better performance."),
    ("What is WebGL?", "Web Graphics Library - a JavaScript API for rendering 2D and 3D graphics in web browsers."),
    ("What is JSON?", "JavaScript Object Notation - a lightweight data interchange format that is easy to read and write."),
    ("What is OAuth?", "An open standard for access delegation used for secure authorization in web applications."),
    ("What is AWS?", "Amazon Web Services - a comprehensive cloud computing platform offering various infrastructure services."),
];

const STARTER: &[(&str, &str)] = &[
    ("Flashcard 1", "A collaborative browser-based interface design tool"),
    ("Flashcard 2", "React is a JavaScript library for building user interfaces"),
    ("Flashcard 3", "CSS Grid is a two-dimensional layout system for the web"),
    ("Flashcard 4", "APIs allow different software systems to communicate"),
    ("Flashcard 5", "JavaScript enables interactive web experiences"),
    ("Flashcard 6", "HTML structures content on the web"),
    ("Flashcard 7", "CSS styles and layouts web pages"),
    ("Flashcard 8", "Git manages code versions and collaboration"),
    ("Flashcard 9", "Responsive design adapts to different screen sizes"),
    ("Flashcard 10", "TypeScript adds static typing to JavaScript"),
    ("Flashcard 11", "Node.js runs JavaScript on the server side"),
    ("Flashcard 12", "REST APIs enable communication between systems"),
    ("Flashcard 13", "GraphQL provides efficient data querying"),
    ("Flashcard 14", "Docker containerizes applications for deployment"),
    ("Flashcard 15", "Kubernetes orchestrates containerized applications"),
    ("Flashcard 16", "MongoDB is a NoSQL document database"),
    ("Flashcard 17", "PostgreSQL is a powerful relational database"),
    ("Flashcard 18", "Redis provides fast in-memory data storage"),
    ("Flashcard 19", "Webpack bundles JavaScript modules efficiently"),
    ("Flashcard 20", "CI/CD automates testing and deployment"),
];

/// An ordered, immutable list of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn builtin(choice: DeckChoice) -> Self {
        Self::from_pairs(choice.pairs())
    }

    /// Build a deck, assigning ids by position
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let cards = pairs
            .iter()
            .enumerate()
            .map(|(id, (front, back))| Card {
                id,
                front: front.to_string(),
                back: back.to_string(),
            })
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin(DeckChoice::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deck_has_24_cards() {
        let deck = Deck::default();
        assert_eq!(deck.len(), 24);
        assert_eq!(deck.cards()[0].front, "What is React?");
        assert_eq!(deck.cards()[23].front, "What is AWS?");
    }

    #[test]
    fn ids_follow_position() {
        for choice in DeckChoice::ALL {
            let deck = Deck::builtin(choice);
            for (index, card) in deck.cards().iter().enumerate() {
                assert_eq!(card.id, index);
                assert_eq!(deck.get(index), Some(card));
            }
        }
    }

    #[test]
    fn starter_deck_titles() {
        let deck = Deck::builtin(DeckChoice::Starter);
        assert_eq!(deck.len(), 20);
        assert_eq!(deck.cards()[19].front, "Flashcard 20");
        assert!(deck.get(20).is_none());
    }
}
