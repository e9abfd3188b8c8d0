//! Standard 52-card deck used to count card-draw outcomes exactly.
//!
//! Probability questions about cards are answered by enumerating the deck
//! rather than by hard-coding counts, so overlapping events (a heart that is
//! also a face card) are always handled correctly.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Clubs    => write!(f, "clubs"),
            Suit::Diamonds => write!(f, "diamonds"),
            Suit::Hearts   => write!(f, "hearts"),
            Suit::Spades   => write!(f, "spades"),
        }
    }
}

/// Rank 1..=13 where 1 = Ace, 11 = Jack, 12 = Queen, 13 = King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(pub u8);

impl Rank {
    pub fn is_face(self) -> bool {
        (11..=13).contains(&self.0)
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "ace", 2 => "2", 3 => "3", 4 => "4", 5 => "5",
            6 => "6", 7 => "7", 8 => "8", 9 => "9", 10 => "10",
            11 => "jack", 12 => "queen", 13 => "king",
            _ => "?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// Properties a drawn card can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Heart,
    FaceCard,
    Red,
    OfSuit(Suit),
    OfRank(Rank),
}

impl CardEvent {
    pub fn matches(self, card: Card) -> bool {
        match self {
            CardEvent::Heart     => card.suit == Suit::Hearts,
            CardEvent::FaceCard  => card.rank.is_face(),
            CardEvent::Red       => card.suit.is_red(),
            CardEvent::OfSuit(s) => card.suit == s,
            CardEvent::OfRank(r) => card.rank == r,
        }
    }

    /// Phrase with an indefinite article, e.g. "a face card (jack, queen, or king)".
    pub fn describe(self) -> String {
        match self {
            CardEvent::Heart     => "a heart".to_string(),
            CardEvent::FaceCard  => "a face card (jack, queen, or king)".to_string(),
            CardEvent::Red       => "a red card".to_string(),
            CardEvent::OfSuit(s) => format!("a card from the {s} suit"),
            CardEvent::OfRank(r) if r.0 == 1 || r.0 == 8 => format!("an {}", r.name()),
            CardEvent::OfRank(r) => format!("a {}", r.name()),
        }
    }

    /// Short plural noun used in counting sentences ("hearts", "red cards").
    pub fn plural(self) -> String {
        match self {
            CardEvent::Heart     => "hearts".to_string(),
            CardEvent::FaceCard  => "face cards".to_string(),
            CardEvent::Red       => "red cards".to_string(),
            CardEvent::OfSuit(s) => format!("{s}"),
            CardEvent::OfRank(r) => format!("{}s", r.name()),
        }
    }
}

/// Counts of ordered two-card draws without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCounts {
    /// Cards satisfying the first event.
    pub first: usize,
    /// Ordered pairs whose first card satisfies the first event.
    pub given: usize,
    /// Of those, pairs whose second card also satisfies the second event.
    pub both: usize,
}

/// A standard 52-card deck in fixed order.
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| (1u8..=13).map(move |r| Card { rank: Rank(r), suit }))
            .collect();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards matching `event`.
    pub fn count(&self, event: CardEvent) -> usize {
        self.cards.iter().filter(|&&c| event.matches(c)).count()
    }

    /// Enumerate every ordered pair of distinct cards.
    pub fn count_draws(&self, first: CardEvent, second: CardEvent) -> DrawCounts {
        let mut counts = DrawCounts { first: 0, given: 0, both: 0 };
        for (i, &a) in self.cards.iter().enumerate() {
            if !first.matches(a) {
                continue;
            }
            counts.first += 1;
            for (j, &b) in self.cards.iter().enumerate() {
                if i == j {
                    continue;
                }
                counts.given += 1;
                if second.matches(b) {
                    counts.both += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_52_unique_cards() {
        let deck = Deck::standard();
        let mut seen = std::collections::HashSet::new();
        for c in deck.cards() {
            assert!(seen.insert(*c), "Duplicate card: {:?}", c);
        }
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn event_counts() {
        let deck = Deck::standard();
        assert_eq!(deck.count(CardEvent::Heart), 13);
        assert_eq!(deck.count(CardEvent::FaceCard), 12);
        assert_eq!(deck.count(CardEvent::Red), 26);
        assert_eq!(deck.count(CardEvent::OfRank(Rank(1))), 4);
    }

    #[test]
    fn same_event_twice_removes_one() {
        let counts = Deck::standard().count_draws(CardEvent::Heart, CardEvent::Heart);
        assert_eq!(counts.first, 13);
        assert_eq!(counts.given, 13 * 51);
        assert_eq!(counts.both, 13 * 12);
    }

    #[test]
    fn overlapping_events_are_counted_exactly() {
        // First card a face card (3 of which are hearts); second a heart.
        // 3 face hearts leave 12 hearts, 9 other face cards leave 13.
        let counts = Deck::standard().count_draws(CardEvent::FaceCard, CardEvent::Heart);
        assert_eq!(counts.given, 12 * 51);
        assert_eq!(counts.both, 3 * 12 + 9 * 13);
    }
}
