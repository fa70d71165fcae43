use crate::cards::{parse_cards, Card, Rank, Suit};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A five-card hand, canonicalized on construction: cards are sorted by raw
/// rank value descending (Ace last), with suit as a deterministic tiebreak.
///
/// The classifier and the magnitude comparators require this ordering; routing
/// every hand through this type is what guarantees it. Note that the wheel
/// reads `5 4 3 2 A` and Broadway reads `K Q J 10 A` in canonical form.
///
/// ```
/// use holdem_rs::hand::Hand;
///
/// let hand: Hand = "3s Ah 10d Kc 9s".parse().unwrap();
/// assert_eq!(hand.to_string(), "Kc Td 9s 3s Ah");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    pub fn new(mut cards: [Card; 5]) -> Self {
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        Self { cards }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Ok(Self::new(cards))
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Ranks in canonical (raw descending) order.
    pub fn ranks(&self) -> [Rank; 5] {
        [
            self.cards[0].rank(),
            self.cards[1].rank(),
            self.cards[2].rank(),
            self.cards[3].rank(),
            self.cards[4].rank(),
        ]
    }

    pub fn suits(&self) -> [Suit; 5] {
        [
            self.cards[0].suit(),
            self.cards[1].suit(),
            self.cards[2].suit(),
            self.cards[3].suit(),
            self.cards[4].suit(),
        ]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.cards[0], self.cards[1], self.cards[2], self.cards[3], self.cards[4]
        )
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
