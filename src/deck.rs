use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in Suit::ALL.iter() {
            for &r in Rank::ALL.iter() {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal a Hold'em round: two hole cards per player, then the five
    /// community cards. Returns `None` if the deck is too short.
    ///
    /// ```
    /// use holdem_rs::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(42);
    /// let (players, community) = deck.deal_holdem(4).unwrap();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(community.len(), 5);
    /// assert_eq!(deck.len(), 52 - 4 * 2 - 5);
    /// ```
    pub fn deal_holdem(&mut self, players: usize) -> Option<(Vec<[Card; 2]>, [Card; 5])> {
        if self.cards.len() < players * 2 + 5 {
            return None;
        }
        let hands = (0..players)
            .map(|_| {
                let a = self.cards.pop()?;
                let b = self.cards.pop()?;
                Some([a, b])
            })
            .collect::<Option<Vec<_>>>()?;
        let community = [self.draw()?, self.draw()?, self.draw()?, self.draw()?, self.draw()?];
        Some((hands, community))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn deal_holdem_yields_disjoint_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(9);
        let (players, community) = d.deal_holdem(6).unwrap();
        assert_eq!(players.len(), 6);

        let mut seen = HashSet::new();
        for hole in &players {
            for c in hole {
                assert!(seen.insert(*c));
            }
        }
        for c in &community {
            assert!(seen.insert(*c));
        }
        assert_eq!(seen.len(), 6 * 2 + 5);
        assert_eq!(d.len(), 52 - 17);
    }

    #[test]
    fn deal_holdem_refuses_short_deck() {
        let mut d = Deck::standard();
        // 23 players need 51 cards; 24 need 53.
        assert!(d.deal_holdem(24).is_none());
        assert_eq!(d.len(), 52);
        assert!(d.deal_holdem(23).is_some());
    }
}
