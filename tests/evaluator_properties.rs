use holdem_rs::cards::{Card, Rank, Suit};
use holdem_rs::evaluator::{classify, compare_hands, compare_players, select_best};
use holdem_rs::hand::Hand;
use proptest::prelude::*;
use std::cmp::Ordering;

prop_compose! {
    fn any_rank()(v in 1u8..=13u8) -> Rank {
        Rank::try_from(v).unwrap()
    }
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for &s in Suit::ALL.iter() {
        for &r in Rank::ALL.iter() {
            cards.push(Card::new(r, s));
        }
    }
    cards
}

/// Seven distinct cards, as dealt from one deck.
fn seven_distinct_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), 7)
}

fn five_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(any_card(), 5)
}

proptest! {
    #[test]
    fn classification_is_total_and_order_invariant(
        (original, shuffled) in five_cards().prop_flat_map(|cards| {
            let reordered = Just(cards.clone()).prop_shuffle();
            (Just(cards), reordered)
        })
    ) {
        let a = Hand::from_slice(&original).unwrap();
        let b = Hand::from_slice(&shuffled).unwrap();
        let category = classify(&a);
        prop_assert!((1..=10).contains(&category.ordinal()));
        prop_assert_eq!(category, classify(&b));
    }

    #[test]
    fn hand_comparison_is_antisymmetric_and_reflexive(
        a in five_cards(), b in five_cards()
    ) {
        let ha = Hand::from_slice(&a).unwrap();
        let hb = Hand::from_slice(&b).unwrap();
        prop_assert_eq!(compare_hands(&ha, &hb), compare_hands(&hb, &ha).reverse());
        prop_assert_eq!(compare_hands(&ha, &ha), Ordering::Equal);
        prop_assert_eq!(compare_hands(&hb, &hb), Ordering::Equal);
    }

    #[test]
    fn best_of_seven_dominates_every_five_card_subset(cards in seven_distinct_cards()) {
        let best = select_best(&cards).unwrap();

        for i in 0..3 { for j in (i+1)..4 { for k in (j+1)..5 { for l in (k+1)..6 { for m in (l+1)..7 {
            let five = Hand::new([cards[i], cards[j], cards[k], cards[l], cards[m]]);
            prop_assert!(classify(&five) <= best.category);
            prop_assert_ne!(compare_hands(&best.best_hand, &five), Ordering::Less);
        }}}}}
    }

    #[test]
    fn showdown_is_antisymmetric(pool in seven_distinct_cards(), others in seven_distinct_cards()) {
        let community = &pool[..5];
        let p1 = &pool[5..];
        let p2 = &others[..2];

        let forward = compare_players(p1, p2, community).unwrap();
        let backward = compare_players(p2, p1, community).unwrap();
        prop_assert_eq!(forward.result, -backward.result);
    }

    #[test]
    fn identical_pools_always_tie(pool in seven_distinct_cards()) {
        let community = &pool[..5];
        let hole = &pool[5..];
        let outcome = compare_players(hole, hole, community).unwrap();
        prop_assert_eq!(outcome.result, 0);
    }

    #[test]
    fn straights_order_by_top_card(hi in 7u8..=13u8, lo in 6u8..=12u8) {
        prop_assume!(hi > lo);
        let hi_hand = straight_to(hi);
        let lo_hand = straight_to(lo);
        prop_assert_eq!(compare_hands(&hi_hand, &lo_hand), Ordering::Greater);
    }
}

/// A mixed-suit straight whose strongest card has raw value `top` (6..=13).
fn straight_to(top: u8) -> Hand {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let cards: Vec<Card> = (0..5)
        .map(|i| Card::new(Rank::try_from(top - i as u8).unwrap(), suits[i]))
        .collect();
    Hand::from_slice(&cards).unwrap()
}
