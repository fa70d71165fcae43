pub(crate) mod combinations;
pub(crate) mod compare;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::Hand;
use core::cmp::Ordering;

/// Poker hand category from weakest to strongest. The numeric value is the
/// category's rank in the ladder: 1 (high card) through 10 (royal flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// A player's best achievable hand and its category.
///
/// Ordering (and equality) follow hand strength: category first, then the
/// category-specific tie-break. Two results holding different cards compare
/// equal when the hands are equivalent in strength.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct EvaluationResult {
    pub best_hand: Hand,
    pub category: Category,
}

impl Ord for EvaluationResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| compare::same_category(self.category, &self.best_hand, &other.best_hand))
    }
}

impl PartialOrd for EvaluationResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluationResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluationResult {}

/// Outcome of a two-player showdown.
///
/// `result` uses the showdown sign convention: `0` is a tie, `1` means
/// player 1 loses (player 2 wins), `-1` means player 2 loses.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct ComparisonOutcome {
    pub result: i8,
    pub player1: EvaluationResult,
    pub player2: EvaluationResult,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("not enough cards to evaluate: need at least 5, got {0}")]
    InsufficientCards(usize),
}

/// Classify a five-card hand into its category.
///
/// The result depends only on the cards, not on the order they were given in
/// ([`Hand`] canonicalizes on construction).
///
/// ```
/// use holdem_rs::evaluator::{classify, Category};
/// use holdem_rs::hand::Hand;
///
/// let hand: Hand = "Ah Kh Qh Jh 10h".parse().unwrap();
/// assert_eq!(classify(&hand), Category::RoyalFlush);
///
/// let wheel: Hand = "Ah 2d 3s 4c 5d".parse().unwrap();
/// assert_eq!(classify(&wheel), Category::Straight);
/// ```
pub fn classify(hand: &Hand) -> Category {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (rank groups, flush/straight info)
    let analysis = HandAnalysis::new(hand);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.matches(&analysis) {
            return detector.category();
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}

/// Compare two five-card hands: category first, category-specific tie-break
/// second. `Less` means the first hand is the weaker one.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    let ca = classify(a);
    let cb = classify(b);
    ca.cmp(&cb).then_with(|| compare::same_category(ca, a, b))
}

/// Find the best five-card hand among all 5-card combinations of `cards`.
///
/// Every C(n,5) combination is classified and the maximum under the total
/// hand order is returned. Combinations of equal strength compare as equal,
/// so the selection does not depend on enumeration order.
///
/// Cards are assumed distinct, as dealt from a single deck; duplicates are
/// not checked and leave the classification unspecified.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::{select_best, Category};
///
/// let pool = parse_cards("As Ah Kc Kd 7h 7s 2c").unwrap();
/// let best = select_best(&pool).unwrap();
/// assert_eq!(best.category, Category::TwoPair);
/// ```
pub fn select_best(cards: &[Card]) -> Result<EvaluationResult, EvalError> {
    use combinations::FiveCardCombinations;

    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards(cards.len()));
    }

    let mut best: Option<EvaluationResult> = None;

    for indices in FiveCardCombinations::new(cards.len()) {
        let hand = Hand::new([
            cards[indices[0]],
            cards[indices[1]],
            cards[indices[2]],
            cards[indices[3]],
            cards[indices[4]],
        ]);
        let eval = EvaluationResult { category: classify(&hand), best_hand: hand };

        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    best.ok_or(EvalError::InsufficientCards(cards.len()))
}

/// Compare two players' best hands over shared community cards.
///
/// Each player's pool is their own cards plus the community cards; both pools
/// go through [`select_best`] and the stronger result wins. The signed result
/// follows [`ComparisonOutcome`]: `1` player 1 loses, `-1` player 1 wins,
/// `0` tie.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::{compare_players, Category};
///
/// let p1 = parse_cards("As Ah").unwrap();
/// let p2 = parse_cards("Ks Kh").unwrap();
/// let community = parse_cards("Ad 7c 7d 2h 3s").unwrap();
///
/// let outcome = compare_players(&p1, &p2, &community).unwrap();
/// assert_eq!(outcome.result, -1); // aces full beats kings and sevens
/// assert_eq!(outcome.player1.category, Category::FullHouse);
/// assert_eq!(outcome.player2.category, Category::TwoPair);
/// ```
pub fn compare_players(
    player1: &[Card],
    player2: &[Card],
    community: &[Card],
) -> Result<ComparisonOutcome, EvalError> {
    let pool1: Vec<Card> = player1.iter().chain(community.iter()).copied().collect();
    let pool2: Vec<Card> = player2.iter().chain(community.iter()).copied().collect();

    let p1 = select_best(&pool1)?;
    let p2 = select_best(&pool2)?;

    let result = match p1.cmp(&p2) {
        Ordering::Greater => -1,
        Ordering::Less => 1,
        Ordering::Equal => 0,
    };

    Ok(ComparisonOutcome { result, player1: p1, player2: p2 })
}
