use super::rank_groups::RankGroups;
use super::straight_info::BROADWAY;
use crate::cards::Rank;
use crate::evaluator::Category;
use crate::hand::Hand;
use core::cmp::Ordering;

/// Plain comparator: both rank lists are ordered strongest-first under the
/// Ace-high magnitude and compared position by position. `Less` means the
/// first list is the weaker one.
pub(crate) fn compare_high_card(a: &[Rank], b: &[Rank]) -> Ordering {
    strength_key(a).cmp(&strength_key(b))
}

fn strength_key(ranks: &[Rank]) -> Vec<u8> {
    let mut key: Vec<u8> = ranks.iter().map(|r| r.strength()).collect();
    key.sort_unstable_by(|x, y| y.cmp(x));
    key
}

/// Straight-aware comparator. Straights compare on raw rank values (Ace = 1)
/// descending, with one rewrite: the Broadway set becomes
/// `[14, 13, 12, 11, 10]`, placing it above a King-high straight. The wheel
/// is deliberately not rewritten; with Ace = 1 it compares as
/// `[5, 4, 3, 2, 1]` and stays the weakest straight.
pub(crate) fn compare_straight(a: &[Rank; 5], b: &[Rank; 5]) -> Ordering {
    straight_key(a).cmp(&straight_key(b))
}

fn straight_key(ranks: &[Rank; 5]) -> [u8; 5] {
    let mut key = [
        ranks[0].value(),
        ranks[1].value(),
        ranks[2].value(),
        ranks[3].value(),
        ranks[4].value(),
    ];
    key.sort_unstable_by(|x, y| y.cmp(x));
    if key == BROADWAY {
        key = [14, 13, 12, 11, 10];
    }
    key
}

/// Grouped-rank comparator: the ranks forming groups of `dominant` cards
/// decide first; on a full tie the ranks occurring `secondary` times decide.
fn compare_grouped(a: &Hand, b: &Hand, dominant: u8, secondary: u8) -> Ordering {
    let ga = RankGroups::from_ranks(&a.ranks());
    let gb = RankGroups::from_ranks(&b.ranks());
    compare_high_card(&ga.of_count(dominant), &gb.of_count(dominant))
        .then_with(|| compare_high_card(&ga.of_count(secondary), &gb.of_count(secondary)))
}

/// Tie-break between two hands already known to share `category`.
///
/// The grouped categories map onto one generic comparator through a
/// (dominant group size, secondary group size) pair; straights use the
/// straight-aware comparator, flushes and high cards the plain one, and a
/// royal flush can only tie a royal flush.
pub(crate) fn same_category(category: Category, a: &Hand, b: &Hand) -> Ordering {
    match category {
        Category::RoyalFlush => Ordering::Equal,
        Category::StraightFlush | Category::Straight => {
            compare_straight(&a.ranks(), &b.ranks())
        }
        Category::Flush | Category::HighCard => compare_high_card(&a.ranks(), &b.ranks()),
        Category::FourOfAKind => compare_grouped(a, b, 4, 1),
        Category::FullHouse => compare_grouped(a, b, 3, 2),
        Category::ThreeOfAKind => compare_grouped(a, b, 3, 1),
        Category::TwoPair | Category::Pair => compare_grouped(a, b, 2, 1),
    }
}
