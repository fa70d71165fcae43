use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognizes one hand category.
/// [`DETECTORS`] lists them from strongest to weakest; classification takes
/// the first match, so a detector may assume every stronger category has
/// already been ruled out.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn matches(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Broadway ranks (A K Q J 10), all same suit.
/// The rank set alone is not enough; a mixed-suit Broadway is a straight.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_broadway && analysis.suit_info.is_flush
    }
}

/// Straight Flush: five consecutive ranks, all same suit.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }
}

/// Four of a Kind: four cards of the same rank.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }
}

/// Full House: three of a kind plus a pair.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }
}

/// Flush: all five cards of the same suit.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }
}

/// Straight: five consecutive ranks (not all same suit).
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

/// Three of a Kind: three cards of the same rank.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }
}

/// Two Pair: two pairs of cards.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }
}

/// One Pair: two cards of the same rank.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn matches(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }
}

/// High Card: no matching ranks or sequences.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn matches(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
