use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Rank;
use crate::hand::Hand;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
///
/// [`Hand`] is already canonical (raw rank descending), so no sorting
/// happens here.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze a hand, computing all properties needed for classification.
    pub fn new(hand: &Hand) -> Self {
        let ranks = hand.ranks();
        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(hand.cards());
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn analysis(s: &str) -> HandAnalysis {
        HandAnalysis::new(&s.parse().unwrap())
    }

    #[test]
    fn test_royal_flush_analysis() {
        let a = analysis("As Ks Qs Js 10s");
        assert!(a.suit_info.is_flush);
        assert!(a.straight_info.is_straight);
        assert!(a.straight_info.is_broadway);
        assert_eq!(a.rank_groups.quad(), None);
        assert_eq!(a.rank_groups.trips(), None);
        assert_eq!(a.rank_groups.pairs(), vec![]);
    }

    #[test]
    fn test_quads_analysis() {
        let a = analysis("As Ah Ad Ac Ks");
        assert_eq!(a.rank_groups.quad(), Some(Rank::Ace));
        assert_eq!(a.rank_groups.kickers(), vec![Rank::King]);
        assert!(!a.suit_info.is_flush);
        assert!(!a.straight_info.is_straight);
    }

    #[test]
    fn test_full_house_analysis() {
        let a = analysis("Ks Kh Kd Qc Qs");
        assert!(a.rank_groups.has_full_house());
        assert_eq!(a.rank_groups.trips(), Some(Rank::King));
        assert_eq!(a.rank_groups.pairs(), vec![Rank::Queen]);
    }

    #[test]
    fn test_flush_analysis() {
        let a = analysis("Ad Jd 9d 5d 2d");
        assert!(a.suit_info.is_flush);
        assert!(!a.straight_info.is_straight);
    }

    #[test]
    fn test_straight_analysis() {
        let a = analysis("9s 8h 7d 6c 5s");
        assert!(a.straight_info.is_straight);
        assert!(!a.suit_info.is_flush);
    }

    #[test]
    fn test_wheel_straight_analysis() {
        let a = analysis("As 2h 3d 4c 5s");
        assert!(a.straight_info.is_straight);
        assert!(!a.straight_info.is_broadway);
        // Canonical order keeps the Ace last
        assert_eq!(a.ranks, [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]);
    }

    #[test]
    fn test_two_pair_analysis() {
        let a = analysis("As Ah Kd Kc Qs");
        let pairs = a.rank_groups.pairs();
        assert_eq!(pairs, vec![Rank::Ace, Rank::King]);
        assert_eq!(a.rank_groups.kickers(), vec![Rank::Queen]);
    }
}
