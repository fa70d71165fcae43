use crate::cards::Rank;

/// Groups the ranks of a hand by their frequency, sorted by
/// (count desc, strength desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
///
/// Classification reads the histogram shape directly (one count of 4 is a
/// quad, a 3 and a 2 is a full house), so no check depends on another
/// category having been ruled out first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Bucket the given ranks by value and count each bucket.
    pub fn from_ranks(ranks: &[Rank; 5]) -> Self {
        let mut counts = [0u8; 14]; // indexed by raw value 1..=13
        for &rank in ranks.iter() {
            counts[rank.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.value() as usize];
                if count > 0 {
                    Some((rank, count))
                } else {
                    None
                }
            })
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.strength().cmp(&a.0.strength())));

        Self { groups }
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.of_count(4).first().copied()
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.of_count(3).first().copied()
    }

    /// Returns all pair ranks, strongest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.of_count(2)
    }

    /// Returns all singleton (kicker) ranks, strongest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.of_count(1)
    }

    /// Returns every rank occurring exactly `count` times, strongest first.
    pub fn of_count(&self, count: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == count).map(|(rank, _)| *rank).collect()
    }

    /// Returns true if the hand has both trips and a pair (full house).
    pub fn has_full_house(&self) -> bool {
        let has_trips = self.groups.iter().any(|(_, count)| *count == 3);
        let has_pair = self.groups.iter().any(|(_, count)| *count == 2);
        has_trips && has_pair
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
