use crate::ports::RandomSource;
use gotify_srv_domain::SrvTarget;
use tracing::debug;

/// Picks one target out of an SRV answer set (RFC 2782 priority/weight).
pub struct SrvSelector;

impl SrvSelector {
    /// Lowest priority value wins. Ties are broken by a weighted draw, or a
    /// uniform one when every tied weight is zero.
    pub fn select(candidates: &[SrvTarget], random: &dyn RandomSource) -> Option<SrvTarget> {
        match candidates {
            [] => None,
            [only] => Some(only.clone()),
            _ => {
                let min_priority = candidates.iter().map(|c| c.priority).min()?;
                let tied: Vec<&SrvTarget> = candidates
                    .iter()
                    .filter(|c| c.priority == min_priority)
                    .collect();

                let chosen = if tied.len() == 1 {
                    tied[0]
                } else {
                    Self::weighted_pick(&tied, random)?
                };

                debug!(
                    candidates = candidates.len(),
                    tied = tied.len(),
                    priority = min_priority,
                    host = %chosen.host,
                    port = chosen.port,
                    "SRV target selected"
                );
                Some(chosen.clone())
            }
        }
    }

    fn weighted_pick<'a>(
        tied: &[&'a SrvTarget],
        random: &dyn RandomSource,
    ) -> Option<&'a SrvTarget> {
        let total_weight: u32 = tied.iter().map(|c| u32::from(c.weight)).sum();

        if total_weight == 0 {
            let index = random.next_below(tied.len() as u32) as usize;
            return tied.get(index).or_else(|| tied.last()).copied();
        }

        let mut remaining = i64::from(random.next_below(total_weight));
        for candidate in tied {
            remaining -= i64::from(candidate.weight);
            if remaining <= 0 {
                return Some(*candidate);
            }
        }

        // Only reachable if the source returned a value outside 0..total_weight
        tied.last().copied()
    }
}
