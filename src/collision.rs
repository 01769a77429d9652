//! Axis-aligned bounding-box tests.

use crate::entities::Bounded;

/// Half-open overlap test: boxes that only share an edge do not overlap.
pub fn overlaps(a: &impl Bounded, b: &impl Bounded) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Pair every shooter with at most one target and every target with at most
/// one shooter.
///
/// Shooters are visited in order; each claims the first overlapping target not
/// already claimed.  Returned pairs are `(shooter_index, target_index)`.
pub fn claim_pairs<A: Bounded, B: Bounded>(shooters: &[A], targets: &[B]) -> Vec<(usize, usize)> {
    let mut claimed = vec![false; targets.len()];
    let mut pairs = Vec::new();

    for (si, shooter) in shooters.iter().enumerate() {
        let hit = targets
            .iter()
            .enumerate()
            .find(|(ti, target)| !claimed[*ti] && overlaps(shooter, *target));
        if let Some((ti, _)) = hit {
            claimed[ti] = true;
            pairs.push((si, ti));
        }
    }

    pairs
}

/// Keep only the items whose index is not in `removed`.
pub fn without_indices<T: Clone>(items: &[T], removed: &[usize]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, item)| item.clone())
        .collect()
}
