use nalgebra::Point3;

pub fn calculate_rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}

/// Index of the point in `candidates` closest to `target`, paired with its distance.
///
/// Only indices accepted by `filter` are considered. Ties resolve to the
/// earliest index because a candidate must be strictly closer to replace the
/// current best.
pub fn find_nearest<'a, I, F>(
    target: &Point3<f64>,
    candidates: I,
    mut filter: F,
) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
    F: FnMut(usize) -> bool,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, point) in candidates.into_iter().enumerate() {
        if !filter(idx) {
            continue;
        }
        let dist = nalgebra::distance(target, point);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    best
}
