//! Arrow-versus-enemy hit detection.
//!
//! A hit is the top-left corner of the first sprite lying inside the second
//! sprite's rectangle.  This is narrower than a full overlap test (a fast,
//! thin sprite can slip past a corner) but it is the rule the game has
//! always played by, so it is kept as is.

use crate::entities::Bounded;

/// Point-in-rect test of `a`'s origin against `b`.
pub fn sprites_collide(a: &impl Bounded, b: &impl Bounded) -> bool {
    let origin = a.bounds();
    b.bounds().contains_point(origin.x, origin.y)
}

/// Remove every colliding `(a, b)` pair from both lists, calling `on_hit`
/// once per pair.
///
/// Each element takes part in at most one hit per call: an `a` is matched
/// against the first `b` (in list order) that it hits, and both are removed
/// before the next `a` is examined.  Returns the number of hits.
pub fn resolve_pairwise_collisions<A, B, F>(
    list_a: &mut Vec<A>,
    list_b: &mut Vec<B>,
    mut on_hit: F,
) -> usize
where
    A: Bounded,
    B: Bounded,
    F: FnMut(),
{
    let mut hits = 0;
    let mut i = 0;
    while i < list_a.len() {
        let target = list_b.iter().position(|b| sprites_collide(&list_a[i], b));
        match target {
            Some(j) => {
                list_a.remove(i);
                list_b.remove(j);
                hits += 1;
                on_hit();
                // `i` now names the next element; do not advance.
            }
            None => i += 1,
        }
    }
    hits
}
