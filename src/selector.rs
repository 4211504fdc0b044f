use rand::Rng;

use crate::sign::{Pool, Sign, SignId};

/// Pick a sign uniformly at random from `pool`, skipping `exclude`.
///
/// When `exclude` is `None` (or not in the pool) every member is a candidate.
/// `Pool` always holds at least two distinct ids, so there is always one left.
pub fn pick_next<'a, R: Rng + ?Sized>(
    pool: &'a Pool,
    exclude: Option<SignId>,
    rng: &mut R,
) -> &'a Sign {
    let signs = pool.signs();
    let idx = match exclude.and_then(|id| pool.position(id)) {
        Some(skip) => {
            // draw from len - 1 slots and shift past the excluded one
            let idx = rng.gen_range(0..signs.len() - 1);
            if idx >= skip {
                idx + 1
            } else {
                idx
            }
        }
        None => rng.gen_range(0..signs.len()),
    };
    &signs[idx]
}
