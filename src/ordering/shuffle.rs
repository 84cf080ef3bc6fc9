use super::rng::Mulberry32;

/// Seed used when the caller asks for a random order without choosing one.
pub const DEFAULT_SEED: u32 = 42;

/// Seeds of zero put mulberry32 on a poor start; they are bumped to one.
#[must_use]
pub const fn normalize_seed(seed: u32) -> u32 {
	if seed == 0 { 1 } else { seed }
}

/// Fisher–Yates permutation of `items` driven solely by `seed`.
///
/// Walks from the last index down to 1, swapping each slot with one drawn
/// from `[0, i]`. The input is left untouched.
#[must_use]
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
	let mut rng = Mulberry32::new(normalize_seed(seed));
	let mut result = items.to_vec();
	for i in (1..result.len()).rev() {
		let j = rng.next_index(i + 1);
		result.swap(i, j);
	}
	result
}
