/// Mulberry32 pseudo-random generator.
///
/// A 32-bit state advanced with wrapping integer arithmetic only, so a seed
/// reproduces the same stream on every platform. Yields `f64` values in
/// `[0, 1)` forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
	state: u32,
}

const INCREMENT: u32 = 0x6D2B_79F5;
const SCALE: f64 = 4_294_967_296.0;

impl Mulberry32 {
	#[must_use]
	pub const fn new(seed: u32) -> Self {
		Self { state: seed }
	}

	/// Advance the state and return the next raw 32-bit output.
	pub fn next_u32(&mut self) -> u32 {
		self.state = self.state.wrapping_add(INCREMENT);
		let a = self.state;
		let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
		t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
		t ^ (t >> 14)
	}

	/// Next value in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		f64::from(self.next_u32()) / SCALE
	}

	/// Uniform index in `[0, bound)`; `bound` must be non-zero.
	pub fn next_index(&mut self, bound: usize) -> usize {
		let scaled = (self.next_f64() * bound as f64) as usize;
		scaled.min(bound - 1)
	}
}

impl Iterator for Mulberry32 {
	type Item = f64;

	fn next(&mut self) -> Option<f64> {
		Some(self.next_f64())
	}
}
