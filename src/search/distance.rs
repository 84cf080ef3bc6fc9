//! Edit distance of a query against the closest substring of a haystack.
//!
//! frizbee ranks candidates but its typo budget only counts needle characters
//! left unmatched, with cheap gaps in the haystack. A query whose letters are
//! scattered across a long description therefore still scores well. The
//! distance here is the acceptance gate: a field hit only counts when some
//! contiguous substring of the field is within the query's edit budget.

/// Lowercased characters of `text`, the form both sides are compared in.
pub(super) fn folded(text: &str) -> Vec<char> {
	text.chars().flat_map(char::to_lowercase).collect()
}

/// Smallest optimal-string-alignment distance between `needle` and any
/// substring of `haystack`.
///
/// Insertions, deletions, substitutions and adjacent transpositions cost one
/// each. Both inputs are expected to be [`folded`].
pub(super) fn substring_distance(needle: &[char], haystack: &[char]) -> usize {
	let rows = needle.len();
	if rows == 0 {
		return 0;
	}

	// Columns over needle positions; a match may start at any haystack offset.
	let mut before_previous: Vec<usize> = (0..=rows).collect();
	let mut previous: Vec<usize> = (0..=rows).collect();
	let mut current = vec![0; rows + 1];
	let mut best = rows;

	for (j, &hay) in haystack.iter().enumerate() {
		current[0] = 0;
		for i in 1..=rows {
			let substitution = previous[i - 1] + usize::from(needle[i - 1] != hay);
			let mut cell = substitution
				.min(previous[i] + 1)
				.min(current[i - 1] + 1);
			if i > 1
				&& j > 0
				&& needle[i - 1] == haystack[j - 1]
				&& needle[i - 2] == hay
			{
				cell = cell.min(before_previous[i - 2] + 1);
			}
			current[i] = cell;
		}
		best = best.min(current[rows]);
		if best == 0 {
			return 0;
		}
		std::mem::swap(&mut before_previous, &mut previous);
		std::mem::swap(&mut previous, &mut current);
	}

	best
}

/// Whether `haystack` holds a substring within `budget` edits of `needle`.
pub(super) fn within_budget(needle: &[char], haystack: &str, budget: usize) -> bool {
	if needle.is_empty() {
		return true;
	}
	substring_distance(needle, &folded(haystack)) <= budget
}

#[cfg(test)]
mod tests {
	use super::*;

	fn distance(needle: &str, haystack: &str) -> usize {
		substring_distance(&folded(needle), &folded(haystack))
	}

	#[test]
	fn exact_substring_is_free() {
		assert_eq!(distance("gpt", "GPT-4 Assistant"), 0);
		assert_eq!(distance("ai", "Conversational AI for drafting"), 0);
		assert_eq!(distance("", "anything"), 0);
	}

	#[test]
	fn transposition_costs_one_edit() {
		assert_eq!(distance("gtp", "GPT-4 Assistant"), 1);
		assert_eq!(distance("teh", "the end"), 1);
	}

	#[test]
	fn scattered_letters_are_far_away() {
		assert_eq!(distance("gpt", "Graphic design platform with templates"), 2);
		assert_eq!(distance("gtp", "Writing assistant that helps with grammar"), 2);
		assert_eq!(distance("ai", "Free audio editor"), 1);
	}

	#[test]
	fn empty_haystack_costs_the_whole_needle() {
		assert_eq!(distance("gpt", ""), 3);
	}

	#[test]
	fn budget_check_folds_case() {
		let needle = folded("Gpt");
		assert!(within_budget(&needle, "gpt-4", 0));
		assert!(!within_budget(&needle, "graphic platform", 1));
	}
}
