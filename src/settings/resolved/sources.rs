use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) listing_sort: Option<SettingSource>,
	pub(crate) listing_recency_days: Option<SettingSource>,
	pub(crate) title_weight: Option<SettingSource>,
	pub(crate) body_weight: Option<SettingSource>,
	pub(crate) category_weight: Option<SettingSource>,
	pub(crate) tag_weight: Option<SettingSource>,
	pub(crate) max_error_ratio: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_sort(&self) -> SettingSource {
		self.listing_sort
			.clone()
			.unwrap_or(SettingSource::ConfigKey("listing.sort"))
	}

	pub(crate) fn source_for_recency_days(&self) -> SettingSource {
		self.listing_recency_days
			.clone()
			.unwrap_or(SettingSource::ConfigKey("listing.recency_days"))
	}

	/// Source of the search knob stored under `key`, e.g. `search.body_weight`.
	pub(crate) fn source_for_search(&self, key: &'static str) -> SettingSource {
		let detected = match key {
			"search.title_weight" => &self.title_weight,
			"search.body_weight" => &self.body_weight,
			"search.category_weight" => &self.category_weight,
			"search.tag_weight" => &self.tag_weight,
			"search.max_error_ratio" => &self.max_error_ratio,
			_ => &None,
		};
		detected.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
