use thiserror::Error;

use super::SettingSource;

/// A configuration value that parsed but cannot be used.
#[derive(Debug, Error)]
#[error("{key} = {value:?} (from {origin}) rejected: {reason}")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_key_value_and_origin() {
		let err = ConfigError::invalid(
			"listing.sort",
			"sideways",
			SettingSource::ConfigKey("listing.sort"),
			"unknown sort key 'sideways'",
		);
		assert_eq!(
			err.to_string(),
			"listing.sort = \"sideways\" (from configuration key `listing.sort`) rejected: \
			 unknown sort key 'sideways'"
		);
	}
}
