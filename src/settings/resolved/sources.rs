use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each explicitly set value came from, keyed by dotted setting name.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	detected: Vec<(&'static str, SettingSource)>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: &'static str, source: Option<SettingSource>) {
		if let Some(source) = source {
			self.detected.retain(|(existing, _)| *existing != key);
			self.detected.push((key, source));
		}
	}

	/// Unrecorded keys are reported as config file keys.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.detected
			.iter()
			.find(|(existing, _)| *existing == key)
			.map(|(_, source)| source.clone())
			.unwrap_or(SettingSource::ConfigKey(key))
	}
}
