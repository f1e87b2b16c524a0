//! Primitives for loading and querying configuration.
#![deny(warnings)]
#![deny(missing_docs)]

use std::{borrow::Cow, collections::HashSet, path::Path, sync::Arc};

use figment::{
    error::Kind,
    providers::{Env, Serialized},
    Figment, Provider,
};
use hostid_error::GenericError;
use serde::Deserialize;
use snafu::{ResultExt as _, Snafu};
use tracing::debug;

pub mod deser;

mod provider;
use self::provider::ResolvedProvider;

/// A configuration error.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum ConfigurationError {
    /// Environment variable prefix was empty.
    #[snafu(display("Environment variable prefix must not be empty."))]
    EmptyPrefix,

    /// Requested field was missing from the configuration.
    #[snafu(display("Missing field '{}' in configuration. {}", field, help_text))]
    MissingField {
        /// Help text describing how to set the missing field, including the environment variable form when
        /// environment variables were loaded.
        help_text: String,

        /// Name of the missing field.
        field: Cow<'static, str>,
    },

    /// Requested field had a different data type than expected.
    #[snafu(display(
        "Expected value for field '{}' to be '{}', got '{}' instead.",
        field,
        expected_ty,
        actual_ty
    ))]
    InvalidFieldType {
        /// Period-separated path to the invalid field.
        field: String,

        /// Expected data type.
        expected_ty: String,

        /// Actual data type.
        actual_ty: String,
    },

    /// Generic configuration error.
    #[snafu(display("Failed to query configuration."))]
    Generic {
        /// Error source.
        source: GenericError,
    },
}

impl From<figment::Error> for ConfigurationError {
    fn from(e: figment::Error) -> Self {
        match e.kind {
            Kind::InvalidType(actual_ty, expected_ty) => Self::InvalidFieldType {
                field: e.path.join("."),
                expected_ty,
                actual_ty: actual_ty.to_string(),
            },
            _ => Self::Generic { source: e.into() },
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum LookupSource {
    Environment { prefix: String },
}

impl LookupSource {
    fn transform_key(&self, key: &str) -> String {
        match self {
            // The prefix is already uppercased and ends with an underscore.
            LookupSource::Environment { prefix } => format!("{}{}", prefix, key.replace('.', "_").to_uppercase()),
        }
    }
}

struct BoxedProvider(Box<dyn Provider + Send + Sync>);

impl Provider for BoxedProvider {
    fn metadata(&self) -> figment::Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        self.0.data()
    }
}

/// A configuration loader that can pull from various sources.
///
/// Wraps `figment` to expose a small API for loading configuration and querying it. Sources added later take
/// precedence over sources added earlier. The loaded configuration can be deserialized directly
/// ([`into_typed`][Self::into_typed]) or queried by key ([`into_generic`][Self::into_generic]).
///
/// # Supported sources
///
/// - YAML file
/// - environment variables (must be prefixed; see [`from_environment`][Self::from_environment])
#[derive(Default)]
pub struct ConfigurationLoader {
    lookup_sources: HashSet<LookupSource>,
    providers: Vec<BoxedProvider>,
}

impl ConfigurationLoader {
    /// Loads the given YAML configuration file.
    ///
    /// # Errors
    ///
    /// If the file could not be read, or if the file is not valid YAML, an error will be returned.
    pub fn from_yaml<P>(mut self, path: P) -> Result<Self, ConfigurationError>
    where
        P: AsRef<Path>,
    {
        let resolved_provider = ResolvedProvider::from_yaml(&path)
            .map_err(GenericError::from)
            .context(Generic)?;
        self.providers.push(BoxedProvider(Box::new(resolved_provider)));
        Ok(self)
    }

    /// Attempts to load the given YAML configuration file, ignoring any errors.
    ///
    /// Errors include the file not existing, not being readable, and not being valid YAML.
    pub fn try_from_yaml<P>(mut self, path: P) -> Self
    where
        P: AsRef<Path>,
    {
        match ResolvedProvider::from_yaml(&path) {
            Ok(resolved_provider) => {
                self.providers.push(BoxedProvider(Box::new(resolved_provider)));
            }
            Err(e) => {
                debug!(error = %e, file_path = %path.as_ref().display(), "Unable to read YAML configuration file. Ignoring.");
            }
        }
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// An underscore is appended to the prefix if it does not already end with one: a prefix of `hostid` matches any
    /// environment variable starting with `HOSTID_`. The prefix is case-insensitive.
    ///
    /// # Errors
    ///
    /// If the prefix is empty, or the environment could not be read, an error will be returned.
    pub fn from_environment(mut self, prefix: &'static str) -> Result<Self, ConfigurationError> {
        if prefix.is_empty() {
            return Err(ConfigurationError::EmptyPrefix);
        }

        let prefix = if prefix.ends_with('_') {
            prefix.to_uppercase()
        } else {
            format!("{}_", prefix.to_uppercase())
        };

        // `Env` isn't `Send + Sync`, so snapshot its values into a serialized provider.
        let values = Env::prefixed(&prefix).data()?;
        if let Some(default_dict) = values.get(&figment::Profile::Default) {
            self.providers
                .push(BoxedProvider(Box::new(Serialized::defaults(default_dict.clone()))));
            self.lookup_sources.insert(LookupSource::Environment { prefix });
        }
        Ok(self)
    }

    fn build_figment(providers: &[BoxedProvider]) -> Figment {
        providers
            .iter()
            .fold(Figment::new(), |figment, provider| figment.admerge(provider))
    }

    /// Consumes the configuration loader, deserializing it as `T`.
    ///
    /// # Errors
    ///
    /// If the configuration could not be deserialized into `T`, an error will be returned.
    pub fn into_typed<'a, T>(self) -> Result<T, ConfigurationError>
    where
        T: Deserialize<'a>,
    {
        Self::build_figment(&self.providers)
            .extract()
            .map_err(|e| from_figment_error(&self.lookup_sources, e))
    }

    /// Consumes the configuration loader and wraps it in a generic wrapper.
    pub fn into_generic(self) -> GenericConfiguration {
        let figment = Self::build_figment(&self.providers);
        GenericConfiguration {
            inner: Arc::new(Inner {
                figment,
                lookup_sources: self.lookup_sources,
            }),
        }
    }
}

#[derive(Debug)]
struct Inner {
    figment: Figment,
    lookup_sources: HashSet<LookupSource>,
}

/// A generic configuration object.
///
/// The merged configuration derived from [`ConfigurationLoader`] in its raw form. Values can be queried by key, where
/// keys take the form `a.b.c` and periods indicate a nested value.
#[derive(Clone, Debug)]
pub struct GenericConfiguration {
    inner: Arc<Inner>,
}

impl GenericConfiguration {
    fn get<'a, T>(&self, key: &str) -> Result<T, ConfigurationError>
    where
        T: Deserialize<'a>,
    {
        match self.inner.figment.extract_inner(key) {
            Ok(value) => Ok(value),
            Err(e) => {
                if matches!(e.kind, Kind::MissingField(_)) {
                    // Nested keys (`foo.bar`) only present as environment variables end up flattened as `foo_bar`, so
                    // retry with the flattened form.
                    let fallback_key = key.replace('.', "_");
                    self.inner
                        .figment
                        .extract_inner(&fallback_key)
                        .map_err(|fallback_e| from_figment_error(&self.inner.lookup_sources, fallback_e))
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Gets a configuration value by key.
    ///
    /// # Errors
    ///
    /// If the key does not exist in the configuration, or if the value could not be deserialized into `T`, an error
    /// variant will be returned.
    pub fn get_typed<'a, T>(&self, key: &str) -> Result<T, ConfigurationError>
    where
        T: Deserialize<'a>,
    {
        self.get(key)
    }

    /// Gets a configuration value by key, or the default value if the key does not exist or could not be deserialized.
    ///
    /// This swallows any errors and should be used sparingly.
    pub fn get_typed_or_default<'a, T>(&self, key: &str) -> T
    where
        T: Default + Deserialize<'a>,
    {
        self.get(key).unwrap_or_default()
    }

    /// Gets a configuration value by key, if it exists.
    ///
    /// # Errors
    ///
    /// If the key exists but the value could not be deserialized into `T`, an error will be returned.
    pub fn try_get_typed<'a, T>(&self, key: &str) -> Result<Option<T>, ConfigurationError>
    where
        T: Deserialize<'a>,
    {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigurationError::MissingField { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Attempts to deserialize the entire configuration as `T`.
    ///
    /// # Errors
    ///
    /// If the value could not be deserialized into `T`, an error will be returned.
    pub fn as_typed<'a, T>(&self) -> Result<T, ConfigurationError>
    where
        T: Deserialize<'a>,
    {
        self.inner
            .figment
            .extract()
            .map_err(|e| from_figment_error(&self.inner.lookup_sources, e))
    }
}

fn from_figment_error(lookup_sources: &HashSet<LookupSource>, e: figment::Error) -> ConfigurationError {
    match e.kind {
        Kind::MissingField(field) => {
            let mut valid_keys = lookup_sources
                .iter()
                .map(|source| source.transform_key(&field))
                .collect::<Vec<_>>();
            valid_keys.insert(0, field.to_string());

            let help_text = format!("Try setting `{}`.", valid_keys.join("` or `"));

            ConfigurationError::MissingField { help_text, field }
        }
        Kind::InvalidType(actual_ty, expected_ty) => ConfigurationError::InvalidFieldType {
            field: e.path.join("."),
            expected_ty,
            actual_ty: actual_ty.to_string(),
        },
        _ => ConfigurationError::Generic { source: e.into() },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn yaml_values_are_queryable() {
        let file = yaml_file("metadata: true\nlog_level: debug\nnested:\n  value: 42\n");
        let config = ConfigurationLoader::default().from_yaml(file.path()).unwrap().into_generic();

        assert!(config.get_typed::<bool>("metadata").unwrap());
        assert_eq!(config.get_typed::<String>("log_level").unwrap(), "debug");
        assert_eq!(config.get_typed::<u32>("nested.value").unwrap(), 42);
    }

    #[test]
    fn missing_key_is_none_for_try_get() {
        let file = yaml_file("metadata: false\n");
        let config = ConfigurationLoader::default().from_yaml(file.path()).unwrap().into_generic();

        assert_eq!(config.try_get_typed::<String>("log_level").unwrap(), None);
        assert!(!config.get_typed_or_default::<bool>("other"));
    }

    #[test]
    fn missing_key_reports_help_text() {
        let config = ConfigurationLoader::default().into_generic();
        match config.get_typed::<String>("log_level") {
            Err(ConfigurationError::MissingField { field, help_text }) => {
                assert_eq!(field, "log_level");
                assert!(help_text.contains("log_level"));
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_type_is_reported() {
        let file = yaml_file("metadata: [1, 2]\n");
        let config = ConfigurationLoader::default().from_yaml(file.path()).unwrap().into_generic();

        assert!(matches!(
            config.get_typed::<bool>("metadata"),
            Err(ConfigurationError::InvalidFieldType { .. })
        ));
    }

    #[test]
    fn missing_yaml_file_is_ignored_by_try_from_yaml() {
        let config = ConfigurationLoader::default()
            .try_from_yaml("/nonexistent/hostid.yaml")
            .into_generic();
        assert_eq!(config.try_get_typed::<bool>("metadata").unwrap(), None);
    }

    #[test]
    fn missing_yaml_file_is_an_error_for_from_yaml() {
        assert!(ConfigurationLoader::default()
            .from_yaml("/nonexistent/hostid.yaml")
            .is_err());
    }

    #[test]
    fn empty_environment_prefix_is_rejected() {
        assert!(matches!(
            ConfigurationLoader::default().from_environment(""),
            Err(ConfigurationError::EmptyPrefix)
        ));
    }

    #[test]
    fn environment_overrides_yaml() {
        std::env::set_var("HOSTIDCFGTEST_METADATA", "true");
        std::env::set_var("HOSTIDCFGTEST_LOG_LEVEL", "debug");

        let file = yaml_file("metadata: false\nlog_format_json: true\n");
        let config = ConfigurationLoader::default()
            .from_yaml(file.path())
            .unwrap()
            .from_environment("HOSTIDCFGTEST")
            .unwrap()
            .into_generic();

        assert!(config.get_typed::<bool>("metadata").unwrap());
        assert_eq!(config.get_typed::<String>("log_level").unwrap(), "debug");
        assert!(config.get_typed::<bool>("log_format_json").unwrap());

        match config.get_typed::<String>("host_id") {
            Err(ConfigurationError::MissingField { help_text, .. }) => {
                assert!(help_text.contains("HOSTIDCFGTEST_HOST_ID"), "{}", help_text);
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn environment_lookup_source_transforms_keys() {
        let source = LookupSource::Environment {
            prefix: "HOSTID_".to_string(),
        };
        assert_eq!(source.transform_key("log.level"), "HOSTID_LOG_LEVEL");
    }
}
