use std::path::PathBuf;

/// Default properties file candidates, in priority order.
///
/// The first entry is relative to the working directory. It does not exist on disk: the agent, when injected into the
/// process, makes it readable.
pub const DEFAULT_PROPERTIES_PATHS: &[&str] = &[
    "dt_metadata_e617c525669e072eebe3d0f08212e8f2.properties",
    "/var/lib/dynatrace/enrichment/dt_metadata.properties",
];

/// Default `ruxithost.id` candidates, in priority order.
///
/// Both entries are probed on every platform; the one that doesn't apply simply fails to open.
pub const DEFAULT_RUXIT_PATHS: &[&str] = &[
    "C:\\ProgramData\\dynatrace\\oneagent\\agent\\config\\ruxithost.id",
    "/var/lib/dynatrace/oneagent/agent/config/ruxithost.id",
];

/// Candidate file paths to probe for host identity.
///
/// By default, the production locations are used. Either list can be replaced, which is how tests point resolution at
/// fixture files. A replacement list fully supersedes the defaults; an empty replacement probes nothing.
#[derive(Clone, Debug, Default)]
pub struct CandidatePaths {
    properties: Option<Vec<PathBuf>>,
    ruxit: Option<Vec<PathBuf>>,
}

impl CandidatePaths {
    /// Replaces the properties file candidates.
    pub fn with_properties_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.properties = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the `ruxithost.id` candidates.
    pub fn with_ruxit_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.ruxit = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the properties file candidates, in priority order.
    pub fn properties_paths(&self) -> Vec<PathBuf> {
        resolve_paths(self.properties.as_deref(), DEFAULT_PROPERTIES_PATHS)
    }

    /// Returns the `ruxithost.id` candidates, in priority order.
    pub fn ruxit_paths(&self) -> Vec<PathBuf> {
        resolve_paths(self.ruxit.as_deref(), DEFAULT_RUXIT_PATHS)
    }
}

fn resolve_paths(overridden: Option<&[PathBuf]>, defaults: &[&str]) -> Vec<PathBuf> {
    match overridden {
        Some(paths) => paths.to_vec(),
        None => defaults.iter().map(PathBuf::from).collect(),
    }
}
