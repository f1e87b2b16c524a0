use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use tracing::{debug, info, warn};

use super::{
    sources::{read_first_line_id, read_property, SourceError},
    validate_host_id, CandidatePaths, HostIdProvider, HostIdentifier, ResolutionContext, KEY_ENTITY_HOST,
};

/// A host identity resolver backed by local agent files.
///
/// Resolution probes the properties file candidates first, then the `ruxithost.id` candidates, each list in order. The
/// first candidate that is readable and yields a non-empty value ends the search. That single value is then validated:
/// if it is a well-formed host identifier it becomes the result, otherwise the host identity is unresolved.
///
/// A malformed value does not cause the search to continue with the remaining candidates. Readable files with
/// malformed content are reported at `warn` level so the situation is visible.
///
/// The result is computed once per resolver, on first use or when [`initialize`][Self::initialize] is called, and
/// reused for the lifetime of the resolver. Host identity is assumed not to change while the process runs. Concurrent
/// first callers block until the single evaluation completes.
#[derive(Debug, Default)]
pub struct HostIdResolver {
    paths: CandidatePaths,
    resolved: OnceLock<HostIdentifier>,
}

impl HostIdResolver {
    /// Creates a new `HostIdResolver` that probes the given candidate paths.
    pub fn new(paths: CandidatePaths) -> Self {
        Self {
            paths,
            resolved: OnceLock::new(),
        }
    }

    /// Creates a new `HostIdResolver` that probes the default, production candidate paths.
    pub fn from_defaults() -> Self {
        Self::new(CandidatePaths::default())
    }

    /// Returns the process-wide resolver, which probes the default candidate paths.
    pub fn global() -> &'static HostIdResolver {
        static GLOBAL: OnceLock<HostIdResolver> = OnceLock::new();
        GLOBAL.get_or_init(HostIdResolver::from_defaults)
    }

    /// Returns the candidate paths this resolver probes.
    pub fn paths(&self) -> &CandidatePaths {
        &self.paths
    }

    /// Evaluates and caches the host identifier, if that has not happened yet, and returns it.
    pub fn initialize(&self) -> &HostIdentifier {
        self.resolved.get_or_init(|| {
            let host_id = self.evaluate();
            if host_id.is_empty() {
                info!("Host identity could not be resolved. Telemetry will not be enriched with a host identifier.");
            } else {
                info!(host_id = %host_id, "Resolved host identity.");
            }
            host_id
        })
    }

    /// Resolves the host identifier for the given context.
    ///
    /// If the context carries a host identifier override, it is returned verbatim without validation, and without
    /// touching the cached value. Otherwise, the cached value is returned, evaluating it first if needed.
    pub fn resolve(&self, context: &ResolutionContext) -> HostIdentifier {
        if let Some(host_id) = context.host_id_override() {
            return host_id.clone();
        }

        self.initialize().clone()
    }

    /// Evaluates the host identifier by probing the candidate files, bypassing the cache.
    pub fn evaluate(&self) -> HostIdentifier {
        let (candidate, path) = match self.find_candidate() {
            Some(found) => found,
            None => {
                debug!("No host identity candidate found in any candidate file.");
                return HostIdentifier::empty();
            }
        };

        match validate_host_id(&candidate) {
            Ok(()) => HostIdentifier::from(candidate),
            Err(reason) => {
                warn!(path = %path.display(), error = %reason, "Found malformed host identifier. Host identity is unresolved.");
                HostIdentifier::empty()
            }
        }
    }

    /// Finds the first non-empty candidate value, and the path it was read from.
    fn find_candidate(&self) -> Option<(String, PathBuf)> {
        let properties_candidate = first_non_empty(self.paths.properties_paths(), |path| {
            read_property(path, KEY_ENTITY_HOST)
        });

        properties_candidate.or_else(|| first_non_empty(self.paths.ruxit_paths(), read_first_line_id))
    }
}

impl HostIdProvider for HostIdResolver {
    fn get_host_id(&self, context: &ResolutionContext) -> HostIdentifier {
        self.resolve(context)
    }
}

fn first_non_empty<F>(paths: Vec<PathBuf>, read: F) -> Option<(String, PathBuf)>
where
    F: Fn(&Path) -> Result<String, SourceError>,
{
    for path in paths {
        match read(&path) {
            Ok(value) if !value.is_empty() => {
                debug!(path = %path.display(), "Found host identity candidate.");
                return Some((value, path));
            }
            Ok(_) => debug!(path = %path.display(), "No host identity found in candidate file."),
            Err(e) => debug!(path = %path.display(), error = %e, "Skipping unreadable candidate file."),
        }
    }

    None
}

/// Evaluates the process-wide host identifier, if that has not happened yet, and returns it.
///
/// Call this during startup so the candidate files are probed before any telemetry is processed.
pub fn initialize_host_id() -> &'static HostIdentifier {
    HostIdResolver::global().initialize()
}

/// Resolves the host identifier for the given context using the process-wide resolver.
///
/// See [`HostIdResolver::resolve`].
pub fn resolve_host_id(context: &ResolutionContext) -> HostIdentifier {
    HostIdResolver::global().resolve(context)
}
