//! # Config Path Resolver
//!
//! Static library defaults for configuration file resolution.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Append the template suffix to a configuration path.
///
/// ``conf/conf.toml`` becomes ``conf/conf.toml.template``.
pub fn template_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut name: OsString = path.as_ref().as_os_str().to_owned();
    name.push(".template");
    PathBuf::from(name)
}

/// Static configuration for configuration file resolution.
pub struct ConfigPathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for configuration path environment variables.
    pub env_vars: &'static [&'static str],

    /// The working-directory relative default path.
    pub local_path: &'static str,

    /// The file name within the project config directory.
    pub file_name: &'static str,
}

impl ConfigPathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve the configuration path.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.env_vars`; in order.
    /// 3. `self.local_path`, if it or its template exists.
    /// 4. `self.project_dirs().config_dir()` / `self.file_name`, if present.
    /// 5. `None`
    ///
    /// The resolved path is not required to exist;
    /// loading falls back to its template.
    pub fn resolve_config_path<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.env_vars {
            if let Ok(path) = env::var(env_var) {
                return Some(PathBuf::from(path));
            }
        }

        let local = PathBuf::from(self.local_path);
        if local.exists() || template_path(&local).exists() {
            return Some(local);
        }

        self.project_dirs()
            .map(|pds| pds.config_dir().join(self.file_name))
    }
}
