//! # Models Directory Resolver
//!
//! Static defaults for models directory resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

/// Static configuration for models directory resolution.
pub struct PathResolver {
    /// The resolution order for models directory environment variables.
    pub models_env_vars: &'static [&'static str],

    /// The fallback models directory, relative to the working directory.
    pub default_models_dir: &'static str,
}

impl PathResolver {
    /// Resolve the models directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.models_env_vars`; in order.
    /// 3. `self.default_models_dir`.
    ///
    /// Relative paths are returned as-is; they are interpreted against
    /// the working directory at use.
    pub fn resolve_models_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> PathBuf {
        if let Some(path) = path.as_ref() {
            return path.as_ref().to_path_buf();
        }

        for env_var in self.models_env_vars {
            if let Ok(path) = env::var(env_var)
                && !path.is_empty()
            {
                return PathBuf::from(path);
            }
        }

        PathBuf::from(self.default_models_dir)
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const MODELS_ENV1: &str = "_LLAMA_VOCAB_MODELS_ENV1";
    const MODELS_ENV2: &str = "_LLAMA_VOCAB_MODELS_ENV2";

    const TEST_CONFIG: PathResolver = PathResolver {
        models_env_vars: &[MODELS_ENV1, MODELS_ENV2],
        default_models_dir: "test_models",
    };

    #[test]
    #[serial]
    fn test_resolve_models_dir() {
        let no_path: Option<PathBuf> = None;

        let user_dir = PathBuf::from("/tmp/llama_vocab/user");
        let env_dir1 = PathBuf::from("/tmp/llama_vocab/env.1");
        let env_dir2 = PathBuf::from("/tmp/llama_vocab/env.2");

        // No env vars
        unsafe {
            for v in TEST_CONFIG.models_env_vars {
                env::remove_var(v);
            }
        }

        // User overrides.
        assert_eq!(
            TEST_CONFIG.resolve_models_dir(Some(user_dir.clone())),
            user_dir
        );

        // Fallback.
        assert_eq!(
            TEST_CONFIG.resolve_models_dir(no_path.clone()),
            PathBuf::from("test_models")
        );

        // Lowest priority var.
        unsafe {
            env::set_var(MODELS_ENV2, env_dir2.to_str().unwrap());
        }
        assert_eq!(
            TEST_CONFIG.resolve_models_dir(Some(user_dir.clone())),
            user_dir
        );
        assert_eq!(TEST_CONFIG.resolve_models_dir(no_path.clone()), env_dir2);

        // Higher priority var.
        unsafe {
            env::set_var(MODELS_ENV1, env_dir1.to_str().unwrap());
        }
        assert_eq!(TEST_CONFIG.resolve_models_dir(no_path.clone()), env_dir1);

        // Empty values are ignored.
        unsafe {
            env::set_var(MODELS_ENV1, "");
        }
        assert_eq!(TEST_CONFIG.resolve_models_dir(no_path.clone()), env_dir2);

        unsafe {
            for v in TEST_CONFIG.models_env_vars {
                env::remove_var(v);
            }
        }
    }
}
