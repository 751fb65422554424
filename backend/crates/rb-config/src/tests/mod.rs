mod platform;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Everything a test needs to load a config in isolation
pub(crate) struct TestEnv {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

/// Create a temp config directory, point RB_CONFIG_DIR at it, and set the
/// two required values so the loaded config validates
pub(crate) fn setup_config_dir() -> TestEnv {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("RB_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("MONDAY_SIGNING_SECRET"),
        EnvGuard::remove("MONDAY_ACCOUNT_SUBDOMAIN"),
        EnvGuard::set("RB_AUTH_SIGNING_SECRET", "test-signing-secret"),
        EnvGuard::set("RB_PLATFORM_ACCOUNT_SUBDOMAIN", "acme"),
    ];
    TestEnv {
        temp,
        _guards: guards,
    }
}

/// Like setup_config_dir but without the required values
pub(crate) fn setup_bare_config_dir() -> TestEnv {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("RB_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("MONDAY_SIGNING_SECRET"),
        EnvGuard::remove("MONDAY_ACCOUNT_SUBDOMAIN"),
        EnvGuard::remove("RB_AUTH_SIGNING_SECRET"),
        EnvGuard::remove("RB_PLATFORM_ACCOUNT_SUBDOMAIN"),
    ];
    TestEnv {
        temp,
        _guards: guards,
    }
}
