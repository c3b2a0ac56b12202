// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared across modules.
//!
//! Tests that touch process environment variables must hold
//! [`config_env_lock`], since the test harness runs them on parallel threads.

use crate::app::paths::ENV_CONFIG_DIR;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// Serializes access to environment variables.
pub fn config_env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Runs `test` with the config directory pointed at a fresh temp dir.
pub fn with_temp_config_dir<F>(test: F)
where
    F: FnOnce(&Path),
{
    let _guard = config_env_lock();
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let previous = std::env::var(ENV_CONFIG_DIR).ok();
    std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

    test(temp_dir.path());

    if let Some(value) = previous {
        std::env::set_var(ENV_CONFIG_DIR, value);
    } else {
        std::env::remove_var(ENV_CONFIG_DIR);
    }
}

/// Asserts that two floats are within [`F32_EPSILON`].
#[track_caller]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < F32_EPSILON,
        "expected {expected}, got {actual}"
    );
}
