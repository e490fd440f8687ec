//! Pre-flight checks before a run.
//!
//! Validates that every credential is available before any remote call,
//! so a run never fails midway for lack of configuration.

use crate::config::{Credentials, Settings};
use crate::error::Result;

/// Resolve the credentials a run needs.
///
/// On failure the error lists every missing variable at once.
pub fn check(settings: &Settings) -> Result<Credentials> {
    Credentials::from_env(settings)
}
