//! Platform classification contracts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Execution context the gallery is running in.
pub enum PlatformKind {
    /// Native-wrapped mobile shell with direct filesystem path access.
    Hybrid,
    /// Plain browser context with only network-style resource fetch.
    Web,
}

impl PlatformKind {
    /// Returns a stable string token for diagnostics and logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hybrid => "hybrid",
            Self::Web => "web",
        }
    }

    /// Returns `true` for the native-shell context.
    pub const fn is_hybrid(self) -> bool {
        matches!(self, Self::Hybrid)
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host query answering which [`PlatformKind`] is active.
///
/// Implementations must be side-effect free. Callers query it before every platform-sensitive
/// operation instead of caching the answer.
pub trait HostPlatform {
    /// Classifies the current execution context.
    fn kind(&self) -> PlatformKind;

    /// Returns `true` when running inside a native shell.
    fn is_hybrid(&self) -> bool {
        self.kind().is_hybrid()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classifier that always reports the same platform.
pub struct FixedPlatform(pub PlatformKind);

impl FixedPlatform {
    /// Native-shell classifier.
    pub const fn hybrid() -> Self {
        Self(PlatformKind::Hybrid)
    }

    /// Browser classifier.
    pub const fn web() -> Self {
        Self(PlatformKind::Web)
    }
}

impl HostPlatform for FixedPlatform {
    fn kind(&self) -> PlatformKind {
        self.0
    }
}
