//! Platform identification and the support gate for the accelerated kernel.

use std::env::VarError;
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::{BlasError, Result};

/// Identifier reported when the host platform is not recognized.
pub const UNKNOWN_PLATFORM_ID: i32 = -1;

/// Environment variable consulted by [`EnvPlatform`].
pub const PLATFORM_ENV_VAR: &str = "SGEMM_BRIDGE_PLATFORM";

/// Known runtime platform identifiers.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimePlatform {
    MacEditor = 0,
    MacPlayer = 1,
    WindowsPlayer = 2,
    WindowsEditor = 7,
    Ios = 8,
    Android = 11,
    LinuxPlayer = 13,
    LinuxEditor = 16,
    WebGl = 17,
    Ps4 = 25,
    XboxOne = 27,
    TvOs = 31,
    Switch = 32,
    Ps5 = 38,
}

impl RuntimePlatform {
    /// The one platform on which the accelerated kernel is available.
    pub const SUPPORTED: RuntimePlatform = RuntimePlatform::Ios;

    const ALL: [RuntimePlatform; 14] = [
        RuntimePlatform::MacEditor,
        RuntimePlatform::MacPlayer,
        RuntimePlatform::WindowsPlayer,
        RuntimePlatform::WindowsEditor,
        RuntimePlatform::Ios,
        RuntimePlatform::Android,
        RuntimePlatform::LinuxPlayer,
        RuntimePlatform::LinuxEditor,
        RuntimePlatform::WebGl,
        RuntimePlatform::Ps4,
        RuntimePlatform::XboxOne,
        RuntimePlatform::TvOs,
        RuntimePlatform::Switch,
        RuntimePlatform::Ps5,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            RuntimePlatform::MacEditor => "macos-editor",
            RuntimePlatform::MacPlayer => "macos",
            RuntimePlatform::WindowsPlayer => "windows",
            RuntimePlatform::WindowsEditor => "windows-editor",
            RuntimePlatform::Ios => "ios",
            RuntimePlatform::Android => "android",
            RuntimePlatform::LinuxPlayer => "linux",
            RuntimePlatform::LinuxEditor => "linux-editor",
            RuntimePlatform::WebGl => "webgl",
            RuntimePlatform::Ps4 => "ps4",
            RuntimePlatform::XboxOne => "xboxone",
            RuntimePlatform::TvOs => "tvos",
            RuntimePlatform::Switch => "switch",
            RuntimePlatform::Ps5 => "ps5",
        }
    }

    /// The platform this binary was compiled for, if it has an identifier.
    pub fn host() -> Option<RuntimePlatform> {
        if cfg!(target_os = "ios") {
            Some(RuntimePlatform::Ios)
        } else if cfg!(target_os = "tvos") {
            Some(RuntimePlatform::TvOs)
        } else if cfg!(target_os = "android") {
            Some(RuntimePlatform::Android)
        } else if cfg!(target_os = "macos") {
            Some(RuntimePlatform::MacPlayer)
        } else if cfg!(target_os = "windows") {
            Some(RuntimePlatform::WindowsPlayer)
        } else if cfg!(target_os = "linux") {
            Some(RuntimePlatform::LinuxPlayer)
        } else if cfg!(target_arch = "wasm32") {
            Some(RuntimePlatform::WebGl)
        } else {
            None
        }
    }
}

impl TryFrom<i32> for RuntimePlatform {
    type Error = BlasError;

    fn try_from(id: i32) -> Result<Self> {
        RuntimePlatform::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or(BlasError::UnknownPlatform(id))
    }
}

impl FromStr for RuntimePlatform {
    type Err = BlasError;

    /// Parses either a platform name (case-insensitive) or a numeric identifier.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i32>() {
            return RuntimePlatform::try_from(id);
        }
        let lower = trimmed.to_ascii_lowercase();
        RuntimePlatform::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| BlasError::InvalidPlatformName(trimmed.to_string()))
    }
}

impl fmt::Display for RuntimePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

/// Source of the current platform identifier.
pub trait PlatformProvider: Send + Sync + Debug {
    /// Returns the integer identifier of the platform we are running on.
    fn platform_id(&self) -> i32;
}

/// Reports the platform this binary was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformProvider for HostPlatform {
    fn platform_id(&self) -> i32 {
        RuntimePlatform::host().map_or(UNKNOWN_PLATFORM_ID, RuntimePlatform::id)
    }
}

/// Always reports the same identifier. Useful for pinning a platform in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlatform(pub i32);

impl PlatformProvider for FixedPlatform {
    fn platform_id(&self) -> i32 {
        self.0
    }
}

/// Host detection with an override read once from `SGEMM_BRIDGE_PLATFORM`.
///
/// The variable accepts a platform name (`ios`, `android`, ...) or a raw
/// numeric identifier, including identifiers with no named variant.
/// Unparsable values are ignored with a warning.
#[derive(Debug, Clone, Copy)]
pub struct EnvPlatform {
    id: i32,
}

impl EnvPlatform {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(PLATFORM_ENV_VAR))
    }

    fn from_var(var: std::result::Result<String, VarError>) -> Self {
        match var {
            Ok(value) => Self::from_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_value(None),
            Err(VarError::NotUnicode(raw)) => {
                log::warn!("ignoring {PLATFORM_ENV_VAR}: value {raw:?} is not valid unicode");
                Self::from_value(None)
            }
        }
    }

    /// Resolves an override value; `None` falls back to the host platform.
    pub fn from_value(value: Option<&str>) -> Self {
        let host = HostPlatform.platform_id();
        let id = match value {
            None => host,
            Some(raw) => match raw.parse::<RuntimePlatform>() {
                Ok(platform) => {
                    log::debug!("{PLATFORM_ENV_VAR} overrides host platform with {platform}");
                    platform.id()
                }
                Err(BlasError::UnknownPlatform(id)) => {
                    log::debug!("{PLATFORM_ENV_VAR} overrides host platform with raw id {id}");
                    id
                }
                Err(e) => {
                    log::warn!("ignoring {PLATFORM_ENV_VAR}: {e}");
                    host
                }
            },
        };
        Self { id }
    }
}

impl Default for EnvPlatform {
    fn default() -> Self {
        Self::from_env()
    }
}

impl PlatformProvider for EnvPlatform {
    fn platform_id(&self) -> i32 {
        self.id
    }
}

/// Returns true iff `id` names the platform the accelerated kernel supports.
#[inline]
pub fn is_supported_platform(id: i32) -> bool {
    id == RuntimePlatform::SUPPORTED.id()
}

/// Answers whether the accelerated SGEMM backend may be used.
#[derive(Debug, Clone)]
pub struct PlatformGate<P> {
    provider: P,
}

impl<P: PlatformProvider> PlatformGate<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// True iff the provider reports the supported platform. Never fails.
    pub fn is_supported(&self) -> bool {
        is_supported_platform(self.provider.platform_id())
    }

    pub fn platform_id(&self) -> i32 {
        self.provider.platform_id()
    }

    /// The reported platform, or `None` for unrecognized identifiers.
    pub fn platform(&self) -> Option<RuntimePlatform> {
        RuntimePlatform::try_from(self.provider.platform_id()).ok()
    }

    /// Like [`is_supported`](Self::is_supported), but as a `Result`.
    pub fn require(&self) -> Result<()> {
        let platform = self.provider.platform_id();
        if is_supported_platform(platform) {
            Ok(())
        } else {
            Err(BlasError::UnsupportedPlatform { platform })
        }
    }
}

impl PlatformGate<HostPlatform> {
    pub fn host() -> Self {
        Self::new(HostPlatform)
    }
}

impl PlatformGate<EnvPlatform> {
    pub fn from_env() -> Self {
        Self::new(EnvPlatform::from_env())
    }
}
