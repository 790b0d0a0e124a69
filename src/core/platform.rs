//! Platform and architecture detection.
//!
//! Detection is split from decision-making: `Platform::detect()` reads the
//! compile-time constants, while everything downstream takes an `Os` value
//! so both families can be exercised on one machine.

use std::env::consts;
use std::fmt;

use crate::error::{Error, Result};

/// Supported operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Windows,
}

impl Os {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "macos" | "darwin" => Ok(Os::MacOs),
            "linux" => Ok(Os::Linux),
            "windows" => Ok(Os::Windows),
            other => Err(Error::UnsupportedOs(other.to_string())),
        }
    }

    /// Whether this OS secures files with POSIX permission bits. Windows
    /// relies on ACLs instead, so chmod-style hardening is skipped there.
    pub fn uses_posix_permissions(self) -> bool {
        !matches!(self, Os::Windows)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Os::MacOs => "macos",
            Os::Linux => "linux",
            Os::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported CPU architectures, normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "x86_64" | "amd64" | "x64" => Ok(Arch::X64),
            "aarch64" | "arm64" | "armv8" => Ok(Arch::Arm64),
            other => Err(Error::UnsupportedArch(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected OS and architecture pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Detect the current platform. Errors on OS/arch values outside the
    /// supported set.
    pub fn detect() -> Result<Self> {
        Ok(Platform {
            os: Os::parse(consts::OS)?,
            arch: Arch::parse(consts::ARCH)?,
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
