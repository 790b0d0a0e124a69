//! Config file generation.
//!
//! Each generator kind maps to a fixed template written to a well-known,
//! platform-dependent location. The write procedure is shared: confirm an
//! overwrite, create parents, write, then harden permissions when the
//! spec calls for it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::console;
use crate::error::{Error, Result};
use crate::paths;
use crate::platform::Os;
use crate::prompt::Prompt;

const PG_SERVICE_TEMPLATE: &str = "\
# Read more: https://www.postgresql.org/docs/current/libpq-pgservice.html

[mydb]
host=localhost
port=5432
dbname=postgres
user=postgres
";

const PGPASS_TEMPLATE: &str = "\
# Read more: https://www.postgresql.org/docs/current/libpq-pgpass.html

# hostname:port:database:username:password
";

const SSH_CONFIG_TEMPLATE: &str = "\
# Read more: https://linux.die.net/man/5/ssh_config

Host my_host_alias
    IdentityFile ~/.ssh/id_rsa
    User my_user
    HostName my_domain_or_ip_address
";

/// Owner read/write only.
const PGPASS_MODE: u32 = 0o600;

const MAX_CONFIRM_ATTEMPTS: u32 = 3;

/// The closed set of config files `generate` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    PgService,
    Pgpass,
    SshConfig,
}

/// Target path, body and optional permission hardening for one generated
/// file.
///
/// Recomputed per invocation from the given OS, never cached, so an OS
/// change between runs is honored.
#[derive(Debug, Clone)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
    /// POSIX permission bits to apply after writing. `None` where not
    /// applicable (no hardening, or an ACL-based OS).
    pub mode: Option<u32>,
}

impl GeneratorKind {
    /// Compute the file spec for this kind on the given OS.
    ///
    /// Pure apart from environment lookups; performs no filesystem I/O.
    pub fn spec(self, os: Os) -> Result<FileSpec> {
        match self {
            GeneratorKind::PgService => Ok(FileSpec {
                path: paths::pg_base_dir(os)?.join(".pg_service.conf"),
                content: PG_SERVICE_TEMPLATE.to_string(),
                mode: None,
            }),
            GeneratorKind::Pgpass => {
                let filename = if os == Os::Windows {
                    "pgpass.conf"
                } else {
                    ".pgpass"
                };
                Ok(FileSpec {
                    path: paths::pg_base_dir(os)?.join(filename),
                    content: PGPASS_TEMPLATE.to_string(),
                    mode: os.uses_posix_permissions().then_some(PGPASS_MODE),
                })
            }
            GeneratorKind::SshConfig => Ok(FileSpec {
                path: paths::home_dir()?.join(".ssh").join("config"),
                content: SSH_CONFIG_TEMPLATE.to_string(),
                mode: None,
            }),
        }
    }
}

/// How permission bits get applied. Injectable so tests can exercise the
/// chmod-failure path, which a same-owner process cannot trigger for real.
type ChmodFn = dyn Fn(&Path, u32) -> io::Result<()>;

/// Write `spec` to disk, confirming before overwriting a non-empty file.
///
/// Parent directories are created as needed. Directory-creation and write
/// failures propagate to the caller; a chmod failure after a successful
/// write is downgraded to a warning.
pub fn create(spec: &FileSpec, force: bool, prompt: &mut dyn Prompt) -> Result<()> {
    create_with(spec, force, prompt, &set_mode)
}

fn create_with(spec: &FileSpec, force: bool, prompt: &mut dyn Prompt, chmod: &ChmodFn) -> Result<()> {
    if !force && is_nonempty_file(&spec.path) {
        confirm_overwrite(&spec.path, prompt)?;
    }

    if let Some(parent) = spec.path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pb = console::spinner(format!("Creating {}...", paths::display_name(&spec.path)));
    let written = fs::write(&spec.path, &spec.content);
    pb.finish_and_clear();
    written?;

    console::success(&format!("✓ File written to {}", spec.path.display()));

    if let Some(mode) = spec.mode {
        apply_mode(&spec.path, mode, chmod);
    }

    Ok(())
}

/// An empty file is treated as absent: overwriting it loses nothing.
fn is_nonempty_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

fn confirm_overwrite(path: &Path, prompt: &mut dyn Prompt) -> Result<()> {
    for _ in 0..MAX_CONFIRM_ATTEMPTS {
        console::warn(&format!("'{}' exists and is not empty", path.display()));
        let response = prompt.ask("overwrite? [y/N]: ")?;
        match response.to_lowercase().as_str() {
            "y" | "yes" => return Ok(()),
            "n" | "no" | "" => return Err(Error::Aborted),
            _ => console::info("Please answer with 'y' or 'n'."),
        }
    }

    console::warn("Too many invalid responses.");
    Err(Error::Aborted)
}

fn apply_mode(path: &Path, mode: u32, chmod: &ChmodFn) {
    match chmod(path, mode) {
        Ok(()) => console::success(&format!(
            "✓ Permissions secured for {} ({:o})",
            path.display(),
            mode
        )),
        Err(e) => console::warn(&format!(
            "Warning: could not set permissions on {}: {}",
            path.display(),
            e
        )),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
