use clap::{Args, ValueEnum};

use toolbelt::generate::{self, GeneratorKind};
use toolbelt::platform::Platform;
use toolbelt::prompt::StdinPrompt;

#[derive(Args)]
pub struct GenerateArgs {
    /// Which config file to generate
    #[arg(value_enum)]
    pub kind: Kind,

    /// Overwrite an existing file without confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// CLI-facing names for the generator kinds.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Kind {
    /// PostgreSQL connection service file
    PgService,
    /// PostgreSQL password file
    Pgpass,
    /// SSH client config
    SshConfig,
}

impl From<Kind> for GeneratorKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::PgService => GeneratorKind::PgService,
            Kind::Pgpass => GeneratorKind::Pgpass,
            Kind::SshConfig => GeneratorKind::SshConfig,
        }
    }
}

pub fn run(args: &GenerateArgs) -> toolbelt::Result<()> {
    let platform = Platform::detect()?;
    let spec = GeneratorKind::from(args.kind).spec(platform.os)?;
    generate::create(&spec, args.force, &mut StdinPrompt)
}
