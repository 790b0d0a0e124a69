use clap::Args;

use toolbelt::fscopy;
use toolbelt::prompt::StdinPrompt;

#[derive(Args)]
pub struct CopyArgs {
    /// Source path to copy from (file or directory; `~` and env vars expand)
    #[arg(short = 'i', long = "input", visible_alias = "source")]
    pub source: String,

    /// Destination path to copy to
    #[arg(short = 'o', long = "output", visible_alias = "destination")]
    pub destination: String,
}

pub fn run(args: &CopyArgs) -> toolbelt::Result<()> {
    fscopy::copy_path(&args.source, &args.destination, &mut StdinPrompt)
}
