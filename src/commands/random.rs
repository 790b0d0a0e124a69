use clap::Args;

use toolbelt::console;
use toolbelt::strings::{self, DEFAULT_CHARSET};

#[derive(Args)]
pub struct RandomArgs {
    /// Length of the generated string
    #[arg(short = 'l', long, default_value_t = 16)]
    pub length: usize,

    /// Skip copying the result to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,
}

pub fn run(args: &RandomArgs) -> toolbelt::Result<()> {
    let pb = console::spinner("Generating secure random string...");
    let generated = strings::random_string(args.length, DEFAULT_CHARSET);
    pb.finish_and_clear();
    let value = generated?;

    console::highlight("✓ Generated: ", &value);

    if !args.no_clipboard {
        // Clipboard access can fail on headless machines; the string is
        // already printed, so this is only a warning.
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(value)) {
            Ok(()) => console::success("✓ Copied to clipboard!"),
            Err(e) => console::warn(&format!("Could not copy to clipboard: {}", e)),
        }
    }

    Ok(())
}
