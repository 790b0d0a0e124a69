use clap::Args;

use toolbelt::console;
use toolbelt::platform::Platform;

#[derive(Args)]
pub struct PlatformArgs {}

pub fn run(_args: &PlatformArgs) -> toolbelt::Result<()> {
    let platform = Platform::detect()?;

    console::pair("Platform: ", platform.os.as_str());
    console::pair("Architecture: ", platform.arch.as_str());
    console::pair("Full: ", &platform.to_string());

    Ok(())
}
