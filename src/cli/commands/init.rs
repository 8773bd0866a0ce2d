use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::{Cli, Commands};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the server URL to use
pub fn handle(cli: &Cli) -> AppResult<()> {
    let server = if let Commands::Init { server } = &cli.command {
        server.clone().or_else(|| cli.server.clone())
    } else {
        cli.server.clone()
    };

    println!("⚙️  Initializing punchcard…");

    let cfg = Config::init_all(cli.dir.as_deref(), server)?;

    println!("📄 Config file : {}", cfg.config_file().display());
    println!("🌐 Server      : {}", cfg.server);
    println!("🎉 punchcard initialization completed!");

    Ok(())
}
