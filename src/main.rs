use clap::Parser;
use tracing::{debug, error, trace};

use catalog_dash::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    let config = match cli::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let e = anyhow::Error::from(e);
            eprintln!("Error: {}", cli::describe_failure(&e));
            std::process::exit(cli::exit_code_for(&e));
        }
    };

    cli::init_tracing(cli.verbose, &config.log_level);

    debug!("catalog-dash started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    debug!("Resolved configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = cli::execute_command(cli.command, cli.format, &config, &mut out);

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", cli::describe_failure(&e));
        std::process::exit(cli::exit_code_for(&e));
    }
}
