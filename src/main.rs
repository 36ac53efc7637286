use clap::Parser;
use packlist::cli::commands::Cli;
use packlist::cli::handlers;
use packlist::io::config_io;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let result = match config_io::load_config(cli.config.as_deref()) {
                Ok(config) => packlist::tui::run(config),
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
