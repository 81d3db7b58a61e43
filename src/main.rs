use clap::Parser;
use form_submit::cli::commands::{cmd_forms, cmd_submit};
use form_submit::cli::config::{Cli, Commands, load_config, resolve_base_url, resolve_trace_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    // Resolve settings: CLI > config > defaults
    let base_url = resolve_base_url(cli.base_url.as_deref(), &config);
    let trace_path = resolve_trace_path(cli.trace.as_deref(), &config);

    match cli.command {
        Commands::Submit { form, fields } => {
            let succeeded = cmd_submit(&form, &fields, &config, &base_url, trace_path.as_deref())?;
            if !succeeded {
                std::process::exit(1);
            }
        }
        Commands::Forms => cmd_forms(&config),
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
