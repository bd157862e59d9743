use clap::Parser;
use oidtree::cli::commands::execute_command;
use oidtree::cli::{output, Cli};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output directed to stderr, stdout is reserved for data
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oidtree::cli::Commands;
    use oidtree::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        testing::init_test_setup();
        Cli::command().debug_assert();
    }

    #[test]
    fn given_repeated_debug_flags_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["oidtree", "-dd", "-C", "/srv/snmp", "lookup", "1.3.6.1"])
            .unwrap();
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.base_dir.as_deref(), Some(std::path::Path::new("/srv/snmp")));
        assert!(matches!(cli.command, Some(Commands::Lookup { ref oid }) if oid == "1.3.6.1"));
    }
}
