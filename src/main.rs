use anyhow::Result;
use epwrap::adapter::{Adapter, Prepared};
use epwrap::cli::{Cli, OutputFormat};
use epwrap::config::AdapterConfig;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print the prepared command line instead of executing it
fn print_invocation(prepared: &Prepared, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for arg in &prepared.invocation.args {
                println!("{}", arg);
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "version": prepared.version.token(),
                "major": prepared.version.major(),
                "program": prepared.invocation.program,
                "strategy": prepared.invocation.strategy,
                "args": prepared.invocation.args,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse_args();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => AdapterConfig::from_toml(path)?,
        None => AdapterConfig::default(),
    };

    let adapter = Adapter::new(config);
    tracing::debug!(
        "Plugin invocation from major {}, {} default analysis flags",
        adapter.config().module_system_threshold,
        adapter.config().analysis_flags.len()
    );
    let request = args.request();

    if args.dry_run {
        let prepared = adapter.prepare(&request)?;
        return print_invocation(&prepared, args.format);
    }

    // Only reached when the runtime banner is unrecognized or exec failed
    Err(adapter.run(&request).into())
}
