use std::io::IsTerminal;
use std::process::ExitCode;

use embed::cli::{Cli, Compiler};
use embed::options;
use embed::plugin::{self, Clang, Gcc, Host, PluginInfo};
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logging = init_logging();

    let arguments = plugin::gcc::collect_arguments(&cli.plugin_name, &cli.host_args);
    let options = options::parse(arguments);

    // The plugin's own `verbose` option raises the default level, RUST_LOG still wins
    if options.verbose {
        if let Err(err) = logging.reload(env_filter(LevelFilter::DEBUG)) {
            warn!(%err, "failed to enable verbose logging");
        }
    }

    let plugin_info = PluginInfo::new(cli.plugin_name.clone(), cli.plugin_path());
    let host: Box<dyn Host> = match cli.compiler {
        Compiler::Gcc => Box::new(Gcc::new(cli.host.into())),
        Compiler::Clang => Box::new(Clang),
    };

    let mut stderr = std::io::stderr().lock();
    match plugin::init(host.as_ref(), &plugin_info, &options, &mut stderr) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}

fn init_logging() -> FilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(LevelFilter::WARN));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .without_time(),
        )
        .init();

    handle
}
