use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use hierarchy_nav::app::HierarchyNavigator;
use hierarchy_nav::kernel::services::adapters::{
    load_config_or_default, HttpHierarchyApi, MemoryHierarchyApi,
};
use hierarchy_nav::kernel::services::ports::HierarchyApi;
use hierarchy_nav::kernel::services::EventHub;

mod cli;
mod logging;
mod shell;

fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("hnav: {msg}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let logging_guard = logging::init();
    if let Some(guard) = &logging_guard {
        tracing::debug!(log_dir = %guard.log_dir().display(), "hnav starting");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hnav failed");
            eprintln!("hnav: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::CliArgs) -> io::Result<()> {
    let mut config = load_config_or_default(args.config.as_deref());
    if let Some(server) = args.server {
        config.server_url = server;
    }

    let api: Arc<dyn HierarchyApi> = match &args.snapshot {
        Some(path) => Arc::new(read_snapshot(path)?),
        None => Arc::new(HttpHierarchyApi::new(
            config.server_url.clone(),
            config.request_timeout(),
        )),
    };
    tracing::info!(
        server = %config.server_url,
        offline = args.snapshot.is_some(),
        root_path = %args.root_path,
        "starting navigator"
    );

    let hub = EventHub::new();
    let events = hub.subscribe();
    let timeout = config.request_timeout();
    let download_dir = std::env::current_dir()?;
    let nav = HierarchyNavigator::new(
        config,
        api,
        Box::new(hub),
        Box::new(shell::TerminalFrontend::new(download_dir)),
        Box::new(shell::StdoutView),
    )?;

    shell::Shell::new(nav, events, timeout).run(args.root_path)
}

fn read_snapshot(path: &Path) -> io::Result<MemoryHierarchyApi> {
    let data = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: {e}", path.display()),
        )
    })?;
    Ok(MemoryHierarchyApi::new(value))
}
