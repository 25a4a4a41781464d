use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // load .env early so RUST_LOG, SERVER_PORT etc. apply
    dotenv().ok();

    // config.toml first, then environment variables
    let (cfg, config_error) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(e) => (configs::AppConfig::from_env(), Some(e)),
    };

    server::startup::init_logging(cfg.logging.format);
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
    if let Some(e) = config_error {
        warn!(service = "server", event = "config_fallback", error = %e, "config file unavailable; using environment");
    }

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "server service starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
