use clap::Parser;
use paramedic::dispatcher::Dispatcher;
use paramedic::middleware::TracingMiddleware;
use paramedic::registry;
use paramedic::router::Router;
use paramedic::routes;
use paramedic::runtime_config::RuntimeConfig;
use paramedic::server::{AppService, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Demo server exposing the full request-parsing route table.
#[derive(Parser, Debug)]
#[command(name = "paramedic", version, about)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: String,

    /// Coroutine stack size in bytes (overrides PARAMEDIC_STACK_SIZE)
    #[arg(long)]
    stack_size: Option<usize>,

    /// Print the route table and exit
    #[arg(long)]
    dump_routes: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let stack_size = cli
        .stack_size
        .unwrap_or_else(|| RuntimeConfig::from_env().stack_size);
    may::config().set_stack_size(stack_size);

    let table = routes::table()?;
    let router = Router::new(table);

    if cli.dump_routes {
        router.dump_routes();
        return Ok(());
    }

    let mut dispatcher = Dispatcher::new();
    unsafe { registry::register_all(&mut dispatcher) };
    dispatcher.add_middleware(Arc::new(TracingMiddleware));

    let service = AppService::new(router, dispatcher);

    info!(addr = %cli.addr, stack_size, "paramedic demo listening");
    let handle = HttpServer(service).start(cli.addr.as_str())?;
    handle
        .join()
        .map_err(|e| anyhow::anyhow!("server failed: {e:?}"))
}
