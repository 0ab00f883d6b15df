use anyhow::{Context, Result};
use clap::Parser;
use wallet_config::{AppConfig, NetworkRegistry};
use wallet_shell::actions::{connect, loading, location};
use wallet_shell::middleware::{LoggingMiddleware, NetworkMiddleware};
use wallet_shell::reducers::{RootReducer, RouterReducer};
use wallet_shell::{logger, Store};

/// Boot the wallet state kernel headlessly and print the resulting state
#[derive(Debug, Parser)]
#[command(name = "wallet-shell", version, about)]
struct Cli {
    /// Network id to connect to (defaults to the configured network)
    #[arg(short, long)]
    network: Option<String>,

    /// Location to navigate to on startup
    #[arg(short, long, default_value = "/")]
    route: String,

    /// List the registered networks and exit
    #[arg(long)]
    list_networks: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let log_file = logger::init()?;
    log::info!("Starting wallet-shell, logging to {}", log_file.display());

    let config = AppConfig::load();
    let registry = NetworkRegistry::builtin(config.infura_token.as_deref());

    if cli.list_networks {
        for id in registry.ids() {
            let resolved = registry.resolve(id)?;
            println!("{}\t{}\t{}", id, resolved.family_name, resolved.endpoint);
        }
        return Ok(());
    }

    let store = Store::new(RootReducer::new(Box::new(RouterReducer::new())));
    store.add_middleware(Box::new(LoggingMiddleware::new()))?;
    store.add_middleware(Box::new(NetworkMiddleware::new(registry)))?;

    let subscription = store.subscribe(|state| {
        log::debug!(
            "State: loading={} network={:?} connecting={} error={:?} location={:?}",
            state.app.loading,
            state.net.network_id(),
            state.net.connecting,
            state.net.error,
            state.routing.pathname()
        );
    });

    let network = cli.network.unwrap_or(config.default_network);

    store.dispatch(location::push(cli.route))?;
    store.dispatch(loading::start())?;
    store.dispatch(connect::init(network))?;
    store.dispatch(loading::end())?;

    subscription.unsubscribe();

    let state = store.state();
    let json = serde_json::to_string_pretty(&*state).context("Failed to serialize state")?;
    println!("{}", json);

    log::info!("Exiting wallet-shell");
    Ok(())
}
