use shopping_cart::app_system::{setup_tracing, CartSystem, Config, SystemError, CONFIG_FILE_NAME};
use shopping_cart::presentation::CartView;
use tracing::{error, info, Instrument};

/// Loads the config and installs tracing. A bad config file is still logged,
/// using the default filter.
fn load_config(path: &str) -> Result<Config, SystemError> {
    match Config::load_from(path) {
        Ok(config) => {
            setup_tracing(&config.log_filter);
            Ok(config)
        }
        Err(e) => {
            setup_tracing(&Config::default().log_filter);
            error!(error = %e, file = path, "Failed to load configuration");
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = load_config(CONFIG_FILE_NAME)?;

    info!(api = %config.api_base_url, "Starting shopping cart");

    let system = CartSystem::new(&config)?;
    let controller = &system.controller;

    let span = tracing::info_span!("cart_session");
    async {
        if let Err(e) = controller.load().await {
            error!(error = %e, "Failed to load cart");
            return;
        }
        println!("{}\n", CartView::render(&controller.state()));

        // Item "2" can go both ways; item "4" is already at the maximum.
        for result in [
            controller.increment("2").await,
            controller.increment("4").await,
            controller.decrement("3").await,
        ] {
            if let Err(e) = result {
                error!(error = %e, "Quantity change failed");
            }
        }
        println!("{}\n", CartView::render(&controller.state()));

        match controller.send_order().await {
            Ok(()) => info!("Checkout complete"),
            Err(e) => error!(error = %e, "Checkout failed, cart kept"),
        }
        println!("{}", CartView::render(&controller.state()));
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
