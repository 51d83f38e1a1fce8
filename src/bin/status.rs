use tokio_util::sync::CancellationToken;

use heartbeat::client::StatusClient;
use heartbeat::ui::{StatusView, View};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let client = StatusClient::local()?;
    let mut view = StatusView::new();
    println!("{}", view.render());

    let cancel = CancellationToken::new();
    let unmount = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            unmount.cancel();
        }
    });

    log::debug!("Fetching status from {}", client.url());
    view.mount(&client, &cancel).await;
    if view.is_settled() {
        println!("{}", view.render());
    }

    Ok(())
}
