use clap::Parser;
use spotctl::{Cli, CommandEnv, DefaultFactory, Streams, logging};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    // Prompts need a terminal on stdin.
    if !std::io::stdin().is_terminal() {
        cli.global.noninteractive = true;
    }

    let log = logging::init();

    let token = CancellationToken::new();
    let interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling");
            interrupt.cancel();
        }
    });

    let env = CommandEnv::new(Arc::new(DefaultFactory::new(Streams::stdio())), log);
    spotctl::execute(cli, env, token).await?;

    Ok(())
}
