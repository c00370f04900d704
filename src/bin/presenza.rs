use anyhow::Result;
use presenza::cli::{actions, actions::Action, start, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let action = start()?;

    let result = match action {
        Action::Server(args) => actions::server::execute(args).await,
    };

    // Flush any pending spans before the process exits.
    telemetry::shutdown_tracer();

    result
}
