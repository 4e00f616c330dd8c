use dotenv::dotenv;
use greenhaven::config::ServerConfig;
use greenhaven::server::{create_server, ServerError};
use std::env;
use std::process::ExitCode;
use tracing::{error, info, trace};

#[actix_web::main]
async fn main() -> ExitCode {
    dotenv().ok();
    if let Err(err) = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(true)
                .with_line_number(true),
        )
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
    {
        eprintln!("failed to install logger: {}", err);
    }

    trace!("started!");

    match run().await {
        Ok(()) => {
            info!("server stopped");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    if let Ok(path) = env::current_dir() {
        trace!("current working directory is {}", path.display());
    }
    trace!("current assets directory is {}", config.assets_root_dir);

    let server = create_server(&config).await?;
    server.await?;
    Ok(())
}
