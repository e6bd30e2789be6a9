mod server;

mod cli;
mod enrich;
mod env;
mod error;
mod http;
mod report;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::parse();
    match cli.command {
        Some(cli::Commands::Start) | None => {
            ipcheck_common::logger::init_logger("ipcheck:server");
            let config = env::init()?;
            server::start(config).await
        }
        Some(cli::Commands::Version) => {
            println!("{}", env::version());
            Ok(())
        }
    }
}
