use hopngo::config::Config;
use hopngo::engine::Engine;
use hopngo::error::Error;
use hopngo::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let addr = config.addr;

    let engine = Engine::from_config(config)?;

    serve(engine, addr).await
}
