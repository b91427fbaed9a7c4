use anyhow::Result;
use clap::Parser;
use torus_snake::game::GameConfig;
use torus_snake::host::Host;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Wrap-around snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "15")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "10")]
    height: usize,

    /// Terminal columns drawn per grid cell
    #[arg(long, default_value = "2")]
    scale: usize,
}

// The whole game is cooperative and single-threaded; a current-thread
// runtime is all it needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height, cli.scale);
    config.validate()?;

    Host::new(config).run().await
}
