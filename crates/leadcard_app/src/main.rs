use clap::Parser;

mod platform;

fn main() -> anyhow::Result<()> {
    let args = platform::config::CliArgs::parse();
    let config = platform::config::AppConfig::from_args(args)?;
    platform::run_app(config)
}
