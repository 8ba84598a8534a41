mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobalert")]
#[command(about = "Scan careers pages for matching roles and email what is new")]
struct Cli {
    /// Print the digest instead of emailing it and leave the seen file untouched
    #[arg(long)]
    dry_run: bool,

    /// Send a plain-text message to EMAIL_USER to check the SMTP credentials, then exit
    #[arg(long, conflicts_with = "dry_run")]
    test_email: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = jobalert_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if cli.test_email {
        let to = run::send_test_email(&config).await?;
        println!("Test email sent to {to}");
        return Ok(());
    }

    let summary = run::run(&config, cli.dry_run).await?;
    println!("{summary}");

    Ok(())
}

#[cfg(test)]
mod tests;
