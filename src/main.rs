use clap::Parser;

use dingbot::bot::Bot;
use dingbot::cli::Cli;
use dingbot::config::loader::CONFIG_FILE_ENV;
use dingbot::config::settings::Settings;
use dingbot::config::{ConfigLoader, Environment};
use dingbot::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CLI overrides travel through the same environment variables the
    // loader already reads.
    // SAFETY: no other thread is running yet, so mutating the process
    // environment cannot race
    if let Some(env) = cli.env {
        let env: Environment = env.into();
        unsafe { std::env::set_var(Environment::ENV_VAR, env.as_str()) };
    }
    if let Some(path) = &cli.config {
        unsafe { std::env::set_var(CONFIG_FILE_ENV, path) };
    }

    let mut settings = ConfigLoader::new()?.load()?;

    if let Some(level) = cli.log_level_override() {
        settings.logger.level = level.to_string();
    }

    if cli.dry_run {
        return dry_run(&settings);
    }

    init_logger(&settings.logger)?;

    Bot::new(settings).run().await
}

/// Print the validated configuration summary without contacting anything
fn dry_run(settings: &Settings) -> anyhow::Result<()> {
    println!("✓ Configuration is valid");
    println!("✓ Environment: {}", Environment::from_env().as_str());
    println!("✓ Webhook access token is configured");
    println!("✓ Log level: {}", settings.logger.level);

    for (name, job) in [
        ("weather", &settings.schedule.weather),
        ("juejin", &settings.schedule.juejin),
        ("toutiao", &settings.schedule.toutiao),
    ] {
        if job.enabled {
            println!("✓ Job {}: cron \"{}\"", name, job.cron);
        } else {
            println!("  Job {}: disabled", name);
        }
    }

    if !settings.schedule.any_enabled() {
        println!("Warning: no jobs are enabled");
    }

    println!("Dry run completed successfully - configuration is ready for deployment");
    Ok(())
}
