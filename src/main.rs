//! raspberry-web-deploy - install raspberry-web from a local build
//!
//! Usage: raspberry-web-deploy [--build-root DIR] [--destdir DIR] [--json]
//!
//! Run from the repository's `scripts/` directory after a release build.
//! Exits non-zero when any step fails.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use raspberry_web_deploy::config;
use raspberry_web_deploy::infrastructure::JsonEventSink;
use raspberry_web_deploy::presentation::{factory, Cli};

mod ui;

use ui::context::UiContext;
use ui::views::deploy::{render_deploy_header, render_deploy_summary, ConsoleEventSink};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let (config, warnings) = config::load_or_default(cli.config.as_deref(), &cwd)?;
    let config = cli.apply_overrides(config::with_env_overrides(config));
    ui::error::print_config_warnings(&warnings, cli.json);

    let layout = factory::resolve_layout(&config, &cwd);
    let use_case = factory::create_deploy_use_case(&layout, &config);

    if cli.json {
        use_case.execute_with_events(Arc::new(JsonEventSink::stdout()))?;
        return Ok(());
    }

    let ui = UiContext::new(cli.verbose, cli.color, &config);
    print!(
        "{}",
        render_deploy_header(layout.build_root(), layout.destdir(), ui.color, ui.unicode)
    );

    let report = use_case.execute_with_events(Arc::new(ConsoleEventSink::stdout(ui)))?;
    print!("{}", render_deploy_summary(&report, ui.color, ui.unicode));

    Ok(())
}
