// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use toast_rack::config;
use toast_rack::diagnostics::DiagnosticsCollector;
use toast_rack::domain::toast::{Category, Position};
use toast_rack::service::ToastService;
use toast_rack::ui::notifications::ToastApi;
use toast_rack::ui::surface::HeadlessDocument;

/// How often the CLI moves diagnostics from the channel into the log.
const DIAGNOSTICS_DRAIN_INTERVAL: Duration = Duration::from_millis(50);

const HELP: &str = "\
toast_rack - render toast notifications into a headless document

USAGE:
  toast_rack [OPTIONS] [CATEGORY:MESSAGE]...

OPTIONS:
  --position <POS>      top-left, top-center, top-right,
                        bottom-left, bottom-center, bottom-right
  --duration <MS>       Default auto-dismiss delay (0 keeps toasts until clicked)
  --config-dir <DIR>    Directory holding settings.toml
  --save                Write the effective settings back to settings.toml
  --diagnostics         Print the lifecycle report as JSON
  -h, --help            Print this help

A message without a success:, error:, warning: or info: prefix is shown as info.
";

struct Args {
    position: Option<Position>,
    duration: Option<u64>,
    config_dir: Option<PathBuf>,
    save: bool,
    diagnostics: bool,
    toasts: Vec<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Args {
        position: args.opt_value_from_str("--position")?,
        duration: args.opt_value_from_str("--duration")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        save: args.contains("--save"),
        diagnostics: args.contains("--diagnostics"),
        toasts: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    }))
}

fn run(args: Args) -> toast_rack::error::Result<()> {
    let (mut config, warning) = config::load_with_override(args.config_dir.clone());
    if let Some(warning) = warning {
        eprintln!("warning: settings: {warning}");
    }
    if let Some(position) = args.position {
        config.toast.position = position;
    }
    if let Some(duration) = args.duration {
        config.toast.default_duration = duration;
    }
    if args.save {
        config::save_with_override(&config, args.config_dir)?;
    }

    let mut collector = DiagnosticsCollector::new(config.diagnostics.capacity());
    let mut service = ToastService::new(HeadlessDocument::new(), &config.toast.options());
    service.set_diagnostics(collector.handle());

    let mut toaster = service.toaster();
    for raw in &args.toasts {
        match Category::split_prefix(raw) {
            Some((category, message)) => toaster.add(message, category, None),
            None => toaster.info(raw.as_str(), None),
        }
    }
    drop(toaster);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let manager = runtime.block_on(async {
        let mut run = std::pin::pin!(service.run());
        let mut drain = tokio::time::interval(DIAGNOSTICS_DRAIN_INTERVAL);
        loop {
            tokio::select! {
                manager = &mut run => break manager,
                _ = drain.tick() => collector.process_pending(),
            }
        }
    });

    println!("{}", manager.surface().body_markup());
    if args.diagnostics {
        collector.process_pending();
        println!("{}", collector.export_json()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
