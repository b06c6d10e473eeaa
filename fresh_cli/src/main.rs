use std::process;

use clap::Parser;
use fresh_cli::FreshCli;
use fresh_cli::OutputFormat;
use fresh_core::AnyEmptyResult;
use fresh_core::check_document;
use fresh_core::refresh_document;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = FreshCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if args.verbose {
		eprintln!("document:        {}", args.document.display());
		eprintln!("directive name:  {}", args.directive_name);
		eprintln!("snippet prefix:  {}", args.snippet_prefix);
	}

	let result = if args.check {
		run_check(&args)
	} else {
		run_refresh(&args)
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<fresh_core::FreshError>() {
			Ok(fresh_err) => {
				let report: miette::Report = (*fresh_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run_refresh(args: &FreshCli) -> AnyEmptyResult {
	let options = args.sync_options();
	let outcome = refresh_document(&args.document, &options)?;

	if outcome.changed {
		println!("Refreshed {}.", args.document.display());
	} else {
		println!("{} is already up to date.", args.document.display());
	}

	Ok(())
}

fn run_check(args: &FreshCli) -> AnyEmptyResult {
	let options = args.sync_options();
	let outcome = check_document(&args.document, &options)?;
	let document = args.document.display().to_string();

	if outcome.is_ok() {
		match args.format {
			OutputFormat::Json => {
				let output = serde_json::json!({ "ok": true, "document": document });
				println!("{output}");
			}
			OutputFormat::Text => {
				println!("Check passed: {document} is up to date.");
			}
		}
		return Ok(());
	}

	match args.format {
		OutputFormat::Json => {
			let output = serde_json::json!({ "ok": false, "document": document });
			println!("{output}");
		}
		OutputFormat::Text => {
			eprintln!("{document} is out of date.");
			if args.diff {
				print_diff(&outcome.current, &outcome.expected);
			}
			eprintln!("Run `fresh-readme {document}` to fix.");
		}
	}

	process::exit(1);
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
