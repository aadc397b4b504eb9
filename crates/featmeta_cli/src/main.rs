#![allow(missing_docs)]

use clap::{Parser, Subcommand, ValueEnum};

mod cmd;

#[derive(Parser)]
#[command(name = "featmeta", about = "glTF structural metadata property inspection tools")]
struct Cli {
	/// Diagnostic output level; `RUST_LOG` overrides it.
	#[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
	log_level: LogLevel,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Describe a property document and its status.
	Info(cmd::info::Args),
	/// Read one feature as a typed value.
	Get(cmd::get::Args),
	/// Print every feature of a property.
	Dump(cmd::dump::Args),
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
	/// No logging output
	None,
	/// Only error messages
	Error,
	/// Warning and error messages
	Warn,
	/// Info, warning, and error messages
	Info,
	/// Debug and above messages
	Debug,
	/// All messages including trace
	Trace,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::error::Result<()> {
	let cli = Cli::parse();
	init_logging(cli.log_level);

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
	}
}

fn init_logging(log_level: LogLevel) {
	let level = match log_level {
		LogLevel::None => return,
		LogLevel::Error => "error",
		LogLevel::Warn => "warn",
		LogLevel::Info => "info",
		LogLevel::Debug => "debug",
		LogLevel::Trace => "trace",
	};

	let env = env_logger::Env::default().filter_or("RUST_LOG", level);
	env_logger::Builder::from_env(env)
		.format_timestamp(None)
		.format_module_path(false)
		.format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
		.init();
}
