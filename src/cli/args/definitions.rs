use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use hearth_listings::PropertyId;

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `hearth` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hearth",
	version,
	long_version = long_version(),
	about = "Browse rental properties in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HEARTH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: built-in default theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "property",
		value_name = "ID",
		help = "Open the detail screen of this property on start (default: home feed)"
	)]
	pub(crate) property: Option<PropertyId>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Lowest level captured by the log viewer (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(long = "list-themes", help = "List supported themes and exit (default: disabled)")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list",
		help = "Print the filtered feed and exit without starting the UI (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how `--list` prints the feed"
	)]
	pub(crate) output: OutputFormat,
}
