//! Navee Links CLI
//!
//! Command-line tool for resolving and building Navee deep links.
//!
//! ## Usage
//!
//! ```bash
//! navee-links parse "https://app.local/place/abc123?ref=share"
//! navee-links parse --json /journey/flights
//! navee-links build atlas --q beach --radius-km 5
//! navee-links build place p_123
//! navee-links build journey flightSearch --param from=BLR --param to=DEL
//! navee-links --config links.toml routes
//! ```

mod output;

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use navee_deeplink::{AtlasQuery, DeeplinkConfig, DeeplinkResolver, RouteName};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "navee-links")]
#[command(about = "Resolve and build Navee deep links", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Deeplink configuration file (TOML)
	#[arg(short, long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Override the link scheme
	#[arg(long, global = true)]
	scheme: Option<String>,

	/// Override the link host
	#[arg(long, global = true)]
	host: Option<String>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve a deep link into a route intent
	Parse {
		/// Absolute URI or root-relative link
		#[arg(value_name = "URI")]
		uri: String,

		/// Reject place links without an identifier
		#[arg(long)]
		strict: bool,

		/// Print the intent as JSON
		#[arg(long)]
		json: bool,
	},

	/// Build a shareable link
	Build {
		#[command(subcommand)]
		target: BuildTarget,
	},

	/// List the route catalog
	Routes,
}

#[derive(Subcommand)]
enum BuildTarget {
	/// Link to the atlas explorer
	Atlas(AtlasArgs),

	/// Link to a single place
	Place {
		/// Place identifier
		#[arg(value_name = "ID")]
		id: String,
	},

	/// Link to a journey search category
	Journey {
		/// Route name, e.g. flightSearch
		#[arg(value_name = "ROUTE")]
		route: RouteName,

		/// Query parameter as key=value (can be repeated)
		#[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
		params: Vec<(String, String)>,
	},
}

#[derive(Args)]
struct AtlasArgs {
	/// Free-text search
	#[arg(long)]
	q: Option<String>,

	/// Region filter
	#[arg(long)]
	region: Option<String>,

	/// Only places near the user
	#[arg(long, num_args = 0..=1, default_missing_value = "true")]
	nearby: Option<bool>,

	/// Only trending places
	#[arg(long, num_args = 0..=1, default_missing_value = "true")]
	trending: Option<bool>,

	/// Only places open right now
	#[arg(long, num_args = 0..=1, default_missing_value = "true")]
	open_now: Option<bool>,

	/// Mood filter
	#[arg(long)]
	emotion: Option<String>,

	/// Place category
	#[arg(long)]
	category: Option<String>,

	/// Sort order
	#[arg(long)]
	sort: Option<String>,

	/// Price band
	#[arg(long)]
	price: Option<String>,

	/// Rating band
	#[arg(long)]
	rating: Option<String>,

	/// Search radius in kilometres
	#[arg(long)]
	radius_km: Option<f64>,

	/// Map centre latitude
	#[arg(long, allow_hyphen_values = true)]
	lat: Option<f64>,

	/// Map centre longitude
	#[arg(long, allow_hyphen_values = true)]
	lng: Option<f64>,

	/// Map zoom level
	#[arg(long)]
	zoom: Option<f64>,
}

impl From<AtlasArgs> for AtlasQuery {
	fn from(args: AtlasArgs) -> Self {
		AtlasQuery {
			query: args.q,
			region: args.region,
			nearby: args.nearby,
			trending: args.trending,
			open_now: args.open_now,
			emotion: args.emotion,
			category: args.category,
			sort: args.sort,
			price: args.price,
			rating: args.rating,
			radius_km: args.radius_km,
			lat: args.lat,
			lng: args.lng,
			zoom: args.zoom,
		}
	}
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
	s.split_once('=')
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	if let Err(e) = run(cli) {
		eprintln!("{}: {:#}", "Error".red(), e);
		process::exit(1);
	}
}

fn init_tracing(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let config = load_config(cli.config, cli.scheme, cli.host)?;
	let resolver = DeeplinkResolver::new(config);

	match cli.command {
		Commands::Parse { uri, strict, json } => run_parse(&resolver, &uri, strict, json),
		Commands::Build { target } => run_build(&resolver, target),
		Commands::Routes => {
			output::print_routes(resolver.config().catalog());
			Ok(())
		}
	}
}

fn load_config(
	path: Option<PathBuf>,
	scheme: Option<String>,
	host: Option<String>,
) -> anyhow::Result<DeeplinkConfig> {
	let config = match path {
		Some(path) => DeeplinkConfig::from_file(&path)
			.with_context(|| format!("could not load configuration from {}", path.display()))?,
		None => DeeplinkConfig::default(),
	};

	if scheme.is_none() && host.is_none() {
		return Ok(config);
	}

	let (origin, catalog) = config.into_parts();
	let config = DeeplinkConfig::builder()
		.scheme(scheme.unwrap_or_else(|| origin.scheme().to_string()))
		.host(host.unwrap_or_else(|| origin.host().to_string()))
		.catalog(catalog)
		.build()?;

	tracing::info!("links rooted at {}", config.origin().base_url());
	Ok(config)
}

fn run_parse(
	resolver: &DeeplinkResolver,
	input: &str,
	strict: bool,
	json: bool,
) -> anyhow::Result<()> {
	let parser = resolver.parser();
	let uri = parser.to_url(input)?;

	if strict {
		parser.parse_strict(&uri)?;
	}
	let (intent, rule) = parser.explain(&uri);

	if json {
		println!("{}", serde_json::to_string_pretty(&intent)?);
	} else {
		output::print_intent(&intent, rule);
	}

	Ok(())
}

fn run_build(resolver: &DeeplinkResolver, target: BuildTarget) -> anyhow::Result<()> {
	let builder = resolver.builder();

	let uri = match target {
		BuildTarget::Atlas(args) => builder.atlas(&args.into()),
		BuildTarget::Place { id } => builder.place_detail(&id)?,
		BuildTarget::Journey { route, params } => builder.journey(route, params)?,
	};

	println!("{}", uri);
	Ok(())
}
