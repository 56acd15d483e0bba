mod query;

use anyhow::Context;
use clap::Parser;
use query::{
    print_choices, print_routes, print_routes_json, routes_for, Prompter, QueryMode, RouteFormat,
};
use smallworld_core::{enumerate_routes, longest_name_len, ResolvedRoute, RouteIndex};
use smallworld_data::{load_pool, DEFAULT_CATALOG_FILE, DEFAULT_DECK_FILE};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CATALOG_ENV: &str = "SMALLWORLD_CATALOG";

#[derive(Debug, Parser)]
#[command(name = "smallworld", version, about = "Find Small World bridge routes in a deck")]
struct Args {
    /// Card database dump (YGOProDeck cardinfo.php JSON). Falls back to $SMALLWORLD_CATALOG.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Deck list in .ydk format; only the main deck is read
    #[arg(long, default_value = DEFAULT_DECK_FILE)]
    deck: PathBuf,

    /// Query without prompting: list routes by starters or by targets
    #[arg(long, value_enum)]
    by: Option<QueryMode>,

    /// Position in the starter/target listing to query (requires --by)
    #[arg(long, requires = "by")]
    pick: Option<usize>,

    /// Print every route and exit
    #[arg(long, conflicts_with_all = ["by", "pick"])]
    list: bool,

    /// Emit routes as JSON instead of aligned text
    #[arg(long)]
    json: bool,

    /// Append the property each hop shares
    #[arg(long)]
    explain: bool,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let catalog = args.catalog_path();
    let built = load_pool(&catalog, &args.deck).with_context(|| {
        format!(
            "load deck {} against {}",
            args.deck.display(),
            catalog.display()
        )
    })?;
    let routes = enumerate_routes(&built.pool);
    info!(routes = routes.len(), "enumerated routes");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if routes.is_empty() {
        writeln!(out, "No Small World routes in this deck.")?;
        return Ok(());
    }

    let index = RouteIndex::build(&routes);
    let format = RouteFormat {
        width: longest_name_len(routes.pool()),
        explain: args.explain,
    };

    if args.list {
        let all: Vec<ResolvedRoute<'_>> = routes.iter().collect();
        return emit(&mut out, &all, format, args.json);
    }

    match (args.by, args.pick) {
        (Some(mode), Some(pick)) => {
            let card = match mode {
                QueryMode::Starters => index.select_starter(pick)?,
                QueryMode::Targets => index.select_target(pick)?,
            };
            let selected = routes_for(&index, mode, card);
            emit(&mut out, &selected, format, args.json)
        }
        (Some(mode), None) => {
            print_choices(&mut out, &index, mode, format.width)?;
            Ok(())
        }
        _ => {
            drop(out);
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
            query::run_interactive(&mut prompter, &index, format)?;
            Ok(())
        }
    }
}

fn emit<W: Write>(
    out: &mut W,
    routes: &[ResolvedRoute<'_>],
    format: RouteFormat,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        print_routes_json(out, routes)?;
    } else {
        print_routes(out, routes, format)?;
    }
    Ok(())
}
