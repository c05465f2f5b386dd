use std::io;

use clap::Parser;
use color_eyre::eyre::bail;
use elapsed::measure_time;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use logic_tree_core::{LogicTree, TruthTable};

mod prompt;
mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// Logical expression, e.g. "P & ~(S ? Q)" [prompted for when omitted]
    #[clap(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Predicate: X, ~X, X=Y, X>Y, X>~Y, ~X>Y or ~X>~Y
    #[clap(short, long = "predicate", value_name = "PREDICATE")]
    predicates: Vec<String>,

    /// Print the truth table over the variables left unknown
    #[clap(short, long)]
    table: bool,

    /// Do not draw the tree
    #[clap(long)]
    no_tree: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[clap(long, default_value = "warn", parse(try_from_str = parse_level_filter))]
    log_level: LevelFilter,
}

fn parse_level_filter(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{s}'"))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    TermLogger::init(args.log_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
    info!("args = {:?}", args);

    let (expression, mut predicates) = match &args.expression {
        Some(expression) => (expression.clone(), Vec::new()),
        None => match prompt::prompt(io::stdin().lock(), &mut io::stdout())? {
            Some(session) => session,
            None => bail!("No expression given"),
        },
    };
    predicates.extend(args.predicates.iter().cloned());

    run(&args, &expression, &predicates)
}

fn run(args: &Cli, expression: &str, predicates: &[String]) -> color_eyre::Result<()> {
    let mut tree = LogicTree::parse(expression)?;
    info!("tree = {:#}", tree.root());

    let (elapsed, inference) = measure_time(|| tree.infer(predicates));
    info!("Inference took {} passes in {}", inference.passes, elapsed);
    for warning in inference.warnings.iter() {
        println!("Skipped: {warning}");
    }

    if !args.no_tree {
        println!("{}", render::render_tree(&tree));
    }
    for (letter, value) in tree.values() {
        println!("{letter}: {value}");
    }
    println!("Result: {}", tree.evaluate());

    if args.table {
        let table = TruthTable::new(&tree)?;
        println!();
        print!("{}", render::render_table(&table));
    }

    Ok(())
}
