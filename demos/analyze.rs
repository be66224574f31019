use clap::Parser;
use log::info;

use satfm_rs::analysis::CoreDeadAnalysis;
use satfm_rs::measure::Measurements;
use satfm_rs::model::PropositionalModel;

#[derive(Parser, Debug)]
#[command(about = "Classify core/dead features of a sample feature model.")]
struct Args {
    /// Solver backend to use (e.g. "cadical", "cd", "varisat", "vs").
    #[arg(short, long, default_value = "cadical")]
    solver: String,

    /// Repeat the analysis this many times (timings accumulate).
    #[arg(short, long, default_value_t = 1)]
    runs: usize,
}

/// A small server-product model: mandatory core, an alternative group of
/// protocols, and one feature excluded by a cross-tree constraint.
fn sample_model() -> PropositionalModel {
    let mut model = PropositionalModel::new();
    let server = model.add_variable("Server");
    let logging = model.add_variable("Logging");
    let https = model.add_variable("Https");
    let http = model.add_variable("Http");
    let telnet = model.add_variable("Telnet");

    // Server is the mandatory root, Logging is mandatory under it.
    model.add_clause([server.pos()]);
    model.add_clause([server.neg(), logging.pos()]);
    model.add_clause([logging.neg(), server.pos()]);

    // At least one protocol, children require the root.
    model.add_clause([https.pos(), http.pos(), telnet.pos()]);
    model.add_clause([https.neg(), server.pos()]);
    model.add_clause([http.neg(), server.pos()]);
    model.add_clause([telnet.neg(), server.pos()]);

    // Cross-tree constraint: Telnet is banned.
    model.add_clause([telnet.neg()]);

    model
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let mut measurements = Measurements::new();

    let model = measurements.time("Transformation", sample_model);
    info!(
        "model: {} variables, {} clauses",
        model.num_variables(),
        model.num_clauses()
    );

    let analysis = CoreDeadAnalysis::with_solver(&args.solver)?;
    info!("backend: {}", analysis.backend());

    let mut result = None;
    for _ in 0..args.runs.max(1) {
        result = Some(measurements.time("CoreDead_op", || analysis.execute(&model))?);
    }
    let result = result.unwrap();

    println!("{}", result);
    for (stage, total) in measurements.iter() {
        println!("{}: {:?}", stage, total);
    }

    Ok(())
}
