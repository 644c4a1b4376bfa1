//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tournament::{
    create_engine, EloTracker, Entrant, MatchConfig, MatchRunner, TournamentConfig,
    TournamentResults, TournamentSettings, ELO_FILE, KNOWN_ENGINES,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Othello Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [options]");
    println!("  tournament gauntlet <challenger> [options] [--save FILE]");
    println!("  tournament leaderboard");
    println!();
    println!("Options:");
    println!("  --games N          games per match (default 10)");
    println!("  --depth D          search horizon in plies");
    println!("  --size S           board edge, even, 4..=26 (default 8)");
    println!("  --opening-plies K  random moves before the engines take over");
    println!("  --seed X           seed for openings and the random engine");
    println!("  --config FILE      settings file (TOML: [search], [logging], [match])");
    println!("                     flags given on the command line take precedence");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Minimax with alpha-beta pruning");
    println!("  minimax       - Same search, pruning disabled");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta random --games 20 --depth 3 --size 6");
    println!("  tournament gauntlet alphabeta --games 10 --opening-plies 4 --seed 1");
}

/// Command line arguments after the subcommand.
struct Options {
    engines: Vec<String>,
    match_config: MatchConfig,
    save: Option<PathBuf>,
    log_filter: String,
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn parse_options(args: &[String]) -> Result<Options> {
    let settings = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = flag_value(args, i, "--config")?;
            TournamentSettings::load(Path::new(path))
                .with_context(|| format!("loading configuration from {path}"))?
        }
        None => TournamentSettings::default(),
    };

    let mut options = Options {
        engines: Vec::new(),
        match_config: settings.match_config,
        save: None,
        log_filter: settings.engine.logging.filter,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if !flag.starts_with("--") {
            options.engines.push(args[i].clone());
            i += 1;
            continue;
        }

        let value = flag_value(args, i, flag)?;
        let invalid = || format!("invalid value for {flag}: {value}");
        let config = &mut options.match_config;
        match flag {
            "--games" => config.num_games = value.parse().with_context(invalid)?,
            "--depth" => config.limits.max_depth = value.parse().with_context(invalid)?,
            "--size" => config.board_size = value.parse().with_context(invalid)?,
            "--opening-plies" => config.opening_plies = value.parse().with_context(invalid)?,
            "--seed" => config.seed = Some(value.parse().with_context(invalid)?),
            "--save" => options.save = Some(PathBuf::from(value)),
            "--config" => {}
            _ => bail!("unknown option {flag}"),
        }
        i += 2;
    }

    Ok(options)
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_match(options: Options) -> Result<()> {
    let [engine1_spec, engine2_spec] = options.engines.as_slice() else {
        bail!("match requires exactly two engines");
    };
    let config = options.match_config;

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Board: {}x{}",
        config.num_games, config.limits.max_depth, config.board_size, config.board_size
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, config.seed)?;
    let mut engine2 = create_engine(engine2_spec, config.seed.map(|s| s.wrapping_add(1)))?;

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec,
        result.wins(),
        result.losses(),
        result.draws()
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!("Disc margin: {:+}", result.disc_margin());

    let elo_path = Path::new(ELO_FILE);
    let mut tracker = EloTracker::load_or_default(elo_path)?;
    tracker.update_ratings(
        &Entrant::new(engine1_spec, runner.config()),
        &Entrant::new(engine2_spec, runner.config()),
        &result,
    );
    println!();
    println!("{}", tracker.format_leaderboard());
    tracker.save(elo_path)?;

    Ok(())
}

fn run_gauntlet(options: Options) -> Result<()> {
    let [challenger_spec] = options.engines.as_slice() else {
        bail!("gauntlet requires exactly one challenger engine");
    };
    let config = options.match_config;

    let opponents: Vec<&str> = KNOWN_ENGINES
        .into_iter()
        .filter(|name| !name.eq_ignore_ascii_case(challenger_spec))
        .collect();

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!(
        "Games per match: {}, Depth: {}",
        config.num_games, config.limits.max_depth
    );
    println!();

    let elo_path = Path::new(ELO_FILE);
    let mut tracker = EloTracker::load_or_default(elo_path)?;
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig::from(&config),
    );

    let challenger = Entrant::new(challenger_spec, &config);
    let runner = MatchRunner::new(config);
    for opponent in opponents {
        info!("{} vs {}", challenger_spec, opponent);

        let seed = runner.config().seed;
        let mut challenger_engine = create_engine(challenger_spec, seed)?;
        let mut opp_engine = create_engine(opponent, seed.map(|s| s.wrapping_add(1)))?;

        let result = runner.run_match(challenger_engine.as_mut(), opp_engine.as_mut())?;

        println!(
            "{} vs {}: {}-{}-{} (Score: {:.1}%, margin {:+})",
            challenger_spec,
            opponent,
            result.wins(),
            result.losses(),
            result.draws(),
            result.score() * 100.0,
            result.disc_margin()
        );

        let opponent_entrant = Entrant::new(opponent, runner.config());
        tracker.update_ratings(&challenger, &opponent_entrant, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    println!("{}", tracker.format_leaderboard());
    println!("{}", results.generate_report());

    tracker.save(elo_path)?;
    if let Some(path) = options.save {
        results
            .save(&path)
            .with_context(|| format!("saving gauntlet results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }

    Ok(())
}

fn show_leaderboard() -> Result<()> {
    let path = Path::new(ELO_FILE);
    if !path.exists() {
        println!("No tournament data found. Run some matches first!");
        return Ok(());
    }
    print!("{}", EloTracker::load(path)?.format_leaderboard());
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let options = parse_options(&args[2..])?;
    init_logging(&options.log_filter);

    match args[1].as_str() {
        "match" => run_match(options),
        "gauntlet" => run_gauntlet(options),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
