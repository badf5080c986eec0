use std::process;
use std::time::Instant;

use clap::{App, Arg};
use log::info;
use separator::Separatable;

use sokoban_astar::solver::Outcome;
use sokoban_astar::{LoadLevel, Solve, Validate};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("sokoban-astar")
        .about("Solves Sokoban levels with best-first search")
        .arg(
            Arg::with_name("max-nodes")
                .long("--max-nodes")
                .takes_value(true)
                .value_name("N")
                .help("Give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("states")
                .long("--states")
                .help("Print the board after each move of the solution"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let budget = match matches.value_of("max-nodes") {
        None => None,
        Some(raw) => match raw.parse() {
            Ok(n) => Some(n),
            Err(err) => {
                println!("Bad --max-nodes value {}: {}", raw, err);
                process::exit(1);
            }
        },
    };
    let path = matches.value_of("file").unwrap();

    let level = path.load_level().unwrap_or_else(|err| {
        println!("Can't load level {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let started = Instant::now();
    let result = level.solve(budget).unwrap_or_else(|err| {
        println!("Can't solve level: {}", err);
        process::exit(1);
    });
    info!(
        "search took {} ms",
        (started.elapsed().as_millis() as u64).separated_string()
    );

    match result.outcome {
        Outcome::Solved(ref moves) => {
            println!("Solution: {}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());

            let verdict = level.validate(moves).unwrap_or_else(|err| {
                println!("Can't replay solution: {}", err);
                process::exit(1);
            });
            println!("Replay check: {}", verdict);

            if matches.is_present("states") {
                println!("{}", level.format_solution(moves, true));
            }
        }
        Outcome::NoSolution => println!("No solution"),
        Outcome::BudgetExceeded => println!("Search budget exceeded"),
    }
    print!("{}", result.stats);
}
