use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dsskit_rank::RankingTable;
use dsskit_solver::{FeasiblePolygon, LpProblem, RegionBuilder, Solution, Solver};

#[derive(Parser)]
#[command(name = "dsskit")]
#[command(about = "Decision-support demos: LP profit maximization and WSM ranking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an LP problem from a JSON config and print the optimum
    Solve {
        /// JSON file with constraints and objective
        file: PathBuf,
        /// Also build and print the feasible-region polygon
        #[arg(short, long)]
        region: bool,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Rank alternatives from a CSV table with the Weighted Sum Model
    Rank {
        /// CSV file: header row, alternative rows, weight row last
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { file, region, format } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file: {}", e);
                    std::process::exit(1);
                }
            };

            let problem: LpProblem = match serde_json::from_str(&source) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Invalid problem config: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = problem.validate() {
                eprintln!("Invalid problem config: {}", e);
                std::process::exit(1);
            }

            let solution = match Solver::new().solve(&problem) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Solve failed: {}", e);
                    std::process::exit(1);
                }
            };

            let polygon = if region {
                match RegionBuilder::new().build(&problem) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        eprintln!("Region construction failed: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                None
            };

            if format == "json" {
                print_solve_json(&solution, polygon.as_ref());
            } else {
                print_solve_pretty(&solution, polygon.as_ref());
            }
        }
        Commands::Rank { file, format } => {
            let rows = match read_csv_rows(&file) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error reading file: {}", e);
                    std::process::exit(1);
                }
            };

            let table = match RankingTable::from_rows(&rows) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Invalid ranking table: {}", e);
                    std::process::exit(1);
                }
            };

            let result = match table.rank() {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Ranking failed: {}", e);
                    std::process::exit(1);
                }
            };

            if format == "json" {
                match serde_json::to_string_pretty(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Error encoding result: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("Scores:");
                for scored in &result.scores {
                    println!("  {:20} {:10.4}", scored.name, scored.score);
                }
                println!();
                println!("Best alternative: {}", result.best_alternative().name);
            }
        }
    }
}

/// Read all data rows from a CSV file, skipping the header row.
///
/// Rows are kept as raw strings; the table layer owns numeric parsing and
/// shape validation, so ragged rows pass through here.
fn read_csv_rows(path: &PathBuf) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

fn print_solve_pretty(solution: &Solution, polygon: Option<&FeasiblePolygon>) {
    println!("Status: OPTIMAL");
    println!("  x1        = {:.4}", solution.x1);
    println!("  x2        = {:.4}", solution.x2);
    println!("  objective = {:.4}", solution.objective_value);

    if let Some(polygon) = polygon {
        println!();
        println!("Feasible region ({} vertices, counter-clockwise):", polygon.num_vertices());
        for vertex in polygon.vertices() {
            println!("  ({:.4}, {:.4})", vertex.x1, vertex.x2);
        }
    }
}

fn print_solve_json(solution: &Solution, polygon: Option<&FeasiblePolygon>) {
    let payload = serde_json::json!({
        "solution": solution,
        "region": polygon.map(|p| p.vertices()),
    });
    match serde_json::to_string_pretty(&payload) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Error encoding result: {}", e);
            std::process::exit(1);
        }
    }
}
