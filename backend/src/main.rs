//! Football Head CLI - League statistics from a season CSV
//!
//! ```bash
//! football-head serve                  # Start HTTP server (port 8080)
//! football-head teams                  # List teams
//! football-head table                  # Print the league table
//! football-head team Arsenal           # One team's record as JSON
//! football-head parse season.csv       # Validate a CSV and dump matches as JSON
//! ```
//!
//! The data file and port come from `FOOTBALL_HEAD_DATA` / `FOOTBALL_HEAD_PORT`
//! (a `.env` file is honoured) unless given on the command line.

use clap::{Parser, Subcommand};
use football_head::api::logs::{log_error, log_info};
use football_head::error::ServerResult;
use football_head::{load_matches, Config, StatsService, TeamRecord};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "football-head")]
#[command(about = "League statistics API over a season of football matches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the season and start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Season CSV file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// List every team in the season
    Teams {
        /// Season CSV file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Print the ranked league table
    Table {
        /// Season CSV file
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Print one team's record as JSON
    Team {
        /// Exact team name, e.g. "Man City"
        name: String,

        /// Season CSV file
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Load and validate a CSV, then output its matches as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match Config::from_env() {
        Ok(config) => run(cli.command, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: Config) -> ServerResult<()> {
    match command {
        Commands::Serve { port, data } => cmd_serve(config.with_overrides(data, port)).await,
        Commands::Teams { data } => cmd_teams(&config.with_overrides(data, None)),
        Commands::Table { data, json } => cmd_table(&config.with_overrides(data, None), json),
        Commands::Team { name, data } => cmd_team(&config.with_overrides(data, None), &name),
        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),
    }
}

fn load_service(config: &Config) -> ServerResult<StatsService> {
    log_info(format!("Loading match data from {}", config.data_path.display()));
    let matches = load_matches(&config.data_path)?;
    Ok(StatsService::new(matches))
}

async fn cmd_serve(config: Config) -> ServerResult<()> {
    let service = load_service(&config)?;
    football_head::server::start_server(service, config.port).await
}

fn cmd_teams(config: &Config) -> ServerResult<()> {
    let service = load_service(config)?;
    for team in service.list_teams() {
        println!("{}", team);
    }
    Ok(())
}

fn cmd_table(config: &Config, json: bool) -> ServerResult<()> {
    let service = load_service(config)?;
    let table = service.compute_league_table();

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        if let Some(season) = service.season() {
            println!("Season {}\n", season);
        }
        print!("{}", format_table(&table));
    }
    Ok(())
}

fn cmd_team(config: &Config, name: &str) -> ServerResult<()> {
    let service = load_service(config)?;
    let record = service.get_team_record(name)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> ServerResult<()> {
    let matches = load_matches(input)?;
    let json = serde_json::to_string_pretty(&matches)?;
    write_output(&json, output)
}

fn format_table(table: &[TeamRecord]) -> String {
    // Padding counts chars, so the width must too
    let width = table
        .iter()
        .map(|r| r.team.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let mut out = format!(
        "{:>3}  {:<width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
        "Pos",
        "Team",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Pts",
        width = width
    );
    for (i, r) in table.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}\n",
            i + 1,
            r.team,
            r.played,
            r.wins,
            r.draws,
            r.losses,
            r.goals_for,
            r.goals_against,
            r.goal_diff,
            r.points,
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_aligns_accented_names() {
        let mut atletico = TeamRecord::new("Atlético Madrid");
        atletico.points = 3;
        let table = vec![atletico, TeamRecord::new("Real Madrid")];

        let text = format_table(&table);
        let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}

fn write_output(content: &str, path: Option<&Path>) -> ServerResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log_info(format!("Output written to: {}", p.display()));
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
