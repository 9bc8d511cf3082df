//! plan-report: calorie targets and safety advisories for a diet plan file
//!
//! Usage:
//!   plan-report <plan.json>        # print metrics and advisories, exit 1 if any fires
//!   plan-report <plan.json> -q     # quiet: exit 0 if no advisory fires, 1 otherwise
//!
//! The file holds a configure request (profile, activity, goal, optional intake).
//! Missing fields fall back to the form defaults; out-of-range numbers are clamped.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use diet_engine::types::AdvisoryLevel;
use diet_engine::{Config, PlanRequest, PlanSnapshot, Session};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plan-report", about = "Print calorie targets for a diet plan file")]
struct Args {
    /// Plan request JSON file
    file: PathBuf,

    /// Only set the exit code (0 = no advisories, 1 = advisories)
    #[arg(short, long)]
    quiet: bool,

    /// Print the daily tracking table
    #[arg(long)]
    days: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn load_snapshot(path: &Path, config: Config) -> Result<PlanSnapshot, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let request: PlanRequest = serde_json::from_str(&contents)?;
    Ok(Session::new(config).configure(&request)?)
}

/// 0 = no advisories, 1 = at least one advisory fired.
fn exit_code(snap: &PlanSnapshot) -> i32 {
    if snap.advisories.is_empty() {
        0
    } else {
        1
    }
}

/// Compute, optionally print, and return the process exit status
/// (2 when the file cannot be read, parsed or planned).
fn run(args: &Args, config: Config) -> i32 {
    let snap = match load_snapshot(&args.file, config) {
        Ok(s) => s,
        Err(e) => {
            error!(path = %args.file.display(), error = %e, "cannot build plan");
            return 2;
        }
    };
    debug!(plan_id = %snap.plan_id, advisories = snap.advisories.len(), "computed plan");

    if !args.quiet {
        print_report(&snap, args.days);
    }
    exit_code(&snap)
}

fn print_report(snap: &PlanSnapshot, days: bool) {
    let p = &snap.profile;
    let g = &snap.goal;
    println!(
        "Profile: {}, {} y, {} cm, {} kg",
        p.gender.as_str(),
        p.age,
        p.height_cm,
        p.weight_kg
    );
    println!("Activity: {} (x{})", snap.activity.label, snap.activity.factor);
    println!("Goal: {} kg in {} days", g.goal_weight_kg, g.diet_days);
    println!();
    println!("BMR                     {} kcal/day", snap.display.bmr);
    println!("TDEE (Maintenance)      {} kcal/day", snap.display.tdee);
    println!("Required Daily Deficit  {} kcal/day", snap.display.daily_deficit);
    println!("Target Calories         {} kcal/day", snap.display.target_calories);

    for a in &snap.advisories {
        let tag = match a.level {
            AdvisoryLevel::Warning => "warning",
            AdvisoryLevel::Error => "error",
        };
        println!("{}: {}", tag, a.message);
    }

    if days {
        println!();
        for point in &snap.chart {
            let label = match point.date {
                Some(d) => d.format("%Y-%m-%d").to_string(),
                None => format!("Day {}", point.day),
            };
            println!(
                "{:<12} {:>6} / {:.0}",
                label, point.calories_eaten, point.target_calories
            );
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_writer(std::io::stderr)
        .init();

    process::exit(run(&args, Config::from_env()));
}
