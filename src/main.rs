//! Savings Engine CLI
//!
//! Command-line interface for running savings projections, what-if sweeps,
//! goal tracking, and promo code generation

use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use uuid::Uuid;

use savings_engine::coupon::Coupon;
use savings_engine::display::{format_usd, format_usd_whole, table_rows};
use savings_engine::goals::{Goal, GoalBook, GoalIcon, JsonGoalStore};
use savings_engine::params::SimulationParameters;
use savings_engine::projection::compute_projection;
use savings_engine::scenario::ScenarioRunner;

#[derive(Parser)]
#[command(name = "savings_engine", version, about = "Savings growth projections and goal tracking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a projection and print the per-year table
    Project {
        /// Monthly contribution in dollars
        #[arg(long, default_value_t = 200.0)]
        contribution: f64,

        /// Horizon in years
        #[arg(long, default_value_t = 10)]
        years: u32,

        /// Annual interest rate in percent
        #[arg(long, default_value_t = 5.0)]
        rate: f64,

        /// Also write the yearly series to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Project the same contribution and horizon across several rates
    Sweep {
        #[arg(long, default_value_t = 200.0)]
        contribution: f64,

        #[arg(long, default_value_t = 10)]
        years: u32,

        /// Comma-separated annual rates in percent
        #[arg(long, value_delimiter = ',', default_value = "0,3,5,7,10,12")]
        rates: Vec<f64>,
    },

    /// Manage the saved goal list
    Goals {
        /// Directory holding goals.json (defaults to the platform data dir)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        #[command(subcommand)]
        action: GoalsAction,
    },

    /// Issue a limited-time promo code
    Coupon,
}

#[derive(Subcommand)]
enum GoalsAction {
    /// Add a new goal
    Add {
        #[arg(long)]
        name: String,

        /// Target amount in dollars
        #[arg(long)]
        target: f64,

        /// Amount already saved
        #[arg(long, default_value_t = 0.0)]
        current: f64,

        /// Optional target date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Optional icon (savings, home, car, vacation, education, gift, health, retirement)
        #[arg(long)]
        icon: Option<String>,
    },

    /// List all goals with progress
    List,

    /// Record progress on a goal
    Update {
        #[arg(long)]
        id: Uuid,

        /// New saved amount
        #[arg(long)]
        current: f64,
    },

    /// Delete a goal
    Remove {
        #[arg(long)]
        id: Uuid,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project {
            contribution,
            years,
            rate,
            csv,
        } => run_project(contribution, years, rate, csv),
        Command::Sweep {
            contribution,
            years,
            rates,
        } => run_sweep(contribution, years, &rates),
        Command::Goals { data_dir, action } => run_goals(data_dir, action),
        Command::Coupon => run_coupon(),
    }
}

fn run_project(
    contribution: f64,
    years: u32,
    rate: f64,
    csv: Option<PathBuf>,
) -> anyhow::Result<()> {
    let params = SimulationParameters::new(contribution, years, rate);
    let result = compute_projection(&params)?;
    let rows = table_rows(&result, &params);

    println!(
        "Projecting {}/month for {} years at {}%\n",
        format_usd(params.monthly_contribution),
        params.years,
        params.annual_rate_pct
    );

    println!("{:>5} {:>16} {:>16}", "Year", "Balance", "Interest");
    println!("{}", "-".repeat(40));
    for row in &rows {
        println!(
            "{:>5} {:>16} {:>16}",
            row.year,
            format_usd_whole(row.balance),
            format_usd_whole(row.interest_earned),
        );
    }

    println!("\nSummary:");
    println!("  Total Savings:      {}", format_usd_whole(result.final_balance));
    println!("  Your Contributions: {}", format_usd(result.total_contributions));
    println!("  Interest Earned:    {}", format_usd_whole(result.total_interest_earned));

    if let Some(path) = csv {
        write_series_csv(&path, &rows)?;
        println!("\nYearly series written to: {}", path.display());
    }

    Ok(())
}

fn write_series_csv(
    path: &std::path::Path,
    rows: &[savings_engine::display::TableRow],
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["Year", "Balance", "InterestEarned"])?;
    for row in rows {
        writer.write_record([
            row.year.to_string(),
            format!("{:.2}", row.balance),
            format!("{:.2}", row.interest_earned),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn run_sweep(contribution: f64, years: u32, rates: &[f64]) -> anyhow::Result<()> {
    let runner =
        ScenarioRunner::with_base(SimulationParameters::new(contribution, years, 0.0));
    let sweep = runner.rate_sweep(rates)?;

    println!(
        "Sweeping {}/month over {} years\n",
        format_usd(contribution),
        years
    );
    println!("{:>7} {:>16} {:>16}", "Rate", "Balance", "Interest");
    println!("{}", "-".repeat(42));
    for (rate, result) in &sweep {
        println!(
            "{:>6}% {:>16} {:>16}",
            rate,
            format_usd_whole(result.final_balance),
            format_usd_whole(result.total_interest_earned),
        );
    }

    Ok(())
}

fn run_goals(data_dir: Option<PathBuf>, action: GoalsAction) -> anyhow::Result<()> {
    let store = match data_dir {
        Some(dir) => JsonGoalStore::new(dir.join("goals.json")),
        None => JsonGoalStore::open_default(),
    };
    let mut book = GoalBook::open(store)?;

    match action {
        GoalsAction::Add {
            name,
            target,
            current,
            date,
            icon,
        } => {
            let icon = match icon {
                Some(raw) => Some(
                    GoalIcon::parse(&raw)
                        .with_context(|| format!("unknown icon `{raw}`"))?,
                ),
                None => None,
            };
            let mut goal = Goal::new(name, target, current);
            goal.target_date = date;
            goal.icon = icon;
            let added = book.add(goal)?;
            println!("Added goal {} ({})", added.name, added.id);
        }
        GoalsAction::List => {
            if book.goals().is_empty() {
                println!("No goals yet.");
                return Ok(());
            }
            let today = Utc::now().date_naive();
            println!(
                "{:<38} {:<20} {:>10} {:>22} {:>10}",
                "Id", "Name", "Progress", "Saved", "Days Left"
            );
            println!("{}", "-".repeat(104));
            for goal in book.goals() {
                let days = goal
                    .days_left(today)
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{:<38} {:<20} {:>9.0}% {:>10} of {:>8} {:>10}",
                    goal.id.to_string(),
                    goal.name,
                    goal.progress_pct(),
                    format_usd(goal.current_amount),
                    format_usd(goal.target_amount),
                    days,
                );
            }
        }
        GoalsAction::Update { id, current } => {
            let mut goal = book
                .get(id)
                .cloned()
                .with_context(|| format!("no goal with id {id}"))?;
            goal.current_amount = current;
            book.update(goal)?;
            println!("Updated goal {id}");
        }
        GoalsAction::Remove { id } => {
            if book.remove(id)? {
                println!("Removed goal {id}");
            } else {
                println!("No goal with id {id}");
            }
        }
    }

    Ok(())
}

fn run_coupon() -> anyhow::Result<()> {
    let mut rng = SmallRng::from_entropy();
    let now = Utc::now();
    let coupon = Coupon::issue(&mut rng, now);

    println!("Your exclusive coupon code: {}", coupon.code);
    println!("Expires in: {}", coupon.countdown(now));

    Ok(())
}
