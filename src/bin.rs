use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use heap_scheduler::{PriorityScheduler, Task};

/// Queue jobs by priority and run them highest first.
#[derive(Parser, Debug)]
#[command(name = "job-example", version, about)]
struct Cli {
    /// Job to queue, as `name=priority`. Repeatable.
    #[arg(long = "job", value_name = "NAME=PRIORITY")]
    jobs: Vec<String>,

    /// Queue the jobs in random order.
    #[arg(long, env = "JOB_SHUFFLE")]
    shuffle: bool,

    /// Seed for the shuffle.
    #[arg(long, env = "JOB_SEED")]
    seed: Option<u64>,
}

fn default_jobs() -> Vec<Task> {
    vec![
        Task::new("This is job a", 5),
        Task::new("This is job b", 2),
        Task::new("This is job c", 9),
        Task::new("This is job d", 8),
        Task::new("This is job e", 1),
    ]
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut jobs = if cli.jobs.is_empty() {
        default_jobs()
    } else {
        match cli.jobs.iter().map(|s| s.parse()).collect::<Result<Vec<Task>, _>>() {
            Ok(jobs) => jobs,
            Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
        }
    };
    if cli.shuffle {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        jobs.shuffle(&mut rng);
    }

    let mut scheduler = PriorityScheduler::new();
    for job in jobs {
        scheduler.enqueue(job);
    }
    let ran = scheduler.run_all();
    info!(ran, "queue drained");
}
