use anyhow::{Context, Result};
use log::{debug, info};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use randfiles::config::Config;
use randfiles::sequence::run;
use std::{env, io};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "randfiles",
    about = "Write files of random letters, then print two random integers and their product"
)]
struct Opt {
    /// Increase log verbosity (-v info, -vv debug)
    #[structopt(short, parse(from_occurrences))]
    verbose: u8,
    /// Seed the random generator, to reproduce a run
    #[structopt(long)]
    seed: Option<u64>,
}

fn init_logger(verbose: u8) {
    if env::var_os("RUST_LOG").is_none() {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        env::set_var("RUST_LOG", format!("randfiles={}", level));
    }
    env_logger::init();
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logger(opt.verbose);

    let conf = Config::default();
    debug!("config: {}", serde_json::to_string(&conf)?);

    let mut rng: Box<dyn RngCore> = match opt.seed {
        Some(seed) => {
            info!("seeding generator with {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let dir = env::current_dir().with_context(|| "Couldn't read the current directory")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    run(&mut rng, &conf, &dir, &mut handle)
        .with_context(|| format!("writing random files into {:?}", dir))?;

    Ok(())
}
