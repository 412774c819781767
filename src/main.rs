use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use engine::prelude::*;
use tracing_subscriber::filter::LevelFilter;

mod report;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, value_name = "PATH", help = "Road scenario file in IDM format")]
    scenario: Option<PathBuf>,

    #[arg(long, value_parser = |e: &str| Ok::<Logos, &str>(Logos::new(e)), help = "Traffic generation seed")]
    seed: Option<Logos>,

    #[arg(long, default_value_t = 12, help = "Number of generated vehicles")]
    vehicles: usize,

    #[arg(long, value_name = "DEGREES", help = "Override observer field of view")]
    fov: Option<f64>,

    #[arg(long, default_value_t = 0, help = "Simulation ticks to run")]
    ticks: u32,

    #[arg(long, value_name = "INDEX", help = "Show the percentage label of a vehicle")]
    select: Option<usize>,

    #[arg(long, help = "Start with traffic paused")]
    paused: bool,

    #[arg(long, help = "Print the display list as JSON")]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More verbose logging")]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let road = if let Some(path) = &args.scenario {
        Road::load(path)?
    } else {
        let seed = args
            .seed
            .clone()
            .unwrap_or_else(|| Logos::sample(&mut rand::thread_rng(), 10));
        log::info!("seed: {seed}");
        traffic::generate(
            &mut srng(&seed),
            ROAD_WIDTH,
            ROAD_LENGTH,
            args.vehicles,
        )?
    };

    let mut rt = Runtime::new(road)?;
    if let Some(fov) = args.fov {
        rt.set_fov(fov).context("bad --fov")?;
    }
    rt.select(args.select);
    if args.paused {
        rt.toggle_pause();
    }

    for _ in 0..args.ticks {
        rt.tick();
    }
    log::info!("ran until {}", rt.now());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rt.frame())?);
    } else {
        print!("{}", report::Report::new(&rt));
    }

    Ok(())
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Also picks up records from the log crate used by the libraries.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
