use bsp_dungeon::pathfinding::reachable;
use bsp_dungeon::render::{instantiate_tiles, AsciiRenderer, TilePalette};
use bsp_dungeon::{DungeonConfig, DungeonGenerator, TileType};
use clap::Parser;
use log::{debug, info, warn};
use rand::Rng;
use std::path::PathBuf;

/// Generate a BSP dungeon and print it as text
#[derive(Parser, Debug)]
#[command(name = "bsp-dungeon", version, long_about = None)]
struct Args {
    /// JSON file with generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed (drawn from entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fixed side length instead of a random one
    #[arg(long)]
    size: Option<u32>,

    /// Minimum partition side length
    #[arg(long)]
    min_room_size: Option<i32>,

    /// Partitions larger than this always split
    #[arg(long)]
    max_room_size: Option<i32>,

    /// Small partitions split when a uniform draw exceeds this
    #[arg(long)]
    split_threshold: Option<f32>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            DungeonConfig::load(path)?
        }
        None => DungeonConfig::default(),
    };
    if let Some(size) = args.size {
        config = config.with_fixed_size(size);
    }
    if let Some(min) = args.min_room_size {
        config.min_room_size = min;
    }
    if let Some(max) = args.max_room_size {
        config.max_room_size = max;
    }
    if let Some(threshold) = args.split_threshold {
        config.split_threshold = threshold;
    }
    debug!("{:?}", config);

    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(|| rand::thread_rng().gen());
    info!("Seed: {}", seed);

    let dungeon = DungeonGenerator::generate_seeded(&config, seed)?;

    let mut ascii = AsciiRenderer::new(dungeon.grid.size());
    let report = instantiate_tiles(&dungeon.grid, &TilePalette::ascii(), &mut ascii);
    print!("{ascii}");

    info!("Rooms: {}", dungeon.rooms.len());
    for spawn in &dungeon.spawns {
        info!("  {:?} at ({}, {})", spawn.tile, spawn.x, spawn.y);
    }

    let find = |tile: TileType| dungeon.spawns.iter().find(|s| s.tile == tile);
    if let (Some(player), Some(end)) = (find(TileType::Player), find(TileType::End)) {
        let open = reachable(&dungeon.grid, (player.x, player.y));
        if open.contains(&(end.x, end.y)) {
            info!("Exit reachable; {} open cells connected to the start", open.len());
        } else {
            warn!("Exit is not reachable from the player start");
        }
    }
    if !report.failures.is_empty() {
        warn!("{} cells had no glyph", report.failures.len());
    }

    Ok(())
}
