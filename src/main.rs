mod simulation;

#[cfg(feature = "ui")]
mod ui;

use anyhow::Result;
use clap::Parser;

use simulation::{CityConfig, CityWorld};

/// Frames per simulated second of reporting in headless mode
const FRAMES_PER_SECOND: u64 = 60;

#[derive(Parser)]
#[command(name = "city_drive")]
#[command(about = "Procedural city scene with looping traffic and optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Side length of one district's ground in world units
    #[arg(long, default_value = "100.0")]
    grid_size: f32,

    /// Number of vehicles in the city district
    #[arg(long, default_value = "8")]
    vehicles: usize,

    /// Number of vehicles in the suburb district
    #[arg(long, default_value = "4")]
    suburb_vehicles: usize,

    /// Seed for reproducible building placement and camera selection
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(&cli)?;
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        run_headless(&cli)?;
    }

    Ok(())
}

/// Run the scene in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    env_logger::init();

    println!("Running city scene in headless mode...");
    println!("Frames: {} ({} per reported second)", cli.frames, FRAMES_PER_SECOND);
    println!();

    let config = CityConfig {
        grid_size: cli.grid_size,
        city_vehicles: cli.vehicles,
        suburb_vehicles: cli.suburb_vehicles,
        seed: cli.seed,
    };
    let mut world = CityWorld::create_city(&config)?;

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    let mut frame = 0;
    while frame < cli.frames {
        let frames_to_run = FRAMES_PER_SECOND.min(cli.frames - frame);

        for _ in 0..frames_to_run {
            frame += 1;
            world.tick();
        }

        println!(
            "--- After frame {} ({:.1}s at {} fps) ---",
            frame,
            frame as f32 / FRAMES_PER_SECOND as f32,
            FRAMES_PER_SECOND
        );
        world.print_summary();
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(cli: &Cli) -> Result<()> {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    let config = CityConfig {
        grid_size: cli.grid_size,
        city_vehicles: cli.vehicles,
        suburb_vehicles: cli.suburb_vehicles,
        seed: cli.seed,
    };
    let world = CityWorld::create_city(&config)?;

    println!("Starting City Drive UI...");
    println!();
    println!("Controls:");
    println!("  C           - Toggle overhead / car cam");
    println!("  V           - Follow a different vehicle");
    println!("  W/A/S/D     - Move camera (overhead)");
    println!("  Q/E         - Rotate camera around center (overhead)");
    println!("  Z/X         - Zoom in/out (overhead)");
    println!("  Click+Drag  - Look around (car cam)");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,city_drive=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "City Drive".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(ui::CityWorldResource(world))
        .add_plugins(ui::CityDrivePlugin)
        .run();

    Ok(())
}
