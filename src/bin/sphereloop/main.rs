//! Sphereloop CLI - icosphere refinement command-line tool.
//!
//! Usage: sphereloop <COMMAND> [OPTIONS]
//!
//! Run `sphereloop --help` for available commands.

use std::time::Instant;

use clap::{Parser, Subcommand};

use sphereloop::algo::Progress;
use sphereloop::mesh::EdgeTopology;
use sphereloop::metrics::{face_area_range, mesh_metrics, surface_area};
use sphereloop::pipeline::{refine_with_progress, RefineOptions};

#[derive(Parser)]
#[command(name = "sphereloop")]
#[command(author, version, about = "Sphere approximation by Loop subdivision", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refine the icosahedron and print per-level statistics
    Refine {
        /// Number of subdivision levels
        #[arg(short, long, default_value = "4", allow_hyphen_values = true)]
        levels: i64,

        /// Re-project every level onto the unit sphere
        #[arg(short, long)]
        project: bool,

        /// Target radius for the error columns
        #[arg(short, long, default_value = "1.0")]
        target_radius: f64,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },

    /// Display detailed information about the final level
    Info {
        /// Number of subdivision levels
        #[arg(short, long, default_value = "4", allow_hyphen_values = true)]
        levels: i64,

        /// Re-project every level onto the unit sphere
        #[arg(short, long)]
        project: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Refine {
            levels,
            project,
            target_radius,
            sequential,
        } => {
            cmd_refine(levels, project, target_radius, sequential)?;
        }

        Commands::Info { levels, project } => {
            cmd_info(levels, project)?;
        }
    }

    Ok(())
}

/// Create a progress reporter that prints one line per completed level.
fn create_progress() -> Progress {
    Progress::new(|current, total, message| {
        if current < total {
            eprintln!("{}: level {} -> {}...", message, current, current + 1);
        }
    })
}

fn cmd_refine(
    levels: i64,
    project: bool,
    target_radius: f64,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = RefineOptions::from_config(levels, project)?.with_parallel(!sequential);
    let mode = if sequential { "sequential" } else { "parallel" };

    println!(
        "Refining icosahedron ({} levels, projection {}, {})...",
        options.levels,
        if project { "on" } else { "off" },
        mode
    );

    let start = Instant::now();
    let meshes = refine_with_progress(&options, &create_progress())?;
    let elapsed = start.elapsed();

    println!();
    println!(
        "{:<6} | {:>8} | {:>8} | {:>12} | {:>12}",
        "Level", "Vertices", "Faces", "Mean error", "Std dev"
    );
    println!("{}", "-".repeat(60));
    for (level, mesh) in meshes.iter().enumerate() {
        let m = mesh_metrics(mesh, target_radius);
        println!(
            "{:<6} | {:>8} | {:>8} | {:>12.6} | {:>12.6}",
            level, m.num_vertices, m.num_faces, m.radius_error, m.radius_std_dev
        );
    }
    println!();
    println!("Done in {:.2?}", elapsed);

    Ok(())
}

fn cmd_info(levels: i64, project: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = RefineOptions::from_config(levels, project)?;
    let meshes = refine_with_progress(&options, &Progress::none())?;
    let mesh = meshes.last().expect("pipeline returns at least one level");

    let topology = EdgeTopology::extract(mesh)?;
    let metrics = mesh_metrics(mesh, 1.0);
    let (min_area, max_area) = face_area_range(mesh);

    println!("Level: {}", options.levels);
    println!("Vertices: {}", mesh.num_vertices());
    println!("Faces: {}", mesh.num_faces());
    println!("Edges: {}", topology.num_edges());
    println!(
        "Topology: {}",
        if topology.is_closed() { "closed" } else { "open" }
    );
    println!("Surface area: {:.6}", surface_area(mesh));
    println!("Face area range: [{:.6}, {:.6}]", min_area, max_area);
    println!(
        "Radius: mean={:.6}, min={:.6}, max={:.6}",
        metrics.mean_radius, metrics.min_radius, metrics.max_radius
    );
    println!(
        "Radius error: mean={:.6}, std dev={:.6}",
        metrics.radius_error, metrics.radius_std_dev
    );

    Ok(())
}
