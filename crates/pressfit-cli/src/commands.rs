//! CLI command implementations.

use std::path::Path;

use pressfit_assets::{load_noff, load_sdf};
use pressfit_contact::{ContactConfig, ContactSolver};
use pressfit_field::sampler;
use pressfit_math::{Quat, Vec3};
use pressfit_sim::{
    CollisionLoop, CollisionWorker, LoopConfig, RigidBodyState, TickOutcome, WorkerState,
};
use pressfit_types::QueryStatus;

/// Validate assets without running anything.
pub fn validate(sdf_path: &str, points_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pressfit Asset Validation");
    println!("─────────────────────────");

    let grid = load_sdf(Path::new(sdf_path))?;
    println!("SDF:         {sdf_path}");
    println!("  bbox min:  {:?}", grid.bbox_min);
    println!("  bbox max:  {:?}", grid.bbox_max);
    println!("  cell size: {}", grid.cell_size);
    println!("  cells:     {:?} = {}", grid.resolution, grid.cell_count());
    println!("  half diag: {:.4}", grid.half_diagonal());

    let inside = grid.distances.iter().filter(|&&d| d < 0.0).count();
    println!("  inside:    {inside} voxels ({:.1}%)", 100.0 * inside as f64 / grid.cell_count() as f64);

    if let Some(path) = points_path {
        let cloud = load_noff(Path::new(path))?;
        let with_normals = cloud.points.iter().filter(|p| p.has_normal()).count();
        println!();
        println!("Points:      {path}");
        println!("  samples:   {}", cloud.len());
        println!("  normals:   {with_normals}");
    }

    println!();
    println!("OK");
    Ok(())
}

/// Query the distance field at one point.
pub fn probe(sdf_path: &str, point_arg: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let grid = load_sdf(Path::new(sdf_path))?;
    let point = parse_point(point_arg)?;

    let index = sampler::cell_index(point, &grid);
    let distance = sampler::distance_at(point, &grid);
    let gradient = sampler::gradient_normal(point, &grid);

    if json {
        let value = serde_json::json!({
            "point": point.to_array(),
            "index": index,
            "distance": distance,
            "gradient": gradient.map(|g| g.to_array()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Point:    {point}");
    match (index, distance) {
        (Some(idx), Some(d)) => {
            println!("Index:    {idx}");
            println!("Distance: {d}");
            match gradient {
                Some(g) => println!("Gradient: {g}"),
                None => println!("Gradient: unavailable (edge voxel or flat field)"),
            }
        }
        _ => println!("Out of bounds"),
    }
    Ok(())
}

/// Headless scripted run: lower the moveable body onto the static one and
/// let the loop + worker pipeline correct it.
pub fn run(
    sdf_path: &str,
    points_path: &str,
    frames: u32,
    fps: f32,
    correction: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = load_sdf(Path::new(sdf_path))?;
    let cloud = load_noff(Path::new(points_path))?;

    let solver = ContactSolver::new(ContactConfig::default())?;
    let worker = CollisionWorker::spawn(WorkerState::new(grid, cloud, solver, 0.0)?)?;

    let mut looper = CollisionLoop::new(LoopConfig {
        correction_enabled: correction,
        ..Default::default()
    })?;

    let statik = RigidBodyState::default();
    let mut moving = RigidBodyState::new(Vec3::new(0.0, 2.0, 0.0), Quat::IDENTITY);

    // Scripted controller input: a slow, steady descent.
    let descent_per_frame = Vec3::new(0.0, -2.0 / frames as f32, 0.0);

    let mut collisions = 0u32;
    let mut timeouts = 0u32;
    for _ in 0..frames {
        moving.position += descent_per_frame;
        match looper.tick(fps, &mut moving, &statik, &worker)? {
            TickOutcome::Resolved(QueryStatus::Collision) => collisions += 1,
            TickOutcome::TimedOut => timeouts += 1,
            _ => {}
        }
        std::thread::sleep(std::time::Duration::from_secs_f32(1.0 / fps));
    }

    println!("Pressfit Headless Run");
    println!("─────────────────────");
    println!("Frames:        {frames}");
    println!("Corrections:   {collisions}");
    println!("Timeouts:      {timeouts}");
    println!("Final pos:     {}", moving.position);
    println!("Final orient:  {} (len {:.6})", moving.orientation, moving.orientation.length());
    Ok(())
}

fn parse_point(arg: &str) -> Result<Vec3, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = arg.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("Expected x,y,z — got '{arg}'").into());
    }
    Ok(Vec3::new(
        parts[0].trim().parse()?,
        parts[1].trim().parse()?,
        parts[2].trim().parse()?,
    ))
}
