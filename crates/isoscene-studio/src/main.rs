mod config;

use anyhow::{Context, Result};
use isoscene_engine::coords::{Point2, Point3};
use isoscene_engine::logging::{init_logging, LoggingConfig};
use isoscene_engine::paint::Color;
use isoscene_engine::projection::Projection;
use isoscene_engine::render::{DrawList, ViewportCamera};
use isoscene_engine::scene::{SceneConfig, SceneGraph};
use isoscene_engine::world::{Block, EntityId, SpriteSize};

use config::StudioConfig;

const VIEWPORT: (u32, u32) = (1280, 720);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env().context("invalid studio configuration")?;
    log::info!(
        "isoscene studio: {:?} projection, {}×{} floor, {} frames",
        config.projection,
        config.grid,
        config.grid,
        config.frames,
    );

    let summary = run(&config)?;
    log::info!(
        "done: {} frames, {} sprites drawn, {} levels, final order {:?}",
        summary.frames,
        summary.drawn,
        summary.levels,
        summary.final_order.iter().map(|id| id.0).collect::<Vec<_>>(),
    );
    Ok(())
}

/// Tile sprite size whose physical footprint is one floor cell.
fn tile_sprite(projection: Projection) -> SpriteSize {
    match projection {
        Projection::TrueIsometric => SpriteSize::new(125, 169),
        Projection::TwoByOneIsometric => SpriteSize::new(322, 270),
    }
}

#[derive(Debug)]
struct Summary {
    frames: u32,
    drawn: usize,
    levels: usize,
    final_order: Vec<EntityId>,
}

/// A floor of blocks, one raised step at the back, and an actor that walks a
/// lane across the floor and hops between the two bands above it.
fn run(config: &StudioConfig) -> Result<Summary> {
    let projection = config.projection;
    let tile = tile_sprite(projection);
    let dims = projection.physical_dimensions(tile.width, tile.height);
    let (w, d, h) = (dims.width, dims.depth, dims.height);

    let mut scene = SceneGraph::new(SceneConfig::default().projection(projection));
    let mut next_id = 0u32;
    let mut spawn = |scene: &mut SceneGraph, min: Point3, sprite: SpriteSize| {
        let dims = projection.physical_dimensions(sprite.width, sprite.height);
        let block = Block::new(EntityId(next_id), min, dims, sprite);
        next_id += 1;
        scene.insert_entity(&block);
        block
    };

    for y in 0..config.grid {
        for x in 0..config.grid {
            spawn(&mut scene, Point3::new(x as f64 * w, y as f64 * d, 0.0), tile);
        }
    }
    let last = (config.grid - 1) as f64;
    spawn(&mut scene, Point3::new(last * w, 0.0, h), tile);

    let half = SpriteSize::new(tile.width / 2, tile.height / 2);
    let lane = d * 1.25;
    let mut actor = spawn(&mut scene, Point3::new(0.0, lane, h), half);

    let steps_per_lap = config.grid * 4;
    let mut camera = ViewportCamera::new(VIEWPORT.0, VIEWPORT.1);
    let centre = Point2::new((VIEWPORT.0 / 2) as i32, (VIEWPORT.1 / 2) as i32);
    let mut list = DrawList::new();
    let mut drawn = 0;

    for frame in 0..config.frames {
        let step = frame % steps_per_lap;
        let band = 1 + (frame / steps_per_lap) % 2;
        actor.move_to(Point3::new(step as f64 * w / 4.0, lane, band as f64 * h));
        scene.update_entity(&actor);

        camera.look_at(actor.bounds.centre(), projection);
        list.clear();
        let frame_drawn = scene.render(&camera, false, &mut list);
        scene.push_outline(actor.id, &camera, Color::OUTLINE_TOP, &mut list);
        drawn += frame_drawn;

        scene
            .verify()
            .with_context(|| format!("scene invariants broken at frame {frame}"))?;

        let picked = scene.entity_at(centre, &camera, |_, _| true);
        log::debug!(
            "frame {frame}: {frame_drawn} sprites, actor in level {:?}, picked {:?}",
            scene.level_of(actor.id).map(|l| l.index()),
            picked.map(|id| id.0),
        );
    }

    Ok(Summary {
        frames: config.frames,
        drawn,
        levels: scene.levels().len(),
        final_order: scene.paint_order().collect(),
    })
}
