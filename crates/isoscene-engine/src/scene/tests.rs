//! Whole-scene scenarios: batch placement, level routing and repair across
//! frames.

use crate::coords::{Point3, Vec3};
use crate::projection::Projection;
use crate::render::{DrawList, ViewportCamera};
use crate::world::{Block, Dimensions, EntityId, SpriteSize};

use super::{SceneConfig, SceneGraph};

const W: f64 = 72.0;
const D: f64 = 72.0;
const H: f64 = 97.0;
const CUBE: Dimensions = Dimensions::new(W, D, H);
const SPRITE: SpriteSize = SpriteSize::new(322, 270);

fn block(id: u32, x: f64, y: f64, z: f64) -> Block {
    Block::new(EntityId(id), Point3::new(x, y, z), CUBE, SPRITE)
}

/// Unit-cell blocks at `(x, y, z)` grid positions, ids in slice order.
fn blocks(cells: &[(u32, u32, u32)]) -> Vec<Block> {
    cells
        .iter()
        .enumerate()
        .map(|(i, &(x, y, z))| block(i as u32, x as f64 * W, y as f64 * D, z as f64 * H))
        .collect()
}

/// 2×2×2 cube, x fastest then y then z.
fn cube() -> Vec<Block> {
    let mut cells = Vec::new();
    for z in 0..2 {
        for y in 0..2 {
            for x in 0..2 {
                cells.push((x, y, z));
            }
        }
    }
    blocks(&cells)
}

fn scene_of(blocks: &[Block], projection: Projection) -> SceneGraph {
    let mut scene = SceneGraph::with_projection(projection);
    for b in blocks {
        scene.insert_entity(b);
    }
    scene
}

fn frame(scene: &mut SceneGraph) -> usize {
    let mut cam = ViewportCamera::new(4000, 4000);
    cam.centre_on(crate::coords::Point2::zero());
    scene.render(&cam, false, &mut DrawList::new())
}

fn level_orders(scene: &SceneGraph) -> Vec<Vec<u32>> {
    scene
        .levels()
        .iter()
        .map(|l| l.paint_order().map(|id| id.0).collect())
        .collect()
}

// ── batch placement ───────────────────────────────────────────────────────

#[test]
fn square_paints_back_to_front_in_both_projections() {
    let square = blocks(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)]);
    for projection in [Projection::TwoByOneIsometric, Projection::TrueIsometric] {
        let mut scene = scene_of(&square, projection);
        frame(&mut scene);
        assert_eq!(level_orders(&scene), vec![vec![1, 3, 0, 2]], "{projection:?}");
    }
}

#[test]
fn cube_splits_into_two_levels() {
    let mut scene = scene_of(&cube(), Projection::TwoByOneIsometric);
    assert_eq!(frame(&mut scene), 8);

    assert_eq!(scene.levels().len(), 2);
    assert_eq!(level_orders(&scene), vec![vec![1, 3, 0, 2], vec![5, 7, 4, 6]]);
    assert_eq!(scene.levels()[1].min_z(), H);
    assert!(scene.verify().is_ok());
}

#[test]
fn placement_follows_base_height_not_registration() {
    // Upper block registered first still lands in the second level.
    let mut scene = scene_of(&[block(0, 0.0, 0.0, H), block(1, 0.0, 0.0, 0.0)], Projection::default());
    frame(&mut scene);
    assert_eq!(level_orders(&scene), vec![vec![1], vec![0]]);
}

#[test]
fn rendering_twice_is_idempotent() {
    let mut scene = scene_of(&cube(), Projection::TwoByOneIsometric);
    frame(&mut scene);
    let first = level_orders(&scene);
    frame(&mut scene);
    assert_eq!(level_orders(&scene), first);
}

#[test]
fn updating_unmoved_entities_keeps_the_order() {
    let cube = cube();
    let mut scene = scene_of(&cube, Projection::TwoByOneIsometric);
    frame(&mut scene);
    let first = level_orders(&scene);

    for b in &cube {
        scene.update_entity(b);
    }
    frame(&mut scene);

    assert_eq!(level_orders(&scene), first);
    assert!(scene.verify().is_ok());
}

#[test]
fn updates_before_the_first_frame_only_refresh() {
    let mut square = blocks(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)]);
    let mut scene = scene_of(&square, Projection::TwoByOneIsometric);

    square[0].move_to(Point3::new(0.0, 0.0, H));
    scene.update_entity(&square[0]);
    assert!(scene.levels().is_empty());

    frame(&mut scene);
    assert_eq!(level_orders(&scene), vec![vec![1, 3, 2], vec![0]]);
}

// ── level migration ───────────────────────────────────────────────────────

#[test]
fn moving_between_bands_migrates_levels() {
    let mut ents = blocks(&[
        (0, 0, 0),
        (1, 0, 0),
        (0, 1, 0),
        (0, 0, 1),
        (1, 0, 1),
        (0, 1, 1),
        (0, 0, 2),
    ]);
    let mut scene = scene_of(&ents, Projection::TwoByOneIsometric);
    frame(&mut scene);
    assert_eq!(level_orders(&scene), vec![vec![1, 0, 2], vec![4, 3, 5], vec![6]]);

    // Drop the top block into the middle band, still stacked on the column.
    ents[6].translate(Vec3::new(0.0, 0.0, -95.0));
    scene.update_entity(&ents[6]);
    frame(&mut scene);

    assert_eq!(level_orders(&scene), vec![vec![1, 0, 2], vec![4, 3, 6, 5], vec![]]);
    assert_eq!(scene.level_of(EntityId(6)).map(|l| l.index()), Some(1));
    assert!(scene.verify().is_ok());
}

#[test]
fn moving_below_every_band_opens_a_new_level() {
    let mut ents = blocks(&[(0, 0, 0), (1, 0, 0)]);
    let mut scene = scene_of(&ents, Projection::TwoByOneIsometric);
    frame(&mut scene);

    ents[1].translate(Vec3::new(0.0, 0.0, -H));
    scene.update_entity(&ents[1]);

    assert_eq!(level_orders(&scene), vec![vec![0], vec![1]]);
    assert_eq!(scene.levels()[1].min_z(), -H);
    assert!(scene.verify().is_ok());
}

#[test]
fn moving_within_a_band_reorders_in_place() {
    let mut row = blocks(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
    let mut scene = scene_of(&row, Projection::TwoByOneIsometric);
    frame(&mut scene);
    assert_eq!(level_orders(&scene), vec![vec![2, 1, 0]]);

    row[0].move_to(Point3::new(3.0 * W, 0.0, 0.0));
    scene.update_entity(&row[0]);

    assert_eq!(level_orders(&scene), vec![vec![0, 2, 1]]);
    assert_eq!(
        scene.levels()[0].edges(scene.nodes()),
        vec![(EntityId(0), EntityId(1)), (EntityId(0), EntityId(2)), (EntityId(2), EntityId(1))]
    );
}

// ── incremental vs batch ──────────────────────────────────────────────────

/// 3×3 floor of unit blocks with staggered base heights (all in one band).
fn terraced_floor() -> Vec<Block> {
    let mut out = Vec::new();
    for y in 0..3u32 {
        for x in 0..3u32 {
            let z = [0.0, 20.0, 40.0][((x + 2 * y) % 3) as usize];
            out.push(block(y * 3 + x, x as f64 * W, y as f64 * D, z));
        }
    }
    out
}

#[test]
fn edges_do_not_depend_on_insertion_order() {
    for projection in [Projection::TwoByOneIsometric, Projection::TrueIsometric] {
        let floor = terraced_floor();
        let mut batch = scene_of(&floor, projection);
        frame(&mut batch);
        assert_eq!(batch.levels().len(), 1);
        let expected = batch.levels()[0].edges(batch.nodes());
        assert!(!expected.is_empty());

        for perm in [[0, 1, 2, 3, 4, 5, 6, 7, 8], [8, 7, 6, 5, 4, 3, 2, 1, 0], [4, 0, 8, 2, 6, 1, 7, 3, 5]] {
            let mut scene = SceneGraph::with_projection(projection);
            frame(&mut scene);
            for i in perm {
                scene.insert_entity(&floor[i]);
            }

            assert_eq!(scene.levels().len(), 1, "{projection:?} {perm:?}");
            assert_eq!(scene.levels()[0].edges(scene.nodes()), expected, "{projection:?} {perm:?}");
            assert!(scene.verify().is_ok());
        }
    }
}

#[test]
fn late_insert_joins_the_existing_order() {
    let square = blocks(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)]);
    let mut scene = scene_of(&square[..3], Projection::TwoByOneIsometric);
    frame(&mut scene);

    scene.insert_entity(&square[3]);
    assert_eq!(level_orders(&scene), vec![vec![1, 3, 0, 2]]);
}

// ── lifecycle ─────────────────────────────────────────────────────────────

#[test]
fn removed_entities_leave_no_trace() {
    let mut scene = scene_of(&cube(), Projection::TwoByOneIsometric);
    frame(&mut scene);

    assert!(scene.remove_entity(EntityId(3)));
    assert!(!scene.remove_entity(EntityId(3)));

    assert_eq!(scene.len(), 7);
    assert!(scene.node(EntityId(3)).is_none());
    assert!(scene.levels()[0].edges(scene.nodes()).iter().all(|&(a, b)| a != EntityId(3) && b != EntityId(3)));
    assert_eq!(frame(&mut scene), 7);
    assert!(scene.verify().is_ok());
}

#[test]
fn rebuild_drops_empty_levels() {
    let mut ents = blocks(&[(0, 0, 0), (0, 0, 1)]);
    let mut scene = scene_of(&ents, Projection::TwoByOneIsometric);
    frame(&mut scene);

    ents[1].move_to(Point3::new(W, 0.0, 0.0));
    scene.update_entity(&ents[1]);
    assert_eq!(level_orders(&scene), vec![vec![1, 0], vec![]]);

    scene.rebuild();
    assert_eq!(level_orders(&scene), vec![vec![1, 0]]);
    assert!(scene.verify().is_ok());
}

#[test]
fn duplicate_insert_is_treated_as_a_move() {
    let mut square = blocks(&[(0, 0, 0), (1, 0, 0)]);
    let mut scene = scene_of(&square, Projection::TwoByOneIsometric);
    frame(&mut scene);

    square[0].move_to(Point3::new(2.0 * W, 0.0, 0.0));
    scene.insert_entity(&square[0]);

    assert_eq!(scene.len(), 2);
    assert_eq!(level_orders(&scene), vec![vec![0, 1]]);
}

#[test]
fn draw_order_is_queryable_by_id() {
    let scene = scene_of(&blocks(&[(0, 0, 0), (1, 0, 0)]), Projection::TwoByOneIsometric);
    assert_eq!(scene.draw_order(EntityId(1), EntityId(0)), Some(super::RenderOrder::Before));
    assert_eq!(scene.draw_order(EntityId(0), EntityId(1)), Some(super::RenderOrder::After));
    assert_eq!(scene.draw_order(EntityId(0), EntityId(9)), None);
}

#[test]
fn culling_toggle_is_carried_by_config() {
    let scene = SceneGraph::new(SceneConfig::default().cull_offscreen(false));
    assert!(!scene.config().cull_offscreen);
    assert_eq!(scene.projection(), Projection::TwoByOneIsometric);
}

#[test]
#[should_panic(expected = "was never inserted")]
fn updating_an_unknown_entity_panics() {
    let mut scene = SceneGraph::default();
    scene.update_entity(&block(0, 0.0, 0.0, 0.0));
}
