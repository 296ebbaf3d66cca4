#![allow(clippy::float_cmp)]

use super::*;
use crate::test_support::{DrawCall, RecordingSurface, TestImage};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn frames(names: &[&'static str]) -> Vec<TestImage> {
    names.iter().map(|n| TestImage::decoded(n)).collect()
}

// --- Sprite ---

#[test]
fn sprite_rejects_undecoded_image() {
    let result = Sprite::new(TestImage::undecoded("missing"));
    assert!(matches!(result, Err(Error::InvalidAsset)));
}

#[test]
fn sprite_defaults_to_tile_box() {
    let sprite = Sprite::new(TestImage::decoded("tree")).unwrap();
    assert_eq!(sprite.rect, Rect::new(0.0, 0.0, TILE_SIZE, TILE_SIZE));
    assert_eq!(sprite.zoom, 1.0);
}

#[test]
fn sprite_draws_at_its_box() {
    let mut sprite = Sprite::new(TestImage::decoded("tree")).unwrap();
    sprite.rect = Rect::new(10.0, 20.0, 16.0, 16.0);

    let mut surface = RecordingSurface::new();
    sprite.draw(&mut surface).unwrap();

    assert_eq!(
        surface.calls,
        vec![DrawCall::DrawImage { image: "tree", x: 10.0, y: 20.0, width: 16.0, height: 16.0 }]
    );
}

#[test]
fn sprite_zoom_scales_about_center() {
    let mut sprite = Sprite::new(TestImage::decoded("tree")).unwrap();
    sprite.rect = Rect::new(100.0, 100.0, 16.0, 16.0);
    sprite.zoom = 2.0;

    let mut surface = RecordingSurface::new();
    sprite.draw(&mut surface).unwrap();

    // Doubles to 32x32, growing 8 px on each side.
    assert_eq!(
        surface.calls,
        vec![DrawCall::DrawImage { image: "tree", x: 92.0, y: 92.0, width: 32.0, height: 32.0 }]
    );
}

#[test]
fn sprite_set_image_rejects_undecoded() {
    let mut sprite = Sprite::new(TestImage::decoded("a")).unwrap();
    let result = sprite.set_image(TestImage::undecoded("b"));
    assert!(matches!(result, Err(Error::InvalidAsset)));
    assert_eq!(sprite.image().name, "a");
}

// --- AnimatedSprite construction ---

#[test]
fn animation_rejects_empty_frame_list() {
    let result = AnimatedSprite::<TestImage>::new(Vec::new());
    assert!(matches!(result, Err(Error::EmptyAnimation)));
}

#[test]
fn animation_rejects_undecoded_frame() {
    let result =
        AnimatedSprite::new(vec![TestImage::decoded("a"), TestImage::undecoded("b")]);
    assert!(matches!(result, Err(Error::InvalidAsset)));
}

#[test]
fn animation_defaults() {
    let anim = AnimatedSprite::new(frames(&["a", "b"])).unwrap();
    assert_eq!(anim.frame_index(), 0);
    assert!(!anim.finished());
}

// --- AnimatedSprite stepping ---

#[test]
fn looping_animation_steps_through_frames() {
    let mut anim = AnimatedSprite::new(frames(&["a", "b", "c"])).unwrap().with_ticks_per_frame(1);
    let mut surface = RecordingSurface::new();

    for _ in 0..4 {
        anim.draw(&mut surface).unwrap();
    }
    // Advance-then-display: ticks land on frames 1, 2, 0, 1.
    assert_eq!(surface.drawn_images(), vec!["b", "c", "a", "b"]);
}

#[test]
fn ticks_per_frame_holds_each_frame() {
    let mut anim = AnimatedSprite::new(frames(&["a", "b"])).unwrap().with_ticks_per_frame(3);
    let mut surface = RecordingSurface::new();

    for _ in 0..6 {
        anim.draw(&mut surface).unwrap();
    }
    assert_eq!(surface.drawn_images(), vec!["a", "a", "b", "b", "b", "a"]);
}

#[test]
fn ticks_per_frame_clamps_to_one() {
    let mut anim = AnimatedSprite::new(frames(&["a"])).unwrap().with_ticks_per_frame(0);
    let mut surface = RecordingSurface::new();
    anim.draw(&mut surface).unwrap();
    assert_eq!(surface.drawn_images(), vec!["a"]);
}

#[test]
fn non_looping_animation_freezes_at_end() {
    let mut anim = AnimatedSprite::new(frames(&["a", "b", "c"]))
        .unwrap()
        .with_ticks_per_frame(1)
        .with_looping(false);
    let mut surface = RecordingSurface::new();

    anim.draw(&mut surface).unwrap();
    anim.draw(&mut surface).unwrap();
    assert!(anim.finished());

    // Once finished, nothing more is drawn.
    anim.draw(&mut surface).unwrap();
    anim.draw(&mut surface).unwrap();
    assert_eq!(surface.drawn_images(), vec!["b", "c"]);
    assert!(anim.finished());
}

#[test]
fn looping_animation_never_finishes() {
    let mut anim = AnimatedSprite::new(frames(&["a", "b"])).unwrap().with_ticks_per_frame(1);
    let mut surface = RecordingSurface::new();
    for _ in 0..20 {
        anim.draw(&mut surface).unwrap();
        assert!(!anim.finished());
    }
}

// --- Per-frame zoom ---

#[test]
fn frame_zoom_scales_only_that_frame() {
    let mut anim = AnimatedSprite::new(frames(&["a", "b"]))
        .unwrap()
        .with_ticks_per_frame(1)
        .with_frame_zooms(vec![1.0, 2.0]);
    anim.rect = Rect::new(0.0, 0.0, 16.0, 16.0);
    let mut surface = RecordingSurface::new();

    anim.draw(&mut surface).unwrap();
    anim.draw(&mut surface).unwrap();

    // Frame 1 at zoom 2 grows 8 px on each side; frame 0 is untouched.
    assert_eq!(
        surface.calls,
        vec![
            DrawCall::DrawImage { image: "b", x: -8.0, y: -8.0, width: 32.0, height: 32.0 },
            DrawCall::DrawImage { image: "a", x: 0.0, y: 0.0, width: 16.0, height: 16.0 },
        ]
    );
}

#[test]
fn frame_zoom_never_mutates_the_stored_box() {
    let mut anim = AnimatedSprite::new(frames(&["a", "b"]))
        .unwrap()
        .with_ticks_per_frame(1)
        .with_frame_zooms(vec![3.0, 3.0]);
    anim.rect = Rect::new(40.0, 40.0, 16.0, 16.0);
    let mut surface = RecordingSurface::new();

    for _ in 0..5 {
        anim.draw(&mut surface).unwrap();
    }
    assert_eq!(anim.rect, Rect::new(40.0, 40.0, 16.0, 16.0));
}

#[test]
fn missing_zoom_entry_falls_back_to_one() {
    let mut anim = AnimatedSprite::new(frames(&["a", "b"]))
        .unwrap()
        .with_ticks_per_frame(1)
        .with_frame_zooms(vec![2.0]);
    let mut surface = RecordingSurface::new();

    anim.draw(&mut surface).unwrap();
    // Frame 1 has no zoom entry.
    assert_eq!(
        surface.calls,
        vec![DrawCall::DrawImage { image: "b", x: 0.0, y: 0.0, width: 16.0, height: 16.0 }]
    );
}

// --- Orientation ---

#[test]
fn orientation_from_degrees() {
    assert_eq!(Orientation::from_degrees(0), Some(Orientation::North));
    assert_eq!(Orientation::from_degrees(90), Some(Orientation::East));
    assert_eq!(Orientation::from_degrees(180), Some(Orientation::South));
    assert_eq!(Orientation::from_degrees(270), Some(Orientation::West));
    assert_eq!(Orientation::from_degrees(45), None);
}

#[test]
fn orientation_degrees_round_trip() {
    for o in [Orientation::North, Orientation::East, Orientation::South, Orientation::West] {
        assert_eq!(Orientation::from_degrees(o.degrees()), Some(o));
    }
}

// --- DirectionalAnimatedSprite ---

fn directional() -> DirectionalAnimatedSprite<TestImage> {
    DirectionalAnimatedSprite::new(
        frames(&["n0", "n1"]),
        frames(&["e0", "e1"]),
        frames(&["s0", "s1"]),
        frames(&["w0", "w1"]),
    )
    .unwrap()
    .with_ticks_per_frame(1)
}

#[test]
fn directional_rejects_empty_orientation() {
    let result = DirectionalAnimatedSprite::new(
        frames(&["n"]),
        Vec::new(),
        frames(&["s"]),
        frames(&["w"]),
    );
    assert!(matches!(result, Err(Error::EmptyAnimation)));
}

#[test]
fn directional_rejects_undecoded_frame() {
    let result = DirectionalAnimatedSprite::new(
        frames(&["n"]),
        frames(&["e"]),
        vec![TestImage::undecoded("s")],
        frames(&["w"]),
    );
    assert!(matches!(result, Err(Error::InvalidAsset)));
}

#[test]
fn directional_defaults_to_south() {
    let mut sprite = directional();
    let mut surface = RecordingSurface::new();
    sprite.draw(&mut surface).unwrap();
    assert_eq!(surface.drawn_images(), vec!["s1"]);
}

#[test]
fn directional_switch_keeps_animation_phase() {
    let mut sprite = directional();
    let mut surface = RecordingSurface::new();

    sprite.draw(&mut surface).unwrap();
    sprite.orientation = Orientation::East;
    sprite.draw(&mut surface).unwrap();
    sprite.draw(&mut surface).unwrap();

    // Tick counter is shared, so the east animation picks up mid-cycle.
    assert_eq!(surface.drawn_images(), vec!["s1", "e0", "e1"]);
}

#[test]
fn directional_cycle_returns_to_start() {
    let mut sprite = directional();
    let mut surface = RecordingSurface::new();
    // Two frames at one tick each: a full cycle is two draws.
    sprite.draw(&mut surface).unwrap();
    sprite.draw(&mut surface).unwrap();
    assert_eq!(sprite.frame_index(), 0);
}
