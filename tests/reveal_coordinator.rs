mod common;

use std::time::Duration;

use folio::engine::reveal::{
    RevealCoordinator, RevealEffect, RevealKind, RevealTarget, TargetId,
};
use folio::engine::viewport::{ObserverConfig, RowSpan, Viewport};
use folio::page::Catalog;

fn fade_config() -> ObserverConfig {
    ObserverConfig {
        threshold: 0.1,
        bottom_inset: 2,
    }
}

fn fade(id: u32) -> RevealTarget {
    RevealTarget {
        id: TargetId(id),
        kind: RevealKind::Fade,
    }
}

#[test]
fn repeated_intersections_fire_at_most_once() {
    let mut coord = RevealCoordinator::new(fade_config(), Duration::from_millis(100));
    coord.observe(fade(1));

    assert_eq!(coord.pending_count(), 1);
    let first = coord.deliver(&[TargetId(1)]);
    assert_eq!(first.len(), 1);
    assert_eq!(coord.pending_count(), 0);

    // Scroll oscillation: the same element keeps intersecting.
    for _ in 0..10 {
        assert!(coord.deliver(&[TargetId(1)]).is_empty());
    }
}

#[test]
fn batch_of_k_fades_staggers_by_delivery_order() {
    let mut coord = RevealCoordinator::new(fade_config(), Duration::from_millis(100));
    for id in 0..4 {
        coord.observe(fade(id));
    }

    let actions = coord.deliver(&[TargetId(0), TargetId(1), TargetId(2), TargetId(3)]);
    let delays: Vec<u64> = actions.iter().map(|a| a.delay.as_millis() as u64).collect();
    assert_eq!(delays, vec![0, 100, 200, 300]);
    // Delivery order is preserved.
    let ids: Vec<u32> = actions.iter().map(|a| a.id.0).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn progress_fill_comes_from_configuration_not_recomputation() {
    let mut coord = RevealCoordinator::new(
        ObserverConfig {
            threshold: 0.5,
            bottom_inset: 0,
        },
        Duration::ZERO,
    );
    coord.observe(RevealTarget {
        id: TargetId(9),
        kind: RevealKind::Progress { target: 75 },
    });

    let actions = coord.deliver(&[TargetId(9)]);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].effect, RevealEffect::Fill { percent: 75 });

    // Later deliveries change nothing.
    assert!(coord.deliver(&[TargetId(9)]).is_empty());
}

#[test]
fn scan_fires_only_targets_past_the_threshold() {
    let mut coord = RevealCoordinator::new(fade_config(), Duration::from_millis(100));
    coord.observe(fade(1));
    coord.observe(fade(2));

    let view = Viewport::new(0, 10);
    // Target 1 well inside; target 2 entirely below the fold.
    let spans = vec![
        (TargetId(1), RowSpan::new(2, 3)),
        (TargetId(2), RowSpan::new(30, 3)),
    ];

    let actions = coord.scan(&spans, view);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].id, TargetId(1));
    assert!(coord.is_pending(TargetId(2)));
}

#[test]
fn skill_without_level_gets_a_defined_zero_fill() {
    let config = common::sample_config();
    let catalog = Catalog::new(&config);
    let targets = catalog.progress_targets(&config);

    // "Terminal UIs" is configured without a level.
    let unleveled = targets
        .iter()
        .find(|t| t.id == catalog.skill_bar_id(2))
        .expect("bar target for third skill");
    assert_eq!(unleveled.kind, RevealKind::Progress { target: 0 });
}
