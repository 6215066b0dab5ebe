//! One-shot scroll-reveal bookkeeping.
//!
//! A [`RevealCoordinator`] watches a set of targets and, the first time each
//! one intersects the viewport, emits a single [`RevealAction`] and forgets
//! the target for good. The page runs two independent instances: fades
//! (low threshold, bottom inset, staggered within a batch) and skill-bar
//! fills (high threshold, immediate, fill value read from the target's own
//! configuration).

use std::collections::HashSet;
use std::time::Duration;

use crate::engine::viewport::{is_intersecting, ObserverConfig, RowSpan, Viewport};

/// Stable identity of an observed element, assigned once from the full
/// (unfiltered) page catalog so it survives re-layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// What happens when a target first intersects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Card fades in.
    Fade,
    /// Bar fills to `target` percent (0-100).
    Progress { target: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTarget {
    pub id: TargetId,
    pub kind: RevealKind,
}

/// The visual transition to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    FadeIn,
    Fill { percent: u8 },
}

/// A scheduled one-shot transition. `delay` is relative to the moment the
/// batch was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealAction {
    pub id: TargetId,
    pub delay: Duration,
    pub effect: RevealEffect,
}

/// Tracks pending targets and turns intersection batches into actions.
///
/// Lifecycle per target is strictly `pending -> revealed`: once a target
/// fires it is dropped from the pending set and re-observing it is a no-op,
/// so scroll oscillation can never re-trigger a reveal.
#[derive(Debug)]
pub struct RevealCoordinator {
    pending: Vec<RevealTarget>,
    revealed: HashSet<TargetId>,
    config: ObserverConfig,
    stagger: Duration,
}

impl RevealCoordinator {
    /// `stagger` is the per-action delay increment within one batch; pass
    /// zero for effects that should apply immediately.
    pub fn new(config: ObserverConfig, stagger: Duration) -> Self {
        Self {
            pending: Vec::new(),
            revealed: HashSet::new(),
            config,
            stagger,
        }
    }

    /// Starts observing a target. Targets already pending or already
    /// revealed are ignored, keeping the one-shot guarantee across
    /// re-observation after filter changes.
    pub fn observe(&mut self, target: RevealTarget) {
        if self.revealed.contains(&target.id) {
            return;
        }
        if self.pending.iter().any(|t| t.id == target.id) {
            return;
        }
        self.pending.push(target);
    }

    pub fn is_pending(&self, id: TargetId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Processes one batch of intersecting ids, in delivery order.
    ///
    /// Only ids still pending fire; each fired action's delay is its index
    /// among the actions of this batch times the stagger, so a batch of k
    /// fades schedules delays 0, s, 2s, ... (k-1)s.
    pub fn deliver(&mut self, intersecting: &[TargetId]) -> Vec<RevealAction> {
        let mut actions = Vec::new();
        for id in intersecting {
            let Some(pos) = self.pending.iter().position(|t| t.id == *id) else {
                continue;
            };
            let target = self.pending.remove(pos);
            self.revealed.insert(target.id);
            let effect = match target.kind {
                RevealKind::Fade => RevealEffect::FadeIn,
                RevealKind::Progress { target } => RevealEffect::Fill { percent: target },
            };
            actions.push(RevealAction {
                id: target.id,
                delay: self.stagger * actions.len() as u32,
                effect,
            });
        }
        actions
    }

    /// Convenience wrapper: tests the given spans against the viewport and
    /// delivers the intersecting ones as a single batch, in the order given
    /// (document order, which is what the stagger is defined over).
    pub fn scan(&mut self, spans: &[(TargetId, RowSpan)], view: Viewport) -> Vec<RevealAction> {
        let config = self.config;
        let batch: Vec<TargetId> = spans
            .iter()
            .filter(|(id, span)| self.is_pending(*id) && is_intersecting(*span, view, config))
            .map(|(id, _)| *id)
            .collect();
        self.deliver(&batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_coordinator() -> RevealCoordinator {
        RevealCoordinator::new(
            ObserverConfig {
                threshold: 0.1,
                bottom_inset: 2,
            },
            Duration::from_millis(100),
        )
    }

    #[test]
    fn target_fires_exactly_once() {
        let mut coord = fade_coordinator();
        coord.observe(RevealTarget {
            id: TargetId(1),
            kind: RevealKind::Fade,
        });
        assert_eq!(coord.pending_count(), 1);
        assert_eq!(coord.deliver(&[TargetId(1)]).len(), 1);
        assert_eq!(coord.pending_count(), 0);
        assert!(coord.deliver(&[TargetId(1)]).is_empty());
        assert!(coord.is_revealed(TargetId(1)));
    }

    #[test]
    fn reobserving_a_revealed_target_is_a_noop() {
        let mut coord = fade_coordinator();
        let target = RevealTarget {
            id: TargetId(7),
            kind: RevealKind::Fade,
        };
        coord.observe(target);
        coord.deliver(&[TargetId(7)]);
        coord.observe(target);
        assert!(!coord.is_pending(TargetId(7)));
        assert!(coord.deliver(&[TargetId(7)]).is_empty());
    }

    #[test]
    fn batch_stagger_counts_only_fired_targets() {
        let mut coord = fade_coordinator();
        for id in [1, 2, 3] {
            coord.observe(RevealTarget {
                id: TargetId(id),
                kind: RevealKind::Fade,
            });
        }
        // 2 already fired in an earlier batch.
        coord.deliver(&[TargetId(2)]);

        let actions = coord.deliver(&[TargetId(1), TargetId(2), TargetId(3)]);
        let delays: Vec<u64> = actions.iter().map(|a| a.delay.as_millis() as u64).collect();
        assert_eq!(delays, vec![0, 100]);
    }

    #[test]
    fn progress_action_carries_configured_fill() {
        let mut coord = RevealCoordinator::new(
            ObserverConfig {
                threshold: 0.5,
                bottom_inset: 0,
            },
            Duration::ZERO,
        );
        coord.observe(RevealTarget {
            id: TargetId(4),
            kind: RevealKind::Progress { target: 75 },
        });
        let actions = coord.deliver(&[TargetId(4)]);
        assert_eq!(actions[0].effect, RevealEffect::Fill { percent: 75 });
        assert_eq!(actions[0].delay, Duration::ZERO);
    }
}
