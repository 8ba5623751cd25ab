//! One-shot reveal of elements as they scroll into view.
//!
//! ARCHITECTURE
//! ============
//! [`RevealObserver`] owns the watch list and the reveal rule. Visibility input
//! comes from a [`VisibilityNotifier`] chosen at construction: the browser's
//! native intersection observer, or [`FallbackNotifier`], which reveals every
//! element on a fixed stagger through a [`Scheduler`]. Either way the host
//! feeds results back through [`RevealObserver::notify`], so the reveal logic
//! is identical in both environments.
//!
//! Revealing is monotonic: a revealed element is never re-examined and is
//! unwatched as part of the same step.
//!
//! The threshold only shapes when the native observer reports. Any
//! intersecting report reveals, so an element too tall to ever reach the
//! threshold fraction still reveals once it enters the viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{FALLBACK_STAGGER_MS, REVEAL_THRESHOLD};

/// Index of an element in the observer's registration order.
pub type WatchId = usize;

/// Element capability needed to reveal it.
pub trait Revealable {
    /// Raw declared delay (the `data-delay` attribute), if any.
    fn declared_delay(&self) -> Option<String>;
    /// Set the presentation delay, e.g. `"120ms"`.
    fn set_reveal_delay(&self, value: &str);
    /// Add the visible-state marker.
    fn mark_revealed(&self);
}

/// A visibility report for one watched element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Visibility {
    /// Intersection state changed; `ratio` is the visible fraction of the element.
    Changed { intersecting: bool, ratio: f64 },
    /// Reveal unconditionally (timer fallback).
    Forced,
}

/// Source of visibility reports.
pub trait VisibilityNotifier<E> {
    /// Start watching `element`. `order` is its position within the current
    /// [`RevealObserver::observe`] batch.
    fn watch(&mut self, id: WatchId, element: &E, order: usize);
    /// Stop watching `element`. Called exactly once, right after it reveals.
    fn unwatch(&mut self, id: WatchId, element: &E);
}

/// Timer capability used by [`FallbackNotifier`].
pub trait Scheduler {
    /// Arrange for `Visibility::Forced` to reach `id` after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, id: WatchId);
}

/// Reveals every watched element on a fixed stagger, ignoring the viewport.
#[derive(Debug)]
pub struct FallbackNotifier<S> {
    scheduler: S,
    stagger_ms: u32,
}

impl<S: Scheduler> FallbackNotifier<S> {
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self::with_stagger(scheduler, FALLBACK_STAGGER_MS)
    }

    #[must_use]
    pub fn with_stagger(scheduler: S, stagger_ms: u32) -> Self {
        Self { scheduler, stagger_ms }
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

/// Delay for the element at `order` in a fallback batch.
#[must_use]
pub fn stagger_delay(order: usize, stagger_ms: u32) -> u32 {
    u32::try_from(order).map_or(u32::MAX, |order| order.saturating_mul(stagger_ms))
}

impl<E, S: Scheduler> VisibilityNotifier<E> for FallbackNotifier<S> {
    fn watch(&mut self, id: WatchId, _element: &E, order: usize) {
        self.scheduler.schedule(stagger_delay(order, self.stagger_ms), id);
    }

    fn unwatch(&mut self, _id: WatchId, _element: &E) {}
}

/// Parse a declared delay in milliseconds. Missing or malformed values give 0.
#[must_use]
pub fn reveal_delay_ms(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return 0;
    };
    raw.parse::<u32>().unwrap_or_else(|_| {
        log::warn!("reveal: ignoring non-integer delay {raw:?}");
        0
    })
}

struct Watch<E> {
    element: E,
    revealed: bool,
}

/// Watches elements and reveals each exactly once.
pub struct RevealObserver<E, N> {
    notifier: N,
    watches: Vec<Watch<E>>,
    threshold: f64,
}

impl<E: Revealable, N: VisibilityNotifier<E>> RevealObserver<E, N> {
    #[must_use]
    pub fn new(notifier: N) -> Self {
        Self::with_threshold(notifier, REVEAL_THRESHOLD)
    }

    /// `threshold` is handed to the native observer; it does not gate reveals.
    #[must_use]
    pub fn with_threshold(notifier: N, threshold: f64) -> Self {
        Self { notifier, watches: Vec::new(), threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Register elements for watching. Returns their ids in order.
    pub fn observe<I>(&mut self, elements: I) -> Vec<WatchId>
    where
        I: IntoIterator<Item = E>,
    {
        let mut ids = Vec::new();
        for (order, element) in elements.into_iter().enumerate() {
            let id = self.watches.len();
            self.notifier.watch(id, &element, order);
            self.watches.push(Watch { element, revealed: false });
            ids.push(id);
        }
        if !ids.is_empty() {
            log::debug!("reveal: watching {} element(s)", ids.len());
        }
        ids
    }

    /// Feed a visibility report. Returns `true` if this report revealed the element.
    pub fn notify(&mut self, id: WatchId, visibility: Visibility) -> bool {
        let Some(watch) = self.watches.get_mut(id) else {
            log::debug!("reveal: report for unknown id {id}");
            return false;
        };
        if watch.revealed || !should_reveal(visibility) {
            return false;
        }

        let delay = reveal_delay_ms(watch.element.declared_delay().as_deref());
        watch.element.set_reveal_delay(&format!("{delay}ms"));
        watch.element.mark_revealed();
        watch.revealed = true;
        self.notifier.unwatch(id, &watch.element);
        true
    }

    #[must_use]
    pub fn is_revealed(&self, id: WatchId) -> bool {
        self.watches.get(id).is_some_and(|watch| watch.revealed)
    }

    /// Number of elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.watches.iter().filter(|watch| !watch.revealed).count()
    }
}

fn should_reveal(visibility: Visibility) -> bool {
    match visibility {
        Visibility::Changed { intersecting, .. } => intersecting,
        Visibility::Forced => true,
    }
}
