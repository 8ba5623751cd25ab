use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementLog {
    delay_attr: Option<String>,
    style_delay: Option<String>,
    revealed_count: usize,
}

#[derive(Clone, Debug, Default)]
struct FakeElement(Rc<RefCell<ElementLog>>);

impl FakeElement {
    fn with_delay(delay: &str) -> Self {
        let el = Self::default();
        el.0.borrow_mut().delay_attr = Some(delay.to_owned());
        el
    }

    fn revealed_count(&self) -> usize {
        self.0.borrow().revealed_count
    }

    fn style_delay(&self) -> Option<String> {
        self.0.borrow().style_delay.clone()
    }
}

impl Revealable for FakeElement {
    fn declared_delay(&self) -> Option<String> {
        self.0.borrow().delay_attr.clone()
    }

    fn set_reveal_delay(&self, value: &str) {
        self.0.borrow_mut().style_delay = Some(value.to_owned());
    }

    fn mark_revealed(&self) {
        self.0.borrow_mut().revealed_count += 1;
    }
}

#[derive(Debug, Default)]
struct RecordingNotifier {
    watched: Vec<(WatchId, usize)>,
    unwatched: Vec<WatchId>,
}

impl VisibilityNotifier<FakeElement> for RecordingNotifier {
    fn watch(&mut self, id: WatchId, _element: &FakeElement, order: usize) {
        self.watched.push((id, order));
    }

    fn unwatch(&mut self, id: WatchId, _element: &FakeElement) {
        self.unwatched.push(id);
    }
}

#[derive(Debug, Default)]
struct ManualScheduler {
    timers: Vec<(u32, WatchId)>,
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, id: WatchId) {
        self.timers.push((delay_ms, id));
    }
}

fn entering(ratio: f64) -> Visibility {
    Visibility::Changed { intersecting: true, ratio }
}

fn leaving() -> Visibility {
    Visibility::Changed { intersecting: false, ratio: 0.0 }
}

// =============================================================
// observe
// =============================================================

#[test]
fn observe_empty_sequence_is_noop() {
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let ids = observer.observe(Vec::<FakeElement>::new());
    assert!(ids.is_empty());
    assert!(observer.notifier().watched.is_empty());
    assert_eq!(observer.pending(), 0);
}

#[test]
fn observe_assigns_ids_in_registration_order() {
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let first = observer.observe(vec![FakeElement::default(), FakeElement::default()]);
    let second = observer.observe(vec![FakeElement::default()]);

    assert_eq!(first, vec![0, 1]);
    assert_eq!(second, vec![2]);
    assert_eq!(observer.notifier().watched, vec![(0, 0), (1, 1), (2, 0)]);
    assert_eq!(observer.pending(), 3);
}

// =============================================================
// threshold rule
// =============================================================

#[test]
fn default_threshold_is_twelve_percent() {
    let observer: RevealObserver<FakeElement, _> = RevealObserver::new(RecordingNotifier::default());
    assert_eq!(observer.threshold(), 0.12);
}

#[test]
fn intersecting_below_threshold_reveals_once() {
    // An element much taller than the viewport never reaches 12% visibility.
    let el = FakeElement::default();
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let ids = observer.observe(vec![el.clone()]);

    assert!(observer.notify(ids[0], entering(0.1)));
    assert!(!observer.notify(ids[0], entering(0.08)));
    assert_eq!(el.revealed_count(), 1);
    assert_eq!(observer.notifier().unwatched, vec![ids[0]]);
}

#[test]
fn leaving_does_not_reveal() {
    let el = FakeElement::default();
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let ids = observer.observe(vec![el.clone()]);

    assert!(!observer.notify(ids[0], Visibility::Changed { intersecting: false, ratio: 0.5 }));
    assert_eq!(el.revealed_count(), 0);
}

#[test]
fn crossing_threshold_reveals_with_default_delay_and_unwatches() {
    let el = FakeElement::default();
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let ids = observer.observe(vec![el.clone()]);

    assert!(observer.notify(ids[0], entering(0.12)));
    assert_eq!(el.revealed_count(), 1);
    assert_eq!(el.style_delay().as_deref(), Some("0ms"));
    assert_eq!(observer.notifier().unwatched, vec![ids[0]]);
    assert!(observer.is_revealed(ids[0]));
    assert_eq!(observer.pending(), 0);
}

#[test]
fn declared_delay_is_applied_in_milliseconds() {
    let el = FakeElement::with_delay("240");
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let ids = observer.observe(vec![el.clone()]);

    observer.notify(ids[0], entering(0.5));
    assert_eq!(el.style_delay().as_deref(), Some("240ms"));
}

#[test]
fn custom_threshold_is_kept_for_the_host() {
    let el = FakeElement::default();
    let mut observer = RevealObserver::with_threshold(RecordingNotifier::default(), 0.5);
    let ids = observer.observe(vec![el.clone()]);

    assert_eq!(observer.threshold(), 0.5);
    assert!(observer.notify(ids[0], entering(0.3)));
    assert_eq!(el.revealed_count(), 1);
}

// =============================================================
// one-shot
// =============================================================

#[test]
fn enter_exit_enter_reveals_exactly_once() {
    let el = FakeElement::default();
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let ids = observer.observe(vec![el.clone()]);

    assert!(observer.notify(ids[0], entering(0.3)));
    assert!(!observer.notify(ids[0], leaving()));
    assert!(!observer.notify(ids[0], entering(0.9)));
    assert!(!observer.notify(ids[0], Visibility::Forced));

    assert_eq!(el.revealed_count(), 1);
    assert_eq!(observer.notifier().unwatched, vec![ids[0]]);
}

#[test]
fn reports_for_one_element_do_not_affect_others() {
    let a = FakeElement::default();
    let b = FakeElement::default();
    let mut observer = RevealObserver::new(RecordingNotifier::default());
    let ids = observer.observe(vec![a.clone(), b.clone()]);

    observer.notify(ids[1], entering(1.0));
    assert_eq!(a.revealed_count(), 0);
    assert_eq!(b.revealed_count(), 1);
    assert!(!observer.is_revealed(ids[0]));
    assert_eq!(observer.pending(), 1);
}

#[test]
fn unknown_id_is_ignored() {
    let mut observer: RevealObserver<FakeElement, _> = RevealObserver::new(RecordingNotifier::default());
    assert!(!observer.notify(7, Visibility::Forced));
    assert!(!observer.is_revealed(7));
}

// =============================================================
// delay parsing
// =============================================================

#[test]
fn reveal_delay_parsing() {
    assert_eq!(reveal_delay_ms(None), 0);
    assert_eq!(reveal_delay_ms(Some("")), 0);
    assert_eq!(reveal_delay_ms(Some(" 80 ")), 80);
    assert_eq!(reveal_delay_ms(Some("fast")), 0);
    assert_eq!(reveal_delay_ms(Some("-5")), 0);
}

// =============================================================
// fallback
// =============================================================

#[test]
fn stagger_delay_grows_linearly() {
    assert_eq!(stagger_delay(0, 150), 0);
    assert_eq!(stagger_delay(1, 150), 150);
    assert_eq!(stagger_delay(4, 150), 600);
    assert_eq!(stagger_delay(usize::MAX, 150), u32::MAX);
}

#[test]
fn fallback_schedules_strictly_increasing_reveals() {
    let elements = vec![FakeElement::default(), FakeElement::default(), FakeElement::default()];
    let mut observer = RevealObserver::new(FallbackNotifier::new(ManualScheduler::default()));
    let ids = observer.observe(elements.clone());

    let timers = observer.notifier().scheduler().timers.clone();
    assert_eq!(timers, vec![(0, ids[0]), (150, ids[1]), (300, ids[2])]);
    let (t0, t1, t2) = (timers[0].0, timers[1].0, timers[2].0);
    assert!(t0 < t1 && t1 < t2);
    assert_eq!(t1 - t0, 150);
    assert_eq!(t2 - t1, 150);

    // No viewport input: nothing is revealed until timers fire.
    assert!(elements.iter().all(|el| el.revealed_count() == 0));

    for (_, id) in timers {
        assert!(observer.notify(id, Visibility::Forced));
    }
    assert!(elements.iter().all(|el| el.revealed_count() == 1));
    assert_eq!(observer.pending(), 0);
}

#[test]
fn fallback_uses_configured_stagger() {
    let mut observer =
        RevealObserver::new(FallbackNotifier::with_stagger(ManualScheduler::default(), 40));
    observer.observe(vec![FakeElement::default(), FakeElement::default()]);
    assert_eq!(observer.notifier().scheduler().timers, vec![(0, 0), (40, 1)]);
}
