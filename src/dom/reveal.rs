//! Reveal observer bound to the document.
//!
//! Uses `IntersectionObserver` when the browser has it and falls back to a
//! `gloo-timers` cascade otherwise. Both feed [`RevealObserver::notify`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::{js_error_message, query, set_class};
use crate::config::SiteConfig;
use crate::consts::{DELAY_DATA_KEY, FADE_UP_CLASS, VISIBLE_CLASS};
use crate::reveal::{FallbackNotifier, RevealObserver, Revealable, Scheduler, Visibility, VisibilityNotifier, WatchId};

/// A `.fade-up` element.
pub struct RevealTarget(HtmlElement);

impl Revealable for RevealTarget {
    fn declared_delay(&self) -> Option<String> {
        self.0.dataset().get(DELAY_DATA_KEY)
    }

    fn set_reveal_delay(&self, value: &str) {
        if let Err(err) = self.0.style().set_property("animation-delay", value) {
            log::warn!("reveal: cannot set delay: {}", js_error_message(&err));
        }
    }

    fn mark_revealed(&self) {
        set_class(&self.0, VISIBLE_CLASS, true);
    }
}

pub type DomRevealObserver = RevealObserver<RevealTarget, DomNotifier>;
pub type RevealHandle = Rc<RefCell<DomRevealObserver>>;

/// Visibility source picked once per page.
pub enum DomNotifier {
    Native(NativeNotifier),
    Fallback(FallbackNotifier<TimeoutScheduler>),
}

impl DomNotifier {
    fn id_for(&self, target: &Element) -> Option<WatchId> {
        match self {
            Self::Native(native) => native.id_for(target),
            Self::Fallback(_) => None,
        }
    }
}

impl VisibilityNotifier<RevealTarget> for DomNotifier {
    fn watch(&mut self, id: WatchId, element: &RevealTarget, order: usize) {
        match self {
            Self::Native(native) => native.watch(id, element, order),
            Self::Fallback(fallback) => fallback.watch(id, element, order),
        }
    }

    fn unwatch(&mut self, id: WatchId, element: &RevealTarget) {
        match self {
            Self::Native(native) => native.unwatch(id, element),
            Self::Fallback(fallback) => fallback.unwatch(id, element),
        }
    }
}

/// `IntersectionObserver` with a single threshold.
pub struct NativeNotifier {
    observer: IntersectionObserver,
    targets: Vec<(WatchId, HtmlElement)>,
    _callback: Closure<dyn FnMut(Array)>,
}

impl NativeNotifier {
    fn new(owner: Weak<RefCell<DomRevealObserver>>, threshold: f64) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let Some(shared) = owner.upgrade() else {
                return;
            };
            let mut observer = shared.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(id) = observer.notifier().id_for(&entry.target()) else {
                    continue;
                };
                observer.notify(
                    id,
                    Visibility::Changed { intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() },
                );
            }
        }) as Box<dyn FnMut(Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, targets: Vec::new(), _callback: callback })
    }

    fn id_for(&self, target: &Element) -> Option<WatchId> {
        self.targets
            .iter()
            .find(|(_, el)| {
                let el: &Element = el;
                el == target
            })
            .map(|(id, _)| *id)
    }
}

impl VisibilityNotifier<RevealTarget> for NativeNotifier {
    fn watch(&mut self, id: WatchId, element: &RevealTarget, _order: usize) {
        self.observer.observe(&element.0);
        self.targets.push((id, element.0.clone()));
    }

    fn unwatch(&mut self, id: WatchId, element: &RevealTarget) {
        self.observer.unobserve(&element.0);
        self.targets.retain(|(watched, _)| *watched != id);
    }
}

/// Browser timeouts delivering [`Visibility::Forced`].
pub struct TimeoutScheduler {
    owner: Weak<RefCell<DomRevealObserver>>,
    pending: Vec<Timeout>,
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, id: WatchId) {
        let owner = self.owner.clone();
        self.pending.push(Timeout::new(delay_ms, move || {
            if let Some(shared) = owner.upgrade() {
                shared.borrow_mut().notify(id, Visibility::Forced);
            }
        }));
    }
}

fn has_intersection_observer(window: &Window) -> bool {
    let global: &JsValue = window.as_ref();
    js_sys::Reflect::has(global, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Tag the first match of each selector as revealable.
pub fn tag_sections(document: &Document, selectors: &[String]) {
    for selector in selectors {
        if let Some(el) = query(document, selector) {
            set_class(&el, FADE_UP_CLASS, true);
        }
    }
}

fn collect_targets(document: &Document) -> Vec<RevealTarget> {
    let nodes = match document.query_selector_all(&format!(".{FADE_UP_CLASS}")) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("reveal: lookup failed: {}", js_error_message(&err));
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| match node.dyn_into::<HtmlElement>() {
            Ok(el) => Some(RevealTarget(el)),
            Err(_) => None,
        })
        .collect()
}

/// Start watching every `.fade-up` element. `None` when there are none.
pub fn observe_page(window: &Window, document: &Document, config: &SiteConfig) -> Option<RevealHandle> {
    let targets = collect_targets(document);
    if targets.is_empty() {
        return None;
    }

    let native = has_intersection_observer(window);
    let threshold = config.reveal_threshold;
    let stagger_ms = config.fallback_stagger_ms;
    let handle: RevealHandle = Rc::new_cyclic(|owner: &Weak<RefCell<DomRevealObserver>>| {
        let fallback = || {
            DomNotifier::Fallback(FallbackNotifier::with_stagger(
                TimeoutScheduler { owner: owner.clone(), pending: Vec::new() },
                stagger_ms,
            ))
        };
        let notifier = if native {
            match NativeNotifier::new(owner.clone(), threshold) {
                Ok(native) => DomNotifier::Native(native),
                Err(err) => {
                    log::warn!("reveal: IntersectionObserver unusable: {}", js_error_message(&err));
                    fallback()
                }
            }
        } else {
            log::info!("reveal: no IntersectionObserver, using timed fallback");
            fallback()
        };
        RefCell::new(RevealObserver::with_threshold(notifier, threshold))
    });

    handle.borrow_mut().observe(targets);
    Some(handle)
}
