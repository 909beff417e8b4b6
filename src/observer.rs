use crate::reveal::{RevealKey, VisibilityTracker};
use crate::telemetry::{log_event, LogLevel};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use serde_json::json;
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

const REVEAL_KEY_ATTRIBUTE: &str = "data-reveal-key";

struct DispatcherState {
    tracker: VisibilityTracker,
    elements: HashMap<RevealKey, Element>,
    timers: HashMap<RevealKey, Timeout>,
    on_reveal: Callback<RevealKey>,
    log_level: LogLevel,
}

struct Observers {
    section: IntersectionObserver,
    card: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observers {
    fn for_threshold(&self, threshold: f64) -> &IntersectionObserver {
        if threshold > 0.1 {
            &self.card
        } else {
            &self.section
        }
    }
}

impl Drop for Observers {
    fn drop(&mut self) {
        // Disconnect before `_callback` is freed so no queued entry reaches it.
        self.section.disconnect();
        self.card.disconnect();
    }
}

/// Page-wide owner of every reveal observation. Items attach themselves with
/// [`RevealDispatcher::attach`] and are detached when the returned handle drops.
#[derive(Clone)]
pub struct RevealDispatcher {
    state: Rc<RefCell<DispatcherState>>,
    observers: Rc<Observers>,
}

impl PartialEq for RevealDispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl RevealDispatcher {
    /// Returns `None` when the browser has no intersection observer support.
    pub fn new(on_reveal: Callback<RevealKey>, log_level: LogLevel) -> Option<Self> {
        let state = Rc::new(RefCell::new(DispatcherState {
            tracker: VisibilityTracker::new(),
            elements: HashMap::new(),
            timers: HashMap::new(),
            on_reveal,
            log_level,
        }));

        let weak_state = Rc::downgrade(&state);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let Some(state) = weak_state.upgrade() else {
                    return;
                };

                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let Some(key) = entry
                        .target()
                        .get_attribute(REVEAL_KEY_ATTRIBUTE)
                        .as_deref()
                        .and_then(RevealKey::parse)
                    else {
                        continue;
                    };

                    dispatch(&state, &observer, key, entry.is_intersecting());
                }
            },
        );

        let observers = Rc::new(Observers {
            section: new_observer(&callback, 0.1)?,
            card: new_observer(&callback, 0.2)?,
            _callback: callback,
        });

        Some(Self { state, observers })
    }

    pub fn attach(&self, key: RevealKey, element: Element) -> ObservationHandle {
        let _ = element.set_attribute(REVEAL_KEY_ATTRIBUTE, &key.dom_key());

        {
            let mut state = self.state.borrow_mut();
            state.tracker.attach(key);
            state.elements.insert(key, element.clone());
        }

        self.observers.for_threshold(key.list.threshold()).observe(&element);

        ObservationHandle {
            dispatcher: self.clone(),
            key,
        }
    }

    fn detach(&self, key: RevealKey) {
        let (element, timer) = {
            let mut state = self.state.borrow_mut();
            state.tracker.detach(key);
            (state.elements.remove(&key), state.timers.remove(&key))
        };

        drop(timer);
        if let Some(element) = element {
            self.observers
                .for_threshold(key.list.threshold())
                .unobserve(&element);
        }
    }

    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.state.borrow().tracker.is_revealed(key)
    }
}

/// Releases the observation when dropped.
pub struct ObservationHandle {
    dispatcher: RevealDispatcher,
    key: RevealKey,
}

impl Drop for ObservationHandle {
    fn drop(&mut self) {
        self.dispatcher.detach(self.key);
    }
}

fn new_observer(
    callback: &Closure<dyn FnMut(Array, IntersectionObserver)>,
    threshold: f64,
) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()
}

fn dispatch(
    state: &Rc<RefCell<DispatcherState>>,
    observer: &IntersectionObserver,
    key: RevealKey,
    is_intersecting: bool,
) {
    let (delay, log_level) = {
        let mut state = state.borrow_mut();
        (state.tracker.on_intersect(key, is_intersecting), state.log_level)
    };
    let Some(delay) = delay else {
        return;
    };

    log_event(
        log_level,
        LogLevel::Debug,
        "reveal_scheduled",
        json!({ "key": key.dom_key(), "delayMs": delay.as_millis() as u64 }),
    );

    if delay.is_zero() {
        finish_reveal(state, observer, key);
        return;
    }

    let weak_state = Rc::downgrade(state);
    let observer = observer.clone();
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    let timer = Timeout::new(millis, move || {
        if let Some(state) = weak_state.upgrade() {
            finish_reveal(&state, &observer, key);
        }
    });

    // The timer stays in the map until detach; dropping it from inside its own
    // callback is not allowed.
    state.borrow_mut().timers.insert(key, timer);
}

fn finish_reveal(state: &Rc<RefCell<DispatcherState>>, observer: &IntersectionObserver, key: RevealKey) {
    let (revealed, element, on_reveal) = {
        let mut state = state.borrow_mut();
        let revealed = state.tracker.complete(key);
        (revealed, state.elements.get(&key).cloned(), state.on_reveal.clone())
    };

    if !revealed {
        return;
    }

    if let Some(element) = element {
        observer.unobserve(&element);
    }
    on_reveal.emit(key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;
    use web_sys::window;

    wasm_bindgen_test_configure!(run_in_browser);

    fn visible_element() -> Element {
        let document = window()
            .and_then(|w| w.document())
            .expect("document");
        let element = document.create_element("div").expect("div");
        element
            .set_attribute("style", "position: fixed; top: 0; left: 0; width: 10px; height: 10px;")
            .expect("style");
        document
            .body()
            .expect("body")
            .append_child(&element)
            .expect("append");
        element
    }

    #[wasm_bindgen_test]
    async fn dropping_dispatcher_disconnects_before_callback_is_freed() {
        let revealed = Rc::new(Cell::new(0));
        let on_reveal = {
            let revealed = revealed.clone();
            Callback::from(move |_key: RevealKey| revealed.set(revealed.get() + 1))
        };
        let dispatcher = RevealDispatcher::new(on_reveal, LogLevel::Warn).expect("observer support");
        let element = visible_element();

        let handle = dispatcher.attach(RevealKey::whole(crate::reveal::RevealList::Section), element.clone());
        drop(dispatcher);
        drop(handle);

        TimeoutFuture::new(50).await;
        element.remove();
        assert_eq!(revealed.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn visible_item_reveals_once() {
        let revealed = Rc::new(Cell::new(0));
        let on_reveal = {
            let revealed = revealed.clone();
            Callback::from(move |_key: RevealKey| revealed.set(revealed.get() + 1))
        };
        let dispatcher = RevealDispatcher::new(on_reveal, LogLevel::Warn).expect("observer support");
        let element = visible_element();
        let key = RevealKey::whole(crate::reveal::RevealList::Section);

        let _handle = dispatcher.attach(key, element.clone());
        TimeoutFuture::new(200).await;

        assert!(dispatcher.is_revealed(key));
        assert_eq!(revealed.get(), 1);
        element.remove();
    }
}
