//! Scriptable stand-ins for the browser page and DOM elements.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use crate::env::{PageEvents, ReadyState, Subscription};
use crate::error::{Result, UiError};
use crate::scroll_beacon::ClassTarget;

type LoadHandler = Rc<RefCell<Box<dyn FnMut()>>>;
type ScrollHandler = Rc<RefCell<Box<dyn FnMut(f64)>>>;

struct PageInner {
    ready: Cell<ReadyState>,
    offset: Cell<f64>,
    next_id: Cell<u64>,
    keep_released: Cell<bool>,
    load: RefCell<Vec<(u64, LoadHandler)>>,
    scroll: RefCell<Vec<(u64, ScrollHandler)>>,
}

/// In-memory page. Clones share the same state.
#[derive(Clone)]
pub struct FakePage {
    inner: Rc<PageInner>,
}

impl FakePage {
    pub fn new(ready: ReadyState) -> Self {
        Self {
            inner: Rc::new(PageInner {
                ready: Cell::new(ready),
                offset: Cell::new(0.0),
                next_id: Cell::new(0),
                keep_released: Cell::new(false),
                load: RefCell::new(Vec::new()),
                scroll: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn loading() -> Self {
        Self::new(ReadyState::Loading)
    }

    pub fn complete() -> Self {
        Self::new(ReadyState::Complete)
    }

    /// Mark the page complete and deliver the load event to every observer.
    pub fn finish_loading(&self) {
        self.inner.ready.set(ReadyState::Complete);
        self.deliver_load();
    }

    /// Deliver the load event again without touching the ready state.
    pub fn deliver_load(&self) {
        let handlers: Vec<LoadHandler> =
            self.inner.load.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    pub fn scroll_to(&self, offset: f64) {
        self.inner.offset.set(offset);
        let handlers: Vec<ScrollHandler> =
            self.inner.scroll.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            (handler.borrow_mut())(offset);
        }
    }

    /// From now on releasing a subscription leaves its handler registered, like an
    /// event source that still delivers to a detached observer.
    pub fn keep_released_listeners(&self) {
        self.inner.keep_released.set(true);
    }

    pub fn load_listeners(&self) -> usize {
        self.inner.load.borrow().len()
    }

    pub fn scroll_listeners(&self) -> usize {
        self.inner.scroll.borrow().len()
    }

    fn next_id(&self) -> u64 {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        id
    }
}

impl PageEvents for FakePage {
    fn ready_state(&self) -> ReadyState {
        self.inner.ready.get()
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.offset.get()
    }

    fn on_load(&self, handler: Box<dyn FnMut()>) -> Subscription {
        let id = self.next_id();
        self.inner
            .load
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        let page: Weak<PageInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(page) = page.upgrade().filter(|page| !page.keep_released.get()) {
                page.load.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }

    fn on_scroll(&self, handler: Box<dyn FnMut(f64)>) -> Subscription {
        let id = self.next_id();
        self.inner
            .scroll
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        let page: Weak<PageInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(page) = page.upgrade().filter(|page| !page.keep_released.get()) {
                page.scroll.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }
}

/// Element with a class list that can be attached to or detached from the page.
#[derive(Clone)]
pub struct FakeElement {
    id: &'static str,
    attached: Rc<Cell<bool>>,
    classes: Rc<RefCell<BTreeSet<String>>>,
    writes: Rc<Cell<usize>>,
}

impl FakeElement {
    pub fn attached(id: &'static str) -> Self {
        Self {
            id,
            attached: Rc::new(Cell::new(true)),
            classes: Rc::default(),
            writes: Rc::default(),
        }
    }

    pub fn detached(id: &'static str) -> Self {
        let element = Self::attached(id);
        element.attached.set(false);
        element
    }

    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    /// Number of successful class writes.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ClassTarget for FakeElement {
    fn toggle_class(&self, class: &str, present: bool) -> Result<()> {
        if !self.attached.get() {
            return Err(UiError::ElementMissing(self.id.to_string()));
        }
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
