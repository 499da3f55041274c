// Host-side tests for the animation loop's stop handling.

#![allow(dead_code)]
mod tick {
    include!("../src/tick.rs");
}

use std::cell::RefCell;
use std::rc::Rc;
use tick::step_or_release;

#[test]
fn running_context_is_stepped_and_callback_kept() {
    let ctx = RefCell::new(Some(0u32));
    let tick = RefCell::new(Some(()));
    assert!(step_or_release(&ctx, &tick, |n| *n += 1));
    assert_eq!(*ctx.borrow(), Some(1));
    assert!(tick.borrow().is_some());
}

#[test]
fn stopped_context_releases_self_referencing_callback() {
    let ctx: RefCell<Option<u32>> = RefCell::new(None);
    let tick: Rc<RefCell<Option<Rc<()>>>> = Rc::new(RefCell::new(None));
    let captured = Rc::new(());
    *tick.borrow_mut() = Some(captured.clone());
    assert_eq!(Rc::strong_count(&captured), 2);

    let mut stepped = false;
    assert!(!step_or_release(&ctx, &*tick, |_| stepped = true));
    assert!(!stepped);
    assert!(tick.borrow().is_none());
    assert_eq!(Rc::strong_count(&captured), 1);
}
