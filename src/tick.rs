use std::cell::RefCell;

/// Run `step` on the shared context if it is still present.
///
/// Once the context has been taken the loop callback in `tick` is released,
/// which breaks the callback's reference back to its own slot. Returns
/// whether another frame should be requested.
pub fn step_or_release<C, F>(
    ctx: &RefCell<Option<C>>,
    tick: &RefCell<Option<F>>,
    step: impl FnOnce(&mut C),
) -> bool {
    {
        let mut guard = ctx.borrow_mut();
        if let Some(c) = guard.as_mut() {
            step(c);
            return true;
        }
    }
    let released = tick.borrow_mut().take();
    drop(released);
    false
}
