use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// A call that appends its tag to a shared trace and doubles its argument.
fn traced(tag: &'static str, trace: &Rc<RefCell<Vec<String>>>) -> Call<i32, i32> {
    let trace = Rc::clone(trace);
    Box::new(move |n| {
        trace.borrow_mut().push(format!("{tag}({n})"));
        n * 2
    })
}

fn trace() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

// --- before ---

#[test]
fn before_runs_hook_first_with_same_args() {
    let t = trace();
    let hooked = {
        let t2 = Rc::clone(&t);
        before(traced("orig", &t), move |n| t2.borrow_mut().push(format!("hook({n})")))
    };
    let mut hooked = hooked;
    let ret = hooked(21);
    assert_eq!(ret, 42);
    assert_eq!(*t.borrow(), vec!["hook(21)", "orig(21)"]);
}

#[test]
fn before_returns_original_value() {
    let t = trace();
    let mut hooked = before(traced("orig", &t), |_| {});
    assert_eq!(hooked(5), 10);
}

// --- after ---

#[test]
fn after_runs_hook_second_with_same_args() {
    let t = trace();
    let mut hooked = {
        let t2 = Rc::clone(&t);
        after(traced("orig", &t), move |n| t2.borrow_mut().push(format!("hook({n})")))
    };
    let ret = hooked(7);
    assert_eq!(ret, 14);
    assert_eq!(*t.borrow(), vec!["orig(7)", "hook(7)"]);
}

#[test]
fn after_ignores_hook_for_return_value() {
    let t = trace();
    let mut hooked = after(traced("orig", &t), |_| {});
    assert_eq!(hooked(3), 6);
}

// --- replace ---

#[test]
fn replace_never_invokes_original() {
    let t = trace();
    let mut hooked = replace(traced("orig", &t), |n: i32| n + 100);
    assert_eq!(hooked(1), 101);
    assert!(t.borrow().is_empty());
}

// --- replace_delegating ---

#[test]
fn replace_delegating_can_call_through() {
    let t = trace();
    let mut hooked = replace_delegating(traced("orig", &t), |orig, n| orig(n) + 1);
    assert_eq!(hooked(10), 21);
    assert_eq!(*t.borrow(), vec!["orig(10)"]);
}

#[test]
fn replace_delegating_can_skip_original() {
    let t = trace();
    let mut hooked = replace_delegating(traced("orig", &t), |orig, n| {
        if n > 0 { orig(n) } else { 0 }
    });
    assert_eq!(hooked(-1), 0);
    assert!(t.borrow().is_empty());
    assert_eq!(hooked(2), 4);
    assert_eq!(*t.borrow(), vec!["orig(2)"]);
}

// --- composition ---

#[test]
fn wrappers_compose() {
    let t = trace();
    let inner = {
        let t2 = Rc::clone(&t);
        before(traced("orig", &t), move |n| t2.borrow_mut().push(format!("b({n})")))
    };
    let mut outer = {
        let t2 = Rc::clone(&t);
        after(inner, move |n| t2.borrow_mut().push(format!("a({n})")))
    };
    assert_eq!(outer(4), 8);
    assert_eq!(*t.borrow(), vec!["b(4)", "orig(4)", "a(4)"]);
}

#[test]
fn hooks_can_mutate_captured_state() {
    let count = Rc::new(RefCell::new(0));
    let c2 = Rc::clone(&count);
    let mut hooked = before(Box::new(|n: i32| n) as Call<i32, i32>, move |_| {
        *c2.borrow_mut() += 1;
    });
    hooked(1);
    hooked(2);
    hooked(3);
    assert_eq!(*count.borrow(), 3);
}
