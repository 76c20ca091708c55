use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Clone, Default)]
struct FakeBody(Rc<RefCell<String>>);

impl OverflowStyle for FakeBody {
    fn overflow(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_overflow(&self, value: &str) {
        *self.0.borrow_mut() = value.to_owned();
    }
}

#[test]
fn acquire_sets_hidden_and_remembers_previous() {
    let body = FakeBody::default();
    *body.0.borrow_mut() = "auto".to_owned();
    let lock = ScrollLock::acquire(body.clone());
    assert_eq!(body.overflow(), LOCKED_OVERFLOW);
    assert_eq!(lock.previous(), "auto");
}

#[test]
fn drop_restores_previous_value() {
    let body = FakeBody::default();
    *body.0.borrow_mut() = "scroll".to_owned();
    {
        let _lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.overflow(), "hidden");
    }
    assert_eq!(body.overflow(), "scroll");
}

#[test]
fn drop_restores_empty_inline_style() {
    let body = FakeBody::default();
    drop(ScrollLock::acquire(body.clone()));
    assert_eq!(body.overflow(), "");
}

#[test]
fn restore_happens_during_unwind() {
    let body = FakeBody::default();
    *body.0.borrow_mut() = "visible".to_owned();
    let inner = body.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _lock = ScrollLock::acquire(inner);
        panic!("teardown");
    }));
    assert!(result.is_err());
    assert_eq!(body.overflow(), "visible");
}
