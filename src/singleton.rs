// Singleton Pattern with OnceLock
// One process-wide instance, created on first access and never replaced.

use crate::console::Console;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Singleton {
    serial: usize,
}

impl Singleton {
    /// The shared instance. The first caller initializes it; every later
    /// call, from any thread, gets the same reference.
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| Singleton {
            serial: INITIALIZATIONS.fetch_add(1, Ordering::SeqCst) + 1,
        })
    }

    pub fn serial(&self) -> usize {
        self.serial
    }

    /// How many times the initializer has run. Never exceeds one.
    pub fn initializations() -> usize {
        INITIALIZATIONS.load(Ordering::SeqCst)
    }
}

pub fn singleton_example(console: &Console) {
    let first = Singleton::instance();
    let second = Singleton::instance();
    console.say(format!("{}", std::ptr::eq(first, second)));
}
