//! Identity of the thread issuing a log call

use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

// Thread-local cache so the id is assigned once and the name is read once
thread_local! {
    static CURRENT: RefCell<Option<ThreadIdentity>> = const { RefCell::new(None) };
}

/// Numeric id plus optional thread name, rendered for `%thread%`.
///
/// Ids are process-unique and handed out in the order threads first log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadIdentity {
    pub id: u64,
    pub name: Option<String>,
}

impl ThreadIdentity {
    pub fn current() -> Self {
        CURRENT.with(|cache| {
            cache
                .borrow_mut()
                .get_or_insert_with(|| ThreadIdentity {
                    id: NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed),
                    name: std::thread::current().name().map(String::from),
                })
                .clone()
        })
    }
}

impl fmt::Display for ThreadIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", name, self.id),
            None => write!(f, "Thread {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unnamed() {
        let identity = ThreadIdentity { id: 1, name: None };
        assert_eq!(identity.to_string(), "Thread 1");
    }

    #[test]
    fn test_display_named() {
        let identity = ThreadIdentity {
            id: 7,
            name: Some("worker".to_string()),
        };
        assert_eq!(identity.to_string(), "worker 7");
    }

    #[test]
    fn test_stable_within_thread() {
        assert_eq!(ThreadIdentity::current(), ThreadIdentity::current());
    }

    #[test]
    fn test_distinct_across_threads() {
        let here = ThreadIdentity::current();
        let there = std::thread::spawn(ThreadIdentity::current)
            .join()
            .unwrap();
        assert_ne!(here.id, there.id);
        assert_eq!(there.name, None);
    }

    #[test]
    fn test_named_thread() {
        let identity = std::thread::Builder::new()
            .name("io-pool".to_string())
            .spawn(ThreadIdentity::current)
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(identity.name.as_deref(), Some("io-pool"));
        assert!(identity.to_string().starts_with("io-pool "));
    }
}
