//! 1회성 알림(경고/안내) 중복 제거 레지스트리.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// 키별로 최초 1회만 콜백을 실행한다. 등록된 키는 지워지지 않는다.
#[derive(Debug, Default)]
pub struct NotifyOnce {
    seen: Mutex<HashSet<String>>,
}

impl NotifyOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// 처음 보는 키면 `emit`을 실행하고 `true`를 반환한다.
    ///
    /// 삽입은 잠금 안에서 끝나므로 여러 스레드가 동시에 호출해도
    /// `emit`은 키당 정확히 한 번만 실행된다.
    pub fn notify_once<F: FnOnce()>(&self, key: &str, emit: F) -> bool {
        let inserted = self
            .seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string());
        if inserted {
            emit();
        }
        inserted
    }

    pub fn has_notified(&self, key: &str) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn emits_once_per_key_across_threads() {
        let registry = Arc::new(NotifyOnce::new());
        let emitted = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let emitted = Arc::clone(&emitted);
                thread::spawn(move || {
                    for _ in 0..3 {
                        registry.notify_once("x", || {
                            emitted.fetch_add(1, Ordering::SeqCst);
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(emitted.load(Ordering::SeqCst), 1);
        assert!(registry.has_notified("x"));
        assert!(!registry.has_notified("y"));
    }
}
