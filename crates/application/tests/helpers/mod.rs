#![allow(dead_code)]

use async_trait::async_trait;
use gotify_srv_application::ports::{RandomSource, SrvResolver};
use gotify_srv_domain::SrvTarget;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;

pub struct MockSrvResolver {
    answer: Mutex<Option<SrvTarget>>,
    domains: Mutex<Vec<String>>,
    call_count: AtomicU64,
}

impl MockSrvResolver {
    pub fn new() -> Self {
        Self {
            answer: Mutex::new(None),
            domains: Mutex::new(Vec::new()),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn answering(target: SrvTarget) -> Self {
        let resolver = Self::new();
        *resolver.answer.lock().unwrap() = Some(target);
        resolver
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.domains.lock().unwrap().clone()
    }
}

#[async_trait]
impl SrvResolver for MockSrvResolver {
    async fn resolve_srv(&self, domain: &str) -> Option<SrvTarget> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.domains.lock().unwrap().push(domain.to_string());
        self.answer.lock().unwrap().clone()
    }
}

/// Always returns the same draw, clamped into range.
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn next_below(&self, bound: u32) -> u32 {
        self.0.min(bound - 1)
    }
}

/// Returns 0, 1, 2, ... modulo the requested bound.
pub struct SequenceRandom {
    next: AtomicU32,
}

impl SequenceRandom {
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&self, bound: u32) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed) % bound
    }
}

pub fn target(host: &str, priority: u16, weight: u16) -> SrvTarget {
    SrvTarget::new(host, 443, priority, weight)
}
