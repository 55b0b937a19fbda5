use std::fmt;
use std::sync::Arc;

/// One SRV answer: where a service instance lives and how preferred it is.
///
/// Lower `priority` is preferred; `weight` is the relative selection
/// probability among targets sharing a priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SrvTarget {
    pub host: Arc<str>,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

impl SrvTarget {
    pub fn new(host: impl Into<Arc<str>>, port: u16, priority: u16, weight: u16) -> Self {
        Self {
            host: host.into(),
            port,
            priority,
            weight,
        }
    }
}

impl fmt::Display for SrvTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} (priority={}, weight={})",
            self.host, self.port, self.priority, self.weight
        )
    }
}
