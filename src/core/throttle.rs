/// Rate limiter for drag insertions
#[derive(Debug, Clone)]
pub struct InsertionThrottle {
    min_interval_ms: f64,
    last_insert: Option<f64>,
}

impl InsertionThrottle {
    /// Creates a throttle allowing one insertion per `min_interval_ms`
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_insert: None,
        }
    }

    /// Returns true and records `now` if an insertion is allowed at `now`
    pub fn try_acquire(&mut self, now: f64) -> bool {
        if let Some(last) = self.last_insert {
            if now - last < self.min_interval_ms {
                return false;
            }
        }
        self.last_insert = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inserts_inside_the_interval() {
        let mut throttle = InsertionThrottle::new(150.0);
        assert!(throttle.try_acquire(1000.0));
        assert!(!throttle.try_acquire(1100.0));
        assert!(!throttle.try_acquire(1149.9));
        assert!(throttle.try_acquire(1150.0));
    }
}
