// results/uid.rs
//! Unique id sources for unified results

use uuid::Uuid;

/// Produces one opaque, process-unique id per call
pub trait UidGenerator {
    fn generate(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl UidGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable ids ("uid-0", "uid-1", ...) for fixtures and snapshots
#[derive(Debug, Clone)]
pub struct SequentialUidGenerator {
    prefix: String,
    next: u64,
}

impl SequentialUidGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 0,
        }
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

impl Default for SequentialUidGenerator {
    fn default() -> Self {
        Self::new("uid")
    }
}

impl UidGenerator for SequentialUidGenerator {
    fn generate(&mut self) -> String {
        let uid = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        uid
    }
}

impl<F> UidGenerator for F
where
    F: FnMut() -> String,
{
    fn generate(&mut self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_unique() {
        let mut generator = UuidGenerator;
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_sequential_generator() {
        let mut generator = SequentialUidGenerator::new("r");
        assert_eq!(generator.generate(), "r-0");
        assert_eq!(generator.generate(), "r-1");
        assert_eq!(generator.issued(), 2);
    }

    #[test]
    fn test_closure_generator() {
        let mut calls = 0;
        let mut generator = || {
            calls += 1;
            format!("c{}", calls)
        };
        assert_eq!(UidGenerator::generate(&mut generator), "c1");
    }
}
