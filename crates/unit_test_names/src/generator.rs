//! Issue names from ordinary code, for build scripts which write out their own functions.
//!
//! A [NameGenerator] stands in for one compilation unit: create one per generated file.  It tracks how many names it
//! has handed out and, unless told otherwise, refuses to hand out the same one twice, which is the same thing rustc
//! would do to a redeclared function except that here it's an [Error::Collision] instead of a build failure further
//! down the line.
use std::collections::HashSet;

use crate::{CounterSource, Error, Result, SequenceCounter, UniqueName};

/// Configuration for a [NameGenerator].
#[derive(Debug, Clone, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct GeneratorConfig {
    /// Where the default counter starts.
    ///
    /// Ignored when a counter source is supplied via [NameGenerator::with_counter].
    #[builder(default)]
    pub first_id: u64,

    /// If set, issuing a name this generator already issued is an error.
    #[builder(default = "true")]
    pub reject_collisions: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            first_id: 0,
            reject_collisions: true,
        }
    }
}

#[derive(Debug)]
pub struct NameGenerator<C: CounterSource = SequenceCounter> {
    counter: C,
    reject_collisions: bool,
    issued: Vec<UniqueName>,
    seen: HashSet<UniqueName>,
}

impl NameGenerator<SequenceCounter> {
    pub fn new() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        NameGenerator {
            counter: SequenceCounter::new(config.first_id),
            reject_collisions: config.reject_collisions,
            issued: vec![],
            seen: HashSet::new(),
        }
    }
}

impl Default for NameGenerator<SequenceCounter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CounterSource> NameGenerator<C> {
    /// Use `counter` in place of the default sequence.
    ///
    /// The replacement is total: the default sequence is not consulted at all.
    pub fn with_counter(counter: C, config: &GeneratorConfig) -> Self {
        log::trace!(
            "Name generator using a substitute counter source; first_id {} ignored",
            config.first_id
        );

        NameGenerator {
            counter,
            reject_collisions: config.reject_collisions,
            issued: vec![],
            seen: HashSet::new(),
        }
    }

    /// Issue a name for `label` as if declared on `line`.
    ///
    /// Always consumes an id from the counter source, even on failure.
    pub fn issue(&mut self, label: &str, line: u32) -> Result<UniqueName> {
        let id = self.counter.next_id();
        let name = UniqueName::synthesize(label, id, line)?;

        if self.reject_collisions && !self.seen.insert(name.clone()) {
            return Err(Error::Collision {
                name: name.to_string(),
            });
        }

        log::debug!("Issued {name} for label {label:?} at line {line}");
        self.issued.push(name.clone());
        Ok(name)
    }

    /// How many names have been issued.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Names in the order they were issued.
    pub fn names(&self) -> impl Iterator<Item = &UniqueName> {
        self.issued.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::FixedCounter;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_foo_on_12_and_13() {
        init_logging();

        let mut generator = NameGenerator::new();
        let a = generator.issue("foo", 12).unwrap();
        let b = generator.issue("foo", 13).unwrap();

        assert_eq!(a.to_string(), "unit_test_foo_0000000000000000000012");
        assert_eq!(b.to_string(), "unit_test_foo_0000000000000000000113");
        assert_eq!(a.declaration_head(), "unit_test_foo_0000000000000000000012 ()");
        assert_eq!(generator.issued(), 2);
    }

    #[test]
    fn test_same_line_different_labels() {
        let mut generator = NameGenerator::new();
        let a = generator.issue("alpha", 40).unwrap();
        let b = generator.issue("beta", 40).unwrap();
        let c = generator.issue("alpha", 40).unwrap();

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(
            generator.names().map(|n| n.id()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_first_id() {
        let config = GeneratorConfigBuilder::default()
            .first_id(900)
            .build()
            .unwrap();
        assert!(config.reject_collisions);

        let mut generator = NameGenerator::from_config(&config);
        assert_eq!(generator.issue("x", 1).unwrap().to_string(), "unit_test_x_000000000000000009001");
    }

    #[test]
    fn test_independent_generators_may_repeat_names() {
        // Two generators are two compilation units.  Identical output is expected, not a bug.
        let mut first = NameGenerator::new();
        let mut second = NameGenerator::new();

        let a = first.issue("foo", 12).unwrap();
        let b = second.issue("foo", 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_counter_collides() {
        init_logging();

        let mut generator = NameGenerator::with_counter(FixedCounter(7), &GeneratorConfig::default());
        let first = generator.issue("foo", 12).unwrap();
        assert_eq!(first.to_string(), "unit_test_foo_0000000000000000000712");

        // Different line, still fine.
        generator.issue("foo", 13).unwrap();

        let err = generator.issue("foo", 12).unwrap_err();
        assert_eq!(
            err,
            Error::Collision {
                name: "unit_test_foo_0000000000000000000712".to_string()
            }
        );
        assert_eq!(generator.issued(), 2);
    }

    #[test]
    fn test_fixed_counter_replaces_default() {
        // If the default sequence were still involved the second id would be 1.
        let mut generator = NameGenerator::with_counter(FixedCounter(7), &GeneratorConfig::default());
        generator.issue("a", 1).unwrap();
        assert_eq!(generator.issue("b", 1).unwrap().id(), 7);
    }

    #[test]
    fn test_collisions_allowed_when_not_rejected() {
        let config = GeneratorConfigBuilder::default()
            .reject_collisions(false)
            .build()
            .unwrap();
        let mut generator = NameGenerator::with_counter(FixedCounter(0), &config);

        let a = generator.issue("foo", 3).unwrap();
        let b = generator.issue("foo", 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(generator.issued(), 2);
    }

    #[test]
    fn test_invalid_label_still_consumes_an_id() {
        let mut generator = NameGenerator::new();
        let err = generator.issue("not valid", 5).unwrap_err();
        assert_eq!(err.name(), "unit_test_not valid_000000000000000000005");

        assert_eq!(generator.issue("valid", 5).unwrap().id(), 1);
        assert_eq!(generator.issued(), 1);
    }

    #[test]
    fn test_non_ascii_label_is_an_error() {
        let mut generator = NameGenerator::new();
        let err = generator.issue("x²", 6).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidIdentifier {
                name: "unit_test_x²_000000000000000000006".to_string()
            }
        );
        assert_eq!(generator.issued(), 0);
    }
}
