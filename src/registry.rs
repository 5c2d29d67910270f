//! Rule registry.
//!
//! An *app definition* is a named boolean predicate over a
//! [`WindowDescriptor`].  Definitions are collected in a [`RegistryBuilder`]
//! during setup and then frozen into a [`RuleRegistry`], whose rules are
//! sorted once by descending priority.  Equal priorities keep registration
//! order.
//!
//! Higher priorities exist for specialisations: a "YouTube tab" rule must be
//! tried before the generic "browser" rule or it would never fire.
//!
//! ```
//! use appglyph::registry::RegistryBuilder;
//!
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .register("terminal", 0, |w| w.class() == Some("XTerm"))
//!     .unwrap();
//! let registry = builder.build();
//! assert_eq!(registry.rules()[0].app_name(), "terminal");
//! ```

use crate::window::WindowDescriptor;
use log::debug;
use std::collections::HashSet;
use std::fmt;

/// Boxed error a fallible predicate may return.
pub type PredicateFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

type BoxedPredicate = Box<dyn Fn(&WindowDescriptor) -> Result<bool, PredicateFailure> + Send + Sync>;

/// Two rules were registered under the same app name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("app definition {0:?} is already registered")]
pub struct DuplicateAppNameError(pub String);

/// A single app definition.
pub struct Rule {
    app_name: String,
    priority: i32,
    predicate: BoxedPredicate,
}

impl Rule {
    /// Key looked up in the glyph mapping.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Evaluate the predicate against `window`.
    pub fn evaluate(&self, window: &WindowDescriptor) -> Result<bool, PredicateFailure> {
        (self.predicate)(window)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("app_name", &self.app_name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Collects rules during the setup phase.
///
/// App names are unique: a second registration under a name already taken
/// fails with [`DuplicateAppNameError`] instead of shadowing the first.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    rules: Vec<Rule>,
    names: HashSet<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an infallible predicate.
    pub fn register<F>(
        &mut self,
        app_name: impl Into<String>,
        priority: i32,
        predicate: F,
    ) -> Result<&mut Self, DuplicateAppNameError>
    where
        F: Fn(&WindowDescriptor) -> bool + Send + Sync + 'static,
    {
        self.register_fallible(app_name, priority, move |w| Ok(predicate(w)))
    }

    /// Register a predicate that may fail on inputs it cannot handle.
    ///
    /// Failures are not swallowed at resolution time; they surface as a
    /// [`PredicateEvaluationError`](crate::resolver::PredicateEvaluationError).
    pub fn register_fallible<F>(
        &mut self,
        app_name: impl Into<String>,
        priority: i32,
        predicate: F,
    ) -> Result<&mut Self, DuplicateAppNameError>
    where
        F: Fn(&WindowDescriptor) -> Result<bool, PredicateFailure> + Send + Sync + 'static,
    {
        let app_name = app_name.into();
        if !self.names.insert(app_name.clone()) {
            return Err(DuplicateAppNameError(app_name));
        }
        self.rules.push(Rule {
            app_name,
            priority,
            predicate: Box::new(predicate),
        });
        Ok(self)
    }

    /// Number of rules registered so far.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Close the setup phase and sort rules into evaluation order.
    pub fn build(self) -> RuleRegistry {
        let mut rules = self.rules;
        // `sort_by_key` is stable, so ties stay in registration order.
        rules.sort_by_key(|r| std::cmp::Reverse(r.priority));
        debug!("built rule registry with {} app definitions", rules.len());
        RuleRegistry { rules }
    }
}

/// Immutable, priority-ordered set of app definitions.
///
/// `RuleRegistry` is `Send + Sync`; once built it can be shared between
/// threads without locking.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// All rules, highest priority first.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by app name.
    pub fn get(&self, app_name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.app_name == app_name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(registry: &RuleRegistry) -> Vec<&str> {
        registry.rules().iter().map(Rule::app_name).collect()
    }

    #[test]
    fn sorted_by_descending_priority() {
        let mut b = RegistryBuilder::new();
        b.register("low", -1, |_| true).unwrap();
        b.register("mid", 0, |_| true).unwrap();
        b.register("high", 5, |_| true).unwrap();
        let reg = b.build();
        assert_eq!(names(&reg), ["high", "mid", "low"]);
        let prios: Vec<i32> = reg.rules().iter().map(Rule::priority).collect();
        assert!(prios.windows(2).all(|p| p[0] >= p[1]));
    }

    #[test]
    fn ties_keep_registration_order() {
        let mut b = RegistryBuilder::new();
        for name in ["a", "b", "c", "d"] {
            b.register(name, 0, |_| false).unwrap();
        }
        b.register("first", 3, |_| false).unwrap();
        b.register("e", 0, |_| false).unwrap();
        b.register("second", 3, |_| false).unwrap();
        let reg = b.build();
        assert_eq!(names(&reg), ["first", "second", "a", "b", "c", "d", "e"]);
    }

    #[test]
    fn duplicate_app_name_rejected() {
        let mut b = RegistryBuilder::new();
        b.register("browser", 0, |_| true).unwrap();
        let err = b.register("browser", 10, |_| false).unwrap_err();
        assert_eq!(err, DuplicateAppNameError("browser".into()));

        let err = b
            .register_fallible("browser", -3, |_| Ok(true))
            .unwrap_err();
        assert_eq!(err.0, "browser");
        // The original registration is untouched.
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn app_names_are_case_sensitive() {
        let mut b = RegistryBuilder::new();
        b.register("Browser", 0, |_| true).unwrap();
        assert!(b.register("browser", 0, |_| true).is_ok());
        assert_eq!(b.build().len(), 2);
    }

    #[test]
    fn duplicate_error_message() {
        let err = DuplicateAppNameError("zeal".into());
        assert_eq!(err.to_string(), r#"app definition "zeal" is already registered"#);
    }

    #[test]
    fn rule_evaluates_predicate() {
        let mut b = RegistryBuilder::new();
        b.register("steam", 0, |w| w.class() == Some("Steam")).unwrap();
        let reg = b.build();
        let rule = reg.get("steam").unwrap();
        assert!(rule.evaluate(&WindowDescriptor::new().with_class("Steam")).unwrap());
        assert!(!rule.evaluate(&WindowDescriptor::new()).unwrap());
        assert!(reg.get("missing").is_none());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleRegistry>();
    }
}
