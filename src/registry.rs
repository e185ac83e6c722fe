//! Name-based construction of transforms.
//!
//! A [`TransformRegistry`] maps names to zero-argument factories. Build one at
//! startup (usually with [`TransformRegistry::with_defaults`]) and hand it to
//! whoever needs to construct transforms by name.
//!
//! For code that wants a single process-wide registry instead, the free
//! functions at the bottom of this module operate on a lazily initialised
//! instance guarded by a lock.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::defaults;
use crate::error::FftError;
use crate::transform::FourierTransform;

/// Creates a new transform instance on every call.
pub type TransformFactory = Arc<dyn Fn() -> Box<dyn FourierTransform> + Send + Sync>;

/// A set of named transform factories. Names are unique.
#[derive(Default, Clone)]
pub struct TransformRegistry {
    factories: BTreeMap<String, TransformFactory>,
}

impl TransformRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in transforms.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Register `factory` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::DuplicateName`] if `name` is already taken. The
    /// registry is left unchanged in that case.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), FftError>
    where
        F: Fn() -> Box<dyn FourierTransform> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(FftError::DuplicateName(name));
        }

        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Make sure the built-in transforms are registered.
    ///
    /// Built-ins whose name is already present are left alone, so this can be
    /// called any number of times.
    pub fn register_defaults(&mut self) {
        for (name, factory) in defaults::default_factories() {
            self.factories.entry(name.to_string()).or_insert(factory);
        }
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Create a new instance of the transform registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::UnknownName`] if nothing is registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn FourierTransform>, FftError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| FftError::UnknownName(name.to_string()))
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

static GLOBAL_REGISTRY: OnceLock<RwLock<TransformRegistry>> = OnceLock::new();

/// The process-wide registry. Starts out empty.
pub fn global() -> &'static RwLock<TransformRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| RwLock::new(TransformRegistry::new()))
}

// every mutation is a single map insert, so a poisoned registry is still consistent

/// Register a transform factory by name in the process-wide registry.
///
/// # Errors
///
/// Returns [`FftError::DuplicateName`] if `name` is already taken.
pub fn register_transform_factory<F>(name: impl Into<String>, factory: F) -> Result<(), FftError>
where
    F: Fn() -> Box<dyn FourierTransform> + Send + Sync + 'static,
{
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, factory)
}

/// Names registered in the process-wide registry, sorted.
pub fn transform_factory_names() -> Vec<String> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .names()
}

/// Create a transform from the process-wide registry.
///
/// # Errors
///
/// Returns [`FftError::UnknownName`] if nothing is registered under `name`.
pub fn create_transform(name: &str) -> Result<Box<dyn FourierTransform>, FftError> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .create(name)
}

/// Add the built-in transforms to the process-wide registry. Idempotent.
pub fn register_default_factories() {
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register_defaults();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{direct, fast};
    use crate::{DirectFourierTransform, FastFourierTransform};

    fn boxed_direct() -> Box<dyn FourierTransform> {
        Box::new(DirectFourierTransform)
    }

    #[test]
    fn starts_empty() {
        let registry = TransformRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn create_unknown_name_fails() {
        let registry = TransformRegistry::with_defaults();
        let err = registry.create("no.such.transform").err().unwrap();
        assert_eq!(err, FftError::UnknownName("no.such.transform".into()));
    }

    #[test]
    fn duplicate_registration_keeps_the_original() {
        let mut registry = TransformRegistry::new();
        registry.register("mine", boxed_direct).unwrap();

        let err = registry
            .register("mine", || Box::new(FastFourierTransform) as Box<dyn FourierTransform>)
            .unwrap_err();
        assert_eq!(err, FftError::DuplicateName("mine".into()));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.create("mine").unwrap().name(), direct::NAME);
    }

    #[test]
    fn names_are_sorted_and_unique() {
        let mut registry = TransformRegistry::with_defaults();
        registry.register("a.first", boxed_direct).unwrap();
        registry.register("z.last", boxed_direct).unwrap();

        let names = registry.names();
        assert_eq!(
            names,
            vec![
                "a.first".to_string(),
                direct::NAME.to_string(),
                fast::NAME.to_string(),
                "z.last".to_string(),
            ]
        );
    }

    #[test]
    fn defaults_are_idempotent() {
        let mut registry = TransformRegistry::with_defaults();
        registry.register_defaults();
        registry.register_defaults();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(direct::NAME));
        assert!(registry.contains(fast::NAME));
    }

    #[test]
    fn defaults_leave_user_registrations_alone() {
        let mut registry = TransformRegistry::new();
        registry.register(fast::NAME, boxed_direct).unwrap();
        registry.register_defaults();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.create(fast::NAME).unwrap().name(), direct::NAME);
    }

    #[test]
    fn create_builds_fresh_instances() {
        let registry = TransformRegistry::with_defaults();
        let a = registry.create(fast::NAME).unwrap();
        let b = registry.create(fast::NAME).unwrap();
        assert_eq!(a.name(), b.name());
        assert!(!a.is_quadratic());
        assert!(registry.create(direct::NAME).unwrap().is_quadratic());
    }

    #[test]
    fn closures_capture_configuration() {
        let mut registry = TransformRegistry::new();
        for prefer_fast in [false, true] {
            registry
                .register(format!("custom.{prefer_fast}"), move || -> Box<dyn FourierTransform> {
                    if prefer_fast {
                        Box::new(FastFourierTransform)
                    } else {
                        Box::new(DirectFourierTransform)
                    }
                })
                .unwrap();
        }

        assert_eq!(registry.create("custom.true").unwrap().name(), fast::NAME);
        assert_eq!(registry.create("custom.false").unwrap().name(), direct::NAME);
    }

    #[test]
    fn process_wide_registry() {
        register_default_factories();
        register_default_factories();

        let names = transform_factory_names();
        assert!(names.iter().any(|n| n == direct::NAME));
        assert!(names.iter().any(|n| n == fast::NAME));

        register_transform_factory("registry.tests.process_wide", boxed_direct).unwrap();
        assert!(register_transform_factory("registry.tests.process_wide", boxed_direct).is_err());

        let t = create_transform("registry.tests.process_wide").unwrap();
        assert_eq!(t.name(), direct::NAME);
        assert!(create_transform("registry.tests.missing").is_err());
    }
}
