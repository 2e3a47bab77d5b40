//! Name → factory table for representation kinds.

use std::fmt;

use rustc_hash::FxHashMap;

use super::{AxesRepresentation, Representation};
use crate::error::AxesError;
use crate::options::Options;

/// Builds a fresh representation from the current options.
pub type RepresentationFactory =
    Box<dyn Fn(&Options) -> Box<dyn Representation> + Send + Sync>;

/// Maps representation names to factories.
///
/// Built explicitly by the host (usually via [`with_defaults`]) and torn down
/// with [`clear`]; there is no implicit global instance.
///
/// [`with_defaults`]: Self::with_defaults
/// [`clear`]: Self::clear
#[derive(Default)]
pub struct RepresentationRegistry {
    factories: FxHashMap<String, RepresentationFactory>,
}

impl RepresentationRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in representation.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let _ = registry.register(AxesRepresentation::KIND, |options| {
            Box::new(AxesRepresentation::new(&options.axes))
        });
        registry
    }

    /// Register `factory` under `name`, returning the factory it replaced.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Option<RepresentationFactory>
    where
        F: Fn(&Options) -> Box<dyn Representation> + Send + Sync + 'static,
    {
        let name = name.into();
        log::debug!("registering representation '{name}'");
        self.factories.insert(name, Box::new(factory))
    }

    /// Remove the factory registered under `name`.
    pub fn unregister(&mut self, name: &str) -> Option<RepresentationFactory> {
        self.factories.remove(name)
    }

    /// Remove every factory.
    pub fn clear(&mut self) {
        self.factories.clear();
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Instantiate the representation registered under `name`.
    pub fn create(
        &self,
        name: &str,
        options: &Options,
    ) -> Result<Box<dyn Representation>, AxesError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| AxesError::UnknownRepresentation(name.to_owned()))?;
        Ok(factory(options))
    }
}

impl fmt::Debug for RepresentationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepresentationRegistry")
            .field("names", &self.names())
            .finish()
    }
}
