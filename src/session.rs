//! Per-recipe conversion state and a store of sessions keyed by caller-chosen keys.

use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use uuid::Uuid;

use crate::error::ScrapeError;
use crate::model::{ParsedIngredient, Recipe, UnitSystem};
use crate::units::{convert_units, scale_servings};

/// Conversion and scaling state for one extracted recipe.
///
/// The snapshot is taken at construction and never changes. Every
/// operation recomputes the current ingredients from it, so a unit change
/// and a serving change compose in either order.
#[derive(Debug, Clone)]
pub struct RecipeSession {
    snapshot: Vec<ParsedIngredient>,
    ingredients: Vec<ParsedIngredient>,
    original_servings: u32,
    requested_servings: Option<f64>,
    original_unit_system: Option<UnitSystem>,
    current_unit_system: Option<UnitSystem>,
}

impl RecipeSession {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            snapshot: recipe.ingredients.clone(),
            ingredients: recipe.ingredients.clone(),
            original_servings: recipe.servings,
            requested_servings: None,
            original_unit_system: recipe.original_unit_system,
            current_unit_system: recipe.original_unit_system,
        }
    }

    /// Switch to `target` units, keeping any serving change already applied.
    pub fn convert_units(&mut self, target: UnitSystem) -> Vec<ParsedIngredient> {
        self.current_unit_system = Some(target);
        self.refresh();
        self.ingredients.clone()
    }

    /// Rescale to `requested` servings, keeping any unit change already applied.
    pub fn set_serving_size(&mut self, requested: f64) -> Result<Vec<ParsedIngredient>, ScrapeError> {
        if !requested.is_finite() || requested <= 0.0 {
            return Err(ScrapeError::InvalidServingSize(requested.to_string()));
        }
        self.requested_servings = Some(requested);
        self.refresh();
        Ok(self.ingredients.clone())
    }

    pub fn ingredients(&self) -> &[ParsedIngredient] {
        &self.ingredients
    }

    /// Ingredients as first extracted.
    pub fn snapshot(&self) -> &[ParsedIngredient] {
        &self.snapshot
    }

    pub fn current_unit_system(&self) -> Option<UnitSystem> {
        self.current_unit_system
    }

    pub fn requested_servings(&self) -> Option<f64> {
        self.requested_servings
    }

    /// Recompute the current ingredients as scale(convert(snapshot)).
    fn refresh(&mut self) {
        let converted = match self.current_unit_system {
            Some(target) if self.current_unit_system != self.original_unit_system => convert_units(
                &self.snapshot,
                target,
                None,
                self.original_servings,
                self.original_unit_system,
                &self.snapshot,
            )
            .unwrap_or_default(),
            _ => self.snapshot.clone(),
        };

        self.ingredients = match self.requested_servings {
            Some(requested) if requested != f64::from(self.original_servings) => {
                scale_servings(&converted, self.original_servings, requested)
            }
            _ => converted,
        };

        debug!(
            "Session refreshed: units={:?}, servings={:?}",
            self.current_unit_system, self.requested_servings
        );
    }
}

/// Sessions by key. Each session has its own lock, so callers working on
/// different recipes never contend.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<RecipeSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `recipe` under `key`, replacing any previous one.
    pub fn insert(&self, key: impl Into<String>, recipe: &Recipe) {
        let key = key.into();
        info!("Opening session '{}' for '{}'", key, recipe.title);
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::new(Mutex::new(RecipeSession::new(recipe))));
    }

    /// Start a session under a freshly generated key and return the key.
    pub fn open(&self, recipe: &Recipe) -> String {
        let key = Uuid::new_v4().to_string();
        self.insert(key.clone(), recipe);
        key
    }

    pub fn remove(&self, key: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn convert_units(&self, key: &str, target: UnitSystem) -> Result<Vec<ParsedIngredient>, ScrapeError> {
        let session = self.session(key)?;
        let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(session.convert_units(target))
    }

    pub fn set_serving_size(&self, key: &str, requested: f64) -> Result<Vec<ParsedIngredient>, ScrapeError> {
        let session = self.session(key)?;
        let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
        session.set_serving_size(requested)
    }

    pub fn ingredients(&self, key: &str) -> Result<Vec<ParsedIngredient>, ScrapeError> {
        let session = self.session(key)?;
        let session = session.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(session.ingredients().to_vec())
    }

    fn session(&self, key: &str) -> Result<Arc<Mutex<RecipeSession>>, ScrapeError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or(ScrapeError::NoActiveRecipe)
    }
}
