use hashbrown::HashMap;

use crate::error::{FluxError, Result};

/// Ordered set of transported scalars (species mass fractions, progress
/// variable, mixture fraction, ...). Fixed for the whole run; the order here is
/// the order of every `rho_scalar` container in face states and flux results.
#[derive(Clone, Debug, Default)]
pub struct ScalarRegistry {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}
impl ScalarRegistry {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(FluxError::InvalidParameter(
                    "empty scalar name".to_string(),
                ));
            }
            if registry.indices.contains_key(&name) {
                return Err(FluxError::DuplicateScalar(name));
            }
            registry.indices.insert(name.clone(), registry.names.len());
            registry.names.push(name);
        }
        Ok(registry)
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    pub fn names(&self) -> &[String] {
        &self.names
    }
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.indices
            .get(name)
            .copied()
            .ok_or_else(|| FluxError::UnknownScalar(name.to_string()))
    }
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len != self.len() {
            return Err(FluxError::ScalarCountMismatch {
                expected: self.len(),
                found: len,
            });
        }
        Ok(())
    }
}
