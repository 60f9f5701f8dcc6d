//! Local document cache mirroring the host's session-stored data blob.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::record::{Isotopomer, Method};
use crate::selector::OperationResult;

/// The locally cached copy of the data the host keeps in session storage.
/// Insertion order is significant: new records append at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub isotopomers: Vec<Isotopomer>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Document {
    /// Sync the isotopomer list with an accepted operation result.
    pub fn apply_isotopomer(
        &mut self,
        result: &OperationResult<Isotopomer>,
    ) -> Result<(), CoreError> {
        apply_to(&mut self.isotopomers, result)
    }

    /// Sync the method list with an accepted operation result.
    pub fn apply_method(&mut self, result: &OperationResult<Method>) -> Result<(), CoreError> {
        apply_to(&mut self.methods, result)
    }

    /// Serialize the document for the external sync layer.
    pub fn submit(&self) -> Result<Value, CoreError> {
        serde_json::to_value(self)
            .map_err(|err| CoreError::Encode(format!("document: {err}")))
    }
}

fn apply_to<T: Clone>(list: &mut Vec<T>, result: &OperationResult<T>) -> Result<(), CoreError> {
    match result {
        OperationResult::Modify { index, record } => {
            let len = list.len();
            let slot = list
                .get_mut(*index)
                .ok_or(CoreError::IndexOutOfRange { index: *index, len })?;
            *slot = record.clone();
            Ok(())
        }
        OperationResult::Add { index, record } | OperationResult::Duplicate { index, record } => {
            // Append-only: the result's target index must be the end of the
            // list, otherwise the cache drifted from the sync layer.
            if *index != list.len() {
                return Err(CoreError::IndexOutOfRange {
                    index: *index,
                    len: list.len(),
                });
            }
            list.push(record.clone());
            Ok(())
        }
        OperationResult::Delete { index, .. } => {
            if *index >= list.len() {
                return Err(CoreError::IndexOutOfRange {
                    index: *index,
                    len: list.len(),
                });
            }
            list.remove(*index);
            Ok(())
        }
    }
}
