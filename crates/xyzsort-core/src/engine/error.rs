use crate::core::models::atom_set::IndexError;
use thiserror::Error;

/// A source atom that was the nearest match for more than one template position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentConflict {
    pub source_index: usize,
    pub template_indices: Vec<usize>,
}

fn describe_conflicts(conflicts: &[AssignmentConflict]) -> String {
    conflicts
        .iter()
        .map(|c| {
            let positions: Vec<String> = c.template_indices.iter().map(|i| i.to_string()).collect();
            format!(
                "source atom {} <- template atoms [{}]",
                c.source_index,
                positions.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No atom of species '{species}' in source to match template atom {template_index}")]
    NoMatch {
        template_index: usize,
        species: String,
    },

    #[error(
        "Unambiguous assignment not possible: {}",
        describe_conflicts(.conflicts)
    )]
    AmbiguousAssignment { conflicts: Vec<AssignmentConflict> },

    #[error("Assignment does not fit the atom set: {0}")]
    Index(#[from] IndexError),
}
