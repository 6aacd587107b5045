use super::error::{AssignmentConflict, EngineError};
use crate::core::models::atom::Atom;
use crate::core::models::atom_set::{AtomSet, IndexError};
use crate::core::utils::geometry::find_nearest;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// The source atom chosen for one template position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomMatch {
    pub template_index: usize,
    pub source_index: usize,
    pub distance: f64,
}

/// A validated mapping from template positions to distinct source atoms.
///
/// Produced by [`compute_assignment`]; entry `k` holds the source atom that
/// takes position `k` once the assignment is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    matches: Vec<AtomMatch>,
}

impl Assignment {
    pub fn matches(&self) -> &[AtomMatch] {
        &self.matches
    }

    /// Source indices in template order, i.e. the permutation itself.
    pub fn source_indices(&self) -> Vec<usize> {
        self.matches.iter().map(|m| m.source_index).collect()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn max_distance(&self) -> Option<f64> {
        self.matches.iter().map(|m| m.distance).reduce(f64::max)
    }

    /// Rebuilds the atom sequence of `source` in template order.
    ///
    /// The new sequence is assembled entirely from the current atoms before the
    /// set is written, and then swapped in with a single replacement.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Index`] if the assignment refers to an atom that
    /// `source` does not have; `source` is unchanged in that case.
    pub fn apply(&self, source: &mut AtomSet) -> Result<(), EngineError> {
        let snapshot = source.atoms();
        let reordered = self
            .matches
            .iter()
            .map(|m| {
                snapshot.get(m.source_index).cloned().ok_or(IndexError {
                    index: m.source_index,
                    len: snapshot.len(),
                })
            })
            .collect::<Result<Vec<Atom>, IndexError>>()?;

        source.replace_atoms(reordered);
        Ok(())
    }
}

/// Picks, for every template atom in order, the closest source atom of the
/// same species.
///
/// Source atoms already picked for an earlier template position remain
/// candidates, so two template positions may settle on the same source atom.
/// That outcome is reported as [`EngineError::AmbiguousAssignment`] rather
/// than resolved.
///
/// # Errors
///
/// * [`EngineError::NoMatch`] if a template species is absent from `source`.
/// * [`EngineError::AmbiguousAssignment`] if any source atom is chosen twice.
pub fn compute_assignment(
    source: &AtomSet,
    template: &AtomSet,
) -> Result<Assignment, EngineError> {
    let mut matches = Vec::with_capacity(template.len());

    for (template_index, target) in template.atoms().iter().enumerate() {
        let same_species = |i: usize| source.atoms()[i].is_same_species(target);
        let (source_index, distance) =
            find_nearest(&target.position, source.positions(), same_species).ok_or_else(|| {
                EngineError::NoMatch {
                    template_index,
                    species: target.species.clone(),
                }
            })?;

        trace!(
            template_index,
            source_index,
            distance,
            species = %target.species,
            "Matched template atom."
        );
        matches.push(AtomMatch {
            template_index,
            source_index,
            distance,
        });
    }

    let conflicts = find_conflicts(&matches);
    if !conflicts.is_empty() {
        debug!(
            "{} source atom(s) claimed by more than one template position.",
            conflicts.len()
        );
        return Err(EngineError::AmbiguousAssignment { conflicts });
    }

    Ok(Assignment { matches })
}

/// Reorders `source` in place so that its atom order follows `template`.
///
/// On failure `source` is left exactly as it was.
pub fn reorder(source: &mut AtomSet, template: &AtomSet) -> Result<Assignment, EngineError> {
    let assignment = compute_assignment(source, template)?;
    assignment.apply(source)?;
    Ok(assignment)
}

fn find_conflicts(matches: &[AtomMatch]) -> Vec<AssignmentConflict> {
    let mut claims: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for m in matches {
        claims
            .entry(m.source_index)
            .or_default()
            .push(m.template_index);
    }
    claims
        .into_iter()
        .filter(|(_, template_indices)| template_indices.len() > 1)
        .map(|(source_index, template_indices)| AssignmentConflict {
            source_index,
            template_indices,
        })
        .collect()
}
