use crate::core::models::atom_set::AtomSet;
use crate::core::utils::geometry::calculate_rmsd;
use crate::engine::config::ReorderConfig;
use crate::engine::error::EngineError;
use crate::engine::reorder::{self, Assignment};
use nalgebra::Point3;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ReorderReport {
    pub assignment: Assignment,
    /// RMSD between the reordered source and the template, if any atoms remain.
    pub rmsd: Option<f64>,
    pub max_distance: Option<f64>,
    /// Number of matches farther apart than the configured warning distance.
    pub distant_matches: usize,
}

#[instrument(skip_all, name = "reorder_workflow")]
pub fn run(
    source: &mut AtomSet,
    template: &AtomSet,
    config: &ReorderConfig,
) -> Result<ReorderReport, EngineError> {
    info!(
        "Reordering {} source atom(s) against a template of {} atom(s).",
        source.len(),
        template.len()
    );
    check_composition(source, template);

    let assignment = reorder::compute_assignment(source, template)?;
    debug!("Computed permutation: {:?}", assignment.source_indices());

    let distant_matches = match config.warn_distance {
        Some(limit) => report_distant_matches(&assignment, template, limit),
        None => 0,
    };

    assignment.apply(source)?;

    let reordered: Vec<Point3<f64>> = source.positions().copied().collect();
    let reference: Vec<Point3<f64>> = template.positions().copied().collect();
    let rmsd = calculate_rmsd(&reordered, &reference);
    let max_distance = assignment.max_distance();

    match (rmsd, max_distance) {
        (Some(rmsd), Some(max)) => info!(
            "Reorder complete: RMSD to template {:.6}, largest displacement {:.6}.",
            rmsd, max
        ),
        _ => info!("Reorder complete: template has no atoms."),
    }

    Ok(ReorderReport {
        assignment,
        rmsd,
        max_distance,
        distant_matches,
    })
}

fn check_composition(source: &AtomSet, template: &AtomSet) {
    if template.len() > source.len() {
        warn!(
            "Template has more atoms ({}) than the source ({}); a unique assignment is impossible.",
            template.len(),
            source.len()
        );
    }

    let source_counts = source.species_counts();
    let template_counts = template.species_counts();
    debug!("Source composition: {:?}", source_counts);
    debug!("Template composition: {:?}", template_counts);

    if source_counts != template_counts {
        warn!(
            "Species composition differs between source {:?} and template {:?}.",
            source_counts, template_counts
        );
    }
}

fn report_distant_matches(assignment: &Assignment, template: &AtomSet, limit: f64) -> usize {
    let mut count = 0;
    for m in assignment.matches().iter().filter(|m| m.distance > limit) {
        let species = template
            .atom(m.template_index)
            .map_or("?", |atom| atom.species.as_str());
        warn!(
            "Template atom {} ({}) matched source atom {} at distance {:.4}, above the warning distance {:.4}.",
            m.template_index, species, m.source_index, m.distance, limit
        );
        count += 1;
    }
    count
}
