use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::{info, warn};
use xyzsort::core::io::{traits::MolecularFile, xyz::XyzFile};
use xyzsort::core::models::atom_set::AtomSet;
use xyzsort::workflows;

fn load_structure(path: &Path, role: &str) -> Result<AtomSet> {
    info!("Loading {} structure from {:?}", role, path);
    let set = XyzFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!("Read {} atom(s) from {:?}", set.len(), path);
    Ok(set)
}

pub fn run(config: &AppConfig) -> Result<()> {
    let mut source = load_structure(&config.input_path, "input")?;
    let template = load_structure(&config.template_path, "template")?;

    info!("Invoking the core reorder workflow...");
    let report = workflows::reorder::run(&mut source, &template, &config.core_config)?;

    if report.distant_matches > 0 {
        warn!(
            "{} atom pair(s) were matched across a large distance; check the result.",
            report.distant_matches
        );
    }

    info!("Writing reordered structure to {:?}", &config.output_path);
    XyzFile::write_to_path(&source, &config.output_path).map_err(|e| CliError::FileWriting {
        path: config.output_path.clone(),
        source: e.into(),
    })?;

    match report.rmsd {
        Some(rmsd) => println!(
            "Reordered {} atom(s) (RMSD to template: {:.4}) written to: {}",
            source.len(),
            rmsd,
            config.output_path.display()
        ),
        None => println!(
            "Template has no atoms; wrote header only to: {}",
            config.output_path.display()
        ),
    }

    Ok(())
}
