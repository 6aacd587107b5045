use std::fs;
use xyzsort::core::io::{traits::MolecularFile, xyz::XyzFile};
use xyzsort::engine::config::ReorderConfig;
use xyzsort::engine::error::EngineError;
use xyzsort::workflows;

const METHANOL_SOURCE: &str = "\
6
frame 42 from md run
H       1.0250000000   -0.9130000000   -0.0100000000
C      -0.0470000000    0.6640000000    0.0000000000
O      -0.0470000000   -0.7630000000    0.0000000000
H      -1.0860000000    0.9750000000    0.0000000000
H       0.4380000000    1.0820000000    0.8860000000
H       0.4380000000    1.0820000000   -0.8860000000
";

const METHANOL_TEMPLATE: &str = "\
6
reference ordering
C      -0.0460000000    0.6650000000    0.0010000000
O      -0.0480000000   -0.7620000000   -0.0010000000
H       0.9000000000   -1.0000000000    0.0000000000
H      -1.0800000000    0.9800000000    0.0000000000
H       0.4400000000    1.0800000000    0.8800000000
H       0.4400000000    1.0800000000   -0.8800000000
";

#[test]
fn reorders_a_file_to_template_order() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = temp_dir.path().join("input.xyz");
    let template = temp_dir.path().join("template.xyz");
    let output = temp_dir.path().join("output.xyz");
    fs::write(&input, METHANOL_SOURCE).unwrap();
    fs::write(&template, METHANOL_TEMPLATE).unwrap();

    let mut source_set = XyzFile::read_from_path(&input).unwrap();
    let template_set = XyzFile::read_from_path(&template).unwrap();
    let report =
        workflows::reorder::run(&mut source_set, &template_set, &ReorderConfig::default())
            .unwrap();
    XyzFile::write_to_path(&source_set, &output).unwrap();

    assert_eq!(report.assignment.source_indices(), vec![1, 2, 0, 3, 4, 5]);

    let written = XyzFile::read_from_path(&output).unwrap();
    assert_eq!(written.header()[1], "frame 42 from md run");
    let species: Vec<&str> = written.atoms().iter().map(|a| a.species.as_str()).collect();
    assert_eq!(species, vec!["C", "O", "H", "H", "H", "H"]);
    assert_eq!(written.atoms()[2].position.x, 1.025);
}

#[test]
fn rewriting_an_already_formatted_file_is_stable() {
    let set = XyzFile::read_from(&mut METHANOL_SOURCE.as_bytes()).unwrap();
    let mut buffer = Vec::new();
    XyzFile::write_to(&set, &mut buffer).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), METHANOL_SOURCE);
}

#[test]
fn failed_reorder_leaves_source_set_intact() {
    let mut source_set = XyzFile::read_from(&mut METHANOL_SOURCE.as_bytes()).unwrap();
    let template_set =
        XyzFile::read_from(&mut "1\nx\nN 0.0 0.0 0.0\n".as_bytes()).unwrap();
    let before = source_set.clone();

    let err = workflows::reorder::run(&mut source_set, &template_set, &ReorderConfig::default())
        .unwrap_err();

    assert!(matches!(err, EngineError::NoMatch { .. }));
    assert_eq!(source_set, before);
}
