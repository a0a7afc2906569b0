//! tests/api/spec.rs
use claims::{assert_none, assert_some};
use wordfreq::filter::{FilterConfig, FilterMode};
use wordfreq::spec::JobSpec;

#[test]
fn you_should_be_able_to_create_a_job_spec() {
    let spec = JobSpec::new(FilterConfig::default());

    assert!(spec.inputs().is_empty());
    assert_none!(spec.output_dir());
    assert_eq!(spec.filter().mode, FilterMode::None);
    assert!(!spec.filter().case_sensitive);
}

#[test]
fn you_should_be_able_to_add_inputs_to_a_job_spec() {
    let mut spec = JobSpec::new(FilterConfig::default());

    for i in 0..5 {
        spec.add_input(format!("input_{i}.txt"));
    }

    assert_eq!(spec.inputs().len(), 5);
    for (i, input) in spec.inputs().iter().enumerate() {
        assert_eq!(input.to_str().unwrap(), format!("input_{i}.txt"));
    }
}

#[test]
fn you_should_be_able_to_define_an_output_dir_on_a_job_spec() {
    let mut spec = JobSpec::new(FilterConfig::default());
    assert_none!(spec.output_dir());

    spec.set_output_dir("/tmp/wordfreq/out");

    let output_dir = assert_some!(spec.output_dir());
    assert_eq!(output_dir.to_str().unwrap(), "/tmp/wordfreq/out");
}

#[test]
fn a_job_spec_carries_its_filtering_surface() {
    let spec = JobSpec::new(FilterConfig {
        mode: FilterMode::ExactMatch,
        case_sensitive: true,
        side_files: vec!["stopwords.txt".into()],
    });

    assert_eq!(spec.filter().mode, FilterMode::ExactMatch);
    assert!(spec.filter().case_sensitive);
    assert_eq!(spec.filter().side_files.len(), 1);
}
