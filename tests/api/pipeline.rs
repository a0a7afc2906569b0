//! tests/api/pipeline.rs
use crate::helpers::{scratch_dir, setup_tracing, test_data_dir, test_settings};
use std::collections::HashMap;
use wordfreq::error::SetupError;
use wordfreq::filter::{FilterConfig, FilterMode};
use wordfreq::pipeline::Pipeline;
use wordfreq::spec::JobSpec;

fn spec_over(input: &str, filter: FilterConfig) -> JobSpec {
    let mut spec = JobSpec::new(filter);
    let mut path = test_data_dir();
    path.push(input);
    spec.add_input(path);
    spec
}

fn side_file(name: &str) -> std::path::PathBuf {
    let mut path = test_data_dir();
    path.push(name);
    path
}

#[tokio::test]
async fn an_unfiltered_job_counts_every_word() {
    setup_tracing();
    let spec = spec_over("foxes.txt", FilterConfig::default());
    let pipeline = Pipeline::new(spec, test_settings(2));

    let totals = pipeline.run().await.expect("Failed to run job");

    let expected: HashMap<String, u64> = [("the", 2), ("quick", 1), ("fox", 2), ("lazy", 1)]
        .into_iter()
        .map(|(w, c)| (w.to_string(), c))
        .collect();
    assert_eq!(totals, expected);
}

#[tokio::test]
async fn an_exact_match_filter_removes_stop_words_from_the_totals() {
    setup_tracing();
    let filter = FilterConfig {
        mode: FilterMode::ExactMatch,
        case_sensitive: false,
        side_files: vec![side_file("stopwords.txt")],
    };
    let spec = spec_over("foxes.txt", filter);
    let pipeline = Pipeline::new(spec, test_settings(2));

    let totals = pipeline.run().await.expect("Failed to run job");

    let expected: HashMap<String, u64> = [("quick", 1), ("fox", 2), ("lazy", 1)]
        .into_iter()
        .map(|(w, c)| (w.to_string(), c))
        .collect();
    assert_eq!(totals, expected);
}

#[tokio::test]
async fn pattern_substitution_scrubs_lines_before_counting() {
    setup_tracing();
    let filter = FilterConfig {
        mode: FilterMode::PatternSubstitution,
        case_sensitive: false,
        side_files: vec![side_file("patterns.txt")],
    };
    let spec = spec_over("patterns_input.txt", filter);
    let pipeline = Pipeline::new(spec, test_settings(2));

    let totals = pipeline.run().await.expect("Failed to run job");

    let expected: HashMap<String, u64> = [("baz".to_string(), 1)].into_iter().collect();
    assert_eq!(totals, expected);
}

#[tokio::test]
async fn case_insensitive_jobs_fold_words_together() {
    setup_tracing();
    let spec = spec_over("mixed_case.txt", FilterConfig::default());
    let pipeline = Pipeline::new(spec, test_settings(2));

    let totals = pipeline.run().await.expect("Failed to run job");

    assert_eq!(totals.len(), 1);
    assert_eq!(totals["the"], 3);
}

#[tokio::test]
async fn case_sensitive_jobs_keep_words_apart() {
    setup_tracing();
    let filter = FilterConfig {
        case_sensitive: true,
        ..FilterConfig::default()
    };
    let spec = spec_over("mixed_case.txt", filter);
    let pipeline = Pipeline::new(spec, test_settings(2));

    let totals = pipeline.run().await.expect("Failed to run job");

    assert_eq!(totals.len(), 2);
    assert_eq!(totals["The"], 2);
    assert_eq!(totals["the"], 1);
}

#[tokio::test]
async fn totals_do_not_depend_on_the_worker_count() {
    setup_tracing();
    let mut spec = JobSpec::new(FilterConfig::default());
    let mut path = test_data_dir();
    path.push("corpus.txt");
    spec.add_input(path);

    let single = Pipeline::new(spec.clone(), test_settings(1))
        .run()
        .await
        .expect("Failed to run job");
    let parallel = Pipeline::new(spec, test_settings(4))
        .run()
        .await
        .expect("Failed to run job");

    assert_eq!(single, parallel);
    assert_eq!(parallel["the"], 7);
}

#[tokio::test]
async fn a_job_can_count_across_multiple_input_files() {
    setup_tracing();
    let mut spec = spec_over("foxes.txt", FilterConfig::default());
    let mut path = test_data_dir();
    path.push("mixed_case.txt");
    spec.add_input(path);
    let pipeline = Pipeline::new(spec, test_settings(2));

    let totals = pipeline.run().await.expect("Failed to run job");

    assert_eq!(totals["the"], 5);
    assert_eq!(totals["fox"], 2);
}

#[tokio::test]
async fn a_missing_side_file_fails_the_job_with_zero_output() {
    setup_tracing();
    let out_dir = scratch_dir();
    let filter = FilterConfig {
        mode: FilterMode::ExactMatch,
        case_sensitive: false,
        side_files: vec![side_file("does_not_exist.txt")],
    };
    let mut spec = spec_over("foxes.txt", filter);
    spec.set_output_dir(&out_dir);
    let pipeline = Pipeline::new(spec, test_settings(2));

    let error = pipeline.run().await.expect_err("Job should have failed");

    let setup = error
        .downcast_ref::<SetupError>()
        .expect("expected a setup error");
    assert!(matches!(setup, SetupError::SideFileUnreadable { .. }));
    assert!(!out_dir.join("part-00000").exists());
    std::fs::remove_dir_all(out_dir).expect("Failed to delete dirs");
}

#[tokio::test]
async fn a_malformed_pattern_fails_the_job_at_setup() {
    setup_tracing();
    let dir = scratch_dir();
    let bad_patterns = dir.join("patterns.txt");
    std::fs::write(&bad_patterns, "[unclosed\n").expect("Failed to write test file");

    let filter = FilterConfig {
        mode: FilterMode::PatternSubstitution,
        case_sensitive: false,
        side_files: vec![bad_patterns],
    };
    let spec = spec_over("foxes.txt", filter);
    let pipeline = Pipeline::new(spec, test_settings(2));

    let error = pipeline.run().await.expect_err("Job should have failed");

    let setup = error
        .downcast_ref::<SetupError>()
        .expect("expected a setup error");
    assert!(matches!(setup, SetupError::MalformedPattern { .. }));
    std::fs::remove_dir_all(dir).expect("Failed to delete dirs");
}

#[tokio::test]
async fn the_ambient_configuration_drives_the_engine() {
    setup_tracing();
    let settings = wordfreq::configuration::get_configuration().expect("Failed to get configuration");
    let spec = spec_over("foxes.txt", FilterConfig::default());
    let pipeline = Pipeline::new(spec, settings);

    let totals = pipeline.run().await.expect("Failed to run job");

    assert_eq!(totals["fox"], 2);
}

#[tokio::test]
async fn totals_are_rendered_to_the_output_directory_when_configured() {
    setup_tracing();
    let out_dir = scratch_dir();
    let mut spec = spec_over("foxes.txt", FilterConfig::default());
    spec.set_output_dir(&out_dir);
    let pipeline = Pipeline::new(spec, test_settings(2));

    pipeline.run().await.expect("Failed to run job");

    let rendered = std::fs::read_to_string(out_dir.join("part-00000"))
        .expect("Failed to read output file");
    assert_eq!(rendered, "fox\t2\nlazy\t1\nquick\t1\nthe\t2\n");
    std::fs::remove_dir_all(out_dir).expect("Failed to delete dirs");
}
