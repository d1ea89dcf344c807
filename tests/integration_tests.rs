use approx::{assert_abs_diff_eq, assert_relative_eq};
use lab_statistics::error::StatsError;
use lab_statistics::sample::{Sample, SampleSet};
use lab_statistics::summary;
use lab_statistics::testing::inference::{nonparametric, parametric, run_batch, run_test};
use lab_statistics::testing::{DEFAULT_ALPHA, DegreesOfFreedom, TTestType, TestMethod};

fn sample(label: &str, values: &[f64]) -> Sample {
    Sample::new(label, values.to_vec()).unwrap()
}

#[test]
fn pooled_t_reference_scenario() {
    // A = [1..5] vs B = [6..10]: t = -5.0 exactly, df = 8
    let set = SampleSet::from_groups([
        ("A", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("B", vec![6.0, 7.0, 8.0, 9.0, 10.0]),
    ])
    .unwrap();
    let result = run_test(&set, TestMethod::TwoSampleT(TTestType::Student), DEFAULT_ALPHA).unwrap();

    assert_eq!(result.test_name, "Student t-test");
    assert_abs_diff_eq!(result.statistic, -5.0, epsilon = 1e-12);
    assert_eq!(result.degrees_of_freedom, DegreesOfFreedom::Single(8.0));
    assert!(result.p_value > 0.0005 && result.p_value < 0.002);
    assert!(result.is_significant);
    assert_eq!(result.alpha, DEFAULT_ALPHA);
}

#[test]
fn welch_is_the_default_and_matches_direct_call() {
    let set = SampleSet::from_groups([
        ("A", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("B", vec![2.0, 4.0, 6.0, 8.0, 10.0]),
    ])
    .unwrap();
    let via_default = run_test(
        &set,
        TestMethod::TwoSampleT(TTestType::default()),
        DEFAULT_ALPHA,
    )
    .unwrap();
    assert_eq!(via_default.test_name, "Welch t-test");

    let direct = parametric::two_sample_t_test(
        &set.samples()[0],
        &set.samples()[1],
        TTestType::Welch,
        DEFAULT_ALPHA,
    )
    .unwrap();
    assert_eq!(via_default, direct);
}

#[test]
fn one_sample_null_and_alternative() {
    let s = sample("yield", &[12.1, 11.8, 12.4, 12.0, 11.9, 12.2]);

    let null = parametric::one_sample_t_test(&s, s.mean(), DEFAULT_ALPHA).unwrap();
    assert_abs_diff_eq!(null.statistic, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(null.p_value, 1.0, epsilon = 1e-9);

    let shifted = parametric::one_sample_t_test(&s, 14.0, DEFAULT_ALPHA).unwrap();
    assert!(shifted.p_value < 0.001);
    assert!(shifted.is_significant);
}

#[test]
fn paired_reduces_to_one_sample_on_differences() {
    let before = sample("before", &[210.0, 195.0, 188.0, 222.0, 201.0]);
    let after = sample("after", &[198.0, 190.0, 185.0, 210.0, 199.0]);

    let paired = parametric::paired_t_test(&before, &after, DEFAULT_ALPHA).unwrap();

    let diffs: Vec<f64> = before
        .values()
        .iter()
        .zip(after.values())
        .map(|(x, y)| x - y)
        .collect();
    let one = parametric::one_sample_t_test(&sample("d", &diffs), 0.0, DEFAULT_ALPHA).unwrap();

    assert_abs_diff_eq!(paired.statistic, one.statistic, epsilon = 1e-12);
    assert_abs_diff_eq!(paired.p_value, one.p_value, epsilon = 1e-12);
    assert_eq!(paired.degrees_of_freedom, DegreesOfFreedom::Single(4.0));
}

#[test]
fn anova_two_groups_agrees_with_pooled_t() {
    let set = SampleSet::from_groups([
        ("A", vec![2.9, 3.0, 2.5, 2.6, 3.2]),
        ("B", vec![3.8, 2.7, 4.0, 2.4]),
    ])
    .unwrap();
    let t = run_test(&set, TestMethod::TwoSampleT(TTestType::Student), DEFAULT_ALPHA).unwrap();
    let anova = run_test(&set, TestMethod::OneWayAnova, DEFAULT_ALPHA).unwrap();

    assert_abs_diff_eq!(anova.statistic, t.statistic * t.statistic, epsilon = 1e-6);
    assert_relative_eq!(anova.p_value, t.p_value, epsilon = 1e-9);
}

#[test]
fn anova_identical_groups_is_the_null() {
    let set = SampleSet::from_groups([
        ("g1", vec![1.0, 2.0, 3.0]),
        ("g2", vec![1.0, 2.0, 3.0]),
        ("g3", vec![1.0, 2.0, 3.0]),
    ])
    .unwrap();
    let result = run_test(&set, TestMethod::OneWayAnova, DEFAULT_ALPHA).unwrap();
    assert_abs_diff_eq!(result.statistic, 0.0);
    assert_abs_diff_eq!(result.p_value, 1.0);
    assert!(!result.is_significant);
    assert_eq!(
        result.degrees_of_freedom,
        DegreesOfFreedom::Ratio {
            numerator: 2.0,
            denominator: 6.0
        }
    );
}

#[test]
fn kruskal_wallis_end_to_end() {
    let set = SampleSet::from_groups([
        ("low", vec![1.0, 2.0, 3.0]),
        ("mid", vec![4.0, 5.0, 6.0]),
        ("high", vec![7.0, 8.0, 9.0]),
    ])
    .unwrap();
    let result = run_test(&set, TestMethod::KruskalWallis, DEFAULT_ALPHA).unwrap();
    assert_abs_diff_eq!(result.statistic, 7.2, epsilon = 1e-10);
    assert_abs_diff_eq!(result.p_value, (-3.6f64).exp(), epsilon = 1e-9);
    assert_abs_diff_eq!(result.extra["rank_sum_low"], 6.0);
    assert_abs_diff_eq!(result.extra["rank_sum_mid"], 15.0);
    assert_abs_diff_eq!(result.extra["rank_sum_high"], 24.0);
}

#[test]
fn size_one_groups_split_the_tests() {
    // a singleton is fatal for variance-based tests but fine for ranks
    let set = SampleSet::from_groups([
        ("solo", vec![4.2]),
        ("rest", vec![1.0, 2.0, 3.0]),
    ])
    .unwrap();

    let t = run_test(&set, TestMethod::TwoSampleT(TTestType::Welch), DEFAULT_ALPHA);
    assert_eq!(
        t.unwrap_err(),
        StatsError::InsufficientData {
            group: "solo".to_string(),
            required: 2,
            actual: 1
        }
    );

    let anova = run_test(&set, TestMethod::OneWayAnova, DEFAULT_ALPHA);
    assert!(matches!(anova, Err(StatsError::InsufficientData { .. })));

    let kw = run_test(&set, TestMethod::KruskalWallis, DEFAULT_ALPHA);
    assert!(kw.is_ok());
}

#[test]
fn error_paths_carry_context() {
    let a = sample("before", &[1.0, 2.0, 3.0]);
    let b = sample("after", &[1.0, 2.0]);
    assert_eq!(
        parametric::paired_t_test(&a, &b, DEFAULT_ALPHA).unwrap_err(),
        StatsError::DimensionMismatch { left: 3, right: 2 }
    );

    let err = Sample::new("broken", vec![1.0, f64::NAN]).unwrap_err();
    assert!(err.to_string().contains("broken"));

    let dup = SampleSet::from_groups([("x", vec![1.0]), ("x", vec![2.0])]).unwrap_err();
    assert!(dup.to_string().contains("duplicate group label 'x'"));
}

#[test]
fn significance_respects_custom_alpha() {
    let set = SampleSet::from_groups([
        ("A", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("B", vec![3.5, 4.5, 5.5, 6.5, 7.5]),
    ])
    .unwrap();
    // t = -2.5 on 8 df, p about 0.037: significant at 0.10, not at 0.01
    let loose = run_test(&set, TestMethod::TwoSampleT(TTestType::Student), 0.10).unwrap();
    let strict = run_test(&set, TestMethod::TwoSampleT(TTestType::Student), 0.01).unwrap();
    assert_abs_diff_eq!(loose.p_value, strict.p_value, epsilon = 1e-15);
    assert!(loose.is_significant);
    assert!(!strict.is_significant);
}

#[test]
fn batch_matches_serial_runs() {
    let sets: Vec<SampleSet> = (0..8)
        .map(|i| {
            let shift = i as f64 * 0.5;
            SampleSet::from_groups([
                ("control", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
                ("treated", vec![1.0 + shift, 2.0 + shift, 3.0 + shift, 4.0 + shift, 5.0 + shift]),
            ])
            .unwrap()
        })
        .collect();

    let batch = run_batch(&sets, TestMethod::TwoSampleT(TTestType::Welch), DEFAULT_ALPHA);
    assert_eq!(batch.len(), sets.len());
    for (set, result) in sets.iter().zip(&batch) {
        let serial = run_test(set, TestMethod::TwoSampleT(TTestType::Welch), DEFAULT_ALPHA);
        assert_eq!(*result, serial);
    }
}

#[test]
fn describe_matches_hand_computation() {
    let set = SampleSet::from_groups([("control", vec![1.0, 2.0, 3.0, 4.0, 5.0])]).unwrap();
    let summaries = summary::describe(&set);
    assert_eq!(summaries.len(), 1);
    let s = &summaries[0];
    assert_eq!(s.n, 5);
    assert_abs_diff_eq!(s.mean, 3.0);
    assert_abs_diff_eq!(s.std_dev.unwrap(), 2.5f64.sqrt(), epsilon = 1e-12);
    let sem = s.sem.unwrap();
    let (lo, hi) = s.ci95.unwrap();
    assert_abs_diff_eq!(hi - lo, 2.0 * 1.96 * sem, epsilon = 1e-12);
}

#[test]
fn kruskal_wallis_direct_call_handles_heavy_ties() {
    let set = SampleSet::from_groups([
        ("a", vec![1.0, 1.0, 2.0]),
        ("b", vec![1.0, 2.0, 2.0]),
    ])
    .unwrap();
    let result = nonparametric::kruskal_wallis(&set, DEFAULT_ALPHA).unwrap();
    assert!(result.statistic >= 0.0);
    assert!((0.0..=1.0).contains(&result.p_value));
    assert!(!result.is_significant);
}
