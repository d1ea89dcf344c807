//! # lab-statistics
//!
//! A Rust library for statistical analysis of laboratory measurements.
//!
//! This crate is the analysis engine behind a lab record-keeping application: it takes
//! labeled groups of numeric observations (optionally paired) and computes parametric and
//! non-parametric hypothesis tests, turning test statistics into p-values with in-crate
//! t, F, and chi-square distribution machinery.
//!
//! ## Core Features
//!
//! - **Hypothesis Tests**: one-sample, two-sample (Student's/Welch's), and paired t-tests,
//!   one-way ANOVA, and the Kruskal-Wallis rank test
//! - **Uniform Results**: every test emits the same [`testing::TestResult`] shape, so
//!   reporting layers need no per-test branching
//! - **Distribution Machinery**: CDFs, quantiles, and tail probabilities for Student's t,
//!   F, and chi-square, evaluated by incomplete beta/gamma expansions with a fixed
//!   iteration and tolerance budget
//! - **Batch Execution**: the same test fanned out across many independent experiments
//!   in parallel
//!
//! ## Quick Start
//!
//! Build a [`sample::SampleSet`] from labeled observation groups and hand it to
//! [`testing::inference::run_test`] with a [`testing::TestMethod`]. Tests that need only
//! one or two groups are also exposed directly in [`testing::inference::parametric`] and
//! [`testing::inference::nonparametric`].
//!
//! ## Module Organization
//!
//! - **[`sample`]**: the `Sample`/`SampleSet` data model and its invariants
//! - **[`summary`]**: means, variances, standard errors, rank transforms, group descriptives
//! - **[`distribution`]**: continuous reference distributions and p-value helpers
//! - **[`testing`]**: hypothesis tests, result shapes, effect sizes, batch execution
//! - **[`error`]**: the typed error surface shared by the whole engine

pub mod distribution;
pub mod error;
pub mod sample;
pub mod summary;
pub mod testing;
