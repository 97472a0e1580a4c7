use docmark::{
    features::{Cell, Grid},
    grade::{Verdict, compare_grids, grade_grid},
};

fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|raw| Cell::parse(raw)).collect())
            .collect(),
    )
}

#[test]
fn reference_equal_to_baseline_evaluates_nothing() {
    let reference = grid(&[&["1", "2"], &["3", "4"]]);
    let baseline = reference.clone();
    let candidate = grid(&[&["9", "9"], &["9", "9"]]);

    let outcome = compare_grids(&reference, &baseline, &candidate);
    assert_eq!(outcome.evaluated, 0);
    assert_eq!(outcome.ratio(), 0.0);
}

#[test]
fn correct_relevant_cell_scores_full_marks() {
    let reference = grid(&[&["1", "2"], &["3", "4"]]);
    let baseline = grid(&[&["1", "x"], &["3", "4"]]);
    let candidate = grid(&[&["1", "2"], &["9", "9"]]);

    let outcome = compare_grids(&reference, &baseline, &candidate);
    assert_eq!(outcome.evaluated, 1);
    assert_eq!(outcome.correct, 1);
    assert_eq!(outcome.ratio(), 100.0);
}

#[test]
fn incorrect_relevant_cell_scores_zero() {
    let reference = grid(&[&["1", "2"], &["3", "4"]]);
    let baseline = grid(&[&["1", "x"], &["3", "4"]]);
    let candidate = grid(&[&["1", "9"], &["9", "9"]]);

    let outcome = compare_grids(&reference, &baseline, &candidate);
    assert_eq!(outcome.evaluated, 1);
    assert_eq!(outcome.correct, 0);
    assert_eq!(outcome.ratio(), 0.0);
}

#[test]
fn every_evaluated_cell_gets_an_entry() {
    let reference = grid(&[&["1", "2"]]);
    let baseline = grid(&[&["x", "x"]]);
    let candidate = grid(&[&["1", "9"]]);

    let outcome = compare_grids(&reference, &baseline, &candidate);
    assert_eq!(outcome.differences.len(), 2);
    assert_eq!(outcome.differences[0].position, "(1, 1)");
    assert_eq!(outcome.differences[0].verdict, Verdict::Correct);
    assert_eq!(outcome.differences[1].position, "(1, 2)");
    assert_eq!(outcome.differences[1].verdict, Verdict::Incorrect);
}

#[test]
fn comparison_is_limited_to_the_candidate_overlap() {
    let reference = grid(&[&["1", "2"], &["3", "4"]]);
    let baseline = grid(&[&["x", "x"], &["x", "x"]]);
    let candidate = grid(&[&["1"]]);

    let outcome = compare_grids(&reference, &baseline, &candidate);
    assert_eq!(outcome.evaluated, 1);
    assert_eq!(outcome.correct, 1);
}

#[test]
fn baseline_smaller_than_reference_reads_as_empty() {
    let reference = grid(&[&["1", "2"]]);
    let baseline = grid(&[&["1"]]);
    let candidate = grid(&[&["1", "2"]]);

    // The baseline has no (1, 2) cell, which reads as empty, so the
    // reference value there is relevant.
    let outcome = compare_grids(&reference, &baseline, &candidate);
    assert_eq!(outcome.evaluated, 1);
    assert_eq!(outcome.correct, 1);
}

#[test]
fn graded_grid_reports_no_evaluated_cells() {
    let reference = grid(&[&["1"]]);
    let graded = grade_grid(&reference, &reference.clone(), &reference.clone());

    assert_eq!(graded.final_score, 0.0);
    assert_eq!(graded.evaluated, 0);
    assert!(graded.note.is_some(), "expected the empty-grid note");
}

#[test]
fn graded_grid_rounds_the_final_score() {
    let reference = grid(&[&["1", "2", "3"]]);
    let baseline = grid(&[&["x", "x", "x"]]);
    let candidate = grid(&[&["1", "9", "9"]]);

    let graded = grade_grid(&reference, &baseline, &candidate);
    assert_eq!(graded.final_score, 33.33);
}
