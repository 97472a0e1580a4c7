use docmark::grade::{Difference, ReportSection, Verdict, report};

fn sample_sections() -> Vec<ReportSection> {
    vec![
        ReportSection {
            label:       "Cells".to_string(),
            element:     "Cell".to_string(),
            ratio:       50.0,
            differences: vec![
                Difference {
                    position: "(1, 2)".to_string(),
                    expected: "2".to_string(),
                    actual:   "9".to_string(),
                    verdict:  Verdict::Incorrect,
                },
                Difference {
                    position: "(2, 1)".to_string(),
                    expected: "3".to_string(),
                    actual:   "3".to_string(),
                    verdict:  Verdict::Correct,
                },
            ],
        },
    ]
}

#[test]
fn report_renders_the_expected_layout() {
    let text = report::build("Ana Silva", &sample_sections(), None, 2, 1, 50.0);

    let expected = "\
# Comparison Report for Ana Silva

- Cells: 50% match
- Cell (1, 2): Expected '2', Candidate '9' → Incorrect
- Cell (2, 1): Expected '3', Candidate '3' → Correct

**Total Evaluated**: 2
**Correct**: 1
**Final Score**: 50%
";
    assert_eq!(text, expected);
}

#[test]
fn report_is_deterministic() {
    let first = report::build("Ana Silva", &sample_sections(), None, 2, 1, 50.0);
    let second = report::build("Ana Silva", &sample_sections(), None, 2, 1, 50.0);
    assert_eq!(first, second);
}

#[test]
fn report_includes_the_note_when_present() {
    let text = report::build("Ana", &[], Some("No evaluated cells"), 0, 0, 0.0);
    assert!(text.contains("- No evaluated cells"));
    assert!(text.contains("**Final Score**: 0%"));
}

#[test]
fn report_ratios_are_rounded_for_display() {
    let sections = vec![ReportSection {
        label:       "Paragraphs".to_string(),
        element:     "Paragraph".to_string(),
        ratio:       66.66666,
        differences: Vec::new(),
    }];
    let text = report::build("Ana", &sections, None, 3, 2, 66.67);
    assert!(text.contains("- Paragraphs: 66.67% match"));
}
