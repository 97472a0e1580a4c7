use std::collections::BTreeMap;

use docmark::{
    features::{Alignment, DocumentFeatures, ImageInfo, Margins, ParagraphInfo, TableInfo},
    grade::{ToleranceBonus, grade_document},
};

fn paragraph(text: &str) -> ParagraphInfo {
    ParagraphInfo {
        text:      text.to_string(),
        length:    text.len(),
        style:     "Normal".to_string(),
        bold:      false,
        italic:    false,
        underline: false,
        fonts:     vec!["Liberation Serif".to_string()],
        sizes:     vec![12.0],
        alignment: Alignment::Left,
    }
}

fn document(texts: &[&str]) -> DocumentFeatures {
    DocumentFeatures {
        paragraphs: texts.iter().map(|text| paragraph(text)).collect(),
        images:     vec![ImageInfo {
            format: "PNG".to_string(),
            width:  640,
            height: 480,
        }],
        tables:     vec![TableInfo { rows: 2, columns: 3 }],
        margins:    Margins(BTreeMap::from([
            ("top".to_string(), "1440".to_string()),
            ("bottom".to_string(), "1440".to_string()),
        ])),
    }
}

#[test]
fn identical_documents_score_one_hundred() {
    let reference = document(&["intro", "body", "outro"]);
    let graded = grade_document(&reference, &reference.clone(), &ToleranceBonus::default());

    assert_eq!(graded.final_score, 100.0);
    assert!(graded.sections.iter().all(|s| s.differences.is_empty()));
    assert_eq!(graded.correct, graded.evaluated);
}

#[test]
fn paragraph_bonus_lifts_the_section_before_aggregation() {
    let reference = document(&["a", "b", "c", "d", "e"]);
    let candidate = document(&["a", "b", "c", "d", "x"]);

    // 4/5 paragraphs match; equal empty counts, so the bonus applies:
    // (80 + 10 + 100 + 100 + 100) / 4 = 97.5.
    let graded = grade_document(&reference, &candidate, &ToleranceBonus::default());
    assert_eq!(graded.final_score, 97.5);
    assert_eq!(graded.sections[0].ratio, 90.0);
}

#[test]
fn large_empty_line_discrepancy_withholds_the_bonus() {
    let reference = document(&["a", "b", "c", "d", "", ""]);
    let candidate = document(&["a", "b", "c", "d"]);

    // 4/6 paragraphs match and the empty counts differ by 2, so no bonus:
    // (66.667 + 100 + 100 + 100) / 4 = 91.67 after rounding.
    let graded = grade_document(&reference, &candidate, &ToleranceBonus::default());
    assert_eq!(graded.final_score, 91.67);
}

#[test]
fn missing_images_zero_that_section_only() {
    let reference = document(&["a"]);
    let mut candidate = reference.clone();
    candidate.images.clear();

    let graded = grade_document(&reference, &candidate, &ToleranceBonus::default());
    let images = graded
        .sections
        .iter()
        .find(|s| s.label == "Images")
        .expect("images section");
    assert_eq!(images.ratio, 0.0);

    // Paragraphs (with bonus capped), tables, and margins still match.
    assert_eq!(graded.final_score, 75.0);
}

#[test]
fn margin_mismatches_are_reported_as_one_entry() {
    let reference = document(&["a"]);
    let mut candidate = reference.clone();
    candidate
        .margins
        .0
        .insert("top".to_string(), "720".to_string());

    let graded = grade_document(&reference, &candidate, &ToleranceBonus::default());
    let margins = graded
        .sections
        .iter()
        .find(|s| s.label == "Margins")
        .expect("margins section");

    assert_eq!(margins.ratio, 0.0);
    assert_eq!(margins.differences.len(), 1);
    assert_eq!(margins.differences[0].position, "1");
    assert!(margins.differences[0].expected.contains("top=1440"));
    assert!(margins.differences[0].actual.contains("top=720"));
}

#[test]
fn formatting_differences_fail_the_paragraph() {
    let reference = document(&["a"]);
    let mut candidate = reference.clone();
    candidate.paragraphs[0].bold = true;

    let graded = grade_document(&reference, &candidate, &ToleranceBonus::default());
    let paragraphs = &graded.sections[0];
    assert_eq!(paragraphs.differences.len(), 1);
    assert!(paragraphs.differences[0].actual.contains("bold true"));
}
