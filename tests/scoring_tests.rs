use docmark::grade::{SectionScore, ToleranceBonus, aggregate, round2};

#[test]
fn rounding_keeps_two_decimals() {
    assert_eq!(round2(66.66666), 66.67);
    assert_eq!(round2(100.0), 100.0);
    assert_eq!(round2(33.333), 33.33);
    assert_eq!(round2(0.004), 0.0);
}

#[test]
fn aggregate_is_the_mean_of_section_ratios() {
    let sections = [
        SectionScore::new("Paragraphs", 80.0),
        SectionScore::new("Images", 100.0),
        SectionScore::new("Tables", 100.0),
        SectionScore::new("Margins", 100.0),
    ];
    assert_eq!(aggregate(&sections), 95.0);
}

#[test]
fn aggregate_rounds_once_at_the_end() {
    let sections = [
        SectionScore::new("A", 33.333333),
        SectionScore::new("B", 33.333333),
        SectionScore::new("C", 33.333333),
    ];
    assert_eq!(aggregate(&sections), 33.33);
}

#[test]
fn aggregate_caps_at_one_hundred() {
    let sections = [SectionScore::new("Boosted", 110.0)];
    assert_eq!(aggregate(&sections), 100.0);
}

#[test]
fn aggregate_honours_weights() {
    let mut heavy = SectionScore::new("Heavy", 100.0);
    heavy.weight = 3.0;
    let sections = [heavy, SectionScore::new("Light", 0.0)];
    assert_eq!(aggregate(&sections), 75.0);
}

#[test]
fn aggregate_of_nothing_is_zero() {
    assert_eq!(aggregate(&[]), 0.0);
}

#[test]
fn bonus_applies_within_tolerance() {
    let bonus = ToleranceBonus::default();
    assert_eq!(bonus.apply(80.0, 3, 2), 90.0);
    assert_eq!(bonus.apply(80.0, 2, 2), 90.0);
}

#[test]
fn bonus_is_withheld_outside_tolerance() {
    let bonus = ToleranceBonus::default();
    assert_eq!(bonus.apply(80.0, 4, 1), 80.0);
}

#[test]
fn bonus_never_pushes_past_one_hundred() {
    let bonus = ToleranceBonus::default();
    assert_eq!(bonus.apply(100.0, 0, 0), 100.0);
    assert_eq!(bonus.apply(95.0, 1, 0), 100.0);
}

#[test]
fn bonus_parameters_are_configurable() {
    let bonus = ToleranceBonus::builder().tolerance(2).bonus(5.0).build();
    assert!(bonus.within(5, 3));
    assert!(!bonus.within(5, 2));
    assert_eq!(bonus.apply(50.0, 5, 3), 55.0);
}
