//! Integration tests for the layout lint

use annotation_layout::layout::{lint, LintCategory};
use annotation_layout::{adjust_document, AdjustConfig, PageDocument};

const DEFECTS: &str = r#"
[page]
width = 400
height = 300

[[annotations]]
id = "stray"
x = 0
y = 0
leader_x = 20
leader_y = 20

[[annotations]]
id = "far"
x = 200
y = 200
leader_x = 500
leader_y = 250

[[annotations]]
id = "ghost"
"#;

#[test]
fn test_all_categories_are_reported_in_order() {
    let doc = PageDocument::parse(DEFECTS).expect("valid document");
    let warnings = lint::check(&doc.annotations, &doc.container(), &AdjustConfig::default());
    let text = warnings
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(text, @r#"
unplaced: "ghost" has no position, treated as (0, 0)
overlap: "stray" and "ghost" overlap by 6000 px²
bounds: "stray" at (0, 0) size 150x40 leaves the 15 px page margin
bounds: "ghost" at (0, 0) size 150x40 leaves the 15 px page margin
anchor: leader anchor of "far" at (500, 250) is outside the page
"#);
}

#[test]
fn test_adjusting_clears_overlaps_but_not_other_defects() {
    let doc = PageDocument::parse(DEFECTS).expect("valid document");
    let config = AdjustConfig::default();
    let report = adjust_document(&doc, &config).expect("valid page");
    assert!(report.converged);

    let warnings = annotation_layout::lint(&report, &config);
    let categories: Vec<LintCategory> = warnings.iter().map(|w| w.category).collect();
    assert!(
        !categories.contains(&LintCategory::Overlap),
        "Expected no overlap warning, got: {:?}",
        categories
    );
    assert!(categories.contains(&LintCategory::Unplaced));
    assert!(categories.contains(&LintCategory::Anchor));
}

#[test]
fn test_exhausted_budget_leaves_overlap_warnings() {
    let doc = PageDocument::parse(
        r#"
[page]
width = 800
height = 600

[[annotations]]
id = "a"
x = 100
y = 100

[[annotations]]
id = "b"
x = 110
y = 100

[[annotations]]
id = "c"
x = 120
y = 100
"#,
    )
    .expect("valid document");
    let config = AdjustConfig::default().with_max_iterations(1);
    let report = adjust_document(&doc, &config).expect("valid page");
    assert!(!report.converged);
    assert!(report.remaining_overlap_area > 0.0);

    let warnings = annotation_layout::lint(&report, &config);
    assert!(warnings.iter().any(|w| w.category == LintCategory::Overlap));
}

#[test]
fn test_clean_page_has_no_warnings() {
    let doc = PageDocument::parse(
        r#"
[page]
width = 800
height = 600

[[annotations]]
id = "a"
x = 20
y = 20
leader_x = 300
leader_y = 300

[[annotations]]
id = "b"
x = 400
y = 400
leader_x = 300
leader_y = 300
"#,
    )
    .expect("valid document");
    let warnings = lint::check(&doc.annotations, &doc.container(), &AdjustConfig::default());
    assert!(warnings.is_empty(), "Expected no warnings, got: {:?}", warnings);
}
