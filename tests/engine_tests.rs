use indoc::indoc;
use pretty_assertions::assert_eq;
use smellmap::{
    NestedScopeMode, Severity, SmellConfig, SmellEngine, SmellType,
};
use std::path::PathBuf;

fn engine() -> SmellEngine {
    SmellEngine::new(SmellConfig::default()).unwrap()
}

/// A function spanning `span` lines in total, including the `def` line.
fn function_spanning(name: &str, span: usize) -> String {
    let mut source = format!("def {name}():\n");
    for i in 1..span {
        source.push_str(&format!("    x{i} = {i}\n"));
    }
    source
}

#[test]
fn long_function_is_flagged_high() {
    // Scenario A: 120 source lines.
    let report = engine()
        .analyze_source(&function_spanning("huge", 120), "a.py")
        .unwrap();

    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.smell_type, SmellType::LongMethod);
    assert_eq!(finding.severity, Severity::High);
    assert_eq!(finding.function, "huge");
    assert_eq!(finding.details["line_count"], 120);
    assert_eq!(finding.details["threshold"], 50);
}

#[test]
fn six_parameters_is_a_medium_finding() {
    // Scenario B: 6 parameters against the default threshold of 5.
    let report = engine()
        .analyze_source("def f(a, b, c, d, e, g):\n    pass\n", "b.py")
        .unwrap();

    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.smell_type, SmellType::TooManyParameters);
    assert_eq!(finding.severity, Severity::Medium);
    assert_eq!(finding.details["param_count"], 6);
}

#[test]
fn depth_three_is_under_the_default_threshold() {
    // Scenario C: if inside for inside try is depth 3, threshold 4.
    let source = indoc! {"
        def guarded():
            try:
                for item in items:
                    if item:
                        handle(item)
            except ValueError:
                pass
    "};
    let report = engine().analyze_source(source, "c.py").unwrap();
    assert!(report
        .findings
        .iter()
        .all(|f| f.smell_type != SmellType::DeepNesting));
    assert!(report.findings.is_empty());
}

#[test]
fn empty_file_yields_an_empty_sequence() {
    // Scenario D.
    let report = engine().analyze_source("", "d.py").unwrap();
    assert_eq!(report.functions_scanned, 0);
    assert_eq!(report.findings, vec![]);
}

#[test]
fn threshold_equality_never_fires() {
    let report = engine()
        .analyze_source(&function_spanning("exact", 50), "eq.py")
        .unwrap();
    assert!(report.findings.is_empty());

    let report = engine()
        .analyze_source(&function_spanning("over", 51), "eq.py")
        .unwrap();
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].severity, Severity::Medium);
}

#[test]
fn analysis_is_idempotent() {
    let mut source = function_spanning("huge", 120);
    source.push_str("def wide(a, b, c, d, e, g, h, i):\n    pass\n");

    let first = engine().analyze_source(&source, "same.py").unwrap();
    let second = engine().analyze_source(&source, "same.py").unwrap();
    assert_eq!(first, second);
}

#[test]
fn raising_a_threshold_only_removes_findings() {
    let mut source = function_spanning("medium_one", 60);
    source.push_str(&function_spanning("huge_one", 120));

    let loose = {
        let mut config = SmellConfig::default();
        config.thresholds.max_function_length = 80;
        SmellEngine::new(config).unwrap()
    };

    let baseline = engine().analyze_source(&source, "mono.py").unwrap();
    let relaxed = loose.analyze_source(&source, "mono.py").unwrap();

    let key = |f: &smellmap::Finding| (f.smell_type, f.function.clone(), f.line);
    let baseline_keys: Vec<_> = baseline.findings.iter().map(key).collect();
    for finding in &relaxed.findings {
        assert!(
            baseline_keys.contains(&key(finding)),
            "raising a threshold must not introduce findings"
        );
    }
    assert_eq!(baseline.findings.len(), 2);
    assert_eq!(relaxed.findings.len(), 1);
}

#[test]
fn nested_scope_mode_changes_depth_attribution() {
    let source = indoc! {"
        def outer():
            if a:
                if b:
                    def inner():
                        if c:
                            if d:
                                if e:
                                    pass
    "};

    let accumulate = engine().analyze_source(source, "deep.py").unwrap();
    let deep: Vec<_> = accumulate
        .findings
        .iter()
        .filter(|f| f.smell_type == SmellType::DeepNesting)
        .collect();
    // Only the outer function sees depth 5; inner on its own reaches 3.
    assert_eq!(deep.len(), 1);
    assert_eq!(deep[0].function, "outer");
    assert_eq!(deep[0].details["nesting_depth"], 5);

    let isolate = {
        let mut config = SmellConfig::default();
        config.nested_scopes = NestedScopeMode::Isolate;
        SmellEngine::new(config).unwrap()
    };
    let report = isolate.analyze_source(source, "deep.py").unwrap();
    assert!(report
        .findings
        .iter()
        .all(|f| f.smell_type != SmellType::DeepNesting));
}

#[test]
fn class_member_and_nested_functions_are_analyzed() {
    let mut source = String::from("class Service:\n    def handler(self");
    for i in 0..7 {
        source.push_str(&format!(", p{i}"));
    }
    source.push_str("):\n        pass\n");

    let report = engine().analyze_source(&source, "cls.py").unwrap();
    assert_eq!(report.functions_scanned, 1);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].function, "handler");
    // self plus seven parameters.
    assert_eq!(report.findings[0].details["param_count"], 8);
    assert_eq!(report.findings[0].severity, Severity::High);
}

#[test]
fn unreadable_units_are_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("good.py"),
        function_spanning("huge", 120),
    )
    .unwrap();
    // Not valid UTF-8: reading this unit fails.
    std::fs::write(dir.path().join("bad.py"), [0xff, 0xfe, 0x00]).unwrap();

    let results = engine().analyze_project(dir.path()).unwrap();
    assert_eq!(results.summary.files_analyzed, 1);
    assert_eq!(results.summary.total_findings, 1);
    assert!(results.files[0].path.ends_with("good.py"));
}

#[test]
fn project_results_are_ordered_by_path() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["c.py", "a.py", "b.py"] {
        std::fs::write(dir.path().join(name), "def f():\n    pass\n").unwrap();
    }

    let results = engine().analyze_project(dir.path()).unwrap();
    let names: Vec<PathBuf> = results
        .files
        .iter()
        .map(|f| PathBuf::from(f.path.file_name().unwrap()))
        .collect();
    assert_eq!(
        names,
        [
            PathBuf::from("a.py"),
            PathBuf::from("b.py"),
            PathBuf::from("c.py")
        ]
    );
    assert_eq!(results.summary.functions_scanned, 3);
}
