use chrono::NaiveDate;
use skillscan::analysis::{self, viz, NormalizationMap, SkillNormalizer, DEFAULT_TOP_N};
use skillscan::collect::JobRole;
use skillscan::dataset::Posting;
use std::collections::BTreeSet;

fn posting(role: JobRole, skills: &[&str]) -> Posting {
    Posting {
        job_role: role,
        company: "N/A".to_string(),
        title: "posting".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
    }
}

fn analysis_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 2).expect("valid date")
}

#[test]
fn demand_report_normalizes_before_ranking() {
    let postings = vec![
        posting(
            JobRole::ServerDeveloper,
            &["Java", "spring boot", "MySQL", "사내 복지"],
        ),
        posting(JobRole::ServerDeveloper, &["JAVA", "springboot"]),
        posting(JobRole::FrontendDeveloper, &["react.js", "TypeScript"]),
    ];

    let normalizer = SkillNormalizer::standard();
    let report = analysis::demand_report(&postings, &normalizer, DEFAULT_TOP_N, analysis_date());

    // data scientist role has no postings and is absent
    assert_eq!(report.role_counts.len(), 2);
    assert_eq!(report.role_counts[0].role, JobRole::ServerDeveloper);
    assert_eq!(report.role_counts[0].postings, 2);

    let server = &report.breakdowns[0];
    let java = server
        .entries
        .iter()
        .find(|entry| entry.skill == "Java")
        .expect("java ranked");
    assert_eq!(java.count, 2);
    assert!((java.percentage - 100.0).abs() < f32::EPSILON);

    let spring_boot = server
        .entries
        .iter()
        .find(|entry| entry.skill == "Spring Boot")
        .expect("spring boot ranked");
    assert_eq!(spring_boot.count, 2);

    // the unmapped Korean tag never reaches the ranking
    assert!(server.entries.iter().all(|entry| entry.skill != "사내 복지"));

    let frontend = &report.breakdowns[1];
    assert!(frontend.entries.iter().any(|entry| entry.skill == "React"));
    assert!(frontend
        .entries
        .iter()
        .any(|entry| entry.skill == "TypeScript"));
}

#[test]
fn injected_vocabulary_drives_the_report() {
    let map = NormalizationMap::from_pairs([("rust", "Rust")]);
    let normalizer = SkillNormalizer::new(&map);
    let postings = vec![posting(JobRole::ServerDeveloper, &["RUST", "Java"])];

    let report = analysis::demand_report(&postings, &normalizer, DEFAULT_TOP_N, analysis_date());
    let entries = &report.breakdowns[0].entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].skill, "Rust");
}

#[test]
fn viz_export_writes_every_artifact() {
    let postings = vec![
        posting(JobRole::ServerDeveloper, &["Java", "MySQL"]),
        posting(JobRole::FrontendDeveloper, &["react", "JavaScript"]),
    ];
    let normalizer = SkillNormalizer::standard();
    let report = analysis::demand_report(&postings, &normalizer, DEFAULT_TOP_N, analysis_date());

    let out_dir =
        std::env::temp_dir().join(format!("skillscan-viz-test-{}", std::process::id()));
    viz::write_all_viz(&out_dir, &report).expect("viz export succeeds");

    for file in [
        viz::ROLE_COUNTS_FILE,
        viz::TOP_SKILLS_FILE,
        viz::HEATMAP_FILE,
        viz::INDEX_FILE,
    ] {
        let path = out_dir.join(file);
        let payload = std::fs::read_to_string(&path).expect("artifact written");
        let value: serde_json::Value = serde_json::from_str(&payload).expect("valid json");
        assert!(value.is_object());
    }

    let index: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join(viz::INDEX_FILE)).unwrap())
            .unwrap();
    assert_eq!(index["date"], "2025-11-02");
    assert_eq!(index["files"].as_array().map(Vec::len), Some(3));

    std::fs::remove_dir_all(&out_dir).ok();
}
