// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jdkissue_core::{
    format_block, parse_issues, write_blocks, ExclusionPolicy, FilterRequest, IssueRecord,
    IssueStatistics,
};

const PRIORITIES: [&str; 5] = ["P1", "P2", "P3", "P4", "P5"];
const COMPONENTS: [&str; 4] = ["core-libs", "hotspot", "security-libs", "client-libs"];

fn build_content(count: usize) -> String {
    let blocks: Vec<String> = (0..count)
        .map(|i| {
            format_block(&IssueRecord {
                title: Some(format!("[JDK-{}] Issue number {}", 8_000_000 + i, i)),
                priority: Some(PRIORITIES[i % PRIORITIES.len()].to_string()),
                issue_type: Some(if i % 3 == 0 { "Enhancement" } else { "Bug" }.to_string()),
                component: Some(COMPONENTS[i % COMPONENTS.len()].to_string()),
                description: Some(format!("Line one of {i}\nLine two mentions windows")),
                os: (i % 2 == 0).then(|| "windows".to_string()),
            })
        })
        .collect();
    write_blocks(blocks)
}

fn bench_parse(c: &mut Criterion) {
    let content = build_content(1000);
    c.bench_function("parse_1000", |b| b.iter(|| black_box(parse_issues(&content))));
}

fn bench_aggregates(c: &mut Criterion) {
    let stats = IssueStatistics::new(parse_issues(&build_content(1000)));
    c.bench_function("aggregates_1000", |b| {
        b.iter(|| {
            black_box(stats.priority_stats());
            black_box(stats.component_stats());
            black_box(stats.os_stats("unknown"));
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let stats = IssueStatistics::new(parse_issues(&build_content(1000)));
    let request = FilterRequest::new(Some("p2".to_string()), Some("bug".to_string()), None, None);
    c.bench_function("filter_1000", |b| {
        b.iter(|| black_box(stats.filter_issues(&request)))
    });
    c.bench_function("search_1000", |b| b.iter(|| black_box(stats.search("windows"))));
    c.bench_function("find_by_id_1000", |b| {
        b.iter(|| black_box(stats.find_by_id("8000999")))
    });
}

fn bench_exclusion(c: &mut Criterion) {
    let policy = ExclusionPolicy::new().expect("Failed to compile exclusion rules");
    let records: Vec<IssueRecord> = parse_issues(&build_content(1000))
        .iter()
        .map(|issue| issue.to_record())
        .collect();
    c.bench_function("exclusion_1000", |b| {
        b.iter(|| {
            for record in &records {
                black_box(policy.evaluate(record));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_aggregates,
    bench_queries,
    bench_exclusion
);
criterion_main!(benches);
