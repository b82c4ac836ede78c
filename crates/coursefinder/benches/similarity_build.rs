use coursefinder_core::Item;
use coursefinder_index::Pipeline;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const WORDS: [&str; 12] = [
    "python", "data", "statistics", "design", "finance", "history", "music", "cloud",
    "security", "biology", "marketing", "writing",
];

fn synthetic_items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            name: format!("Course {} {}", WORDS[i % WORDS.len()], i),
            institution: "Bench University".to_string(),
            difficulty: ["Beginner", "Intermediate", "Advanced", "Mixed"][i % 4].to_string(),
            rating: Some(4.0 + (i % 10) as f32 / 10.0),
            url: format!("https://example.org/{i}"),
            description: format!(
                "Learn {} and {} with practical {} projects",
                WORDS[i % WORDS.len()],
                WORDS[(i * 7) % WORDS.len()],
                WORDS[(i * 3) % WORDS.len()]
            ),
            skills: format!("{}, {}", WORDS[(i * 5) % WORDS.len()], WORDS[(i + 1) % WORDS.len()]),
        })
        .collect()
}

fn bench_build_500_courses(c: &mut Criterion) {
    let items = synthetic_items(500);
    let pipeline = Pipeline::default();

    c.bench_function("build_500_courses", |b| {
        b.iter(|| pipeline.build(black_box(items.clone())));
    });
}

criterion_group!(benches, bench_build_500_courses);
criterion_main!(benches);
