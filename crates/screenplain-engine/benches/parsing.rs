use criterion::{Criterion, criterion_group, criterion_main};
use screenplain_engine::{PlainEmphasis, ScreenplayParser, parse_str};

fn generate_screenplay(scenes: usize) -> String {
    let mut content = String::from("Title: Benchmark\nAuthor:\n    Somebody\n\n");
    for scene in 0..scenes {
        content.push_str(&format!(
            "# Sequence {scene}\n\nINT. ROOM {scene} - DAY #{scene}#\n\n= Things happen.\n\n\
             Somebody walks in.\nThey sit.\n\nALICE\n(quietly)\nHello there.\n\n\
             BOB ^\nHi.\n\n> INTERMISSION <\n\nCUT TO:\n\n"
        ));
    }
    content
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    let content = generate_screenplay(200);
    group.bench_function("parse_str", |b| {
        b.iter(|| {
            let play = parse_str(std::hint::black_box(&content));
            std::hint::black_box(play);
        });
    });

    let lines: Vec<&str> = content.lines().collect();
    let parser = ScreenplayParser::new(PlainEmphasis);
    group.bench_function("parse_body", |b| {
        b.iter(|| {
            let elements = parser.parse_body(std::hint::black_box(lines.iter()));
            std::hint::black_box(elements);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
