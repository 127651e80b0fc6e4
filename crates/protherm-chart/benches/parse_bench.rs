use criterion::{black_box, criterion_group, criterion_main, Criterion};
use protherm_chart::Program;

fn program_text(lines: usize) -> String {
    let mut text = String::with_capacity(lines * 16);
    for i in 0..lines {
        if i % 10 == 9 {
            text.push_str("garbage text\n");
            continue;
        }
        let minute_of_week = (i * 37) % (7 * 24 * 60);
        let (day, rest) = (minute_of_week / (24 * 60), minute_of_week % (24 * 60));
        text.push_str(&format!("{day} {:02}:{:02} {}.5\n", rest / 60, rest % 60, 15 + i % 8));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_program");
    for &n in &[100usize, 10_000usize] {
        let text = program_text(n);
        group.bench_function(format!("lines_{n}"), |b| b.iter(|| black_box(Program::parse_str(black_box(&text)))));
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
