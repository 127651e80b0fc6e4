// File: crates/protherm-chart/tests/smoke.rs
// Purpose: End-to-end render from a program library, writing PNG files and bytes.

use protherm_chart::{ChartConfig, ProgramChart, ProgramLibrary, RenderedImage};

const WEEKDAY_PROGRAM: &str = "\
# living room
0 06:30 20.5
0 08:30 17
0 17:00 21
0 22:30 16.5
5 08:00 21
6 23:00 16.5
";

#[test]
fn render_smoke_png() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("PROG1.txt"), WEEKDAY_PROGRAM).unwrap();
    let library = ProgramLibrary::new(dir.path());

    let chart = ProgramChart::from_library(&library, "PROG1.txt").expect("valid identifier");
    assert_eq!(chart.name, "PROG1.txt");
    assert_eq!(chart.program.len(), 7, "six set-points plus the week-start placeholder");

    let opts = ChartConfig::default();
    let out = dir.path().join("out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let img = chart.render(&opts).expect("render bytes");
    assert!(img.bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    assert_eq!(img.content_type(), RenderedImage::CONTENT_TYPE);
    let decoded = image::load_from_memory(&img.bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (1600, 400));
}

#[test]
fn missing_program_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let library = ProgramLibrary::new(dir.path());
    let chart = ProgramChart::from_library(&library, "PROG9.txt").unwrap();
    assert!(chart.program.is_empty());
    let img = chart.render(&ChartConfig::default()).expect("empty chart renders");
    assert!(img.bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn custom_size_is_honoured() {
    let chart = ProgramChart::new("small", protherm_chart::Program::parse_str("0 00:00 19\n"));
    let opts = ChartConfig { width: 800, height: 200, draw_labels: false, ..Default::default() };
    let img = chart.render(&opts).unwrap();
    assert_eq!((img.width, img.height), (800, 200));
}
