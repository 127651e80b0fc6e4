// File: crates/protherm-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic program chart to PNG bytes (no text).
// - Always checks that two renders are pixel-identical and that fixed landmark pixels
//   (background above the curve, fill below it) have the theme colors.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for exact match.
// - Else, fails when REQUIRE_SNAPSHOTS=1 and otherwise notes the missing file.

use protherm_chart::{ChartConfig, Program, ProgramChart, Theme};

const PROGRAM: &str = "\
0 06:30 20.5
0 08:30 17
0 17:00 21
0 22:30 16.5
2 12:00 19.5
5 08:00 21
6 23:00 16.5
";

fn env_flag(name: &str) -> bool {
    std::env::var(name).ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if env_flag("UPDATE_SNAPSHOTS") {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).expect("create snapshots dir"); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        assert!(
            !env_flag("REQUIRE_SNAPSHOTS"),
            "missing snapshot {}; run with UPDATE_SNAPSHOTS=1 to bless",
            path.display()
        );
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(config: &ChartConfig) -> Vec<u8> {
    let chart = ProgramChart::new("PROG1.txt", Program::parse_str(PROGRAM));
    let opts = ChartConfig { draw_labels: false, ..config.clone() }; // avoid text nondeterminism across platforms
    chart.render(&opts).expect("render bytes").bytes
}

fn background(theme: &Theme) -> [u8; 4] {
    let c = theme.background;
    [c.r(), c.g(), c.b(), 255]
}

fn fill(theme: &Theme) -> [u8; 4] {
    let c = theme.fill;
    [c.r(), c.g(), c.b(), 255]
}

/// Render twice, check determinism and landmark pixels, then hand the bytes to the golden check.
fn check(config: ChartConfig, theme: &Theme, name: &str) {
    let bytes = render_bytes(&config);
    let again = render_bytes(&config);
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.as_raw(), image::load_from_memory(&again).expect("decode").to_rgba8().as_raw(), "render is not deterministic");
    assert_eq!((img.width(), img.height()), (1600, 400));

    let at = |x: u32, y: u32| img.get_pixel(x, y).0;
    assert_eq!(at(5, 5), background(theme), "surface corner");
    assert_eq!(at(106, 250), background(theme), "Monday 03:00 is before the first set-point");
    assert_eq!(at(737, 250), fill(theme), "Thursday 03:00 below the 19.5 degree hold");
    assert_eq!(at(737, 100), background(theme), "Thursday 03:00 above the curve");

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_weekly_program() {
    check(ChartConfig::default(), &Theme::classic(), "weekly_program.png");
}

#[test]
fn golden_fixed_range_dark() {
    let config = ChartConfig { y_autorange: false, theme: "dark".into(), ..Default::default() };
    check(config, &Theme::dark(), "fixed_range_dark.png");
}
