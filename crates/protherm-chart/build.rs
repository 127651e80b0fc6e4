// File: crates/protherm-chart/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
