// File: crates/scatter-render-skia/build.rs
// Summary: Links the Windows registry API that Skia's font manager and ICU pull in.

fn main() {
    // Build scripts run on the host; ask cargo for the target instead of using cfg!.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
