// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by ICU data lookup and DirectWrite font enumeration.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
