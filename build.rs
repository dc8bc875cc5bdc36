use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // The footer copyright year is fixed at build so server and client render the same text
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
