fn main() {
    // Stamp the build date into the BUILD_DATE env var at compile time.
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=BUILD_DATE={stamp}");
}
