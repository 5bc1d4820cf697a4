use chrono::{SecondsFormat, Utc};

fn main() {
    // Exposed to the page head as the `build-time` meta tag
    let build_time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
}
