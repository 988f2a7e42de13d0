use rustc_version::{version_meta, Channel};

fn detect_build_channel() -> Result<(), rustc_version::Error> {
    let channel = match version_meta()?.channel {
        Channel::Stable => "CHANNEL_STABLE",
        Channel::Beta => "CHANNEL_BETA",
        Channel::Nightly => "CHANNEL_NIGHTLY",
        Channel::Dev => "CHANNEL_DEV",
    };

    println!("cargo:rustc-cfg={}", channel);
    Ok(())
}

fn main() -> Result<(), rustc_version::Error> {
    println!("cargo:rerun-if-changed=event-log/build.rs");
    detect_build_channel()
}
