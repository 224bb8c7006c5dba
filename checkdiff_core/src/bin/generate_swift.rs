use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use uniffi_bindgen::bindings::SwiftBindingGenerator;

const CRATE_NAME: &str = "checkdiff_core";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let output_dir = match std::env::args().nth(1) {
        Some(dir) => Utf8PathBuf::from(dir),
        None => manifest_dir
            .parent()
            .context("failed to locate workspace root")?
            .join("swift/CheckDiffFFI/Sources/CheckDiffFFI"),
    };
    let udl_path = manifest_dir.join("src").join(format!("{CRATE_NAME}.udl"));

    std::fs::create_dir_all(output_dir.as_std_path())
        .with_context(|| format!("failed to create {output_dir}"))?;

    uniffi_bindgen::generate_bindings(
        udl_path.as_path(),
        None,
        SwiftBindingGenerator,
        Some(output_dir.as_path()),
        None,
        Some(CRATE_NAME),
        true,
    )
    .with_context(|| format!("failed to generate Swift bindings from {udl_path}"))?;

    log::info!("generated Swift bindings in {output_dir}");
    Ok(())
}
