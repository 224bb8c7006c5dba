const UDL: &str = "src/checkdiff_core.udl";

fn main() {
    println!("cargo:rerun-if-changed={UDL}");
    uniffi_build::generate_scaffolding(UDL).expect("failed to generate checkdiff_core scaffolding");
}
