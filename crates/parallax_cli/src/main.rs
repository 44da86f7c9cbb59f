//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `parallax_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("parallax_core version={}", parallax_core::core_version());
    println!(
        "parallax_core known_extensions={}",
        parallax_core::known_extensions().count()
    );
    println!(
        "parallax_core known_struct_types={}",
        parallax_core::known_struct_types().count()
    );
}
