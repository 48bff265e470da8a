#![forbid(unsafe_code)]

/// `embed_migrations!` cannot tell cargo to rebuild when only the migration
/// files change, so the migration directory is tracked here instead.
fn main() {
    println!("cargo:rerun-if-changed=./migrations");
}
