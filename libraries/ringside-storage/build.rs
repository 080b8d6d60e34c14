//! Rebuild when the embedded database migrations change.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
