fn main() {
    // Re-run when the bundled lesson tables change
    println!("cargo:rerun-if-changed=lessons/");
}
