//! `cargo xtask coverage`, `cargo xtask ci`, and the other xtaskops helpers.

fn main() -> Result<(), anyhow::Error> {
    xtaskops::tasks::main()
}
