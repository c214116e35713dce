mod gen_units;

fn main() {
    println!("cargo:rerun-if-changed=units.txt");
    gen_units::gen_units();
}
