use std::io::Write;

use itertools::Itertools;
use unit_test_names::NameGenerator;

const MANIFEST: &str = "units.txt";

struct Unit {
    name: unit_test_names::UniqueName,
    expr: String,
}

fn parse_manifest(source: &str) -> Vec<Unit> {
    // The generated file is one compilation unit, so it gets one generator.
    let mut generator = NameGenerator::new();
    let mut units = vec![];

    for (index, line) in source.lines().enumerate() {
        let line_no = u32::try_from(index + 1).expect("Manifest is too long");
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((label, expr)) = line.split_once(':') else {
            panic!("{MANIFEST}:{line_no}: expected `label: expression`");
        };

        let name = generator
            .issue(label.trim(), line_no)
            .unwrap_or_else(|e| panic!("{MANIFEST}:{line_no}: {e}"));

        units.push(Unit {
            name,
            expr: expr.trim().to_string(),
        });
    }

    units
}

fn render_function(unit: &Unit) -> String {
    format!(
        r#"
    #[test]
    fn {head} {{
        assert!({expr}, "{MANIFEST}:{line}: {{}}", {expr_str:?});
    }}
"#,
        head = unit.name.declaration_head(),
        expr = unit.expr,
        line = unit.name.line(),
        expr_str = unit.expr,
    )
}

fn render_entry(unit: &Unit) -> String {
    format!(
        "crate::GeneratedUnit {{ name: {:?}, label: {:?}, id: {}, line: {} }}",
        unit.name.to_string(),
        unit.name.label(),
        unit.name.id(),
        unit.name.line()
    )
}

pub fn gen_units() {
    let source = std::fs::read_to_string(MANIFEST).unwrap();
    let units = parse_manifest(&source);

    let entries = units.iter().map(render_entry).join(",\n    ");
    let functions = units.iter().map(render_function).join("");

    let out = format!(
        r#"
/// Every test generated from `{MANIFEST}`, in manifest order.
pub const GENERATED: &[crate::GeneratedUnit] = &[
    {entries}
];

#[cfg(test)]
mod units {{
{functions}
}}
"#
    );

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let final_path = format!("{out_dir}/units.rs");
    let mut file = std::fs::File::create(final_path).unwrap();
    file.write_all(out.as_bytes()).unwrap();
}
