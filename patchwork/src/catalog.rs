use std::path::Path;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::Rng;

use crate::shape::shape;
use crate::Patch;

/// The 33 patches of the standard game, in catalog order.
///
/// This is fixed game content; the queue shuffles it at match start.
pub fn standard_catalog() -> Vec<Patch> {
    vec![
        Patch::new(1, 2, 0, shape!("##")),
        Patch::new(2, 2, 0, shape!("###")),
        Patch::new(3, 3, 1, shape!("####")),
        Patch::new(1, 7, 1, shape!("#####")),
        Patch::new(3, 1, 0, shape!("#.\n##")),
        Patch::new(1, 3, 0, shape!("#.\n##")),
        Patch::new(2, 3, 1, shape!(".##\n##.")),
        Patch::new(6, 7, 3, shape!("##.\n.##")),
        Patch::new(2, 4, 1, shape!("..#\n###")),
        Patch::new(6, 4, 2, shape!("..#\n###")),
        Patch::new(5, 6, 2, shape!("##\n##")),
        Patch::new(2, 2, 0, shape!(".#.\n###")),
        Patch::new(2, 1, 0, shape!("#.#\n###")),
        Patch::new(3, 2, 1, shape!(".###\n##..")),
        Patch::new(3, 10, 2, shape!("...#\n####")),
        Patch::new(2, 2, 0, shape!("##.\n###")),
        Patch::new(4, 3, 1, shape!("..#.\n####")),
        Patch::new(4, 7, 2, shape!(".##.\n####")),
        Patch::new(5, 1, 1, shape!("#.#\n###")),
        Patch::new(5, 10, 3, shape!("##..\n####")),
        Patch::new(2, 4, 0, shape!("###.\n.###")),
        Patch::new(6, 3, 2, shape!(".#.\n###\n#.#")),
        Patch::new(4, 5, 2, shape!(".#.\n###\n.#.")),
        Patch::new(3, 0, 1, shape!("..#.\n####\n..#.")),
        Patch::new(1, 2, 0, shape!("..#.\n####\n.#..")),
        Patch::new(3, 2, 0, shape!("#.#\n###\n#.#")),
        Patch::new(4, 10, 3, shape!("..#\n.##\n##.")),
        Patch::new(3, 5, 1, shape!(".##.\n####\n.##.")),
        Patch::new(5, 5, 2, shape!(".#.\n.#.\n###")),
        Patch::new(2, 1, 0, shape!("...#\n####\n#...")),
        Patch::new(4, 1, 1, shape!("..#..\n#####\n..#..")),
        Patch::new(6, 8, 3, shape!("##.\n##.\n.##")),
        Patch::new(2, 7, 2, shape!("#...\n####\n#...")),
    ]
}

/// Generates the 40-patch draw order of the short variant.
///
/// Two patch kinds with 20 copies each, interleaved by drawing uniformly at
/// random proportional to the remaining count of each kind.
pub fn short_catalog(rng: &mut StdRng) -> Vec<Patch> {
    let kind_1 = Patch::new(4, 3, 1, shape!("##\n##"));
    let kind_2 = Patch::new(2, 2, 0, shape!("##\n##"));
    let mut remaining_1 = 20u32;
    let mut remaining_2 = 20u32;

    let mut patches = Vec::with_capacity((remaining_1 + remaining_2) as usize);
    while remaining_1 + remaining_2 > 0 {
        if rng.gen_range(0..remaining_1 + remaining_2) < remaining_1 {
            patches.push(kind_1.clone());
            remaining_1 -= 1;
        } else {
            patches.push(kind_2.clone());
            remaining_2 -= 1;
        }
    }
    patches
}

/// Parses a custom patch catalog.
///
/// Each record is a header line of three comma-separated integers (time cost,
/// button cost, button income) followed by the shape block, terminated by a
/// blank line or the end of input.
pub fn parse_patches(text: &str) -> anyhow::Result<Vec<Patch>> {
    let mut patches = Vec::new();
    let mut lines = text.lines().peekable();

    loop {
        while matches!(lines.peek(), Some(line) if line.trim().is_empty()) {
            lines.next();
        }
        let Some(header) = lines.next() else {
            break;
        };
        let num = patches.len() + 1;

        let fields: Vec<&str> = header.split(',').map(str::trim).collect();
        anyhow::ensure!(
            fields.len() == 3,
            "patch {num}: header must be 'time,buttons,income', got '{header}'"
        );
        let time_cost: u32 = fields[0]
            .parse()
            .with_context(|| format!("patch {num}: invalid time cost '{}'", fields[0]))?;
        let button_cost: u32 = fields[1]
            .parse()
            .with_context(|| format!("patch {num}: invalid button cost '{}'", fields[1]))?;
        let button_income: u32 = fields[2]
            .parse()
            .with_context(|| format!("patch {num}: invalid button income '{}'", fields[2]))?;

        let mut shape_lines = Vec::new();
        while let Some(&line) = lines.peek() {
            if line.trim().is_empty() {
                break;
            }
            shape_lines.push(line);
            lines.next();
        }
        let shape: crate::Shape = shape_lines
            .join("\n")
            .parse()
            .with_context(|| format!("patch {num}: invalid shape block"))?;
        anyhow::ensure!(
            shape.cell_count() > 0,
            "patch {num}: shape has no occupied cells"
        );

        patches.push(Patch::new(time_cost, button_cost, button_income, shape));
    }

    anyhow::ensure!(!patches.is_empty(), "catalog contains no patches");
    Ok(patches)
}

/// Reads and parses a custom patch catalog file.
pub fn patches_from_file(path: &Path) -> anyhow::Result<Vec<Patch>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read patch catalog '{}'", path.display()))?;
    parse_patches(&text).with_context(|| format!("malformed patch catalog '{}'", path.display()))
}
