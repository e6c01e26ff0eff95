use crate::cli::CatalogArgs;
use crate::error::Result;
use moleculab::core::catalog::Catalog;
use tracing::info;

pub fn run(args: CatalogArgs) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => {
            info!("Validating catalog file {:?}", path);
            let catalog = Catalog::load(path)?;
            println!("✓ Catalog file is valid: {}", path.display());
            catalog
        }
        None => Catalog::builtin(),
    };

    print!("{}", render_tables(&catalog));
    Ok(())
}

fn render_tables(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<12} {:<8} {:>8} {:>10} {:>6} {:>8}\n",
        "Sym", "Name", "Color", "Radius", "Mass", "EN", "Valence"
    ));
    for spec in catalog.elements() {
        out.push_str(&format!(
            "{:<4} {:<12} {:<8} {:>8.2} {:>10.3} {:>6.2} {:>8}\n",
            spec.symbol(),
            spec.name(),
            spec.color,
            spec.radius,
            spec.mass,
            spec.electronegativity,
            spec.valence
        ));
    }
    out.push('\n');
    out.push_str(&format!("{:<10} {:>10} {:>8}\n", "Bond", "Strength", "Length"));
    for spec in catalog.bond_types() {
        out.push_str(&format!(
            "{:<10} {:>10.1} {:>8.2}\n",
            spec.kind.as_str(),
            spec.strength,
            spec.length
        ));
    }
    out
}
