//! Rendering of priced requests as a table or JSON.

use crate::commands::PricedRequest;
use crate::config::OutputFormat;
use crate::Result;

/// Renders priced requests in the requested format.
pub fn render(priced: &[PricedRequest], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(priced)?),
        OutputFormat::Table => Ok(render_table(priced)),
    }
}

fn render_table(priced: &[PricedRequest]) -> String {
    let mut out = format!(
        "{:<12} {:<5} {:>14} {:>10} {:>10} {:>12} {:>12} {:>12}\n",
        "ID", "Type", "Price", "Delta", "Gamma", "Theta", "Vega", "Rho"
    );
    out.push_str(&"-".repeat(92));
    out.push('\n');

    for row in priced {
        let r = &row.results;
        out.push_str(&format!(
            "{:<12} {:<5} {:>14.6} {:>10.6} {:>10.6} {:>12.6} {:>12.6} {:>12.6}\n",
            row.id,
            row.option_type.as_str(),
            r.price,
            r.delta,
            r.gamma,
            r.theta,
            r.vega,
            r.rho
        ));
    }

    out
}
