use std::fmt::Write;

use katsuyo_core::types::{ConjugationResult, Fallback, FormSource, Grid};
use katsuyo_lang_japanese::provider::FormSlot;
use katsuyo_lang_japanese::{Classification, VerbForms};
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn source_name(source: FormSource) -> &'static str {
    match source {
        FormSource::Derived => "derived",
        FormSource::Irregular => "irregular",
        FormSource::Provider => "provider",
        FormSource::Unmodified => "unmodified",
    }
}

fn write_fallbacks(out: &mut String, fallbacks: &[Fallback]) {
    for fallback in fallbacks {
        let _ = writeln!(out, "  note: {fallback}");
    }
}

pub fn render_result(result: &ConjugationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.surface_form);
    let _ = writeln!(out, "  construction: {}", result.construction);
    let _ = writeln!(out, "  gloss: {}", result.gloss);
    let _ = writeln!(out, "  source: {}", source_name(result.source));
    write_fallbacks(&mut out, &result.fallbacks);
    out
}

pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {} ({})", grid.verb, grid.construction, grid.gloss);
    for cell in &grid.cells {
        let _ = writeln!(
            out,
            "  {:<9} {}",
            cell.formality.as_str(),
            cell.surface_form
        );
    }
    write_fallbacks(&mut out, &grid.fallbacks);
    out
}

pub fn render_classification(classification: &Classification) -> String {
    match classification.class {
        Some(class) => format!("{}: {}\n", classification.verb, class),
        None => format!("{}: irregular\n", classification.verb),
    }
}

pub fn render_forms(forms: &VerbForms) -> String {
    let mut out = String::new();
    for slot in FormSlot::ALL {
        let Some(entry) = forms.get(slot) else {
            continue;
        };
        let _ = write!(out, "{:<20} {}", slot.key(), entry.japanese);
        if !entry.alts.is_empty() {
            let _ = write!(out, " ({})", entry.alts.join(", "));
        }
        let _ = writeln!(out, "  {}", entry.english);
    }
    out
}
