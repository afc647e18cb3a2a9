//! Machine-readable plan of the artifacts an apply run would manage.

use crate::domain::{AppError, ArtifactPlan, ConfigParameters, render};

pub fn execute(params: &ConfigParameters) -> Result<ArtifactPlan, AppError> {
    let set = render(params)?;
    Ok(ArtifactPlan::from_render_set(&set))
}

/// Human-readable plan listing, one artifact per line.
pub fn format_text(plan: &ArtifactPlan) -> String {
    let mut out = String::new();
    for artifact in &plan.artifacts {
        let state = if artifact.present { "present" } else { "absent" };
        out.push_str(&format!(
            "{:7} {} mode={} ({} bytes)\n",
            state,
            artifact.path.display(),
            artifact.mode,
            artifact.content_bytes
        ));
    }
    out
}
