use std::io::Write;

use resource_usage_core::PodUsage;

use super::structured::StructuredOutput;
use super::RenderError;

pub(super) fn render(out: &mut impl Write, pods: &[PodUsage]) -> Result<(), RenderError> {
    let output = StructuredOutput::from_pod_usages(pods);
    let text = serde_yaml::to_string(&output)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
