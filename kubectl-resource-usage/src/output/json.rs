use std::io::Write;

use resource_usage_core::PodUsage;

use super::structured::StructuredOutput;
use super::RenderError;

pub(super) fn render(out: &mut impl Write, pods: &[PodUsage]) -> Result<(), RenderError> {
    let output = StructuredOutput::from_pod_usages(pods);
    // Encode in memory first so a failing writer reports an I/O error, not
    // a serialization error.
    let text = serde_json::to_string_pretty(&output)?;
    writeln!(out, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{plain_renderer, sample_pods};
    use super::super::OutputFormat;
    use super::*;

    #[test]
    fn emits_items_with_exact_field_names() {
        let mut buf = Vec::new();
        plain_renderer(OutputFormat::Json)
            .render(&mut buf, &sample_pods())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let item = &value["items"][0];
        assert_eq!(item["namespace"], "default");
        assert_eq!(item["pod"], "web-0");
        assert_eq!(item["node"], "node-1");
        assert_eq!(item["cpu"]["usage"], "250m");
        assert_eq!(item["cpu"]["requests"], "200m");
        assert_eq!(item["cpu"]["limits"], "500m");
        assert_eq!(item["cpu"]["requestPercent"], 125);
        assert_eq!(item["cpu"]["limitPercent"], 50);
        assert_eq!(item["memory"]["usage"], "256Mi");
    }

    #[test]
    fn absent_values_serialize_as_null() {
        let mut buf = Vec::new();
        plain_renderer(OutputFormat::Json)
            .render(&mut buf, &sample_pods())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let bare = &value["items"][1];
        assert!(bare["cpu"]["requests"].is_null());
        assert!(bare["cpu"]["requestPercent"].is_null());
        assert!(bare["memory"]["limits"].is_null());
        assert!(bare["memory"]["limitPercent"].is_null());
    }

    #[test]
    fn round_trips_through_the_structured_shape() {
        let pods = sample_pods();
        let mut buf = Vec::new();
        plain_renderer(OutputFormat::Json)
            .render(&mut buf, &pods)
            .unwrap();

        let decoded: StructuredOutput = serde_json::from_slice(&buf).unwrap();
        assert_eq!(decoded, StructuredOutput::from_pod_usages(&pods));
    }
}
