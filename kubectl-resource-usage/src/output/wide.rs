use std::io::Write;

use resource_usage_core::PodUsage;

use super::{truncate, Renderer};

const COL_NAMESPACE: usize = 12;
const COL_POD: usize = 30;
const COL_QUANTITY: usize = 9;
const COL_PERCENT: usize = 8;
const COL_NODE: usize = 12;

impl Renderer {
    /// Like the table but with the declared request/limit quantities spelled
    /// out next to their percentages.
    pub(super) fn render_wide(
        &self,
        out: &mut impl Write,
        pods: &[PodUsage],
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "{:<ns$} {:<pod$} {:<q$} {:<q$} {:<q$} {:<pct$} {:<pct$} {:<q$} {:<q$} {:<q$} {:<pct$} {:<pct$} {:<node$}",
            "NAMESPACE",
            "POD",
            "CPU_USAGE",
            "CPU_REQ",
            "CPU_LIM",
            "CPU_R%",
            "CPU_L%",
            "MEM_USAGE",
            "MEM_REQ",
            "MEM_LIM",
            "MEM_R%",
            "MEM_L%",
            "NODE",
            ns = COL_NAMESPACE,
            pod = COL_POD,
            q = COL_QUANTITY,
            pct = COL_PERCENT,
            node = COL_NODE,
        )?;

        for pod in pods {
            let cpu_requests = self.quantity_or_na(pod.cpu.requests, |units, v| units.format_cpu(v));
            let cpu_limits = self.quantity_or_na(pod.cpu.limits, |units, v| units.format_cpu(v));
            let mem_requests =
                self.quantity_or_na(pod.memory.requests, |units, v| units.format_memory(v));
            let mem_limits =
                self.quantity_or_na(pod.memory.limits, |units, v| units.format_memory(v));
            writeln!(
                out,
                "{:<ns$} {:<pod$} {:<q$} {:<q$} {:<q$} {} {} {:<q$} {:<q$} {:<q$} {} {} {:<node$}",
                truncate(&pod.namespace, COL_NAMESPACE),
                truncate(&pod.name, COL_POD),
                self.units.format_cpu(pod.cpu.usage),
                cpu_requests,
                cpu_limits,
                self.colorizer
                    .format_percent(pod.cpu.request_percent, COL_PERCENT),
                self.colorizer
                    .format_percent(pod.cpu.limit_percent, COL_PERCENT),
                self.units.format_memory(pod.memory.usage),
                mem_requests,
                mem_limits,
                self.colorizer
                    .format_percent(pod.memory.request_percent, COL_PERCENT),
                self.colorizer
                    .format_percent(pod.memory.limit_percent, COL_PERCENT),
                truncate(&pod.node, COL_NODE),
                ns = COL_NAMESPACE,
                pod = COL_POD,
                q = COL_QUANTITY,
                node = COL_NODE,
            )?;
        }
        Ok(())
    }

    fn quantity_or_na(
        &self,
        value: Option<i64>,
        format: fn(&super::UnitFormatter, i64) -> String,
    ) -> String {
        value.map_or_else(|| "N/A".to_string(), |v| format(&self.units, v))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{plain_renderer, sample_pods};
    use super::super::OutputFormat;
    use super::*;

    fn render_to_string(pods: &[PodUsage]) -> String {
        let mut buf = Vec::new();
        plain_renderer(OutputFormat::Wide)
            .render(&mut buf, pods)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_lists_all_thirteen_columns() {
        let text = render_to_string(&[]);
        let header = text.lines().next().unwrap();
        for name in [
            "NAMESPACE",
            "POD",
            "CPU_USAGE",
            "CPU_REQ",
            "CPU_LIM",
            "CPU_R%",
            "CPU_L%",
            "MEM_USAGE",
            "MEM_REQ",
            "MEM_LIM",
            "MEM_R%",
            "MEM_L%",
            "NODE",
        ] {
            assert!(header.contains(name), "missing column {name}");
        }
    }

    #[test]
    fn rows_include_declared_quantities() {
        let text = render_to_string(&sample_pods());
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains("200m"));
        assert!(row.contains("500m"));
        assert!(row.contains("512Mi"));
    }

    #[test]
    fn undeclared_quantities_render_as_na() {
        let text = render_to_string(&sample_pods());
        let bare = text.lines().nth(2).unwrap();
        // four quantity cells and four percent cells
        assert_eq!(bare.matches("N/A").count(), 8);
    }

    #[test]
    fn pod_names_truncate_to_the_narrower_column() {
        let mut pods = sample_pods();
        pods[0].name = "a".repeat(45);
        let text = render_to_string(&pods);
        let row = text.lines().nth(1).unwrap();
        let cell = &row[COL_NAMESPACE + 1..COL_NAMESPACE + 1 + COL_POD];
        assert!(cell.ends_with("..."));
    }

    #[test]
    fn full_cells_stay_separated_by_a_space() {
        let mut pods = sample_pods();
        pods[0].namespace = "a".repeat(COL_NAMESPACE);
        pods[0].name = "b".repeat(45);
        let text = render_to_string(&pods);
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with(&format!("{} b", "a".repeat(COL_NAMESPACE))));
        assert!(row.contains("... 250m"));
    }
}
