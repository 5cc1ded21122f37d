use std::io::Write;

use resource_usage_core::PodUsage;

use super::{truncate, Renderer};

const COL_NAMESPACE: usize = 14;
const COL_POD: usize = 40;
const COL_CPU_USAGE: usize = 11;
const COL_PERCENT: usize = 10;
const COL_MEM_USAGE: usize = 11;
const COL_NODE: usize = 15;

impl Renderer {
    pub(super) fn render_table(
        &self,
        out: &mut impl Write,
        pods: &[PodUsage],
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "{:<ns$} {:<pod$} {:<cpu$} {:<pct$} {:<pct$} {:<mem$} {:<pct$} {:<pct$} {:<node$}",
            "NAMESPACE",
            "POD",
            "CPU_USAGE",
            "CPU_REQ%",
            "CPU_LIM%",
            "MEM_USAGE",
            "MEM_REQ%",
            "MEM_LIM%",
            "NODE",
            ns = COL_NAMESPACE,
            pod = COL_POD,
            cpu = COL_CPU_USAGE,
            pct = COL_PERCENT,
            mem = COL_MEM_USAGE,
            node = COL_NODE,
        )?;

        for pod in pods {
            writeln!(
                out,
                "{:<ns$} {:<pod$} {:<cpu$} {} {} {:<mem$} {} {} {:<node$}",
                truncate(&pod.namespace, COL_NAMESPACE),
                truncate(&pod.name, COL_POD),
                self.units.format_cpu(pod.cpu.usage),
                self.colorizer
                    .format_percent(pod.cpu.request_percent, COL_PERCENT),
                self.colorizer
                    .format_percent(pod.cpu.limit_percent, COL_PERCENT),
                self.units.format_memory(pod.memory.usage),
                self.colorizer
                    .format_percent(pod.memory.request_percent, COL_PERCENT),
                self.colorizer
                    .format_percent(pod.memory.limit_percent, COL_PERCENT),
                truncate(&pod.node, COL_NODE),
                ns = COL_NAMESPACE,
                pod = COL_POD,
                cpu = COL_CPU_USAGE,
                mem = COL_MEM_USAGE,
                node = COL_NODE,
            )?;
        }
        Ok(())
    }
}
