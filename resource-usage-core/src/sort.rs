use std::cmp::Ordering;

use crate::usage::{PodUsage, ResourceField};

/// Orders pods by the selected field's `limit_percent`. Pods without a value
/// always sort after pods with one, regardless of direction; ties keep their
/// relative order (`sort_by` is stable).
pub fn sort_pod_usages(pods: &mut [PodUsage], field: ResourceField, ascending: bool) {
    pods.sort_by(|a, b| {
        match (a.limit_percent(field), b.limit_percent(field)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) if ascending => a.cmp(&b),
            (Some(a), Some(b)) => b.cmp(&a),
        }
    });
}

#[cfg(test)]
mod tests {
    use crate::usage::ResourceUsage;

    use super::*;

    fn pod(name: &str, cpu_percent: Option<i64>, memory_percent: Option<i64>) -> PodUsage {
        PodUsage {
            name: name.to_string(),
            cpu: ResourceUsage {
                limit_percent: cpu_percent,
                ..Default::default()
            },
            memory: ResourceUsage {
                limit_percent: memory_percent,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn names(pods: &[PodUsage]) -> Vec<&str> {
        pods.iter().map(|pod| pod.name.as_str()).collect()
    }

    #[test]
    fn descending_cpu_puts_absent_last() {
        let mut pods = vec![
            pod("a", Some(50), None),
            pod("b", Some(80), None),
            pod("c", None, None),
            pod("d", Some(20), None),
        ];
        sort_pod_usages(&mut pods, ResourceField::Cpu, false);
        assert_eq!(names(&pods), ["b", "a", "d", "c"]);
    }

    #[test]
    fn ascending_memory_still_puts_absent_last() {
        let mut pods = vec![
            pod("a", None, Some(70)),
            pod("b", None, None),
            pod("c", None, Some(10)),
        ];
        sort_pod_usages(&mut pods, ResourceField::Memory, true);
        assert_eq!(names(&pods), ["c", "a", "b"]);
    }

    #[test]
    fn absent_keys_keep_relative_order() {
        let mut pods = vec![
            pod("x", None, None),
            pod("y", None, None),
            pod("z", None, Some(5)),
        ];
        sort_pod_usages(&mut pods, ResourceField::Memory, false);
        assert_eq!(names(&pods), ["z", "x", "y"]);
    }

    #[test]
    fn empty_list_is_fine() {
        let mut pods: Vec<PodUsage> = Vec::new();
        sort_pod_usages(&mut pods, ResourceField::Cpu, true);
        assert!(pods.is_empty());
    }
}
