//! Display-ready summary of a descriptor

use super::WorkflowDescriptor;
use serde::{Deserialize, Serialize};

/// Name, node count and node list of a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub name: String,
    pub node_count: usize,
    pub nodes: Vec<NodeRow>,
}

/// One `(name, type)` pair of the node list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRow {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// Summarize a descriptor, keeping node order
pub fn summarize(descriptor: &WorkflowDescriptor) -> Summary {
    Summary {
        name: descriptor.name.clone(),
        node_count: descriptor.nodes.len(),
        nodes: descriptor
            .nodes
            .iter()
            .map(|n| NodeRow {
                name: n.name.clone(),
                node_type: n.node_type.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(summary: &Summary) -> Vec<(&str, &str)> {
        summary
            .nodes
            .iter()
            .map(|r| (r.name.as_str(), r.node_type.as_str()))
            .collect()
    }

    #[test]
    fn test_summarize_lead_flow() {
        let wf = WorkflowDescriptor::from_slice(
            br#"{"name": "Lead Flow", "nodes": [{"name":"Trigger","type":"webhook"},{"type":"agent"}]}"#,
        )
        .unwrap();

        let summary = summarize(&wf);
        assert_eq!(summary.name, "Lead Flow");
        assert_eq!(summary.node_count, 2);
        assert_eq!(
            rows(&summary),
            vec![("Trigger", "webhook"), ("Unnamed Node", "agent")]
        );
    }

    #[test]
    fn test_summarize_empty() {
        let wf = WorkflowDescriptor::from_slice(b"{}").unwrap();
        let summary = summarize(&wf);
        assert_eq!(summary.name, "Unknown");
        assert_eq!(summary.node_count, 0);
        assert!(summary.nodes.is_empty());
    }

    #[test]
    fn test_node_count_matches_length() {
        let nodes: Vec<String> = (0..17)
            .map(|i| format!(r#"{{"name": "n{}"}}"#, i))
            .collect();
        let doc = format!(r#"{{"nodes": [{}]}}"#, nodes.join(","));
        let wf = WorkflowDescriptor::from_slice(doc.as_bytes()).unwrap();

        let summary = summarize(&wf);
        assert_eq!(summary.node_count, 17);
        assert_eq!(summary.nodes[16].name, "n16");
    }

    #[test]
    fn test_summary_json_uses_type_key() {
        let wf = WorkflowDescriptor::from_slice(br#"{"nodes": [{"type": "agent"}]}"#).unwrap();
        let json = serde_json::to_value(summarize(&wf)).unwrap();
        assert_eq!(json["nodes"][0]["type"], "agent");
        assert_eq!(json["node_count"], 1);
    }
}
