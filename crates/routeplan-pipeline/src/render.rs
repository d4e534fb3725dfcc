//! Text and JSON renderings of route results and of the graph itself.

use routeplan_config::OutputFormat;
use routeplan_core::{RouteOutcome, RouteResult};
use routeplan_graph::{Edge, RoadGraph};
use serde::Serialize;
use std::io::{self, Write};

const NO_CONNECTION_INFO: &str = "Brak informacji o polaczeniu";
const ROUTE_IMPOSSIBLE: &str = "Trasa niemozliwa do wyznaczenia";

/// Renders one result as a `Trasa:` block terminated by a blank line.
pub fn render_result(result: &RouteResult) -> String {
    let header = format!("Trasa: {} --> {}", result.origin, result.destination);
    match result.outcome {
        RouteOutcome::NoConnectionInfo => format!("{} ({})\n\n", header, NO_CONNECTION_INFO),
        RouteOutcome::Unreachable => format!("{} ({})\n\n", header, ROUTE_IMPOSSIBLE),
        RouteOutcome::Resolved => {
            let mut out = format!("{} ({} km):\n", header, result.total.unwrap_or_default());
            for leg in &result.legs {
                out.push_str(&format!("{} --> {} {} km\n", leg.from, leg.to, leg.distance));
            }
            out.push('\n');
            out
        }
    }
}

pub fn write_results<W: Write>(
    mut writer: W,
    results: &[RouteResult],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                writer.write_all(render_result(result).as_bytes())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, results)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()
}

/// Lists every node with its numbered outgoing connections.
pub fn render_graph(graph: &RoadGraph) -> String {
    let mut out = String::new();
    for node in graph.nodes() {
        out.push_str(&format!("Wezel: {}\n", node));
        for (i, edge) in graph.edges_from(node).iter().enumerate() {
            out.push_str(&format!(
                "Polaczenie {}: {} (Odleglosc: {})\n",
                i + 1,
                edge.target,
                edge.weight
            ));
        }
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct GraphNodeView<'a> {
    id: &'a str,
    edges: Vec<Edge>,
}

pub fn graph_to_json(graph: &RoadGraph) -> serde_json::Result<String> {
    let nodes: Vec<GraphNodeView<'_>> = graph
        .nodes()
        .map(|id| GraphNodeView {
            id,
            edges: graph.edges_from(id),
        })
        .collect();
    serde_json::to_string_pretty(&nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeplan_core::{EdgeRecord, Leg, Query};

    #[test]
    fn test_render_resolved() {
        let result = RouteResult::resolved(
            &Query::new("A", "C"),
            vec![Leg::new("A", "B", 5), Leg::new("B", "C", 3)],
            8,
        );
        assert_eq!(
            render_result(&result),
            "Trasa: A --> C (8 km):\nA --> B 5 km\nB --> C 3 km\n\n"
        );
    }

    #[test]
    fn test_render_unresolved() {
        let query = Query::new("B", "A");
        assert_eq!(
            render_result(&RouteResult::unreachable(&query)),
            "Trasa: B --> A (Trasa niemozliwa do wyznaczenia)\n\n"
        );
        assert_eq!(
            render_result(&RouteResult::no_connection_info(&query)),
            "Trasa: B --> A (Brak informacji o polaczeniu)\n\n"
        );
    }

    #[test]
    fn test_render_same_node_route() {
        let result = RouteResult::resolved(&Query::new("A", "A"), Vec::new(), 0);
        assert_eq!(render_result(&result), "Trasa: A --> A (0 km):\n\n");
    }

    #[test]
    fn test_render_graph() {
        let graph = RoadGraph::from_edges(vec![
            EdgeRecord::new("A", "C", 10),
            EdgeRecord::new("A", "B", 5),
        ]);
        assert_eq!(
            render_graph(&graph),
            "Wezel: A\nPolaczenie 1: B (Odleglosc: 5)\nPolaczenie 2: C (Odleglosc: 10)\n\n\
             Wezel: B\n\nWezel: C\n\n"
        );
    }

    #[test]
    fn test_write_json() {
        let results = vec![RouteResult::unreachable(&Query::new("B", "A"))];
        let mut buf = Vec::new();
        write_results(&mut buf, &results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["outcome"], "unreachable");
        assert!(value[0]["total"].is_null());
    }

    #[test]
    fn test_graph_json_lists_edges() {
        let graph = RoadGraph::from_edges(vec![EdgeRecord::new("A", "B", 5)]);
        let value: serde_json::Value = serde_json::from_str(&graph_to_json(&graph).unwrap()).unwrap();
        assert_eq!(value[0]["id"], "A");
        assert_eq!(value[0]["edges"][0]["weight"], 5);
        assert_eq!(value[1]["edges"].as_array().unwrap().len(), 0);
    }
}
