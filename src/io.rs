use crate::error::{Error, Result};
use crate::graph::UndirectedGraph;
use crate::vertexset::VertexSetLike;
use crate::{Edge, Vertex};

use serde::{Deserialize, Serialize};

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};

/// Reads an edge list: one `v w` pair per line, further columns ignored.
/// Blank lines and lines starting with `#` are skipped, except that a
/// `# order N` line makes the graph at least `N` vertices large.
/// Otherwise the order is one more than the largest vertex id.
pub fn parse_edge_list<S: VertexSetLike, R: BufRead>(reader: R) -> Result<UndirectedGraph<S>> {
    let mut order = 0;
    let mut edges: Vec<Edge> = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let parse_error = |msg: String| Error::Parse { line: i + 1, msg };
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(n) = comment.trim().strip_prefix("order") {
                let n: usize = n
                    .trim()
                    .parse()
                    .map_err(|e| parse_error(format!("bad order: {}", e)))?;
                order = order.max(n);
            }
            continue;
        }
        let mut vw = line.split_whitespace();
        let (v, w) = match (vw.next(), vw.next()) {
            (None, _) => continue,
            (Some(v), Some(w)) => (v, w),
            (Some(_), None) => return Err(parse_error("expected two vertices".to_string())),
        };
        let parse_vertex = |s: &str| {
            s.parse::<Vertex>()
                .map_err(|e| parse_error(format!("bad vertex `{}`: {}", s, e)))
        };
        let edge = [parse_vertex(v)?, parse_vertex(w)?];
        order = order.max(edge[0] as usize + 1).max(edge[1] as usize + 1);
        edges.push(edge);
    }
    UndirectedGraph::from_edges(order, &edges)
}

pub fn read_edge_list<S: VertexSetLike>(fname: &str) -> Result<UndirectedGraph<S>> {
    let file = File::open(fname)?;
    parse_edge_list(BufReader::new(file))
}

pub fn write_edge_list<S, W>(mut writer: W, graph: &UndirectedGraph<S>) -> Result<()>
where
    S: VertexSetLike,
    W: Write,
{
    writeln!(writer, "# order {}", graph.order())?;
    for [v, w] in graph.edges() {
        writeln!(writer, "{} {}", w, v)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_edge_list<S: VertexSetLike>(fname: &str, graph: &UndirectedGraph<S>) -> Result<()> {
    write_edge_list(BufWriter::new(File::create(fname)?), graph)
}

#[derive(Debug, Serialize, Deserialize)]
struct GraphRecord {
    order: usize,
    edges: Vec<Edge>,
}

/// Stores the graph in bincode, much faster to load than an edge list.
pub fn save_graph<S: VertexSetLike>(fname: &str, graph: &UndirectedGraph<S>) -> Result<()> {
    let record = GraphRecord {
        order: graph.order(),
        edges: graph.edges(),
    };
    let mut writer = BufWriter::new(File::create(fname)?);
    bincode::serialize_into(&mut writer, &record)?;
    writer.flush()?;
    Ok(())
}

pub fn load_graph<S: VertexSetLike>(fname: &str) -> Result<UndirectedGraph<S>> {
    let reader = BufReader::new(File::open(fname)?);
    let record: GraphRecord = bincode::deserialize_from(reader)?;
    UndirectedGraph::from_edges(record.order, &record.edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertexset::IndexVertexSet;

    #[test]
    fn parse() {
        let text = "# a path\n0 1\n\n1 2 1.0\n  2 3\n";
        let g: UndirectedGraph = parse_edge_list(text.as_bytes()).unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(g.size(), 3);
        assert_eq!(g.degree(1), 2);
    }

    #[test]
    fn parse_order_header() {
        let text = "# order 10\n0 1\n";
        let g: UndirectedGraph<IndexVertexSet> = parse_edge_list(text.as_bytes()).unwrap();
        assert_eq!(g.order(), 10);
        assert_eq!(g.size(), 1);
        let g: UndirectedGraph = parse_edge_list("".as_bytes()).unwrap();
        assert_eq!(g.order(), 0);
    }

    #[test]
    fn parse_errors() {
        let r: Result<UndirectedGraph> = parse_edge_list("0 1\n2\n".as_bytes());
        assert!(matches!(r, Err(Error::Parse { line: 2, .. })));
        let r: Result<UndirectedGraph> = parse_edge_list("0 x\n".as_bytes());
        assert!(matches!(r, Err(Error::Parse { line: 1, .. })));
        let r: Result<UndirectedGraph> = parse_edge_list("# order many\n".as_bytes());
        assert!(matches!(r, Err(Error::Parse { line: 1, .. })));
        let r: Result<UndirectedGraph> = parse_edge_list("3 3\n".as_bytes());
        assert!(matches!(r, Err(Error::SelfLoop(3))));
    }

    #[test]
    fn write_then_parse() {
        let g: UndirectedGraph = crate::examples::sample();
        let mut buf = vec![];
        write_edge_list(&mut buf, &g).unwrap();
        let h: UndirectedGraph = parse_edge_list(&buf[..]).unwrap();
        assert_eq!(h.order(), g.order());
        assert_eq!(h.edges(), g.edges());
    }

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bron-kerbosch-{}-{}", std::process::id(), name))
    }

    #[test]
    fn edge_list_file() {
        let g: UndirectedGraph = crate::examples::sample();
        let path = temp_file("sample.txt");
        let fname = path.to_str().unwrap();
        save_edge_list(fname, &g).unwrap();
        let h: UndirectedGraph<IndexVertexSet> = read_edge_list(fname).unwrap();
        std::fs::remove_file(&path).unwrap();
        // the isolated vertex 0 survives through the order header
        assert_eq!(h.order(), 8);
        assert_eq!(h.degree(0), 0);
        let mut e = h.edges();
        e.sort();
        let mut f = g.edges();
        f.sort();
        assert_eq!(e, f);
    }

    #[test]
    fn bincode_file() {
        let g: UndirectedGraph = crate::examples::sample();
        let path = temp_file("sample.bin");
        let fname = path.to_str().unwrap();
        save_graph(fname, &g).unwrap();
        let h: UndirectedGraph<IndexVertexSet> = load_graph(fname).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(h.order(), 8);
        assert_eq!(h.size(), g.size());
    }

    #[test]
    fn missing_file() {
        let path = temp_file("missing.txt");
        let r: Result<UndirectedGraph> = read_edge_list(path.to_str().unwrap());
        assert!(matches!(r, Err(Error::Io(_))));
    }
}
