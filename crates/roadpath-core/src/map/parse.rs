//! Grid map text format
//!
//! ```text
//! 1          scale
//! 0          start node
//! 8          destination node
//! 3          width (nodes per row)
//! 3          length (node rows)
//! 1          private road budget
//! 0          construction road budget
//! +P+V+
//! CBPBB
//! +P+P+
//! PBBBC
//! +V+P+
//! ```
//!
//! Even grid lines are node rows: `+` at every even column, the road to the
//! right neighbour at every odd column. Odd grid lines are road rows: the
//! road to the node below at every even column. Road codes are `P` public,
//! `V` private and `C` construction; anything else means no road.

use crate::bail_map;
use crate::error::{Result, RoadpathError};
use crate::graph::{Graph, RoadKind, SearchBudget};

const HEADER_FIELDS: [&str; 7] = [
    "scale",
    "start node",
    "destination node",
    "width",
    "length",
    "private road budget",
    "construction road budget",
];

/// Values read from the seven header lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    pub scale: usize,
    pub start: usize,
    pub destination: usize,
    pub width: usize,
    pub length: usize,
    pub budget: SearchBudget,
}

impl MapHeader {
    /// Total node count, or `None` on overflow
    pub fn node_count(&self) -> Option<usize> {
        self.width.checked_mul(self.length)
    }
}

/// Parse the header and build the graph described by the grid
pub fn parse_map(content: &str, max_nodes: usize) -> Result<(MapHeader, Graph)> {
    let mut lines = content.lines().enumerate();

    let mut values = [0usize; 7];
    for (field, slot) in HEADER_FIELDS.iter().zip(values.iter_mut()) {
        let Some((index, line)) = lines.next() else {
            return Err(RoadpathError::invalid_map(
                content.lines().count() + 1,
                format!("missing {}", field),
            ));
        };
        let text = line.trim();
        *slot = text.parse().map_err(|_| {
            RoadpathError::invalid_map(
                index + 1,
                format!("expected {} as a non-negative integer, found '{}'", field, text),
            )
        })?;
    }

    let [scale, start, destination, width, length, max_private, max_construction] = values;
    let header = MapHeader {
        scale,
        start,
        destination,
        width,
        length,
        budget: SearchBudget::new(max_private, max_construction),
    };

    if width == 0 || length == 0 {
        bail_map!(4, "map must have at least one row and one column");
    }
    let nodes = header.node_count().ok_or(RoadpathError::MapTooLarge {
        nodes: usize::MAX,
        limit: max_nodes,
    })?;
    if nodes > max_nodes {
        return Err(RoadpathError::MapTooLarge {
            nodes,
            limit: max_nodes,
        });
    }

    // Every node row spans 2*width-1 characters; the grid has 2*length-1 lines
    let Some(row_chars) = width.checked_mul(2).map(|n| n - 1) else {
        bail_map!(4, "width {} is too large", width);
    };
    let Some(expected) = length.checked_mul(2).map(|n| n - 1) else {
        bail_map!(5, "length {} is too large", length);
    };

    let grid: Vec<(usize, &str)> = lines.map(|(i, line)| (i + 1, line.trim_end())).collect();
    let used = grid
        .iter()
        .rposition(|(_, line)| !line.is_empty())
        .map_or(0, |last| last + 1);
    if used < expected {
        bail_map!(
            HEADER_FIELDS.len() + used + 1,
            "expected {} grid lines, found {}",
            expected,
            used
        );
    }
    if used > expected {
        let (line_no, _) = grid[expected];
        bail_map!(line_no, "unexpected content after the last node row");
    }

    let mut graph = Graph::new(nodes);
    for row in 0..length {
        let (line_no, line) = grid[2 * row];
        let cells: Vec<char> = line.chars().collect();
        read_node_row(&mut graph, &cells, line_no, row, width)?;

        if row + 1 < length {
            let (line_no, below) = grid[2 * row + 1];
            let cells: Vec<char> = below.chars().collect();
            if cells.len() > row_chars {
                bail_map!(
                    line_no,
                    "road row {} is longer than {} character(s)",
                    row,
                    row_chars
                );
            }
            read_road_row(&mut graph, &cells, row, width)?;
        }
    }

    tracing::debug!(
        width,
        length,
        edges = graph.edge_count(),
        "map_parsed"
    );
    Ok((header, graph))
}

fn read_node_row(
    graph: &mut Graph,
    cells: &[char],
    line_no: usize,
    row: usize,
    width: usize,
) -> Result<()> {
    let found = cells.iter().step_by(2).take_while(|&&c| c == '+').count();
    if found != width || cells.len() < 2 * width - 1 {
        bail_map!(
            line_no,
            "node row {} has {} node(s), expected {}",
            row,
            found,
            width
        );
    }
    if cells.len() > 2 * width - 1 {
        bail_map!(
            line_no,
            "node row {} has extra characters after the last node",
            row
        );
    }

    for col in 0..width - 1 {
        if let Some(kind) = RoadKind::from_code(cells[2 * col + 1]) {
            let id = row * width + col;
            graph.add_edge(id, id + 1, kind)?;
        }
    }
    Ok(())
}

fn read_road_row(graph: &mut Graph, cells: &[char], row: usize, width: usize) -> Result<()> {
    for col in 0..width {
        let kind = cells.get(2 * col).copied().and_then(RoadKind::from_code);
        if let Some(kind) = kind {
            let id = row * width + col;
            graph.add_edge(id, id + width, kind)?;
        }
    }
    Ok(())
}
