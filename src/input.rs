use crate::error::{Error, Result};
use crate::graph::{Graph, empty_rows};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// Reads a graph stored as adjacency lists.
///
/// - first line holds the number of vertices `n`,
/// - line `i + 1` lists the neighbours of vertex `i`, separated by whitespace,
/// - missing trailing lines mean vertices without neighbours.
///
/// Adjacency must be symmetric: if `u` lists `v`, `v` lists `u` as many times.
///
/// Example input (a triangle):
/// ```text
/// 3
/// 1 2
/// 0 2
/// 0 1
/// ```
pub fn from_file(path: &str) -> Result<Graph> {
    let file = File::open(path)?;
    parse_adjacency_format(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Graph> {
    parse_adjacency_format(BufReader::new(Cursor::new(input)))
}

/// Reads a graph given as an edge list.
///
/// - one line, one edge in format "u,v",
/// - vertices are numbered from 0, `n` is the largest id plus one.
///
/// Example input:
/// ```text
/// 0,1
/// 1,2
/// 2,0
/// ```
pub fn from_edge_list_file(path: &str) -> Result<Graph> {
    let file = File::open(path)?;
    parse_edge_list_format(BufReader::new(file))
}

/// This is equivalent to [`from_edge_list_file`], but takes string as an input.
pub fn from_edge_list_str(input: &str) -> Result<Graph> {
    parse_edge_list_format(BufReader::new(Cursor::new(input)))
}

fn parse_vertex(token: &str, line: usize) -> Result<usize> {
    token.trim().parse().map_err(|_| Error::Parse {
        line,
        message: format!("'{}' is not a vertex id", token.trim()),
    })
}

fn parse_adjacency_format<R: BufRead>(reader: R) -> Result<Graph> {
    let mut lines = reader.lines().enumerate();

    let n = loop {
        match lines.next() {
            Some((i, line)) => {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                break parse_vertex(&line, i + 1)?;
            }
            None => {
                return Err(Error::Parse {
                    line: 1,
                    message: "missing vertex count".to_string(),
                });
            }
        }
    };

    let mut adjacency = empty_rows(n)?;
    let mut v = 0;
    for (i, line) in lines {
        let line = line?;
        if line.trim().is_empty() && v >= n {
            continue;
        }
        if v >= n {
            return Err(Error::OutOfRange {
                vertex: v,
                vertex_count: n,
            });
        }
        for token in line.split_whitespace() {
            adjacency[v].push(parse_vertex(token, i + 1)?);
        }
        v += 1;
    }

    Graph::new(n, adjacency)
}

fn parse_edge_list_format<R: BufRead>(reader: R) -> Result<Graph> {
    let mut edges = Vec::new();
    let mut n = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<_> = line.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::Parse {
                line: i + 1,
                message: "wrong format, expected 'u,v' for an edge".to_string(),
            });
        }
        let u = parse_vertex(parts[0], i + 1)?;
        let v = parse_vertex(parts[1], i + 1)?;
        let largest = u.max(v);
        let needed = largest.checked_add(1).ok_or(Error::OutOfRange {
            vertex: largest,
            vertex_count: usize::MAX,
        })?;
        n = n.max(needed);
        edges.push((u, v));
    }

    Graph::from_edges(n, &edges)
}
