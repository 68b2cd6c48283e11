use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str::FromStr,
};

use log::trace;

use crate::{
    cost::{Cost, CostModel},
    errors::{Result, ScoalaError},
    graph::{AdjArray, GraphEdgeEditing, Node, NumEdges, NumNodes},
};

/// Splits a line-based reader into whitespace separated tokens; line breaks carry
/// no meaning.
pub struct TokenReader<R> {
    lines: Lines<R>,
    tokens: std::vec::IntoIter<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            tokens: Vec::new().into_iter(),
        }
    }

    /// Returns the next token or `None` at the end of the stream
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.tokens.next() {
                return Ok(Some(token));
            }

            match self.lines.next() {
                None => return Ok(None),
                Some(Err(e)) => return Err(e.into()),
                Some(Ok(line)) => {
                    self.tokens = line
                        .split_whitespace()
                        .map(String::from)
                        .collect::<Vec<_>>()
                        .into_iter()
                }
            }
        }
    }

    /// Parses the next token; `expected` names the value in error messages
    pub fn parse_next<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self
            .next_token()?
            .ok_or(ScoalaError::TruncatedInput { expected })?;

        token
            .parse()
            .map_err(|_| ScoalaError::InvalidToken { expected, token })
    }
}

/// First line of a test case
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseHeader {
    pub cities: NumNodes,
    pub roads: NumEdges,
    pub costs: CostModel,
}

/// One fully read test case
#[derive(Clone, Debug)]
pub struct Case {
    pub graph: AdjArray,
    pub costs: CostModel,
}

/// Reads a batch: the number of cases followed by the cases themselves. Cases are
/// materialized one at a time, so only a single graph is held in memory.
pub struct CaseReader<R> {
    tokens: TokenReader<R>,
    number_of_cases: u64,
    cases_read: u64,
    failed: bool,
}

impl<R: BufRead> CaseReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut tokens = TokenReader::new(reader);
        let number_of_cases = tokens.parse_next("number of cases")?;

        Ok(Self {
            tokens,
            number_of_cases,
            cases_read: 0,
            failed: false,
        })
    }

    pub fn number_of_cases(&self) -> u64 {
        self.number_of_cases
    }

    pub fn cases_read(&self) -> u64 {
        self.cases_read
    }

    /// Reads the next case, or returns `None` once all announced cases were read
    pub fn read_case(&mut self) -> Result<Option<Case>> {
        if self.cases_read == self.number_of_cases {
            return Ok(None);
        }

        let header = self.read_header()?;
        let graph = self.read_roads(&header)?;
        self.cases_read += 1;

        trace!(
            "read case {} with n={} m={}",
            self.cases_read, header.cities, header.roads
        );

        Ok(Some(Case {
            graph,
            costs: header.costs,
        }))
    }

    fn read_header(&mut self) -> Result<CaseHeader> {
        let cities = self.tokens.parse_next("Header>Number of cities")?;
        let roads = self.tokens.parse_next("Header>Number of roads")?;
        let road_cost: Cost = self.tokens.parse_next("Header>Road cost")?;
        let school_cost: Cost = self.tokens.parse_next("Header>School cost")?;

        Ok(CaseHeader {
            cities,
            roads,
            costs: CostModel::new(road_cost, school_cost),
        })
    }

    fn read_roads(&mut self, header: &CaseHeader) -> Result<AdjArray> {
        let mut graph = AdjArray::try_new(header.cities)?;

        for _ in 0..header.roads {
            let u: i64 = self.tokens.parse_next("Source city")?;
            let v: i64 = self.tokens.parse_next("Target city")?;

            let in_range = |x: i64| (1..=header.cities as i64).contains(&x);
            if !in_range(u) || !in_range(v) {
                return Err(ScoalaError::InvalidEdgeEndpoint {
                    u,
                    v,
                    n: header.cities,
                });
            }

            graph.try_add_edge((u - 1) as Node, (v - 1) as Node)?;
        }

        Ok(graph)
    }
}

impl CaseReader<BufReader<File>> {
    pub fn try_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        Self::try_new(BufReader::new(reader))
    }
}

/// Yields cases until all announced cases were read or the first error occurred
impl<R: BufRead> Iterator for CaseReader<R> {
    type Item = Result<Case>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.read_case().transpose();
        self.failed = matches!(result, Some(Err(_)));
        result
    }
}
