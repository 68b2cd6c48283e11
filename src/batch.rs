use std::io::{BufRead, Write};

use log::{Level, debug, info, log_enabled, trace};

use crate::{
    cost::{Cost, CostModel, Plan},
    errors::Result,
    graph::{AdjArray, Connectivity, GraphEdgeOrder, GraphNodeOrder, NumNodes},
    io::{Case, CaseReader, CostWriter},
};

/// Outcome of a single case
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseReport {
    pub components: NumNodes,
    pub plan: Plan,
}

impl CaseReport {
    pub fn cost(&self) -> Cost {
        self.plan.cost()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub cases: u64,
    pub total_cost: Cost,
}

/// Counts the components of `graph` and prices the cheaper plan
pub fn solve(graph: &AdjArray, costs: CostModel) -> CaseReport {
    let components = graph.number_of_connected_components();
    CaseReport {
        components,
        plan: costs.plan(graph.number_of_nodes(), components),
    }
}

pub fn solve_case(case: &Case) -> CaseReport {
    solve(&case.graph, case.costs)
}

/// Reads all cases from `reader` and writes one cost per line to `writer`.
/// Each graph is dropped before the next case is read. If a case cannot be read,
/// the costs computed so far are flushed before the error is returned.
pub fn run_batch<R: BufRead, W: Write>(reader: R, writer: W) -> Result<BatchSummary> {
    let mut cases = CaseReader::try_new(reader)?;
    let mut output = CostWriter::new(writer);
    let mut summary = BatchSummary::default();

    info!("Start batch with {} cases", cases.number_of_cases());

    let result = process_cases(&mut cases, &mut output, &mut summary);
    output.flush()?;
    result?;

    info!(
        "Finished {} cases; total cost {}",
        summary.cases, summary.total_cost
    );

    Ok(summary)
}

fn process_cases<R: BufRead, W: Write>(
    cases: &mut CaseReader<R>,
    output: &mut CostWriter<W>,
    summary: &mut BatchSummary,
) -> Result<()> {
    while let Some(case) = cases.read_case()? {
        if log_enabled!(Level::Trace) {
            trace!("{}", case.graph);
        }

        let report = solve_case(&case);
        debug!(
            "Case {}: n={} m={} components={} schools={} roads={} cost={}",
            cases.cases_read(),
            case.graph.number_of_nodes(),
            case.graph.number_of_edges(),
            report.components,
            report.plan.schools(),
            report.plan.roads(),
            report.cost()
        );

        output.write_cost(report.cost())?;
        summary.cases += 1;
        summary.total_cost += report.cost();
    }

    Ok(())
}
