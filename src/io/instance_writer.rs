use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    cost::CostModel,
    graph::{AdjArray, Edge, GraphEdgeOrder, GraphNodeOrder},
};

/// Serializes cases in the batch input format: the number of cases, then per case
/// the header `n m roadCost schoolCost` followed by one `u v` line per road.
pub trait InstanceWriter {
    fn try_write_batch<'a, W: Write>(
        cases: impl ExactSizeIterator<Item = (&'a AdjArray, CostModel)>,
        writer: W,
    ) -> Result<(), std::io::Error>;

    fn try_write_batch_file<'a, P: AsRef<Path>>(
        cases: impl ExactSizeIterator<Item = (&'a AdjArray, CostModel)>,
        path: P,
    ) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        Self::try_write_batch(cases, writer)
    }

    fn try_write_case<W: Write>(
        &self,
        costs: CostModel,
        writer: W,
    ) -> Result<(), std::io::Error>;
}

impl InstanceWriter for AdjArray {
    fn try_write_batch<'a, W: Write>(
        cases: impl ExactSizeIterator<Item = (&'a AdjArray, CostModel)>,
        mut writer: W,
    ) -> Result<(), std::io::Error> {
        writeln!(writer, "{}", cases.len())?;
        for (graph, costs) in cases {
            graph.try_write_case(costs, &mut writer)?;
        }
        writer.flush()
    }

    fn try_write_case<W: Write>(
        &self,
        costs: CostModel,
        mut writer: W,
    ) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "{} {} {} {}",
            self.number_of_nodes(),
            self.number_of_edges(),
            costs.road_cost,
            costs.school_cost
        )?;

        for Edge(u, v) in self.edges() {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{errors::Result, graph::*, io::CaseReader};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use regex::Regex;

    #[test]
    fn hard_coded() {
        let mut graph = AdjArray::new(4);
        graph.add_edge(0, 1);
        graph.add_edge(3, 2);

        let output = {
            let mut buffer: Vec<u8> = Vec::new();
            graph
                .try_write_case(CostModel::new(2, 7), &mut buffer)
                .expect("Failed to write");
            String::from_utf8(buffer).unwrap()
        };

        assert!(Regex::new(r"^4\s2\s2\s7\n").unwrap().is_match(output.as_str()));
        assert!(
            Regex::new(r"\n1\s2\n").unwrap().is_match(output.as_str()),
            "Output: {output}"
        );
        assert!(
            Regex::new(r"\n3\s4\n").unwrap().is_match(output.as_str()),
            "Output: {output}"
        );
    }

    #[test]
    fn transcribe() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        let graphs = (1..40)
            .map(|n| {
                let p = rng.gen_range(0.01..0.5);
                AdjArray::random_gnp(&mut rng, n, p)
            })
            .collect_vec();
        let costs = graphs
            .iter()
            .map(|_| CostModel::new(rng.gen_range(0..100), rng.gen_range(0..100)))
            .collect_vec();

        let mut buffer: Vec<u8> = Vec::new();
        AdjArray::try_write_batch(graphs.iter().zip(costs.iter().copied()), &mut buffer)
            .expect("Failed to write");

        let read = CaseReader::try_new(buffer.as_slice())
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .expect("Failed to read");

        assert_eq!(read.len(), graphs.len());
        for ((org, costs), case) in graphs.iter().zip(costs).zip(read) {
            assert_eq!(org.number_of_nodes(), case.graph.number_of_nodes());
            assert_eq!(costs, case.costs);
            assert_eq!(
                org.edges().sorted().collect_vec(),
                case.graph.edges().sorted().collect_vec()
            );
        }
    }
}
