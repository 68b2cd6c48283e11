use crate::graph::*;
use rand::Rng;
use rand_distr::Geometric;

/// Largest `n` for which the `n * n` candidate pairs fit into an `i64`
pub const MAX_GNP_NODES: Node = 3_037_000_499;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert (also, wrongly, known as Erdos-Reyni) graph
    /// The `G(n,p)` contains n nodes and each of the `n(n-1)/2` edges exists
    /// independently with probability `p`.
    /// ** Panics if n > [`MAX_GNP_NODES`] **
    fn random_gnp<R: Rng>(rng: &mut R, n: Node, p: f64) -> Self;

    /// Same as [`GnpGenerator::random_gnp`] with `p` chosen such that the expected
    /// degree of each node is `avg_deg`
    fn random_gnp_with_avg_deg<R: Rng>(rng: &mut R, n: Node, avg_deg: f64) -> Self {
        let p = if n > 1 {
            (avg_deg / (n - 1) as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self::random_gnp(rng, n, p)
    }
}

impl<G> GnpGenerator for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn random_gnp<R: Rng>(rng: &mut R, n: Node, p: f64) -> Self {
        assert!(n <= MAX_GNP_NODES, "G(n,p) limited to {MAX_GNP_NODES} nodes, got {n}");
        let pairs = (n as i64) * (n as i64);

        let mut result = Self::new(n);

        let edges: Vec<_> = BernoulliSamplingRange::new(rng, 0, pairs, p)
            .filter_map(|x| {
                let u = x / (n as i64);
                let v = x % (n as i64);
                (u < v).then_some((u as Node, v as Node))
            })
            .collect();

        result.add_edges(edges);

        result
    }
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Geometric,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin - 1,
            end,
            distr: Geometric::new(prob.clamp(0.0, 1.0)).expect("probability within [0, 1]"),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let skip = self.rng.sample(self.distr);
        if skip > i64::MAX as u64 {
            self.current = self.end;
        } else {
            self.current += 1;
            self.current = match self.current.checked_add(skip as i64) {
                Some(x) => x,
                None => self.end,
            }
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}
