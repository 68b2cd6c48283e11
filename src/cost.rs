use crate::graph::NumNodes;

pub type Cost = i64;

/// Unit prices of one test case
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CostModel {
    pub road_cost: Cost,
    pub school_cost: Cost,
}

/// The cheaper of the two ways to give every city access to a school
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    /// No roads; every city builds its own school
    SchoolInEveryCity { cities: NumNodes, school_cost: Cost },

    /// One school per connected component and a spanning tree of roads in each
    SchoolPerComponent {
        cities: NumNodes,
        components: NumNodes,
        road_cost: Cost,
        school_cost: Cost,
    },
}

impl CostModel {
    pub fn new(road_cost: Cost, school_cost: Cost) -> Self {
        Self {
            road_cost,
            school_cost,
        }
    }

    /// Picks the plan for `cities` cities split into `components` connected components.
    /// Roads are only skipped if strictly more expensive than schools.
    pub fn plan(&self, cities: NumNodes, components: NumNodes) -> Plan {
        debug_assert!(components <= cities);

        if self.road_cost > self.school_cost {
            Plan::SchoolInEveryCity {
                cities,
                school_cost: self.school_cost,
            }
        } else {
            Plan::SchoolPerComponent {
                cities,
                components,
                road_cost: self.road_cost,
                school_cost: self.school_cost,
            }
        }
    }

    pub fn total_cost(&self, cities: NumNodes, components: NumNodes) -> Cost {
        self.plan(cities, components).cost()
    }
}

impl Plan {
    /// Number of schools built
    pub fn schools(&self) -> NumNodes {
        match *self {
            Plan::SchoolInEveryCity { cities, .. } => cities,
            Plan::SchoolPerComponent { components, .. } => components,
        }
    }

    /// Number of roads built; a component of size s needs exactly s - 1 of them
    pub fn roads(&self) -> NumNodes {
        match *self {
            Plan::SchoolInEveryCity { .. } => 0,
            Plan::SchoolPerComponent {
                cities, components, ..
            } => cities - components,
        }
    }

    pub fn cost(&self) -> Cost {
        match *self {
            Plan::SchoolInEveryCity {
                cities,
                school_cost,
            } => school_cost * cities as Cost,
            Plan::SchoolPerComponent {
                cities,
                components,
                road_cost,
                school_cost,
            } => school_cost * components as Cost + (cities - components) as Cost * road_cost,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn schools_only_if_roads_are_more_expensive() {
        let model = CostModel::new(5, 2);
        for components in 1..=3 {
            let plan = model.plan(3, components);
            assert!(matches!(plan, Plan::SchoolInEveryCity { .. }));
            assert_eq!(plan.cost(), 6);
            assert_eq!(plan.schools(), 3);
            assert_eq!(plan.roads(), 0);
        }
    }

    #[test]
    fn connected_with_cheap_roads() {
        let plan = CostModel::new(2, 5).plan(4, 1);
        assert_eq!(plan.schools(), 1);
        assert_eq!(plan.roads(), 3);
        assert_eq!(plan.cost(), 11);
    }

    #[test]
    fn tie_builds_roads() {
        let model = CostModel::new(3, 3);
        let plan = model.plan(5, 3);
        assert!(matches!(plan, Plan::SchoolPerComponent { .. }));
        assert_eq!(plan.roads(), 2);
        assert_eq!(model.total_cost(5, 3), 15);
    }

    #[test]
    fn formula() {
        for road in 0..6 {
            for school in 0..6 {
                let model = CostModel::new(road, school);
                for n in 1..8 {
                    for c in 1..=n {
                        let expected = if road > school {
                            school * n as Cost
                        } else {
                            school * c as Cost + (n - c) as Cost * road
                        };
                        assert_eq!(model.total_cost(n, c), expected);
                        assert!(model.total_cost(n, c) <= school * n as Cost);
                    }
                }
            }
        }
    }

    #[test]
    fn large_values_fit() {
        let model = CostModel::new(1_000_000, 1_000_000_000);
        assert_eq!(model.total_cost(100_000, 1), 1_000_000_000 + 99_999 * 1_000_000);
    }
}
