use std::{
    fmt::Display,
    time::{Duration, Instant},
};

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::metric::Metric;
    use crate::search::dijkstra::Dijkstra;
    use crate::util::test_graphs::generate_city_graph;

    #[test]
    fn stats_work() {
        let g = generate_city_graph();

        let mut d = Dijkstra::new(&g);
        let source = g.node_index("Mumbai").unwrap();
        d.compute(source, Metric::Distance).unwrap();

        assert!(d.stats.duration.is_some());

        // Every city is reachable, each settled exactly once
        assert_eq!(d.stats.nodes_settled, 7);
    }
}
