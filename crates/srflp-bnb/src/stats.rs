// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Counters collected by a single worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStatistics {
    /// Nodes entered, including the root of the worker's subtree.
    pub nodes_visited: u64,
    /// Subtrees cut because their partial cost reached the local bound.
    pub nodes_pruned: u64,
    /// Complete layouts that lowered the shared incumbent.
    pub improvements: u64,
}

impl WorkerStatistics {
    #[inline(always)]
    pub fn on_node_visited(&mut self) {
        self.nodes_visited = self.nodes_visited.saturating_add(1);
    }

    #[inline(always)]
    pub fn on_pruned(&mut self) {
        self.nodes_pruned = self.nodes_pruned.saturating_add(1);
    }

    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }
}

impl std::ops::AddAssign for WorkerStatistics {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes_visited = self.nodes_visited.saturating_add(rhs.nodes_visited);
        self.nodes_pruned = self.nodes_pruned.saturating_add(rhs.nodes_pruned);
        self.improvements = self.improvements.saturating_add(rhs.improvements);
    }
}

impl std::iter::Sum for WorkerStatistics {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}

impl<'a> std::iter::Sum<&'a WorkerStatistics> for WorkerStatistics {
    fn sum<I: Iterator<Item = &'a WorkerStatistics>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl std::fmt::Display for WorkerStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "visited: {}, pruned: {}, improvements: {}",
            self.nodes_visited, self.nodes_pruned, self.improvements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::WorkerStatistics;

    #[test]
    fn test_counters_increment() {
        let mut s = WorkerStatistics::default();
        s.on_node_visited();
        s.on_node_visited();
        s.on_pruned();
        s.on_improvement();
        assert_eq!(
            s,
            WorkerStatistics {
                nodes_visited: 2,
                nodes_pruned: 1,
                improvements: 1
            }
        );
    }

    #[test]
    fn test_counters_saturate() {
        let mut s = WorkerStatistics {
            nodes_visited: u64::MAX,
            ..Default::default()
        };
        s.on_node_visited();
        assert_eq!(s.nodes_visited, u64::MAX);
    }

    #[test]
    fn test_sum_over_workers() {
        let workers = [
            WorkerStatistics {
                nodes_visited: 10,
                nodes_pruned: 3,
                improvements: 1,
            },
            WorkerStatistics {
                nodes_visited: 5,
                nodes_pruned: 2,
                improvements: 0,
            },
        ];
        let total: WorkerStatistics = workers.iter().sum();
        assert_eq!(total.nodes_visited, 15);
        assert_eq!(total.nodes_pruned, 5);
        assert_eq!(total.improvements, 1);
        assert_eq!(total.to_string(), "visited: 15, pruned: 5, improvements: 1");
    }
}
