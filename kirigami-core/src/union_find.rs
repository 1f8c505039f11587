//! Union-find (disjoint set union) used to read clusters out of a
//! committed graph.
//!
//! Once the solver has committed every edge, the clusters are the
//! connected components of the Permanent-edge subgraph. This module
//! provides the union-find structure used to collect those components and
//! relabel them with contiguous identifiers.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    pub(crate) fn union(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return left;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        left
    }

    /// Collapses the sets into contiguous labels assigned in order of each
    /// set's first member, so vertex 0 always lands in cluster 0.
    pub(crate) fn component_labels(mut self) -> (Vec<usize>, usize) {
        let n = self.parent.len();
        let mut label_of_root = vec![usize::MAX; n];
        let mut labels = Vec::with_capacity(n);
        let mut next = 0;
        for node in 0..n {
            let root = self.find(node);
            if label_of_root[root] == usize::MAX {
                label_of_root[root] = next;
                next += 1;
            }
            labels.push(label_of_root[root]);
        }
        (labels, next)
    }
}
