use rand::Rng;

/// Disjoint set (union-find) over cell ids, used transiently while carving a
/// maze. Two ids share a root exactly when the cells they name are connected
/// through passages opened so far.
pub(super) struct DisjointSet {
    parent: Vec<u32>,
}

impl DisjointSet {
    pub(super) fn new(size: u32) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
        }
    }

    /// Root of the set containing `x`, with iterative path compression.
    pub(super) fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Second pass: point everything on the walked chain at the root
        let mut current = x;
        while current != root {
            current = std::mem::replace(&mut self.parent[current as usize], root);
        }
        root
    }

    /// Merges the sets containing `x` and `y`. The link direction is an
    /// unbiased coin flip from `rng` rather than union-by-rank, so the shape
    /// of the resulting spanning tree carries no bias from traversal order.
    /// Returns `false` if the two were already in the same set.
    pub(super) fn union(&mut self, x: u32, y: u32, rng: &mut impl Rng) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        if rng.random::<bool>() {
            self.parent[root_x as usize] = root_y;
        } else {
            self.parent[root_y as usize] = root_x;
        }
        true
    }
}
