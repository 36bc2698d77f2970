////////////////////////////////////////////////////////////////////////////////

/// Weighted quick-union forest over elements `0..n`.
///
/// Unions attach the smaller tree under the larger one, so every tree has
/// depth at most `log2(n)`. `find_mut` additionally halves the path it walks,
/// which keeps repeated unions near-constant amortized. Read-only queries
/// (`find`, `connected`) walk the tree without touching it.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the set containing `p`.
    ///
    /// # Panics
    ///
    /// If `p` is not less than `len()`.
    pub fn find(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    fn find_mut(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the sets containing `p` and `q`. Returns `false` if they were
    /// already the same set.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let (root_p, root_q) = (self.find_mut(p), self.find_mut(q));
        if root_p == root_q {
            return false;
        }

        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        true
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.count(), 5);
        for p in 0..5 {
            for q in 0..5 {
                assert_eq!(uf.connected(p, q), p == q);
            }
        }
    }

    #[test]
    fn union_is_transitive_and_idempotent() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));
        assert!(!uf.union(3, 3));

        assert!(uf.connected(0, 3));
        assert!(uf.connected(2, 1));
        assert!(!uf.connected(0, 4));
        assert!(!uf.connected(5, 4));
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn depth_stays_logarithmic() {
        let n = 1 << 10;
        let mut uf = UnionFind::new(n);
        for p in 1..n {
            uf.union(p - 1, p);
        }
        assert_eq!(uf.count(), 1);

        let depth = |mut p: usize| {
            let mut d = 0;
            while uf.parent[p] != p {
                p = uf.parent[p];
                d += 1;
            }
            d
        };
        assert!((0..n).map(depth).max().unwrap() <= 10);
    }

    #[test]
    fn empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }
}
