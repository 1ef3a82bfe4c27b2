// disjoint set union over clique graph nodes, used by Kruskal
// See: https://www.cs.princeton.edu/~wayne/kleinberg-tardos/pdf/UnionFind-2x2.pdf

#[derive(Debug)]
pub(crate) struct DisjointSetUnion {
    parents: Vec<usize>,
    ranks: Vec<usize>,
    nsets: usize,
}

impl DisjointSetUnion {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
            nsets: n,
        }
    }

    // returns false if x and y were already joined
    pub(crate) fn union(&mut self, x: usize, y: usize) -> bool {
        let r = self.root(x);
        let s = self.root(y);

        if r == s {
            return false;
        }

        match self.ranks[r].cmp(&self.ranks[s]) {
            std::cmp::Ordering::Greater => {
                self.parents[s] = r;
            }
            std::cmp::Ordering::Less => {
                self.parents[r] = s;
            }
            std::cmp::Ordering::Equal => {
                self.parents[r] = s;
                self.ranks[s] += 1;
            }
        }
        self.nsets -= 1;
        true
    }

    #[cfg(test)]
    pub(crate) fn in_same_set(&mut self, x: usize, y: usize) -> bool {
        self.root(x) == self.root(y)
    }

    // number of disjoint sets remaining
    pub(crate) fn nsets(&self) -> usize {
        self.nsets
    }

    fn root(&mut self, x: usize) -> usize {
        let mut x = x;
        while x != self.parents[x] {
            self.parents[x] = self.parents[self.parents[x]]; //path halving
            x = self.parents[x];
        }
        x
    }
}

#[test]
fn test_union() {
    let mut dsu = DisjointSetUnion::new(5);
    assert!(dsu.union(0, 1));
    assert!(dsu.union(2, 3));
    assert!(dsu.union(1, 2));
    assert!(dsu.in_same_set(0, 2));
    assert!(dsu.in_same_set(1, 3));
    assert!(!dsu.in_same_set(4, 2));
    assert_eq!(dsu.nsets(), 2);

    // repeated union is rejected
    assert!(!dsu.union(3, 0));
    assert!(!dsu.union(4, 4));
    assert_eq!(dsu.nsets(), 2);
}

#[test]
fn test_root() {
    let mut dsu = DisjointSetUnion::new(10);
    dsu.union(0, 1);
    dsu.union(2, 3);
    dsu.union(1, 2);
    let common = dsu.root(2);
    assert_eq!(dsu.root(0), common);
    assert_eq!(dsu.root(3), common);
    assert_eq!(dsu.root(4), 4);
    assert_eq!(dsu.nsets(), 7);
}
